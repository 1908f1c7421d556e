use std::borrow::Cow;

use crate::client::Client;
use crate::model::{ApiKey, Operation, SteamId, SteamIdQueryExt};
use crate::query::{ResponseOptions, SteamQuery};
use crate::resolver::{Resolved, Result};

/// Parameters of [`PLAYER_SUMMARIES_API`](crate::constants::PLAYER_SUMMARIES_API)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSummaries<'a> {
    steam_ids: Cow<'a, [SteamId]>,
}

impl<'a> PlayerSummaries<'a> {
    /// The ids are sent in the given order, duplicates included
    pub fn new(steam_ids: impl Into<Cow<'a, [SteamId]>>) -> Self {
        Self {
            steam_ids: steam_ids.into(),
        }
    }
}

impl SteamQuery for PlayerSummaries<'_> {
    const OPERATION: Operation = Operation::PlayerSummaries;
    fn to_query(&self, api_key: &ApiKey) -> String {
        format!(
            "key={}&steamids={}",
            api_key.as_str(),
            self.steam_ids.iter().to_steam_id_string(",")
        )
    }
}

impl Client {
    /// Get the summaries of the profiles with the given [`SteamId`]s
    ///
    /// Uses [`PLAYER_SUMMARIES_API`](crate::constants::PLAYER_SUMMARIES_API)
    pub async fn get_player_summaries(
        &self,
        query: PlayerSummaries<'_>,
        options: ResponseOptions,
    ) -> Result<Resolved> {
        self.fetch(&query, &options).await
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::Value;

    use super::PlayerSummaries;
    use crate::constants::PLAYER_SUMMARIES_API;
    use crate::model::{Format, SteamId, SteamIdStr};
    use crate::query::ResponseOptions;
    use crate::test_util::{serve_json, test_client, TEST_API_KEY};

    #[tokio::test]
    async fn query_joins_ids() {
        let server = wiremock::MockServer::start().await;
        let client = test_client(&server);

        let ids = [SteamId(76561197960435530), SteamId(76561198805665689)];
        let url = client.url_for(&PlayerSummaries::new(&ids[..]), Format::Json);
        assert!(url.ends_with(&format!(
            "/ISteamUser/GetPlayerSummaries/v0002/?key={TEST_API_KEY}\
             &steamids=76561197960435530,76561198805665689&format=json"
        )));
    }

    #[tokio::test]
    async fn deserializes_players() {
        #[derive(Deserialize)]
        struct Player {
            #[serde(rename = "steamid")]
            steam_id: SteamIdStr,
            #[serde(rename = "personaname")]
            persona_name: String,
        }

        let server = wiremock::MockServer::start().await;
        let json: Value = load_test_json!("player_summaries.json");
        serve_json(&server, PLAYER_SUMMARIES_API, json).await;
        let client = test_client(&server);

        let ids = vec![SteamId(76561197960435530)];
        let players: Vec<Player> = client
            .get_player_summaries(
                PlayerSummaries::new(ids),
                ResponseOptions::new().selector("players"),
            )
            .await
            .unwrap()
            .deserialize()
            .unwrap();

        assert_eq!(players.len(), 1);
        assert_eq!(players[0].steam_id.steam_id(), SteamId(76561197960435530));
        assert_eq!(players[0].persona_name, "Robin");
    }
}
