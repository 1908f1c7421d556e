use crate::client::Client;
use crate::model::{ApiKey, Operation, SteamId};
use crate::query::{ResponseOptions, SteamQuery};
use crate::resolver::{Resolved, Result};

/// Parameters of [`RECENTLY_PLAYED_GAMES_API`](crate::constants::RECENTLY_PLAYED_GAMES_API)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecentlyPlayedGames {
    steam_id: SteamId,
    count: Option<u32>,
}

impl RecentlyPlayedGames {
    pub fn new(steam_id: impl Into<SteamId>) -> Self {
        Self {
            steam_id: steam_id.into(),
            count: None,
        }
    }
    /// Limit the number of games, `0` is treated as no limit
    pub const fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }
}

impl SteamQuery for RecentlyPlayedGames {
    const OPERATION: Operation = Operation::RecentlyPlayedGames;
    fn to_query(&self, api_key: &ApiKey) -> String {
        let mut query = format!("key={}&steamid={}", api_key.as_str(), self.steam_id);
        if let Some(count) = self.count.filter(|&count| count != 0) {
            query.push_str(&format!("&count={count}"));
        }
        query
    }
}

impl Client {
    /// Uses [`RECENTLY_PLAYED_GAMES_API`](crate::constants::RECENTLY_PLAYED_GAMES_API)
    pub async fn get_recently_played_games(
        &self,
        query: RecentlyPlayedGames,
        options: ResponseOptions,
    ) -> Result<Resolved> {
        self.fetch(&query, &options).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, ResponseTemplate};

    use super::RecentlyPlayedGames;
    use crate::constants::RECENTLY_PLAYED_GAMES_API;
    use crate::model::{Format, SteamId};
    use crate::query::ResponseOptions;
    use crate::test_util::{serve_json, test_client, TEST_API_KEY};

    const ID: SteamId = SteamId(76561197960434622);

    #[tokio::test]
    async fn query_count_is_optional() {
        let server = wiremock::MockServer::start().await;
        let client = test_client(&server);

        let url = client.url_for(&RecentlyPlayedGames::new(ID), Format::Json);
        assert!(url.ends_with(&format!(
            "/IPlayerService/GetRecentlyPlayedGames/v0001/?key={TEST_API_KEY}\
             &steamid=76561197960434622&format=json"
        )));

        let url = client.url_for(&RecentlyPlayedGames::new(ID).count(2), Format::Json);
        assert!(url.ends_with("&steamid=76561197960434622&count=2&format=json"));

        let url = client.url_for(&RecentlyPlayedGames::new(ID).count(0), Format::Json);
        assert!(!url.contains("count="));
    }

    #[tokio::test]
    async fn returns_response() {
        let server = wiremock::MockServer::start().await;
        let json: Value = load_test_json!("recently_played_games.json");
        serve_json(&server, RECENTLY_PLAYED_GAMES_API, json.clone()).await;
        let client = test_client(&server);

        let resp = client
            .get_recently_played_games(RecentlyPlayedGames::new(ID), ResponseOptions::default())
            .await
            .unwrap();
        assert_eq!(resp.as_json(), Some(&json["response"]));
    }

    #[tokio::test]
    async fn passes_vdf_through() {
        let body = "\"response\"\n{\n\t\"total_count\"\t\t\"0\"\n}\n";
        let server = wiremock::MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(RECENTLY_PLAYED_GAMES_API))
            .and(query_param("format", "vdf"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&server)
            .await;
        let client = test_client(&server);

        let resp = client
            .get_recently_played_games(
                RecentlyPlayedGames::new(ID).count(5),
                ResponseOptions::new().format(Format::Vdf),
            )
            .await
            .unwrap();
        assert_eq!(resp.into_text().as_deref(), Some(body));
    }
}
