use crate::client::Client;
use crate::model::{ApiKey, Operation, SteamId};
use crate::query::{ResponseOptions, SteamQuery};
use crate::resolver::{Resolved, Result};

/// Parameters of [`USER_STATS_FOR_GAME_API`](crate::constants::USER_STATS_FOR_GAME_API)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserStatsForGame {
    steam_id: SteamId,
    app_id: u32,
}

impl UserStatsForGame {
    pub fn new(steam_id: impl Into<SteamId>, app_id: u32) -> Self {
        Self {
            steam_id: steam_id.into(),
            app_id,
        }
    }
}

impl SteamQuery for UserStatsForGame {
    const OPERATION: Operation = Operation::UserStatsForGame;
    fn to_query(&self, api_key: &ApiKey) -> String {
        format!(
            "appid={}&key={}&steamid={}",
            self.app_id,
            api_key.as_str(),
            self.steam_id
        )
    }
}

impl Client {
    /// Uses [`USER_STATS_FOR_GAME_API`](crate::constants::USER_STATS_FOR_GAME_API)
    pub async fn get_user_stats_for_game(
        &self,
        query: UserStatsForGame,
        options: ResponseOptions,
    ) -> Result<Resolved> {
        self.fetch(&query, &options).await
    }
}
