use crate::client::Client;
use crate::model::{ApiKey, Operation, SteamId};
use crate::query::{ResponseOptions, SteamQuery};
use crate::resolver::{Resolved, Result};

/// Parameters of [`PLAYER_ACHIEVEMENTS_API`](crate::constants::PLAYER_ACHIEVEMENTS_API)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerAchievements {
    steam_id: SteamId,
    app_id: u32,
}

impl PlayerAchievements {
    pub fn new(steam_id: impl Into<SteamId>, app_id: u32) -> Self {
        Self {
            steam_id: steam_id.into(),
            app_id,
        }
    }
}

impl SteamQuery for PlayerAchievements {
    const OPERATION: Operation = Operation::PlayerAchievements;
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
    /// Uses [`PLAYER_ACHIEVEMENTS_API`](crate::constants::PLAYER_ACHIEVEMENTS_API)
    pub async fn get_player_achievements(
        &self,
        query: PlayerAchievements,
        options: ResponseOptions,
    ) -> Result<Resolved> {
        self.fetch(&query, &options).await
    }
}
