use crate::client::Client;
use crate::model::{ApiKey, Operation};
use crate::query::{ResponseOptions, SteamQuery};
use crate::resolver::{Resolved, Result};

/// Parameters of [`ACHIEVEMENT_PERCENTAGES_API`](crate::constants::ACHIEVEMENT_PERCENTAGES_API)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalAchievementPercentages {
    game_id: u32,
}

impl GlobalAchievementPercentages {
    pub const fn new(game_id: u32) -> Self {
        Self { game_id }
    }
}

impl SteamQuery for GlobalAchievementPercentages {
    const OPERATION: Operation = Operation::GlobalAchievementPercentagesForApp;
    fn to_query(&self, _: &ApiKey) -> String {
        format!("gameid={}", self.game_id)
    }
}

impl Client {
    /// Get the global unlock percentage of every achievement of a game
    ///
    /// Uses [`ACHIEVEMENT_PERCENTAGES_API`](crate::constants::ACHIEVEMENT_PERCENTAGES_API)
    pub async fn get_global_achievement_percentages_for_app(
        &self,
        query: GlobalAchievementPercentages,
        options: ResponseOptions,
    ) -> Result<Resolved> {
        self.fetch(&query, &options).await
    }
}
