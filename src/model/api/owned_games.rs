use crate::client::Client;
use crate::model::{ApiKey, Operation, SteamId};
use crate::query::{ResponseOptions, SteamQuery};
use crate::resolver::{Resolved, Result};

/// Parameters of [`OWNED_GAMES_API`](crate::constants::OWNED_GAMES_API)
///
/// Both flags default to `true`. A disabled flag is left out of the query,
/// Steam then applies its own default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnedGames {
    steam_id: SteamId,
    include_app_info: bool,
    include_played_free_games: bool,
}

impl OwnedGames {
    pub fn new(steam_id: impl Into<SteamId>) -> Self {
        Self {
            steam_id: steam_id.into(),
            include_app_info: true,
            include_played_free_games: true,
        }
    }
    pub const fn include_app_info(mut self, include: bool) -> Self {
        self.include_app_info = include;
        self
    }
    pub const fn include_played_free_games(mut self, include: bool) -> Self {
        self.include_played_free_games = include;
        self
    }
}

impl SteamQuery for OwnedGames {
    const OPERATION: Operation = Operation::OwnedGames;
    fn to_query(&self, api_key: &ApiKey) -> String {
        let mut query = format!("key={}&steamid={}", api_key.as_str(), self.steam_id);
        if self.include_app_info {
            query.push_str("&include_appinfo=true");
        }
        if self.include_played_free_games {
            query.push_str("&include_played_free_games=true");
        }
        query
    }
}

impl Client {
    /// Uses [`OWNED_GAMES_API`](crate::constants::OWNED_GAMES_API)
    pub async fn get_owned_games(
        &self,
        query: OwnedGames,
        options: ResponseOptions,
    ) -> Result<Resolved> {
        self.fetch(&query, &options).await
    }
}
