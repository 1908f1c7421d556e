use std::fmt;
use std::str::FromStr;

use super::EnumError;
use crate::constants::{
    ACHIEVEMENT_PERCENTAGES_API, FRIEND_LIST_API, NEWS_FOR_APP_API, OWNED_GAMES_API,
    PLAYER_ACHIEVEMENTS_API, PLAYER_SUMMARIES_API, RECENTLY_PLAYED_GAMES_API,
    USER_STATS_FOR_GAME_API,
};

/// Every Steam Web API call this crate knows how to make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    NewsForApp,
    GlobalAchievementPercentagesForApp,
    PlayerSummaries,
    FriendList,
    PlayerAchievements,
    UserStatsForGame,
    OwnedGames,
    RecentlyPlayedGames,
}

impl Operation {
    pub const ALL: [Operation; 8] = [
        Operation::NewsForApp,
        Operation::GlobalAchievementPercentagesForApp,
        Operation::PlayerSummaries,
        Operation::FriendList,
        Operation::PlayerAchievements,
        Operation::UserStatsForGame,
        Operation::OwnedGames,
        Operation::RecentlyPlayedGames,
    ];

    /// Top-level key of the JSON response the payload is nested under.
    ///
    /// Every selector is resolved relative to this key.
    pub const fn response_prefix(self) -> &'static str {
        match self {
            Operation::NewsForApp => "appnews",
            Operation::GlobalAchievementPercentagesForApp => "achievementpercentages",
            Operation::PlayerSummaries => "response",
            Operation::FriendList => "friendslist",
            Operation::PlayerAchievements => "playerstats",
            Operation::UserStatsForGame => "playerstats",
            Operation::OwnedGames => "response",
            Operation::RecentlyPlayedGames => "response",
        }
    }

    /// Versioned path of the endpoint, relative to [`BASE_URL`](crate::constants::BASE_URL)
    pub const fn path(self) -> &'static str {
        match self {
            Operation::NewsForApp => NEWS_FOR_APP_API,
            Operation::GlobalAchievementPercentagesForApp => ACHIEVEMENT_PERCENTAGES_API,
            Operation::PlayerSummaries => PLAYER_SUMMARIES_API,
            Operation::FriendList => FRIEND_LIST_API,
            Operation::PlayerAchievements => PLAYER_ACHIEVEMENTS_API,
            Operation::UserStatsForGame => USER_STATS_FOR_GAME_API,
            Operation::OwnedGames => OWNED_GAMES_API,
            Operation::RecentlyPlayedGames => RECENTLY_PLAYED_GAMES_API,
        }
    }

    /// Canonical name, e.g. `getNewsForApp`
    pub const fn name(self) -> &'static str {
        match self {
            Operation::NewsForApp => "getNewsForApp",
            Operation::GlobalAchievementPercentagesForApp => {
                "getGlobalAchievementPercentagesForApp"
            }
            Operation::PlayerSummaries => "getPlayerSummaries",
            Operation::FriendList => "getFriendList",
            Operation::PlayerAchievements => "getPlayerAchievements",
            Operation::UserStatsForGame => "getUserStatsForGame",
            Operation::OwnedGames => "getOwnedGames",
            Operation::RecentlyPlayedGames => "getRecentlyPlayedGames",
        }
    }

    /// Dotted path into the response, the prefix followed by `selector` if one is given.
    ///
    /// An empty selector counts as no selector.
    pub fn selector_path(self, selector: Option<&str>) -> String {
        match selector {
            Some(selector) if !selector.is_empty() => {
                format!("{}.{}", self.response_prefix(), selector)
            }
            _ => self.response_prefix().to_string(),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = EnumError<String>;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| EnumError::Unknown(s.to_string()))
    }
}
