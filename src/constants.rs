/// Origin every endpoint path is appended to
pub const BASE_URL: &str = "http://api.steampowered.com";

/// [`/ISteamNews/GetNewsForApp/v0002/`](https://partner.steamgames.com/doc/webapi/ISteamNews#GetNewsForApp)
pub const NEWS_FOR_APP_API: &str = "/ISteamNews/GetNewsForApp/v0002/";
pub const NEWS_DEFAULT_COUNT: u32 = 3;
pub const NEWS_DEFAULT_MAX_LENGTH: u32 = 300;

/// [`/ISteamUserStats/GetGlobalAchievementPercentagesForApp/v002/`](https://partner.steamgames.com/doc/webapi/ISteamUserStats#GetGlobalAchievementPercentagesForApp)
pub const ACHIEVEMENT_PERCENTAGES_API: &str =
    "/ISteamUserStats/GetGlobalAchievementPercentagesForApp/v002/";

/// [`/ISteamUser/GetPlayerSummaries/v0002/`](https://partner.steamgames.com/doc/webapi/ISteamUser#GetPlayerSummaries)
pub const PLAYER_SUMMARIES_API: &str = "/ISteamUser/GetPlayerSummaries/v0002/";

/// [`/ISteamUser/GetFriendList/v0001/`](https://partner.steamgames.com/doc/webapi/ISteamUser#GetFriendList)
pub const FRIEND_LIST_API: &str = "/ISteamUser/GetFriendList/v0001/";

/// [`/ISteamUserStats/GetPlayerAchievements/v0001/`](https://partner.steamgames.com/doc/webapi/ISteamUserStats#GetPlayerAchievements)
pub const PLAYER_ACHIEVEMENTS_API: &str = "/ISteamUserStats/GetPlayerAchievements/v0001/";

/// [`/ISteamUserStats/GetUserStatsForGame/v0002/`](https://partner.steamgames.com/doc/webapi/ISteamUserStats#GetUserStatsForGame)
pub const USER_STATS_FOR_GAME_API: &str = "/ISteamUserStats/GetUserStatsForGame/v0002/";

/// [`/IPlayerService/GetOwnedGames/v0001/`](https://partner.steamgames.com/doc/webapi/IPlayerService#GetOwnedGames)
pub const OWNED_GAMES_API: &str = "/IPlayerService/GetOwnedGames/v0001/";

/// [`/IPlayerService/GetRecentlyPlayedGames/v0001/`](https://partner.steamgames.com/doc/webapi/IPlayerService#GetRecentlyPlayedGames)
pub const RECENTLY_PLAYED_GAMES_API: &str = "/IPlayerService/GetRecentlyPlayedGames/v0001/";

/// Environment variable [`ApiKey::from_env`](crate::ApiKey::from_env) reads
pub const API_KEY_ENV_VAR: &str = "STEAM_KEY";

/// Length of a Steam Web API key
pub const API_KEY_LEN: usize = 32;
