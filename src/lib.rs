//! Thin client for the Steam Web API.
//!
//! Every call builds the url of its endpoint, fetches it and returns either the
//! part of the json response picked by a dotted selector, or the raw text of
//! an `xml`/`vdf` response.
//!
//! # Endpoints
//!
//! - [x] [`api.steampowered.com/ISteamNews/GetNewsForApp/v0002/`]
//! - [x] [`api.steampowered.com/ISteamUserStats/GetGlobalAchievementPercentagesForApp/v002/`]
//! - [x] [`api.steampowered.com/ISteamUser/GetPlayerSummaries/v0002/`]
//! - [x] [`api.steampowered.com/ISteamUser/GetFriendList/v0001/`]
//! - [x] [`api.steampowered.com/ISteamUserStats/GetPlayerAchievements/v0001/`]
//! - [x] [`api.steampowered.com/ISteamUserStats/GetUserStatsForGame/v0002/`]
//! - [x] [`api.steampowered.com/IPlayerService/GetOwnedGames/v0001/`]
//! - [x] [`api.steampowered.com/IPlayerService/GetRecentlyPlayedGames/v0001/`]
//!
//! [`api.steampowered.com/ISteamNews/GetNewsForApp/v0002/`]: https://partner.steamgames.com/doc/webapi/ISteamNews#GetNewsForApp
//! [`api.steampowered.com/ISteamUserStats/GetGlobalAchievementPercentagesForApp/v002/`]: https://partner.steamgames.com/doc/webapi/ISteamUserStats#GetGlobalAchievementPercentagesForApp
//! [`api.steampowered.com/ISteamUser/GetPlayerSummaries/v0002/`]: https://partner.steamgames.com/doc/webapi/ISteamUser#GetPlayerSummaries
//! [`api.steampowered.com/ISteamUser/GetFriendList/v0001/`]: https://partner.steamgames.com/doc/webapi/ISteamUser#GetFriendList
//! [`api.steampowered.com/ISteamUserStats/GetPlayerAchievements/v0001/`]: https://partner.steamgames.com/doc/webapi/ISteamUserStats#GetPlayerAchievements
//! [`api.steampowered.com/ISteamUserStats/GetUserStatsForGame/v0002/`]: https://partner.steamgames.com/doc/webapi/ISteamUserStats#GetUserStatsForGame
//! [`api.steampowered.com/IPlayerService/GetOwnedGames/v0001/`]: https://partner.steamgames.com/doc/webapi/IPlayerService#GetOwnedGames
//! [`api.steampowered.com/IPlayerService/GetRecentlyPlayedGames/v0001/`]: https://partner.steamgames.com/doc/webapi/IPlayerService#GetRecentlyPlayedGames
//!
//! # Example
//!
//! ```no_run
//! use steam_web_api::{ClientOptions, NewsForApp, ResponseOptions};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ClientOptions::new()
//!     .api_key("E84C8EF965448E02C469BB3228D46311")
//!     .build()?;
//!
//! let items = client
//!     .get_news_for_app(NewsForApp::new(730), ResponseOptions::new().selector("newsitems"))
//!     .await?;
//! println!("{:?}", items.as_json());
//! # Ok(())
//! # }
//! ```

#[cfg(test)]
#[macro_use]
mod test_util;

pub mod constants;

mod client;
pub use client::{Client, ClientError, ClientOptions};

mod query;
pub use query::{ResponseOptions, SteamQuery};

mod resolver;
pub use resolver::{select, Error, Resolved, Result};

pub mod model;
pub use model::api::*;
pub use model::{
    ApiKey, ApiKeyError, EnumError, Format, Operation, Relationship, SteamId, SteamIdQueryExt,
    SteamIdStr,
};
