pub mod api;

mod primitives;
pub use primitives::*;

pub mod steam_id;
pub use steam_id::{SteamId, SteamIdQueryExt, SteamIdStr};
