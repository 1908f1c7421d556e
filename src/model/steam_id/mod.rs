mod query_ext;
pub use query_ext::SteamIdQueryExt;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 64-bit Steam community id as passed in the `steamid` and `steamids` query parameters.
///
/// See [`Valve`](https://developer.valvesoftware.com/wiki/SteamID)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SteamId(pub u64);

/// Essentially the same as [`SteamId`] but serializes to a string and deserializes from a string.
///
/// The Steam Web API encodes ids as strings, use this when deserializing a [`Resolved`](crate::Resolved).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SteamIdStr(pub u64);

impl From<SteamIdStr> for SteamId {
    fn from(value: SteamIdStr) -> Self {
        SteamId(value.0)
    }
}
impl From<SteamId> for SteamIdStr {
    fn from(value: SteamId) -> Self {
        SteamIdStr(value.0)
    }
}

impl SteamIdStr {
    pub fn steam_id(self) -> SteamId {
        self.into()
    }
}

impl fmt::Display for SteamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for SteamId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for SteamId {
    type Err = std::num::ParseIntError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SteamId(s.parse()?))
    }
}

impl SteamId {
    /// Maximum number of decimal digits needed to represent a [`u64`].
    ///
    /// ```
    /// assert_eq!(((u64::MAX as f64).log10().floor() as usize) + 1, 20);
    /// ```
    pub const MAX_DIGITS_FOR_U64: usize = 20;

    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

pub mod ser {
    use serde::{Serialize, Serializer};

    use super::SteamIdStr;

    impl Serialize for SteamIdStr {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(&self.steam_id().to_string())
        }
    }
}

pub mod de {
    use std::borrow::Cow;
    use std::str::FromStr;

    use serde::{Deserialize, Deserializer};

    use super::{SteamId, SteamIdStr};

    impl<'de> Deserialize<'de> for SteamIdStr {
        fn deserialize<D>(deserializer: D) -> Result<SteamIdStr, D::Error>
        where
            D: Deserializer<'de>,
        {
            let str = <Cow<'de, str>>::deserialize(deserializer)?;
            SteamId::from_str(&str)
                .map_err(serde::de::Error::custom)
                .map(SteamIdStr::from)
        }
    }
}
