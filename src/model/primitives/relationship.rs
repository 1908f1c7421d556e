use std::fmt;
use std::str::FromStr;

use super::EnumError;

/// Relationship filter of [`/ISteamUser/GetFriendList/`](crate::constants::FRIEND_LIST_API)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relationship {
    #[default]
    Friend,
    All,
}

impl Relationship {
    pub const fn as_str(self) -> &'static str {
        match self {
            Relationship::Friend => "friend",
            Relationship::All => "all",
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Relationship {
    type Err = EnumError<String>;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "friend" => Ok(Relationship::Friend),
            "all" => Ok(Relationship::All),
            _ => Err(EnumError::Unknown(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::Relationship;

    #[test]
    fn parses_and_displays() {
        assert_eq!(Relationship::default(), Relationship::Friend);
        assert_eq!(Relationship::from_str("all"), Ok(Relationship::All));
        assert_eq!(Relationship::Friend.to_string(), "friend");
        assert!(Relationship::from_str("blocked").is_err());
    }
}
