use std::fmt;
use std::str::FromStr;

use super::EnumError;

/// Encoding requested from the Steam Web API through the `format` query parameter.
///
/// Only [`Format::Json`] is decoded. [`Format::Xml`] and [`Format::Vdf`] bodies are
/// handed back as text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    #[default]
    Json,
    Xml,
    /// Valve Data Format
    Vdf,
}

impl Format {
    pub const fn as_str(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Xml => "xml",
            Format::Vdf => "vdf",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The empty string is treated as [`Format::Json`].
impl FromStr for Format {
    type Err = EnumError<String>;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "json" => Ok(Format::Json),
            "xml" => Ok(Format::Xml),
            "vdf" => Ok(Format::Vdf),
            _ => Err(EnumError::Unknown(s.to_string())),
        }
    }
}
