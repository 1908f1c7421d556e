use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::constants::{API_KEY_ENV_VAR, API_KEY_LEN};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiKeyError {
    #[error("a steam web api key was not found")]
    Missing,

    /// Anything that isn't exactly [`API_KEY_LEN`] ascii alphanumerics
    #[error("the steam web api key is invalid, it must be a 32-character alphanumeric string")]
    Invalid,
}
type Result<T> = std::result::Result<T, ApiKeyError>;

/// Validated Steam Web API key.
///
/// Once constructed the key is never modified. [`fmt::Debug`] doesn't print the key.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(ApiKeyError::Missing);
        }
        if key.len() != API_KEY_LEN || !key.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(ApiKeyError::Invalid);
        }
        Ok(ApiKey(key))
    }

    /// Read the key from [`API_KEY_ENV_VAR`], also looking into a `.env` file.
    pub fn from_env() -> Result<Self> {
        let _ = dotenv::dotenv();
        let key = dotenv::var(API_KEY_ENV_VAR).map_err(|_| ApiKeyError::Missing)?;
        Self::new(key)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl FromStr for ApiKey {
    type Err = ApiKeyError;
    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(..)")
    }
}
