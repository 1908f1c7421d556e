use std::time::Duration;

use thiserror::Error;

use crate::constants::BASE_URL;
use crate::model::{ApiKey, ApiKeyError, Format};
use crate::query::{ResponseOptions, SteamQuery};
use crate::resolver::{Resolved, Result};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("there was a problem instantiating the steam web api client: {0}")]
    ApiKey(#[from] ApiKeyError),

    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
}

/// Stateless handle to the Steam Web API.
///
/// Cloning is cheap, the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct Client {
    api_key: ApiKey,
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Default)]
pub struct ClientOptions {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl ClientOptions {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }
    /// Defaults to [`BASE_URL`]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }
    /// Requests never time out unless this is set
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }
    pub fn timeout_ms(self, ms: u64) -> Self {
        self.timeout(Duration::from_millis(ms))
    }
    pub fn build(self) -> std::result::Result<Client, ClientError> {
        let api_key = self
            .api_key
            .ok_or(ApiKeyError::Missing)
            .and_then(|key| ApiKey::new(key))
            .map_err(|err| {
                tracing::error!(%err, "there was a problem instantiating the steam web api client");
                err
            })?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let base_url = self.base_url.as_deref().unwrap_or(BASE_URL);

        Ok(Client {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }
}

impl Client {
    /// Build a client with the key found in [`STEAM_KEY`](crate::constants::API_KEY_ENV_VAR)
    pub fn from_env() -> std::result::Result<Client, ClientError> {
        let api_key = ApiKey::from_env().map_err(|err| {
            tracing::error!(%err, "there was a problem instantiating the steam web api client");
            err
        })?;
        ClientOptions::new().api_key(api_key.as_str()).build()
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// The exact url [`Client::fetch`] requests for `query`
    pub fn url_for<Q: SteamQuery>(&self, query: &Q, format: Format) -> String {
        format!(
            "{}{}?{}&format={}",
            self.base_url,
            Q::OPERATION.path(),
            query.to_query(&self.api_key),
            format
        )
    }

    /// Build the url for `query` and hand it to [`Client::resolve`]
    pub async fn fetch<Q: SteamQuery>(
        &self,
        query: &Q,
        options: &ResponseOptions,
    ) -> Result<Resolved> {
        let format = options.get_format();
        let url = self.url_for(query, format);
        tracing::debug!(operation = %Q::OPERATION, %format, "calling steam web api");
        self.resolve(format, &url, Q::OPERATION, options.get_selector())
            .await
    }

    pub(crate) async fn get(&self, url: &str) -> reqwest::Result<reqwest::Response> {
        self.client.get(url).send().await
    }
}
