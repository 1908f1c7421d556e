use std::str::FromStr;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::client::Client;
use crate::model::{EnumError, Format, Operation};

#[derive(Error, Debug)]
pub enum Error {
    /// The operation name isn't one of [`Operation::ALL`]
    #[error("invalid operation: `{0}`")]
    UnknownOperation(String),

    /// Only `json`, `xml`, `vdf` and the empty string are accepted
    #[error("an unknown format was specified: `{0}`")]
    UnknownFormat(String),

    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    /// Non-success status while fetching [`Format::Xml`] or [`Format::Vdf`]
    #[error("error fetching {format}: {status}")]
    Status { format: Format, status: StatusCode },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// `segment` of the dotted `path` doesn't exist in the response
    #[error("`{segment}` of `{path}` is not present in the response")]
    SelectorNotFound { path: String, segment: String },

    /// A text body was requested as json
    #[error("the response is raw text, not json")]
    NotJson,
}
pub type Result<T> = std::result::Result<T, Error>;

/// Whatever a call returned.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    /// The value found at the end of the selector
    Json(Value),
    /// Raw, undecoded [`Format::Xml`] or [`Format::Vdf`] body
    Text(String),
}

impl Resolved {
    pub const fn as_json(&self) -> Option<&Value> {
        match self {
            Resolved::Json(value) => Some(value),
            Resolved::Text(_) => None,
        }
    }
    pub fn into_json(self) -> Option<Value> {
        match self {
            Resolved::Json(value) => Some(value),
            Resolved::Text(_) => None,
        }
    }
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Resolved::Json(_) => None,
            Resolved::Text(text) => Some(text.as_str()),
        }
    }
    pub fn into_text(self) -> Option<String> {
        match self {
            Resolved::Json(_) => None,
            Resolved::Text(text) => Some(text),
        }
    }

    /// Deserialize the selected json value into `T`.
    ///
    /// Text bodies are never parsed, they yield [`Error::NotJson`].
    pub fn deserialize<T: DeserializeOwned>(self) -> Result<T> {
        match self {
            Resolved::Json(value) => Ok(serde_json::from_value(value)?),
            Resolved::Text(_) => Err(Error::NotJson),
        }
    }
}

/// Walk the dotted `path` into `value` and take whatever is at its end.
///
/// Objects are indexed by key, arrays by position. Positions must be written
/// canonically, `01` or `+1` don't index anything.
pub fn select(mut value: Value, path: &str) -> Result<Value> {
    let mut current = &mut value;
    for segment in path.split('.') {
        let next = match current {
            Value::Object(map) => map.get_mut(segment),
            Value::Array(vec) => segment
                .parse::<usize>()
                .ok()
                .filter(|idx| idx.to_string() == segment)
                .and_then(|idx| vec.get_mut(idx)),
            _ => None,
        };
        current = next.ok_or_else(|| Error::SelectorNotFound {
            path: path.to_string(),
            segment: segment.to_string(),
        })?;
    }
    Ok(current.take())
}

impl Client {
    /// Fetch `url` and decode the body according to `format`.
    ///
    /// - [`Format::Json`]: the body is parsed and the value at
    ///   [`Operation::selector_path`] is returned.
    /// - [`Format::Xml`], [`Format::Vdf`]: the body is returned as is,
    ///   if the status indicates success.
    ///
    /// Failures are logged before being returned.
    #[tracing::instrument(level = "debug", skip(self, url))]
    pub async fn resolve(
        &self,
        format: Format,
        url: &str,
        operation: Operation,
        selector: Option<&str>,
    ) -> Result<Resolved> {
        let result = match format {
            Format::Json => self.resolve_json(url, operation, selector).await,
            Format::Xml | Format::Vdf => self.resolve_text(url, format).await,
        };
        if let Err(error) = &result {
            tracing::error!(%error, "failed to resolve steam web api response");
        }
        result
    }

    /// Same as [`Client::resolve`] but takes the operation name (e.g. `getFriendList`)
    /// and the format as strings.
    pub async fn resolve_named(
        &self,
        format: &str,
        url: &str,
        operation: &str,
        selector: Option<&str>,
    ) -> Result<Resolved> {
        let parsed = Operation::from_str(operation)
            .map_err(|EnumError::Unknown(op)| Error::UnknownOperation(op))
            .and_then(|op| {
                Format::from_str(format)
                    .map(|format| (op, format))
                    .map_err(|EnumError::Unknown(format)| Error::UnknownFormat(format))
            });
        let (operation, format) = match parsed {
            Ok(parsed) => parsed,
            Err(error) => {
                tracing::error!(%error, "refusing to send request");
                return Err(error);
            }
        };
        self.resolve(format, url, operation, selector).await
    }

    async fn resolve_json(
        &self,
        url: &str,
        operation: Operation,
        selector: Option<&str>,
    ) -> Result<Resolved> {
        let resp = self.get(url).await?;
        tracing::debug!(status = %resp.status(), "received json response");

        let body = resp.text().await?;
        let json = serde_json::from_str::<Value>(&body)?;

        let path = operation.selector_path(selector);
        Ok(Resolved::Json(select(json, &path)?))
    }

    async fn resolve_text(&self, url: &str, format: Format) -> Result<Resolved> {
        let resp = self.get(url).await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status { format, status });
        }
        Ok(Resolved::Text(resp.text().await?))
    }
}
