use crate::model::{ApiKey, Format, Operation};

/// Query parameters of a single Steam Web API call.
pub trait SteamQuery {
    /// The call these parameters belong to
    const OPERATION: Operation;

    /// Query string without the leading `?` and without the trailing `format`.
    ///
    /// Values are interpolated as is, nothing gets escaped.
    fn to_query(&self, api_key: &ApiKey) -> String;
}

/// How a response should be requested and what part of it should be returned.
///
/// The default requests [`Format::Json`] and returns everything below the
/// operation's [`response prefix`](Operation::response_prefix).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResponseOptions {
    format: Format,
    selector: Option<String>,
}

impl ResponseOptions {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }
    /// Dotted path below the response prefix, e.g. `newsitems.0.title`.
    /// Ignored unless the format is [`Format::Json`].
    pub fn selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }
    pub const fn get_format(&self) -> Format {
        self.format
    }
    pub fn get_selector(&self) -> Option<&str> {
        self.selector.as_deref()
    }
}

impl From<Format> for ResponseOptions {
    fn from(format: Format) -> Self {
        Self::new().format(format)
    }
}
