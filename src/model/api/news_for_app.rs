use crate::client::Client;
use crate::constants::{NEWS_DEFAULT_COUNT, NEWS_DEFAULT_MAX_LENGTH};
use crate::model::{ApiKey, Operation};
use crate::query::{ResponseOptions, SteamQuery};
use crate::resolver::{Resolved, Result};

/// Parameters of [`NEWS_FOR_APP_API`](crate::constants::NEWS_FOR_APP_API)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewsForApp {
    app_id: u32,
    count: u32,
    max_length: u32,
}

impl NewsForApp {
    pub const fn new(app_id: u32) -> Self {
        Self {
            app_id,
            count: NEWS_DEFAULT_COUNT,
            max_length: NEWS_DEFAULT_MAX_LENGTH,
        }
    }
    /// Number of news entries, defaults to [`NEWS_DEFAULT_COUNT`]
    pub const fn count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }
    /// Maximum length of each entry's content, defaults to [`NEWS_DEFAULT_MAX_LENGTH`]
    pub const fn max_length(mut self, max_length: u32) -> Self {
        self.max_length = max_length;
        self
    }
}

impl SteamQuery for NewsForApp {
    const OPERATION: Operation = Operation::NewsForApp;
    fn to_query(&self, _: &ApiKey) -> String {
        format!(
            "appid={}&count={}&maxlength={}",
            self.app_id, self.count, self.max_length
        )
    }
}

impl Client {
    /// Get the latest news of an app.
    ///
    /// Uses [`NEWS_FOR_APP_API`](crate::constants::NEWS_FOR_APP_API), the payload is nested under `appnews`.
    pub async fn get_news_for_app(
        &self,
        query: NewsForApp,
        options: ResponseOptions,
    ) -> Result<Resolved> {
        self.fetch(&query, &options).await
    }
}
