use crate::client::Client;
use crate::model::{ApiKey, Operation, Relationship, SteamId};
use crate::query::{ResponseOptions, SteamQuery};
use crate::resolver::{Resolved, Result};

/// Parameters of [`FRIEND_LIST_API`](crate::constants::FRIEND_LIST_API)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FriendList {
    steam_id: SteamId,
    relationship: Relationship,
}

impl FriendList {
    pub fn new(steam_id: impl Into<SteamId>) -> Self {
        Self {
            steam_id: steam_id.into(),
            relationship: Relationship::default(),
        }
    }
    /// Defaults to [`Relationship::Friend`]
    pub const fn relationship(mut self, relationship: Relationship) -> Self {
        self.relationship = relationship;
        self
    }
}

impl SteamQuery for FriendList {
    const OPERATION: Operation = Operation::FriendList;
    fn to_query(&self, api_key: &ApiKey) -> String {
        format!(
            "key={}&steamid={}&relationship={}",
            api_key.as_str(),
            self.steam_id,
            self.relationship
        )
    }
}

impl Client {
    /// Get the friends of the profile with the given [`SteamId`]
    ///
    /// Uses [`FRIEND_LIST_API`](crate::constants::FRIEND_LIST_API). Steam answers `401` for private friend lists,
    /// which surfaces as a json decode error since the body is html.
    pub async fn get_friend_list(
        &self,
        query: FriendList,
        options: ResponseOptions,
    ) -> Result<Resolved> {
        self.fetch(&query, &options).await
    }
}
