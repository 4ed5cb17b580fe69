//! Friend relationships and user search results.

use serde::{Deserialize, Serialize};

/// Another user as listed by search and by pending friend requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    #[serde(alias = "username")]
    pub user_name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// A pending friend request; `id` is the other user's id.
pub type FriendRequest = UserSummary;

/// A user search hit.
pub type UserSearchResult = UserSummary;

/// Pending requests in both directions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FriendRequests {
    #[serde(default, deserialize_with = "super::null_default")]
    pub received: Vec<FriendRequest>,
    #[serde(default, deserialize_with = "super::null_default")]
    pub sent: Vec<FriendRequest>,
}

/// An accepted friend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Friend {
    pub id: i64,
    #[serde(alias = "username")]
    pub user_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "avatar_url")]
    pub icon_url: Option<String>,
}
