//! Typed records exchanged with the server.
//!
//! Every payload is validated here: required fields must be present with the
//! right JSON type and enum values must be known, otherwise decoding fails
//! with [`crate::ApiError::Malformed`]. Only fields the server is known to
//! omit carry defaults.

mod admin;
mod friend;
mod post;
mod user;

pub use admin::AdminUser;
pub use friend::{Friend, FriendRequest, FriendRequests, UserSearchResult, UserSummary};
pub use post::{AccessType, ImageFile, Post, PostDraft, Reaction, ReactionSummary};
pub(crate) use user::VerifyResponse;
pub use user::{LoginResponse, Registration, Role, UserInfo};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `deserialize_with` helper: an explicit `null` decodes like a missing key.
/// Pair it with `#[serde(default)]`.
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode a list the server sends either bare (`[..]`) or wrapped in an
/// object under `key` (`{"posts": [..]}`).
pub(crate) fn listing<T: DeserializeOwned>(
    value: Value,
    key: &str,
) -> Result<Vec<T>, serde_json::Error> {
    match value {
        Value::Object(mut map) => match map.remove(key) {
            Some(inner) => serde_json::from_value(inner),
            None => serde_json::from_value(Value::Object(map)),
        },
        other => serde_json::from_value(other),
    }
}
