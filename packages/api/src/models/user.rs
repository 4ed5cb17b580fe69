//! # User identity as seen by the client
//!
//! [`UserInfo`] is what the server returns from login and session
//! verification and what the session store holds once a token has been
//! accepted. Only `id` and `user_name` are required; older server builds send
//! nothing else, so the profile fields default to empty and the role to
//! [`Role::User`].
//!
//! The server has used both `user_name` and `username`, and both `icon_url`
//! and `avatar_url`; each pair is accepted.

use serde::{Deserialize, Serialize};

/// Account role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

/// Authenticated user identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: i64,
    #[serde(alias = "username")]
    pub user_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "super::null_default")]
    pub role: Role,
    #[serde(default, alias = "avatar_url")]
    pub icon_url: Option<String>,
}

impl UserInfo {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Body of a successful login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// Body of a successful verification.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct VerifyResponse {
    pub user: UserInfo,
}

/// Registration form payload.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}
