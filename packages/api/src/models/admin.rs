use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Role;

/// A user row in the admin panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: i64,
    #[serde(alias = "username")]
    pub user_name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub role: Role,
    /// `true` while the account is active, `false` once blocked.
    pub status: bool,
    pub created_at: DateTime<Utc>,
}
