use api::AdminUser;

/// Accounts listed in the admin panel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdminRoster {
    pub users: Vec<AdminUser>,
}

impl AdminRoster {
    pub fn new(users: Vec<AdminUser>) -> Self {
        Self { users }
    }

    pub fn remove(&mut self, user_id: i64) {
        self.users.retain(|u| u.id != user_id);
    }

    /// Record a successful block/unblock.
    pub fn set_blocked(&mut self, user_id: i64, blocked: bool) {
        if let Some(user) = self.users.iter_mut().find(|u| u.id == user_id) {
            user.status = !blocked;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::mock::MockTransport;
    use api::{ApiClient, SessionStore};
    use serde_json::json;
    use store::MemoryTokenStore;

    fn roster() -> AdminRoster {
        let users = serde_json::from_value(json!([
            {
                "id": 1, "user_name": "root", "role": "admin", "status": true,
                "created_at": "2024-01-01T00:00:00Z"
            },
            {
                "id": 9, "user_name": "dave", "role": "user", "status": true,
                "created_at": "2024-01-15T12:00:00Z"
            }
        ]))
        .unwrap();
        AdminRoster::new(users)
    }

    fn status(roster: &AdminRoster, user_id: i64) -> Option<bool> {
        roster.users.iter().find(|u| u.id == user_id).map(|u| u.status)
    }

    #[test]
    fn test_block_flips_status() {
        let mut roster = roster();

        roster.set_blocked(9, true);
        assert_eq!(status(&roster, 9), Some(false));

        roster.set_blocked(9, false);
        assert_eq!(status(&roster, 9), Some(true));
    }

    #[test]
    fn test_remove() {
        let mut roster = roster();
        roster.remove(9);
        assert_eq!(status(&roster, 9), None);
        assert_eq!(roster.users.len(), 1);
    }

    #[tokio::test]
    async fn test_failed_block_keeps_status() {
        let mock = MockTransport::new();
        mock.respond(403, json!({"message": "Forbidden"}));
        let client = ApiClient::new(mock);
        let mut session = SessionStore::new(MemoryTokenStore::with_token("t"));
        session.load();
        let mut roster = roster();

        let result = client.admin_set_blocked(&session, 9, true).await;
        if result.is_ok() {
            roster.set_blocked(9, true);
        }

        assert_eq!(result.unwrap_err().to_string(), "Forbidden");
        assert_eq!(status(&roster, 9), Some(true));
    }
}
