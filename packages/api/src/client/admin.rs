use super::ApiClient;
use crate::error::ApiError;
use crate::models::AdminUser;
use crate::session::SessionStore;
use crate::transport::{ApiRequest, Transport};

impl<T: Transport> ApiClient<T> {
    pub async fn admin_users(&self, session: &SessionStore) -> Result<Vec<AdminUser>, ApiError> {
        let request = self.authorize(session, ApiRequest::get("/api/admin/users"))?;
        self.fetch_list(request, "users", "Failed to load users").await
    }

    pub async fn admin_delete_user(
        &self,
        session: &SessionStore,
        user_id: i64,
    ) -> Result<(), ApiError> {
        let request = ApiRequest::delete("/api/admin/users").segment(user_id);
        let request = self.authorize(session, request)?;
        self.call(request, "Failed to delete user").await?;
        Ok(())
    }

    /// Block (`blocked = true`) or unblock an account.
    pub async fn admin_set_blocked(
        &self,
        session: &SessionStore,
        user_id: i64,
        blocked: bool,
    ) -> Result<(), ApiError> {
        let action = if blocked { "block" } else { "unblock" };
        let request = self.authorize(
            session,
            ApiRequest::patch("/api/admin/users").segment(user_id).segment(action),
        )?;
        self.call(request, "Failed to change user status").await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use store::MemoryTokenStore;

    use crate::mock::MockTransport;
    use crate::transport::Method;
    use crate::{ApiClient, SessionStore};

    fn session() -> SessionStore {
        let mut session = SessionStore::new(MemoryTokenStore::with_token("admin-token"));
        session.load();
        session
    }

    #[tokio::test]
    async fn test_admin_users() {
        let mock = MockTransport::new();
        mock.respond(
            200,
            json!({"users": [{
                "id": 9, "user_name": "dave", "role": "user",
                "status": true, "created_at": "2024-01-15T12:00:00Z"
            }]}),
        );
        let client = ApiClient::new(mock);

        let users = client.admin_users(&session()).await.unwrap();
        assert_eq!(users[0].user_name, "dave");
        assert!(users[0].status);
    }

    #[tokio::test]
    async fn test_admin_mutation_paths() {
        let mock = MockTransport::new();
        for _ in 0..3 {
            mock.respond_raw(200, "");
        }
        let client = ApiClient::new(mock.clone());
        let session = session();

        client.admin_delete_user(&session, 9).await.unwrap();
        client.admin_set_blocked(&session, 9, true).await.unwrap();
        client.admin_set_blocked(&session, 9, false).await.unwrap();

        let requests = mock.requests();
        assert_eq!(requests[0].method, Method::Delete);
        assert_eq!(requests[0].path(), "/api/admin/users/9");
        assert_eq!(requests[1].method, Method::Patch);
        assert_eq!(requests[1].path(), "/api/admin/users/9/block");
        assert_eq!(requests[2].path(), "/api/admin/users/9/unblock");
        assert!(requests.iter().all(|r| r.bearer.as_deref() == Some("admin-token")));
    }
}
