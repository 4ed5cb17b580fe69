use serde_json::json;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{Friend, FriendRequests, UserSearchResult};
use crate::session::SessionStore;
use crate::transport::{ApiRequest, Transport};

impl<T: Transport> ApiClient<T> {
    /// Pending requests, both received and sent.
    pub async fn friend_requests(
        &self,
        session: &SessionStore,
    ) -> Result<FriendRequests, ApiError> {
        let request = self.authorize(session, ApiRequest::get("/api/friends/request/all"))?;
        self.fetch(request, "Failed to load friend requests").await
    }

    pub async fn friends(&self, session: &SessionStore) -> Result<Vec<Friend>, ApiError> {
        let request = self.authorize(session, ApiRequest::get("/api/friends"))?;
        self.fetch_list(request, "friends", "Failed to load friends").await
    }

    /// Users whose name or email contains `query`.
    pub async fn search_users(
        &self,
        session: &SessionStore,
        query: &str,
    ) -> Result<Vec<UserSearchResult>, ApiError> {
        let request = ApiRequest::get("/api/friends/find").query("q", query);
        let request = self.authorize(session, request)?;
        self.fetch_list(request, "users", "Failed to search users").await
    }

    pub async fn send_friend_request(
        &self,
        session: &SessionStore,
        to_user_id: i64,
    ) -> Result<(), ApiError> {
        let request = self.authorize(
            session,
            ApiRequest::post("/api/friends/request").json(json!({ "toUserId": to_user_id })),
        )?;
        self.call(request, "Failed to send friend request").await?;
        tracing::info!(to_user_id, "friend request sent");
        Ok(())
    }

    pub async fn accept_friend_request(
        &self,
        session: &SessionStore,
        requester_id: i64,
    ) -> Result<(), ApiError> {
        let request = self.authorize(
            session,
            ApiRequest::post("/api/friends/accept").json(json!({ "requesterId": requester_id })),
        )?;
        self.call(request, "Failed to accept friend request").await?;
        tracing::info!(requester_id, "friend request accepted");
        Ok(())
    }

    pub async fn reject_friend_request(
        &self,
        session: &SessionStore,
        requester_id: i64,
    ) -> Result<(), ApiError> {
        let request = self.authorize(
            session,
            ApiRequest::post("/api/friends/reject").json(json!({ "requesterId": requester_id })),
        )?;
        self.call(request, "Failed to reject friend request").await?;
        tracing::info!(requester_id, "friend request rejected");
        Ok(())
    }

    pub async fn remove_friend(
        &self,
        session: &SessionStore,
        friend_id: i64,
    ) -> Result<(), ApiError> {
        let request = self.authorize(
            session,
            ApiRequest::post("/api/friends/remove").json(json!({ "friendId": friend_id })),
        )?;
        self.call(request, "Failed to remove friend").await?;
        Ok(())
    }
}
