//! State behind the friends view.
//!
//! The view keeps one `Signal<FriendsBoard>`. Network calls run first, from a
//! cloned session snapshot, and the board is patched only once the server has
//! accepted the change. A failed call leaves the board as it was.

use api::{ApiClient, ApiError, Friend, FriendRequest, SessionStore, Transport, UserSearchResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FriendsTab {
    #[default]
    Friends,
    Search,
    Requests,
}

impl FriendsTab {
    pub const ALL: [FriendsTab; 3] =
        [FriendsTab::Friends, FriendsTab::Search, FriendsTab::Requests];

    pub fn label(self) -> &'static str {
        match self {
            FriendsTab::Friends => "Friends",
            FriendsTab::Search => "Find people",
            FriendsTab::Requests => "Requests",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FriendsBoard {
    pub friends: Vec<Friend>,
    /// Incoming requests awaiting our answer.
    pub received: Vec<FriendRequest>,
    /// Requests we sent that are still pending.
    pub sent: Vec<FriendRequest>,
    pub results: Vec<UserSearchResult>,
}

impl FriendsBoard {
    /// Load friends and pending requests.
    pub async fn fetch<T: Transport>(
        client: &ApiClient<T>,
        session: &SessionStore,
    ) -> Result<Self, ApiError> {
        let friends = client.friends(session).await?;
        let requests = client.friend_requests(session).await?;
        Ok(Self {
            friends,
            received: requests.received,
            sent: requests.sent,
            results: Vec::new(),
        })
    }

    pub fn set_results(&mut self, results: Vec<UserSearchResult>) {
        self.results = results;
    }

    /// A request to `user_id` went through: the hit leaves the search results
    /// and joins the sent list.
    pub fn request_sent(&mut self, user_id: i64) {
        let Some(pos) = self.results.iter().position(|u| u.id == user_id) else {
            return;
        };
        let hit = self.results.remove(pos);
        if !self.is_pending(user_id) {
            self.sent.push(hit);
        }
    }

    /// Accepted: the request is gone and the friend list is replaced with
    /// the server's fresh copy.
    pub fn request_accepted(&mut self, requester_id: i64, friends: Vec<Friend>) {
        self.received.retain(|r| r.id != requester_id);
        self.friends = friends;
    }

    pub fn request_rejected(&mut self, requester_id: i64) {
        self.received.retain(|r| r.id != requester_id);
    }

    pub fn friend_removed(&mut self, friend_id: i64) {
        self.friends.retain(|f| f.id != friend_id);
    }

    pub fn apply(&mut self, update: FriendUpdate) {
        match update {
            FriendUpdate::Sent(id) => self.request_sent(id),
            FriendUpdate::Accepted {
                requester_id,
                friends,
            } => self.request_accepted(requester_id, friends),
            FriendUpdate::Rejected(id) => self.request_rejected(id),
            FriendUpdate::Removed(id) => self.friend_removed(id),
        }
    }

    pub fn is_pending(&self, user_id: i64) -> bool {
        self.sent.iter().any(|r| r.id == user_id)
    }

    pub fn is_friend(&self, user_id: i64) -> bool {
        self.friends.iter().any(|f| f.id == user_id)
    }
}

/// Trimmed query, or `None` when there is nothing to search for.
pub fn search_query(raw: &str) -> Option<&str> {
    let query = raw.trim();
    (!query.is_empty()).then_some(query)
}

/// Search for users. A blank query yields no results and sends nothing.
pub async fn search<T: Transport>(
    client: &ApiClient<T>,
    session: &SessionStore,
    raw: &str,
) -> Result<Vec<UserSearchResult>, ApiError> {
    match search_query(raw) {
        Some(query) => client.search_users(session, query).await,
        None => Ok(Vec::new()),
    }
}

/// A relationship change requested from the friends page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FriendChange {
    Send(i64),
    Accept(i64),
    Reject(i64),
    Remove(i64),
}

/// What the server accepted; only produced by a successful [`submit`].
#[derive(Clone, Debug, PartialEq)]
pub enum FriendUpdate {
    Sent(i64),
    Accepted { requester_id: i64, friends: Vec<Friend> },
    Rejected(i64),
    Removed(i64),
}

/// Send `change` to the server. Accepting also refetches the friend list.
pub async fn submit<T: Transport>(
    client: &ApiClient<T>,
    session: &SessionStore,
    change: FriendChange,
) -> Result<FriendUpdate, ApiError> {
    match change {
        FriendChange::Send(id) => {
            client.send_friend_request(session, id).await?;
            Ok(FriendUpdate::Sent(id))
        }
        FriendChange::Accept(id) => {
            client.accept_friend_request(session, id).await?;
            let friends = client.friends(session).await?;
            Ok(FriendUpdate::Accepted {
                requester_id: id,
                friends,
            })
        }
        FriendChange::Reject(id) => {
            client.reject_friend_request(session, id).await?;
            Ok(FriendUpdate::Rejected(id))
        }
        FriendChange::Remove(id) => {
            client.remove_friend(session, id).await?;
            Ok(FriendUpdate::Removed(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::mock::MockTransport;
    use api::transport::RequestBody;
    use serde_json::json;
    use store::MemoryTokenStore;

    fn session() -> SessionStore {
        let mut session = SessionStore::new(MemoryTokenStore::with_token("abc123"));
        session.load();
        session
    }

    fn user(id: i64, name: &str) -> UserSearchResult {
        UserSearchResult {
            id,
            user_name: name.to_string(),
            email: None,
        }
    }

    fn friend(id: i64, name: &str) -> Friend {
        Friend {
            id,
            user_name: name.to_string(),
            email: None,
            icon_url: None,
        }
    }

    #[tokio::test]
    async fn test_send_request_moves_hit_to_sent() {
        let mock = MockTransport::new();
        mock.respond(200, json!({"message": "Request sent"}));
        let client = ApiClient::new(mock.clone());
        let session = session();
        let mut board = FriendsBoard::default();
        board.set_results(vec![user(42, "zoe"), user(7, "yann")]);

        let update = submit(&client, &session, FriendChange::Send(42)).await.unwrap();
        board.apply(update);

        assert!(board.sent.iter().any(|r| r.id == 42));
        assert!(board.results.iter().all(|r| r.id != 42));
        assert_eq!(board.results.len(), 1);
        assert_eq!(mock.calls(), 1);
        assert_eq!(
            mock.last_request().unwrap().body,
            RequestBody::Json(json!({"toUserId": 42}))
        );
    }

    #[tokio::test]
    async fn test_failed_send_yields_no_update() {
        let mock = MockTransport::new();
        mock.respond(400, json!({"message": "Request already sent"}));
        let client = ApiClient::new(mock.clone());

        let result = submit(&client, &session(), FriendChange::Send(42)).await;

        assert_eq!(result.unwrap_err().to_string(), "Request already sent");
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn test_blank_search_sends_nothing() {
        let mock = MockTransport::new();
        let client = ApiClient::new(mock.clone());

        let results = search(&client, &session(), "   ").await.unwrap();

        assert!(results.is_empty());
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn test_search_trims_query() {
        let mock = MockTransport::new();
        mock.respond(200, json!({"users": [{"id": 42, "user_name": "zoe"}]}));
        let client = ApiClient::new(mock.clone());

        let results = search(&client, &session(), " zo ").await.unwrap();

        assert_eq!(results, vec![user(42, "zoe")]);
        assert_eq!(mock.last_request().unwrap().query[0].1, "zo");
    }

    #[tokio::test]
    async fn test_fetch_and_accept() {
        let mock = MockTransport::new();
        mock.respond(200, json!({"friends": [{"id": 3, "user_name": "carol"}]}));
        mock.respond(200, json!({"received": [{"id": 2, "user_name": "bob"}], "sent": []}));
        mock.respond(200, json!({"message": "accepted"}));
        mock.respond(
            200,
            json!([{"id": 3, "user_name": "carol"}, {"id": 2, "user_name": "bob"}]),
        );
        let client = ApiClient::new(mock.clone());
        let session = session();

        let mut board = FriendsBoard::fetch(&client, &session).await.unwrap();
        assert_eq!(board.received.len(), 1);

        let update = submit(&client, &session, FriendChange::Accept(2)).await.unwrap();
        board.apply(update);

        assert!(board.received.is_empty());
        assert!(board.is_friend(2));
        assert_eq!(mock.calls(), 4);
    }

    #[tokio::test]
    async fn test_reject_and_remove() {
        let mock = MockTransport::new();
        mock.respond(200, json!({"message": "rejected"}));
        mock.respond(200, json!({"message": "removed"}));
        let client = ApiClient::new(mock.clone());
        let session = session();
        let mut board = FriendsBoard {
            friends: vec![friend(3, "carol")],
            received: vec![user(2, "bob")],
            ..FriendsBoard::default()
        };

        let rejected = submit(&client, &session, FriendChange::Reject(2)).await.unwrap();
        board.apply(rejected);
        let removed = submit(&client, &session, FriendChange::Remove(3)).await.unwrap();
        board.apply(removed);

        assert!(board.received.is_empty());
        assert!(board.friends.is_empty());
        assert_eq!(mock.calls(), 2);
    }

    #[test]
    fn test_request_sent_is_not_duplicated() {
        let mut board = FriendsBoard {
            sent: vec![user(42, "zoe")],
            results: vec![user(42, "zoe")],
            ..FriendsBoard::default()
        };

        board.request_sent(42);

        assert_eq!(board.sent.len(), 1);
        assert!(board.results.is_empty());
    }
}
