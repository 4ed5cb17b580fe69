//! # Access guard — verify the session before a protected view mounts
//!
//! ```text
//!             no token
//!   Pending ───────────────────────────► Unauthorized
//!      │                                     ▲
//!      │ POST /api/verify (Bearer token)     │ non-success status,
//!      ├─────────────────────────────────────┘ malformed body, transport error
//!      │
//!      └─ 2xx {user} ─► session.set_user ─► Authorized
//! ```
//!
//! Both outcomes are terminal for one [`AccessGuard`]. A view creates a fresh
//! guard on every mount, so each visit pays exactly one verification round
//! trip and nothing is cached between mounts. A failed verification clears
//! the session (memory and storage) so that the next mount takes the
//! no-token path. There is no retry.

use crate::client::ApiClient;
use crate::session::SessionStore;
use crate::transport::Transport;

/// Where an unauthorized visitor is sent. History is replaced, not pushed.
pub const LOGIN_PATH: &str = "/login";

/// Verification state of one guarded-view mount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GuardState {
    /// Verification not finished; render a loading indicator.
    #[default]
    Pending,
    /// Token accepted and the session's user populated; render the view.
    Authorized,
    /// No token or token refused; redirect to [`LOGIN_PATH`].
    Unauthorized,
}

impl GuardState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GuardState::Pending)
    }
}

/// One run of the verification state machine.
#[derive(Debug, Default)]
pub struct AccessGuard {
    state: GuardState,
}

impl AccessGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    /// Drive the guard to a terminal state. Calling it again afterwards
    /// returns the same state without another request.
    pub async fn run<T: Transport>(
        &mut self,
        client: &ApiClient<T>,
        session: &mut SessionStore,
    ) -> GuardState {
        if self.state.is_terminal() {
            return self.state;
        }

        self.state = if !session.has_token() {
            tracing::debug!("no session token, skipping verification");
            GuardState::Unauthorized
        } else {
            match client.verify(session).await {
                Ok(user) => {
                    tracing::debug!(user = %user.user_name, "session verified");
                    match session.set_user(user) {
                        Ok(()) => GuardState::Authorized,
                        Err(_) => GuardState::Unauthorized,
                    }
                }
                Err(e) if e.is_unauthorized() => {
                    tracing::info!("session token rejected: {e}");
                    session.clear();
                    GuardState::Unauthorized
                }
                Err(e) => {
                    tracing::warn!("session verification failed: {e}");
                    session.clear();
                    GuardState::Unauthorized
                }
            }
        };

        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use store::{MemoryTokenStore, TokenStore};

    use crate::mock::MockTransport;
    use crate::ApiError;

    fn stored_session(tokens: &MemoryTokenStore) -> SessionStore {
        let mut session = SessionStore::new(tokens.clone());
        session.load();
        session
    }

    #[tokio::test]
    async fn test_no_token_is_unauthorized_without_network() {
        let mock = MockTransport::new();
        let client = ApiClient::new(mock.clone());
        let mut session = stored_session(&MemoryTokenStore::new());
        let mut guard = AccessGuard::new();
        assert_eq!(guard.state(), GuardState::Pending);

        let state = guard.run(&client, &mut session).await;

        assert_eq!(state, GuardState::Unauthorized);
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn test_accepted_token_populates_user() {
        let mock = MockTransport::new();
        mock.respond(200, json!({"user": {"id": 1, "user_name": "alice"}}));
        let client = ApiClient::new(mock.clone());
        let mut session = stored_session(&MemoryTokenStore::with_token("abc123"));

        let state = AccessGuard::new().run(&client, &mut session).await;

        assert_eq!(state, GuardState::Authorized);
        assert_eq!(session.user().map(|u| u.user_name.as_str()), Some("alice"));
        assert_eq!(mock.calls(), 1);
        assert_eq!(mock.last_request().unwrap().bearer.as_deref(), Some("abc123"));
    }

    #[tokio::test]
    async fn test_rejected_token_clears_session() {
        let tokens = MemoryTokenStore::with_token("abc123");
        let mock = MockTransport::new();
        mock.respond(401, json!({"message": "Token expired"}));
        let client = ApiClient::new(mock.clone());
        let mut session = stored_session(&tokens);

        let state = AccessGuard::new().run(&client, &mut session).await;

        assert_eq!(state, GuardState::Unauthorized);
        assert!(!session.has_token());
        assert!(session.user().is_none());
        assert!(tokens.load().is_none());
    }

    #[tokio::test]
    async fn test_transport_error_is_unauthorized() {
        let mock = MockTransport::new();
        mock.fail(ApiError::Transport("connection refused".into()));
        let client = ApiClient::new(mock.clone());
        let mut session = stored_session(&MemoryTokenStore::with_token("abc123"));

        let state = AccessGuard::new().run(&client, &mut session).await;

        assert_eq!(state, GuardState::Unauthorized);
        assert!(session.user().is_none());
        // no retry
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn test_malformed_success_is_unauthorized() {
        let mock = MockTransport::new();
        mock.respond(200, json!({"valid": true}));
        let client = ApiClient::new(mock);
        let mut session = stored_session(&MemoryTokenStore::with_token("abc123"));

        let state = AccessGuard::new().run(&client, &mut session).await;
        assert_eq!(state, GuardState::Unauthorized);
    }

    #[tokio::test]
    async fn test_terminal_state_is_sticky() {
        let mock = MockTransport::new();
        mock.respond(200, json!({"user": {"id": 1, "user_name": "alice"}}));
        let client = ApiClient::new(mock.clone());
        let mut session = stored_session(&MemoryTokenStore::with_token("abc123"));
        let mut guard = AccessGuard::new();

        guard.run(&client, &mut session).await;
        let again = guard.run(&client, &mut session).await;

        assert_eq!(again, GuardState::Authorized);
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn test_each_mount_verifies_again() {
        let mock = MockTransport::new();
        mock.respond(200, json!({"user": {"id": 1, "user_name": "alice"}}));
        mock.respond(200, json!({"user": {"id": 1, "user_name": "alice"}}));
        let client = ApiClient::new(mock.clone());
        let mut session = stored_session(&MemoryTokenStore::with_token("abc123"));

        AccessGuard::new().run(&client, &mut session).await;
        AccessGuard::new().run(&client, &mut session).await;

        assert_eq!(mock.calls(), 2);
    }

    #[tokio::test]
    async fn test_logout_then_mount_behaves_as_no_token() {
        let tokens = MemoryTokenStore::with_token("abc123");
        let mock = MockTransport::new();
        mock.respond(200, json!({"user": {"id": 1, "user_name": "alice"}}));
        let client = ApiClient::new(mock.clone());
        let mut session = stored_session(&tokens);

        assert_eq!(AccessGuard::new().run(&client, &mut session).await, GuardState::Authorized);
        session.clear();

        // fresh start after logout
        let mut restarted = stored_session(&tokens);
        let state = AccessGuard::new().run(&client, &mut restarted).await;

        assert_eq!(state, GuardState::Unauthorized);
        assert_eq!(mock.calls(), 1);
    }
}
