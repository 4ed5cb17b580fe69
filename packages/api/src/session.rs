//! # Session store — who is signed in, and with which credential
//!
//! [`SessionStore`] is the client's single source of truth for "is there a
//! plausibly-valid bearer token, and who does it belong to". It is an
//! explicit context object: the UI builds one per application instance,
//! passes it down, and every gateway call reads the token from it at call
//! time.
//!
//! ## Lifecycle
//!
//! | Step | Operation | Token | User |
//! |------|-----------|-------|------|
//! | start | [`new`](SessionStore::new) | none | none |
//! | start | [`load`](SessionStore::load) | from storage, unvalidated | none |
//! | guard verified / login | [`set_user`](SessionStore::set_user) / [`set`](SessionStore::set) | kept / stored | populated |
//! | logout / verification failed | [`clear`](SessionStore::clear) | removed from memory and storage | none |
//!
//! ## Invariant
//!
//! A user is never held without a token: `set_user` refuses to attach an
//! identity when no token is present, and `clear` drops both together.
//!
//! All mutations are synchronous; the client runs on a single-threaded event
//! loop, so there is no locking around the in-memory state.

use std::fmt;
use std::sync::Arc;

use store::TokenStore;

use crate::error::ApiError;
use crate::models::UserInfo;

/// In-memory session backed by a persistent [`TokenStore`].
#[derive(Clone)]
pub struct SessionStore {
    tokens: Arc<dyn TokenStore>,
    token: Option<String>,
    user: Option<UserInfo>,
}

impl SessionStore {
    /// Create an empty session over `tokens`. Nothing is read until [`load`](Self::load).
    pub fn new(tokens: impl TokenStore + 'static) -> Self {
        Self {
            tokens: Arc::new(tokens),
            token: None,
            user: None,
        }
    }

    /// Pick up the persisted token, if any. Does not validate it; any
    /// previously resolved user is dropped. Returns whether a token was found.
    pub fn load(&mut self) -> bool {
        self.token = self.tokens.load();
        self.user = None;
        self.token.is_some()
    }

    /// Store a fresh credential pair and persist the token.
    pub fn set(&mut self, token: String, user: UserInfo) {
        self.tokens.save(&token);
        self.token = Some(token);
        self.user = Some(user);
    }

    /// Attach a verified identity to the current token.
    pub fn set_user(&mut self, user: UserInfo) -> Result<(), ApiError> {
        if self.token.is_none() {
            return Err(ApiError::MissingToken);
        }
        self.user = Some(user);
        Ok(())
    }

    /// Forget the token (memory and storage) and the resolved user.
    pub fn clear(&mut self) {
        self.tokens.remove();
        self.token = None;
        self.user = None;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&UserInfo> {
        self.user.as_ref()
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Token for an authenticated call, or [`ApiError::MissingToken`].
    pub fn bearer(&self) -> Result<&str, ApiError> {
        self.token().ok_or(ApiError::MissingToken)
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("user", &self.user)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryTokenStore;

    fn alice() -> UserInfo {
        UserInfo {
            id: 1,
            user_name: "alice".to_string(),
            email: None,
            role: Default::default(),
            icon_url: None,
        }
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = SessionStore::new(MemoryTokenStore::with_token("abc123"));
        assert!(!session.has_token());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_load_reads_token_without_user() {
        let mut session = SessionStore::new(MemoryTokenStore::with_token("abc123"));
        assert!(session.load());
        assert_eq!(session.token(), Some("abc123"));
        assert!(session.user().is_none());
    }

    #[test]
    fn test_load_without_persisted_token() {
        let mut session = SessionStore::new(MemoryTokenStore::new());
        assert!(!session.load());
        assert!(matches!(session.bearer(), Err(ApiError::MissingToken)));
    }

    #[test]
    fn test_set_persists_token() {
        let tokens = MemoryTokenStore::new();
        let mut session = SessionStore::new(tokens.clone());

        session.set("abc123".to_string(), alice());

        assert_eq!(tokens.load().as_deref(), Some("abc123"));
        assert_eq!(session.user().map(|u| u.user_name.as_str()), Some("alice"));
        assert_eq!(session.bearer(), Ok("abc123"));
    }

    #[test]
    fn test_set_user_requires_token() {
        let mut session = SessionStore::new(MemoryTokenStore::new());
        assert_eq!(session.set_user(alice()), Err(ApiError::MissingToken));
        assert!(session.user().is_none());
    }

    #[test]
    fn test_clear_removes_memory_and_storage() {
        let tokens = MemoryTokenStore::with_token("abc123");
        let mut session = SessionStore::new(tokens.clone());
        session.load();
        session.set_user(alice()).unwrap();

        session.clear();

        assert!(!session.has_token());
        assert!(session.user().is_none());
        assert!(tokens.load().is_none());

        // A later start behaves as logged out.
        let mut next = SessionStore::new(tokens);
        assert!(!next.load());
    }

    #[test]
    fn test_clones_share_storage() {
        let tokens = MemoryTokenStore::new();
        let mut session = SessionStore::new(tokens.clone());
        session.set("abc123".to_string(), alice());

        let mut copy = session.clone();
        copy.clear();

        assert!(tokens.load().is_none());
        // The original's in-memory view is its own until reloaded.
        assert!(session.has_token());
        assert!(!session.load());
    }

    #[test]
    fn test_debug_redacts_token() {
        let mut session = SessionStore::new(MemoryTokenStore::new());
        session.set("abc123".to_string(), alice());
        let printed = format!("{session:?}");
        assert!(!printed.contains("abc123"));
        assert!(printed.contains("<redacted>"));
    }
}
