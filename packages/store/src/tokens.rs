//! # Token persistence — the single key the client keeps between visits
//!
//! The client persists exactly one value: the bearer token issued by the server
//! at login. Its presence means "plausibly logged in", its absence means
//! "logged out". Nothing else about the session (the resolved user, the
//! verification outcome) is ever written to storage.
//!
//! ## [`TokenStore`] trait
//!
//! A synchronous three-method interface (`load` / `save` / `remove`).
//! Implementations live in sibling modules:
//!
//! | Backend | Module | Used on |
//! |---------|--------|---------|
//! | [`MemoryTokenStore`](crate::MemoryTokenStore) | `memory` | tests, previews |
//! | [`FileTokenStore`](crate::FileTokenStore) | `file_store` | native builds |
//! | `LocalStorageTokenStore` | `local_storage` | browser (`web` feature) |
//!
//! Backends swallow storage errors: a failed read behaves as "no token", a
//! failed write leaves the previous state in place.

/// Key under which the bearer token is persisted.
pub const TOKEN_KEY: &str = "token";

/// Persistent holder for the bearer token.
pub trait TokenStore {
    /// Read the persisted token, if any. Empty values count as absent.
    fn load(&self) -> Option<String>;

    /// Persist `token`, replacing any previous value.
    fn save(&self, token: &str);

    /// Forget the persisted token.
    fn remove(&self);
}

/// Normalise a raw stored value: surrounding whitespace is dropped and an
/// empty string is treated as "no token".
pub(crate) fn normalise(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
