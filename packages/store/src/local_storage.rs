//! # localStorage token store — browser-side persistence
//!
//! [`LocalStorageTokenStore`] is the [`TokenStore`] used on the **web
//! platform**. It keeps the bearer token under the key [`TOKEN_KEY`] in
//! `window.localStorage`, which is where the server-issued token has always
//! lived for this client.
//!
//! The struct is zero-sized and looks up `window.localStorage` on every call,
//! so it stays `Clone + Send + Sync` even though `web_sys::Storage` is not.
//! Storage being unavailable (private mode, sandboxed iframe) degrades to
//! "logged out".

use crate::tokens::{normalise, TokenStore, TOKEN_KEY};

/// `window.localStorage`-backed TokenStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageTokenStore;

impl LocalStorageTokenStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        let raw = Self::storage()?.get_item(TOKEN_KEY).ok().flatten()?;
        normalise(&raw)
    }

    fn save(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }

    fn remove(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
