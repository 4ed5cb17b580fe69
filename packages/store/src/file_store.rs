//! # Filesystem-backed token store
//!
//! [`FileTokenStore`] keeps the bearer token in a single file named
//! [`TOKEN_KEY`] inside a base directory. Native builds use it so a login
//! survives restarts the way `localStorage` does in the browser.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── token      # the bearer token as plain text
//! ```
//!
//! Use `dirs::data_dir()` joined with `postwall` for a platform-appropriate
//! base directory.

use std::path::PathBuf;

use crate::tokens::{normalise, TokenStore, TOKEN_KEY};

/// Filesystem-backed TokenStore for native persistence.
#[derive(Clone, Debug)]
pub struct FileTokenStore {
    base: PathBuf,
}

impl FileTokenStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn token_path(&self) -> PathBuf {
        self.base.join(TOKEN_KEY)
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        let content = std::fs::read_to_string(self.token_path()).ok()?;
        normalise(&content)
    }

    fn save(&self, token: &str) {
        let _ = std::fs::create_dir_all(&self.base);
        let _ = std::fs::write(self.token_path(), token);
    }

    fn remove(&self) {
        let _ = std::fs::remove_file(self.token_path());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "postwall_test_{}_{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = scratch_dir("roundtrip");

        let store = FileTokenStore::new(dir.clone());
        assert!(store.load().is_none());
        store.save("abc123");

        // Re-open from same directory
        let reopened = FileTokenStore::new(dir.clone());
        assert_eq!(reopened.load().as_deref(), Some("abc123"));

        reopened.remove();
        assert!(store.load().is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_remove_without_file_is_noop() {
        let dir = scratch_dir("remove_noop");

        let store = FileTokenStore::new(dir.clone());
        store.remove();
        assert!(store.load().is_none());
        assert!(!dir.exists());
    }
}
