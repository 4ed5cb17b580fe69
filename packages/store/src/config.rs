//! # Client configuration — `postwall.toml`
//!
//! The client has exactly one externally observable setting: the origin of the
//! REST server every call goes to.
//!
//! ## Structure
//!
//! ```toml
//! [server]
//! base_url = "http://localhost:3891"
//! ```
//!
//! ## Sources
//!
//! | Constructor | Source |
//! |-------------|--------|
//! | [`ClientConfig::load`] | `postwall.toml` in a directory (native builds), else the next source |
//! | [`ClientConfig::from_toml`] | a `postwall.toml` document |
//! | [`ClientConfig::from_build_env`] | `POSTWALL_SERVER_URL` captured at compile time, the way the browser bundle is configured |
//! | [`ClientConfig::default`] | `http://localhost:3891` |
//!
//! A missing or empty section is equivalent to the default configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Compile-time environment variable that selects the server origin.
pub const SERVER_URL_ENV: &str = "POSTWALL_SERVER_URL";

const DEFAULT_BASE_URL: &str = "http://localhost:3891";

/// Top-level configuration stored in `postwall.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub server: ServerConfig,
}

/// Server section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Origin of the REST server, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at `base_url`.
    pub fn new(base_url: &str) -> Self {
        Self {
            server: ServerConfig {
                base_url: base_url.trim_end_matches('/').to_string(),
            },
        }
    }

    /// Config baked in at build time from [`SERVER_URL_ENV`], falling back to
    /// the default origin when the variable was unset or blank.
    pub fn from_build_env() -> Self {
        match option_env!("POSTWALL_SERVER_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "postwall.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let parsed: Self = toml::from_str(s)?;
        Ok(Self::new(&parsed.server.base_url))
    }

    /// Read [`filename`](Self::filename) from `dir`. A missing or invalid
    /// file falls back to [`from_build_env`](Self::from_build_env).
    pub fn load(dir: &Path) -> Self {
        std::fs::read_to_string(dir.join(Self::filename()))
            .ok()
            .and_then(|text| Self::from_toml(&text).ok())
            .unwrap_or_else(Self::from_build_env)
    }

    /// Server origin without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.server.base_url
    }

    /// Resolve a server-relative path (e.g. an `iconUrl` returned by the API)
    /// against the base URL. Absolute URLs are returned unchanged.
    pub fn resolve(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        if path.starts_with('/') {
            format!("{}{}", self.base_url(), path)
        } else {
            format!("{}/{}", self.base_url(), path)
        }
    }
}
