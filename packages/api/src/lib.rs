//! # API crate — typed REST gateway, session store and access guard
//!
//! Everything the Postwall client knows about the server lives here. The UI
//! crates never build HTTP requests themselves; they hold a [`SessionStore`]
//! and an [`ApiClient`] and call its typed methods.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`client`] | — | [`ApiClient`]: one async method per server operation (auth, posts, friends, avatar, admin) |
//! | [`error`] | — | [`ApiError`]: the single failure type every operation returns |
//! | [`guard`] | — | [`AccessGuard`]: `Pending → Authorized / Unauthorized` verification for protected views |
//! | [`models`] | — | Validated records: [`UserInfo`], [`Post`], [`Friend`], [`AdminUser`], … |
//! | [`session`] | — | [`SessionStore`]: bearer token + resolved user over a persistent [`store::TokenStore`] |
//! | [`transport`] | — | [`Transport`] seam and the `reqwest`-backed [`ReqwestTransport`] |
//! | `mock` | `mock` | `MockTransport`: scripted responses and a request log for tests |
//!
//! ## Error policy
//!
//! Every operation returns `Result<T, ApiError>`, including the friend
//! relationship mutations. Callers choose how to surface a failure; nothing is
//! logged-and-dropped inside the gateway.

pub mod client;
pub mod error;
pub mod guard;
pub mod models;
pub mod session;
pub mod transport;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use client::{ApiClient, HttpClient};
pub use error::ApiError;
pub use guard::{AccessGuard, GuardState, LOGIN_PATH};
pub use models::{
    AccessType, AdminUser, Friend, FriendRequest, FriendRequests, ImageFile, LoginResponse, Post,
    PostDraft, Reaction, ReactionSummary, Registration, Role, UserInfo, UserSearchResult,
    UserSummary,
};
pub use session::SessionStore;
pub use transport::{ReqwestTransport, Transport};

pub use store::ClientConfig;
