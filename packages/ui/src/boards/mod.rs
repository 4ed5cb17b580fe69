//! Per-view state. Each board is plain data plus the transitions a view
//! applies after a successful call, so the views stay thin and the rules
//! are testable without a renderer.

pub mod feed;
pub mod friends;
pub mod roster;

pub use feed::{PostFeed, SortMode};
pub use friends::{FriendChange, FriendUpdate, FriendsBoard, FriendsTab};
pub use roster::AdminRoster;
