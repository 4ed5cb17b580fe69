//! This crate contains all shared UI for the workspace.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod boards;
pub mod views;

mod session;
pub use session::{
    load_config, make_token_store, use_api, use_config, use_session, LogoutButton,
    SessionProvider,
};

mod guard;
pub use guard::ProtectedView;

mod loadable;
pub use loadable::Loadable;

mod pause;
pub use pause::pause;

mod navbar;
pub use navbar::Navbar;

mod avatar;
pub use avatar::Avatar;

mod post_card;
pub use post_card::PostCard;

mod dialogs;
pub use dialogs::{CreatePostDialog, UploadAvatarDialog};
