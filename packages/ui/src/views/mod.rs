//! Views shared by the platform crates. Navigation is left to the caller
//! through event handlers, so these components never name a route.

mod admin;
pub use admin::AdminView;

mod friends;
pub use friends::FriendsView;

mod home;
pub use home::HomeView;

mod login;
pub use login::LoginView;

mod post_list;
pub use post_list::PostList;

mod posts;
pub use posts::PostsView;

mod profile;
pub use profile::ProfileView;

mod registration;
pub use registration::RegistrationView;
