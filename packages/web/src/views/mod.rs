mod app_bar;
pub use app_bar::AppBar;

mod guarded;
use guarded::Guarded;

mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod registration;
pub use registration::Registration;

mod profile;
pub use profile::Profile;

mod posts;
pub use posts::Posts;

mod friends;
pub use friends::Friends;

mod admin;
pub use admin::Admin;
