use dioxus::prelude::*;
use ui::{use_session, LogoutButton, Navbar};

use crate::Route;

/// Shared layout: top bar plus the routed page.
#[component]
pub fn AppBar() -> Element {
    let nav = use_navigator();
    let session = use_session();
    let user = session.read().user().cloned();

    rsx! {
        Navbar {
            if let Some(user) = user {
                Link { to: Route::Profile { username: user.user_name.clone() }, "Profile" }
                Link { to: Route::Posts {}, "Posts" }
                Link { to: Route::Friends {}, "Friends" }
                if user.is_admin() {
                    Link { to: Route::Admin {}, "Admin" }
                }
                LogoutButton {
                    on_logout: move |_| {
                        nav.replace(Route::Home {});
                    },
                }
            } else {
                Link { to: Route::Login {}, "Sign in" }
                Link { to: Route::Registration {}, "Register" }
            }
        }

        main {
            class: "content",
            Outlet::<Route> {}
        }
    }
}
