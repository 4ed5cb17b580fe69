use dioxus::prelude::*;
use ui::views::RegistrationView;

use crate::Route;

#[component]
pub fn Registration() -> Element {
    let nav = use_navigator();

    rsx! {
        RegistrationView {
            on_registered: move |_| {
                nav.push(Route::Login {});
            },
            on_login: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}
