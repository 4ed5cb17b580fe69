use dioxus::prelude::*;
use ui::views::FriendsView;

use super::Guarded;
use crate::Route;

#[component]
pub fn Friends() -> Element {
    let nav = use_navigator();

    rsx! {
        Guarded {
            FriendsView {
                on_open_profile: move |username: String| {
                    nav.push(Route::Profile { username });
                },
            }
        }
    }
}
