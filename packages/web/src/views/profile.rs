use dioxus::prelude::*;
use ui::views::ProfileView;

use super::Guarded;

#[component]
pub fn Profile(username: String) -> Element {
    rsx! {
        Guarded {
            ProfileView { username }
        }
    }
}
