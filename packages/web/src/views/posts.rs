use dioxus::prelude::*;
use ui::views::PostsView;

use super::Guarded;

#[component]
pub fn Posts() -> Element {
    rsx! {
        Guarded { PostsView {} }
    }
}
