use dioxus::prelude::*;
use ui::views::AdminView;

use super::Guarded;

#[component]
pub fn Admin() -> Element {
    rsx! {
        Guarded { AdminView {} }
    }
}
