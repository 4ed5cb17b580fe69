use dioxus::prelude::*;
use ui::ProtectedView;

use crate::Route;

/// Verifies the session on mount; unauthorized visitors are sent to the
/// login page with history replaced.
#[component]
pub fn Guarded(children: Element) -> Element {
    let nav = use_navigator();

    rsx! {
        ProtectedView {
            on_unauthorized: move |_| {
                nav.replace(Route::Login {});
            },
            {children}
        }
    }
}
