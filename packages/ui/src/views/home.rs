use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};

/// Public landing page.
#[component]
pub fn HomeView(on_login: EventHandler<()>, on_register: EventHandler<()>) -> Element {
    rsx! {
        section {
            class: "page page--centered",
            h1 { class: "hero__title", "Postwall" }
            p { class: "hero__tagline", "Share posts with your friends, or with everyone." }
            div {
                class: "hero__actions",
                Button { onclick: move |_| on_login.call(()), "Sign in" }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_register.call(()),
                    "Create account"
                }
            }
        }
    }
}
