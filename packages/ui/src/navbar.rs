use dioxus::prelude::*;

/// Top bar. Platform crates pass their router links as children.
#[component]
pub fn Navbar(
    #[props(default = "Postwall".to_string())] brand: String,
    children: Element,
) -> Element {
    rsx! {
        nav {
            class: "navbar",
            span { class: "navbar__brand", "{brand}" }
            div { class: "navbar__links", {children} }
        }
    }
}
