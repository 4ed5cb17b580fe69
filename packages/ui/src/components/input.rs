use dioxus::prelude::*;

#[component]
pub fn Input(
    value: String,
    oninput: EventHandler<FormEvent>,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] id: String,
    #[props(default)] placeholder: String,
    #[props(default)] class: String,
) -> Element {
    rsx! {
        input {
            class: "input {class}",
            id,
            r#type: r#type,
            placeholder,
            value,
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label { class: "label", r#for: "{html_for}", {children} }
    }
}

/// Inline error box. Renders nothing for `None`.
#[component]
pub fn ErrorBanner(message: Option<String>) -> Element {
    match message {
        Some(message) => rsx! {
            div { class: "error-banner", role: "alert", "{message}" }
        },
        None => rsx! {},
    }
}
