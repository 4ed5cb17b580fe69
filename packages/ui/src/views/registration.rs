//! Account registration form.

use std::time::Duration;

use api::Registration;
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, ErrorBanner, Input, Label};
use crate::pause::pause;
use crate::session::use_api;

/// How long the confirmation stays up before moving on to sign-in.
const REDIRECT_DELAY: Duration = Duration::from_millis(1500);

fn check(registration: &Registration) -> Result<(), String> {
    if registration.username.trim().is_empty()
        || registration.email.trim().is_empty()
        || registration.password.is_empty()
    {
        return Err("All fields are required".to_string());
    }
    if !registration.email.contains('@') {
        return Err("Please enter a valid email".to_string());
    }
    Ok(())
}

#[component]
pub fn RegistrationView(on_registered: EventHandler<()>, on_login: EventHandler<()>) -> Element {
    let client = use_api();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut notice = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            let registration = Registration {
                username: username().trim().to_string(),
                email: email().trim().to_string(),
                password: password(),
            };
            if let Err(message) = check(&registration) {
                error.set(Some(message));
                return;
            }

            error.set(None);
            loading.set(true);
            match client.register(&registration).await {
                Ok(message) => {
                    notice.set(Some(message));
                    pause(REDIRECT_DELAY).await;
                    on_registered.call(());
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                    loading.set(false);
                }
            }
        });
    };

    rsx! {
        section {
            class: "page page--centered",
            h1 { "Create account" }

            form {
                class: "auth-form",
                onsubmit: handle_register,

                ErrorBanner { message: error() }
                if let Some(message) = notice() {
                    div { class: "notice", role: "status", "{message}" }
                }

                div {
                    class: "field",
                    Label { html_for: "reg-username", "Username" }
                    Input {
                        id: "reg-username",
                        value: username(),
                        oninput: move |evt: FormEvent| username.set(evt.value()),
                    }
                }
                div {
                    class: "field",
                    Label { html_for: "reg-email", "Email" }
                    Input {
                        id: "reg-email",
                        r#type: "email",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }
                div {
                    class: "field",
                    Label { html_for: "reg-password", "Password" }
                    Input {
                        id: "reg-password",
                        r#type: "password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }

                Button {
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Register" }
                }
            }

            p {
                class: "auth-switch",
                "Already registered? "
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| on_login.call(()),
                    "Sign in"
                }
            }
        }
    }
}
