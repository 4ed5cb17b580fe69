//! Username/password sign-in form.

use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, ErrorBanner, Input, Label};
use crate::session::{use_api, use_session};

/// On success the session holds the issued token and user, and
/// `on_signed_in` receives the user name.
#[component]
pub fn LoginView(on_signed_in: EventHandler<String>, on_register: EventHandler<()>) -> Element {
    let client = use_api();
    let mut session = use_session();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            let name = username().trim().to_string();
            let pass = password();
            if name.is_empty() || pass.is_empty() {
                error.set(Some("Enter your username and password".to_string()));
                return;
            }

            error.set(None);
            loading.set(true);
            match client.login(&name, &pass).await {
                Ok(response) => {
                    let user_name = response.user.user_name.clone();
                    session.write().set(response.token, response.user);
                    tracing::info!(%user_name, "signed in");
                    on_signed_in.call(user_name);
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        section {
            class: "page page--centered",
            h1 { "Sign in" }

            form {
                class: "auth-form",
                onsubmit: handle_login,

                ErrorBanner { message: error() }

                div {
                    class: "field",
                    Label { html_for: "login-username", "Username" }
                    Input {
                        id: "login-username",
                        value: username(),
                        oninput: move |evt: FormEvent| username.set(evt.value()),
                    }
                }
                div {
                    class: "field",
                    Label { html_for: "login-password", "Password" }
                    Input {
                        id: "login-password",
                        r#type: "password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }

                Button {
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }

            p {
                class: "auth-switch",
                "No account yet? "
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| on_register.call(()),
                    "Register"
                }
            }
        }
    }
}
