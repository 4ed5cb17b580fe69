//! Session context and hooks for the UI.
//!
//! [`SessionProvider`] builds the per-application context once: the client
//! configuration, the HTTP gateway and a `Signal<SessionStore>` whose token
//! has been picked up from persistent storage. Views read them through
//! [`use_config`], [`use_api`] and [`use_session`].

use api::{ClientConfig, HttpClient, ReqwestTransport, SessionStore};
use dioxus::prelude::*;
use store::TokenStore;

/// Token storage for the current platform.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub fn make_token_store() -> impl TokenStore + 'static {
    store::LocalStorageTokenStore::new()
}

#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub fn make_token_store() -> impl TokenStore + 'static {
    store::MemoryTokenStore::new()
}

#[cfg(not(target_arch = "wasm32"))]
fn data_dir() -> std::path::PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("postwall")
}

#[cfg(not(target_arch = "wasm32"))]
pub fn make_token_store() -> impl TokenStore + 'static {
    store::FileTokenStore::new(data_dir())
}

/// Client configuration: `postwall.toml` beside the token on native builds,
/// the build-time server URL in the browser.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_config() -> ClientConfig {
    ClientConfig::load(&data_dir())
}

#[cfg(target_arch = "wasm32")]
pub fn load_config() -> ClientConfig {
    ClientConfig::from_build_env()
}

/// The session signal. Write to it only between awaits.
pub fn use_session() -> Signal<SessionStore> {
    use_context::<Signal<SessionStore>>()
}

pub fn use_api() -> HttpClient {
    use_context::<HttpClient>()
}

pub fn use_config() -> ClientConfig {
    use_context::<ClientConfig>()
}

/// Wrap the router with this component.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let config = use_context_provider(load_config);
    use_context_provider(move || {
        tracing::info!(base_url = %config.base_url(), "api client configured");
        HttpClient::new(ReqwestTransport::new(config))
    });
    use_context_provider(|| {
        let mut session = SessionStore::new(make_token_store());
        let found = session.load();
        tracing::debug!(found, "stored session token");
        Signal::new(session)
    });

    rsx! {
        {children}
    }
}

/// Clears the session (memory and storage), then calls `on_logout`.
#[component]
pub fn LogoutButton(
    on_logout: EventHandler<()>,
    #[props(default = "Logout".to_string())] label: String,
    #[props(default)] class: String,
) -> Element {
    let mut session = use_session();

    rsx! {
        button {
            class: "btn btn--ghost {class}",
            r#type: "button",
            onclick: move |_| {
                session.write().clear();
                tracing::info!("signed out");
                on_logout.call(());
            },
            "{label}"
        }
    }
}
