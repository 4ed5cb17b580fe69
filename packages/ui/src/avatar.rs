use dioxus::prelude::*;

use crate::icons::FaUser;
use crate::session::{use_api, use_config};
use crate::Icon;

/// A user's avatar icon, or a placeholder when none was uploaded.
///
/// Bump `revision` to reload after an upload.
#[component]
pub fn Avatar(
    username: String,
    #[props(default = 64)] size: u32,
    #[props(default)] revision: u32,
) -> Element {
    let client = use_api();
    let config = use_config();

    let icon = use_resource(use_reactive((&username, &revision), move |(username, _revision)| {
        let client = client.clone();
        async move {
            match client.avatar_url(&username).await {
                Ok(url) => url,
                Err(e) => {
                    tracing::warn!(%username, "avatar lookup failed: {e}");
                    None
                }
            }
        }
    }));

    let src = icon.cloned().flatten().map(|url| config.resolve(&url));

    rsx! {
        div {
            class: "avatar",
            style: "width: {size}px; height: {size}px;",
            if let Some(src) = src {
                img { src: "{src}", alt: "{username}" }
            } else {
                Icon { icon: FaUser, width: size / 2, height: size / 2 }
            }
        }
    }
}
