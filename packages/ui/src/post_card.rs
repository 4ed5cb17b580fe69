use api::{Post, Reaction};
use dioxus::prelude::*;

use crate::icons::{FaThumbsDown, FaThumbsUp, FaTrashCan};
use crate::session::use_config;
use crate::Icon;

#[component]
pub fn PostCard(
    post: Post,
    /// Show the delete action (own posts only).
    #[props(default)]
    can_delete: bool,
    on_react: EventHandler<Reaction>,
    on_delete: EventHandler<i64>,
) -> Element {
    let config = use_config();
    let image = post.image_url.as_deref().map(|url| config.resolve(url));
    let created = post.created_at.format("%Y-%m-%d %H:%M").to_string();
    let access = post.access_type;
    let access_label = access.label();
    let like_class = reaction_class(post.viewer_reaction == Some(Reaction::Like));
    let dislike_class = reaction_class(post.viewer_reaction == Some(Reaction::Dislike));
    let post_id = post.id;

    rsx! {
        article {
            class: "post-card",
            header {
                class: "post-card__header",
                h3 { "{post.title}" }
                span { class: "badge badge--{access}", "{access_label}" }
            }
            div {
                class: "post-card__meta",
                if let Some(author) = &post.author_name {
                    span { "{author} · " }
                }
                span { "{created}" }
                if post.was_edited {
                    span { class: "post-card__edited", " (edited)" }
                }
            }
            if let Some(src) = image {
                img { class: "post-card__image", src: "{src}", alt: "{post.title}" }
            }
            p { class: "post-card__body", "{post.description}" }
            footer {
                class: "post-card__actions",
                button {
                    class: like_class,
                    r#type: "button",
                    title: "Like",
                    onclick: move |_| on_react.call(Reaction::Like),
                    Icon { icon: FaThumbsUp, width: 14, height: 14 }
                    span { "{post.like_count}" }
                }
                button {
                    class: dislike_class,
                    r#type: "button",
                    title: "Dislike",
                    onclick: move |_| on_react.call(Reaction::Dislike),
                    Icon { icon: FaThumbsDown, width: 14, height: 14 }
                    span { "{post.dislike_count}" }
                }
                if can_delete {
                    button {
                        class: "reaction reaction--danger",
                        r#type: "button",
                        title: "Delete post",
                        onclick: move |_| on_delete.call(post_id),
                        Icon { icon: FaTrashCan, width: 14, height: 14 }
                    }
                }
            }
        }
    }
}

fn reaction_class(active: bool) -> &'static str {
    if active {
        "reaction reaction--active"
    } else {
        "reaction"
    }
}
