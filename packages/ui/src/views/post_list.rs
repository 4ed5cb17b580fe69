use api::{HttpClient, Reaction, SessionStore};
use dioxus::prelude::*;

use crate::boards::{PostFeed, SortMode};
use crate::components::{ErrorBanner, Spinner};
use crate::loadable::Loadable;
use crate::post_card::PostCard;
use crate::session::{use_api, use_session};

async fn react(
    client: HttpClient,
    session: Signal<SessionStore>,
    mut feed: Signal<Loadable<PostFeed>>,
    mut error: Signal<Option<String>>,
    post_id: i64,
    reaction: Reaction,
) {
    let snapshot = session.peek().clone();
    match client.react(&snapshot, post_id, reaction).await {
        Ok(summary) => {
            if let Some(posts) = feed.write().ready_mut() {
                posts.apply_reaction(post_id, &summary);
            }
        }
        Err(e) => error.set(Some(e.to_string())),
    }
}

async fn delete(
    client: HttpClient,
    session: Signal<SessionStore>,
    mut feed: Signal<Loadable<PostFeed>>,
    mut error: Signal<Option<String>>,
    post_id: i64,
) {
    let snapshot = session.peek().clone();
    match client.delete_post(&snapshot, post_id).await {
        Ok(()) => {
            if let Some(posts) = feed.write().ready_mut() {
                posts.remove(post_id);
            }
        }
        Err(e) => error.set(Some(e.to_string())),
    }
}

/// Renders a loaded feed in `sort` order and applies reactions and
/// deletions to it once the server confirms them.
#[component]
pub fn PostList(
    feed: Signal<Loadable<PostFeed>>,
    sort: SortMode,
    /// Every post in the feed belongs to the viewer.
    #[props(default)]
    own_feed: bool,
) -> Element {
    let client = use_api();
    let session = use_session();
    let error = use_signal(|| Option::<String>::None);
    let viewer = session.read().user().map(|u| u.user_name.clone());

    let posts = match &*feed.read() {
        Loadable::Loading => return rsx! { Spinner {} },
        Loadable::Failed(message) => {
            return rsx! { ErrorBanner { message: Some(message.clone()) } };
        }
        Loadable::Ready(feed) if feed.is_empty() => {
            return rsx! {
                p { class: "empty-state", "No posts yet." }
            };
        }
        Loadable::Ready(feed) => feed.sorted(sort),
    };

    rsx! {
        ErrorBanner { message: error() }
        div {
            class: "post-list",
            for post in posts {
                PostCard {
                    key: "{post.id}",
                    can_delete: own_feed || (viewer.is_some() && post.author_name == viewer),
                    post: post.clone(),
                    on_react: {
                        let client = client.clone();
                        let post_id = post.id;
                        move |reaction: Reaction| {
                            spawn(react(client.clone(), session, feed, error, post_id, reaction));
                        }
                    },
                    on_delete: {
                        let client = client.clone();
                        move |post_id: i64| {
                            spawn(delete(client.clone(), session, feed, error, post_id));
                        }
                    },
                }
            }
        }
    }
}
