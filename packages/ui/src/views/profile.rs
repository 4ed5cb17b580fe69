use api::{HttpClient, SessionStore};
use dioxus::prelude::*;

use crate::avatar::Avatar;
use crate::boards::{PostFeed, SortMode};
use crate::components::{Button, ButtonVariant};
use crate::dialogs::{CreatePostDialog, UploadAvatarDialog};
use crate::loadable::Loadable;
use crate::session::{use_api, use_session};
use crate::views::PostList;

async fn load_posts(
    client: HttpClient,
    session: Signal<SessionStore>,
    username: String,
    mut feed: Signal<Loadable<PostFeed>>,
) {
    let snapshot = session.peek().clone();
    let result = client.user_posts(&snapshot, &username).await;
    let result = result.map(|posts| PostFeed::by_author(posts, &username));
    feed.set(Loadable::from_result(result));
}

#[derive(Clone, Copy, PartialEq)]
enum Dialog {
    None,
    NewPost,
    Avatar,
}

/// A user's page: avatar and posts. The owner can publish and change the
/// avatar from here.
#[component]
pub fn ProfileView(username: String) -> Element {
    let client = use_api();
    let session = use_session();
    let mut feed = use_signal(Loadable::<PostFeed>::default);
    let mut dialog = use_signal(|| Dialog::None);
    let mut avatar_revision = use_signal(|| 0u32);

    let is_own = session.read().user().is_some_and(|u| u.user_name == username);

    let _loader = use_resource({
        let client = client.clone();
        use_reactive((&username,), move |(username,)| {
            let client = client.clone();
            async move {
                feed.set(Loadable::Loading);
                load_posts(client, session, username, feed).await;
            }
        })
    });

    let on_created = {
        let username = username.clone();
        move |_: ()| {
            dialog.set(Dialog::None);
            spawn(load_posts(client.clone(), session, username.clone(), feed));
        }
    };

    rsx! {
        section {
            class: "page",
            header {
                class: "profile-header",
                Avatar { username: username.clone(), size: 96, revision: avatar_revision() }
                h1 { "{username}" }
                if is_own {
                    div {
                        class: "profile-header__actions",
                        Button { onclick: move |_| dialog.set(Dialog::NewPost), "New post" }
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| dialog.set(Dialog::Avatar),
                            "Change avatar"
                        }
                    }
                }
            }

            PostList { feed, sort: SortMode::Default, own_feed: is_own }

            {match dialog() {
                Dialog::NewPost => rsx! {
                    CreatePostDialog {
                        on_created,
                        on_close: move |_| dialog.set(Dialog::None),
                    }
                },
                Dialog::Avatar => rsx! {
                    UploadAvatarDialog {
                        on_uploaded: move |_| {
                            dialog.set(Dialog::None);
                            avatar_revision += 1;
                        },
                        on_close: move |_| dialog.set(Dialog::None),
                    }
                },
                Dialog::None => rsx! {},
            }}
        }
    }
}
