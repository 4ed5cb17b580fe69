//! Friends, user search and pending requests.
//!
//! Every mutation waits for the server before the board changes. Failures
//! are shown in the banner at the top of the page.

use api::{HttpClient, SessionStore};
use dioxus::prelude::*;

use crate::boards::friends::{search, submit};
use crate::boards::{FriendChange, FriendsBoard, FriendsTab};
use crate::components::{Button, ButtonVariant, ErrorBanner, Input, Spinner};
use crate::loadable::Loadable;
use crate::session::{use_api, use_session};

async fn apply(
    client: HttpClient,
    session: Signal<SessionStore>,
    mut board: Signal<Loadable<FriendsBoard>>,
    mut error: Signal<Option<String>>,
    change: FriendChange,
) {
    let snapshot = session.peek().clone();
    match submit(&client, &snapshot, change).await {
        Ok(update) => {
            if let Some(b) = board.write().ready_mut() {
                b.apply(update);
            }
            error.set(None);
        }
        Err(e) => {
            tracing::warn!(?change, "friend update failed: {e}");
            error.set(Some(e.to_string()));
        }
    }
}

#[component]
pub fn FriendsView(on_open_profile: EventHandler<String>) -> Element {
    let client = use_api();
    let session = use_session();
    let mut board = use_signal(Loadable::<FriendsBoard>::default);
    let mut tab = use_signal(FriendsTab::default);
    let mut query = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let _loader = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                let snapshot = session.peek().clone();
                board.set(Loadable::from_result(FriendsBoard::fetch(&client, &snapshot).await));
            }
        }
    });

    let run = {
        let client = client.clone();
        move |change: FriendChange| {
            spawn(apply(client.clone(), session, board, error, change));
        }
    };

    let handle_search = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            let snapshot = session.peek().clone();
            match search(&client, &snapshot, &query()).await {
                Ok(results) => {
                    if let Some(b) = board.write().ready_mut() {
                        b.set_results(results);
                    }
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let current = board.read().clone();
    let data = match current {
        Loadable::Loading => return rsx! { Spinner {} },
        Loadable::Failed(message) => return rsx! { ErrorBanner { message: Some(message) } },
        Loadable::Ready(data) => data,
    };
    let pending = data.received.len();

    rsx! {
        section {
            class: "page",
            h1 { "Friends" }

            nav {
                class: "tabs",
                for t in FriendsTab::ALL {
                    button {
                        class: tab_class(tab() == t),
                        r#type: "button",
                        onclick: move |_| tab.set(t),
                        {t.label()}
                        if t == FriendsTab::Requests && pending > 0 {
                            span { class: "tab__count", " ({pending})" }
                        }
                    }
                }
            }

            ErrorBanner { message: error() }

            {match tab() {
                FriendsTab::Friends => rsx! {
                    if data.friends.is_empty() {
                        p { class: "empty-state", "No friends yet. Find people to connect with." }
                    }
                    ul {
                        class: "people-list",
                        for friend in data.friends.clone() {
                            li {
                                key: "{friend.id}",
                                button {
                                    class: "link",
                                    r#type: "button",
                                    onclick: {
                                        let name = friend.user_name.clone();
                                        move |_| on_open_profile.call(name.clone())
                                    },
                                    "{friend.user_name}"
                                }
                                Button {
                                    variant: ButtonVariant::Danger,
                                    onclick: {
                                        let run = run.clone();
                                        move |_| run(FriendChange::Remove(friend.id))
                                    },
                                    "Remove"
                                }
                            }
                        }
                    }
                },
                FriendsTab::Search => rsx! {
                    form {
                        class: "search-form",
                        onsubmit: handle_search,
                        Input {
                            placeholder: "Search by name or email",
                            value: query(),
                            oninput: move |evt: FormEvent| query.set(evt.value()),
                        }
                        Button { r#type: "submit", "Search" }
                    }
                    ul {
                        class: "people-list",
                        for hit in data.results.clone() {
                            li {
                                key: "{hit.id}",
                                span { "{hit.user_name}" }
                                if let Some(email) = &hit.email {
                                    span { class: "muted", " {email}" }
                                }
                                if data.is_friend(hit.id) {
                                    span { class: "muted", "Friend" }
                                } else if data.is_pending(hit.id) {
                                    span { class: "muted", "Request sent" }
                                } else {
                                    Button {
                                        onclick: {
                                            let run = run.clone();
                                            move |_| run(FriendChange::Send(hit.id))
                                        },
                                        "Add friend"
                                    }
                                }
                            }
                        }
                    }
                },
                FriendsTab::Requests => rsx! {
                    h2 { "Received" }
                    if data.received.is_empty() {
                        p { class: "empty-state", "No pending requests." }
                    }
                    ul {
                        class: "people-list",
                        for request in data.received.clone() {
                            li {
                                key: "{request.id}",
                                span { "{request.user_name}" }
                                Button {
                                    onclick: {
                                        let run = run.clone();
                                        move |_| run(FriendChange::Accept(request.id))
                                    },
                                    "Accept"
                                }
                                Button {
                                    variant: ButtonVariant::Outline,
                                    onclick: {
                                        let run = run.clone();
                                        move |_| run(FriendChange::Reject(request.id))
                                    },
                                    "Reject"
                                }
                            }
                        }
                    }
                    h2 { "Sent" }
                    ul {
                        class: "people-list",
                        for request in data.sent.clone() {
                            li { key: "{request.id}", "{request.user_name}" }
                        }
                    }
                },
            }}
        }
    }
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "tab tab--active"
    } else {
        "tab"
    }
}
