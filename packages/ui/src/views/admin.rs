use api::{HttpClient, SessionStore};
use dioxus::prelude::*;

use crate::boards::AdminRoster;
use crate::components::{Button, ButtonVariant, ErrorBanner, Spinner};
use crate::loadable::Loadable;
use crate::session::{use_api, use_session};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Action {
    Delete(i64),
    SetBlocked(i64, bool),
}

async fn apply(
    client: HttpClient,
    session: Signal<SessionStore>,
    mut roster: Signal<Loadable<AdminRoster>>,
    mut error: Signal<Option<String>>,
    action: Action,
) {
    let snapshot = session.peek().clone();
    let outcome = match action {
        Action::Delete(user_id) => client.admin_delete_user(&snapshot, user_id).await,
        Action::SetBlocked(user_id, blocked) => {
            client.admin_set_blocked(&snapshot, user_id, blocked).await
        }
    };
    if let Err(e) = outcome {
        tracing::warn!(?action, "admin action failed: {e}");
        error.set(Some(e.to_string()));
        return;
    }

    tracing::info!(?action, "admin action applied");
    error.set(None);
    if let Some(r) = roster.write().ready_mut() {
        match action {
            Action::Delete(user_id) => r.remove(user_id),
            Action::SetBlocked(user_id, blocked) => r.set_blocked(user_id, blocked),
        }
    }
}

/// User management. Only rendered for admins; everyone else gets a notice
/// and no request is made.
#[component]
pub fn AdminView() -> Element {
    let client = use_api();
    let session = use_session();
    let roster = use_signal(Loadable::<AdminRoster>::default);
    let error = use_signal(|| Option::<String>::None);

    let run = {
        let client = client.clone();
        move |action: Action| {
            spawn(apply(client.clone(), session, roster, error, action));
        }
    };

    let is_admin = session.read().user().is_some_and(|u| u.is_admin());

    let _loader = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            let mut roster = roster;
            async move {
                if !is_admin {
                    return;
                }
                let snapshot = session.peek().clone();
                let result = client.admin_users(&snapshot).await;
                roster.set(Loadable::from_result(result.map(AdminRoster::new)));
            }
        }
    });

    if !is_admin {
        return rsx! {
            section {
                class: "page",
                h1 { "Admin" }
                p { class: "empty-state", "This page is only available to administrators." }
            }
        };
    }

    let users = match &*roster.read() {
        Loadable::Loading => return rsx! { Spinner {} },
        Loadable::Failed(message) => {
            return rsx! { ErrorBanner { message: Some(message.clone()) } };
        }
        Loadable::Ready(r) => r.users.clone(),
    };

    rsx! {
        section {
            class: "page",
            h1 { "Users" }
            ErrorBanner { message: error() }
            table {
                class: "admin-table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Email" }
                        th { "Role" }
                        th { "Joined" }
                        th { "Status" }
                        th {}
                    }
                }
                tbody {
                    for user in users {
                        tr {
                            key: "{user.id}",
                            td { "{user.user_name}" }
                            td { {user.email.clone().unwrap_or_default()} }
                            td { {user.role.as_str()} }
                            td { {user.created_at.format("%Y-%m-%d").to_string()} }
                            td { if user.status { "Active" } else { "Blocked" } }
                            td {
                                class: "admin-table__actions",
                                Button {
                                    variant: ButtonVariant::Outline,
                                    onclick: {
                                        let run = run.clone();
                                        let action = Action::SetBlocked(user.id, user.status);
                                        move |_| run(action)
                                    },
                                    if user.status { "Block" } else { "Unblock" }
                                }
                                Button {
                                    variant: ButtonVariant::Danger,
                                    onclick: {
                                        let run = run.clone();
                                        let action = Action::Delete(user.id);
                                        move |_| run(action)
                                    },
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
