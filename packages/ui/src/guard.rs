use api::{AccessGuard, GuardState};
use dioxus::prelude::*;

use crate::components::Spinner;
use crate::session::{use_api, use_session};

/// Renders `children` only after the stored token has been verified.
///
/// Verification starts when the component mounts and runs once per mount.
/// While it is in flight a spinner is shown; on failure nothing is rendered
/// and `on_unauthorized` fires so the caller can replace the route with the
/// login page.
#[component]
pub fn ProtectedView(on_unauthorized: EventHandler<()>, children: Element) -> Element {
    let client = use_api();
    let mut session = use_session();
    let mut state = use_signal(GuardState::default);

    use_hook(move || {
        spawn(async move {
            let mut snapshot = session.peek().clone();
            let outcome = AccessGuard::new().run(&client, &mut snapshot).await;
            session.set(snapshot);
            state.set(outcome);
            if outcome == GuardState::Unauthorized {
                on_unauthorized.call(());
            }
        });
    });

    match state() {
        GuardState::Pending => rsx! {
            Spinner { label: "Checking your session..." }
        },
        GuardState::Authorized => rsx! {
            {children}
        },
        GuardState::Unauthorized => rsx! {},
    }
}
