use std::str::FromStr;

use dioxus::prelude::*;

use crate::boards::{PostFeed, SortMode};
use crate::loadable::Loadable;
use crate::session::{use_api, use_session};
use crate::views::PostList;

/// Every post visible to the viewer, with a sort selector.
#[component]
pub fn PostsView() -> Element {
    let client = use_api();
    let session = use_session();
    let mut feed = use_signal(Loadable::<PostFeed>::default);
    let mut sort = use_signal(SortMode::default);

    let _loader = use_resource(move || {
        let client = client.clone();
        async move {
            let snapshot = session.peek().clone();
            let result = client.list_posts(&snapshot).await;
            feed.set(Loadable::from_result(result.map(PostFeed::new)));
        }
    });

    rsx! {
        section {
            class: "page",
            header {
                class: "page__header",
                h1 { "Posts" }
                select {
                    class: "input input--inline",
                    value: sort().as_str(),
                    onchange: move |evt| {
                        if let Ok(mode) = SortMode::from_str(&evt.value()) {
                            sort.set(mode);
                        }
                    },
                    for mode in SortMode::ALL {
                        option { value: mode.as_str(), {mode.label()} }
                    }
                }
            }
            PostList { feed, sort: sort() }
        }
    }
}
