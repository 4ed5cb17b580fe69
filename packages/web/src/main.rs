use dioxus::prelude::*;

use ui::SessionProvider;
use views::{Admin, AppBar, Friends, Home, Login, Posts, Profile, Registration};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppBar)]
        #[route("/")]
        Home {},
        #[redirect("/home", || Route::Home {})]
        #[route("/login")]
        Login {},
        #[route("/registration")]
        Registration {},
        #[route("/profile/:username")]
        Profile { username: String },
        #[route("/posts")]
        Posts {},
        #[route("/friends")]
        Friends {},
        #[route("/admin")]
        Admin {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::init(tracing::Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}
