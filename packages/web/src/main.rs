use dioxus::prelude::*;

use store::AppConfig;
use ui::{AuthProvider, NoticeBanner, NoticeProvider};
use views::{AdminHome, Approvals, Contact, Dashboard, Home, Login, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/contact")]
    Contact {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/admin")]
    AdminHome {},
    #[route("/approvals")]
    Approvals {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = AppConfig::default();
    let dismiss_after_ms = config.notices.dismiss_after_ms;

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        NoticeProvider {
            dismiss_after_ms: dismiss_after_ms,
            AuthProvider {
                config: config,
                NoticeBanner {}
                Router::<Route> {}
            }
        }
    }
}
