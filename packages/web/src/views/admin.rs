//! Landing page for administrators.

use dioxus::prelude::*;

use ui::{use_access_gate, use_auth, Access, LogoutButton};

use crate::Route;

#[component]
pub fn AdminHome() -> Element {
    let auth = use_auth();

    if use_access_gate(&[]) != Access::Granted {
        return rsx! {};
    }

    let who = auth()
        .user()
        .map(|user| user.display_name().to_string())
        .unwrap_or_default();

    rsx! {
        div {
            class: "app-page",

            header {
                class: "app-header",
                h1 { "Administration" }
                LogoutButton { class: "button secondary" }
            }

            p { "Signed in as {who}." }

            ul {
                li { Link { to: Route::Approvals {}, "Pending registrations" } }
                li { Link { to: Route::Dashboard {}, "Dashboard" } }
            }
        }
    }
}
