//! Default landing page for signed-in regular users.

use dioxus::prelude::*;

use ui::{use_access_gate, use_auth, Access, LogoutButton};

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();

    if use_access_gate(&[]) != Access::Granted {
        return rsx! {};
    }

    let state = auth();
    let (who, company) = match state.user() {
        Some(user) => (
            user.display_name().to_string(),
            user.client_name.clone().unwrap_or_default(),
        ),
        None => (String::new(), String::new()),
    };

    rsx! {
        div {
            class: "app-page",

            header {
                class: "app-header",
                h1 { "Dashboard" }
                LogoutButton { class: "button secondary" }
            }

            p { "Welcome back, {who}." }
            if !company.is_empty() {
                p { class: "muted", "Signed in for {company}." }
            }

            p {
                Link { to: Route::Approvals {}, "Pending registrations" }
            }
        }
    }
}
