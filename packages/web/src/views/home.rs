//! Public landing page.

use dioxus::prelude::*;
use ui::use_guest_gate;

use crate::Route;

#[component]
pub fn Home() -> Element {
    if use_guest_gate() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "guest-page",

            h1 { "BizLedger" }
            p { class: "tagline", "Customers, products, vendors and sales in one place." }

            div {
                class: "guest-actions",
                Link { class: "button primary", to: Route::Login {}, "Sign in" }
                Link { class: "button secondary", to: Route::Register {}, "Create an account" }
                Link { class: "button secondary", to: Route::Contact {}, "Contact us" }
            }
        }
    }
}
