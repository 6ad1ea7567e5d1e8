//! Public contact page.

use dioxus::prelude::*;
use ui::use_guest_gate;

use crate::Route;

#[component]
pub fn Contact() -> Element {
    if use_guest_gate() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "guest-page",

            h1 { "Contact" }
            p { "Questions about BizLedger? Write to us at " }
            p { a { href: "mailto:support@bizledger.example", "support@bizledger.example" } }

            p {
                Link { to: Route::Home {}, "Back to home" }
            }
        }
    }
}
