//! Registration page: account details plus the registering company's
//! details, which an administrator later reviews on the approvals page.

use dioxus::prelude::*;

use api::RegistrationForm;
use ui::{push_notice, use_api, use_guest_gate, use_notices, NoticeLevel};

use crate::Route;

#[component]
pub fn Register() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut mobile = use_signal(String::new);
    let mut country = use_signal(String::new);
    let mut client_name = use_signal(String::new);
    let mut client_address = use_signal(String::new);
    let mut client_phone = use_signal(String::new);
    let mut gst_number = use_signal(String::new);
    let mut pan = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let mut notices = use_notices();
    let nav = use_navigator();
    let api = use_api();

    if use_guest_gate() {
        return rsx! {};
    }

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }

        let api = api.clone();

        spawn(async move {
            error.set(None);

            let form = RegistrationForm {
                name: name().trim().to_string(),
                email: email().trim().to_lowercase(),
                password: password(),
                mobile: mobile().trim().to_string(),
                country: country().trim().to_string(),
                client_name: client_name().trim().to_string(),
                client_address: client_address().trim().to_string(),
                client_phone: client_phone().trim().to_string(),
                gst_number: gst_number().trim().to_string(),
                pan: pan().trim().to_string(),
            };

            if form.name.is_empty() {
                error.set(Some("Name is required".to_string()));
                return;
            }
            if form.email.is_empty() || !form.email.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if form.password.len() < 8 {
                error.set(Some("Password must be at least 8 characters".to_string()));
                return;
            }
            if form.password != confirm_password() {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }
            if form.client_name.is_empty() {
                error.set(Some("Company name is required".to_string()));
                return;
            }

            submitting.set(true);
            match api.register(&form).await {
                Ok(()) => {
                    push_notice(
                        &mut notices,
                        NoticeLevel::Success,
                        "Registration submitted. You can sign in once an administrator approves it.",
                    );
                    let _ = nav.replace("/login");
                }
                Err(err) => {
                    tracing::warn!("registration failed: {err}");
                    submitting.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",

            h1 { "Create account" }
            p { class: "subtitle", "Register your business with BizLedger" }

            form {
                class: "auth-form",
                onsubmit: handle_register,

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                input {
                    r#type: "text",
                    placeholder: "Your name",
                    value: name(),
                    oninput: move |evt| name.set(evt.value()),
                }
                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt| email.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Password (min 8 characters)",
                    value: password(),
                    oninput: move |evt| password.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: confirm_password(),
                    oninput: move |evt| confirm_password.set(evt.value()),
                }
                input {
                    r#type: "tel",
                    placeholder: "Mobile",
                    value: mobile(),
                    oninput: move |evt| mobile.set(evt.value()),
                }
                input {
                    r#type: "text",
                    placeholder: "Country",
                    value: country(),
                    oninput: move |evt| country.set(evt.value()),
                }

                h2 { "Company" }

                input {
                    r#type: "text",
                    placeholder: "Company name",
                    value: client_name(),
                    oninput: move |evt| client_name.set(evt.value()),
                }
                input {
                    r#type: "text",
                    placeholder: "Company address",
                    value: client_address(),
                    oninput: move |evt| client_address.set(evt.value()),
                }
                input {
                    r#type: "tel",
                    placeholder: "Company phone",
                    value: client_phone(),
                    oninput: move |evt| client_phone.set(evt.value()),
                }
                input {
                    r#type: "text",
                    placeholder: "GST number",
                    value: gst_number(),
                    oninput: move |evt| gst_number.set(evt.value()),
                }
                input {
                    r#type: "text",
                    placeholder: "PAN",
                    value: pan(),
                    oninput: move |evt| pan.set(evt.value()),
                }

                button {
                    class: "button primary",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Submitting..." } else { "Register" }
                }
            }

            p {
                class: "auth-alt",
                "Already have an account? "
                Link { to: Route::Login {}, "Sign in" }
            }
        }
    }
}
