//! Login page: session bootstrap and the credential form.

use dioxus::prelude::*;

use ui::time::sleep_ms;
use ui::{
    push_notice, use_api, use_app_config, use_auth, use_guest_gate, use_notices,
    use_session_store, AuthState, Landing, NoticeLevel,
};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let mut auth = use_auth();
    let mut notices = use_notices();
    let nav = use_navigator();
    let api = use_api();
    let store = use_session_store();
    let config = use_app_config();

    // An existing session never sees the form: it is sent to its landing
    // page before the form paints.
    if use_guest_gate() {
        return rsx! {};
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }

        let api = api.clone();
        let store = store.clone();
        let delay_ms = config.notices.login_redirect_delay_ms;

        spawn(async move {
            let entered_email = email().trim().to_string();
            let entered_password = password();
            if entered_email.is_empty() || entered_password.is_empty() {
                push_notice(
                    &mut notices,
                    NoticeLevel::Error,
                    "Email and password are required",
                );
                return;
            }

            submitting.set(true);
            match api.login(&entered_email, &entered_password).await {
                Ok(session) => {
                    if let Err(err) = store.save(&session) {
                        tracing::error!("failed to persist session: {err}");
                        api.set_token(None);
                        push_notice(
                            &mut notices,
                            NoticeLevel::Error,
                            "Could not save your session, please retry",
                        );
                        submitting.set(false);
                        return;
                    }

                    let landing = Landing::for_role(session.user.role);
                    push_notice(&mut notices, NoticeLevel::Success, "Signed in");
                    // Leave the success notice visible for a moment before
                    // navigating away.
                    if delay_ms > 0 {
                        sleep_ms(delay_ms).await;
                    }
                    auth.set(AuthState {
                        session: Some(session),
                    });
                    let _ = nav.replace(landing.path());
                }
                Err(err) => {
                    tracing::warn!("login failed: {err}");
                    push_notice(&mut notices, NoticeLevel::Error, err.to_string());
                    submitting.set(false);
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",

            h1 { "Sign in" }
            p { class: "subtitle", "Use your BizLedger account" }

            form {
                class: "auth-form",
                onsubmit: handle_submit,

                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt| email.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt| password.set(evt.value()),
                }
                button {
                    class: "button primary",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Signing in..." } else { "Sign in" }
                }
            }

            p {
                class: "auth-alt",
                "New to BizLedger? "
                Link { to: Route::Register {}, "Create an account" }
            }
        }
    }
}
