//! Authentication context and hooks for the UI.

use dioxus::prelude::*;

use api::ApiClient;
use store::{AppConfig, ClientStore, StoredSession, UserInfo, ROLE_ADMIN};

/// Landing page for a role, used after login and on session bootstrap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Landing {
    Admin,
    Default,
}

impl Landing {
    pub fn for_role(role: i64) -> Self {
        if role == ROLE_ADMIN {
            Self::Admin
        } else {
            Self::Default
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Admin => "/admin",
            Self::Default => "/dashboard",
        }
    }
}

/// Authentication state for the application.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<StoredSession>,
}

impl AuthState {
    pub fn user(&self) -> Option<&UserInfo> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Get the shared API client.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Get the session store for the current platform.
pub fn use_session_store() -> ClientStore {
    use_context::<ClientStore>()
}

/// Get the app configuration provided at the root.
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>()
}

/// Provider component that manages authentication state.
///
/// Loads the persisted session once on mount, primes the API client's
/// bearer token from it, and provides the session store, API client,
/// configuration and auth state to the whole tree.
#[component]
pub fn AuthProvider(config: AppConfig, children: Element) -> Element {
    let store = use_context_provider(store::client_store);
    let api = use_context_provider({
        let config = config.clone();
        move || ApiClient::from_config(&config)
    });
    use_context_provider(move || config);

    let auth_state = use_signal({
        let store = store.clone();
        let api = api.clone();
        move || {
            let session = store.load();
            api.set_token(session.as_ref().map(|s| s.token.clone()));
            AuthState { session }
        }
    });
    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Clear the persisted session, drop the bearer token, and reset state.
pub fn sign_out(auth: &mut Signal<AuthState>, store: &ClientStore, api: &ApiClient) {
    store.clear();
    api.set_token(None);
    auth.set(AuthState::default());
}

/// Button that logs the current user out and returns to the login page.
#[component]
pub fn LogoutButton(
    #[props(default = "Sign out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth = use_auth();
    let store = use_session_store();
    let api = use_api();
    let nav = use_navigator();

    let onclick = move |_| {
        sign_out(&mut auth, &store, &api);
        let _ = nav.replace("/login");
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_role_lands_on_admin_page() {
        assert_eq!(Landing::for_role(0), Landing::Admin);
        assert_eq!(Landing::for_role(0).path(), "/admin");
    }

    #[test]
    fn test_regular_roles_land_on_dashboard() {
        for role in [1, 2, 3, 9] {
            assert_eq!(Landing::for_role(role), Landing::Default);
            assert_eq!(Landing::for_role(role).path(), "/dashboard");
        }
    }
}
