//! # Access evaluation for gated views
//!
//! Every protected view evaluates the persisted session once, before any
//! data is fetched or any markup commits: either access is granted and the
//! view proceeds, or a blocking notice is raised and the user is redirected
//! to the login page. The evaluation itself ([`evaluate_access`],
//! [`require_session`]) is pure; the hooks wire it to navigation and
//! notices.
//!
//! These gates are user experience only. The backend re-validates the token
//! and role on every sensitive endpoint; nothing here is a security
//! boundary.

use dioxus::prelude::*;

use store::StoredSession;

use crate::auth::{use_auth, Landing};
use crate::notify::{push_notice, use_notices, NoticeLevel};

/// Roles allowed to open the pending-registration approvals view.
pub const MODERATOR_ROLES: [i64; 3] = [1, 2, 3];

/// Outcome of evaluating the persisted session for a view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Granted,
    Denied(DenialReason),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DenialReason {
    /// No persisted session at all.
    NoSession,
    /// A session exists but its token is empty.
    MissingToken,
    /// Session and token exist but the role is outside the allowed set.
    RoleNotAllowed,
}

impl DenialReason {
    /// Message for the blocking notice shown before the redirect.
    pub fn message(self) -> &'static str {
        match self {
            Self::NoSession => "Please sign in to continue.",
            Self::MissingToken => "Your session has expired. Please sign in again.",
            Self::RoleNotAllowed => "Your account is not allowed to view this page.",
        }
    }
}

/// Session-only gate: a session must exist and carry a token.
pub fn require_session(session: Option<&StoredSession>) -> Access {
    match session {
        None => Access::Denied(DenialReason::NoSession),
        Some(s) if s.token.is_empty() => Access::Denied(DenialReason::MissingToken),
        Some(_) => Access::Granted,
    }
}

/// Role gate: [`require_session`] plus membership in `allowed_roles`.
pub fn evaluate_access(session: Option<&StoredSession>, allowed_roles: &[i64]) -> Access {
    match require_session(session) {
        Access::Granted => {
            let role = session.map(|s| s.user.role).unwrap_or_default();
            if allowed_roles.contains(&role) {
                Access::Granted
            } else {
                Access::Denied(DenialReason::RoleNotAllowed)
            }
        }
        denied => denied,
    }
}

/// Gate hook for protected views.
///
/// Evaluates once per mount; on denial it raises the blocking notice and
/// replaces the location with the login page. Callers must render nothing
/// unless the returned access is [`Access::Granted`]. With an empty
/// `allowed_roles` every role is accepted (session-only gate).
pub fn use_access_gate(allowed_roles: &[i64]) -> Access {
    let auth = use_auth();
    let access = {
        let state = auth.peek();
        if allowed_roles.is_empty() {
            require_session(state.session.as_ref())
        } else {
            evaluate_access(state.session.as_ref(), allowed_roles)
        }
    };

    let mut notices = use_notices();
    let nav = use_navigator();
    use_effect(move || {
        if let Access::Denied(reason) = access {
            tracing::warn!(?reason, "access denied, redirecting to login");
            push_notice(&mut notices, NoticeLevel::Warning, reason.message());
            let _ = nav.replace("/login");
        }
    });

    access
}

/// Gate hook for guest-only views (home, login, register, contact).
///
/// An existing session is redirected to its role's landing page. Returns
/// true when the redirect was issued, in which case the caller renders
/// nothing so the guest form never paints.
pub fn use_guest_gate() -> bool {
    let auth = use_auth();
    let landing = auth
        .peek()
        .session
        .as_ref()
        .map(|s| Landing::for_role(s.user.role));

    let nav = use_navigator();
    use_effect(move || {
        if let Some(landing) = landing {
            let _ = nav.replace(landing.path());
        }
    });

    landing.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{StoredSession, UserInfo};

    fn session(role: i64, token: &str) -> StoredSession {
        StoredSession {
            token: token.to_string(),
            user: UserInfo {
                id: 1,
                role,
                name: "Sam".to_string(),
                email: "sam@example.com".to_string(),
                cid: None,
                client_name: None,
            },
        }
    }

    #[test]
    fn test_empty_store_is_denied_before_any_fetch() {
        assert_eq!(
            evaluate_access(None, &MODERATOR_ROLES),
            Access::Denied(DenialReason::NoSession)
        );
    }

    #[test]
    fn test_empty_token_is_denied() {
        let s = session(2, "");
        assert_eq!(
            evaluate_access(Some(&s), &MODERATOR_ROLES),
            Access::Denied(DenialReason::MissingToken)
        );
    }

    #[test]
    fn test_role_outside_allowed_set_is_denied() {
        for role in [0, 4, 99] {
            let s = session(role, "tok");
            assert_eq!(
                evaluate_access(Some(&s), &MODERATOR_ROLES),
                Access::Denied(DenialReason::RoleNotAllowed),
                "role {role} should be denied"
            );
        }
    }

    #[test]
    fn test_allowed_roles_are_granted() {
        for role in MODERATOR_ROLES {
            let s = session(role, "tok");
            assert_eq!(evaluate_access(Some(&s), &MODERATOR_ROLES), Access::Granted);
        }
    }

    #[test]
    fn test_session_gate_accepts_any_role() {
        let s = session(0, "tok");
        assert_eq!(require_session(Some(&s)), Access::Granted);
        assert_eq!(
            require_session(None),
            Access::Denied(DenialReason::NoSession)
        );
    }
}
