//! Shared UI for the BizLedger workspace: authentication context and hooks,
//! access gates for protected views, transient notices, and the pure
//! working-list logic behind the approvals table.

mod auth;
pub use auth::{
    sign_out, use_api, use_app_config, use_auth, use_session_store, AuthProvider, AuthState,
    Landing, LogoutButton,
};

pub mod guard;
pub use guard::{
    evaluate_access, require_session, use_access_gate, use_guest_gate, Access, DenialReason,
    MODERATOR_ROLES,
};

mod notify;
pub use notify::{push_notice, use_notices, Notice, NoticeBanner, NoticeLevel, NoticeProvider};

pub mod moderation;

pub mod time;
