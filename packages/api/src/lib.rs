//! # API crate — typed REST client for the BizLedger backend
//!
//! Every frontend call to the backend goes through [`ApiClient`]: a thin
//! `reqwest` wrapper that joins paths onto the configured base URL, attaches
//! the bearer token when one is set, and maps non-2xx responses to a single
//! human-readable [`ApiError`].
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | HTTP plumbing: base URL, shared token slot, `get`/`post`/`delete` helpers |
//! | [`error`] | [`ApiError`] and the error-body flattening rules |
//! | [`models`] | Wire models for login, registration and moderation |
//! | [`auth`] | `POST /login`, `POST /register` |
//! | [`registrations`] | `GET /pending-registrations`, `POST /approve`, `DELETE /pending-user/{id}` |

pub mod auth;
pub mod client;
pub mod error;
pub mod models;
pub mod registrations;

pub use client::ApiClient;
pub use error::ApiError;
pub use models::{
    ApprovalRequest, ClientInfo, LoginResponse, PendingUser, RegistrationForm,
    APPROVAL_CAPTCHA_TOKEN,
};

pub use store::{StoredSession, UserInfo};
