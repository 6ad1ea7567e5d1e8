//! # Persisted user model
//!
//! [`UserInfo`] is the user record returned by the login endpoint and stored
//! in the session store between reloads. It is `Serialize + Deserialize`
//! (camelCase on the wire, matching the backend) so the same struct is used
//! for both the HTTP response body and the persisted JSON entry.
//!
//! The `cid` / `client_name` fields are not part of the raw login response's
//! user object; they are merged in from the optional `client` object before
//! the record is persisted.

use serde::{Deserialize, Serialize};

/// Role id of administrators. Every other role id (>= 1) is a regular role.
pub const ROLE_ADMIN: i64 = 0;

/// Authenticated user record, persisted alongside the bearer token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: i64,
    /// Integer permission level: 0 = administrator, >= 1 = regular roles.
    pub role: i64,
    pub name: String,
    pub email: String,
    /// Client (company) id, merged from the login response's client object.
    #[serde(default)]
    pub cid: Option<i64>,
    /// Client display name, merged alongside `cid`.
    #[serde(default)]
    pub client_name: Option<String>,
}

impl UserInfo {
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }

    /// Display name, falling back to the email address if the name is empty.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}
