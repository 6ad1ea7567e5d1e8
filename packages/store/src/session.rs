//! # Session persistence
//!
//! The session survives page reloads as two independent key-value entries:
//! the opaque bearer token under [`TOKEN_KEY`] and the serialized
//! [`UserInfo`] under [`USER_KEY`]. [`SessionStore`] wraps any [`KeyValue`]
//! backend with a typed load/save/clear contract so protected views never
//! touch raw keys.
//!
//! A session is only ever observed whole: [`SessionStore::load`] returns
//! `Some` when both entries are present and the user decodes, and clears the
//! leftovers otherwise, so an interrupted save can never produce a
//! half-logged-in state.

use crate::models::UserInfo;

/// Fixed key for the persisted bearer token.
pub const TOKEN_KEY: &str = "auth_token";
/// Fixed key for the persisted user record (JSON).
pub const USER_KEY: &str = "auth_user";

/// Minimal string key-value backend: browser `localStorage` on web, an
/// in-memory map elsewhere.
pub trait KeyValue {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// The authenticated session as persisted: token plus user record.
#[derive(Clone, Debug, PartialEq)]
pub struct StoredSession {
    pub token: String,
    pub user: UserInfo,
}

/// Typed session access over a [`KeyValue`] backend.
#[derive(Clone, Debug)]
pub struct SessionStore<S: KeyValue> {
    backend: S,
}

impl<S: KeyValue> SessionStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Load the persisted session, if any.
    ///
    /// Both entries must be present and the user entry must decode; any
    /// other combination is an inconsistent half-state and is cleared.
    pub fn load(&self) -> Option<StoredSession> {
        let token = self.backend.get(TOKEN_KEY);
        let user = self
            .backend
            .get(USER_KEY)
            .and_then(|raw| serde_json::from_str::<UserInfo>(&raw).ok());
        match (token, user) {
            (Some(token), Some(user)) => Some(StoredSession { token, user }),
            (None, None) => None,
            _ => {
                self.clear();
                None
            }
        }
    }

    /// Persist a session.
    ///
    /// The user entry is written before the token, so a save interrupted
    /// between the two writes leaves a state that [`load`](Self::load)
    /// rejects and cleans up rather than a token with no user.
    pub fn save(&self, session: &StoredSession) -> Result<(), serde_json::Error> {
        let raw = serde_json::to_string(&session.user)?;
        self.backend.set(USER_KEY, &raw);
        self.backend.set(TOKEN_KEY, &session.token);
        Ok(())
    }

    /// Remove both session entries.
    pub fn clear(&self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(USER_KEY);
    }
}
