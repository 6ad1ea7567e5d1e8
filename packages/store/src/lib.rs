//! Durable client-side state for the BizLedger frontends: the persisted
//! session (bearer token + user record under two fixed keys) and the app
//! configuration.

pub mod config;
pub mod models;
pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web::WebStorage;

pub use config::AppConfig;
pub use models::{UserInfo, ROLE_ADMIN};
pub use session::{KeyValue, SessionStore, StoredSession, TOKEN_KEY, USER_KEY};

/// Session store used by client builds: browser `localStorage` on web,
/// a process-wide in-memory map otherwise.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type ClientStore = SessionStore<WebStorage>;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type ClientStore = SessionStore<MemoryStore>;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub fn client_store() -> ClientStore {
    SessionStore::new(WebStorage::new())
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub fn client_store() -> ClientStore {
    use std::sync::OnceLock;

    // Shared across the process so every view sees the same session.
    static SHARED: OnceLock<MemoryStore> = OnceLock::new();
    SessionStore::new(SHARED.get_or_init(MemoryStore::new).clone())
}
