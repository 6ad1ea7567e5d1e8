use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::session::KeyValue;

/// In-memory KeyValue backend for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValue for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserInfo;
    use crate::session::{SessionStore, StoredSession, TOKEN_KEY, USER_KEY};

    fn sample_user() -> UserInfo {
        UserInfo {
            id: 7,
            role: 2,
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            cid: Some(11),
            client_name: Some("Rao Traders".to_string()),
        }
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let store = SessionStore::new(MemoryStore::new());

        assert!(store.load().is_none());

        let session = StoredSession {
            token: "tok-123".to_string(),
            user: sample_user(),
        };
        store.save(&session).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, session);
    }

    #[test]
    fn test_save_writes_exactly_two_entries() {
        let backend = MemoryStore::new();
        let store = SessionStore::new(backend.clone());

        store
            .save(&StoredSession {
                token: "tok".to_string(),
                user: sample_user(),
            })
            .unwrap();

        assert_eq!(backend.entries.lock().unwrap().len(), 2);
        assert!(backend.get(TOKEN_KEY).is_some());
        assert!(backend.get(USER_KEY).is_some());
    }

    #[test]
    fn test_token_without_user_is_cleared() {
        let backend = MemoryStore::new();
        backend.set(TOKEN_KEY, "orphan-token");

        let store = SessionStore::new(backend.clone());
        assert!(store.load().is_none());
        // the orphan entry is gone after the failed load
        assert!(backend.get(TOKEN_KEY).is_none());
    }

    #[test]
    fn test_user_without_token_is_cleared() {
        let backend = MemoryStore::new();
        let raw = serde_json::to_string(&sample_user()).unwrap();
        backend.set(USER_KEY, &raw);

        let store = SessionStore::new(backend.clone());
        assert!(store.load().is_none());
        assert!(backend.get(USER_KEY).is_none());
    }

    #[test]
    fn test_undecodable_user_is_cleared() {
        let backend = MemoryStore::new();
        backend.set(TOKEN_KEY, "tok");
        backend.set(USER_KEY, "not json");

        let store = SessionStore::new(backend.clone());
        assert!(store.load().is_none());
        assert!(backend.get(TOKEN_KEY).is_none());
        assert!(backend.get(USER_KEY).is_none());
    }

    #[test]
    fn test_clear_removes_both_entries() {
        let backend = MemoryStore::new();
        let store = SessionStore::new(backend.clone());
        store
            .save(&StoredSession {
                token: "tok".to_string(),
                user: sample_user(),
            })
            .unwrap();

        store.clear();
        assert!(store.load().is_none());
        assert!(backend.entries.lock().unwrap().is_empty());
    }

    #[test]
    fn test_clones_share_entries() {
        let backend = MemoryStore::new();
        let writer = SessionStore::new(backend.clone());
        let reader = SessionStore::new(backend);

        writer
            .save(&StoredSession {
                token: "shared".to_string(),
                user: sample_user(),
            })
            .unwrap();

        assert_eq!(reader.load().unwrap().token, "shared");
    }
}
