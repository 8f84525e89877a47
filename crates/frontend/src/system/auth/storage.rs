//! Persisted session: the identity under `erp_user` (JSON) and the token under `erp_token`.

use contracts::system::auth::SessionUser;
use web_sys::window;

pub const USER_KEY: &str = "erp_user";
pub const TOKEN_KEY: &str = "erp_token";

/// String key/value storage; `localStorage` in the browser.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`; every call is a no-op when storage is unavailable.
pub struct BrowserStore;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Identity and token as they were saved at login
#[derive(Debug, Clone, PartialEq)]
pub struct StoredSession {
    pub user: SessionUser,
    pub token: String,
}

pub fn persist_session(store: &impl KeyValueStore, user: &SessionUser, token: &str) {
    match serde_json::to_string(user) {
        Ok(json) => {
            store.set(USER_KEY, &json);
            store.set(TOKEN_KEY, token);
        }
        Err(e) => log::error!("Failed to serialize session user: {}", e),
    }
}

/// Both keys must be present and the identity must parse; anything else is no session.
pub fn restore_session(store: &impl KeyValueStore) -> Option<StoredSession> {
    let token = store.get(TOKEN_KEY).filter(|t| !t.is_empty())?;
    let user = serde_json::from_str::<SessionUser>(&store.get(USER_KEY)?).ok()?;
    Some(StoredSession { user, token })
}

pub fn load_token(store: &impl KeyValueStore) -> Option<String> {
    store.get(TOKEN_KEY).filter(|t| !t.is_empty())
}

pub fn clear_session(store: &impl KeyValueStore) {
    store.remove(USER_KEY);
    store.remove(TOKEN_KEY);
}

/// In-memory store standing in for `localStorage` in unit tests
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore(std::cell::RefCell<std::collections::HashMap<String, String>>);

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.0.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.0.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> SessionUser {
        SessionUser {
            username: "admin".into(),
            name: "Admin User".into(),
            role: "Administrator".into(),
        }
    }

    #[test]
    fn session_survives_a_reload() {
        let store = MemoryStore::default();
        persist_session(&store, &admin(), "tok-1");

        let restored = restore_session(&store).unwrap();
        assert_eq!(restored.user, admin());
        assert_eq!(restored.token, "tok-1");
        assert_eq!(load_token(&store).as_deref(), Some("tok-1"));

        let json: serde_json::Value =
            serde_json::from_str(&store.get(USER_KEY).unwrap()).unwrap();
        assert_eq!(json["name"], "Admin User");
        assert_eq!(json["role"], "Administrator");
    }

    #[test]
    fn logout_clears_both_keys() {
        let store = MemoryStore::default();
        persist_session(&store, &admin(), "tok-1");
        clear_session(&store);

        assert!(store.get(USER_KEY).is_none());
        assert!(store.get(TOKEN_KEY).is_none());
        assert!(restore_session(&store).is_none());
    }

    #[test]
    fn half_written_or_corrupt_session_is_ignored() {
        let store = MemoryStore::default();
        store.set(TOKEN_KEY, "tok-1");
        assert!(restore_session(&store).is_none());

        store.set(USER_KEY, "{not json");
        assert!(restore_session(&store).is_none());

        store.remove(TOKEN_KEY);
        store.set(USER_KEY, &serde_json::to_string(&admin()).unwrap());
        assert!(restore_session(&store).is_none());
    }
}
