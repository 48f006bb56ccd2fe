//! Auth Session
//!
//! Credentials live in one `Session` handed to whoever needs them. The
//! persisted copy goes through a `CredentialStore` so tests can swap the
//! browser's `localStorage` for memory.

use std::sync::{Arc, Mutex};

use leptos::prelude::*;

use crate::models::{Credentials, User};

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

/// Persistence for credentials between page loads
pub trait CredentialStore: Send + Sync {
    fn load(&self) -> Option<Credentials>;
    fn save(&self, credentials: &Credentials);
    fn clear(&self);
}

/// Browser `localStorage` under the `token` / `user` keys
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    /// False in private modes that block storage
    pub fn is_available() -> bool {
        Self::storage().is_some()
    }
}

impl CredentialStore for LocalStorageStore {
    fn load(&self) -> Option<Credentials> {
        let storage = Self::storage()?;
        let token = storage.get_item(TOKEN_KEY).ok().flatten()?;
        let user = storage
            .get_item(USER_KEY)
            .ok()
            .flatten()
            .and_then(|raw| serde_json::from_str::<User>(&raw).ok())
            .unwrap_or_default();
        Some(Credentials { token, user })
    }

    fn save(&self, credentials: &Credentials) {
        let Some(storage) = Self::storage() else {
            log::warn!("localStorage unavailable, session will not persist");
            return;
        };
        let _ = storage.set_item(TOKEN_KEY, &credentials.token);
        if let Ok(user) = serde_json::to_string(&credentials.user) {
            let _ = storage.set_item(USER_KEY, &user);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }
}

/// In-memory store, nothing survives a reload
#[derive(Default)]
pub struct MemoryStore(Mutex<Option<Credentials>>);

impl CredentialStore for MemoryStore {
    fn load(&self) -> Option<Credentials> {
        self.0.lock().ok().and_then(|c| c.clone())
    }

    fn save(&self, credentials: &Credentials) {
        if let Ok(mut slot) = self.0.lock() {
            *slot = Some(credentials.clone());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.0.lock() {
            *slot = None;
        }
    }
}

/// Current sign-in state, reactive for the UI
#[derive(Clone)]
pub struct Session {
    credentials: RwSignal<Option<Credentials>>,
    store: Arc<dyn CredentialStore>,
}

impl Session {
    /// Restore whatever the store already holds
    pub fn restore(store: Arc<dyn CredentialStore>) -> Self {
        let credentials = RwSignal::new(store.load());
        Self { credentials, store }
    }

    pub fn sign_in(&self, credentials: Credentials) {
        log::info!("signed in as {}", credentials.user.email);
        self.store.save(&credentials);
        self.credentials.set(Some(credentials));
    }

    pub fn clear(&self) {
        self.store.clear();
        self.credentials.set(None);
    }

    pub fn token(&self) -> Option<String> {
        self.credentials.with_untracked(|c| c.as_ref().map(|c| c.token.clone()))
    }

    pub fn is_authenticated(&self) -> bool {
        self.credentials.with_untracked(|c| c.is_some())
    }

    /// Tracked read for views
    pub fn user(&self) -> Option<User> {
        self.credentials.with(|c| c.as_ref().map(|c| c.user.clone()))
    }

    /// Tracked read for views
    pub fn signed_in(&self) -> bool {
        self.credentials.with(|c| c.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds() -> Credentials {
        Credentials {
            token: "abc".to_string(),
            user: User { id: "u1".into(), name: "Admin".into(), email: "admin@shop.test".into(), role: "admin".into() },
        }
    }

    #[test]
    fn test_restore_picks_up_persisted_credentials() {
        let store = Arc::new(MemoryStore::default());
        store.save(&creds());
        let session = Session::restore(store);
        assert!(session.is_authenticated());
        assert_eq!(session.token().as_deref(), Some("abc"));
    }

    #[test]
    fn test_clear_wipes_memory_and_store() {
        let store = Arc::new(MemoryStore::default());
        let session = Session::restore(store.clone());
        session.sign_in(creds());
        assert!(store.load().is_some());

        session.clear();
        assert!(!session.is_authenticated());
        assert!(store.load().is_none());
    }
}
