//! Auth token persistence behind an injected accessor.
//!
//! The REST client only ever sees the [`TokenStore`] trait, never
//! ambient browser storage, so tests can substitute an in-memory
//! double and the storage key lives in exactly one place.

use gloo::storage::{LocalStorage, Storage};
use std::cell::RefCell;
use std::rc::Rc;

pub const TOKEN_STORAGE_KEY: &str = "classmark.auth_token";

/// Storage seam for the shared-password session token. Presence of a
/// token is the logged-in state.
pub trait TokenStore {
    fn token(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);

    fn has_token(&self) -> bool {
        self.token().is_some()
    }
}

pub type SharedTokenStore = Rc<dyn TokenStore>;

/// Browser-backed store persisting the token in `localStorage`.
#[derive(Default)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn token(&self) -> Option<String> {
        LocalStorage::get(TOKEN_STORAGE_KEY).ok()
    }

    fn save(&self, token: &str) {
        if let Err(err) = LocalStorage::set(TOKEN_STORAGE_KEY, token) {
            log::error!("Failed to persist the auth token: {err}");
        }
    }

    fn clear(&self) {
        LocalStorage::delete(TOKEN_STORAGE_KEY);
    }
}

/// In-memory store for tests.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_a_token() {
        let store = MemoryTokenStore::default();
        assert!(!store.has_token());
        store.save("abc123");
        assert_eq!(store.token(), Some("abc123".to_string()));
        assert!(store.has_token());
        store.clear();
        assert!(!store.has_token());
    }

    #[test]
    fn shared_store_is_usable_behind_the_trait_object() {
        let store: SharedTokenStore = Rc::new(MemoryTokenStore::default());
        store.save("abc123");
        assert!(store.has_token());
    }
}
