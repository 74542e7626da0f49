//! Credential storage behind a small trait.
//!
//! SYSTEM CONTEXT
//! ==============
//! The fetch path reads the user token on every request and removes it on a
//! forced logout. In the browser that is `localStorage`; tests and server
//! renders use [`MemoryStorage`] or the inert non-hydrate [`LocalStorage`].

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Token storage as the fetch path sees it: read per request, removed on logout.
pub trait CredentialStore: Send + Sync {
    fn read(&self, key: &str) -> Option<String>;
    fn remove(&self, key: &str);
}

/// Browser `localStorage`. Every call is a no-op outside the `hydrate` build.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
}

impl CredentialStore for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-process store for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.insert(key, value);
        store
    }

    pub fn insert(&self, key: &str, value: &str) {
        self.lock().insert(key.to_owned(), value.to_owned());
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CredentialStore for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn remove(&self, key: &str) {
        self.lock().remove(key);
    }
}
