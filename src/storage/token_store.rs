//! Persistent token + profile store.
//!
//! Two fixed keys in `localStorage` hold the bearer token and the serialized
//! profile. Both are always written and cleared together; a reload at any
//! point after a resolved mutation sees the latest pair. Missing keys are
//! normal absence, never errors, and an unparsable stored profile reports as
//! absent while the raw token is still returned (the resolver re-derives the
//! profile from the server).

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::cell::RefCell;
use std::collections::HashMap;

use crate::net::types::Profile;

const TOKEN_KEY: &str = "mk_token";
const PROFILE_KEY: &str = "mk_user";

/// Minimal string key-value backend so the store works against browser
/// `localStorage` in WASM builds and a plain map in tests and SSR.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory backend for tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// `localStorage`-backed storage. Inert outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl StorageBackend for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage().and_then(|s| s.get_item(key).ok().flatten())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(s) = local_storage() {
                let _ = s.set_item(key, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(s) = local_storage() {
                let _ = s.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// What a load reports. Either field can be absent independently: a token
/// with no (or an unreadable) profile still comes back, so verification can
/// re-establish the profile.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StoredSession {
    pub token: Option<String>,
    pub profile: Option<Profile>,
}

/// The single durable holder of the auth token and cached profile.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokenStore<B> {
    backend: B,
}

/// Store used by the running app.
pub type ClientStore = TokenStore<BrowserStorage>;

impl TokenStore<BrowserStorage> {
    pub fn browser() -> Self {
        TokenStore { backend: BrowserStorage }
    }
}

impl<B: StorageBackend> TokenStore<B> {
    pub fn new(backend: B) -> Self {
        TokenStore { backend }
    }

    /// Persist both entries. Serialization happens before either write so a
    /// failure cannot leave the pair half-updated.
    pub fn save(&self, token: &str, profile: &Profile) {
        let Ok(json) = serde_json::to_string(profile) else {
            log::warn!("profile failed to serialize; keeping previous stored session");
            return;
        };
        self.backend.set(TOKEN_KEY, token);
        self.backend.set(PROFILE_KEY, &json);
    }

    /// Read whatever is stored. Soft-fails: a profile that does not parse is
    /// reported as absent.
    pub fn load(&self) -> StoredSession {
        let token = self.backend.get(TOKEN_KEY);
        let profile = self
            .backend
            .get(PROFILE_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok());
        StoredSession { token, profile }
    }

    /// Remove both entries. A no-op when the store is already empty.
    pub fn clear(&self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(PROFILE_KEY);
    }
}
