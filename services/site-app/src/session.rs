//! Session-scoped key/value storage
//!
//! The loading gate never reaches for `window.sessionStorage` directly; it
//! is handed a [`SessionStore`] so tests can substitute an in-memory one.

use std::cell::RefCell;
use std::collections::HashMap;

/// Minimal view of the browser's session storage
#[cfg_attr(test, mockall::automock)]
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;

    /// Best effort: failures are logged, never surfaced
    fn set(&self, key: &str, value: &str);
}

/// In-memory store for tests and non-browser builds
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every entry, as the browser does when the session ends
    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

/// `window.sessionStorage`
#[cfg(feature = "csr")]
#[derive(Debug, Default)]
pub struct BrowserSessionStore;

#[cfg(feature = "csr")]
impl BrowserSessionStore {
    fn storage(&self) -> crate::Result<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| crate::SiteAppError::Storage("no window".to_string()))?;
        window
            .session_storage()
            .map_err(|e| crate::SiteAppError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| crate::SiteAppError::Storage("sessionStorage unavailable".to_string()))
    }
}

#[cfg(feature = "csr")]
impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.storage().and_then(|s| {
            s.get_item(key)
                .map_err(|e| crate::SiteAppError::Storage(format!("{:?}", e)))
        }) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Reading session key '{}': {}", key, e);
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        let result = self.storage().and_then(|s| {
            s.set_item(key, value)
                .map_err(|e| crate::SiteAppError::Storage(format!("{:?}", e)))
        });
        if let Err(e) = result {
            tracing::warn!("Writing session key '{}': {}", key, e);
        }
    }
}

/// Session store for the current build target
#[cfg(feature = "csr")]
pub fn default_store() -> BrowserSessionStore {
    BrowserSessionStore
}

#[cfg(not(feature = "csr"))]
pub fn default_store() -> MemorySessionStore {
    MemorySessionStore::new()
}
