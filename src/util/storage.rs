//! Browser `localStorage` access behind the session storage seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes the csr-only web-sys glue so the session store can be exercised
//! natively against `MemoryStorage` while the browser build persists across
//! reloads.

use crate::state::session::SessionStorage;

/// `window.localStorage`, resolved on every call so the type stays `Send + Sync`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    /// Whether the browser exposes `localStorage` (private modes may not).
    pub fn is_available() -> bool {
        #[cfg(feature = "csr")]
        {
            local_storage().is_some()
        }
        #[cfg(not(feature = "csr"))]
        {
            false
        }
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            if storage.set_item(key, value).is_err() {
                log::warn!("localStorage write failed for key {key}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                if storage.remove_item(key).is_err() {
                    log::warn!("localStorage remove failed for key {key}");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}
