//! Durable session: bearer token plus the signed-in user profile.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is the only client-owned durable state. It is created on login,
//! torn down on logout or on any 401, and injected through Leptos context
//! rather than read from ambient globals.
//!
//! STORAGE LAYOUT
//! ==============
//! Two keys: `token` holds the raw bearer string and `user` holds the full
//! JSON login result (including `roles`). Malformed stored data reads as
//! "no session"; nothing here panics or returns errors.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::net::types::{Role, User};
use crate::util::storage::BrowserStorage;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Field names a login result may carry its bearer token under.
const TOKEN_FIELDS: [&str; 3] = ["accessToken", "token", "jwt"];

/// Key/value persistence backing the session.
pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Process-local storage used when `localStorage` is unavailable, and in tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// Cloneable handle to the session; clones share the same storage.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.token().is_some())
            .finish()
    }
}

impl SessionStore {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::default()))
    }

    /// `localStorage` when the browser provides it, otherwise an in-memory store
    /// that lasts until the tab is closed.
    pub fn for_environment() -> Self {
        if BrowserStorage::is_available() {
            Self::new(Arc::new(BrowserStorage))
        } else {
            log::warn!("localStorage unavailable; session will not survive a reload");
            Self::in_memory()
        }
    }

    /// Persist a login result: its token under `token`, the whole object under `user`.
    ///
    /// Returns `true` when a token was found and stored.
    pub fn set_auth(&self, login_result: &Value) -> bool {
        let token = extract_token(login_result);
        if let Some(token) = token.as_deref() {
            self.storage.set(TOKEN_KEY, token);
        }
        self.storage.set(USER_KEY, &login_result.to_string());
        token.is_some()
    }

    /// Stored bearer token, or `None` when absent or blank.
    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY).filter(|t| !t.trim().is_empty())
    }

    /// Stored user profile, or `None` when absent or unparsable.
    pub fn user(&self) -> Option<User> {
        let raw = self.storage.get(USER_KEY)?;
        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                log::warn!("ignoring malformed stored user: {err}");
                None
            }
        }
    }

    /// Roles of the stored user; empty when signed out.
    pub fn roles(&self) -> Vec<Role> {
        self.user().map(|u| u.roles).unwrap_or_default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some() && self.user().is_some()
    }

    pub fn clear_auth(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }
}

fn extract_token(login_result: &Value) -> Option<String> {
    TOKEN_FIELDS
        .iter()
        .filter_map(|field| login_result.get(*field).and_then(Value::as_str))
        .map(str::trim)
        .find(|token| !token.is_empty())
        .map(str::to_owned)
}
