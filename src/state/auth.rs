//! Reactive view of who is signed in.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` is the durable record; this is the signal route guards and
//! the nav bar watch. Pages call `sync` after anything that may have changed
//! the session (login, logout, a mutation that came back 401).

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Role, User};
use crate::state::session::SessionStore;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// State as read back from durable storage. A stored user without a
    /// token counts as signed out.
    pub fn from_session(session: &SessionStore) -> Self {
        let user = session.token().and_then(|_| session.user());
        Self { user, loading: false }
    }

    pub fn roles(&self) -> Vec<Role> {
        self.user.as_ref().map(|u| u.roles.clone()).unwrap_or_default()
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.user.as_ref().is_some_and(|u| u.has_role(role))
    }
}
