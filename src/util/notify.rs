//! Notice plumbing shared by every page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages report outcomes through `Notifier`, which owns the auto-dismiss timer
//! and turns a `SessionExpired` failure into a signed-out auth state so the
//! route guard sends the user back to `/login`.

use std::time::Duration;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::state::auth::AuthState;
use crate::state::notices::{NoticeKind, NoticeState};

/// Copyable handle provided through context.
#[derive(Clone, Copy, Debug)]
pub struct Notifier {
    pub notices: RwSignal<NoticeState>,
    pub auth: RwSignal<AuthState>,
    pub ttl: Duration,
}

impl Notifier {
    pub fn new(notices: RwSignal<NoticeState>, auth: RwSignal<AuthState>, ttl: Duration) -> Self {
        Self { notices, auth, ttl }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(NoticeKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(NoticeKind::Error, text.into());
    }

    /// Show `err` and sign the user out locally if the server said 401.
    pub fn failure(&self, err: &ApiError) {
        if err.is_session_expired() {
            self.auth.set(AuthState::default());
        }
        self.error(err.to_string());
    }

    fn push(&self, kind: NoticeKind, text: String) {
        let Some(id) = self.notices.try_update(|state| state.push(kind, text)) else {
            return;
        };
        schedule_dismiss(self.notices, id, self.ttl);
    }
}

fn schedule_dismiss(notices: RwSignal<NoticeState>, id: String, ttl: Duration) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(ttl).await;
        notices.try_update(|state| state.dismiss(&id));
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (notices, id, ttl);
    }
}
