//! Short-lived, non-blocking notices ("toasts").
//!
//! Notices are identified by a v4 UUID so a dismiss timer started for one
//! notice never removes a different one that took its slot.

#[cfg(test)]
#[path = "notices_test.rs"]
mod notices_test;

/// Most notices kept on screen; older ones are dropped first.
pub const MAX_NOTICES: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "notice--success",
            Self::Error => "notice--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: String,
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    pub items: Vec<Notice>,
}

impl NoticeState {
    /// Append a notice and return its id for the dismiss timer.
    pub fn push(&mut self, kind: NoticeKind, text: impl Into<String>) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.items.push(Notice { id: id.clone(), kind, text: text.into() });
        if self.items.len() > MAX_NOTICES {
            let overflow = self.items.len() - MAX_NOTICES;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: &str) {
        self.items.retain(|notice| notice.id != id);
    }
}
