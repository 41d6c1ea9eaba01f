//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, timers, dialogs, file
//! pickers) from page and component logic so the rest of the crate stays
//! testable natively.

pub mod auth;
pub mod confirm;
pub mod files;
pub mod format;
pub mod notify;
pub mod poller;
pub mod storage;
