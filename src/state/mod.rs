//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `occupancy`, `drag`, etc.) so pages
//! and components depend on small focused models. Everything here is plain
//! Rust with no Leptos types, so it runs under native tests.

pub mod access;
pub mod auth;
pub mod directory;
pub mod drag;
pub mod forms;
pub mod notices;
pub mod occupancy;
pub mod people;
pub mod reports;
pub mod session;
