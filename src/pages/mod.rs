//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (role guard, polling, dialogs)
//! and delegates rendering details to `components`.

pub mod client;
pub mod dashboard;
pub(crate) mod grid_actions;
pub mod home;
pub mod login;
pub mod people;
pub mod profile;
pub mod reports;
pub mod reservations;
pub mod spaces;
pub mod statistics;
