//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the parking grid, panels and dialogs. They report user
//! gestures upward through callbacks and read shared services from Leptos
//! context; pages decide what a gesture means.

pub mod directory_panel;
pub mod nav_bar;
pub mod notice_stack;
pub mod occupancy_summary;
pub mod person_dialog;
pub mod report_dialogs;
pub mod reservation_dialog;
pub mod space_form_dialog;
pub mod space_grid;
