//! # parkspot
//!
//! Leptos + WASM client for the ParkSpot parking-lot backend.
//!
//! This crate contains pages, components, application state, the REST
//! gateway, and the occupancy poller that keeps the parking grid in sync with
//! the server. The backend owns every business rule; the client mirrors role
//! permissions only to avoid pointless round trips.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and mounts the application.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn mount() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"parkspot: logger already installed".into());
    }
    leptos::mount::mount_to_body(app::App);
}
