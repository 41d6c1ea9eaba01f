//! Networking modules for the ParkSpot REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `gateway` owns URL resolution, auth headers and 401 handling; `transport`
//! performs the browser `fetch`; `api`, `people`, `spaces`, `reservations`,
//! `reports` and `stats` are thin endpoint helpers; `types` defines the wire
//! schema.

pub mod api;
pub mod error;
#[cfg(test)]
pub(crate) mod fake_transport;
pub mod gateway;
pub mod people;
pub mod reports;
pub mod reservations;
pub mod spaces;
pub mod stats;
pub mod transport;
pub mod types;

/// Gateway type used by the browser application.
pub type AppGateway = gateway::Gateway<transport::BrowserTransport>;
