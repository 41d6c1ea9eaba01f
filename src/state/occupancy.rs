//! Live occupancy: space list, active registrations, and the derived occupant map.
//!
//! DESIGN
//! ======
//! `OccupancyService` performs the fetches and mutations and always hands back
//! a complete `OccupancySnapshot`; pages store that snapshot in a signal and
//! never patch it locally. The occupant map is a pure projection of the
//! registrations, recomputed whenever the snapshot changes.
//!
//! ERROR HANDLING
//! ==============
//! A failed fetch empties its collection instead of leaving stale rows on
//! screen, is logged, and never reaches the caller. Mutations do surface
//! their errors, since the user asked for them and needs to see why they failed.

#[cfg(test)]
#[path = "occupancy_test.rs"]
mod occupancy_test;

use std::collections::HashMap;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::gateway::{Gateway, Transport};
use crate::net::types::{ActiveRegistration, EntryRequest, ExitRequest, MoveRequest, ParkingSpace, Role, SpaceState};
use crate::state::access::{self, Action};

/// Placeholder for a label part the server left out.
const MISSING_PART: &str = "?";

/// Point-in-time copy of the server's occupancy data.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OccupancySnapshot {
    pub spaces: Vec<ParkingSpace>,
    pub registrations: Vec<ActiveRegistration>,
}

impl OccupancySnapshot {
    pub fn space(&self, space_id: i64) -> Option<&ParkingSpace> {
        self.spaces.iter().find(|space| space.id == space_id)
    }

    /// The registration parked in the space numbered `space_number`.
    pub fn registration_for(&self, space_number: &str) -> Option<&ActiveRegistration> {
        self.registrations.iter().find(|reg| reg.space_number == space_number)
    }

    pub fn occupant_labels(&self) -> HashMap<String, String> {
        occupant_labels(&self.registrations)
    }

    pub fn counts(&self) -> SpaceCounts {
        SpaceCounts::of(&self.spaces)
    }
}

/// Display string for whoever occupies a space: `"<plate> - <client>"`.
pub fn occupant_label(registration: &ActiveRegistration) -> String {
    let part = |value: Option<&str>| {
        value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(MISSING_PART)
            .to_owned()
    };
    format!(
        "{} - {}",
        part(registration.vehicle_plate.as_deref()),
        part(registration.client_name.as_deref())
    )
}

/// Project registrations into `space number -> occupant label`. Registrations
/// without a space number are dropped; on duplicates the last one wins.
pub fn occupant_labels(registrations: &[ActiveRegistration]) -> HashMap<String, String> {
    registrations
        .iter()
        .filter(|reg| !reg.space_number.trim().is_empty())
        .map(|reg| (reg.space_number.clone(), occupant_label(reg)))
        .collect()
}

/// Space totals per state for summary cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpaceCounts {
    pub total: usize,
    pub available: usize,
    pub occupied: usize,
    pub reserved: usize,
    pub maintenance: usize,
}

impl SpaceCounts {
    pub fn of(spaces: &[ParkingSpace]) -> Self {
        spaces.iter().fold(Self { total: spaces.len(), ..Self::default() }, |mut acc, space| {
            match space.state {
                SpaceState::Available => acc.available += 1,
                SpaceState::Occupied => acc.occupied += 1,
                SpaceState::Reserved => acc.reserved += 1,
                SpaceState::Maintenance => acc.maintenance += 1,
                SpaceState::Unknown => {}
            }
            acc
        })
    }

    /// Occupied share of all spaces, in whole percent.
    pub fn occupancy_percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let percent = self.occupied.saturating_mul(100) / self.total;
        u32::try_from(percent).unwrap_or(100)
    }
}

/// Reactive occupancy state held in a page-level signal.
#[derive(Clone, Debug, Default)]
pub struct OccupancyState {
    pub snapshot: OccupancySnapshot,
    /// Set after the first refresh completes, so empty lists can say "no spaces".
    pub loaded: bool,
    /// A mutation is in flight; drop targets ignore further gestures.
    pub busy: bool,
}

impl OccupancyState {
    /// Claim the single mutation slot. Returns `false` when one is already in flight.
    pub fn begin_mutation(&mut self) -> bool {
        !std::mem::replace(&mut self.busy, true)
    }

    pub fn finish_mutation(&mut self) {
        self.busy = false;
    }
}

/// Result of a confirmed mutation: the server's message and the refreshed data.
#[derive(Clone, Debug, PartialEq)]
pub struct MutationOutcome {
    pub message: String,
    pub snapshot: OccupancySnapshot,
}

/// Fetches occupancy data and performs parking mutations.
#[derive(Clone, Debug)]
pub struct OccupancyService<T> {
    gateway: Gateway<T>,
}

impl<T: Transport> OccupancyService<T> {
    pub fn new(gateway: Gateway<T>) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &Gateway<T> {
        &self.gateway
    }

    fn roles(&self) -> Vec<Role> {
        self.gateway.session().roles()
    }

    /// Space list for the current role; empty on any failure.
    pub async fn fetch_spaces(&self) -> Vec<ParkingSpace> {
        match api::fetch_spaces(&self.gateway, &self.roles()).await {
            Ok(spaces) => spaces,
            Err(err) => {
                log::warn!("space refresh failed: {err}");
                Vec::new()
            }
        }
    }

    /// Active registrations, only for roles allowed to see occupants; empty on failure.
    pub async fn fetch_registrations(&self) -> Vec<ActiveRegistration> {
        if !access::can(&self.roles(), Action::ViewOccupancy) {
            return Vec::new();
        }
        match api::fetch_active_registrations(&self.gateway).await {
            Ok(registrations) => registrations,
            Err(err) => {
                log::warn!("registration refresh failed: {err}");
                Vec::new()
            }
        }
    }

    /// Fetch both collections. Returns `None` without any request when signed out.
    pub async fn refresh(&self) -> Option<OccupancySnapshot> {
        self.gateway.session().token()?;
        let spaces = self.fetch_spaces().await;
        let registrations = self.fetch_registrations().await;
        Some(OccupancySnapshot { spaces, registrations })
    }

    /// Refresh after a confirmed mutation. A session lost mid-flight yields an empty snapshot.
    async fn settle(&self, message: Option<String>, fallback: &str) -> MutationOutcome {
        let snapshot = self.refresh().await.unwrap_or_default();
        MutationOutcome { message: message.unwrap_or_else(|| fallback.to_owned()), snapshot }
    }

    /// # Errors
    ///
    /// The server's rejection; no refresh happens in that case.
    pub async fn register_entry(&self, request: &EntryRequest) -> Result<MutationOutcome, ApiError> {
        log::info!("registering entry of vehicle {} into space {}", request.vehicle_id, request.space_id);
        let message = api::register_entry(&self.gateway, request).await?;
        Ok(self.settle(message, "Entry registered").await)
    }

    /// # Errors
    ///
    /// The server's rejection; no refresh happens in that case.
    pub async fn register_exit(&self, request: &ExitRequest) -> Result<MutationOutcome, ApiError> {
        log::info!("registering exit for registration {}", request.registration_id);
        let message = api::register_exit(&self.gateway, request).await?;
        Ok(self.settle(message, "Exit registered").await)
    }

    /// # Errors
    ///
    /// The server's rejection; no refresh happens in that case.
    pub async fn move_client(&self, request: &MoveRequest) -> Result<MutationOutcome, ApiError> {
        log::info!("moving registration {} to space {}", request.registration_id, request.new_space_id);
        let message = api::move_client(&self.gateway, request).await?;
        Ok(self.settle(message, "Vehicle moved").await)
    }
}
