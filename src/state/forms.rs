//! Form models for space creation, space editing and reservations.
//!
//! Inputs are kept as the raw strings the user typed; `validate` turns them
//! into a request body or a message for the form's error line.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::net::types::{NewSpace, ParkingSpace, ReservationRequest, SpaceKind, SpaceState, SpaceUpdate};

pub const DEFAULT_HOURLY_RATE: &str = "5";

/// Spaces with a parked vehicle are locked against state changes and deletion.
pub fn space_is_editable(state: SpaceState) -> bool {
    state != SpaceState::Occupied
}

/// Id picked in a `<select>`; the empty placeholder option reads as `None`.
pub fn parse_choice(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Accepts a decimal comma.
fn parse_rate(raw: &str) -> Result<f64, &'static str> {
    match raw.trim().replace(',', ".").parse::<f64>() {
        Ok(rate) if rate.is_finite() && rate > 0.0 => Ok(rate),
        _ => Err("The hourly rate must be greater than zero."),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SpaceForm {
    pub number: String,
    pub kind: SpaceKind,
    pub state: SpaceState,
    pub description: String,
    pub hourly_rate: String,
}

impl Default for SpaceForm {
    fn default() -> Self {
        Self {
            number: String::new(),
            kind: SpaceKind::Regular,
            state: SpaceState::Available,
            description: String::new(),
            hourly_rate: DEFAULT_HOURLY_RATE.to_owned(),
        }
    }
}

impl SpaceForm {
    /// # Errors
    ///
    /// A user-facing message naming the first invalid field.
    pub fn validate(&self) -> Result<NewSpace, &'static str> {
        let number = self.number.trim().to_uppercase();
        if number.is_empty() {
            return Err("Enter a space number.");
        }
        let rate = parse_rate(&self.hourly_rate)?;
        Ok(NewSpace {
            number,
            kind: self.kind,
            state: self.state,
            description: self.description.trim().to_owned(),
            hourly_rate: rate,
        })
    }
}

/// Edit of an existing space; the number is fixed.
#[derive(Clone, Debug, PartialEq)]
pub struct SpaceEditForm {
    pub space_id: i64,
    pub number: String,
    pub kind: SpaceKind,
    pub state: SpaceState,
    pub description: String,
    pub hourly_rate: String,
}

impl SpaceEditForm {
    pub fn for_space(space: &ParkingSpace) -> Self {
        let kind = if space.kind == SpaceKind::Unknown { SpaceKind::Regular } else { space.kind };
        Self {
            space_id: space.id,
            number: space.number.clone(),
            kind,
            state: space.state,
            description: space.description.clone().unwrap_or_default(),
            hourly_rate: space.hourly_rate.to_string(),
        }
    }

    /// # Errors
    ///
    /// A user-facing message naming the first invalid field.
    pub fn validate(&self) -> Result<SpaceUpdate, &'static str> {
        let hourly_rate = parse_rate(&self.hourly_rate)?;
        let description = Some(self.description.trim().to_owned()).filter(|d| !d.is_empty());
        Ok(SpaceUpdate { kind: self.kind, description, hourly_rate, state: self.state })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReservationForm {
    pub space_id: i64,
    pub vehicle_id: Option<i64>,
    /// `datetime-local` value, `YYYY-MM-DDTHH:MM`.
    pub starts_at: String,
    pub ends_at: String,
    pub notes: String,
}

/// Pad a `datetime-local` value to full seconds for the backend.
pub fn normalize_datetime(raw: &str) -> String {
    let raw = raw.trim();
    if raw.len() == "YYYY-MM-DDTHH:MM".len() {
        format!("{raw}:00")
    } else {
        raw.to_owned()
    }
}

impl ReservationForm {
    pub fn for_space(space_id: i64) -> Self {
        Self { space_id, ..Self::default() }
    }

    /// # Errors
    ///
    /// A user-facing message naming the first invalid field.
    pub fn validate(&self) -> Result<ReservationRequest, &'static str> {
        let Some(vehicle_id) = self.vehicle_id else {
            return Err("Choose a vehicle.");
        };
        let starts_at = normalize_datetime(&self.starts_at);
        let ends_at = normalize_datetime(&self.ends_at);
        if starts_at.is_empty() || ends_at.is_empty() {
            return Err("Enter both start and end times.");
        }
        // ISO-8601 local timestamps of equal length order lexicographically.
        if ends_at <= starts_at {
            return Err("The end time must be after the start time.");
        }
        Ok(ReservationRequest {
            space_id: self.space_id,
            vehicle_id,
            starts_at,
            ends_at,
            notes: self.notes.trim().to_owned(),
        })
    }
}
