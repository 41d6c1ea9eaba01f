//! Reservation endpoints for clients (create) and admins (review).

#[cfg(test)]
#[path = "reservations_test.rs"]
mod reservations_test;

use super::error::ApiError;
use super::gateway::{ApiRequest, Gateway, Transport};
use super::types::{Reservation, ReservationRequest, ReservationState};

pub const CREATE_RESERVATION_PATH: &str = "/api/cliente/crear-reserva";
pub const ADMIN_RESERVATIONS_PATH: &str = "/api/admin/reservas";

/// Admin decision on a pending reservation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReservationDecision {
    Approve,
    Reject,
}

impl ReservationDecision {
    fn path_segment(self) -> &'static str {
        match self {
            Self::Approve => "aprobar",
            Self::Reject => "rechazar",
        }
    }

    pub fn success_fallback(self) -> &'static str {
        match self {
            Self::Approve => "Reservation approved",
            Self::Reject => "Reservation rejected",
        }
    }
}

pub(crate) fn reservations_endpoint(filter: Option<ReservationState>) -> String {
    match filter {
        Some(state) => format!("{ADMIN_RESERVATIONS_PATH}/estado/{}", state.as_wire()),
        None => ADMIN_RESERVATIONS_PATH.to_owned(),
    }
}

pub(crate) fn decision_endpoint(reservation_id: i64, decision: ReservationDecision) -> String {
    format!("{ADMIN_RESERVATIONS_PATH}/{reservation_id}/{}", decision.path_segment())
}

/// List reservations, optionally only those in `filter` state.
///
/// # Errors
///
/// Transport failures and non-2xx statuses.
pub async fn list_reservations<T: Transport>(
    gateway: &Gateway<T>,
    filter: Option<ReservationState>,
) -> Result<Vec<Reservation>, ApiError> {
    gateway
        .fetch_list(ApiRequest::get(reservations_endpoint(filter)), "Could not load reservations")
        .await
}

/// # Errors
///
/// Transport failures and server rejections (message verbatim).
pub async fn decide_reservation<T: Transport>(
    gateway: &Gateway<T>,
    reservation_id: i64,
    decision: ReservationDecision,
) -> Result<Option<String>, ApiError> {
    gateway
        .send_for_message(
            ApiRequest::put(decision_endpoint(reservation_id, decision)),
            "Could not process the reservation",
        )
        .await
}

/// # Errors
///
/// Transport failures and server rejections (message verbatim).
pub async fn create_reservation<T: Transport>(
    gateway: &Gateway<T>,
    request: &ReservationRequest,
) -> Result<Option<String>, ApiError> {
    gateway
        .send_for_message(ApiRequest::post(CREATE_RESERVATION_PATH).json(request), "Could not create the reservation")
        .await
}
