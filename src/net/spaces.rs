//! Administrative space management endpoints.

#[cfg(test)]
#[path = "spaces_test.rs"]
mod spaces_test;

use super::error::ApiError;
use super::gateway::{ApiRequest, Gateway, Transport};
use super::types::{NewSpace, SpaceState, SpaceUpdate};

pub const CREATE_SPACE_PATH: &str = "/api/admin/espacios/crear";

pub(crate) fn space_endpoint(space_id: i64) -> String {
    format!("/api/admin/espacios/{space_id}")
}

pub(crate) fn space_state_endpoint(space_id: i64) -> String {
    format!("/api/admin/espacios/{space_id}/estado")
}

/// # Errors
///
/// Transport failures and server rejections (message verbatim).
pub async fn create_space<T: Transport>(gateway: &Gateway<T>, space: &NewSpace) -> Result<Option<String>, ApiError> {
    gateway
        .send_for_message(ApiRequest::post(CREATE_SPACE_PATH).json(space), "Could not create the space")
        .await
}

/// Replace a space's type, description, rate and state.
///
/// # Errors
///
/// Transport failures and server rejections (message verbatim).
pub async fn update_space<T: Transport>(
    gateway: &Gateway<T>,
    space_id: i64,
    update: &SpaceUpdate,
) -> Result<Option<String>, ApiError> {
    gateway
        .send_for_message(ApiRequest::put(space_endpoint(space_id)).json(update), "Could not update the space")
        .await
}

/// Force a space into `state`.
///
/// # Errors
///
/// Transport failures and server rejections (message verbatim).
pub async fn update_space_state<T: Transport>(
    gateway: &Gateway<T>,
    space_id: i64,
    state: SpaceState,
) -> Result<Option<String>, ApiError> {
    let request = ApiRequest::put(space_state_endpoint(space_id)).query("nuevoEstado", state.as_wire());
    gateway.send_for_message(request, "Could not change the space state").await
}

/// # Errors
///
/// Transport failures and server rejections (message verbatim).
pub async fn delete_space<T: Transport>(gateway: &Gateway<T>, space_id: i64) -> Result<Option<String>, ApiError> {
    gateway
        .send_for_message(ApiRequest::delete(space_endpoint(space_id)), "Could not delete the space")
        .await
}
