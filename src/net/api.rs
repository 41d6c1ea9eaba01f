//! REST helpers for authentication and live occupancy.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>`; fallbacks name the operation so
//! a server that answers without a `message` still yields a readable notice.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

use super::error::ApiError;
use super::gateway::{ApiRequest, Gateway, Transport};
use super::types::{ActiveRegistration, EntryRequest, ExitRequest, LoginRequest, MoveRequest, ParkingSpace, Role};

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const ADMIN_SPACES_PATH: &str = "/api/admin/espacios/todos";
pub const SPACES_PATH: &str = "/api/estacionamiento/espacios";
pub const ACTIVE_REGISTRATIONS_PATH: &str = "/api/estacionamiento/registros-activos";
pub const REGISTER_ENTRY_PATH: &str = "/api/estacionamiento/registrar-entrada";
pub const REGISTER_EXIT_PATH: &str = "/api/estacionamiento/registrar-salida";
pub const MOVE_CLIENT_PATH: &str = "/api/estacionamiento/mover-cliente";

pub const ENTRY_FAILED: &str = "Could not register the entry";
pub const EXIT_FAILED: &str = "Could not register the exit";
pub const MOVE_FAILED: &str = "Could not move the vehicle";

const BAD_CREDENTIALS: &str = "Bad credentials";

/// Admins read the full administrative listing; everyone else the general one.
pub(crate) fn spaces_endpoint(roles: &[Role]) -> &'static str {
    if roles.contains(&Role::Admin) {
        ADMIN_SPACES_PATH
    } else {
        SPACES_PATH
    }
}

/// Translate the backend's login failure text into something a person can act on.
pub(crate) fn login_failure_message(server_message: Option<&str>) -> String {
    match server_message.map(str::trim) {
        Some(BAD_CREDENTIALS) => "Incorrect username or password.".to_owned(),
        Some(message) if !message.is_empty() => message.to_owned(),
        _ => "Authentication failed. Please try again.".to_owned(),
    }
}

/// Exchange credentials for a login result via `POST /api/auth/login`.
///
/// The raw JSON result is returned so the caller can persist it whole.
///
/// # Errors
///
/// `Rejected` carries a user-facing message (bad credentials are reworded);
/// transport failures become a generic "try again" rejection.
pub async fn login<T: Transport>(gateway: &Gateway<T>, username: &str, password: &str) -> Result<Value, ApiError> {
    let body = LoginRequest { username: username.to_owned(), password: password.to_owned() };
    let response = match gateway.auth_fetch(ApiRequest::post(LOGIN_PATH).json(&body)).await {
        Ok(response) => response,
        Err(err) => {
            log::warn!("login request failed: {err}");
            return Err(ApiError::Rejected { status: 0, message: login_failure_message(None) });
        }
    };
    if !response.is_success() {
        return Err(ApiError::Rejected {
            status: response.status,
            message: login_failure_message(response.message().as_deref()),
        });
    }
    Ok(serde_json::from_str(&response.body)?)
}

/// Fetch the space listing appropriate for `roles`.
///
/// # Errors
///
/// Transport failures and non-2xx statuses.
pub async fn fetch_spaces<T: Transport>(gateway: &Gateway<T>, roles: &[Role]) -> Result<Vec<ParkingSpace>, ApiError> {
    gateway
        .fetch_list(ApiRequest::get(spaces_endpoint(roles)), "Could not load spaces")
        .await
}

/// Fetch the vehicles currently parked.
///
/// # Errors
///
/// Transport failures and non-2xx statuses.
pub async fn fetch_active_registrations<T: Transport>(gateway: &Gateway<T>) -> Result<Vec<ActiveRegistration>, ApiError> {
    gateway
        .fetch_list(ApiRequest::get(ACTIVE_REGISTRATIONS_PATH), "Could not load active registrations")
        .await
}

/// Register a vehicle entering a space.
///
/// # Errors
///
/// Transport failures and server rejections (message verbatim).
pub async fn register_entry<T: Transport>(gateway: &Gateway<T>, body: &EntryRequest) -> Result<Option<String>, ApiError> {
    gateway
        .send_for_message(ApiRequest::post(REGISTER_ENTRY_PATH).json(body), ENTRY_FAILED)
        .await
}

/// Register a parked vehicle leaving.
///
/// # Errors
///
/// Transport failures and server rejections (message verbatim).
pub async fn register_exit<T: Transport>(gateway: &Gateway<T>, body: &ExitRequest) -> Result<Option<String>, ApiError> {
    gateway
        .send_for_message(ApiRequest::post(REGISTER_EXIT_PATH).json(body), EXIT_FAILED)
        .await
}

/// Move a parked vehicle to another space.
///
/// # Errors
///
/// Transport failures and server rejections (message verbatim).
pub async fn move_client<T: Transport>(gateway: &Gateway<T>, body: &MoveRequest) -> Result<Option<String>, ApiError> {
    gateway
        .send_for_message(ApiRequest::put(MOVE_CLIENT_PATH).json(body), MOVE_FAILED)
        .await
}
