//! People endpoints: the guard's client directory, staff management of
//! clients and guards, and the signed-in user's own profile.

#[cfg(test)]
#[path = "people_test.rs"]
mod people_test;

use super::error::ApiError;
use super::gateway::{ApiRequest, Gateway, Transport};
use super::types::{ClientSummary, ClientUpdate, GuardStatusUpdate, PersonRecord, PersonUpdate, Profile, ProfileUpdate, Vehicle};

pub const CLIENT_SEARCH_PATH: &str = "/api/persona/buscar-clientes";
pub const MY_VEHICLES_PATH: &str = "/api/cliente/mis-vehiculos";
pub const CLIENTS_PATH: &str = "/api/persona/listar-clientes";
pub const GUARDS_PATH: &str = "/api/persona/listar-vigilantes";
pub const GUARD_SEARCH_PATH: &str = "/api/persona/buscar-vigilantes";

pub(crate) fn client_update_endpoint(client_id: i64) -> String {
    format!("/api/persona/cliente-completo/{client_id}")
}

pub(crate) fn guard_update_endpoint(guard_id: i64) -> String {
    format!("/api/persona/vigilante/{guard_id}")
}

pub(crate) fn guard_status_endpoint(guard_id: i64) -> String {
    format!("/api/persona/vigilante/estado/{guard_id}")
}

pub(crate) fn profile_endpoint(username: &str) -> String {
    format!("/api/persona/perfil/{username}")
}

pub(crate) fn client_vehicles_endpoint(client_id: i64) -> String {
    format!("/api/reportes/vehiculos-cliente/{client_id}")
}

/// Search clients by name. A blank query returns an empty list without a request.
///
/// # Errors
///
/// Transport failures and non-2xx statuses.
pub async fn search_clients<T: Transport>(gateway: &Gateway<T>, name: &str) -> Result<Vec<ClientSummary>, ApiError> {
    let name = name.trim();
    if name.is_empty() {
        return Ok(Vec::new());
    }
    gateway
        .fetch_list(ApiRequest::get(CLIENT_SEARCH_PATH).query("nombre", name), "Could not search clients")
        .await
}

/// Vehicles registered to a client.
///
/// # Errors
///
/// Transport failures and non-2xx statuses.
pub async fn client_vehicles<T: Transport>(gateway: &Gateway<T>, client_id: i64) -> Result<Vec<Vehicle>, ApiError> {
    gateway
        .fetch_list(ApiRequest::get(client_vehicles_endpoint(client_id)), "Could not load vehicles")
        .await
}

/// Vehicles of the signed-in client.
///
/// # Errors
///
/// Transport failures and non-2xx statuses.
pub async fn my_vehicles<T: Transport>(gateway: &Gateway<T>) -> Result<Vec<Vehicle>, ApiError> {
    gateway
        .fetch_list(ApiRequest::get(MY_VEHICLES_PATH), "Could not load your vehicles")
        .await
}

/// Which people list a management page shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PersonKind {
    Client,
    Guard,
}

impl PersonKind {
    fn list_path(self) -> &'static str {
        match self {
            Self::Client => CLIENTS_PATH,
            Self::Guard => GUARDS_PATH,
        }
    }

    fn search_path(self) -> &'static str {
        match self {
            Self::Client => CLIENT_SEARCH_PATH,
            Self::Guard => GUARD_SEARCH_PATH,
        }
    }

    pub fn plural_label(self) -> &'static str {
        match self {
            Self::Client => "clients",
            Self::Guard => "guards",
        }
    }
}

/// Full list, or name matches when `name` is not blank.
///
/// # Errors
///
/// Transport failures and non-2xx statuses.
pub async fn list_people<T: Transport>(
    gateway: &Gateway<T>,
    kind: PersonKind,
    name: &str,
) -> Result<Vec<PersonRecord>, ApiError> {
    let name = name.trim();
    let request = if name.is_empty() {
        ApiRequest::get(kind.list_path())
    } else {
        ApiRequest::get(kind.search_path()).query("nombre", name)
    };
    gateway
        .fetch_list(request, &format!("Could not load {}", kind.plural_label()))
        .await
}

/// # Errors
///
/// Transport failures and server rejections (message verbatim).
pub async fn update_client<T: Transport>(
    gateway: &Gateway<T>,
    client_id: i64,
    update: &ClientUpdate,
) -> Result<Option<String>, ApiError> {
    gateway
        .send_for_message(ApiRequest::put(client_update_endpoint(client_id)).json(update), "Could not update the client")
        .await
}

/// Save a guard's data, then their active flag. The flag is left alone when
/// the data update fails.
///
/// # Errors
///
/// The first failing call's transport error or server rejection.
pub async fn update_guard<T: Transport>(
    gateway: &Gateway<T>,
    guard_id: i64,
    person: &PersonUpdate,
    active: bool,
) -> Result<Option<String>, ApiError> {
    let message = gateway
        .send_for_message(ApiRequest::put(guard_update_endpoint(guard_id)).json(person), "Could not update the guard")
        .await?;
    let status = GuardStatusUpdate { status: u8::from(active) };
    let status_message = gateway
        .send_for_message(
            ApiRequest::put(guard_status_endpoint(guard_id)).json(&status),
            "Could not change the guard's status",
        )
        .await?;
    Ok(message.or(status_message))
}

/// # Errors
///
/// Transport failures, non-2xx statuses and undecodable bodies.
pub async fn load_profile<T: Transport>(gateway: &Gateway<T>, username: &str) -> Result<Profile, ApiError> {
    gateway
        .fetch_json(ApiRequest::get(profile_endpoint(username)), "Could not load your profile")
        .await
}

/// Save the profile and return the server's updated copy.
///
/// # Errors
///
/// Transport failures, non-2xx statuses and undecodable bodies.
pub async fn save_profile<T: Transport>(
    gateway: &Gateway<T>,
    username: &str,
    update: &ProfileUpdate,
) -> Result<Profile, ApiError> {
    gateway
        .fetch_json(ApiRequest::put(profile_endpoint(username)).json(update), "Could not update your profile")
        .await
}
