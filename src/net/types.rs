//! Wire types for the ParkSpot REST API.
//!
//! DESIGN
//! ======
//! The backend speaks Spanish field names; Rust fields use English names and
//! `serde(rename)` pins the wire spelling. Collections arriving from polling
//! are decoded element by element elsewhere, so every optional-looking field
//! here tolerates `null` or absence instead of failing the whole item.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Deserialize `null` or a missing value as `T::default()`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================
// Roles and users
// =============================================================

/// Closed set of roles the backend assigns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Guard,
    Client,
}

impl Role {
    /// Parse a backend role tag such as `ROLE_ADMIN`. Unknown tags yield `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim() {
            "ROLE_ADMIN" => Some(Self::Admin),
            "ROLE_VIGILANTE" => Some(Self::Guard),
            "ROLE_CLIENTE" => Some(Self::Client),
            _ => None,
        }
    }

    pub fn as_tag(self) -> &'static str {
        match self {
            Self::Admin => "ROLE_ADMIN",
            Self::Guard => "ROLE_VIGILANTE",
            Self::Client => "ROLE_CLIENTE",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Guard => "Guard",
            Self::Client => "Client",
        }
    }
}

impl Serialize for Role {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_tag())
    }
}

/// Roles arrive either as bare strings or as `{ "name": "ROLE_X" }` objects.
fn deserialize_roles<'de, D>(deserializer: D) -> Result<Vec<Role>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<Value> = null_as_default(deserializer)?;
    Ok(raw
        .iter()
        .filter_map(|entry| match entry {
            Value::String(tag) => Role::from_tag(tag),
            Value::Object(map) => map.get("name").and_then(Value::as_str).and_then(Role::from_tag),
            _ => None,
        })
        .collect())
}

/// Signed-in user profile as persisted under the `user` storage key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(default, deserialize_with = "deserialize_roles")]
    pub roles: Vec<Role>,
}

impl User {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// The first role the backend listed, which decides the landing page.
    pub fn primary_role(&self) -> Option<Role> {
        self.roles.first().copied()
    }
}

/// Credentials for `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Generic `{ "message": "..." }` body returned by mutations and errors.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

// =============================================================
// Parking spaces and occupancy
// =============================================================

/// Physical category of a space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpaceKind {
    #[serde(rename = "REGULAR")]
    Regular,
    #[serde(rename = "DISCAPACITADO")]
    Accessible,
    #[serde(rename = "CAMIONETA")]
    Van,
    #[serde(rename = "MOTO")]
    Motorcycle,
    #[serde(rename = "CARRO")]
    Car,
    #[default]
    #[serde(other, rename = "DESCONOCIDO")]
    Unknown,
}

impl SpaceKind {
    /// Kinds an admin may pick when creating a space.
    pub const SELECTABLE: [Self; 4] = [Self::Regular, Self::Accessible, Self::Van, Self::Motorcycle];

    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Regular => "REGULAR",
            Self::Accessible => "DISCAPACITADO",
            Self::Van => "CAMIONETA",
            Self::Motorcycle => "MOTO",
            Self::Car => "CARRO",
            Self::Unknown => "DESCONOCIDO",
        }
    }

    pub fn from_wire(raw: &str) -> Self {
        Self::SELECTABLE
            .into_iter()
            .chain([Self::Car])
            .find(|kind| kind.as_wire() == raw)
            .unwrap_or(Self::Unknown)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Regular => "Regular",
            Self::Accessible => "Accessible",
            Self::Van => "Van",
            Self::Motorcycle => "Motorcycle",
            Self::Car => "Car",
            Self::Unknown => "Other",
        }
    }
}

/// Server-authoritative occupancy state of a space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpaceState {
    #[serde(rename = "DISPONIBLE")]
    Available,
    #[serde(rename = "OCUPADO")]
    Occupied,
    #[serde(rename = "RESERVADO")]
    Reserved,
    #[serde(rename = "MANTENIMIENTO")]
    Maintenance,
    #[default]
    #[serde(other, rename = "DESCONOCIDO")]
    Unknown,
}

impl SpaceState {
    /// States an admin may set directly.
    pub const ASSIGNABLE: [Self; 4] = [Self::Available, Self::Occupied, Self::Reserved, Self::Maintenance];

    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Available => "DISPONIBLE",
            Self::Occupied => "OCUPADO",
            Self::Reserved => "RESERVADO",
            Self::Maintenance => "MANTENIMIENTO",
            Self::Unknown => "DESCONOCIDO",
        }
    }

    pub fn from_wire(raw: &str) -> Self {
        Self::ASSIGNABLE
            .into_iter()
            .find(|state| state.as_wire() == raw)
            .unwrap_or(Self::Unknown)
    }

    /// Whether a vehicle may be placed here (fresh entry or reassignment).
    pub fn accepts_arrivals(self) -> bool {
        matches!(self, Self::Available | Self::Reserved)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Occupied => "Occupied",
            Self::Reserved => "Reserved",
            Self::Maintenance => "Maintenance",
            Self::Unknown => "Unknown",
        }
    }

    /// BEM modifier used by space cards and badges.
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
            Self::Reserved => "reserved",
            Self::Maintenance => "maintenance",
            Self::Unknown => "unknown",
        }
    }
}

/// A single parking slot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParkingSpace {
    pub id: i64,
    /// Section-prefixed number such as `A1`.
    #[serde(rename = "numero", default, deserialize_with = "null_as_default")]
    pub number: String,
    #[serde(rename = "tipo", default, deserialize_with = "null_as_default")]
    pub kind: SpaceKind,
    #[serde(rename = "estado", default, deserialize_with = "null_as_default")]
    pub state: SpaceState,
    #[serde(rename = "tarifaPorHora", alias = "tarifa", default, deserialize_with = "null_as_default")]
    pub hourly_rate: f64,
    #[serde(rename = "descripcion", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A vehicle currently parked in a space.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveRegistration {
    pub id: i64,
    #[serde(rename = "numeroEspacio", default, deserialize_with = "null_as_default")]
    pub space_number: String,
    #[serde(rename = "vehiculoPlaca", default)]
    pub vehicle_plate: Option<String>,
    #[serde(rename = "clienteNombre", default)]
    pub client_name: Option<String>,
    #[serde(rename = "observacionesEntrada", alias = "observaciones", default)]
    pub entry_observations: Option<String>,
}

/// Body of `POST /api/estacionamiento/registrar-entrada`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EntryRequest {
    #[serde(rename = "clienteId")]
    pub client_id: i64,
    #[serde(rename = "vehiculoId")]
    pub vehicle_id: i64,
    #[serde(rename = "espacioId")]
    pub space_id: i64,
    #[serde(rename = "observaciones")]
    pub notes: String,
}

/// Body of `POST /api/estacionamiento/registrar-salida`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExitRequest {
    #[serde(rename = "registroId")]
    pub registration_id: i64,
    #[serde(rename = "observaciones")]
    pub notes: String,
}

/// Body of `PUT /api/estacionamiento/mover-cliente`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MoveRequest {
    #[serde(rename = "registroId")]
    pub registration_id: i64,
    #[serde(rename = "nuevoEspacioId")]
    pub new_space_id: i64,
    #[serde(rename = "motivo")]
    pub reason: String,
}

/// Body of `POST /api/admin/espacios/crear`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewSpace {
    #[serde(rename = "numero")]
    pub number: String,
    #[serde(rename = "tipo")]
    pub kind: SpaceKind,
    #[serde(rename = "estado")]
    pub state: SpaceState,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "tarifaPorHora")]
    pub hourly_rate: f64,
}

// =============================================================
// People and vehicles
// =============================================================

/// Search hit from the client directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSummary {
    pub id: i64,
    #[serde(rename = "nombreCompleto", alias = "nombre", default, deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(rename = "apellidos", default)]
    pub last_names: Option<String>,
    #[serde(default)]
    pub dni: Option<String>,
}

impl ClientSummary {
    /// Full name as sent by the directory, or a placeholder built from the id.
    pub fn display_name(&self) -> String {
        let name = self.full_name.trim();
        if name.is_empty() {
            format!("Client #{}", self.id)
        } else {
            name.to_owned()
        }
    }
}

/// A vehicle registered to a client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: i64,
    #[serde(rename = "placa", default, deserialize_with = "null_as_default")]
    pub plate: String,
    #[serde(rename = "marca", default)]
    pub make: Option<String>,
    #[serde(rename = "modelo", default)]
    pub model: Option<String>,
}

impl Vehicle {
    /// `make model`, skipping whichever part is missing.
    pub fn description(&self) -> String {
        [self.make.as_deref(), self.model.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// =============================================================
// Reservations
// =============================================================

/// Lifecycle state of a reservation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReservationState {
    #[serde(rename = "PENDIENTE")]
    Pending,
    #[serde(rename = "CONFIRMADA")]
    Confirmed,
    #[serde(rename = "CANCELADA")]
    Cancelled,
    #[serde(rename = "UTILIZADA")]
    Used,
    #[default]
    #[serde(other, rename = "DESCONOCIDA")]
    Unknown,
}

impl ReservationState {
    pub const ALL: [Self; 4] = [Self::Pending, Self::Confirmed, Self::Cancelled, Self::Used];

    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Pending => "PENDIENTE",
            Self::Confirmed => "CONFIRMADA",
            Self::Cancelled => "CANCELADA",
            Self::Used => "UTILIZADA",
            Self::Unknown => "DESCONOCIDA",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::Cancelled => "Cancelled",
            Self::Used => "Used",
            Self::Unknown => "Unknown",
        }
    }
}

/// Reservation row as listed for admins.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    #[serde(rename = "estado", default, deserialize_with = "null_as_default")]
    pub state: ReservationState,
    #[serde(rename = "espacioNumero", default)]
    pub space_number: Option<String>,
    #[serde(rename = "clienteNombre", default)]
    pub client_name: Option<String>,
    #[serde(rename = "clienteApellidos", default)]
    pub client_last_names: Option<String>,
    #[serde(rename = "vehiculoPlaca", default)]
    pub vehicle_plate: Option<String>,
    #[serde(rename = "fechaInicio", default)]
    pub starts_at: Option<String>,
    #[serde(rename = "fechaFin", default)]
    pub ends_at: Option<String>,
}

/// Body of `POST /api/cliente/crear-reserva`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReservationRequest {
    #[serde(rename = "espacioId")]
    pub space_id: i64,
    #[serde(rename = "vehiculoId")]
    pub vehicle_id: i64,
    #[serde(rename = "fechaInicio")]
    pub starts_at: String,
    #[serde(rename = "fechaFin")]
    pub ends_at: String,
    #[serde(rename = "observaciones")]
    pub notes: String,
}

// =============================================================
// Incident reports
// =============================================================

/// Review state of an incident report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportStatus {
    #[serde(rename = "PENDIENTE")]
    Pending,
    #[serde(rename = "APROBADO")]
    Approved,
    #[serde(rename = "CANCELADO")]
    Cancelled,
    #[default]
    #[serde(other, rename = "DESCONOCIDO")]
    Unknown,
}

impl ReportStatus {
    pub const ALL: [Self; 3] = [Self::Pending, Self::Approved, Self::Cancelled];

    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Pending => "PENDIENTE",
            Self::Approved => "APROBADO",
            Self::Cancelled => "CANCELADO",
            Self::Unknown => "DESCONOCIDO",
        }
    }

    pub fn from_wire(raw: &str) -> Self {
        Self::ALL.into_iter().find(|status| status.as_wire() == raw).unwrap_or(Self::Unknown)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Cancelled => "Cancelled",
            Self::Unknown => "Unknown",
        }
    }

    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Cancelled => "cancelled",
            Self::Unknown => "unknown",
        }
    }
}

/// Photo attached to a report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportImage {
    pub id: i64,
    #[serde(rename = "nombreArchivo", default, deserialize_with = "null_as_default")]
    pub file_name: String,
    #[serde(rename = "urlDescarga", default, deserialize_with = "null_as_default")]
    pub download_url: String,
}

/// Incident filed by a guard against a client's vehicle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub id: i64,
    #[serde(rename = "estado", default, deserialize_with = "null_as_default")]
    pub status: ReportStatus,
    #[serde(rename = "fechaCreacion", default)]
    pub created_at: Option<String>,
    #[serde(rename = "descripcion", default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "comentarioAdmin", default)]
    pub admin_comment: Option<String>,
    #[serde(rename = "clienteNombre", default)]
    pub client_name: Option<String>,
    #[serde(rename = "clienteApellidos", default)]
    pub client_last_names: Option<String>,
    #[serde(rename = "clienteDni", default)]
    pub client_dni: Option<String>,
    #[serde(rename = "vehiculoPlaca", default)]
    pub vehicle_plate: Option<String>,
    #[serde(rename = "vehiculoMarca", default)]
    pub vehicle_make: Option<String>,
    #[serde(rename = "vehiculoModelo", default)]
    pub vehicle_model: Option<String>,
    #[serde(rename = "vigilanteNombre", default)]
    pub guard_name: Option<String>,
    #[serde(rename = "vigilanteUsername", default)]
    pub guard_username: Option<String>,
    #[serde(rename = "adminActualizadorNombre", default)]
    pub reviewed_by: Option<String>,
    #[serde(rename = "imagenes", default, deserialize_with = "null_as_default")]
    pub images: Vec<ReportImage>,
}

/// Body of `POST /api/reportes/crear`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewReport {
    #[serde(rename = "clienteId")]
    pub client_id: i64,
    #[serde(rename = "vehiculoId")]
    pub vehicle_id: i64,
    #[serde(rename = "descripcion")]
    pub description: String,
}

/// Body of `PUT /api/reportes/{id}/estado`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReportStatusUpdate {
    #[serde(rename = "nuevoEstado")]
    pub status: ReportStatus,
    #[serde(rename = "comentarioAdmin")]
    pub admin_comment: String,
}

// =============================================================
// People management and profile
// =============================================================

/// Client or guard as listed for staff. `estado` is 1 (active) or 0 (inactive).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub id: i64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "nombreCompleto", alias = "nombre", default, deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(rename = "apellidos", default)]
    pub last_names: Option<String>,
    #[serde(default)]
    pub dni: Option<String>,
    #[serde(rename = "direccion", default)]
    pub address: Option<String>,
    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,
    #[serde(rename = "estado", default)]
    pub status: Option<u8>,
}

impl PersonRecord {
    /// Records without a status are treated as active.
    pub fn is_active(&self) -> bool {
        self.status != Some(0)
    }
}

/// Personal data shared by the client and guard edit endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PersonUpdate {
    pub email: String,
    #[serde(rename = "nombreCompleto")]
    pub full_name: String,
    #[serde(rename = "apellidos")]
    pub last_names: String,
    pub dni: String,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "telefono")]
    pub phone: String,
}

/// Body of `PUT /api/persona/cliente-completo/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClientUpdate {
    #[serde(flatten)]
    pub person: PersonUpdate,
    #[serde(rename = "estado")]
    pub status: u8,
}

/// Body of `PUT /api/persona/vigilante/estado/{id}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GuardStatusUpdate {
    #[serde(rename = "estado")]
    pub status: u8,
}

/// The signed-in user's own profile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "nombreCompleto", default, deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(rename = "apellidos", default, deserialize_with = "null_as_default")]
    pub last_names: String,
    #[serde(default)]
    pub dni: Option<String>,
    #[serde(rename = "direccion", default, deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(rename = "telefono", default, deserialize_with = "null_as_default")]
    pub phone: String,
}

/// Body of `PUT /api/persona/perfil/{username}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    #[serde(rename = "nombreCompleto")]
    pub full_name: String,
    #[serde(rename = "apellidos")]
    pub last_names: String,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "telefono")]
    pub phone: String,
}

/// Body of `PUT /api/admin/espacios/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SpaceUpdate {
    #[serde(rename = "tipo")]
    pub kind: SpaceKind,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
    #[serde(rename = "tarifaPorHora")]
    pub hourly_rate: f64,
    #[serde(rename = "estado")]
    pub state: SpaceState,
}

// =============================================================
// Statistics
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SpaceStats {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: u64,
    #[serde(rename = "ocupados", default, deserialize_with = "null_as_default")]
    pub occupied: u64,
    #[serde(rename = "disponibles", default, deserialize_with = "null_as_default")]
    pub available: u64,
    #[serde(rename = "reservados", default, deserialize_with = "null_as_default")]
    pub reserved: u64,
    #[serde(rename = "mantenimiento", default, deserialize_with = "null_as_default")]
    pub maintenance: u64,
    #[serde(rename = "porcentajeOcupacion", default, deserialize_with = "null_as_default")]
    pub occupancy_percent: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RegistrationStats {
    #[serde(rename = "activos", default, deserialize_with = "null_as_default")]
    pub active: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ReservationStats {
    #[serde(rename = "pendientes", default, deserialize_with = "null_as_default")]
    pub pending: u64,
    #[serde(rename = "confirmadas", default, deserialize_with = "null_as_default")]
    pub confirmed: u64,
    #[serde(rename = "utilizadas", default, deserialize_with = "null_as_default")]
    pub used: u64,
    #[serde(rename = "canceladas", default, deserialize_with = "null_as_default")]
    pub cancelled: u64,
}

/// `GET /api/dashboard/estadisticas`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AdminStats {
    #[serde(rename = "espacios", default, deserialize_with = "null_as_default")]
    pub spaces: SpaceStats,
    #[serde(rename = "registros", default, deserialize_with = "null_as_default")]
    pub registrations: RegistrationStats,
    #[serde(rename = "reservas", default, deserialize_with = "null_as_default")]
    pub reservations: ReservationStats,
}

/// `GET /api/dashboard/estadisticas-vigilante`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct GuardStats {
    #[serde(rename = "espaciosDisponibles", default, deserialize_with = "null_as_default")]
    pub available_spaces: u64,
    #[serde(rename = "espaciosOcupados", default, deserialize_with = "null_as_default")]
    pub occupied_spaces: u64,
    #[serde(rename = "registrosActivos", default, deserialize_with = "null_as_default")]
    pub active_registrations: u64,
    #[serde(rename = "reservasPendientes", default, deserialize_with = "null_as_default")]
    pub pending_reservations: u64,
}
