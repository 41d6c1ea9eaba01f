use super::*;
use serde_json::json;

// =============================================================
// Roles and users
// =============================================================

#[test]
fn role_from_tag_recognizes_backend_tags() {
    assert_eq!(Role::from_tag("ROLE_ADMIN"), Some(Role::Admin));
    assert_eq!(Role::from_tag("ROLE_VIGILANTE"), Some(Role::Guard));
    assert_eq!(Role::from_tag("ROLE_CLIENTE"), Some(Role::Client));
    assert_eq!(Role::from_tag("ROLE_ROOT"), None);
}

#[test]
fn role_serializes_as_backend_tag() {
    assert_eq!(serde_json::to_value(Role::Guard).unwrap(), json!("ROLE_VIGILANTE"));
}

#[test]
fn user_roles_accept_strings_and_named_objects() {
    let user: User = serde_json::from_value(json!({
        "username": "ana",
        "roles": ["ROLE_ADMIN", { "name": "ROLE_VIGILANTE" }, "ROLE_UNKNOWN", 7],
        "accessToken": "ignored"
    }))
    .unwrap();
    assert_eq!(user.username, "ana");
    assert_eq!(user.roles, vec![Role::Admin, Role::Guard]);
    assert_eq!(user.primary_role(), Some(Role::Admin));
    assert!(user.has_role(Role::Guard));
    assert!(!user.has_role(Role::Client));
}

#[test]
fn user_with_null_roles_has_none() {
    let user: User = serde_json::from_value(json!({ "username": "x", "roles": null })).unwrap();
    assert!(user.roles.is_empty());
    assert_eq!(user.primary_role(), None);
}

// =============================================================
// Spaces and registrations
// =============================================================

#[test]
fn parking_space_decodes_wire_names() {
    let space: ParkingSpace = serde_json::from_value(json!({
        "id": 3,
        "numero": "A1",
        "tipo": "MOTO",
        "estado": "RESERVADO",
        "tarifaPorHora": 4.5,
        "descripcion": "Near the gate"
    }))
    .unwrap();
    assert_eq!(space.number, "A1");
    assert_eq!(space.kind, SpaceKind::Motorcycle);
    assert_eq!(space.state, SpaceState::Reserved);
    assert!((space.hourly_rate - 4.5).abs() < f64::EPSILON);
    assert_eq!(space.description.as_deref(), Some("Near the gate"));
}

#[test]
fn parking_space_accepts_legacy_rate_name_and_unknown_enums() {
    let space: ParkingSpace = serde_json::from_value(json!({
        "id": 9,
        "numero": null,
        "tipo": "BUS",
        "estado": "CLAUSURADO",
        "tarifa": 2.0
    }))
    .unwrap();
    assert_eq!(space.number, "");
    assert_eq!(space.kind, SpaceKind::Unknown);
    assert_eq!(space.state, SpaceState::Unknown);
    assert!((space.hourly_rate - 2.0).abs() < f64::EPSILON);
}

#[test]
fn only_available_and_reserved_accept_arrivals() {
    assert!(SpaceState::Available.accepts_arrivals());
    assert!(SpaceState::Reserved.accepts_arrivals());
    assert!(!SpaceState::Occupied.accepts_arrivals());
    assert!(!SpaceState::Maintenance.accepts_arrivals());
    assert!(!SpaceState::Unknown.accepts_arrivals());
}

#[test]
fn space_state_wire_names_parse_back() {
    for state in SpaceState::ASSIGNABLE {
        assert_eq!(SpaceState::from_wire(state.as_wire()), state);
    }
    assert_eq!(SpaceState::from_wire("nope"), SpaceState::Unknown);
}

#[test]
fn space_kind_wire_names_parse_back() {
    for kind in SpaceKind::SELECTABLE {
        assert_eq!(SpaceKind::from_wire(kind.as_wire()), kind);
    }
    assert_eq!(SpaceKind::from_wire("CARRO"), SpaceKind::Car);
}

#[test]
fn active_registration_tolerates_missing_fields() {
    let reg: ActiveRegistration = serde_json::from_value(json!({ "id": 99 })).unwrap();
    assert_eq!(reg.id, 99);
    assert_eq!(reg.space_number, "");
    assert!(reg.vehicle_plate.is_none());
    assert!(reg.client_name.is_none());
}

#[test]
fn entry_request_serializes_wire_names() {
    let body = EntryRequest { client_id: 7, vehicle_id: 42, space_id: 1, notes: "n".to_owned() };
    assert_eq!(
        serde_json::to_value(body).unwrap(),
        json!({ "clienteId": 7, "vehiculoId": 42, "espacioId": 1, "observaciones": "n" })
    );
}

#[test]
fn move_request_serializes_wire_names() {
    let body = MoveRequest { registration_id: 99, new_space_id: 4, reason: "from B3".to_owned() };
    assert_eq!(
        serde_json::to_value(body).unwrap(),
        json!({ "registroId": 99, "nuevoEspacioId": 4, "motivo": "from B3" })
    );
}

#[test]
fn new_space_serializes_enums_as_wire_strings() {
    let body = NewSpace {
        number: "C4".to_owned(),
        kind: SpaceKind::Accessible,
        state: SpaceState::Maintenance,
        description: String::new(),
        hourly_rate: 5.0,
    };
    let value = serde_json::to_value(body).unwrap();
    assert_eq!(value["tipo"], json!("DISCAPACITADO"));
    assert_eq!(value["estado"], json!("MANTENIMIENTO"));
    assert_eq!(value["tarifaPorHora"], json!(5.0));
}

// =============================================================
// People, vehicles, reservations
// =============================================================

#[test]
fn client_display_name_falls_back_to_id() {
    let client = ClientSummary { id: 5, full_name: "  ".to_owned(), last_names: None, dni: None };
    assert_eq!(client.display_name(), "Client #5");
    let named = ClientSummary { id: 5, full_name: "Rosa Díaz ".to_owned(), last_names: None, dni: None };
    assert_eq!(named.display_name(), "Rosa Díaz");
}

#[test]
fn vehicle_description_skips_missing_parts() {
    let vehicle: Vehicle = serde_json::from_value(json!({ "id": 1, "placa": "ABC-123", "modelo": "Yaris" })).unwrap();
    assert_eq!(vehicle.plate, "ABC-123");
    assert_eq!(vehicle.description(), "Yaris");
}

#[test]
fn reservation_decodes_state_and_optional_fields() {
    let reservation: Reservation = serde_json::from_value(json!({
        "id": 12,
        "estado": "CONFIRMADA",
        "espacioNumero": "B2",
        "fechaInicio": "2024-05-01T10:00"
    }))
    .unwrap();
    assert_eq!(reservation.state, ReservationState::Confirmed);
    assert_eq!(reservation.space_number.as_deref(), Some("B2"));
    assert!(reservation.ends_at.is_none());
}

// =============================================================
// Reports, people, statistics
// =============================================================

#[test]
fn report_decodes_status_images_and_null_collections() {
    let report: Report = serde_json::from_value(json!({
        "id": 4,
        "estado": "APROBADO",
        "descripcion": "Scratched door",
        "vehiculoPlaca": "ABC-123",
        "imagenes": [{ "id": 1, "nombreArchivo": "door.jpg", "urlDescarga": "http://api.test/img/1" }]
    }))
    .unwrap();
    assert_eq!(report.status, ReportStatus::Approved);
    assert_eq!(report.images[0].download_url, "http://api.test/img/1");

    let bare: Report = serde_json::from_value(json!({ "id": 5, "estado": "ARCHIVADO", "imagenes": null })).unwrap();
    assert_eq!(bare.status, ReportStatus::Unknown);
    assert!(bare.images.is_empty());
    assert!(bare.description.is_empty());
}

#[test]
fn report_status_update_uses_wire_names() {
    let body = ReportStatusUpdate { status: ReportStatus::Cancelled, admin_comment: "duplicate".to_owned() };
    assert_eq!(
        serde_json::to_value(body).unwrap(),
        json!({ "nuevoEstado": "CANCELADO", "comentarioAdmin": "duplicate" })
    );
}

#[test]
fn person_without_status_counts_as_active() {
    let person: PersonRecord = serde_json::from_value(json!({ "id": 2, "nombre": "Eva" })).unwrap();
    assert_eq!(person.full_name, "Eva");
    assert!(person.is_active());
    let inactive: PersonRecord = serde_json::from_value(json!({ "id": 3, "estado": 0 })).unwrap();
    assert!(!inactive.is_active());
}

#[test]
fn client_update_flattens_person_fields_next_to_status() {
    let body = ClientUpdate {
        person: PersonUpdate { full_name: "Eva".to_owned(), phone: "987654321".to_owned(), ..PersonUpdate::default() },
        status: 0,
    };
    let value = serde_json::to_value(body).unwrap();
    assert_eq!(value["nombreCompleto"], json!("Eva"));
    assert_eq!(value["telefono"], json!("987654321"));
    assert_eq!(value["estado"], json!(0));
}

#[test]
fn space_update_sends_null_for_missing_description() {
    let body = SpaceUpdate { kind: SpaceKind::Van, description: None, hourly_rate: 3.5, state: SpaceState::Reserved };
    assert_eq!(
        serde_json::to_value(body).unwrap(),
        json!({ "tipo": "CAMIONETA", "descripcion": null, "tarifaPorHora": 3.5, "estado": "RESERVADO" })
    );
}

#[test]
fn statistics_tolerate_missing_and_null_numbers() {
    let stats: AdminStats = serde_json::from_value(json!({
        "espacios": { "total": 20, "ocupados": 5, "porcentajeOcupacion": 25.0, "mantenimiento": null },
        "reservas": null
    }))
    .unwrap();
    assert_eq!(stats.spaces.total, 20);
    assert_eq!(stats.spaces.maintenance, 0);
    assert_eq!(stats.registrations, RegistrationStats::default());
    assert_eq!(stats.reservations.pending, 0);

    let guard: GuardStats = serde_json::from_value(json!({ "espaciosDisponibles": 7 })).unwrap();
    assert_eq!(guard.available_spaces, 7);
    assert_eq!(guard.pending_reservations, 0);
}
