use super::*;
use crate::net::types::ReservationState;

#[test]
fn hourly_rate_uses_two_decimals() {
    assert_eq!(hourly_rate(5.0), "$5.00/h");
    assert_eq!(hourly_rate(2.456), "$2.46/h");
}

#[test]
fn timestamp_drops_seconds_and_separator() {
    assert_eq!(timestamp(Some("2025-03-01T08:30:00")), "2025-03-01 08:30");
    assert_eq!(timestamp(Some("2025-03-01")), "2025-03-01");
    assert_eq!(timestamp(Some("  ")), "-");
    assert_eq!(timestamp(None), "-");
}

#[test]
fn reservation_client_joins_available_names() {
    let mut reservation = Reservation {
        id: 1,
        state: ReservationState::Pending,
        space_number: None,
        client_name: Some("Ana".to_owned()),
        client_last_names: Some("Ruiz".to_owned()),
        vehicle_plate: None,
        starts_at: None,
        ends_at: None,
    };
    assert_eq!(reservation_client(&reservation), "Ana Ruiz");
    reservation.client_last_names = None;
    assert_eq!(reservation_client(&reservation), "Ana");
    reservation.client_name = None;
    assert_eq!(reservation_client(&reservation), "-");
}

#[test]
fn report_vehicle_appends_model_when_known() {
    let mut report: Report = serde_json::from_value(serde_json::json!({ "id": 1, "vehiculoPlaca": "ABC-123" })).unwrap();
    assert_eq!(report_vehicle(&report), "ABC-123");
    report.vehicle_make = Some("Toyota".to_owned());
    report.vehicle_model = Some("Yaris".to_owned());
    assert_eq!(report_vehicle(&report), "ABC-123 (Toyota Yaris)");
    report.vehicle_plate = None;
    assert_eq!(report_vehicle(&report), "- (Toyota Yaris)");
}

#[test]
fn full_name_skips_blank_parts() {
    assert_eq!(full_name(&[Some(" Ana "), None, Some("Ruiz")]), "Ana Ruiz");
    assert_eq!(full_name(&[None, Some("  ")]), "-");
}

#[test]
fn file_size_picks_unit() {
    assert_eq!(file_size(512), "512 B");
    assert_eq!(file_size(1536), "1.5 KB");
    assert_eq!(file_size(3 * 1024 * 1024), "3.0 MB");
}
