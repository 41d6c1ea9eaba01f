use super::*;

fn reservation(state: ReservationState) -> Reservation {
    Reservation {
        id: 1,
        state,
        space_number: Some("A1".to_owned()),
        client_name: None,
        client_last_names: None,
        vehicle_plate: None,
        starts_at: None,
        ends_at: None,
    }
}

#[test]
fn parse_filter_maps_wire_states() {
    assert_eq!(parse_filter("PENDIENTE"), Some(ReservationState::Pending));
    assert_eq!(parse_filter("UTILIZADA"), Some(ReservationState::Used));
    assert_eq!(parse_filter(""), None);
    assert_eq!(parse_filter("garbage"), None);
}

#[test]
fn only_pending_reservations_are_decidable() {
    assert!(is_decidable(&reservation(ReservationState::Pending)));
    for state in [ReservationState::Confirmed, ReservationState::Cancelled, ReservationState::Used] {
        assert!(!is_decidable(&reservation(state)));
    }
}
