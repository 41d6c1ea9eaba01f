use super::*;

// =============================================================
// SpaceForm
// =============================================================

#[test]
fn space_form_defaults() {
    let form = SpaceForm::default();
    assert_eq!(form.kind, SpaceKind::Regular);
    assert_eq!(form.state, SpaceState::Available);
    assert_eq!(form.hourly_rate, "5");
}

#[test]
fn space_number_is_trimmed_and_uppercased() {
    let form = SpaceForm { number: "  b12 ".to_owned(), ..SpaceForm::default() };
    let space = form.validate().unwrap();
    assert_eq!(space.number, "B12");
    assert!((space.hourly_rate - 5.0).abs() < f64::EPSILON);
}

#[test]
fn blank_number_is_rejected() {
    let form = SpaceForm { number: "   ".to_owned(), ..SpaceForm::default() };
    assert_eq!(form.validate(), Err("Enter a space number."));
}

#[test]
fn rate_must_be_positive_number() {
    for rate in ["0", "-2", "abc", ""] {
        let form = SpaceForm { number: "A1".to_owned(), hourly_rate: rate.to_owned(), ..SpaceForm::default() };
        assert_eq!(form.validate(), Err("The hourly rate must be greater than zero."), "{rate}");
    }
}

#[test]
fn decimal_comma_is_accepted() {
    let form = SpaceForm { number: "A1".to_owned(), hourly_rate: "2,5".to_owned(), ..SpaceForm::default() };
    assert!((form.validate().unwrap().hourly_rate - 2.5).abs() < f64::EPSILON);
}

#[test]
fn occupied_spaces_are_locked() {
    assert!(!space_is_editable(SpaceState::Occupied));
    assert!(space_is_editable(SpaceState::Maintenance));
    assert!(space_is_editable(SpaceState::Available));
}

// =============================================================
// SpaceEditForm
// =============================================================

fn listed_space(description: Option<&str>) -> ParkingSpace {
    ParkingSpace {
        id: 4,
        number: "C2".to_owned(),
        kind: SpaceKind::Van,
        state: SpaceState::Reserved,
        hourly_rate: 7.5,
        description: description.map(str::to_owned),
    }
}

#[test]
fn edit_form_prefills_from_row() {
    let form = SpaceEditForm::for_space(&listed_space(Some("Covered")));
    assert_eq!(form.kind, SpaceKind::Van);
    assert_eq!(form.hourly_rate, "7.5");
    assert_eq!(form.description, "Covered");
}

#[test]
fn blank_description_is_sent_as_none() {
    let form = SpaceEditForm { description: "   ".to_owned(), ..SpaceEditForm::for_space(&listed_space(None)) };
    let update = form.validate().unwrap();
    assert_eq!(update.description, None);
    assert_eq!(update.state, SpaceState::Reserved);
}

#[test]
fn edit_rejects_non_positive_rate() {
    let form = SpaceEditForm { hourly_rate: "0".to_owned(), ..SpaceEditForm::for_space(&listed_space(None)) };
    assert_eq!(form.validate(), Err("The hourly rate must be greater than zero."));
}

// =============================================================
// ReservationForm
// =============================================================

fn filled() -> ReservationForm {
    ReservationForm {
        space_id: 3,
        vehicle_id: Some(9),
        starts_at: "2025-03-01T08:00".to_owned(),
        ends_at: "2025-03-01T10:30".to_owned(),
        notes: " near exit ".to_owned(),
    }
}

#[test]
fn reservation_builds_request_with_seconds() {
    let request = filled().validate().unwrap();
    assert_eq!(request.space_id, 3);
    assert_eq!(request.vehicle_id, 9);
    assert_eq!(request.starts_at, "2025-03-01T08:00:00");
    assert_eq!(request.ends_at, "2025-03-01T10:30:00");
    assert_eq!(request.notes, "near exit");
}

#[test]
fn reservation_requires_vehicle() {
    let form = ReservationForm { vehicle_id: None, ..filled() };
    assert_eq!(form.validate(), Err("Choose a vehicle."));
}

#[test]
fn reservation_requires_both_times() {
    let form = ReservationForm { ends_at: String::new(), ..filled() };
    assert_eq!(form.validate(), Err("Enter both start and end times."));
}

#[test]
fn reservation_end_must_follow_start() {
    let form = ReservationForm { ends_at: "2025-03-01T08:00".to_owned(), ..filled() };
    assert_eq!(form.validate(), Err("The end time must be after the start time."));
}

#[test]
fn for_space_starts_empty() {
    let form = ReservationForm::for_space(4);
    assert_eq!(form.space_id, 4);
    assert_eq!(form.vehicle_id, None);
}

#[test]
fn select_placeholder_parses_as_no_choice() {
    assert_eq!(parse_choice(""), None);
    assert_eq!(parse_choice("12"), Some(12));
    assert_eq!(parse_choice("twelve"), None);
}
