use super::*;

fn report(status: ReportStatus, comment: Option<&str>) -> Report {
    Report {
        id: 1,
        status,
        created_at: None,
        description: "Dent".to_owned(),
        admin_comment: comment.map(str::to_owned),
        client_name: None,
        client_last_names: None,
        client_dni: None,
        vehicle_plate: None,
        vehicle_make: None,
        vehicle_model: None,
        guard_name: None,
        guard_username: None,
        reviewed_by: None,
        images: Vec::new(),
    }
}

// =============================================================
// ReportForm
// =============================================================

#[test]
fn changing_client_clears_vehicle() {
    let mut form = ReportForm { client_id: Some(1), vehicle_id: Some(10), description: String::new() };
    assert!(!form.choose_client(Some(1)));
    assert_eq!(form.vehicle_id, Some(10));
    assert!(form.choose_client(Some(2)));
    assert_eq!(form.vehicle_id, None);
}

#[test]
fn fields_are_required_in_order() {
    let mut form = ReportForm::default();
    assert_eq!(form.validate(), Err("Choose a client."));
    form.client_id = Some(1);
    assert_eq!(form.validate(), Err("Choose one of the client's vehicles."));
    form.vehicle_id = Some(3);
    form.description = "   ".to_owned();
    assert_eq!(form.validate(), Err("Describe the incident."));
}

#[test]
fn valid_form_trims_description() {
    let form = ReportForm { client_id: Some(1), vehicle_id: Some(3), description: " Broken light \n".to_owned() };
    assert_eq!(
        form.validate(),
        Ok(NewReport { client_id: 1, vehicle_id: 3, description: "Broken light".to_owned() })
    );
}

#[test]
fn upload_needs_a_file() {
    assert_eq!(check_uploads(&[]), Err("Select at least one image."));
    assert_eq!(check_uploads(&[Upload::default()]), Ok(()));
}

// =============================================================
// ReviewForm
// =============================================================

#[test]
fn review_starts_from_current_status_and_comment() {
    let form = ReviewForm::for_report(&report(ReportStatus::Approved, Some("ok")));
    assert_eq!(form, ReviewForm { status: ReportStatus::Approved, comment: "ok".to_owned() });
    let unknown = ReviewForm::for_report(&report(ReportStatus::Unknown, None));
    assert_eq!(unknown.status, ReportStatus::Pending);
    assert!(unknown.comment.is_empty());
}

#[test]
fn review_update_trims_comment() {
    let form = ReviewForm { status: ReportStatus::Cancelled, comment: "  duplicate  ".to_owned() };
    assert_eq!(form.to_update().admin_comment, "duplicate");
}
