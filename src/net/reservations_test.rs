use super::*;

#[test]
fn unfiltered_listing_uses_base_path() {
    assert_eq!(reservations_endpoint(None), "/api/admin/reservas");
}

#[test]
fn filtered_listing_embeds_wire_state() {
    assert_eq!(
        reservations_endpoint(Some(ReservationState::Pending)),
        "/api/admin/reservas/estado/PENDIENTE"
    );
}

#[test]
fn decision_paths() {
    assert_eq!(decision_endpoint(3, ReservationDecision::Approve), "/api/admin/reservas/3/aprobar");
    assert_eq!(decision_endpoint(3, ReservationDecision::Reject), "/api/admin/reservas/3/rechazar");
}
