use super::*;
use crate::net::types::{AdminStats, GuardStats};

#[test]
fn admin_gets_three_sections_with_formatted_rate() {
    let mut admin = AdminStats::default();
    admin.spaces.total = 12;
    admin.spaces.occupancy_percent = 41.666;
    admin.reservations.pending = 3;
    let sections = sections(&Statistics::Admin(admin));

    let titles: Vec<&str> = sections.iter().map(|(title, _)| *title).collect();
    assert_eq!(titles, ["Spaces", "Registrations", "Reservations"]);
    assert!(sections[0].1.contains(&("Total", "12".to_owned())));
    assert!(sections[0].1.contains(&("Occupancy", "41.7%".to_owned())));
    assert!(sections[2].1.contains(&("Pending", "3".to_owned())));
}

#[test]
fn guard_gets_single_summary() {
    let guard = GuardStats { available_spaces: 5, occupied_spaces: 2, active_registrations: 2, pending_reservations: 1 };
    let sections = sections(&Statistics::Guard(guard));
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].1[0], ("Available spaces", "5".to_owned()));
}
