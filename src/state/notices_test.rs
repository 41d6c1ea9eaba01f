use super::*;

#[test]
fn push_returns_unique_ids() {
    let mut state = NoticeState::default();
    let a = state.push(NoticeKind::Success, "saved");
    let b = state.push(NoticeKind::Error, "failed");
    assert_ne!(a, b);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[1].text, "failed");
}

#[test]
fn oldest_notices_are_dropped_past_the_cap() {
    let mut state = NoticeState::default();
    for n in 0..(MAX_NOTICES + 2) {
        state.push(NoticeKind::Success, format!("n{n}"));
    }
    assert_eq!(state.items.len(), MAX_NOTICES);
    assert_eq!(state.items[0].text, "n2");
}

#[test]
fn dismiss_removes_only_matching_notice() {
    let mut state = NoticeState::default();
    let keep = state.push(NoticeKind::Success, "keep");
    let drop = state.push(NoticeKind::Error, "drop");
    state.dismiss(&drop);
    state.dismiss("unknown");
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, keep);
}
