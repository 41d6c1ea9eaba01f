use super::*;
use serde_json::json;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert!(state.roles().is_empty());
}

// =============================================================
// Reading the session
// =============================================================

#[test]
fn from_session_reads_stored_user() {
    let session = SessionStore::in_memory();
    session.set_auth(&json!({ "accessToken": "t", "username": "eva", "roles": ["ROLE_VIGILANTE"] }));
    let state = AuthState::from_session(&session);
    assert_eq!(state.user.as_ref().map(|u| u.username.as_str()), Some("eva"));
    assert!(state.has_role(Role::Guard));
    assert!(!state.has_role(Role::Admin));
}

#[test]
fn user_without_token_is_signed_out() {
    let session = SessionStore::in_memory();
    session.set_auth(&json!({ "username": "eva", "roles": ["ROLE_ADMIN"] }));
    assert_eq!(AuthState::from_session(&session).user, None);
}

#[test]
fn cleared_session_is_signed_out() {
    let session = SessionStore::in_memory();
    session.set_auth(&json!({ "accessToken": "t", "username": "eva", "roles": [] }));
    session.clear_auth();
    assert_eq!(AuthState::from_session(&session), AuthState::default());
}
