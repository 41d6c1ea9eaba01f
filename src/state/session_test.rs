use super::*;
use serde_json::json;

fn store_with(entries: &[(&str, &str)]) -> SessionStore {
    let storage = MemoryStorage::default();
    for (key, value) in entries {
        storage.set(key, value);
    }
    SessionStore::new(Arc::new(storage))
}

#[test]
fn empty_store_reports_no_session() {
    let session = SessionStore::in_memory();
    assert_eq!(session.token(), None);
    assert_eq!(session.user(), None);
    assert!(session.roles().is_empty());
    assert!(!session.is_authenticated());
}

#[test]
fn set_auth_persists_token_and_full_user_object() {
    let session = SessionStore::in_memory();
    let stored = session.set_auth(&json!({
        "accessToken": "abc.def",
        "username": "guard1",
        "roles": ["ROLE_VIGILANTE"],
        "tokenType": "Bearer"
    }));
    assert!(stored);
    assert_eq!(session.token().as_deref(), Some("abc.def"));
    let user = session.user().unwrap();
    assert_eq!(user.username, "guard1");
    assert_eq!(user.roles, vec![Role::Guard]);
    assert!(session.is_authenticated());
}

#[test]
fn set_auth_accepts_alternate_token_fields() {
    let session = SessionStore::in_memory();
    assert!(session.set_auth(&json!({ "jwt": "j-1", "username": "x", "roles": [] })));
    assert_eq!(session.token().as_deref(), Some("j-1"));
}

#[test]
fn set_auth_without_token_still_stores_user() {
    let session = SessionStore::in_memory();
    assert!(!session.set_auth(&json!({ "username": "x", "roles": ["ROLE_CLIENTE"] })));
    assert_eq!(session.token(), None);
    assert_eq!(session.user().unwrap().roles, vec![Role::Client]);
    assert!(!session.is_authenticated());
}

#[test]
fn malformed_user_reads_as_absent() {
    let session = store_with(&[(TOKEN_KEY, "t"), (USER_KEY, "{not json")]);
    assert_eq!(session.user(), None);
    assert_eq!(session.token().as_deref(), Some("t"));
}

#[test]
fn blank_token_reads_as_absent() {
    let session = store_with(&[(TOKEN_KEY, "   ")]);
    assert_eq!(session.token(), None);
}

#[test]
fn clear_auth_removes_both_keys() {
    let session = SessionStore::in_memory();
    session.set_auth(&json!({ "accessToken": "t", "username": "a", "roles": ["ROLE_ADMIN"] }));
    session.clear_auth();
    assert_eq!(session.token(), None);
    assert_eq!(session.user(), None);
}

#[test]
fn clones_share_storage() {
    let session = SessionStore::in_memory();
    let other = session.clone();
    session.set_auth(&json!({ "accessToken": "t", "username": "a", "roles": [] }));
    assert_eq!(other.token().as_deref(), Some("t"));
    other.clear_auth();
    assert_eq!(session.token(), None);
}
