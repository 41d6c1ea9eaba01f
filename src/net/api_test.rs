use super::*;
use crate::net::fake_transport::FakeTransport;
use crate::net::gateway::{Method, RequestBody};
use crate::state::session::SessionStore;
use futures::executor::block_on;
use serde_json::json;

fn gateway() -> (Gateway<FakeTransport>, FakeTransport) {
    let transport = FakeTransport::new();
    (Gateway::new("http://api.test", SessionStore::in_memory(), transport.clone()), transport)
}

#[test]
fn spaces_endpoint_depends_on_admin_role() {
    assert_eq!(spaces_endpoint(&[Role::Admin]), "/api/admin/espacios/todos");
    assert_eq!(spaces_endpoint(&[Role::Guard, Role::Admin]), "/api/admin/espacios/todos");
    assert_eq!(spaces_endpoint(&[Role::Guard]), "/api/estacionamiento/espacios");
    assert_eq!(spaces_endpoint(&[]), "/api/estacionamiento/espacios");
}

#[test]
fn login_failure_message_rewords_bad_credentials() {
    assert_eq!(login_failure_message(Some("Bad credentials")), "Incorrect username or password.");
    assert_eq!(login_failure_message(Some("User is disabled")), "User is disabled");
    assert_eq!(login_failure_message(Some("  ")), "Authentication failed. Please try again.");
    assert_eq!(login_failure_message(None), "Authentication failed. Please try again.");
}

#[test]
fn login_posts_credentials_and_returns_raw_result() {
    let (gateway, transport) = gateway();
    transport.respond(
        Method::Post,
        LOGIN_PATH,
        200,
        &json!({ "accessToken": "t", "username": "ana", "roles": ["ROLE_ADMIN"] }),
    );
    let result = block_on(login(&gateway, "ana", "secret")).unwrap();
    assert_eq!(result["accessToken"], json!("t"));
    let sent = transport.last(Method::Post, LOGIN_PATH).unwrap();
    assert_eq!(sent.body, RequestBody::Json(json!({ "username": "ana", "password": "secret" })));
}

#[test]
fn login_rejection_is_reworded() {
    let (gateway, transport) = gateway();
    transport.respond(Method::Post, LOGIN_PATH, 401, &json!({ "message": "Bad credentials" }));
    let err = block_on(login(&gateway, "ana", "wrong")).unwrap_err();
    assert_eq!(err.to_string(), "Incorrect username or password.");
}

#[test]
fn login_transport_failure_is_generic() {
    let (gateway, transport) = gateway();
    transport.fail(Method::Post, LOGIN_PATH);
    let err = block_on(login(&gateway, "ana", "pw")).unwrap_err();
    assert_eq!(err.to_string(), "Authentication failed. Please try again.");
}

#[test]
fn move_client_uses_put() {
    let (gateway, transport) = gateway();
    transport.respond(Method::Put, MOVE_CLIENT_PATH, 200, &json!({ "message": "moved" }));
    let body = MoveRequest { registration_id: 1, new_space_id: 2, reason: "r".to_owned() };
    let message = block_on(move_client(&gateway, &body)).unwrap();
    assert_eq!(message.as_deref(), Some("moved"));
    assert_eq!(transport.count(Method::Put, MOVE_CLIENT_PATH), 1);
}

#[test]
fn register_exit_rejection_falls_back_to_operation_message() {
    let (gateway, transport) = gateway();
    transport.respond(Method::Post, REGISTER_EXIT_PATH, 404, &json!({}));
    let body = ExitRequest { registration_id: 5, notes: String::new() };
    let err = block_on(register_exit(&gateway, &body)).unwrap_err();
    assert_eq!(err.to_string(), EXIT_FAILED);
}
