use super::*;
use crate::net::fake_transport::FakeTransport;
use crate::net::gateway::Method;
use crate::state::session::SessionStore;
use futures::executor::block_on;
use serde_json::json;

#[test]
fn state_change_sends_wire_state_as_query() {
    let transport = FakeTransport::new();
    transport.respond(Method::Put, "/api/admin/espacios/4/estado", 200, &json!({ "message": "ok" }));
    let gateway = Gateway::new("http://api.test", SessionStore::in_memory(), transport.clone());
    block_on(update_space_state(&gateway, 4, SpaceState::Maintenance)).unwrap();
    let sent = transport.last(Method::Put, "/api/admin/espacios/4/estado").unwrap();
    assert_eq!(sent.query, vec![("nuevoEstado".to_owned(), "MANTENIMIENTO".to_owned())]);
}

#[test]
fn delete_targets_space_path() {
    assert_eq!(space_endpoint(12), "/api/admin/espacios/12");
}

#[test]
fn edit_puts_json_to_space_path() {
    let transport = FakeTransport::new();
    transport.respond(Method::Put, "/api/admin/espacios/4", 200, &json!({ "message": "Space updated" }));
    let gateway = Gateway::new("http://api.test", SessionStore::in_memory(), transport.clone());
    let update = SpaceUpdate {
        kind: crate::net::types::SpaceKind::Motorcycle,
        description: Some("Near exit".to_owned()),
        hourly_rate: 2.0,
        state: SpaceState::Available,
    };
    let message = block_on(update_space(&gateway, 4, &update)).unwrap();
    assert_eq!(message.as_deref(), Some("Space updated"));
    let sent = transport.last(Method::Put, "/api/admin/espacios/4").unwrap();
    assert!(sent.query.is_empty());
    assert_eq!(sent.header("Content-Type"), Some("application/json"));
}
