use super::*;
use crate::net::fake_transport::FakeTransport;
use crate::net::gateway::{Method, RequestBody};
use crate::net::types::ReportStatus;
use crate::state::session::SessionStore;
use futures::executor::block_on;
use serde_json::json;

fn gateway() -> (Gateway<FakeTransport>, FakeTransport) {
    let session = SessionStore::in_memory();
    session.set_auth(&json!({ "accessToken": "tok", "username": "g", "roles": ["ROLE_VIGILANTE"] }));
    let transport = FakeTransport::new();
    (Gateway::new("http://api.test", session, transport.clone()), transport)
}

fn photo(name: &str) -> Upload {
    Upload { file_name: name.to_owned(), content_type: "image/jpeg".to_owned(), bytes: vec![0xFF, 0xD8, 0xFF] }
}

#[test]
fn scope_prefers_admin_then_guard_then_client() {
    assert_eq!(ReportScope::for_roles(&[Role::Client, Role::Admin]), Some(ReportScope::All));
    assert_eq!(ReportScope::for_roles(&[Role::Client, Role::Guard]), Some(ReportScope::Filed));
    assert_eq!(ReportScope::for_roles(&[Role::Client]), Some(ReportScope::Concerning));
    assert_eq!(ReportScope::for_roles(&[]), None);
}

#[test]
fn listing_hits_the_scoped_endpoint() {
    let (gateway, transport) = gateway();
    transport.respond(Method::Get, GUARD_REPORTS_PATH, 200, &json!([{ "id": 1, "estado": "PENDIENTE" }]));
    let reports = block_on(list_reports(&gateway, ReportScope::Filed)).unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(transport.count(Method::Get, ALL_REPORTS_PATH), 0);
    assert_eq!(transport.count(Method::Get, GUARD_REPORTS_PATH), 1);
}

#[test]
fn images_go_out_as_one_part_per_file() {
    let (gateway, transport) = gateway();
    transport.respond(Method::Post, "/api/reportes/9/imagenes", 200, &json!({ "message": "2 images stored" }));
    let message = block_on(upload_images(&gateway, 9, vec![photo("a.jpg"), photo("b.jpg")])).unwrap();
    assert_eq!(message.as_deref(), Some("2 images stored"));

    let sent = transport.last(Method::Post, "/api/reportes/9/imagenes").unwrap();
    let RequestBody::Multipart(parts) = &sent.body else {
        panic!("expected a multipart body, got {:?}", sent.body);
    };
    assert_eq!(parts, &vec![FormPart::file(IMAGE_FIELD, photo("a.jpg")), FormPart::file(IMAGE_FIELD, photo("b.jpg"))]);
    assert_eq!(sent.header("Content-Type"), None);
    assert_eq!(sent.header("Authorization"), Some("Bearer tok"));
}

#[test]
fn rejected_upload_carries_server_message() {
    let (gateway, transport) = gateway();
    transport.respond(Method::Post, "/api/reportes/9/imagenes", 413, &json!({ "message": "File too large" }));
    let err = block_on(upload_images(&gateway, 9, vec![photo("big.jpg")])).unwrap_err();
    assert_eq!(err.to_string(), "File too large");
}

#[test]
fn status_update_puts_wire_body() {
    let (gateway, transport) = gateway();
    transport.respond(Method::Put, "/api/reportes/3/estado", 200, &json!({}));
    let update = ReportStatusUpdate { status: ReportStatus::Approved, admin_comment: String::new() };
    block_on(update_status(&gateway, 3, &update)).unwrap();
    let sent = transport.last(Method::Put, "/api/reportes/3/estado").unwrap();
    assert_eq!(sent.body, RequestBody::Json(json!({ "nuevoEstado": "APROBADO", "comentarioAdmin": "" })));
}

#[test]
fn create_posts_ids_and_description() {
    let (gateway, transport) = gateway();
    transport.respond(Method::Post, CREATE_REPORT_PATH, 201, &json!({ "message": "Report created" }));
    let report = NewReport { client_id: 2, vehicle_id: 5, description: "Broken mirror".to_owned() };
    let message = block_on(create_report(&gateway, &report)).unwrap();
    assert_eq!(message.as_deref(), Some("Report created"));
    let sent = transport.last(Method::Post, CREATE_REPORT_PATH).unwrap();
    assert_eq!(sent.body, RequestBody::Json(json!({ "clienteId": 2, "vehiculoId": 5, "descripcion": "Broken mirror" })));
}
