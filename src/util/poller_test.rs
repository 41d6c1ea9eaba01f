use super::*;
use crate::net::api;
use crate::net::fake_transport::FakeTransport;
use crate::net::gateway::{Gateway, Method};
use crate::state::session::SessionStore;
use futures::executor::block_on;
use serde_json::{Value, json};
use std::cell::Cell;
use std::future::ready;

fn guard_service() -> (OccupancyService<FakeTransport>, FakeTransport) {
    let session = SessionStore::in_memory();
    session.set_auth(&json!({ "accessToken": "tok", "username": "g", "roles": ["ROLE_VIGILANTE"] }));
    let transport = FakeTransport::new();
    (OccupancyService::new(Gateway::new("http://api.test", session, transport.clone())), transport)
}

fn two_spaces() -> Value {
    json!([
        { "id": 1, "numero": "A1", "tipo": "REGULAR", "estado": "DISPONIBLE", "tarifaPorHora": 5.0 },
        { "id": 2, "numero": "A2", "tipo": "REGULAR", "estado": "OCUPADO", "tarifaPorHora": 5.0 },
    ])
}

#[test]
fn refreshes_once_per_tick_until_cleanup() {
    let (service, transport) = guard_service();
    transport.respond(Method::Get, api::SPACES_PATH, 200, &two_spaces());
    transport.respond(Method::Get, api::ACTIVE_REGISTRATIONS_PATH, 200, &json!([]));
    let alive = AtomicBool::new(true);
    let sleeps = Cell::new(0);
    let mut published = Vec::new();

    let rounds = block_on(poll(
        &service,
        &alive,
        || {
            sleeps.set(sleeps.get() + 1);
            if sleeps.get() == 3 {
                alive.store(false, Ordering::Relaxed);
            }
            ready(true)
        },
        |snapshot| published.push(snapshot),
    ));

    assert_eq!(rounds, 3);
    assert_eq!(published.len(), 3);
    assert!(published.iter().all(|snapshot| snapshot.as_ref().is_some_and(|s| s.spaces.len() == 2)));
    assert_eq!(transport.count(Method::Get, api::SPACES_PATH), 3);
    assert_eq!(transport.count(Method::Get, api::ACTIVE_REGISTRATIONS_PATH), 3);
}

#[test]
fn failed_tick_publishes_empty_lists_and_polling_continues() {
    let (service, transport) = guard_service();
    transport.respond(Method::Get, api::SPACES_PATH, 200, &two_spaces());
    transport.fail(Method::Get, api::SPACES_PATH);
    transport.respond(Method::Get, api::SPACES_PATH, 200, &two_spaces());
    transport.respond(Method::Get, api::ACTIVE_REGISTRATIONS_PATH, 200, &json!([]));
    let alive = AtomicBool::new(true);
    let sleeps = Cell::new(0);
    let mut sizes = Vec::new();

    block_on(poll(
        &service,
        &alive,
        || {
            sleeps.set(sleeps.get() + 1);
            ready(sleeps.get() < 3)
        },
        |snapshot| sizes.push(snapshot.map_or(0, |s| s.spaces.len())),
    ));

    assert_eq!(sizes, vec![2, 0, 2]);
}

#[test]
fn cleared_flag_before_start_sends_nothing() {
    let (service, transport) = guard_service();
    let alive = AtomicBool::new(false);
    let rounds = block_on(poll(&service, &alive, || ready(true), |_| {}));
    assert_eq!(rounds, 0);
    assert!(transport.requests().is_empty());
}

#[test]
fn missing_timer_stops_after_first_round() {
    let (service, transport) = guard_service();
    transport.respond(Method::Get, api::SPACES_PATH, 200, &json!([]));
    transport.respond(Method::Get, api::ACTIVE_REGISTRATIONS_PATH, 200, &json!([]));
    let alive = AtomicBool::new(true);
    let rounds = block_on(poll(&service, &alive, || ready(false), |_| {}));
    assert_eq!(rounds, 1);
    assert_eq!(transport.count(Method::Get, api::SPACES_PATH), 1);
}

#[test]
fn signed_out_poll_publishes_none_without_requests() {
    let transport = FakeTransport::new();
    let service = OccupancyService::new(Gateway::new("http://api.test", SessionStore::in_memory(), transport.clone()));
    let alive = AtomicBool::new(true);
    let mut published = Vec::new();
    block_on(poll(&service, &alive, || ready(false), |snapshot| published.push(snapshot)));
    assert_eq!(published, vec![None]);
    assert!(transport.requests().is_empty());
}
