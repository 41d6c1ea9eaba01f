//! Timer-driven occupancy refresh for the grid pages.
//!
//! The loop refreshes, sleeps, then checks its liveness flag, so a page that
//! unmounts mid-request just drops the late result. Mutations reuse
//! `apply_snapshot` to publish the snapshot they already fetched.

#[cfg(test)]
#[path = "poller_test.rs"]
mod poller_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use leptos::prelude::*;

use crate::net::AppGateway;
use crate::net::gateway::Transport;
use crate::state::auth::AuthState;
use crate::state::occupancy::{OccupancyService, OccupancySnapshot, OccupancyState};

/// Publish a snapshot to the page.
pub fn apply_snapshot(occupancy: RwSignal<OccupancyState>, snapshot: OccupancySnapshot) {
    occupancy.try_update(|state| {
        state.snapshot = snapshot;
        state.loaded = true;
    });
}

/// Refresh, hand the result to `publish`, then wait on `sleep` and repeat.
///
/// `sleep` resolves to `false` when no timer is available, which ends the
/// loop after the first round. Rounds stop as soon as `alive` is cleared; a
/// refresh that finishes after that is discarded. Returns the number of
/// published rounds.
pub async fn poll<T, S, F, P>(service: &OccupancyService<T>, alive: &AtomicBool, mut sleep: S, mut publish: P) -> usize
where
    T: Transport,
    S: FnMut() -> F,
    F: Future<Output = bool>,
    P: FnMut(Option<OccupancySnapshot>),
{
    let mut rounds = 0;
    while alive.load(Ordering::Relaxed) {
        let snapshot = service.refresh().await;
        if !alive.load(Ordering::Relaxed) {
            log::debug!("occupancy poller: discarding refresh that finished after cleanup");
            break;
        }
        publish(snapshot);
        rounds += 1;
        if !sleep().await {
            break;
        }
    }
    rounds
}

#[cfg(feature = "csr")]
async fn wait(interval: Duration) -> bool {
    gloo_timers::future::sleep(interval).await;
    true
}

#[cfg(not(feature = "csr"))]
#[allow(clippy::unused_async)]
async fn wait(interval: Duration) -> bool {
    log::debug!("no browser timer; polling every {interval:?} is disabled");
    false
}

/// Refresh now and then every `interval` until the owning page is cleaned up.
/// A refresh that finds the session gone signs the user out locally.
pub fn install_occupancy_poller(
    gateway: AppGateway,
    occupancy: RwSignal<OccupancyState>,
    auth: RwSignal<AuthState>,
    interval: Duration,
) {
    let alive = Arc::new(AtomicBool::new(true));
    let alive_task = alive.clone();
    let service = OccupancyService::new(gateway);
    leptos::task::spawn_local(async move {
        let publish = |snapshot: Option<OccupancySnapshot>| {
            match snapshot {
                Some(snapshot) => apply_snapshot(occupancy, snapshot),
                None => log::debug!("occupancy refresh skipped: no session"),
            }
            if !service.gateway().session().is_authenticated() {
                auth.try_set(AuthState::default());
            }
        };
        let rounds = poll(&service, &alive_task, || wait(interval), publish).await;
        log::debug!("occupancy poller stopped after {rounds} rounds");
    });
    on_cleanup(move || alive.store(false, Ordering::Relaxed));
}
