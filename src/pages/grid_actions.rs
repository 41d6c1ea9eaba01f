//! Gesture handling shared by the staff dashboard and the client page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Turns grid events into plans (`state::drag`), runs them against the
//! occupancy service, and publishes the refreshed snapshot. While a mutation
//! is in flight `busy` is set and new gestures are dropped.

use leptos::prelude::*;

use crate::components::space_grid::DropEvent;
use crate::net::AppGateway;
use crate::state::auth::AuthState;
use crate::state::drag::{self, DragController, DragPayload, DropContext, GestureResult, Plan};
use crate::state::occupancy::{OccupancyService, OccupancyState};
use crate::util::confirm;
use crate::util::notify::Notifier;
use crate::util::poller::apply_snapshot;

/// Space the client chose to reserve: id and number.
pub type ReservationTarget = Option<(i64, String)>;

#[derive(Clone)]
pub struct GridActions {
    pub gateway: AppGateway,
    pub auth: RwSignal<AuthState>,
    pub occupancy: RwSignal<OccupancyState>,
    pub drag: RwSignal<DragController>,
    pub notifier: Notifier,
    pub reserve: RwSignal<ReservationTarget>,
}

impl GridActions {
    pub fn new(gateway: AppGateway, auth: RwSignal<AuthState>, notifier: Notifier) -> Self {
        Self {
            gateway,
            auth,
            occupancy: RwSignal::new(OccupancyState::default()),
            drag: RwSignal::new(DragController::default()),
            notifier,
            reserve: RwSignal::new(None),
        }
    }

    pub fn begin_drag(&self, payload: DragPayload) {
        self.drag.update(|controller| controller.begin(payload));
    }

    pub fn end_drag(&self) {
        self.drag.update(DragController::cancel);
    }

    /// A drop on a card. Uses the tracked payload, falling back to the
    /// `DataTransfer` text when the controller has none.
    pub fn drop(&self, event: &DropEvent) {
        let target = event.target_space_id;
        let plan = if self.drag.with_untracked(DragController::is_dragging) {
            self.plan_with(|context| {
                self.drag
                    .try_update(|controller| controller.drop_on(context, target))
                    .unwrap_or(Plan::Ignore)
            })
        } else {
            let Some(payload) = event.transfer.as_deref().and_then(DragPayload::from_transfer) else {
                return;
            };
            self.plan_with(|context| drag::plan_drop(context, &payload, target))
        };
        self.execute(plan);
    }

    pub fn click(&self, space_id: i64) {
        let plan = self.plan_with(|context| drag::plan_click(context, space_id));
        self.execute(plan);
    }

    fn plan_with(&self, plan: impl FnOnce(&DropContext<'_>) -> Plan) -> Plan {
        let roles = self.auth.with_untracked(AuthState::roles);
        self.occupancy
            .with_untracked(|state| plan(&DropContext::new(&roles, &state.snapshot)))
    }

    fn execute(&self, plan: Plan) {
        match plan {
            Plan::Ignore => {}
            Plan::Reject(message) => self.notifier.error(message),
            Plan::OpenReservation(space_id) => {
                let number = self
                    .occupancy
                    .with_untracked(|state| state.snapshot.space(space_id).map(|space| space.number.clone()));
                self.reserve.set(number.map(|number| (space_id, number)));
            }
            plan @ (Plan::Confirm { .. } | Plan::Dispatch(_)) => self.run(plan),
        }
    }

    fn run(&self, plan: Plan) {
        // Claimed before spawning so a second gesture in the same tick sees it.
        let claimed = self.occupancy.try_update(OccupancyState::begin_mutation).unwrap_or(false);
        if !claimed {
            log::debug!("gesture ignored: a mutation is already in flight");
            return;
        }
        let actions = self.clone();
        leptos::task::spawn_local(async move {
            let service = OccupancyService::new(actions.gateway.clone());
            let result = drag::apply_plan(plan, confirm::ask, &service).await;
            actions.occupancy.try_update(OccupancyState::finish_mutation);
            match result {
                GestureResult::Completed(outcome) => {
                    apply_snapshot(actions.occupancy, outcome.snapshot);
                    actions.notifier.success(outcome.message);
                }
                GestureResult::Failed(err) => actions.notifier.failure(&err),
                GestureResult::Rejected(message) => actions.notifier.error(message),
                GestureResult::Nothing | GestureResult::Declined | GestureResult::OpenReservation(_) => {}
            }
        });
    }
}
