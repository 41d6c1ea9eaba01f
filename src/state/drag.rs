//! Drag/drop and click gestures on the space grid.
//!
//! DESIGN
//! ======
//! A gesture is turned into a `Plan` by pure functions over the current
//! snapshot and roles. Only `apply_plan` touches the network, and only for a
//! plan that survived every gate (and the user's confirmation, when one is
//! required). A rejected gesture therefore never issues a request.
//!
//! Only one payload exists at a time; starting a new drag replaces it.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use serde::{Deserialize, Serialize};

use crate::net::error::ApiError;
use crate::net::gateway::Transport;
use crate::net::types::{EntryRequest, ExitRequest, MoveRequest, ParkingSpace, Role, SpaceState};
use crate::state::access::{self, Action, Decision, Denial};
use crate::state::occupancy::{MutationOutcome, OccupancyService, OccupancySnapshot, occupant_label};

/// What is being dragged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum DragPayload {
    /// A client's vehicle picked from the directory panel, not yet parked.
    #[serde(rename = "vehiculo")]
    VehicleAssignment {
        #[serde(rename = "clienteId")]
        client_id: i64,
        #[serde(rename = "vehiculoId")]
        vehicle_id: i64,
    },
    /// An occupied space whose vehicle should move elsewhere.
    #[serde(rename = "espacio-ocupado")]
    SpaceReassignment {
        #[serde(rename = "espacioOrigenId")]
        origin_space_id: i64,
    },
}

impl DragPayload {
    /// Text form stored in the browser's `DataTransfer`.
    pub fn to_transfer(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn from_transfer(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragPayload),
}

/// Tracks the single in-flight drag gesture.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn begin(&mut self, payload: DragPayload) {
        self.state = DragState::Dragging(payload);
    }

    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    /// End the gesture, returning its payload if one was in flight.
    pub fn take(&mut self) -> Option<DragPayload> {
        match std::mem::take(&mut self.state) {
            DragState::Idle => None,
            DragState::Dragging(payload) => Some(payload),
        }
    }

    /// End the gesture on `target_space_id` and plan what to do. Dropping while
    /// idle (a stray drop from outside the page) is ignored.
    pub fn drop_on(&mut self, context: &DropContext<'_>, target_space_id: i64) -> Plan {
        self.take()
            .map_or(Plan::Ignore, |payload| plan_drop(context, &payload, target_space_id))
    }
}

/// A server call a gesture resolved to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mutation {
    Entry(EntryRequest),
    Exit(ExitRequest),
    Move(MoveRequest),
}

/// Outcome of interpreting a gesture, before any network traffic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Plan {
    /// Nothing to do (vanished target, idle click).
    Ignore,
    /// Refused client-side; show the message as a notice.
    Reject(String),
    /// Ask the user, then run `mutation` if they agree.
    Confirm { prompt: String, mutation: Mutation },
    /// Run immediately.
    Dispatch(Mutation),
    /// Open the reservation form for this space.
    OpenReservation(i64),
}

/// Read-only inputs gestures are judged against.
#[derive(Clone, Copy, Debug)]
pub struct DropContext<'a> {
    pub roles: &'a [Role],
    pub snapshot: &'a OccupancySnapshot,
}

impl<'a> DropContext<'a> {
    pub fn new(roles: &'a [Role], snapshot: &'a OccupancySnapshot) -> Self {
        Self { roles, snapshot }
    }
}

fn unavailable(space: &ParkingSpace) -> Plan {
    Plan::Reject(format!("Space {} is not available ({}).", space.number, space.state.label()))
}

/// Interpret dropping `payload` onto `target_space_id`.
pub fn plan_drop(context: &DropContext<'_>, payload: &DragPayload, target_space_id: i64) -> Plan {
    let Some(target) = context.snapshot.space(target_space_id) else {
        return Plan::Ignore;
    };
    match payload {
        DragPayload::VehicleAssignment { client_id, vehicle_id } => {
            match access::check(context.roles, Action::AssignVehicle, Some(target.state)) {
                Decision::Deny(Denial::Role) => {
                    Plan::Reject("Only guards can assign vehicles to spaces.".to_owned())
                }
                Decision::Deny(Denial::TargetState) => unavailable(target),
                Decision::Allow => Plan::Dispatch(Mutation::Entry(EntryRequest {
                    client_id: *client_id,
                    vehicle_id: *vehicle_id,
                    space_id: target.id,
                    notes: format!("Assigned by drag and drop to space {}", target.number),
                })),
            }
        }
        DragPayload::SpaceReassignment { origin_space_id } => {
            // A drop back onto the origin lands on an occupied space, so the
            // state gate turns it into a rejection like any other.
            match access::check(context.roles, Action::ReassignSpace, Some(target.state)) {
                Decision::Deny(Denial::Role) => {
                    Plan::Reject("Only administrators can move parked vehicles.".to_owned())
                }
                Decision::Deny(Denial::TargetState) => unavailable(target),
                Decision::Allow => plan_move(context.snapshot, *origin_space_id, target),
            }
        }
    }
}

fn plan_move(snapshot: &OccupancySnapshot, origin_space_id: i64, target: &ParkingSpace) -> Plan {
    let origin = snapshot.space(origin_space_id);
    let registration = origin.and_then(|space| snapshot.registration_for(&space.number));
    let (Some(origin), Some(registration)) = (origin, registration) else {
        return Plan::Reject("No active registration to reassign.".to_owned());
    };
    Plan::Confirm {
        prompt: format!("Move the vehicle in space {} to space {}?", origin.number, target.number),
        mutation: Mutation::Move(MoveRequest {
            registration_id: registration.id,
            new_space_id: target.id,
            reason: format!("Moved from space {} to space {}", origin.number, target.number),
        }),
    }
}

/// Interpret a click on `space_id`.
pub fn plan_click(context: &DropContext<'_>, space_id: i64) -> Plan {
    let Some(space) = context.snapshot.space(space_id) else {
        return Plan::Ignore;
    };
    match space.state {
        SpaceState::Occupied => {
            if !access::check(context.roles, Action::RegisterExit, Some(space.state)).is_allowed() {
                return Plan::Reject("Only guards can register exits.".to_owned());
            }
            let Some(registration) = context.snapshot.registration_for(&space.number) else {
                return Plan::Reject(format!("No active registration found for space {}.", space.number));
            };
            Plan::Confirm {
                prompt: format!(
                    "Register the exit of {} from space {}?",
                    occupant_label(registration),
                    space.number
                ),
                mutation: Mutation::Exit(ExitRequest {
                    registration_id: registration.id,
                    notes: format!("Exit registered from space {}", space.number),
                }),
            }
        }
        state if access::check(context.roles, Action::Reserve, Some(state)).is_allowed() => {
            Plan::OpenReservation(space.id)
        }
        _ => Plan::Ignore,
    }
}

/// What the page should show after a plan ran.
#[derive(Debug)]
pub enum GestureResult {
    Nothing,
    Rejected(String),
    /// The user declined the confirmation.
    Declined,
    OpenReservation(i64),
    Completed(MutationOutcome),
    Failed(ApiError),
}

async fn run<T: Transport>(service: &OccupancyService<T>, mutation: &Mutation) -> Result<MutationOutcome, ApiError> {
    match mutation {
        Mutation::Entry(request) => service.register_entry(request).await,
        Mutation::Exit(request) => service.register_exit(request).await,
        Mutation::Move(request) => service.move_client(request).await,
    }
}

/// Carry out `plan`, asking `confirm` first when the plan requires it.
pub async fn apply_plan<T, F>(plan: Plan, confirm: F, service: &OccupancyService<T>) -> GestureResult
where
    T: Transport,
    F: FnOnce(&str) -> bool,
{
    let mutation = match plan {
        Plan::Ignore => return GestureResult::Nothing,
        Plan::Reject(message) => return GestureResult::Rejected(message),
        Plan::OpenReservation(space_id) => return GestureResult::OpenReservation(space_id),
        Plan::Confirm { prompt, mutation } => {
            if !confirm(&prompt) {
                return GestureResult::Declined;
            }
            mutation
        }
        Plan::Dispatch(mutation) => mutation,
    };
    match run(service, &mutation).await {
        Ok(outcome) => GestureResult::Completed(outcome),
        Err(err) => {
            log::warn!("gesture mutation failed: {err}");
            GestureResult::Failed(err)
        }
    }
}
