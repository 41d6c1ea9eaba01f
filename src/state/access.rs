//! Client-side role gates.
//!
//! SYSTEM CONTEXT
//! ==============
//! These checks only spare the user a round trip the server would refuse.
//! The backend re-validates every call; nothing here is a security boundary.

#[cfg(test)]
#[path = "access_test.rs"]
mod access_test;

use crate::net::types::{Role, SpaceState};

/// Something a user may try to do in the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Drop a client's vehicle onto a space (fresh entry).
    AssignVehicle,
    /// Drag an occupied space onto another space.
    ReassignSpace,
    /// Click an occupied space to check its vehicle out.
    RegisterExit,
    /// Book an available space.
    Reserve,
    /// See who occupies each space.
    ViewOccupancy,
    /// Create, edit and delete spaces.
    ManageSpaces,
    /// Approve or reject reservations.
    ManageReservations,
    /// See incident reports (each role sees its own scope).
    ViewReports,
    /// File a report and attach photos to it.
    FileReports,
    /// Approve or cancel reports.
    ReviewReports,
    /// List, search and edit clients.
    ManageClients,
    /// List, search, edit and deactivate guards.
    ManageGuards,
    /// Read the dashboard statistics.
    ViewStatistics,
    /// Read and edit one's own profile.
    EditProfile,
}

/// Why a gate said no.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Denial {
    /// None of the user's roles may perform the action.
    Role,
    /// The role is fine but the target space is in the wrong state.
    TargetState,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(Denial),
}

impl Decision {
    pub fn is_allowed(self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Role that may perform `action`, and the target states it requires (if any).
fn rule(action: Action) -> (&'static [Role], Option<&'static [SpaceState]>) {
    const ADMIN: &[Role] = &[Role::Admin];
    const GUARD: &[Role] = &[Role::Guard];
    const CLIENT: &[Role] = &[Role::Client];
    const STAFF: &[Role] = &[Role::Admin, Role::Guard];
    const ANYONE: &[Role] = &[Role::Admin, Role::Guard, Role::Client];
    const ARRIVAL: &[SpaceState] = &[SpaceState::Available, SpaceState::Reserved];
    const OCCUPIED: &[SpaceState] = &[SpaceState::Occupied];
    const AVAILABLE: &[SpaceState] = &[SpaceState::Available];
    match action {
        Action::AssignVehicle => (GUARD, Some(ARRIVAL)),
        Action::ReassignSpace => (ADMIN, Some(ARRIVAL)),
        Action::RegisterExit => (GUARD, Some(OCCUPIED)),
        Action::Reserve => (CLIENT, Some(AVAILABLE)),
        Action::ViewOccupancy | Action::ManageClients | Action::ViewStatistics => (STAFF, None),
        Action::ManageSpaces | Action::ManageReservations | Action::ReviewReports | Action::ManageGuards => (ADMIN, None),
        Action::FileReports => (GUARD, None),
        Action::ViewReports | Action::EditProfile => (ANYONE, None),
    }
}

/// Pure permission check. Role is checked before target state, so a user who
/// may never perform the action is told so regardless of the target.
pub fn check(roles: &[Role], action: Action, target: Option<SpaceState>) -> Decision {
    let (allowed_roles, required_states) = rule(action);
    if !roles.iter().any(|role| allowed_roles.contains(role)) {
        return Decision::Deny(Denial::Role);
    }
    match required_states {
        None => Decision::Allow,
        Some(states) if target.is_some_and(|state| states.contains(&state)) => Decision::Allow,
        Some(_) => Decision::Deny(Denial::TargetState),
    }
}

/// Roles that may perform `action`. Page guards use this as their requirement.
pub fn allowed_roles(action: Action) -> &'static [Role] {
    rule(action).0
}

/// Shorthand for role-only gates such as page visibility.
pub fn can(roles: &[Role], action: Action) -> bool {
    let allowed = allowed_roles(action);
    roles.iter().any(|role| allowed.contains(role))
}
