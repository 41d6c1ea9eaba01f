//! Dashboard statistics, admin and guard flavours.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use super::error::ApiError;
use super::gateway::{ApiRequest, Gateway, Transport};
use super::types::{AdminStats, GuardStats, Role};

pub const ADMIN_STATS_PATH: &str = "/api/dashboard/estadisticas";
pub const GUARD_STATS_PATH: &str = "/api/dashboard/estadisticas-vigilante";

const STATS_FAILED: &str = "Statistics could not be loaded";

#[derive(Clone, Debug, PartialEq)]
pub enum Statistics {
    Admin(AdminStats),
    Guard(GuardStats),
}

/// Admins get the full breakdown; everyone else the guard summary.
///
/// # Errors
///
/// Transport failures, non-2xx statuses and undecodable bodies.
pub async fn load_statistics<T: Transport>(gateway: &Gateway<T>, roles: &[Role]) -> Result<Statistics, ApiError> {
    if roles.contains(&Role::Admin) {
        let stats = gateway.fetch_json(ApiRequest::get(ADMIN_STATS_PATH), STATS_FAILED).await?;
        Ok(Statistics::Admin(stats))
    } else {
        let stats = gateway.fetch_json(ApiRequest::get(GUARD_STATS_PATH), STATS_FAILED).await?;
        Ok(Statistics::Guard(stats))
    }
}
