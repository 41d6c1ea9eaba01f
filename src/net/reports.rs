//! Incident report endpoints: role-scoped listing, creation, photos and review.

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;

use super::error::ApiError;
use super::gateway::{ApiRequest, FormPart, Gateway, Transport, Upload};
use super::types::{NewReport, Report, ReportStatusUpdate, Role};

pub const ALL_REPORTS_PATH: &str = "/api/reportes/todos";
pub const GUARD_REPORTS_PATH: &str = "/api/reportes/mis-reportes";
pub const CLIENT_REPORTS_PATH: &str = "/api/reportes/mis-reportes-cliente";
pub const CREATE_REPORT_PATH: &str = "/api/reportes/crear";

/// Multipart field name the backend collects photos under.
pub const IMAGE_FIELD: &str = "imagenes";

/// Which reports a user gets to see.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportScope {
    /// Every report (admin review).
    All,
    /// Reports the signed-in guard filed.
    Filed,
    /// Reports about the signed-in client's vehicles.
    Concerning,
}

impl ReportScope {
    /// Admin wins over guard, guard over client. `None` for users with no known role.
    pub fn for_roles(roles: &[Role]) -> Option<Self> {
        if roles.contains(&Role::Admin) {
            Some(Self::All)
        } else if roles.contains(&Role::Guard) {
            Some(Self::Filed)
        } else if roles.contains(&Role::Client) {
            Some(Self::Concerning)
        } else {
            None
        }
    }

    pub fn endpoint(self) -> &'static str {
        match self {
            Self::All => ALL_REPORTS_PATH,
            Self::Filed => GUARD_REPORTS_PATH,
            Self::Concerning => CLIENT_REPORTS_PATH,
        }
    }
}

pub(crate) fn images_endpoint(report_id: i64) -> String {
    format!("/api/reportes/{report_id}/imagenes")
}

pub(crate) fn status_endpoint(report_id: i64) -> String {
    format!("/api/reportes/{report_id}/estado")
}

/// # Errors
///
/// Transport failures and non-2xx statuses.
pub async fn list_reports<T: Transport>(gateway: &Gateway<T>, scope: ReportScope) -> Result<Vec<Report>, ApiError> {
    gateway
        .fetch_list(ApiRequest::get(scope.endpoint()), "Could not load reports")
        .await
}

/// # Errors
///
/// Transport failures and server rejections (message verbatim).
pub async fn create_report<T: Transport>(gateway: &Gateway<T>, report: &NewReport) -> Result<Option<String>, ApiError> {
    log::info!("filing report for client {} vehicle {}", report.client_id, report.vehicle_id);
    gateway
        .send_for_message(ApiRequest::post(CREATE_REPORT_PATH).json(report), "Could not create the report")
        .await
}

/// Attach photos to a report, one `imagenes` part per file.
///
/// # Errors
///
/// Transport failures and server rejections (message verbatim).
pub async fn upload_images<T: Transport>(
    gateway: &Gateway<T>,
    report_id: i64,
    uploads: Vec<Upload>,
) -> Result<Option<String>, ApiError> {
    log::info!("uploading {} image(s) to report {report_id}", uploads.len());
    let parts = uploads.into_iter().map(|upload| FormPart::file(IMAGE_FIELD, upload)).collect();
    gateway
        .send_for_message(ApiRequest::post(images_endpoint(report_id)).multipart(parts), "Could not upload the images")
        .await
}

/// # Errors
///
/// Transport failures and server rejections (message verbatim).
pub async fn update_status<T: Transport>(
    gateway: &Gateway<T>,
    report_id: i64,
    update: &ReportStatusUpdate,
) -> Result<Option<String>, ApiError> {
    gateway
        .send_for_message(ApiRequest::put(status_endpoint(report_id)).json(update), "Could not update the report")
        .await
}
