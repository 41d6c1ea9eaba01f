//! Report filing, photo selection and admin review forms.
//!
//! The filing form mirrors its two dependent pickers: choosing another
//! client drops the vehicle, because a vehicle only makes sense for the
//! client it belongs to.

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;

use crate::net::gateway::Upload;
use crate::net::types::{NewReport, Report, ReportStatus, ReportStatusUpdate};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportForm {
    pub client_id: Option<i64>,
    pub vehicle_id: Option<i64>,
    pub description: String,
}

impl ReportForm {
    /// Pick a client. Returns whether the choice changed (and vehicles must be reloaded).
    pub fn choose_client(&mut self, client_id: Option<i64>) -> bool {
        if self.client_id == client_id {
            return false;
        }
        self.client_id = client_id;
        self.vehicle_id = None;
        true
    }

    /// # Errors
    ///
    /// A user-facing message naming the first missing field.
    pub fn validate(&self) -> Result<NewReport, &'static str> {
        let Some(client_id) = self.client_id else {
            return Err("Choose a client.");
        };
        let Some(vehicle_id) = self.vehicle_id else {
            return Err("Choose one of the client's vehicles.");
        };
        let description = self.description.trim();
        if description.is_empty() {
            return Err("Describe the incident.");
        }
        Ok(NewReport { client_id, vehicle_id, description: description.to_owned() })
    }
}

/// At least one file must be picked before uploading.
///
/// # Errors
///
/// A user-facing message when nothing is selected.
pub fn check_uploads(uploads: &[Upload]) -> Result<(), &'static str> {
    if uploads.is_empty() {
        Err("Select at least one image.")
    } else {
        Ok(())
    }
}

/// Admin decision on a report, prefilled from its current values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReviewForm {
    pub status: ReportStatus,
    pub comment: String,
}

impl ReviewForm {
    pub fn for_report(report: &Report) -> Self {
        let status = if report.status == ReportStatus::Unknown { ReportStatus::Pending } else { report.status };
        Self { status, comment: report.admin_comment.clone().unwrap_or_default() }
    }

    pub fn to_update(&self) -> ReportStatusUpdate {
        ReportStatusUpdate { status: self.status, admin_comment: self.comment.trim().to_owned() }
    }
}
