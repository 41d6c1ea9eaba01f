//! Display formatting for rates, timestamps and people.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::net::types::{Report, Reservation};

/// `5` -> `"$5.00/h"`.
pub fn hourly_rate(rate: f64) -> String {
    format!("${rate:.2}/h")
}

/// Render an ISO-8601 timestamp as `YYYY-MM-DD HH:MM`; absent values as `-`.
pub fn timestamp(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return "-".to_owned();
    };
    let (date, time) = raw.split_once('T').unwrap_or((raw, ""));
    let time: String = time.chars().take(5).collect();
    if time.is_empty() {
        date.to_owned()
    } else {
        format!("{date} {time}")
    }
}

/// Join the present, non-blank name parts; `-` when none remain.
pub fn full_name(parts: &[Option<&str>]) -> String {
    let parts: Vec<&str> = parts
        .iter()
        .flatten()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect();
    if parts.is_empty() {
        "-".to_owned()
    } else {
        parts.join(" ")
    }
}

/// Client name on a reservation row.
pub fn reservation_client(reservation: &Reservation) -> String {
    full_name(&[reservation.client_name.as_deref(), reservation.client_last_names.as_deref()])
}

pub fn report_client(report: &Report) -> String {
    full_name(&[report.client_name.as_deref(), report.client_last_names.as_deref()])
}

/// `ABC-123 (Toyota Yaris)`, or just the plate.
pub fn report_vehicle(report: &Report) -> String {
    let plate = report.vehicle_plate.as_deref().map_or("-", str::trim);
    let model = full_name(&[report.vehicle_make.as_deref(), report.vehicle_model.as_deref()]);
    if model == "-" {
        plate.to_owned()
    } else {
        format!("{plate} ({model})")
    }
}

/// Byte count in the largest unit that keeps the number at or above 1.
#[allow(clippy::cast_precision_loss)]
pub fn file_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    let bytes = bytes as f64;
    if bytes < KB {
        format!("{bytes} B")
    } else if bytes < KB * KB {
        format!("{:.1} KB", bytes / KB)
    } else {
        format!("{:.1} MB", bytes / (KB * KB))
    }
}
