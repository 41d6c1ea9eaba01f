//! Client configuration captured when the WASM bundle is built.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bundle runs in the browser, so there is no process environment to read
//! at startup. Values are baked in through `option_env!` and fall back to
//! defaults when absent or unparsable.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "http://localhost:8080";
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 8000;
pub const DEFAULT_NOTICE_TTL_MS: u64 = 4000;

/// Runtime settings shared through Leptos context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin prefixed to every relative API path, without a trailing `/`.
    pub api_base: String,
    /// Delay between occupancy refreshes.
    pub poll_interval: Duration,
    /// How long a notice stays on screen.
    pub notice_ttl: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            notice_ttl: Duration::from_millis(DEFAULT_NOTICE_TTL_MS),
        }
    }
}

impl ClientConfig {
    /// Build config from build-time environment variables.
    ///
    /// Optional:
    /// - `PARKSPOT_API_BASE`: default `http://localhost:8080`
    /// - `PARKSPOT_POLL_INTERVAL_MS`: default 8000
    /// - `PARKSPOT_NOTICE_TTL_MS`: default 4000
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("PARKSPOT_API_BASE"),
            option_env!("PARKSPOT_POLL_INTERVAL_MS"),
            option_env!("PARKSPOT_NOTICE_TTL_MS"),
        )
    }

    fn from_values(api_base: Option<&str>, poll_ms: Option<&str>, notice_ms: Option<&str>) -> Self {
        Self {
            api_base: normalize_base(api_base),
            poll_interval: Duration::from_millis(parse_positive(poll_ms, DEFAULT_POLL_INTERVAL_MS)),
            notice_ttl: Duration::from_millis(parse_positive(notice_ms, DEFAULT_NOTICE_TTL_MS)),
        }
    }
}

fn normalize_base(raw: Option<&str>) -> String {
    let trimmed = raw.map(str::trim).unwrap_or_default().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE.to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// Parse a millisecond value; zero would spin the poll loop, so it falls back too.
fn parse_positive(raw: Option<&str>, default: u64) -> u64 {
    match raw.map(str::trim).map(u64::from_str) {
        Some(Ok(value)) if value > 0 => value,
        _ => default,
    }
}
