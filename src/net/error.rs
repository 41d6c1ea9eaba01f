//! Error type for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! `Display` is the text shown to the user in a notice, so server messages
//! pass through verbatim and only transport details are paraphrased.

/// Failure of a single API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (offline, CORS, non-browser build).
    #[error("Could not reach the server: {0}")]
    Transport(String),
    /// The server answered 401; the stored session has already been cleared.
    #[error("Your session has expired. Please sign in again.")]
    SessionExpired,
    /// The server refused the operation with a non-2xx status.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// A 2xx body did not match the expected shape.
    #[error("Unexpected response from the server: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
