//! Unified dashboard error types.

use thiserror::Error;

use crate::shared::ErrorMessage;

/// Top-level dashboard error.
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Request error: {0}")]
    Request(#[from] RequestError),

    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Failures reported by the network collaborator.
///
/// Slices do not distinguish between these; they only keep the rendered
/// message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Decode error: {0}")]
    Decode(String),
}

/// Wire → domain validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Invalid decimal in {field}: {value}")]
    InvalidDecimal { field: &'static str, value: String },

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(i64),
}

/// The message a slice stores for a failed request.
impl From<&DashboardError> for ErrorMessage {
    fn from(error: &DashboardError) -> Self {
        match error {
            DashboardError::Request(e) => ErrorMessage::from_error(e),
            DashboardError::Conversion(e) => {
                ErrorMessage::new(format!("Invalid server response: {}", e))
            }
            other => ErrorMessage::from_error(other),
        }
    }
}
