//! Typed errors for backend calls, and the mapping from error response
//! bodies to a single human-readable message.
//!
//! The backend reports failures in one of two shapes: `{"message": "..."}`
//! or a field-keyed validation map `{"errors": {"field": ["msg", ...]}}`.
//! Both are reduced to one string here so every caller can surface a
//! failure as a single transient notice.

use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

/// Failure of a backend call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Field-keyed validation failure, already flattened to one message.
    #[error("{message}")]
    Validation { message: String },
    /// Any other non-2xx response.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// Transport-level failure (DNS, connection, decode).
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
}

/// Error body shapes the backend is known to produce.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Option<BTreeMap<String, Vec<String>>>,
}

/// Flatten a field-keyed error map into one message, field order sorted so
/// the result is deterministic.
pub fn flatten_field_errors(errors: &BTreeMap<String, Vec<String>>) -> String {
    errors
        .values()
        .flatten()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Derive the [`ApiError`] for a non-2xx response from its status and body.
pub(crate) fn from_status_body(status: u16, body: &str) -> ApiError {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(errors) = parsed.errors.filter(|e| !e.is_empty()) {
            return ApiError::Validation {
                message: flatten_field_errors(&errors),
            };
        }
        if let Some(message) = parsed.message.filter(|m| !m.is_empty()) {
            return ApiError::Status { status, message };
        }
    }
    ApiError::Status {
        status,
        message: format!("request failed with status {status}"),
    }
}
