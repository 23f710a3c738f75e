pub mod handlers;

use serde::Serialize;

/// Standard error response structure.
///
/// Every error body carries at least an `error` identifier and a
/// human-readable `message`; `details` holds structured extras such as
/// per-field validation errors.
#[derive(Serialize)]
pub struct ErrorResponse {
    /// Machine-readable error identifier
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
