use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Result type for quote operations
pub type QuoteResult<T> = Result<T, QuoteError>;

/// Errors that can occur in the quotes domain
#[derive(Debug, Error)]
pub enum QuoteError {
    /// Malformed or missing request data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The machine catalog is empty, no quote can be produced
    #[error("No machines available in the catalog")]
    EmptyCatalog,

    /// Invalid reference data (catalog file, machine cost-model fields)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The AI estimation response was missing or malformed. The detail is
    /// for logs only and never reaches the client.
    #[error("Estimate error: {0}")]
    Estimate(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for QuoteError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            QuoteError::InvalidInput(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            QuoteError::EmptyCatalog => (StatusCode::BAD_REQUEST, self.to_string()),
            QuoteError::Configuration(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Configuration error".to_string(),
            ),
            QuoteError::Estimate(_) => (
                StatusCode::BAD_GATEWAY,
                "Failed to obtain an estimate. Check that the AI service is configured correctly"
                    .to_string(),
            ),
            QuoteError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal error".to_string(),
            ),
        };

        let body = Json(json!({
            "error": message,
            "code": status.as_u16()
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_error_never_leaks_details() {
        let err = QuoteError::Estimate("candidates[0] missing field `baseCost`".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_empty_catalog_is_a_client_error() {
        let response = QuoteError::EmptyCatalog.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
