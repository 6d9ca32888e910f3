// API error taxonomy
//
// One type for everything a handler can fail with, so the status mapping
// lives in a single place:
//   validation -> 400, authorization -> 403, missing resource -> 404,
//   storage -> 500 with a generic message (details are logged, not leaked).
// Authentication failures (401) are raised by the AuthUser extractor and
// never reach handler bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use inkpost_common::validation::VALIDATION_ERROR_MESSAGE;
use inkpost_common::ValidationError;

use super::common::ErrorResponse;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed or missing input fields
    #[error("{VALIDATION_ERROR_MESSAGE}")]
    Validation,

    /// Caller is not allowed to perform the operation
    #[error("{0}")]
    Forbidden(String),

    /// Resource identifier does not resolve
    #[error("{0}")]
    NotFound(String),

    /// Underlying datastore operation failed unexpectedly
    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }
}

impl From<ValidationError> for ApiError {
    fn from(_: ValidationError) -> Self {
        Self::Validation
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation => StatusCode::BAD_REQUEST,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(e) => {
                tracing::error!("Internal error: {:#}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::Validation.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::forbidden("no").into_response().status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::not_found("gone").into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal(anyhow::anyhow!("boom"))
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_message_is_generic() {
        let err = ApiError::Internal(anyhow::anyhow!("connection refused to db at 10.0.0.3"));
        assert_eq!(err.to_string(), "internal server error");
    }
}
