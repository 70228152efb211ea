//! Unified error handling with a consistent JSON error body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::services::matcher::MatchError;

/// JSON body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: String,
}

impl ErrorBody {
    pub fn new(code: &str, message: &str) -> Json<Self> {
        Json(Self {
            error: message.to_string(),
            code: code.to_string(),
        })
    }
}

/// Application error type mapping to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid JSON: {0}")]
    MalformedJson(String),

    #[error("No JSON received")]
    EmptyBody,

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[from] sqlx::Error),
}

impl AppError {
    /// Stable machine-readable tag for the error body.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedJson(_) => "MALFORMED_JSON",
            Self::EmptyBody => "EMPTY_BODY",
            Self::MissingField(_) => "MISSING_FIELD",
            Self::InvalidPattern(_) => "INVALID_PATTERN",
            Self::StorageUnavailable(_) => "STORAGE_UNAVAILABLE",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::StorageUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<MatchError> for AppError {
    fn from(err: MatchError) -> Self {
        match err {
            MatchError::InvalidPattern(msg) => Self::InvalidPattern(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::StorageUnavailable(e) => {
                tracing::error!(error = %e, "Database error");
                "Storage is unavailable".to_string()
            }
            other => {
                tracing::debug!(code = other.code(), error = %other, "Rejected request");
                other.to_string()
            }
        };

        (self.status(), ErrorBody::new(self.code(), &message)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_shape() {
        let body = ErrorBody::new("EMPTY_BODY", "No JSON received");
        let json = serde_json::to_value(&body.0).unwrap();
        assert_eq!(json["error"], "No JSON received");
        assert_eq!(json["code"], "EMPTY_BODY");
    }

    #[test]
    fn client_errors_are_bad_request() {
        assert_eq!(AppError::EmptyBody.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::MissingField("pattern").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::InvalidPattern("unclosed group".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn app_error_display() {
        let err = AppError::MissingField("test_string");
        assert_eq!(err.to_string(), "test_string is required");
        assert_eq!(err.code(), "MISSING_FIELD");
    }

    #[test]
    fn app_error_from_sqlx() {
        let err: AppError = sqlx::Error::PoolClosed.into();
        assert!(matches!(err, AppError::StorageUnavailable(_)));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code(), "STORAGE_UNAVAILABLE");
    }

    #[test]
    fn app_error_from_match_error() {
        let err: AppError = MatchError::InvalidPattern("unclosed group".to_string()).into();
        assert_eq!(err.to_string(), "Invalid pattern: unclosed group");
    }
}
