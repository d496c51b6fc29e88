use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

/// Application-specific error types.
#[derive(Debug, Clone)]
pub enum AppError {
    /// Bad request error (malformed body, query or parameter).
    BadRequest(String),
    /// The submitted answer sheet does not match the question set.
    InvalidAnswers {
        /// Question ids that were not answered.
        missing: Vec<String>,
        /// Answer ids that name no known question.
        unknown: Vec<String>,
    },
    /// Request body exceeds the configured limit.
    PayloadTooLarge(String),
    /// Resource not found error.
    NotFound(String),
    /// Error with context chain for better debugging.
    WithContext {
        /// The underlying source of the error.
        source: Box<AppError>,
        /// Additional context message.
        context: String,
    },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::InvalidAnswers { missing, unknown } => {
                write!(f, "Invalid answers:")?;
                if !missing.is_empty() {
                    write!(f, " missing [{}]", missing.join(", "))?;
                }
                if !unknown.is_empty() {
                    write!(f, " unknown [{}]", unknown.join(", "))?;
                }
                Ok(())
            }
            AppError::PayloadTooLarge(msg) => write!(f, "Payload too large: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::WithContext { source, context } => {
                write!(f, "{}: {}", context, source)
            }
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// HTTP status code the error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) | AppError::InvalidAnswers { .. } => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::WithContext { source, .. } => source.status_code(),
        }
    }
}

impl IntoResponse for AppError {
    /// Converts the error into an HTTP response.
    ///
    /// Maps each error variant to an appropriate HTTP status code and JSON body.
    /// Logs errors appropriately based on their severity.
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            AppError::BadRequest(msg) => {
                tracing::debug!("Rejected request: {}", msg);
                json!({ "error": msg })
            }
            AppError::InvalidAnswers { missing, unknown } => {
                tracing::debug!(
                    "Rejected answer sheet: missing={:?} unknown={:?}",
                    missing,
                    unknown
                );
                json!({
                    "error": "Answer sheet does not match the questionnaire",
                    "missing": missing,
                    "unknown": unknown,
                })
            }
            AppError::PayloadTooLarge(msg) | AppError::NotFound(msg) => json!({ "error": msg }),
            AppError::WithContext { source, context } => {
                tracing::warn!("Error with context: {} -> {}", context, source);
                return source.into_response();
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(rejection.body_text())
        } else {
            AppError::BadRequest(rejection.body_text())
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Extension trait for adding context to errors.
/// Similar to `anyhow::Context` but for our `AppError` type.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T, AppError>;
}

impl<T> ResultExt<T> for Result<T, AppError> {
    fn context(self, context: impl Into<String>) -> Result<T, AppError> {
        self.map_err(|e| AppError::WithContext {
            source: Box::new(e),
            context: context.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_answers_display_lists_ids() {
        let err = AppError::InvalidAnswers {
            missing: vec!["market_drop".to_string()],
            unknown: vec!["favourite_color".to_string()],
        };

        assert_eq!(
            err.to_string(),
            "Invalid answers: missing [market_drop] unknown [favourite_color]"
        );
    }

    #[test]
    fn test_context_keeps_source_status() {
        let result: Result<(), AppError> = Err(AppError::NotFound("gone".to_string()));
        let err = result.context("Loading assessment").unwrap_err();

        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Loading assessment: Not found: gone");
    }


    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::BadRequest("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::PayloadTooLarge("x".into()).status_code(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
    }
}
