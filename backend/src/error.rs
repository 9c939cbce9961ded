//! Error handling for the Smart Irrigation Assistant
//!
//! Every error leaves the API as `{ "error": { "code", "message", "field"? } }`.
//! JSON body rejections go through `handlers::AppJson` to get the same shape.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::EstimateError;
use std::time::Duration;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {message}")]
    Validation { field: String, message: String },

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Date out of range: {0}")]
    DateOutOfRange(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    // External service errors
    #[error("AI service error: {0}")]
    AiServiceError(String),

    #[error("AI service timed out after {0:?}")]
    AiServiceTimeout(Duration),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<EstimateError> for AppError {
    fn from(err: EstimateError) -> Self {
        match err {
            EstimateError::InvalidDate { .. } => AppError::InvalidDate(err.to_string()),
            EstimateError::DateOutOfRange { .. } => AppError::DateOutOfRange(err.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation {
            field: "body".to_string(),
            message: rejection.body_text(),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by_key(|(field, _)| *field);

        match fields.into_iter().next() {
            Some((field, field_errors)) => {
                let message = field_errors
                    .iter()
                    .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                AppError::Validation {
                    field: field.to_string(),
                    message,
                }
            }
            None => AppError::Validation {
                field: "request".to_string(),
                message: errors.to_string(),
            },
        }
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl AppError {
    fn status_and_detail(&self) -> (StatusCode, ErrorDetail) {
        match self {
            AppError::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message: message.clone(),
                    field: Some(field.clone()),
                },
            ),
            AppError::InvalidDate(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "INVALID_DATE".to_string(),
                    message: msg.clone(),
                    field: Some("planting_date".to_string()),
                },
            ),
            AppError::DateOutOfRange(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorDetail {
                    code: "DATE_OUT_OF_RANGE".to_string(),
                    message: msg.clone(),
                    field: Some("planting_date".to_string()),
                },
            ),
            AppError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "NOT_FOUND".to_string(),
                    message: format!("{} not found", resource),
                    field: None,
                },
            ),
            AppError::AiServiceError(msg) => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "AI_SERVICE_ERROR".to_string(),
                    message: format!("AI service error: {}", msg),
                    field: None,
                },
            ),
            AppError::AiServiceTimeout(timeout) => (
                StatusCode::GATEWAY_TIMEOUT,
                ErrorDetail {
                    code: "AI_SERVICE_TIMEOUT".to_string(),
                    message: format!("AI service did not answer within {:?}", timeout),
                    field: None,
                },
            ),
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "CONFIGURATION_ERROR".to_string(),
                    message: format!("Configuration error: {}", msg),
                    field: None,
                },
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = self.status_and_detail();

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_errors_map_to_bad_request() {
        let err: AppError = EstimateError::InvalidDate {
            input: "2025-13-01".to_string(),
            reason: "input is out of range".to_string(),
        }
        .into();
        let (status, detail) = err.status_and_detail();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(detail.code, "INVALID_DATE");
        assert!(detail.message.contains("2025-13-01"));
    }

    #[test]
    fn test_ai_errors_map_to_gateway_statuses() {
        let (status, _) = AppError::AiServiceError("quota".to_string()).status_and_detail();
        assert_eq!(status, StatusCode::BAD_GATEWAY);

        let (status, detail) = AppError::AiServiceTimeout(Duration::from_secs(60)).status_and_detail();
        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(detail.code, "AI_SERVICE_TIMEOUT");
        assert_eq!(detail.message, "AI service did not answer within 60s");
    }

    #[test]
    fn test_not_found_message() {
        let (status, detail) = AppError::NotFound("Chat session".to_string()).status_and_detail();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(detail.message, "Chat session not found");
        assert!(detail.field.is_none());
    }
}
