//! Unified error types for the MantleFlow API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic errors
//! - `PredictionError`: AI prediction service client errors
//! - `AppError`: Application layer errors (wraps the others for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// AI prediction service client errors
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("AI server unreachable at {url}")]
    Unreachable { url: String },

    #[error("AI prediction failed: {detail}")]
    Upstream { detail: String },

    #[error("AI server error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Prediction(#[from] PredictionError),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Domain(DomainError::NotFound(msg)) => {
                (StatusCode::NOT_FOUND, msg.clone(), None)
            }
            AppError::Domain(DomainError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, msg.clone(), None)
            }
            AppError::Domain(DomainError::Conflict(msg)) => {
                (StatusCode::CONFLICT, msg.clone(), None)
            }
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
            AppError::Prediction(e) => {
                tracing::error!("Prediction error: {}", e);
                match e {
                    PredictionError::Unreachable { url } => (
                        StatusCode::SERVICE_UNAVAILABLE,
                        "AI service unavailable".to_string(),
                        Some(format!("Could not connect to AI server at {}", url)),
                    ),
                    PredictionError::Upstream { detail } => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "AI prediction failed".to_string(),
                        Some(detail.clone()),
                    ),
                    PredictionError::Api { status, message } => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal server error".to_string(),
                        Some(format!("AI server returned {}: {}", status, message)),
                    ),
                    PredictionError::Request(e) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal server error".to_string(),
                        Some(e.to_string()),
                    ),
                    PredictionError::Deserialization(msg) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal server error".to_string(),
                        Some(msg.clone()),
                    ),
                }
            }
        };

        let body = Json(ErrorResponse { error, details });

        (status, body).into_response()
    }
}
