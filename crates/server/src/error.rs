//! Unified error handling for the delivery service.
//!
//! Provides a single `AppError` type mapped to the JSON error shapes of the
//! public API. Every failure a handler can hit is converted here, so the
//! transport layer never sees an unhandled error or a non-JSON body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use portfolio_core::SubmissionError;

use crate::services::GatewayError;

/// Application-level error type for the delivery service.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request used a verb other than POST.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Submission failed validation; never reaches the gateway.
    #[error("{0}")]
    Validation(#[from] SubmissionError),

    /// The provider credential is absent. The payload carries the specific
    /// cause for logging; the caller only ever sees a generic message.
    #[error("email service not configured: {0}")]
    Configuration(String),

    /// The Email Gateway rejected or failed a send.
    #[error("{0}")]
    Gateway(#[from] GatewayError),

    /// Anything else that escapes the handler body.
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            Self::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                Json(json!({ "error": "Method not allowed" })),
            )
                .into_response(),

            Self::Validation(err) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": err.to_string() })),
            )
                .into_response(),

            // Log the specific cause server-side; the caller gets a fixed
            // generic message so credential state is never disclosed.
            Self::Configuration(cause) => {
                tracing::error!(cause = %cause, "Email service not configured");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Email service not configured" })),
                )
                    .into_response()
            }

            Self::Gateway(_) | Self::Internal(_) => {
                tracing::error!(error = %self, "Delivery failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": self.to_string(), "success": false })),
                )
                    .into_response()
            }
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
