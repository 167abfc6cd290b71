//! Contact form delivery handler.
//!
//! One invocation per form submission. Validation and the configuration
//! check run before any network call; the two gateway sends are sequential
//! and fail-fast, so a failed admin notification suppresses the client
//! acknowledgment entirely.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::Serialize;
use tracing::instrument;

use portfolio_core::{ContactSubmission, DeliveryOutcome, RawSubmission};

use crate::email;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Response body for a fully successful delivery.
#[derive(Debug, Serialize)]
pub struct SendEmailResponse {
    pub success: bool,
    #[serde(flatten)]
    pub outcome: DeliveryOutcome,
    pub message: &'static str,
}

/// Deliver one contact form submission.
///
/// POST /api/send-email
///
/// Sends the admin notification first, then the client acknowledgment.
/// Returns 200 only when both sends succeeded; any failure maps to the
/// JSON error shapes in [`AppError`].
#[instrument(skip(state, body))]
pub async fn send_email(
    State(state): State<AppState>,
    body: std::result::Result<Json<RawSubmission>, JsonRejection>,
) -> Result<Json<SendEmailResponse>> {
    // A body that is absent or not a JSON object carries no usable fields,
    // so it validates the same way as one with empty fields.
    let raw = body.map_or_else(|_| RawSubmission::default(), |Json(raw)| raw);
    let submission = ContactSubmission::parse(&raw)?;

    let mailer = state
        .mailer()
        .ok_or_else(|| AppError::Configuration("RESEND_API_KEY is not set".to_string()))?;
    let config = &state.config().email;

    tracing::info!(name = %submission.name(), email = %submission.email(), "Sending contact emails");

    let admin_request = email::admin_notification(config, &submission)
        .map_err(|e| AppError::Internal(format!("failed to render admin template: {e}")))?;
    let admin_email = mailer.send(&admin_request).await?;
    tracing::info!(id = %admin_email.id, "Admin notification sent");

    let client_request = email::client_acknowledgment(config, &submission)
        .map_err(|e| AppError::Internal(format!("failed to render client template: {e}")))?;
    let client_email = mailer.send(&client_request).await?;
    tracing::info!(id = %client_email.id, "Client acknowledgment sent");

    Ok(Json(SendEmailResponse {
        success: true,
        outcome: DeliveryOutcome {
            admin_email,
            client_email,
        },
        message: "Both emails sent successfully",
    }))
}

/// Method guard for the send-email route.
///
/// Any verb other than POST lands here and gets the JSON 405 body.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
