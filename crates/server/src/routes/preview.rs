//! Email template preview route.
//!
//! Development aid: renders either email template with fixed sample data so
//! the documents can be eyeballed in a browser without sending anything.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;
use serde_json::json;

use crate::email::{render_admin_notification, render_client_acknowledgment};
use crate::error::{AppError, Result};
use crate::state::AppState;

const SAMPLE_NAME: &str = "Ada Lovelace";
const SAMPLE_EMAIL: &str = "ada@example.com";
const SAMPLE_MESSAGE: &str = "Interested in your services";

/// Query parameters for the preview route.
#[derive(Debug, Deserialize)]
pub struct PreviewParams {
    #[serde(default)]
    pub template: String,
}

/// Render an email template with sample data.
///
/// GET /api/email-preview?template=admin|client
pub async fn email_preview(
    State(state): State<AppState>,
    Query(params): Query<PreviewParams>,
) -> Result<Response> {
    let config = &state.config().email;

    let html = match params.template.as_str() {
        "admin" => render_admin_notification(config, SAMPLE_NAME, SAMPLE_EMAIL, SAMPLE_MESSAGE),
        "client" => render_client_acknowledgment(config, SAMPLE_NAME),
        other => {
            return Ok((
                StatusCode::NOT_FOUND,
                Json(json!({ "error": format!("Unknown template: {other:?}") })),
            )
                .into_response());
        }
    }
    .map_err(|e| AppError::Internal(format!("failed to render template: {e}")))?;

    Ok(Html(html).into_response())
}
