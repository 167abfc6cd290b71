//! HTTP route handlers for the delivery service.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health              - Liveness check
//!
//! # Contact form API
//! POST /api/send-email      - Deliver one contact form submission
//! GET  /api/email-preview   - Render an email template with sample data (dev aid)
//! ```

pub mod preview;
pub mod send_email;

use axum::http::{HeaderValue, Method, header};
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Create the API routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/send-email",
            post(send_email::send_email).fallback(send_email::method_not_allowed),
        )
        .route("/email-preview", get(preview::email_preview))
}

/// Assemble the full application router with CORS and trace layers.
pub fn app(state: AppState) -> Router {
    let cors = cors_layer(&state.config().allowed_origin);

    Router::new()
        .route("/health", get(health))
        .nest("/api", api_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS layer restricted to the configured site origin, allowing POST and
/// the Content-Type header (covers the browser preflight).
fn cors_layer(origin: &str) -> CorsLayer {
    // The origin was URL-validated at config load; "null" is the inert
    // fallback if it still is not a legal header value.
    let origin =
        HeaderValue::from_str(origin).unwrap_or_else(|_| HeaderValue::from_static("null"));

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}
