//! Portfolio delivery service - contact form backend.
//!
//! This binary serves the thin backend behind the portfolio site's contact
//! form: it validates submissions, renders the two transactional emails,
//! and dispatches them through the Resend API.
//!
//! # Architecture
//!
//! - Axum web framework, JSON API only
//! - Askama templates for the email HTML documents
//! - Resend HTTP API for actual transmission
//! - No database: message archival happens in the browser client,
//!   independently of this service

#![cfg_attr(not(test), forbid(unsafe_code))]

use portfolio_server::config::ServerConfig;
use portfolio_server::state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "portfolio_server=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment
    let config = ServerConfig::from_env().expect("Failed to load configuration");

    // Build application state (gateway client, if configured)
    let state = AppState::new(config.clone()).expect("Failed to initialize application state");

    // Build router
    let app = portfolio_server::app(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("delivery service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
