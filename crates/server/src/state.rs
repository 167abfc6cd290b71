//! Application state shared across handlers.

use std::sync::Arc;

use secrecy::SecretString;

use crate::config::ServerConfig;
use crate::services::{GatewayError, ResendClient};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Read-only after startup: no handler ever
/// mutates configuration or the gateway client.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    mailer: Option<ResendClient>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// The gateway client is only constructed when a provider API key is
    /// configured; otherwise `mailer()` stays `None` and every send fails
    /// closed at the handler.
    ///
    /// # Errors
    ///
    /// Returns an error if a key is present but the client cannot be built
    /// from it.
    pub fn new(config: ServerConfig) -> Result<Self, GatewayError> {
        let mailer = config
            .email
            .api_key
            .as_ref()
            .map(|key: &SecretString| ResendClient::new(&config.email.api_url, key))
            .transpose()?;

        if mailer.is_none() {
            tracing::warn!("RESEND_API_KEY not set; contact form sends will fail closed");
        }

        Ok(Self {
            inner: Arc::new(AppStateInner { config, mailer }),
        })
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get the Email Gateway client, if configured.
    #[must_use]
    pub fn mailer(&self) -> Option<&ResendClient> {
        self.inner.mailer.as_ref()
    }
}
