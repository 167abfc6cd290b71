//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `PORTFOLIO_ALLOWED_ORIGIN` - Site origin permitted by CORS (e.g., <https://www.example.com>)
//! - `PORTFOLIO_SITE_URL` - Public base URL of the portfolio, used for links in emails
//! - `CONTACT_FROM_EMAIL` - Verified sender address for outbound email
//! - `CONTACT_FROM_NAME` - Display name paired with the sender address
//! - `CONTACT_REPLY_TO_EMAIL` - Operator inbox; receives admin notifications and client replies
//!
//! ## Optional
//! - `PORTFOLIO_HOST` - Bind address (default: 127.0.0.1)
//! - `PORTFOLIO_PORT` - Listen port (default: 3000)
//! - `RESEND_API_KEY` - Email provider API key; without it the service still
//!   boots but every send fails closed with a generic configuration error
//! - `RESEND_API_URL` - Email provider base URL (default: <https://api.resend.com>)

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Exact origin allowed by CORS on the API surface
    pub allowed_origin: String,
    /// Email delivery configuration
    pub email: EmailConfig,
}

/// Email delivery configuration.
///
/// Carries the fixed sender identity the templates and send requests are
/// built from, plus the provider credential. Implements `Debug` manually
/// to redact the API key.
#[derive(Clone)]
pub struct EmailConfig {
    /// Provider API key; `None` means sends fail closed
    pub api_key: Option<SecretString>,
    /// Provider base URL (overridable so tests can point at a stub)
    pub api_url: String,
    /// Verified sender address
    pub from_email: String,
    /// Sender display name
    pub from_name: String,
    /// Operator inbox address
    pub reply_to_email: String,
    /// Public base URL of the portfolio site
    pub site_url: String,
}

impl std::fmt::Debug for EmailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailConfig")
            .field(
                "api_key",
                &self.api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("api_url", &self.api_url)
            .field("from_email", &self.from_email)
            .field("from_name", &self.from_name)
            .field("reply_to_email", &self.reply_to_email)
            .field("site_url", &self.site_url)
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    /// A missing `RESEND_API_KEY` is not a load error; it surfaces per
    /// request as a delivery failure instead.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("PORTFOLIO_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("PORTFOLIO_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("PORTFOLIO_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("PORTFOLIO_PORT".to_string(), e.to_string()))?;
        let allowed_origin = get_valid_url("PORTFOLIO_ALLOWED_ORIGIN")?;
        let email = EmailConfig::from_env()?;

        Ok(Self {
            host,
            port,
            allowed_origin,
            email,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl EmailConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: get_optional_env("RESEND_API_KEY").map(SecretString::from),
            api_url: get_env_or_default("RESEND_API_URL", "https://api.resend.com"),
            from_email: get_required_env("CONTACT_FROM_EMAIL")?,
            from_name: get_required_env("CONTACT_FROM_NAME")?,
            reply_to_email: get_required_env("CONTACT_REPLY_TO_EMAIL")?,
            site_url: get_valid_url("PORTFOLIO_SITE_URL")?,
        })
    }

    /// Sender identity in `Display Name <address>` form, as the provider
    /// expects in the `from` field.
    #[must_use]
    pub fn from_mailbox(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get a required environment variable that must parse as an absolute URL.
/// A trailing slash is stripped so values compose cleanly with paths.
fn get_valid_url(key: &str) -> Result<String, ConfigError> {
    let value = get_required_env(key)?;
    Url::parse(&value).map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    Ok(value.trim_end_matches('/').to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_email_config() -> EmailConfig {
        EmailConfig {
            api_key: Some(SecretString::from("re_test_123".to_string())),
            api_url: "https://api.resend.com".to_string(),
            from_email: "send@example.com".to_string(),
            from_name: "Jane Operator".to_string(),
            reply_to_email: "hello@example.com".to_string(),
            site_url: "https://www.example.com".to_string(),
        }
    }

    #[test]
    fn test_from_mailbox_format() {
        assert_eq!(
            test_email_config().from_mailbox(),
            "Jane Operator <send@example.com>"
        );
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let debug = format!("{:?}", test_email_config());
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("re_test_123"));
    }

    #[test]
    fn test_debug_marks_absent_api_key() {
        let config = EmailConfig {
            api_key: None,
            ..test_email_config()
        };
        let debug = format!("{config:?}");
        assert!(debug.contains("None"));
    }
}
