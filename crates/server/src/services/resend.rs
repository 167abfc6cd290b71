//! Resend API client for transactional email delivery.
//!
//! Thin wrapper over the provider's send endpoint. One outbound HTTP call
//! per [`EmailSendRequest`]; no batching, no retry, no timeout beyond
//! transport defaults.
//!
//! # API Reference
//!
//! - Endpoint: `POST {base_url}/emails`
//! - Authentication: `Authorization: Bearer <key>`
//! - Success: `2xx` with a JSON body containing the message `id`

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use tracing::instrument;

use portfolio_core::{EmailSendRequest, EmailSendResult};

/// Errors that can occur when calling the Email Gateway.
///
/// Every non-`2xx` response maps to [`GatewayError::Api`] regardless of
/// status; the delivery pipeline treats all of them as the same hard
/// failure.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// HTTP transport failed before a response arrived.
    #[error("email gateway request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider returned a non-2xx response.
    #[error("email gateway error: {status} {message}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Provider-supplied error body text.
        message: String,
    },

    /// A 2xx response body did not contain the expected shape.
    #[error("email gateway response could not be parsed: {0}")]
    Parse(String),

    /// The API key could not be used to build a client.
    #[error("invalid email gateway credential")]
    InvalidCredential,
}

/// Client for the Resend transactional email API.
#[derive(Clone)]
pub struct ResendClient {
    inner: Arc<ResendClientInner>,
}

struct ResendClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl ResendClient {
    /// Create a new client with bearer-token authentication.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not a valid header value or the HTTP
    /// client fails to build.
    pub fn new(base_url: &str, api_key: &SecretString) -> Result<Self, GatewayError> {
        let mut headers = HeaderMap::new();

        let auth_value = format!("Bearer {}", api_key.expose_secret());
        let mut auth_value =
            HeaderValue::from_str(&auth_value).map_err(|_| GatewayError::InvalidCredential)?;
        auth_value.set_sensitive(true);
        headers.insert("Authorization", auth_value);

        let client = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            inner: Arc::new(ResendClientInner {
                client,
                base_url: base_url.trim_end_matches('/').to_string(),
            }),
        })
    }

    /// Transmit one email and return the provider-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Api`] carrying the status and body text for
    /// any non-`2xx` response, or a transport/parse error.
    #[instrument(skip(self, request), fields(to = %request.to, subject = %request.subject))]
    pub async fn send(&self, request: &EmailSendRequest) -> Result<EmailSendResult, GatewayError> {
        let url = format!("{}/emails", self.inner.base_url);
        let response = self.inner.client.post(&url).json(request).send().await?;

        let status = response.status();
        if status.is_success() {
            let result: EmailSendResult = response
                .json()
                .await
                .map_err(|e| GatewayError::Parse(e.to_string()))?;
            tracing::debug!(id = %result.id, "Email accepted by gateway");
            return Ok(result);
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        Err(GatewayError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

impl std::fmt::Debug for ResendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResendClient")
            .field("base_url", &self.inner.base_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_client_debug_hides_credential() {
        let key = SecretString::from("re_secret_key".to_string());
        let client = ResendClient::new("https://api.resend.com", &key).unwrap();
        let debug = format!("{client:?}");
        assert!(debug.contains("api.resend.com"));
        assert!(!debug.contains("re_secret_key"));
    }

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let key = SecretString::from("re_secret_key".to_string());
        let client = ResendClient::new("http://127.0.0.1:9/", &key).unwrap();
        assert_eq!(client.inner.base_url, "http://127.0.0.1:9");
    }

    #[test]
    fn test_api_error_display_carries_status_and_body() {
        let err = GatewayError::Api {
            status: 503,
            message: "rate limited".to_string(),
        };
        assert_eq!(err.to_string(), "email gateway error: 503 rate limited");
    }
}
