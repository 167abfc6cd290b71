//! Askama templates for the two transactional emails.
//!
//! User-supplied fields (`name`, `email`, `message`) are HTML-escaped by
//! askama's default filter, so a submitter cannot inject markup into the
//! operator's mail client.

use askama::Template;

use crate::config::EmailConfig;

/// HTML template for the admin notification email.
#[derive(Template)]
#[template(path = "email/admin_notification.html")]
struct AdminNotificationHtml<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
    owner: &'a str,
    site_url: &'a str,
}

/// HTML template for the client acknowledgment email.
#[derive(Template)]
#[template(path = "email/client_acknowledgment.html")]
struct ClientAcknowledgmentHtml<'a> {
    name: &'a str,
    owner: &'a str,
    site_url: &'a str,
}

/// Render the admin notification document.
///
/// Embeds the submitter's name and message as text, and their address both
/// as display text and as a prefilled `mailto:` reply link.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn render_admin_notification(
    config: &EmailConfig,
    name: &str,
    email: &str,
    message: &str,
) -> Result<String, askama::Error> {
    AdminNotificationHtml {
        name,
        email,
        message,
        owner: &config.from_name,
        site_url: &config.site_url,
    }
    .render()
}

/// Render the client acknowledgment document.
///
/// Greets the submitter by name, commits to the 24-48 hour reply window,
/// and links back to the portfolio's projects and certificates sections.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn render_client_acknowledgment(
    config: &EmailConfig,
    name: &str,
) -> Result<String, askama::Error> {
    ClientAcknowledgmentHtml {
        name,
        owner: &config.from_name,
        site_url: &config.site_url,
    }
    .render()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::SecretString;

    use super::*;

    fn test_config() -> EmailConfig {
        EmailConfig {
            api_key: Some(SecretString::from("re_test".to_string())),
            api_url: "https://api.resend.com".to_string(),
            from_email: "send@example.com".to_string(),
            from_name: "Jane Operator".to_string(),
            reply_to_email: "hello@example.com".to_string(),
            site_url: "https://www.example.com".to_string(),
        }
    }

    #[test]
    fn test_admin_notification_contains_submission_fields() {
        let html =
            render_admin_notification(&test_config(), "Ada", "ada@example.com", "Hello there")
                .unwrap();
        assert!(html.contains("Ada"));
        assert!(html.contains("ada@example.com"));
        assert!(html.contains("Hello there"));
        assert!(html.contains("mailto:ada@example.com"));
    }

    #[test]
    fn test_admin_notification_is_deterministic() {
        let config = test_config();
        let first =
            render_admin_notification(&config, "Ada", "ada@example.com", "Hello there").unwrap();
        let second =
            render_admin_notification(&config, "Ada", "ada@example.com", "Hello there").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_admin_notification_escapes_markup() {
        let html = render_admin_notification(
            &test_config(),
            "Ada",
            "ada@example.com",
            "<script>alert(1)</script>",
        )
        .unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_client_acknowledgment_contains_greeting_and_sla() {
        let html = render_client_acknowledgment(&test_config(), "Ada").unwrap();
        assert!(html.contains("Ada"));
        assert!(html.contains("24-48 hours"));
    }

    #[test]
    fn test_client_acknowledgment_links_to_site_sections() {
        let html = render_client_acknowledgment(&test_config(), "Ada").unwrap();
        assert!(html.contains("https://www.example.com/projects"));
        assert!(html.contains("https://www.example.com/certificates"));
    }

    #[test]
    fn test_client_acknowledgment_is_deterministic() {
        let config = test_config();
        assert_eq!(
            render_client_acknowledgment(&config, "Ada").unwrap(),
            render_client_acknowledgment(&config, "Ada").unwrap()
        );
    }
}
