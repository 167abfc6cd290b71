//! Email rendering and assembly.
//!
//! Pure functions only: rendering takes submission data plus the configured
//! sender identity and returns a complete HTML document. Deterministic by
//! construction (no clocks, no randomness), so identical inputs always
//! produce identical output. The assembly functions wire the rendered HTML
//! into full [`EmailSendRequest`]s with the from/to/reply-to routing the
//! delivery contract fixes:
//!
//! - Admin notification: to the operator, reply-to the submitter (a mail
//!   client "Reply" goes straight back to them).
//! - Client acknowledgment: to the submitter, reply-to the operator.

mod templates;

pub use templates::{render_admin_notification, render_client_acknowledgment};

use portfolio_core::{ContactSubmission, EmailSendRequest};

use crate::config::EmailConfig;

/// Fixed subject line of the client acknowledgment.
pub const CLIENT_ACK_SUBJECT: &str = "Thank you for your message - I'll be in touch soon!";

/// Build the admin notification email for one submission.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn admin_notification(
    config: &EmailConfig,
    submission: &ContactSubmission,
) -> Result<EmailSendRequest, askama::Error> {
    let html = render_admin_notification(
        config,
        submission.name(),
        submission.email().as_str(),
        submission.message(),
    )?;

    Ok(EmailSendRequest {
        from: config.from_mailbox(),
        to: config.reply_to_email.clone(),
        subject: format!("New Message from {}", submission.name()),
        html,
        reply_to: submission.email().to_string(),
    })
}

/// Build the client acknowledgment email for one submission.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn client_acknowledgment(
    config: &EmailConfig,
    submission: &ContactSubmission,
) -> Result<EmailSendRequest, askama::Error> {
    let html = render_client_acknowledgment(config, submission.name())?;

    Ok(EmailSendRequest {
        from: config.from_mailbox(),
        to: submission.email().to_string(),
        subject: CLIENT_ACK_SUBJECT.to_string(),
        html,
        reply_to: config.reply_to_email.clone(),
    })
}
