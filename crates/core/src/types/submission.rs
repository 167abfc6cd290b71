//! Contact form submission.

use serde::Deserialize;

use super::email::{Email, EmailError};

/// Errors that can occur when validating a [`ContactSubmission`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum SubmissionError {
    /// One or more required fields are missing or empty.
    ///
    /// The message enumerates every required field, not just the absent
    /// ones, matching the public API contract.
    #[error("Missing required fields: name, email, message")]
    MissingFields,
    /// The email field is present but not a syntactically valid address.
    #[error("invalid email address: {0}")]
    InvalidEmail(#[from] EmailError),
}

/// One validated contact form submission.
///
/// Lives only for the duration of a single request: the server validates
/// the raw form body into this type, renders and sends both emails from it,
/// and drops it. Nothing here is persisted.
#[derive(Debug, Clone)]
pub struct ContactSubmission {
    name: String,
    email: Email,
    message: String,
}

/// Raw, unvalidated form body as received over the wire.
///
/// All fields default to empty so an absent field and an empty field are
/// indistinguishable, which is exactly how validation treats them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl ContactSubmission {
    /// Validate a raw submission.
    ///
    /// `name` and `message` are trimmed; a field that is absent or
    /// whitespace-only counts as missing. Missing fields are reported
    /// before email syntax, so an empty email yields
    /// [`SubmissionError::MissingFields`] rather than a parse error.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError::MissingFields`] if any field is empty, or
    /// [`SubmissionError::InvalidEmail`] if the email does not parse.
    pub fn parse(raw: &RawSubmission) -> Result<Self, SubmissionError> {
        let name = raw.name.trim();
        let email = raw.email.trim();
        let message = raw.message.trim();

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(SubmissionError::MissingFields);
        }

        Ok(Self {
            name: name.to_owned(),
            email: Email::parse(email)?,
            message: message.to_owned(),
        })
    }

    /// The submitter's name, trimmed.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The submitter's email address.
    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }

    /// The message body, trimmed.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
