//! Core types for the portfolio backend.
//!
//! This module provides type-safe wrappers for the contact-message
//! delivery domain.

pub mod delivery;
pub mod email;
pub mod submission;

pub use delivery::{DeliveryOutcome, EmailSendRequest, EmailSendResult};
pub use email::{Email, EmailError};
pub use submission::{ContactSubmission, RawSubmission, SubmissionError};
