//! Portfolio Core - Shared types library.
//!
//! This crate provides the common types used by the portfolio backend:
//! - `server` - The contact-message delivery service
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. A contact
//! form submission flows through these types: the server parses the request
//! body into a [`ContactSubmission`], builds one [`EmailSendRequest`] per
//! outbound message, and aggregates the provider's [`EmailSendResult`]s into
//! a [`DeliveryOutcome`].
//!
//! # Modules
//!
//! - [`types`] - Validated email addresses, submissions, and send payloads

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
