//! Portfolio delivery service library.
//!
//! This crate provides the contact-message delivery service as a library,
//! allowing it to be tested and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod email;
pub mod error;
pub mod routes;
pub mod services;
pub mod state;

pub use routes::app;
