//! External service clients.

pub mod resend;

pub use resend::{GatewayError, ResendClient};
