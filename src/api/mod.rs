//! HTTP client for the spreadsheet-backed tour gateway.

pub mod client;
pub mod error;

pub use client::{GatewayClient, DEFAULT_GATEWAY_URL};
pub use error::GatewayError;
