//! HTTP transport layer for the Boekuwzending client.
//!
//! The client only needs one capability from its transport: send a
//! method + path + headers + body request and hand back the status and body.
//! Transport-level failures (DNS, connect, timeout) are reported as
//! [`TransportError`]; any HTTP status, including 4xx/5xx, is a successful send.

mod http;

pub use http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, RequestBody, ReqwestTransport};

use std::time::Duration;

/// Transport error types.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Connection error.
    #[error("Connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// Timeout error.
    #[error("Timeout after {timeout:?}")]
    Timeout {
        /// Timeout duration.
        timeout: Duration,
    },

    /// Request could not be built or encoded.
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// Error message.
        message: String,
    },

    /// Response could not be read.
    #[error("Invalid response: {message}")]
    InvalidResponse {
        /// Error message.
        message: String,
    },
}
