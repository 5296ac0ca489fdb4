//! Error types for the registrar API client.
//!
//! # Design
//! Every failed call surfaces as a single `ApiError`. The original client
//! collapsed everything into one message string; here the kind is kept as an
//! explicit variant so callers can branch without parsing messages, while
//! `Display` still yields the same human-readable text.
//!
//! Malformed JSON in a response body is a [`ApiError::Transport`] failure:
//! the backend always replies with JSON, so an undecodable body means the
//! exchange itself went wrong, not the operation.

use thiserror::Error;

/// Failure raised by [`RegistrarClient`](crate::RegistrarClient) calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level problem (DNS, refused connection, abort) or a response
    /// body that could not be read or decoded as JSON.
    #[error("{0}")]
    Transport(String),

    /// The backend responded but signaled failure, either via a non-2xx
    /// status or an `error` field in the payload. `message` prefers the
    /// payload's `error` field over status-derived text.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// A typed request body could not be serialized to JSON before sending.
    #[error("request serialization failed: {0}")]
    Serialization(String),
}
