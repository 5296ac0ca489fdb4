//! Wire-level types for the registrar protocol.
//!
//! # Design
//! The backend speaks a single mechanism: HTTP POST with a JSON body, JSON
//! back, for every operation — reads included (read paths are merely
//! underscore-prefixed). These types therefore carry no method and no header
//! list; `Content-Type: application/json` is fixed by the transport. All
//! fields are owned so requests and responses are plain data with no
//! lifetime ties to the call that built them.

/// A single outgoing exchange: full target URL plus the JSON-encoded body.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub body: String,
}

/// The raw reply to an [`HttpRequest`], before JSON decoding.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
