//! The network seam of the client.
//!
//! # Design
//! `Transport` is the one trait boundary in the crate: the executor hands it
//! a fully built [`HttpRequest`] and gets back the raw [`HttpResponse`].
//! Production code uses [`UreqTransport`]; tests substitute a scripted
//! implementation so the executor's classification logic runs without a
//! network.

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

/// Executes one HTTP POST round trip.
///
/// Implementations must return non-2xx responses as data, not as `Err`:
/// status interpretation belongs to the executor. `Err` is reserved for
/// exchanges that produced no usable response at all.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}

/// Blocking `ureq`-backed transport.
///
/// Builds a fresh agent per call — no connection or buffer outlives a single
/// exchange, and concurrent calls share nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct UreqTransport;

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        // Non-2xx statuses must come back as data rather than Err so the
        // executor can read the payload's `error` field.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();

        let mut response = agent
            .post(&request.url)
            .content_type("application/json")
            .send(request.body.as_bytes())
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
