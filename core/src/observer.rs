//! Injected diagnostics for the request executor.
//!
//! # Design
//! The original client logged every exchange to a global console. Here the
//! same four events are emitted through an injected [`ApiObserver`] so tests
//! can assert on them and embedders can route them to whatever sink they
//! use. Events are observability only — nothing in the executor branches on
//! the observer.

use serde_json::Value;

/// One diagnostic event per executor step: outgoing request, received
/// status, decoded payload, raised failure.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiEvent {
    Request { url: String, body: Value },
    Status { status: u16 },
    Payload { payload: Value },
    Failure { path: String, message: String },
}

/// Receives [`ApiEvent`]s from a [`RegistrarClient`](crate::RegistrarClient).
pub trait ApiObserver: Send + Sync {
    fn on_event(&self, event: ApiEvent);
}

/// Default observer: discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ApiObserver for NoopObserver {
    fn on_event(&self, _event: ApiEvent) {}
}
