//! The generic request executor behind every registrar operation.
//!
//! # Design
//! `RegistrarClient` owns the one piece of logic in this crate: build the
//! target URL, POST the JSON body, decode the reply, classify the outcome.
//! Every named operation in the domain modules is a one-line binding of a
//! path and a body shape onto [`RegistrarClient::call`]. The base URL and
//! the observer are injected at construction so the executor runs against a
//! mock target in tests; the client carries no mutable state between calls.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::http::HttpRequest;
use crate::observer::{ApiEvent, ApiObserver, NoopObserver};
use crate::transport::{Transport, UreqTransport};

/// Client for the registrar backend.
///
/// Generic over [`Transport`] so tests can script responses; defaults to the
/// blocking ureq transport.
#[derive(Clone)]
pub struct RegistrarClient<T = UreqTransport> {
    base_url: String,
    transport: T,
    observer: Arc<dyn ApiObserver>,
}

impl RegistrarClient {
    /// Client against `base_url` using the ureq transport and no diagnostics.
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(base_url, UreqTransport)
    }
}

impl<T: Transport> RegistrarClient<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
            observer: Arc::new(NoopObserver),
        }
    }

    /// Replaces the diagnostic sink. Events never affect control flow.
    pub fn observed(mut self, observer: Arc<dyn ApiObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Performs one operation against the backend: POST `body` to `path`
    /// (relative to the base URL) and classify the reply.
    ///
    /// Returns the decoded payload unchanged, except for one legacy quirk:
    /// the backend occasionally serializes an empty set-like collection as
    /// `{}` instead of `[]`, so a 2xx payload that is a plain object with
    /// zero keys comes back as an empty array. The substitution applies to
    /// exactly that shape — arrays, scalars, `null`, and objects with any
    /// keys pass through untouched.
    ///
    /// Fails with [`ApiError::Api`] on a non-2xx status or a truthy `error`
    /// field in the payload (the field's value wins as the message), and
    /// with [`ApiError::Transport`] on network problems or an undecodable
    /// body. No retries, no timeout; one call is one exchange.
    pub fn call(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        match self.exchange(path, &body) {
            Ok(payload) => Ok(payload),
            Err(err) => {
                self.observer.on_event(ApiEvent::Failure {
                    path: path.to_string(),
                    message: err.to_string(),
                });
                Err(err)
            }
        }
    }

    fn exchange(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        self.observer.on_event(ApiEvent::Request {
            url: url.clone(),
            body: body.clone(),
        });

        let request = HttpRequest {
            url,
            body: body.to_string(),
        };
        let response = self.transport.execute(&request)?;
        self.observer.on_event(ApiEvent::Status {
            status: response.status,
        });

        // The backend always replies with JSON; an undecodable body is a
        // broken exchange, not a logical failure.
        let payload: Value = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        self.observer.on_event(ApiEvent::Payload {
            payload: payload.clone(),
        });

        if let Some(error) = payload.get("error").filter(|v| is_truthy(v)) {
            return Err(ApiError::Api {
                status: response.status,
                message: error_message(error),
            });
        }
        if !response.is_success() {
            return Err(ApiError::Api {
                status: response.status,
                message: status_message(response.status),
            });
        }

        Ok(empty_collection_fallback(payload))
    }
}

/// Converts a typed request body to the JSON value the executor sends.
pub(crate) fn to_body<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Serialization(e.to_string()))
}

/// The original client treated the `error` field with JavaScript truthiness:
/// `null`, `false`, `0`, and `""` do not signal failure.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn error_message(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn status_message(status: u16) -> String {
    match ureq::http::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
    {
        Some(reason) => format!("API request failed: {reason}"),
        None => format!("API request failed: status {status}"),
    }
}

/// Legacy compatibility shim: a 2xx payload that is a plain object with zero
/// keys stands in for an empty set-like collection and becomes `[]`. Scoped
/// deliberately narrow — do not widen to other shapes.
fn empty_collection_fallback(payload: Value) -> Value {
    match payload {
        Value::Object(map) if map.is_empty() => Value::Array(Vec::new()),
        other => other,
    }
}
