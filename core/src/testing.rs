//! Test doubles shared by the unit tests: a scripted transport and a
//! recording observer. Neither touches the network.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::observer::{ApiEvent, ApiObserver};
use crate::transport::Transport;

/// Transport that replays queued outcomes and records every request it saw.
/// Pass it by reference (`Transport` is implemented for `&T`) so the test
/// keeps access after the client takes it.
pub(crate) struct ScriptedTransport {
    outcomes: Mutex<VecDeque<Result<HttpResponse, ApiError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    /// One-shot transport answering with `status` and `body`.
    pub(crate) fn respond(status: u16, body: &str) -> Self {
        Self {
            outcomes: Mutex::new(VecDeque::from([Ok(HttpResponse {
                status,
                body: body.to_string(),
            })])),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// One-shot transport failing at the network level.
    pub(crate) fn failing(message: &str) -> Self {
        Self {
            outcomes: Mutex::new(VecDeque::from([Err(ApiError::Transport(
                message.to_string(),
            ))])),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn last_request(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .expect("no request was executed")
            .clone()
    }
}

impl Transport for ScriptedTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.lock().unwrap().push(request.clone());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted outcome left")
    }
}

/// Observer that stores every event for later assertion.
#[derive(Default)]
pub(crate) struct RecordingObserver {
    events: Mutex<Vec<ApiEvent>>,
}

impl RecordingObserver {
    pub(crate) fn events(&self) -> Vec<ApiEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl ApiObserver for RecordingObserver {
    fn on_event(&self, event: ApiEvent) {
        self.events.lock().unwrap().push(event);
    }
}
