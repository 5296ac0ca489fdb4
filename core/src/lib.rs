//! Client layer for the university registrar backend.
//!
//! # Overview
//! Exposes the backend's remote operations — course catalog, scheduling,
//! cross-registration travel, requirement tracking — as plain methods on
//! [`RegistrarClient`]. Every operation is the same wire exchange: HTTP POST
//! with a JSON body against a path under the configured base URL, JSON back.
//!
//! # Design
//! - One generic primitive, [`RegistrarClient::call`], owns URL building,
//!   serialization, response classification, and error normalization. The
//!   per-operation methods in `catalog`, `schedule`, `travel`, and
//!   `requirements` only bind paths and body shapes.
//! - The network sits behind the [`Transport`] trait and diagnostics behind
//!   the [`ApiObserver`] trait, both injected, so the executor is fully
//!   testable without a server.
//! - No retries, timeouts, caching, or authentication: one call is one
//!   exchange, and failures surface as a single [`ApiError`].

pub mod catalog;
pub mod client;
pub mod error;
pub mod http;
pub mod observer;
pub mod requirements;
pub mod schedule;
pub mod transport;
pub mod travel;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use client::RegistrarClient;
pub use error::ApiError;
pub use http::{HttpRequest, HttpResponse};
pub use observer::{ApiEvent, ApiObserver, NoopObserver};
pub use transport::{Transport, UreqTransport};
pub use types::{Course, Requirement, Schedule, ScheduleEntry, TravelRequest};
