//! Typed request bodies for the registrar API.
//!
//! # Design
//! The original client forwarded untyped argument objects verbatim. Compound
//! bodies are modeled as records here so callers get field names checked at
//! compile time; field values are still forwarded as-is, with no validation.
//! Operations whose backend shape is not fully known keep the generic
//! `serde_json::Value` escape hatch via `RegistrarClient::call`. All wire
//! field names are camelCase.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A catalog course. Prerequisites and corequisites are course-code sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub code: String,
    pub title: String,
    pub credits: u32,
    #[serde(default)]
    pub prerequisites: BTreeSet<String>,
    #[serde(default)]
    pub corequisites: BTreeSet<String>,
}

/// One course placement inside a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub course: String,
    pub room: String,
    pub time_slot: String,
}

/// A term schedule sent whole to create/update operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: String,
    pub term: String,
    #[serde(default)]
    pub entries: Vec<ScheduleEntry>,
}

/// A cross-registration travel request as submitted by a student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelRequest {
    pub student: String,
    pub course: String,
    pub host_institution: String,
    pub term: String,
}

/// A graduation requirement: identity, required-course set, credit count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirement {
    pub requirement: String,
    pub required_courses: BTreeSet<String>,
    pub required_credits: u32,
}
