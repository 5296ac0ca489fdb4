//! In-memory registrar backend used by integration tests.
//!
//! Speaks the real wire protocol: every operation is POST + JSON under
//! `/api/<Group>/<op>`, query paths underscore-prefixed, errors either as a
//! non-2xx status with an `error` body or as an `error` field inside a 200
//! reply. Prerequisite/corequisite and other set-like replies reproduce the
//! production backend's quirk of serializing an empty set as `{}` instead of
//! `[]` — clients are expected to cope.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
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

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelRequest {
    pub student: String,
    pub course: String,
    pub host_institution: String,
    pub term: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelRecord {
    pub request_id: Uuid,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(flatten)]
    pub request: TravelRequest,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirement {
    pub requirement: String,
    #[serde(default)]
    pub required_courses: BTreeSet<String>,
    pub required_credits: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub course: String,
    pub room: String,
    pub time_slot: String,
}

// Request bodies for operations that wrap scalars into named fields.

#[derive(Deserialize)]
struct CourseRef {
    course: String,
}

#[derive(Deserialize)]
struct CodeQuery {
    code: String,
}

#[derive(Deserialize)]
struct SearchQuery {
    query: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RequestRef {
    request_id: Uuid,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DenyBody {
    request_id: Uuid,
    reason: String,
}

#[derive(Deserialize)]
struct StudentRef {
    student: String,
}

#[derive(Deserialize)]
struct CompletionBody {
    student: String,
    course: String,
}

#[derive(Deserialize)]
struct RequirementRef {
    requirement: String,
}

#[derive(Clone, Default)]
pub struct AppState {
    courses: Arc<RwLock<HashMap<String, Course>>>,
    assignments: Arc<RwLock<Vec<Assignment>>>,
    travel: Arc<RwLock<HashMap<Uuid, TravelRecord>>>,
    requirements: Arc<RwLock<HashMap<String, Requirement>>>,
    completions: Arc<RwLock<HashMap<String, BTreeSet<String>>>>,
}

type Reply = Result<Json<Value>, (StatusCode, Json<Value>)>;

fn not_found(message: &str) -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "error": message })))
}

/// The production backend serializes empty set-like collections as `{}`.
fn set_reply(set: &BTreeSet<String>) -> Json<Value> {
    if set.is_empty() {
        Json(json!({}))
    } else {
        Json(json!(set))
    }
}

pub fn app() -> Router {
    Router::new()
        .route("/api/CourseCatalog/addCourse", post(add_course))
        .route("/api/CourseCatalog/updateCourseDetails", post(update_course_details))
        .route("/api/CourseCatalog/removeCourse", post(remove_course))
        .route("/api/CourseCatalog/_getAllCourses", post(get_all_courses))
        .route("/api/CourseCatalog/_getCourseByCode", post(get_course_by_code))
        .route("/api/CourseCatalog/_searchCourses", post(search_courses))
        .route("/api/CourseCatalog/_getCoursePrerequisites", post(get_course_prerequisites))
        .route("/api/CourseCatalog/_getCourseCorequisites", post(get_course_corequisites))
        .route("/api/Schedule/assignCourse", post(assign_course))
        .route("/api/Schedule/unassignCourse", post(unassign_course))
        .route("/api/Schedule/_getCourseSchedule", post(get_course_schedule))
        .route("/api/CrossRegTravel/requestTravel", post(request_travel))
        .route("/api/CrossRegTravel/approveTravel", post(approve_travel))
        .route("/api/CrossRegTravel/denyTravel", post(deny_travel))
        .route("/api/CrossRegTravel/cancelTravel", post(cancel_travel))
        .route("/api/CrossRegTravel/enrollCrossRegistered", post(enroll_cross_registered))
        .route("/api/CrossRegTravel/withdrawCrossRegistered", post(withdraw_cross_registered))
        .route("/api/CrossRegTravel/_getTravelRequestStatus", post(get_travel_request_status))
        .route("/api/CrossRegTravel/_getStudentTravelRequests", post(get_student_travel_requests))
        .route("/api/CrossRegTravel/_getCourseTravelRequests", post(get_course_travel_requests))
        .route("/api/RequirementTracker/recordCourseCompletion", post(record_course_completion))
        .route("/api/RequirementTracker/removeCourseCompletion", post(remove_course_completion))
        .route("/api/RequirementTracker/defineRequirement", post(define_requirement))
        .route("/api/RequirementTracker/updateRequirement", post(update_requirement))
        .route("/api/RequirementTracker/_getStudentProgress", post(get_student_progress))
        .route("/api/RequirementTracker/_getRequirementDetails", post(get_requirement_details))
        .with_state(AppState::default())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

// --- course catalog ---

async fn add_course(State(state): State<AppState>, Json(course): Json<Course>) -> Reply {
    let mut courses = state.courses.write().await;
    if courses.contains_key(&course.code) {
        // In-band error: 200 with an `error` field, as the backend does for
        // domain-level rejections.
        return Ok(Json(json!({ "error": format!("course already exists: {}", course.code) })));
    }
    courses.insert(course.code.clone(), course.clone());
    Ok(Json(json!(course)))
}

async fn update_course_details(State(state): State<AppState>, Json(course): Json<Course>) -> Reply {
    let mut courses = state.courses.write().await;
    if !courses.contains_key(&course.code) {
        return Ok(Json(json!({ "error": format!("unknown course: {}", course.code) })));
    }
    courses.insert(course.code.clone(), course.clone());
    Ok(Json(json!(course)))
}

async fn remove_course(State(state): State<AppState>, Json(body): Json<CourseRef>) -> Reply {
    let mut courses = state.courses.write().await;
    match courses.remove(&body.course) {
        Some(_) => Ok(Json(json!({ "status": "removed" }))),
        None => Err(not_found("course not found")),
    }
}

async fn get_all_courses(State(state): State<AppState>) -> Reply {
    let courses = state.courses.read().await;
    let mut all: Vec<Course> = courses.values().cloned().collect();
    all.sort_by(|a, b| a.code.cmp(&b.code));
    Ok(Json(json!(all)))
}

async fn get_course_by_code(State(state): State<AppState>, Json(body): Json<CodeQuery>) -> Reply {
    let courses = state.courses.read().await;
    match courses.get(&body.code) {
        Some(course) => Ok(Json(json!(course))),
        None => Err(not_found("course not found")),
    }
}

async fn search_courses(State(state): State<AppState>, Json(body): Json<SearchQuery>) -> Reply {
    let courses = state.courses.read().await;
    let mut hits: Vec<Course> = courses
        .values()
        .filter(|c| c.code.contains(&body.query) || c.title.contains(&body.query))
        .cloned()
        .collect();
    hits.sort_by(|a, b| a.code.cmp(&b.code));
    Ok(Json(json!(hits)))
}

async fn get_course_prerequisites(
    State(state): State<AppState>,
    Json(body): Json<CourseRef>,
) -> Reply {
    let courses = state.courses.read().await;
    match courses.get(&body.course) {
        Some(course) => Ok(set_reply(&course.prerequisites)),
        None => Err(not_found("course not found")),
    }
}

async fn get_course_corequisites(
    State(state): State<AppState>,
    Json(body): Json<CourseRef>,
) -> Reply {
    let courses = state.courses.read().await;
    match courses.get(&body.course) {
        Some(course) => Ok(set_reply(&course.corequisites)),
        None => Err(not_found("course not found")),
    }
}

// --- scheduling ---

async fn assign_course(State(state): State<AppState>, Json(body): Json<Assignment>) -> Reply {
    state.assignments.write().await.push(body);
    Ok(Json(json!({ "status": "ok" })))
}

async fn unassign_course(State(state): State<AppState>, Json(body): Json<Assignment>) -> Reply {
    let mut assignments = state.assignments.write().await;
    let before = assignments.len();
    assignments.retain(|a| {
        !(a.course == body.course && a.room == body.room && a.time_slot == body.time_slot)
    });
    if assignments.len() == before {
        return Err(not_found("assignment not found"));
    }
    Ok(Json(json!({ "status": "ok" })))
}

async fn get_course_schedule(State(state): State<AppState>, Json(body): Json<CourseRef>) -> Reply {
    let assignments = state.assignments.read().await;
    let hits: Vec<Assignment> = assignments
        .iter()
        .filter(|a| a.course == body.course)
        .cloned()
        .collect();
    Ok(Json(json!(hits)))
}

// --- cross-registration travel ---

async fn request_travel(State(state): State<AppState>, Json(body): Json<TravelRequest>) -> Reply {
    let record = TravelRecord {
        request_id: Uuid::new_v4(),
        status: "pending".to_string(),
        reason: None,
        request: body,
    };
    state.travel.write().await.insert(record.request_id, record.clone());
    Ok(Json(json!(record)))
}

async fn approve_travel(State(state): State<AppState>, Json(body): Json<RequestRef>) -> Reply {
    let mut travel = state.travel.write().await;
    match travel.get_mut(&body.request_id) {
        Some(record) => {
            record.status = "approved".to_string();
            Ok(Json(json!(record)))
        }
        None => Err(not_found("not found")),
    }
}

async fn deny_travel(State(state): State<AppState>, Json(body): Json<DenyBody>) -> Reply {
    let mut travel = state.travel.write().await;
    match travel.get_mut(&body.request_id) {
        Some(record) => {
            record.status = "denied".to_string();
            record.reason = Some(body.reason);
            Ok(Json(json!(record)))
        }
        None => Err(not_found("not found")),
    }
}

async fn cancel_travel(State(state): State<AppState>, Json(body): Json<RequestRef>) -> Reply {
    let mut travel = state.travel.write().await;
    match travel.get_mut(&body.request_id) {
        Some(record) => {
            record.status = "cancelled".to_string();
            Ok(Json(json!(record)))
        }
        None => Err(not_found("not found")),
    }
}

async fn enroll_cross_registered(
    State(state): State<AppState>,
    Json(body): Json<RequestRef>,
) -> Reply {
    let mut travel = state.travel.write().await;
    match travel.get_mut(&body.request_id) {
        Some(record) if record.status == "approved" => {
            record.status = "enrolled".to_string();
            Ok(Json(json!(record)))
        }
        Some(_) => Ok(Json(json!({ "error": "travel request not approved" }))),
        None => Err(not_found("not found")),
    }
}

async fn withdraw_cross_registered(
    State(state): State<AppState>,
    Json(body): Json<RequestRef>,
) -> Reply {
    let mut travel = state.travel.write().await;
    match travel.get_mut(&body.request_id) {
        Some(record) => {
            record.status = "withdrawn".to_string();
            Ok(Json(json!(record)))
        }
        None => Err(not_found("not found")),
    }
}

async fn get_travel_request_status(
    State(state): State<AppState>,
    Json(body): Json<RequestRef>,
) -> Reply {
    let travel = state.travel.read().await;
    match travel.get(&body.request_id) {
        Some(record) => Ok(Json(json!(record))),
        None => Err(not_found("not found")),
    }
}

async fn get_student_travel_requests(
    State(state): State<AppState>,
    Json(body): Json<StudentRef>,
) -> Reply {
    let travel = state.travel.read().await;
    let hits: Vec<TravelRecord> = travel
        .values()
        .filter(|r| r.request.student == body.student)
        .cloned()
        .collect();
    Ok(Json(json!(hits)))
}

async fn get_course_travel_requests(
    State(state): State<AppState>,
    Json(body): Json<CourseRef>,
) -> Reply {
    let travel = state.travel.read().await;
    let hits: Vec<TravelRecord> = travel
        .values()
        .filter(|r| r.request.course == body.course)
        .cloned()
        .collect();
    Ok(Json(json!(hits)))
}

// --- requirement tracking ---

async fn record_course_completion(
    State(state): State<AppState>,
    Json(body): Json<CompletionBody>,
) -> Reply {
    let mut completions = state.completions.write().await;
    completions.entry(body.student).or_default().insert(body.course);
    Ok(Json(json!({ "status": "recorded" })))
}

async fn remove_course_completion(
    State(state): State<AppState>,
    Json(body): Json<CompletionBody>,
) -> Reply {
    let mut completions = state.completions.write().await;
    let removed = completions
        .get_mut(&body.student)
        .is_some_and(|set| set.remove(&body.course));
    if !removed {
        return Ok(Json(json!({ "error": "completion not recorded" })));
    }
    Ok(Json(json!({ "status": "removed" })))
}

async fn define_requirement(
    State(state): State<AppState>,
    Json(body): Json<Requirement>,
) -> Reply {
    let id = body.requirement.clone();
    state.requirements.write().await.insert(id.clone(), body);
    // The backend answers definition calls with the list of affected ids.
    Ok(Json(json!([id])))
}

async fn update_requirement(
    State(state): State<AppState>,
    Json(body): Json<Requirement>,
) -> Reply {
    let mut requirements = state.requirements.write().await;
    if !requirements.contains_key(&body.requirement) {
        return Err(not_found("requirement not found"));
    }
    let id = body.requirement.clone();
    requirements.insert(id.clone(), body);
    Ok(Json(json!([id])))
}

async fn get_student_progress(
    State(state): State<AppState>,
    Json(body): Json<StudentRef>,
) -> Reply {
    let completions = state.completions.read().await;
    let completed = completions.get(&body.student).cloned().unwrap_or_default();
    let requirements = state.requirements.read().await;
    let progress: Vec<Value> = requirements
        .values()
        .map(|r| {
            let missing: BTreeSet<&String> =
                r.required_courses.difference(&completed).collect();
            json!({
                "requirement": r.requirement,
                "satisfied": missing.is_empty(),
                "missingCourses": missing,
            })
        })
        .collect();
    Ok(Json(json!({
        "student": body.student,
        "completedCourses": completed,
        "progress": progress,
    })))
}

async fn get_requirement_details(
    State(state): State<AppState>,
    Json(body): Json<RequirementRef>,
) -> Reply {
    let requirements = state.requirements.read().await;
    match requirements.get(&body.requirement) {
        Some(requirement) => Ok(Json(json!(requirement))),
        None => Err(not_found("requirement not found")),
    }
}
