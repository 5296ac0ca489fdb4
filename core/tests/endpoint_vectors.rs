//! Verify the full endpoint registry against `test-vectors/endpoints.json`.
//!
//! Each vector names an operation, its backend path, and the exact request
//! body the client must produce from canonical sample arguments. Comparing
//! parsed JSON (not raw strings) avoids false negatives from field ordering.
//! A failure here means the wire contract drifted, which the backend will
//! not tolerate.

use std::collections::BTreeSet;
use std::sync::Mutex;

use registrar_core::{
    ApiError, Course, HttpRequest, HttpResponse, RegistrarClient, Requirement, Schedule,
    ScheduleEntry, Transport, TravelRequest,
};
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:3000";

/// Transport that acks every call with `{"status":"ok"}` and keeps the
/// requests it saw.
#[derive(Default)]
struct CapturingTransport {
    requests: Mutex<Vec<HttpRequest>>,
}

impl CapturingTransport {
    fn last_request(&self) -> HttpRequest {
        self.requests.lock().unwrap().last().expect("no request captured").clone()
    }
}

impl Transport for CapturingTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(HttpResponse {
            status: 200,
            body: r#"{"status":"ok"}"#.to_string(),
        })
    }
}

fn sample_course() -> Course {
    Course {
        code: "CS101".to_string(),
        title: "Intro".to_string(),
        credits: 4,
        prerequisites: BTreeSet::new(),
        corequisites: BTreeSet::new(),
    }
}

fn sample_schedule() -> Schedule {
    Schedule {
        id: "SCH-1".to_string(),
        term: "2026F".to_string(),
        entries: vec![ScheduleEntry {
            course: "CS101".to_string(),
            room: "R1".to_string(),
            time_slot: "T1".to_string(),
        }],
    }
}

fn sample_travel() -> TravelRequest {
    TravelRequest {
        student: "S1".to_string(),
        course: "CS101".to_string(),
        host_institution: "State U".to_string(),
        term: "2026F".to_string(),
    }
}

fn sample_requirement() -> Requirement {
    Requirement {
        requirement: "REQ-1".to_string(),
        required_courses: BTreeSet::from(["CS101".to_string()]),
        required_credits: 12,
    }
}

/// Invoke the operation `name` with its canonical sample arguments.
fn invoke(client: &RegistrarClient<&CapturingTransport>, name: &str) -> Result<Value, ApiError> {
    match name {
        "addCourse" => client.add_course(&sample_course()),
        "updateCourseDetails" => client.update_course_details(&sample_course()),
        "removeCourse" => client.remove_course("CS101"),
        "getAllCourses" => client.get_all_courses(),
        "getCourseByCode" => client.get_course_by_code("CS101"),
        "searchCourses" => client.search_courses("algebra"),
        "getCoursePrerequisites" => client.get_course_prerequisites("CS101"),
        "getCourseCorequisites" => client.get_course_corequisites("CS101"),
        "createSchedule" => client.create_schedule(&sample_schedule()),
        "updateSchedule" => client.update_schedule(&sample_schedule()),
        "deleteSchedule" => client.delete_schedule("SCH-1"),
        "getScheduleById" => client.get_schedule_by_id("SCH-1"),
        "findSchedules" => client.find_schedules(&json!({"term": "2026F"})),
        "assignCourse" => client.assign_course("CS101", "R1", "T1"),
        "unassignCourse" => client.unassign_course("CS101", "R1", "T1"),
        "addRoom" => client.add_room("R1"),
        "removeRoom" => client.remove_room("R1"),
        "addTimeSlot" => client.add_time_slot("T1"),
        "removeTimeSlot" => client.remove_time_slot("T1"),
        "getCourseSchedule" => client.get_course_schedule("CS101"),
        "getRoomAvailability" => client.get_room_availability("R1"),
        "getTimeSlotDetails" => client.get_time_slot_details("T1"),
        "requestTravel" => client.request_travel(&sample_travel()),
        "approveTravel" => client.approve_travel("X"),
        "denyTravel" => client.deny_travel("X", "capacity"),
        "cancelTravel" => client.cancel_travel("X"),
        "enrollCrossRegistered" => client.enroll_cross_registered("X"),
        "withdrawCrossRegistered" => client.withdraw_cross_registered("X"),
        "getTravelRequestStatus" => client.get_travel_request_status("X"),
        "getStudentTravelRequests" => client.get_student_travel_requests("S1"),
        "getCourseTravelRequests" => client.get_course_travel_requests("CS101"),
        "recordCourseCompletion" => client.record_course_completion("S1", "CS101"),
        "removeCourseCompletion" => client.remove_course_completion("S1", "CS101"),
        "defineRequirement" => client.define_requirement(&sample_requirement()),
        "updateRequirement" => client.update_requirement(&sample_requirement()),
        "getStudentProgress" => client.get_student_progress("S1"),
        "getRequirementDetails" => client.get_requirement_details("REQ-1"),
        other => panic!("vector names unknown operation: {other}"),
    }
}

#[test]
fn every_operation_matches_its_vector() {
    let raw = include_str!("../../test-vectors/endpoints.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();
    let cases = vectors["cases"].as_array().unwrap();
    assert_eq!(cases.len(), 37, "vector count changed; update the registry tests");

    let mut seen_paths = Vec::new();
    for case in cases {
        let name = case["name"].as_str().unwrap();
        let path = case["path"].as_str().unwrap();

        let transport = CapturingTransport::default();
        let client = RegistrarClient::with_transport(BASE_URL, &transport);
        invoke(&client, name).unwrap();

        let request = transport.last_request();
        assert_eq!(request.url, format!("{BASE_URL}{path}"), "{name}: path");

        let body: Value = serde_json::from_str(&request.body).unwrap();
        assert_eq!(body, case["body"], "{name}: body");

        seen_paths.push(path.to_string());
    }

    // Paths are never reused across operations.
    let mut unique = seen_paths.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), seen_paths.len(), "duplicate endpoint path");
}

#[test]
fn query_operations_use_underscore_prefixed_paths() {
    let raw = include_str!("../../test-vectors/endpoints.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let path = case["path"].as_str().unwrap();
        let segment = path.rsplit('/').next().unwrap();
        if name.starts_with("get") || name.starts_with("search") || name.starts_with("find") {
            assert!(segment.starts_with('_'), "{name}: query path missing prefix");
        } else {
            assert!(!segment.starts_with('_'), "{name}: mutation path has prefix");
        }
    }
}
