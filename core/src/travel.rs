//! Cross-registration travel operations: the request lifecycle, enrollment
//! at the host institution, and the status queries.

use serde_json::{json, Value};

use crate::client::{to_body, RegistrarClient};
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::TravelRequest;

impl<T: Transport> RegistrarClient<T> {
    pub fn request_travel(&self, travel: &TravelRequest) -> Result<Value, ApiError> {
        self.call("/api/CrossRegTravel/requestTravel", to_body(travel)?)
    }

    pub fn approve_travel(&self, request_id: &str) -> Result<Value, ApiError> {
        self.call(
            "/api/CrossRegTravel/approveTravel",
            json!({ "requestId": request_id }),
        )
    }

    pub fn deny_travel(&self, request_id: &str, reason: &str) -> Result<Value, ApiError> {
        self.call(
            "/api/CrossRegTravel/denyTravel",
            json!({ "requestId": request_id, "reason": reason }),
        )
    }

    pub fn cancel_travel(&self, request_id: &str) -> Result<Value, ApiError> {
        self.call(
            "/api/CrossRegTravel/cancelTravel",
            json!({ "requestId": request_id }),
        )
    }

    pub fn enroll_cross_registered(&self, request_id: &str) -> Result<Value, ApiError> {
        self.call(
            "/api/CrossRegTravel/enrollCrossRegistered",
            json!({ "requestId": request_id }),
        )
    }

    pub fn withdraw_cross_registered(&self, request_id: &str) -> Result<Value, ApiError> {
        self.call(
            "/api/CrossRegTravel/withdrawCrossRegistered",
            json!({ "requestId": request_id }),
        )
    }

    pub fn get_travel_request_status(&self, request_id: &str) -> Result<Value, ApiError> {
        self.call(
            "/api/CrossRegTravel/_getTravelRequestStatus",
            json!({ "requestId": request_id }),
        )
    }

    pub fn get_student_travel_requests(&self, student: &str) -> Result<Value, ApiError> {
        self.call(
            "/api/CrossRegTravel/_getStudentTravelRequests",
            json!({ "student": student }),
        )
    }

    pub fn get_course_travel_requests(&self, course: &str) -> Result<Value, ApiError> {
        self.call(
            "/api/CrossRegTravel/_getCourseTravelRequests",
            json!({ "course": course }),
        )
    }
}
