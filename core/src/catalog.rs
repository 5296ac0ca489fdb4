//! Course catalog operations.
//!
//! Each method binds a fixed path and body shape onto
//! [`RegistrarClient::call`]; read paths carry the backend's `_` prefix.
//! Whether an argument is forwarded whole or wrapped under a named field is
//! part of the wire contract and must not change per operation.

use serde_json::{json, Value};

use crate::client::{to_body, RegistrarClient};
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::Course;

impl<T: Transport> RegistrarClient<T> {
    pub fn add_course(&self, course: &Course) -> Result<Value, ApiError> {
        self.call("/api/CourseCatalog/addCourse", to_body(course)?)
    }

    pub fn update_course_details(&self, course: &Course) -> Result<Value, ApiError> {
        self.call("/api/CourseCatalog/updateCourseDetails", to_body(course)?)
    }

    pub fn remove_course(&self, course: &str) -> Result<Value, ApiError> {
        self.call("/api/CourseCatalog/removeCourse", json!({ "course": course }))
    }

    pub fn get_all_courses(&self) -> Result<Value, ApiError> {
        self.call("/api/CourseCatalog/_getAllCourses", json!({}))
    }

    pub fn get_course_by_code(&self, code: &str) -> Result<Value, ApiError> {
        self.call("/api/CourseCatalog/_getCourseByCode", json!({ "code": code }))
    }

    pub fn search_courses(&self, query: &str) -> Result<Value, ApiError> {
        self.call("/api/CourseCatalog/_searchCourses", json!({ "query": query }))
    }

    pub fn get_course_prerequisites(&self, course: &str) -> Result<Value, ApiError> {
        self.call(
            "/api/CourseCatalog/_getCoursePrerequisites",
            json!({ "course": course }),
        )
    }

    pub fn get_course_corequisites(&self, course: &str) -> Result<Value, ApiError> {
        self.call(
            "/api/CourseCatalog/_getCourseCorequisites",
            json!({ "course": course }),
        )
    }
}
