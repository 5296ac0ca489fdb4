//! Scheduling operations: schedules, room/time-slot assignment, and the
//! related queries.

use serde_json::{json, Value};

use crate::client::{to_body, RegistrarClient};
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::Schedule;

impl<T: Transport> RegistrarClient<T> {
    pub fn create_schedule(&self, schedule: &Schedule) -> Result<Value, ApiError> {
        self.call("/api/Schedule/createSchedule", to_body(schedule)?)
    }

    pub fn update_schedule(&self, schedule: &Schedule) -> Result<Value, ApiError> {
        self.call("/api/Schedule/updateSchedule", to_body(schedule)?)
    }

    pub fn delete_schedule(&self, schedule: &str) -> Result<Value, ApiError> {
        self.call("/api/Schedule/deleteSchedule", json!({ "schedule": schedule }))
    }

    pub fn get_schedule_by_id(&self, schedule: &str) -> Result<Value, ApiError> {
        self.call("/api/Schedule/_getScheduleById", json!({ "schedule": schedule }))
    }

    /// Free-form search; the criteria object is forwarded whole.
    pub fn find_schedules(&self, criteria: &Value) -> Result<Value, ApiError> {
        self.call("/api/Schedule/_findSchedules", criteria.clone())
    }

    pub fn assign_course(
        &self,
        course: &str,
        room: &str,
        time_slot: &str,
    ) -> Result<Value, ApiError> {
        self.call(
            "/api/Schedule/assignCourse",
            json!({ "course": course, "room": room, "timeSlot": time_slot }),
        )
    }

    pub fn unassign_course(
        &self,
        course: &str,
        room: &str,
        time_slot: &str,
    ) -> Result<Value, ApiError> {
        self.call(
            "/api/Schedule/unassignCourse",
            json!({ "course": course, "room": room, "timeSlot": time_slot }),
        )
    }

    pub fn add_room(&self, room: &str) -> Result<Value, ApiError> {
        self.call("/api/Schedule/addRoom", json!({ "room": room }))
    }

    pub fn remove_room(&self, room: &str) -> Result<Value, ApiError> {
        self.call("/api/Schedule/removeRoom", json!({ "room": room }))
    }

    pub fn add_time_slot(&self, time_slot: &str) -> Result<Value, ApiError> {
        self.call("/api/Schedule/addTimeSlot", json!({ "timeSlot": time_slot }))
    }

    pub fn remove_time_slot(&self, time_slot: &str) -> Result<Value, ApiError> {
        self.call("/api/Schedule/removeTimeSlot", json!({ "timeSlot": time_slot }))
    }

    pub fn get_course_schedule(&self, course: &str) -> Result<Value, ApiError> {
        self.call("/api/Schedule/_getCourseSchedule", json!({ "course": course }))
    }

    pub fn get_room_availability(&self, room: &str) -> Result<Value, ApiError> {
        self.call("/api/Schedule/_getRoomAvailability", json!({ "room": room }))
    }

    pub fn get_time_slot_details(&self, time_slot: &str) -> Result<Value, ApiError> {
        self.call("/api/Schedule/_getTimeSlotDetails", json!({ "timeSlot": time_slot }))
    }
}
