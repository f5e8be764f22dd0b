use chrono::NaiveTime;
use database::{entities::schedule_blocks, services::schedule::ScheduleBlockInput};
use models::days::Weekday;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ScheduleRequest {
    pub course_id: Uuid,
    pub section_id: Option<Uuid>,
    pub instructor_id: Option<Uuid>,
    /// Lowercase English day name, e.g. `monday`
    #[schema(value_type = String)]
    pub day: Weekday,
    pub time_begin: NaiveTime,
    pub time_end: NaiveTime,
    pub room: String,
}

impl From<ScheduleRequest> for ScheduleBlockInput {
    fn from(request: ScheduleRequest) -> Self {
        Self {
            course_id: request.course_id,
            section_id: request.section_id,
            instructor_id: request.instructor_id,
            day: request.day,
            time_begin: request.time_begin,
            time_end: request.time_end,
            room: request.room,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ScheduleResponse {
    pub id: Uuid,
    pub course_id: Uuid,
    pub section_id: Option<Uuid>,
    pub instructor_id: Option<Uuid>,
    #[schema(value_type = String)]
    pub day: Weekday,
    pub time_begin: NaiveTime,
    pub time_end: NaiveTime,
    pub room: String,
}

impl From<schedule_blocks::Model> for ScheduleResponse {
    fn from(model: schedule_blocks::Model) -> Self {
        Self {
            id: model.id,
            course_id: model.course_id,
            section_id: model.section_id,
            instructor_id: model.instructor_id,
            day: model.day,
            time_begin: model.time_begin,
            time_end: model.time_end,
            room: model.room,
        }
    }
}
