use database::{entities::exam_registrations, services::grading::GradeRecord};
use models::status::RegistrationStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::enrollment::EnrollmentResponse;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ExamRegistrationRequest {
    pub enrollment_id: Uuid,
    pub exam_session_id: Uuid,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ExamRegistrationResponse {
    pub id: Uuid,
    pub enrollment_id: Uuid,
    pub exam_session_id: Uuid,
    /// One of `registered`, `graded`, `absent`
    #[schema(value_type = String)]
    pub status: RegistrationStatus,
    pub grade: Option<i16>,
}

impl From<exam_registrations::Model> for ExamRegistrationResponse {
    fn from(model: exam_registrations::Model) -> Self {
        Self {
            id: model.id,
            enrollment_id: model.enrollment_id,
            exam_session_id: model.exam_session_id,
            status: model.status,
            grade: model.grade,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct GradeRequest {
    /// Must chair the course
    pub instructor_id: Uuid,
    pub grade: i16,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AbsentRequest {
    pub instructor_id: Uuid,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GradeResponse {
    pub registration: ExamRegistrationResponse,
    pub enrollment: EnrollmentResponse,
}

impl From<GradeRecord> for GradeResponse {
    fn from(record: GradeRecord) -> Self {
        Self {
            registration: record.registration.into(),
            enrollment: record.enrollment.into(),
        }
    }
}
