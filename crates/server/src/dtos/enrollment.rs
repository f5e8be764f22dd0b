use chrono::NaiveDateTime;
use database::{entities::enrollments, services::eligibility::Eligibility};
use models::{requisite::PrerequisiteKind, status::EnrollmentStatus};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct EnrollRequest {
    pub course_id: Uuid,
    pub section_id: Option<Uuid>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EnrollmentResponse {
    pub id: Uuid,
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub section_id: Option<Uuid>,
    /// One of `enrolled`, `completed`, `approved`, `free`
    #[schema(value_type = String)]
    pub status: EnrollmentStatus,
    pub absences: i32,
    pub final_grade: Option<i16>,
    pub enrolled_at: NaiveDateTime,
    pub completed_at: Option<NaiveDateTime>,
}

impl From<enrollments::Model> for EnrollmentResponse {
    fn from(model: enrollments::Model) -> Self {
        Self {
            id: model.id,
            student_id: model.student_id,
            course_id: model.course_id,
            section_id: model.section_id,
            status: model.status,
            absences: model.absences,
            final_grade: model.final_grade,
            enrolled_at: model.enrolled_at,
            completed_at: model.completed_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct StatusRequest {
    #[schema(value_type = String)]
    pub status: EnrollmentStatus,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AbsencesRequest {
    pub count: u32,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct EligibilityQuery {
    /// `cursada` (default) or `final`
    #[serde(default = "default_kind")]
    #[param(value_type = Option<String>)]
    pub kind: PrerequisiteKind,
}

fn default_kind() -> PrerequisiteKind {
    PrerequisiteKind::Cursada
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CourseSummary {
    pub id: Uuid,
    pub code: String,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EligibilityResponse {
    pub satisfied: bool,
    /// Unmet prerequisites, in the order they were declared
    pub missing: Vec<CourseSummary>,
}

impl From<Eligibility> for EligibilityResponse {
    fn from(eligibility: Eligibility) -> Self {
        Self {
            satisfied: eligibility.satisfied,
            missing: eligibility
                .missing
                .into_iter()
                .map(|course| CourseSummary {
                    id: course.id,
                    code: course.code,
                    name: course.name,
                })
                .collect(),
        }
    }
}
