use chrono::NaiveDateTime;
use database::entities::prerequisites;
use models::requisite::PrerequisiteKind;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct PrerequisiteRequest {
    pub required_course_id: Uuid,
    /// `cursada` or `final`
    #[schema(value_type = String)]
    pub kind: PrerequisiteKind,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct PrerequisiteQuery {
    /// `cursada` (default) or `final`
    #[serde(default = "default_kind")]
    #[param(value_type = Option<String>)]
    pub kind: PrerequisiteKind,
}

fn default_kind() -> PrerequisiteKind {
    PrerequisiteKind::Cursada
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PrerequisiteResponse {
    pub id: Uuid,
    pub course_id: Uuid,
    pub required_course_id: Uuid,
    #[schema(value_type = String)]
    pub kind: PrerequisiteKind,
    pub position: i32,
    pub created_at: NaiveDateTime,
}

impl From<prerequisites::Model> for PrerequisiteResponse {
    fn from(model: prerequisites::Model) -> Self {
        Self {
            id: model.id,
            course_id: model.course_id,
            required_course_id: model.required_course_id,
            kind: model.kind,
            position: model.position,
            created_at: model.created_at,
        }
    }
}
