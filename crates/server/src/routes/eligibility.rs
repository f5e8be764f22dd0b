use crate::{
    AppState,
    dtos::enrollment::{EligibilityQuery, EligibilityResponse},
    error::ApiError,
};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use database::services::eligibility::EligibilityService;
use uuid::Uuid;

/// Check a student against the direct prerequisites of a course
#[utoipa::path(
    get,
    path = "/students/{student_id}/eligibility/{course_id}",
    params(
        ("student_id" = Uuid, Path, description = "Student ID"),
        ("course_id" = Uuid, Path, description = "Course ID"),
        EligibilityQuery
    ),
    responses(
        (status = 200, description = "Eligibility evaluated", body = EligibilityResponse),
        (status = 404, description = "Student or course not found")
    ),
    tag = "Enrollments"
)]
pub async fn evaluate(
    State(state): State<AppState>,
    Path((student_id, course_id)): Path<(Uuid, Uuid)>,
    Query(query): Query<EligibilityQuery>,
) -> Result<Json<EligibilityResponse>, ApiError> {
    let eligibility =
        EligibilityService::evaluate_eligibility(&state.db, student_id, course_id, query.kind)
            .await?;

    Ok(Json(eligibility.into()))
}
