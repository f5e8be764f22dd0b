use crate::{
    AppState,
    dtos::exam::{AbsentRequest, ExamRegistrationResponse, GradeRequest, GradeResponse},
    error::ApiError,
};
use axum::{
    Json,
    extract::{Path, State},
};
use database::services::grading::GradingService;
use uuid::Uuid;

/// Record the final-exam grade of a registration
///
/// The instructor is taken from the body and is not matched against the token subject.
#[utoipa::path(
    post,
    path = "/exam-registrations/{id}/grade",
    params(
        ("id" = Uuid, Path, description = "Exam registration ID")
    ),
    request_body = GradeRequest,
    responses(
        (status = 200, description = "Grade recorded", body = GradeResponse),
        (status = 403, description = "Instructor does not chair the course"),
        (status = 404, description = "Registration or instructor not found"),
        (status = 409, description = "Registration already graded or marked absent"),
        (status = 422, description = "Grade outside 0-10")
    ),
    tag = "Final exams"
)]
pub async fn grade(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<GradeRequest>,
) -> Result<Json<GradeResponse>, ApiError> {
    let record = GradingService::record_final_grade(
        &state.db,
        state.policy,
        body.instructor_id,
        id,
        body.grade,
    )
    .await?;

    Ok(Json(record.into()))
}

/// Mark a registered student as absent from the exam
///
/// The instructor is taken from the body and is not matched against the token subject.
#[utoipa::path(
    post,
    path = "/exam-registrations/{id}/absent",
    params(
        ("id" = Uuid, Path, description = "Exam registration ID")
    ),
    request_body = AbsentRequest,
    responses(
        (status = 200, description = "Marked absent", body = ExamRegistrationResponse),
        (status = 403, description = "Instructor does not chair the course"),
        (status = 404, description = "Registration or instructor not found"),
        (status = 409, description = "Registration already graded or marked absent")
    ),
    tag = "Final exams"
)]
pub async fn absent(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<AbsentRequest>,
) -> Result<Json<ExamRegistrationResponse>, ApiError> {
    let registration = GradingService::mark_absent(&state.db, body.instructor_id, id).await?;

    Ok(Json(registration.into()))
}
