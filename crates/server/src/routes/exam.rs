use crate::{
    AppState,
    dtos::exam::{ExamRegistrationRequest, ExamRegistrationResponse},
    error::ApiError,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::services::final_exam::FinalExamService;
use uuid::Uuid;

/// Register one of the student's enrollments for a final-exam session
///
/// The student is taken from the path and is not matched against the token subject.
#[utoipa::path(
    post,
    path = "/students/{student_id}/exam-registrations",
    params(
        ("student_id" = Uuid, Path, description = "Student ID")
    ),
    request_body = ExamRegistrationRequest,
    responses(
        (status = 201, description = "Registered for the exam", body = ExamRegistrationResponse),
        (status = 403, description = "Enrollment belongs to another student"),
        (status = 404, description = "Enrollment or exam session not found"),
        (status = 409, description = "Already registered for this session"),
        (status = 422, description = "Course not completed or final prerequisites missing")
    ),
    tag = "Final exams"
)]
pub async fn register(
    State(state): State<AppState>,
    Path(student_id): Path<Uuid>,
    Json(body): Json<ExamRegistrationRequest>,
) -> Result<(StatusCode, Json<ExamRegistrationResponse>), ApiError> {
    let registration = FinalExamService::register(
        &state.db,
        student_id,
        body.enrollment_id,
        body.exam_session_id,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(registration.into())))
}
