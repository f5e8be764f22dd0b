use crate::{
    AppState,
    dtos::enrollment::{AbsencesRequest, EnrollRequest, EnrollmentResponse, StatusRequest},
    error::ApiError,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::services::enrollment::EnrollmentService;
use uuid::Uuid;

/// Enroll a student in a course
#[utoipa::path(
    post,
    path = "/students/{student_id}/enrollments",
    params(
        ("student_id" = Uuid, Path, description = "Student ID")
    ),
    request_body = EnrollRequest,
    responses(
        (status = 201, description = "Enrollment created", body = EnrollmentResponse),
        (status = 403, description = "Course is outside the student's career"),
        (status = 404, description = "Student, course or section not found"),
        (status = 409, description = "Student is already enrolled in the course"),
        (status = 422, description = "Missing prerequisites or section of another course")
    ),
    tag = "Enrollments"
)]
pub async fn enroll(
    State(state): State<AppState>,
    Path(student_id): Path<Uuid>,
    Json(body): Json<EnrollRequest>,
) -> Result<(StatusCode, Json<EnrollmentResponse>), ApiError> {
    let enrollment =
        EnrollmentService::enroll(&state.db, student_id, body.course_id, body.section_id).await?;

    Ok((StatusCode::CREATED, Json(enrollment.into())))
}

/// List every enrollment record of a student, oldest first
#[utoipa::path(
    get,
    path = "/students/{student_id}/enrollments",
    params(
        ("student_id" = Uuid, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Enrollment history", body = Vec<EnrollmentResponse>),
        (status = 404, description = "Student not found")
    ),
    tag = "Enrollments"
)]
pub async fn list_enrollments(
    State(state): State<AppState>,
    Path(student_id): Path<Uuid>,
) -> Result<Json<Vec<EnrollmentResponse>>, ApiError> {
    let records = EnrollmentService::enrollments_of_student(&state.db, student_id).await?;

    Ok(Json(records.into_iter().map(Into::into).collect()))
}

/// Move an enrollment along its lifecycle
#[utoipa::path(
    patch,
    path = "/enrollments/{id}/status",
    params(
        ("id" = Uuid, Path, description = "Enrollment ID")
    ),
    request_body = StatusRequest,
    responses(
        (status = 200, description = "Status updated", body = EnrollmentResponse),
        (status = 404, description = "Enrollment not found"),
        (status = 422, description = "Transition not allowed")
    ),
    tag = "Enrollments"
)]
pub async fn set_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<StatusRequest>,
) -> Result<Json<EnrollmentResponse>, ApiError> {
    let enrollment = EnrollmentService::set_status(&state.db, id, body.status).await?;

    Ok(Json(enrollment.into()))
}

/// Add absences to an in-progress enrollment
#[utoipa::path(
    post,
    path = "/enrollments/{id}/absences",
    params(
        ("id" = Uuid, Path, description = "Enrollment ID")
    ),
    request_body = AbsencesRequest,
    responses(
        (status = 200, description = "Absences recorded", body = EnrollmentResponse),
        (status = 404, description = "Enrollment not found"),
        (status = 422, description = "Enrollment is no longer in progress")
    ),
    tag = "Enrollments"
)]
pub async fn record_absences(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<AbsencesRequest>,
) -> Result<Json<EnrollmentResponse>, ApiError> {
    let enrollment = EnrollmentService::record_absences(&state.db, id, body.count).await?;

    Ok(Json(enrollment.into()))
}
