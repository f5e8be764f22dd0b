use crate::{
    AppState,
    dtos::schedule::{ScheduleRequest, ScheduleResponse},
    error::ApiError,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::services::schedule::ScheduleService;
use uuid::Uuid;

/// List a course's schedule blocks by day and start time
#[utoipa::path(
    get,
    path = "/courses/{course_id}/schedules",
    params(
        ("course_id" = Uuid, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Schedule blocks", body = Vec<ScheduleResponse>),
        (status = 404, description = "Course not found")
    ),
    tag = "Schedules"
)]
pub async fn list(
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
) -> Result<Json<Vec<ScheduleResponse>>, ApiError> {
    let blocks = ScheduleService::blocks_for(&state.db, course_id).await?;

    Ok(Json(blocks.into_iter().map(Into::into).collect()))
}

/// Create a schedule block
#[utoipa::path(
    post,
    path = "/schedules",
    request_body = ScheduleRequest,
    responses(
        (status = 201, description = "Block created", body = ScheduleResponse),
        (status = 404, description = "Course, section or instructor not found"),
        (status = 409, description = "Overlaps an existing block"),
        (status = 422, description = "Invalid time range or section")
    ),
    tag = "Schedules"
)]
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<ScheduleRequest>,
) -> Result<(StatusCode, Json<ScheduleResponse>), ApiError> {
    let block = ScheduleService::create_schedule(&state.db, body.into()).await?;

    Ok((StatusCode::CREATED, Json(block.into())))
}

/// Replace a schedule block
#[utoipa::path(
    put,
    path = "/schedules/{id}",
    params(
        ("id" = Uuid, Path, description = "Schedule block ID")
    ),
    request_body = ScheduleRequest,
    responses(
        (status = 200, description = "Block updated", body = ScheduleResponse),
        (status = 404, description = "Block or a referenced entity not found"),
        (status = 409, description = "Overlaps another block"),
        (status = 422, description = "Invalid time range or section")
    ),
    tag = "Schedules"
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<ScheduleRequest>,
) -> Result<Json<ScheduleResponse>, ApiError> {
    let block = ScheduleService::update_schedule(&state.db, id, body.into()).await?;

    Ok(Json(block.into()))
}
