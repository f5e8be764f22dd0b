use crate::{
    AppState,
    dtos::prerequisite::{PrerequisiteQuery, PrerequisiteRequest, PrerequisiteResponse},
    error::ApiError,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use database::{
    entities::courses,
    services::{prerequisite::PrerequisiteService, records},
};
use uuid::Uuid;

/// List the prerequisite edges of a course in declaration order
#[utoipa::path(
    get,
    path = "/courses/{course_id}/prerequisites",
    params(
        ("course_id" = Uuid, Path, description = "Course ID"),
        PrerequisiteQuery
    ),
    responses(
        (status = 200, description = "Prerequisite edges", body = Vec<PrerequisiteResponse>),
        (status = 404, description = "Course not found")
    ),
    tag = "Prerequisites"
)]
pub async fn list(
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
    Query(query): Query<PrerequisiteQuery>,
) -> Result<Json<Vec<PrerequisiteResponse>>, ApiError> {
    records::require::<courses::Entity, _>(&state.db, course_id, "course").await?;
    let edges = PrerequisiteService::edges_for(&state.db, course_id, query.kind).await?;

    Ok(Json(edges.into_iter().map(Into::into).collect()))
}

/// Make another course a prerequisite of this one
#[utoipa::path(
    post,
    path = "/courses/{course_id}/prerequisites",
    params(
        ("course_id" = Uuid, Path, description = "Course ID")
    ),
    request_body = PrerequisiteRequest,
    responses(
        (status = 201, description = "Edge created", body = PrerequisiteResponse),
        (status = 400, description = "Self reference or cycle"),
        (status = 404, description = "Course not found"),
        (status = 409, description = "Edge already exists")
    ),
    tag = "Prerequisites"
)]
pub async fn add(
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
    Json(body): Json<PrerequisiteRequest>,
) -> Result<(StatusCode, Json<PrerequisiteResponse>), ApiError> {
    let edge =
        PrerequisiteService::add_edge(&state.db, course_id, body.required_course_id, body.kind)
            .await?;

    Ok((StatusCode::CREATED, Json(edge.into())))
}

/// Delete a prerequisite edge
#[utoipa::path(
    delete,
    path = "/prerequisites/{id}",
    params(
        ("id" = Uuid, Path, description = "Prerequisite edge ID")
    ),
    responses(
        (status = 204, description = "Edge deleted"),
        (status = 404, description = "Edge not found")
    ),
    tag = "Prerequisites"
)]
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    PrerequisiteService::remove_edge(&state.db, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
