pub mod config;
pub mod doc;
pub mod dtos;
pub mod error;
pub mod routes;
pub mod utils;

use axum::{
    Router,
    routing::{delete, get, patch, post, put},
};
use database::services::grading::GradingPolicy;
use doc::ApiDoc;
use routes::{
    auth, eligibility, enrollment, exam, grading, health, prerequisite, root, schedule,
};
use sea_orm::DatabaseConnection;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub policy: GradingPolicy,
}

/// Builds the HTTP application without any authentication layer
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root::root))
        .route("/health", get(health::health))
        .route("/auth", get(auth::auth))
        .route(
            "/students/{student_id}/enrollments",
            post(enrollment::enroll).get(enrollment::list_enrollments),
        )
        .route(
            "/students/{student_id}/eligibility/{course_id}",
            get(eligibility::evaluate),
        )
        .route(
            "/students/{student_id}/exam-registrations",
            post(exam::register),
        )
        .route("/enrollments/{id}/status", patch(enrollment::set_status))
        .route(
            "/enrollments/{id}/absences",
            post(enrollment::record_absences),
        )
        .route("/exam-registrations/{id}/grade", post(grading::grade))
        .route("/exam-registrations/{id}/absent", post(grading::absent))
        .route(
            "/courses/{course_id}/prerequisites",
            get(prerequisite::list).post(prerequisite::add),
        )
        .route("/prerequisites/{id}", delete(prerequisite::remove))
        .route("/courses/{course_id}/schedules", get(schedule::list))
        .route("/schedules", post(schedule::create))
        .route("/schedules/{id}", put(schedule::update))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CompressionLayer::new())
}
