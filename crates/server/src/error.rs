use crate::config::ConfigError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use database::ServiceError;
use log::error;
use sea_orm::DbErr;
use serde_json::json;
use thiserror::Error;

/// Error returned by the HTTP handlers, rendered as `{ "error": message }`
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("missing subject in token claims")]
    MissingSubject,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Service(err) => match err {
                ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
                ServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
                ServiceError::Forbidden(_) => StatusCode::FORBIDDEN,
                ServiceError::Conflict(_) => StatusCode::CONFLICT,
                ServiceError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
                ServiceError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::MissingSubject => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Storage details stay in the logs
        let message = match &self {
            ApiError::Service(ServiceError::Database(err)) => {
                error!("Database error: {err}");
                "internal server error".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Failures while starting the server
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("database error: {0}")]
    Database(#[from] DbErr),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("authentication setup failed: {0}")]
    Auth(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                ServiceError::not_found("course", Uuid::nil()),
                StatusCode::NOT_FOUND,
            ),
            (
                ServiceError::Validation("missing prerequisites".into()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (ServiceError::Forbidden("no".into()), StatusCode::FORBIDDEN),
            (ServiceError::Conflict("dup".into()), StatusCode::CONFLICT),
            (
                ServiceError::InvalidArgument("self".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                ServiceError::Database(DbErr::Custom("down".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).into_response().status(), status);
        }
    }
}
