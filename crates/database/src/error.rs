use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

/// Outcome of a rejected rules-engine operation.
///
/// Every variant except `Database` is a definite business-rule result and is
/// never retried. Messages are safe to show to the student.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    InvalidArgument(String),

    /// Storage failures are propagated unchanged
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl ServiceError {
    pub fn not_found(entity: &'static str, id: Uuid) -> Self {
        Self::NotFound { entity, id }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
