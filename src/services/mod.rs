use thiserror::Error;
use validator::ValidationErrors;

use crate::backend::errors::BackendError;
use crate::domain::types::TypeConstraintError;

pub mod auth;
pub mod profile;
pub mod search;

/// Errors surfaced by the application service layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found")]
    NotFound,

    #[error("Form validation error: {0}")]
    Form(String),

    #[error("Type constraint error: {0}")]
    TypeConstraint(String),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<TypeConstraintError> for ServiceError {
    fn from(err: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(err.to_string())
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(err: ValidationErrors) -> Self {
        ServiceError::Form(err.to_string())
    }
}
