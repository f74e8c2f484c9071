use thiserror::Error;

use crate::domain::types::TypeConstraintError;

/// Errors surfaced by the hosted backend boundary.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend rejected the request ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed backend response: {0}")]
    Decode(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("No authenticated session")]
    Unauthenticated,

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type BackendResult<T> = Result<T, BackendError>;

#[cfg(feature = "http")]
impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            BackendError::Decode(err.to_string())
        } else {
            BackendError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for BackendError {
    fn from(err: serde_json::Error) -> Self {
        BackendError::Decode(err.to_string())
    }
}

impl From<TypeConstraintError> for BackendError {
    fn from(err: TypeConstraintError) -> Self {
        BackendError::ValidationError(err.to_string())
    }
}
