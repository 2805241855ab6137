use thiserror::Error;

use crate::infrastructure::store::StoreError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
}

impl ServiceError {
    /// Machine-readable code reported in GraphQL error extensions.
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::Validation(_) => "VALIDATION",
            ServiceError::Conflict(_) => "CONFLICT",
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateTeam(_) | StoreError::DuplicatePlayer(_) => {
                ServiceError::Conflict(err.to_string())
            }
            StoreError::UnknownTeam(_) => ServiceError::Validation(err.to_string()),
        }
    }
}
