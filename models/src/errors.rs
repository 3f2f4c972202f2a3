// models/src/errors.rs

pub use thiserror::Error;

pub type ClinicResult<T> = Result<T, ClinicError>;

#[derive(Debug, Error)]
pub enum ClinicError {
    #[error("{entity} with id {id} was not found")]
    NotFound { entity: &'static str, id: i32 },
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("An internal error occurred: {0}")]
    Internal(String),
}

impl ClinicError {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        ClinicError::NotFound { entity, id }
    }

    /// True for the absent-id failure mode of `update`/`delete`.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClinicError::NotFound { .. })
    }
}

/// Caller-side form validation failures. These are resolved locally (the form
/// re-renders with inline messages) and never reach a store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
    #[error("duration must be a positive number of minutes")]
    InvalidDuration,
}
