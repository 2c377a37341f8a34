// src/application/error.rs
use crate::{application::validation::FieldErrors, domain::errors::DomainError};
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(#[from] FieldErrors),
}

impl ApplicationError {
    /// Stable machine-readable code for the rejection.
    pub fn kind(&self) -> &'static str {
        match self {
            ApplicationError::Domain(DomainError::Validation(_))
            | ApplicationError::Validation(_) => "validation_error",
            ApplicationError::Domain(DomainError::BadRequest(_)) => "bad_request",
            ApplicationError::Domain(DomainError::Rule(_)) => "rule_violation",
            ApplicationError::Domain(DomainError::Parse(_)) => "parse_error",
            ApplicationError::Domain(DomainError::Persistence(_)) => "infrastructure_error",
        }
    }

    /// Whether the caller can fix the request and try again.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ApplicationError::Domain(DomainError::Persistence(_)))
    }
}
