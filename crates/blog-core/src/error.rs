//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{resource} not found with {field} : '{value}'")]
    NotFound {
        resource: &'static str,
        field: &'static str,
        value: i64,
    },

    #[error("{0}")]
    InvalidRelationship(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Lookup by primary key found nothing.
    pub fn not_found(resource: &'static str, id: i64) -> Self {
        Self::NotFound {
            resource,
            field: "id",
            value: id,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Constraint(msg) => DomainError::ConstraintViolation(msg),
            RepoError::NotFound => DomainError::Internal("record vanished mid-operation".into()),
            RepoError::Connection(msg) | RepoError::Query(msg) => DomainError::Internal(msg),
        }
    }
}
