//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.

use std::fmt;

#[derive(Debug)]
pub enum ServiceError {
    /// Referenced record does not exist
    NotFound,
    /// A unique field collides with an existing record
    DuplicateKey(String),
    /// Deletion blocked because child records still reference the target
    HasDependents(String),
    /// Field-level rule violated before anything was persisted
    Validation(String),
    /// Operation requires a role the current session does not have
    Forbidden,
    /// Database connection failure
    Unavailable(String),
    /// Any other persistence-layer failure
    Database(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::NotFound => write!(f, "Record not found"),
            ServiceError::DuplicateKey(msg) => write!(f, "Duplicate key: {}", msg),
            ServiceError::HasDependents(msg) => write!(f, "Has dependents: {}", msg),
            ServiceError::Validation(msg) => write!(f, "Validation error: {}", msg),
            ServiceError::Forbidden => write!(f, "Operation not permitted for this role"),
            ServiceError::Unavailable(msg) => write!(f, "Database unavailable: {}", msg),
            ServiceError::Database(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self {
        match e {
            sea_orm::DbErr::Conn(err) => ServiceError::Unavailable(err.to_string()),
            sea_orm::DbErr::ConnectionAcquire(err) => ServiceError::Unavailable(err.to_string()),
            sea_orm::DbErr::RecordNotFound(_) => ServiceError::NotFound,
            other => ServiceError::Database(other.to_string()),
        }
    }
}
