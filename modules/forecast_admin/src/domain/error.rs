use thiserror::Error;

use crate::domain::repo::StorageViolation;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: i32 },

    #[error("Not authenticated: {reason}")]
    Unauthenticated { reason: String },

    #[error("Incorrect user or password")]
    InvalidCredentials,

    #[error("Token has expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Permission denied: {message}")]
    PermissionDenied { message: String },

    #[error("{resource} with {field} '{value}' already exists")]
    AlreadyExists {
        resource: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Validation failed: {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Contract {id} is not active")]
    ContractInactive { id: i32 },

    #[error("Contract {id} has not started yet")]
    ContractNotStarted { id: i32 },

    #[error("Contract {id} has expired")]
    ContractExpired { id: i32 },

    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn not_found(resource: &'static str, id: i32) -> Self {
        Self::NotFound { resource, id }
    }

    pub fn unauthenticated(reason: impl Into<String>) -> Self {
        Self::Unauthenticated {
            reason: reason.into(),
        }
    }

    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self::PermissionDenied {
            message: message.into(),
        }
    }

    pub fn already_exists(
        resource: &'static str,
        field: &'static str,
        value: impl Into<String>,
    ) -> Self {
        Self::AlreadyExists {
            resource,
            field,
            value: value.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Classify a repository failure: constraint violations become client errors,
    /// anything else is an internal database error.
    pub fn storage(err: anyhow::Error) -> Self {
        match err.downcast_ref::<StorageViolation>() {
            Some(StorageViolation::Unique(detail)) => Self::Conflict {
                message: format!("unique constraint violated: {detail}"),
            },
            Some(StorageViolation::ForeignKey(detail)) => {
                Self::validation("reference", format!("referenced record does not exist: {detail}"))
            }
            None => Self::database(format!("{err:#}")),
        }
    }
}
