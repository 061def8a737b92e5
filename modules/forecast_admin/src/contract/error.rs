use thiserror::Error;

/// Errors that are safe to expose to other modules
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ForecastAdminError {
    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: i32 },

    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal error")]
    Internal,
}

impl ForecastAdminError {
    pub fn not_found(resource: &'static str, id: i32) -> Self {
        Self::NotFound { resource, id }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn internal() -> Self {
        Self::Internal
    }
}

impl From<crate::domain::error::DomainError> for ForecastAdminError {
    fn from(domain_error: crate::domain::error::DomainError) -> Self {
        use crate::domain::error::DomainError::*;
        match domain_error {
            NotFound { resource, id } => Self::not_found(resource, id),
            e @ (Unauthenticated { .. } | InvalidCredentials | TokenExpired | InvalidToken) => {
                Self::unauthorized(e.to_string())
            }
            PermissionDenied { message } => Self::forbidden(message),
            e @ (AlreadyExists { .. } | Conflict { .. }) => Self::conflict(e.to_string()),
            e @ (Validation { .. }
            | ContractInactive { .. }
            | ContractNotStarted { .. }
            | ContractExpired { .. }) => Self::validation(e.to_string()),
            Database { .. } | Internal { .. } => Self::internal(),
        }
    }
}
