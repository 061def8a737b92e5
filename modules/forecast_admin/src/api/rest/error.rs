use axum::http::StatusCode;
use modkit::api::problem::{Problem, ProblemResponse, ValidationError};
use modkit::current_request_id;

use crate::domain::error::DomainError;

/// Helper to create a ProblemResponse with less boilerplate
pub fn from_parts(
    status: StatusCode,
    code: &str,
    title: &str,
    detail: impl Into<String>,
    instance: &str,
) -> ProblemResponse {
    let problem = Problem::new(status, title, detail)
        .with_type(format!("https://errors.seacast.io/{}", code))
        .with_code(code)
        .with_instance(instance);

    let problem = if let Some(id) = tracing::Span::current().id() {
        problem.with_trace_id(id.into_u64().to_string())
    } else {
        problem
    };
    let problem = match current_request_id() {
        Some(id) => problem.with_request_id(id),
        None => problem,
    };

    ProblemResponse(problem)
}

/// Map domain error to RFC9457 ProblemResponse
pub fn map_domain_error(e: &DomainError, instance: &str) -> ProblemResponse {
    match e {
        DomainError::NotFound { .. } => from_parts(
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Not found",
            e.to_string(),
            instance,
        ),
        DomainError::InvalidCredentials => from_parts(
            StatusCode::UNAUTHORIZED,
            "AUTH_INVALID_CREDENTIALS",
            "Unauthorized",
            e.to_string(),
            instance,
        ),
        DomainError::TokenExpired => from_parts(
            StatusCode::UNAUTHORIZED,
            "AUTH_TOKEN_EXPIRED",
            "Unauthorized",
            e.to_string(),
            instance,
        ),
        DomainError::InvalidToken | DomainError::Unauthenticated { .. } => from_parts(
            StatusCode::UNAUTHORIZED,
            "AUTH_UNAUTHENTICATED",
            "Unauthorized",
            e.to_string(),
            instance,
        ),
        DomainError::PermissionDenied { .. } => from_parts(
            StatusCode::FORBIDDEN,
            "FORBIDDEN",
            "Forbidden",
            e.to_string(),
            instance,
        ),
        DomainError::AlreadyExists { .. } | DomainError::Conflict { .. } => from_parts(
            StatusCode::CONFLICT,
            "CONFLICT",
            "Conflict",
            e.to_string(),
            instance,
        ),
        DomainError::Validation { field, message } => {
            let mut resp = from_parts(
                StatusCode::BAD_REQUEST,
                "VALIDATION",
                "Validation error",
                e.to_string(),
                instance,
            );
            resp.0 = resp
                .0
                .with_errors(vec![ValidationError::at(field, message.clone())]);
            resp
        }
        DomainError::ContractInactive { .. } => from_parts(
            StatusCode::BAD_REQUEST,
            "CONTRACT_INACTIVE",
            "Contract not usable",
            e.to_string(),
            instance,
        ),
        DomainError::ContractNotStarted { .. } => from_parts(
            StatusCode::BAD_REQUEST,
            "CONTRACT_NOT_STARTED",
            "Contract not usable",
            e.to_string(),
            instance,
        ),
        DomainError::ContractExpired { .. } => from_parts(
            StatusCode::BAD_REQUEST,
            "CONTRACT_EXPIRED",
            "Contract not usable",
            e.to_string(),
            instance,
        ),
        DomainError::Database { .. } => {
            // Log the internal error details but don't expose them to the client
            tracing::error!(error = ?e, "Database error occurred");
            from_parts(
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_DB",
                "Internal error",
                "An internal database error occurred",
                instance,
            )
        }
        DomainError::Internal { .. } => {
            tracing::error!(error = ?e, "Internal error occurred");
            from_parts(
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL",
                "Internal error",
                "An internal error occurred",
                instance,
            )
        }
    }
}
