//! `Authorization: Bearer <token>` parsing.

use axum::http::{header::AUTHORIZATION, HeaderMap};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BearerError {
    #[error("missing authorization header")]
    Missing,
    #[error("authorization header is not a bearer token")]
    Malformed,
}

/// Extract the bearer token from request headers. The scheme is case-insensitive.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, BearerError> {
    let raw = headers
        .get(AUTHORIZATION)
        .ok_or(BearerError::Missing)?
        .to_str()
        .map_err(|_| BearerError::Malformed)?;

    let (scheme, token) = raw.trim().split_once(' ').ok_or(BearerError::Malformed)?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(BearerError::Malformed);
    }
    let token = token.trim();
    if token.is_empty() {
        return Err(BearerError::Malformed);
    }
    Ok(token)
}
