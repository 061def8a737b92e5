//! Bearer-token authentication as an axum extractor.

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use modkit::api::problem::ProblemResponse;
use tracing::{debug, error};

use crate::api::rest::error::{from_parts, map_domain_error};
use crate::contract::model::User;
use crate::domain::service::UsersService;

/// The authenticated user behind the request's `Authorization: Bearer` token.
/// Needs `Extension<Arc<UsersService>>` on the route.
#[derive(Debug, Clone)]
pub struct Requester(pub User);

impl<S> FromRequestParts<S> for Requester
where
    S: Send + Sync,
{
    type Rejection = ProblemResponse;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let instance = parts.uri.path().to_string();

        let token = match modkit::bearer_token(&parts.headers) {
            Ok(token) => token.to_string(),
            Err(e) => {
                debug!(error = %e, "request without usable bearer token");
                return Err(from_parts(
                    StatusCode::UNAUTHORIZED,
                    "AUTH_UNAUTHENTICATED",
                    "Unauthorized",
                    e.to_string(),
                    &instance,
                ));
            }
        };

        let Some(users) = parts.extensions.get::<Arc<UsersService>>().cloned() else {
            error!("UsersService extension missing on an authenticated route");
            return Err(from_parts(
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL",
                "Internal error",
                "authentication is not configured",
                &instance,
            ));
        };

        users
            .authenticate(&token)
            .await
            .map(Requester)
            .map_err(|e| map_domain_error(&e, &instance))
    }
}
