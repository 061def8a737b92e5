//! RFC 9457 problem documents rendered as `application/problem+json`.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

/// Error body of every failed REST call.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(title = "Problem", description = "RFC 9457 Problem Details for HTTP APIs")]
pub struct Problem {
    /// Documentation URL of the error code, `about:blank` when there is none.
    #[serde(rename = "type")]
    pub type_url: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    /// Request path the problem occurred on.
    pub instance: String,
    /// Stable machine-readable code, e.g. `NOT_FOUND` or `CONTRACT_EXPIRED`.
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
    /// Field-level details, only set for validation failures.
    pub errors: Option<Vec<ValidationError>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(title = "ValidationError")]
pub struct ValidationError {
    pub detail: String,
    /// JSON Pointer into the request body, e.g. `/geom`.
    pub pointer: String,
}

impl ValidationError {
    /// Error on a top-level body field.
    pub fn at(field: &str, detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
            pointer: format!("/{}", field.trim_start_matches('/')),
        }
    }
}

impl Problem {
    pub fn new(status: StatusCode, title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            type_url: "about:blank".to_string(),
            title: title.into(),
            status: status.as_u16(),
            detail: detail.into(),
            instance: String::new(),
            code: String::new(),
            request_id: None,
            trace_id: None,
            errors: None,
        }
    }

    pub fn with_type(mut self, type_url: impl Into<String>) -> Self {
        self.type_url = type_url.into();
        self
    }

    pub fn with_instance(mut self, uri: impl Into<String>) -> Self {
        self.instance = uri.into();
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn with_request_id(mut self, id: impl Into<String>) -> Self {
        self.request_id = Some(id.into());
        self
    }

    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    pub fn with_errors(mut self, errors: Vec<ValidationError>) -> Self {
        self.errors = Some(errors);
        self
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

/// `Problem` as an axum response.
#[derive(Debug, Clone)]
pub struct ProblemResponse(pub Problem);

impl From<Problem> for ProblemResponse {
    fn from(p: Problem) -> Self {
        Self(p)
    }
}

impl IntoResponse for ProblemResponse {
    fn into_response(self) -> Response {
        let status = self.0.status_code();
        let mut resp = (status, axum::Json(self.0)).into_response();
        resp.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(APPLICATION_PROBLEM_JSON),
        );
        resp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn response_carries_status_content_type_and_body() {
        let problem = Problem::new(StatusCode::CONFLICT, "Conflict", "Port name already exists")
            .with_code("CONFLICT")
            .with_instance("/ports");
        let resp = ProblemResponse(problem).into_response();

        assert_eq!(resp.status(), StatusCode::CONFLICT);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            APPLICATION_PROBLEM_JSON
        );

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["type"], "about:blank");
        assert_eq!(body["code"], "CONFLICT");
        assert_eq!(body["instance"], "/ports");
        assert!(body.get("trace_id").is_none());
        assert!(body.get("request_id").is_none());
    }

    #[test]
    fn request_id_is_serialized_when_set() {
        let p = Problem::new(StatusCode::NOT_FOUND, "Not found", "Port 9 not found")
            .with_request_id("V1StGXR8_Z5jdHi6B-myT");
        let body = serde_json::to_value(&p).unwrap();
        assert_eq!(body["request_id"], "V1StGXR8_Z5jdHi6B-myT");
    }

    #[test]
    fn validation_errors_point_at_fields() {
        let p = Problem::new(StatusCode::BAD_REQUEST, "Validation error", "bad geometry")
            .with_errors(vec![ValidationError::at("geom", "longitude out of range")]);

        let errors = p.errors.unwrap();
        assert_eq!(errors[0].pointer, "/geom");
        assert_eq!(ValidationError::at("/email", "x").pointer, "/email");
    }

    #[test]
    fn unknown_status_falls_back_to_500() {
        let mut p = Problem::new(StatusCode::OK, "odd", "odd");
        p.status = 1000;
        assert_eq!(p.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
