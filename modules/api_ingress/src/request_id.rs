use axum::http::{HeaderName, Request};
use axum::{body::Body, middleware::Next, response::Response};
use tower_http::request_id::{MakeRequestId, RequestId};

/// Request id visible to handlers through `Extension<XRequestId>`.
#[derive(Clone, Debug)]
pub struct XRequestId(pub String);

pub fn header() -> HeaderName {
    HeaderName::from_static("x-request-id")
}

#[derive(Clone, Default)]
pub struct MakeReqId;

impl MakeRequestId for MakeReqId {
    fn make_request_id<B>(&mut self, _req: &Request<B>) -> Option<RequestId> {
        let id = nanoid::nanoid!();
        Some(RequestId::new(id.parse().ok()?))
    }
}

/// Current request id: the one `SetRequestIdLayer` stored, else the raw header.
pub fn request_id_of<B>(req: &Request<B>) -> String {
    req.extensions()
        .get::<RequestId>()
        .and_then(|rid| rid.header_value().to_str().ok())
        .or_else(|| req.headers().get(header()).and_then(|v| v.to_str().ok()))
        .map(str::to_owned)
        .unwrap_or_else(|| "n/a".to_string())
}

/// Middleware that stores request_id in Request.extensions, records it in the current span
/// and exposes it to handlers through `modkit::current_request_id`.
pub async fn push_req_id_to_extensions(mut req: Request<Body>, next: Next) -> Response {
    let rid = request_id_of(&req);

    req.extensions_mut().insert(XRequestId(rid.clone()));
    tracing::Span::current().record("request_id", tracing::field::display(&rid));

    modkit::with_request_id(rid, next.run(req)).await
}
