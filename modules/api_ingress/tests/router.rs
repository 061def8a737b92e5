use std::sync::Arc;

use axum::{
    body::{Body, Bytes},
    http::{header, Method, Request, StatusCode},
    routing::{get, post},
    Router,
};
use modkit::{Module, ModuleCtxBuilder};
use tower::util::ServiceExt;

use api_ingress::{ApiIngress, ApiIngressConfig};

fn config(cors_enabled: bool, body_limit_bytes: usize) -> ApiIngressConfig {
    ApiIngressConfig {
        bind_addr: "127.0.0.1:0".into(),
        cors_enabled,
        timeout_sec: 30,
        body_limit_bytes,
    }
}

fn routes() -> Router {
    Router::new()
        .route("/ping", get(|| async { "pong" }))
        .route("/echo", post(|body: Bytes| async move { body }))
}

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let app = ApiIngress::new(config(false, 1024)).build_router(Router::new());

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn module_routes_are_merged() {
    let app = ApiIngress::new(config(false, 1024)).build_router(routes());

    let response = app
        .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let app = ApiIngress::new(config(false, 16)).build_router(routes());
    let payload = vec![b'x'; 64];

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/echo")
                .header(header::CONTENT_LENGTH, payload.len())
                .body(Body::from(payload))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn cors_headers_only_when_enabled() {
    let request = || {
        Request::builder()
            .uri("/ping")
            .header(header::ORIGIN, "https://portal.example.org")
            .body(Body::empty())
            .unwrap()
    };

    let with_cors = ApiIngress::new(config(true, 1024))
        .build_router(routes())
        .oneshot(request())
        .await
        .unwrap();
    assert!(with_cors
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));

    let without_cors = ApiIngress::new(config(false, 1024))
        .build_router(routes())
        .oneshot(request())
        .await
        .unwrap();
    assert!(!without_cors
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}

#[tokio::test]
async fn init_applies_module_section() {
    struct Sections(serde_json::Value);
    impl modkit::ConfigProvider for Sections {
        fn get_module_config(&self, module_name: &str) -> Option<&serde_json::Value> {
            (module_name == api_ingress::MODULE_NAME).then_some(&self.0)
        }
    }

    let ingress = ApiIngress::default();
    let ctx = ModuleCtxBuilder::new()
        .with_config_provider(Arc::new(Sections(serde_json::json!({
            "bind_addr": "0.0.0.0:9999",
            "cors_enabled": true
        }))))
        .build()
        .for_module(api_ingress::MODULE_NAME);

    ingress.init(&ctx).await.unwrap();
    let cfg = ingress.config();
    assert_eq!(cfg.bind_addr, "0.0.0.0:9999");
    assert!(cfg.cors_enabled);
}

#[tokio::test]
async fn serves_until_shutdown() {
    let ingress = ApiIngress::new(config(false, 1024));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let router = ingress.build_router(routes());

    let (tx, rx) = tokio::sync::oneshot::channel::<()>();
    let server = tokio::spawn(async move {
        ingress
            .serve_with_listener(listener, router, async {
                let _ = rx.await;
            })
            .await
    });

    tx.send(()).unwrap();
    server.await.unwrap().unwrap();
}
