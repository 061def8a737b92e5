//! HTTP ingress: owns the outer router (health endpoint plus the shared middleware
//! stack) and serves it until shutdown.

use async_trait::async_trait;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use arc_swap::ArcSwap;
use axum::{body::Body, http::Request, middleware::from_fn, response::Response, routing::get, Router};
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{field::Empty, Span};

mod config;
pub mod request_id;
mod web;

pub use config::ApiIngressConfig;

pub const MODULE_NAME: &str = "api_ingress";

/// Ingress host. Configuration is swapped atomically so `init` can replace the
/// server-derived defaults with a module section.
pub struct ApiIngress {
    config: ArcSwap<ApiIngressConfig>,
}

impl Default for ApiIngress {
    fn default() -> Self {
        Self::new(ApiIngressConfig::default())
    }
}

impl ApiIngress {
    pub fn new(config: ApiIngressConfig) -> Self {
        Self {
            config: ArcSwap::from_pointee(config),
        }
    }

    /// Get the current configuration (cheap clone from ArcSwap)
    pub fn config(&self) -> ApiIngressConfig {
        (**self.config.load()).clone()
    }

    /// Wrap module routes with `/health` and the middleware stack.
    pub fn build_router(&self, routes: Router) -> Router {
        let config = self.config();
        let mut router = Router::new()
            .route("/health", get(web::health_check))
            .merge(routes);

        // Layers are added innermost first. Resulting order, outermost to innermost:
        // BodyLimit -> CORS -> Timeout -> SetRequestId -> PropagateRequestId -> Trace -> push_req_id_to_extensions
        let x_request_id = crate::request_id::header();

        router = router.layer(from_fn(crate::request_id::push_req_id_to_extensions));

        router = router.layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &Request<Body>| {
                    let rid = crate::request_id::request_id_of(req);
                    tracing::info_span!(
                        "http_request",
                        method = %req.method(),
                        uri = %req.uri().path(),
                        version = ?req.version(),
                        module = MODULE_NAME,
                        request_id = %rid,
                        status = Empty,
                        latency_ms = Empty
                    )
                })
                .on_response(|res: &Response, latency: Duration, span: &Span| {
                    span.record("status", res.status().as_u16());
                    span.record("latency_ms", latency.as_millis() as u64);
                    tracing::info!(status = res.status().as_u16(), "request completed");
                }),
        );

        router = router.layer(PropagateRequestIdLayer::new(x_request_id.clone()));
        router = router.layer(SetRequestIdLayer::new(
            x_request_id,
            crate::request_id::MakeReqId,
        ));

        router = router.layer(TimeoutLayer::new(Duration::from_secs(config.timeout_sec)));

        if config.cors_enabled {
            router = router.layer(CorsLayer::permissive());
        }

        router.layer(RequestBodyLimitLayer::new(config.body_limit_bytes))
    }

    /// Bind `bind_addr` and serve until `shutdown` resolves.
    pub async fn serve<F>(&self, router: Router, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let cfg = self.config();
        let addr: SocketAddr = cfg
            .bind_addr
            .parse()
            .with_context(|| format!("Invalid bind address '{}'", cfg.bind_addr))?;

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;
        self.serve_with_listener(listener, router, shutdown).await
    }

    /// Serve on an already bound listener.
    pub async fn serve_with_listener<F>(
        &self,
        listener: tokio::net::TcpListener,
        router: Router,
        shutdown: F,
    ) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if let Ok(addr) = listener.local_addr() {
            tracing::info!(%addr, "HTTP server bound");
        }

        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                shutdown.await;
                tracing::info!("HTTP server shutting down gracefully");
            })
            .await
            .context("HTTP server failed")
    }
}

#[async_trait]
impl modkit::Module for ApiIngress {
    async fn init(&self, ctx: &modkit::ModuleCtx) -> anyhow::Result<()> {
        if let Some(cfg) = ctx.module_config_opt::<ApiIngressConfig>()? {
            tracing::debug!(module = MODULE_NAME, bind_addr = %cfg.bind_addr, "using module config");
            self.config.store(Arc::new(cfg));
        }
        Ok(())
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
