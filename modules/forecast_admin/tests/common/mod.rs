#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use forecast_admin::ForecastAdmin;
use modkit::{ConfigProvider, DbModule, Module, ModuleCtxBuilder, RestfulModule};
use modkit_db::{ConnectOpts, DbHandle};
use serde_json::{json, Value};
use tower::ServiceExt;

pub const ADMIN: (&str, &str) = ("admin", "admin-pass");
pub const EMPLOYEE: (&str, &str) = ("erin", "employee-pass");
pub const REGULAR: (&str, &str) = ("rick", "regular-pass");

struct StaticConfig(Value);

impl ConfigProvider for StaticConfig {
    fn get_module_config(&self, module_name: &str) -> Option<&Value> {
        (module_name == "forecast_admin").then_some(&self.0)
    }
}

pub struct TestApp {
    pub router: Router,
    pub module: ForecastAdmin,
    pub admin_token: String,
    pub employee_token: String,
    pub regular_token: String,
    pub employee_id: i64,
    pub regular_id: i64,
}

pub fn module_config() -> Value {
    json!({
        "jwt_secret": "integration-secret",
        "bcrypt_cost": 4,
        "default_page_size": 2,
        "max_page_size": 5,
        "bootstrap_admin": {
            "username": ADMIN.0,
            "email": "admin@seacast.io",
            "password": ADMIN.1
        }
    })
}

/// Module on a fresh in-memory database with an admin, an employee and a regular user.
pub async fn setup() -> TestApp {
    setup_with(module_config()).await
}

pub async fn setup_with(config: Value) -> TestApp {
    let db = Arc::new(
        DbHandle::connect("sqlite::memory:", ConnectOpts::default())
            .await
            .unwrap(),
    );
    let ctx = ModuleCtxBuilder::new()
        .with_db(db.clone())
        .with_config_provider(Arc::new(StaticConfig(config)))
        .build()
        .for_module("forecast_admin");

    let module = ForecastAdmin::new();
    module.init(&ctx).await.unwrap();
    module.migrate(&db).await.unwrap();
    let router = module.register_rest(&ctx, Router::new()).unwrap();

    let admin_token = login(&router, ADMIN.0, ADMIN.1).await;
    let employee_id = create_user(&router, &admin_token, EMPLOYEE.0, EMPLOYEE.1, false, true).await;
    let regular_id = create_user(&router, &admin_token, REGULAR.0, REGULAR.1, false, false).await;
    let employee_token = login(&router, EMPLOYEE.0, EMPLOYEE.1).await;
    let regular_token = login(&router, REGULAR.0, REGULAR.1).await;

    TestApp {
        router,
        module,
        admin_token,
        employee_token,
        regular_token,
        employee_id,
        regular_id,
    }
}

pub async fn create_user(
    router: &Router,
    token: &str,
    username: &str,
    password: &str,
    is_admin: bool,
    is_employee: bool,
) -> i64 {
    let (status, body) = call(
        router,
        Method::POST,
        "/users",
        Some(token),
        Some(json!({
            "username": username,
            "email": format!("{username}@seacast.io"),
            "password": password,
            "is_admin": is_admin,
            "is_employee": is_employee
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["id"].as_i64().unwrap()
}

pub async fn try_login(router: &Router, username: &str, password: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(Method::POST)
        .uri("/users/login")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(format!("username={username}&password={password}")))
        .unwrap();
    send(router, req).await
}

pub async fn login(router: &Router, username: &str, password: &str) -> String {
    let (status, body) = try_login(router, username, password).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["token_type"], "bearer");
    body["access_token"].as_str().unwrap().to_string()
}

/// JSON request with an optional bearer token. An empty response body reads as `Null`.
pub async fn call(
    router: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let req = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    send(router, req).await
}

async fn send(router: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = router.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(
            String::from_utf8_lossy(&bytes).into_owned(),
        ))
    };
    (status, body)
}

pub async fn create(router: &Router, token: &str, uri: &str, body: Value) -> i64 {
    let (status, created) = call(router, Method::POST, uri, Some(token), Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "POST {uri}: {created}");
    created["id"].as_i64().unwrap()
}

pub fn square(lon: f64, lat: f64) -> Value {
    json!({
        "type": "Polygon",
        "coordinates": [[[lon, lat], [lon + 1.0, lat], [lon + 1.0, lat + 1.0], [lon, lat + 1.0], [lon, lat]]]
    })
}
