mod common;

use axum::http::{Method, StatusCode};
use common::{call, login, setup, try_login, ADMIN, EMPLOYEE, REGULAR};
use forecast_admin::domain::ports::TokenCodec;
use forecast_admin::infra::security::JwtCodec;
use serde_json::json;

#[tokio::test]
async fn login_issues_bearer_token_for_valid_credentials() {
    let app = setup().await;

    let (status, me) = call(&app.router, Method::GET, "/users/me", Some(&app.admin_token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["username"], ADMIN.0);
    assert_eq!(me["is_admin"], true);
    assert!(me.get("hashed_password").is_none());
}

#[tokio::test]
async fn login_rejects_wrong_password_and_unknown_user() {
    let app = setup().await;

    let (status, body) = try_login(&app.router, ADMIN.0, "nope").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "AUTH_INVALID_CREDENTIALS");

    let (status, _) = try_login(&app.router, "ghost", "whatever").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn requests_without_valid_token_are_unauthorized() {
    let app = setup().await;

    let (status, body) = call(&app.router, Method::GET, "/users/me", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["status"], 401);

    let (status, body) = call(&app.router, Method::GET, "/users/me", Some("garbage"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "AUTH_UNAUTHENTICATED");
}

#[tokio::test]
async fn expired_token_is_reported_as_expired() {
    let app = setup().await;

    // Signed with the module's secret, expired a minute ago.
    let codec = JwtCodec::new(
        "integration-secret",
        jsonwebtoken::Algorithm::HS256,
        chrono::Duration::minutes(-1),
    );
    let expired = codec.issue("1").unwrap();

    let (status, body) = call(&app.router, Method::GET, "/users/me", Some(&expired), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "AUTH_TOKEN_EXPIRED");
}

#[tokio::test]
async fn token_of_deleted_user_stops_working() {
    let app = setup().await;

    let (status, _) = call(
        &app.router,
        Method::DELETE,
        &format!("/users/{}", app.regular_id),
        Some(&app.admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = call(&app.router, Method::GET, "/users/me", Some(&app.regular_token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn only_admin_creates_users_and_duplicates_conflict() {
    let app = setup().await;
    let new_user = json!({
        "username": "nina",
        "email": "nina@seacast.io",
        "password": "pw"
    });

    let (status, _) = call(&app.router, Method::POST, "/users", Some(&app.employee_token), Some(new_user.clone())).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, created) = call(&app.router, Method::POST, "/users", Some(&app.admin_token), Some(new_user.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["is_admin"], false);
    assert_eq!(created["is_employee"], false);

    let (status, body) = call(&app.router, Method::POST, "/users", Some(&app.admin_token), Some(new_user)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "CONFLICT");

    let (status, body) = call(
        &app.router,
        Method::POST,
        "/users",
        Some(&app.admin_token),
        Some(json!({"username": "other", "email": "nina@seacast.io", "password": "pw"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT, "{body}");
}

#[tokio::test]
async fn malformed_email_is_a_validation_error() {
    let app = setup().await;

    let (status, body) = call(
        &app.router,
        Method::POST,
        "/users",
        Some(&app.admin_token),
        Some(json!({"username": "bad", "email": "not-an-email", "password": "pw"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["pointer"], "/email");
}

#[tokio::test]
async fn users_see_themselves_but_not_others() {
    let app = setup().await;

    let (status, me) = call(
        &app.router,
        Method::GET,
        &format!("/users/{}", app.regular_id),
        Some(&app.regular_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["username"], REGULAR.0);

    let (status, _) = call(
        &app.router,
        Method::GET,
        &format!("/users/{}", app.employee_id),
        Some(&app.regular_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = call(&app.router, Method::GET, "/users", Some(&app.regular_token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, all) = call(&app.router, Method::GET, "/users", Some(&app.admin_token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 3);

    let (status, _) = call(&app.router, Method::GET, "/users/9999", Some(&app.admin_token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_admin_update_only_changes_own_password() {
    let app = setup().await;
    let own = format!("/users/{}", app.regular_id);

    let (status, _) = call(&app.router, Method::PUT, &own, Some(&app.regular_token), Some(json!({"email": "x@y.io"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call(
        &app.router,
        Method::PUT,
        &format!("/users/{}", app.employee_id),
        Some(&app.regular_token),
        Some(json!({"password": "hijack"})),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, updated) = call(
        &app.router,
        Method::PUT,
        &own,
        Some(&app.regular_token),
        Some(json!({"password": "fresh-pass", "is_admin": true})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["is_admin"], false);

    let (status, _) = try_login(&app.router, REGULAR.0, REGULAR.1).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    login(&app.router, REGULAR.0, "fresh-pass").await;
}

#[tokio::test]
async fn admin_update_requires_every_field() {
    let app = setup().await;
    let uri = format!("/users/{}", app.employee_id);

    let (status, body) = call(
        &app.router,
        Method::PUT,
        &uri,
        Some(&app.admin_token),
        Some(json!({"username": "erin2"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("email"));

    let (status, updated) = call(
        &app.router,
        Method::PUT,
        &uri,
        Some(&app.admin_token),
        Some(json!({
            "username": "erin2",
            "email": "erin2@seacast.io",
            "password": "new-pass",
            "is_admin": false,
            "is_employee": false
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["username"], "erin2");
    assert_eq!(updated["is_employee"], false);
    login(&app.router, "erin2", "new-pass").await;

    let (status, _) = call(
        &app.router,
        Method::PUT,
        "/users/9999",
        Some(&app.admin_token),
        Some(json!({
            "username": "ghost",
            "email": "ghost@seacast.io",
            "password": "pw",
            "is_admin": false,
            "is_employee": false
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn password_endpoint_allows_admin_or_self() {
    let app = setup().await;

    let (status, _) = call(
        &app.router,
        Method::PUT,
        &format!("/users/{}/password", app.employee_id),
        Some(&app.employee_token),
        Some(json!({"password": "rotated"})),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    login(&app.router, EMPLOYEE.0, "rotated").await;

    let (status, _) = call(
        &app.router,
        Method::PUT,
        &format!("/users/{}/password", app.regular_id),
        Some(&app.employee_token),
        Some(json!({"password": "rotated"})),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = call(
        &app.router,
        Method::PUT,
        "/users/9999/password",
        Some(&app.admin_token),
        Some(json!({"password": "rotated"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_is_admin_only_and_reports_missing_users() {
    let app = setup().await;
    let uri = format!("/users/{}", app.employee_id);

    let (status, _) = call(&app.router, Method::DELETE, &uri, Some(&app.regular_token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = call(&app.router, Method::DELETE, &uri, Some(&app.admin_token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = call(&app.router, Method::DELETE, &uri, Some(&app.admin_token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn bootstrap_admin_is_created_once() {
    let app = setup().await;
    let services = app.module.services().unwrap();

    let created = services
        .users
        .ensure_admin(ADMIN.0, "admin@seacast.io", "another")
        .await
        .unwrap();
    assert!(!created);
    login(&app.router, ADMIN.0, ADMIN.1).await;
}
