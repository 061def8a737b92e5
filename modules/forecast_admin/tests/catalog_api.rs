mod common;

use axum::http::{Method, StatusCode};
use common::{call, create, setup};
use serde_json::json;

fn rotterdam() -> serde_json::Value {
    json!({"name": "Rotterdam", "country": "NL", "latitude": 51.95, "longitude": 4.14})
}

#[tokio::test]
async fn ports_are_readable_without_a_token() {
    let app = setup().await;
    let id = create(&app.router, &app.admin_token, "/ports", rotterdam()).await;

    let (status, ports) = call(&app.router, Method::GET, "/ports", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ports.as_array().unwrap().len(), 1);

    let (status, port) = call(&app.router, Method::GET, &format!("/ports/{id}"), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(port["name"], "Rotterdam");

    let (status, _) = call(&app.router, Method::GET, "/ports/4242", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn port_writes_require_admin() {
    let app = setup().await;

    let (status, _) = call(&app.router, Method::POST, "/ports", None, Some(rotterdam())).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = call(&app.router, Method::POST, "/ports", Some(&app.employee_token), Some(rotterdam())).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn port_names_are_unique_and_coordinates_checked() {
    let app = setup().await;
    create(&app.router, &app.admin_token, "/ports", rotterdam()).await;

    let (status, _) = call(&app.router, Method::POST, "/ports", Some(&app.admin_token), Some(rotterdam())).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = call(
        &app.router,
        Method::POST,
        "/ports",
        Some(&app.admin_token),
        Some(json!({"name": "Nowhere", "country": "XX", "latitude": 95.0, "longitude": 0.0})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["pointer"], "/latitude");
}

#[tokio::test]
async fn port_update_is_partial_and_delete_reports_missing() {
    let app = setup().await;
    let id = create(&app.router, &app.admin_token, "/ports", rotterdam()).await;
    create(
        &app.router,
        &app.admin_token,
        "/ports",
        json!({"name": "Antwerp", "country": "BE", "latitude": 51.26, "longitude": 4.4}),
    )
    .await;
    let uri = format!("/ports/{id}");

    let (status, port) = call(&app.router, Method::PUT, &uri, Some(&app.admin_token), Some(json!({"country": "Netherlands"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(port["country"], "Netherlands");
    assert_eq!(port["name"], "Rotterdam");
    assert_eq!(port["latitude"], 51.95);

    let (status, _) = call(&app.router, Method::PUT, &uri, Some(&app.admin_token), Some(json!({"name": "Antwerp"}))).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = call(&app.router, Method::DELETE, &uri, Some(&app.admin_token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = call(&app.router, Method::DELETE, &uri, Some(&app.admin_token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn hindcast_points_are_admin_only() {
    let app = setup().await;
    let body = json!({"latitude": 42.1, "longitude": 3.2, "url": "https://data.seacast.io/p1", "models": ["wave", "wind"]});

    let (status, _) = call(&app.router, Method::POST, "/hindcast-points", Some(&app.employee_token), Some(body.clone())).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = call(&app.router, Method::GET, "/hindcast-points", Some(&app.regular_token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let id = create(&app.router, &app.admin_token, "/hindcast-points", body).await;
    let (status, point) = call(&app.router, Method::GET, &format!("/hindcast-points/{id}"), Some(&app.admin_token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(point["models"], json!(["wave", "wind"]));
}

#[tokio::test]
async fn hindcast_point_update_keeps_unset_fields() {
    let app = setup().await;
    let id = create(
        &app.router,
        &app.admin_token,
        "/hindcast-points",
        json!({"latitude": 42.1, "longitude": 3.2, "url": "https://data.seacast.io/p1"}),
    )
    .await;
    let uri = format!("/hindcast-points/{id}");

    let (status, point) = call(&app.router, Method::PUT, &uri, Some(&app.admin_token), Some(json!({"models": ["swell"]}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(point["url"], "https://data.seacast.io/p1");
    assert_eq!(point["models"], json!(["swell"]));

    let (status, _) = call(&app.router, Method::PUT, &uri, Some(&app.admin_token), Some(json!({"longitude": -181.0}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call(&app.router, Method::PUT, "/hindcast-points/999", Some(&app.admin_token), Some(json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn downloaded_data_requires_existing_point() {
    let app = setup().await;

    let (status, body) = call(
        &app.router,
        Method::POST,
        "/downloaded-data",
        Some(&app.admin_token),
        Some(json!({"point_id": 77, "data": {"hs": 1.2}})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["pointer"], "/point_id");

    let point = create(
        &app.router,
        &app.admin_token,
        "/hindcast-points",
        json!({"latitude": 0.0, "longitude": 0.0, "url": "https://data.seacast.io/p0"}),
    )
    .await;
    let (status, _) = call(
        &app.router,
        Method::POST,
        "/downloaded-data",
        Some(&app.admin_token),
        Some(json!({"point_id": point, "data": [1, 2, 3]})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn downloaded_data_lists_newest_first_and_tracks_latest() {
    let app = setup().await;
    let p1 = create(
        &app.router,
        &app.admin_token,
        "/hindcast-points",
        json!({"latitude": 1.0, "longitude": 1.0, "url": "https://data.seacast.io/p1"}),
    )
    .await;
    let p2 = create(
        &app.router,
        &app.admin_token,
        "/hindcast-points",
        json!({"latitude": 2.0, "longitude": 2.0, "url": "https://data.seacast.io/p2"}),
    )
    .await;

    for (point, at) in [
        (p1, "2024-01-01T00:00:00Z"),
        (p1, "2024-03-01T00:00:00Z"),
        (p2, "2024-02-01T00:00:00Z"),
    ] {
        create(
            &app.router,
            &app.admin_token,
            "/downloaded-data",
            json!({"point_id": point, "downloaded_at": at, "data": {"at": at}}),
        )
        .await;
    }

    let (status, all) = call(&app.router, Method::GET, "/downloaded-data", Some(&app.admin_token), None).await;
    assert_eq!(status, StatusCode::OK);
    let stamps: Vec<_> = all
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["data"]["at"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        stamps,
        ["2024-03-01T00:00:00Z", "2024-02-01T00:00:00Z", "2024-01-01T00:00:00Z"]
    );

    let (_, only_p2) = call(
        &app.router,
        Method::GET,
        &format!("/downloaded-data?point_id={p2}"),
        Some(&app.admin_token),
        None,
    )
    .await;
    assert_eq!(only_p2.as_array().unwrap().len(), 1);

    let (status, latest) = call(
        &app.router,
        Method::GET,
        &format!("/downloaded-data/latest/by-point/{p1}"),
        Some(&app.admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(latest["data"]["at"], "2024-03-01T00:00:00Z");

    let (status, _) = call(
        &app.router,
        Method::GET,
        "/downloaded-data/latest/by-point/999",
        Some(&app.admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_a_point_cascades_to_its_downloads() {
    let app = setup().await;
    let point = create(
        &app.router,
        &app.admin_token,
        "/hindcast-points",
        json!({"latitude": 1.0, "longitude": 1.0, "url": "https://data.seacast.io/p1"}),
    )
    .await;
    let data = create(
        &app.router,
        &app.admin_token,
        "/downloaded-data",
        json!({"point_id": point, "data": {"hs": 0.4}}),
    )
    .await;

    let (status, _) = call(&app.router, Method::DELETE, &format!("/hindcast-points/{point}"), Some(&app.admin_token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = call(&app.router, Method::GET, &format!("/downloaded-data/{data}"), Some(&app.admin_token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn downloaded_data_delete_is_admin_only() {
    let app = setup().await;
    let point = create(
        &app.router,
        &app.admin_token,
        "/hindcast-points",
        json!({"latitude": 2.0, "longitude": 2.0, "url": "https://data.seacast.io/p2"}),
    )
    .await;
    let data = create(
        &app.router,
        &app.admin_token,
        "/downloaded-data",
        json!({"point_id": point, "data": {"hs": 1.1}}),
    )
    .await;
    let uri = format!("/downloaded-data/{data}");

    let (status, _) = call(&app.router, Method::DELETE, &uri, Some(&app.employee_token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = call(&app.router, Method::DELETE, &uri, Some(&app.admin_token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = call(&app.router, Method::GET, &uri, Some(&app.admin_token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = call(&app.router, Method::DELETE, &uri, Some(&app.admin_token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}
