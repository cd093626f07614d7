//! Router-level tests for the color CRUD API, driven without a socket.

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use palette_server::{AppState, ServerConfig, create_router_with_state};
use palette_store::ColorStore;
use serde_json::{Value, json};
use tower::ServiceExt;

fn test_app() -> Router {
    let config = ServerConfig {
        database: Some(PathBuf::from(":memory:")),
        ..ServerConfig::default()
    };
    let store = ColorStore::open_in_memory().expect("in-memory store");
    create_router_with_state(Arc::new(AppState::with_store(config, store)))
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn body_json(response: axum::response::Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

#[tokio::test]
async fn list_is_empty_initially() {
    let app = test_app();
    let response = app.oneshot(get_request("/api/colors")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn create_returns_201_with_location() {
    let app = test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/colors",
            json!({"name": "Red", "red": 255, "green": 0, "blue": 0}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/api/colors/1"
    );
    assert_eq!(
        body_json(response).await,
        json!({"id": 1, "name": "Red", "red": 255, "green": 0, "blue": 0})
    );
}

#[tokio::test]
async fn create_discards_client_supplied_id() {
    let app = test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/colors",
            json!({"id": 777, "name": "Red", "red": 255, "green": 0, "blue": 0}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["id"], json!(1));
}

#[tokio::test]
async fn get_missing_color_is_404_with_empty_body() {
    let app = test_app();
    let response = app.oneshot(get_request("/api/colors/999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn created_color_is_readable() {
    let app = test_app();

    app.clone()
        .oneshot(json_request(
            "POST",
            "/api/colors",
            json!({"name": "Red", "red": 255, "green": 0, "blue": 0}),
        ))
        .await
        .unwrap();

    let response = app.oneshot(get_request("/api/colors/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"id": 1, "name": "Red", "red": 255, "green": 0, "blue": 0})
    );
}

#[tokio::test]
async fn update_replaces_all_fields() {
    let app = test_app();

    app.clone()
        .oneshot(json_request(
            "POST",
            "/api/colors",
            json!({"name": "Red", "red": 255, "green": 0, "blue": 0}),
        ))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/colors/1",
            json!({"name": "Crimson", "red": 220, "green": 20, "blue": 60}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"id": 1, "name": "Crimson", "red": 220, "green": 20, "blue": 60})
    );

    let response = app.oneshot(get_request("/api/colors/1")).await.unwrap();
    assert_eq!(body_json(response).await["name"], json!("Crimson"));
}

#[tokio::test]
async fn update_ignores_body_id_in_favor_of_path() {
    let app = test_app();

    app.clone()
        .oneshot(json_request(
            "POST",
            "/api/colors",
            json!({"name": "Red", "red": 255, "green": 0, "blue": 0}),
        ))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/colors/1",
            json!({"id": 42, "name": "Scarlet", "red": 255, "green": 36, "blue": 0}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["id"], json!(1));

    // No row 42 came into existence
    let response = app.oneshot(get_request("/api/colors/42")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_of_missing_color_is_404_and_writes_nothing() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/colors/5",
            json!({"name": "Ghost", "red": 1, "green": 2, "blue": 3}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(response).await.is_empty());

    let response = app.oneshot(get_request("/api/colors")).await.unwrap();
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn delete_then_get_is_204_then_404() {
    let app = test_app();

    app.clone()
        .oneshot(json_request(
            "POST",
            "/api/colors",
            json!({"name": "Red", "red": 255, "green": 0, "blue": 0}),
        ))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/colors/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    let response = app.oneshot(get_request("/api/colors/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn second_delete_is_404() {
    let app = test_app();

    app.clone()
        .oneshot(json_request(
            "POST",
            "/api/colors",
            json!({"name": "Red", "red": 255, "green": 0, "blue": 0}),
        ))
        .await
        .unwrap();

    for expected in [StatusCode::NO_CONTENT, StatusCode::NOT_FOUND] {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/colors/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), expected);
    }
}

#[tokio::test]
async fn list_reflects_creates_and_deletes() {
    let app = test_app();

    for (name, r, g, b) in [("Red", 255, 0, 0), ("Green", 0, 255, 0), ("Blue", 0, 0, 255)] {
        app.clone()
            .oneshot(json_request(
                "POST",
                "/api/colors",
                json!({"name": name, "red": r, "green": g, "blue": b}),
            ))
            .await
            .unwrap();
    }

    app.clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/colors/2")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let response = app.oneshot(get_request("/api/colors")).await.unwrap();
    let body = body_json(response).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Red", "Blue"]);
}

#[tokio::test]
async fn out_of_range_rgb_is_accepted_verbatim() {
    // No validation layer exists; values pass through to storage.
    let app = test_app();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/colors",
            json!({"name": "Odd", "red": -1, "green": 300, "blue": 0}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app.oneshot(get_request("/api/colors/1")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["red"], json!(-1));
    assert_eq!(body["green"], json!(300));
}

#[tokio::test]
async fn over_length_name_surfaces_as_storage_error() {
    let app = test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/colors",
            json!({"name": "x".repeat(51), "red": 0, "green": 0, "blue": 0}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], json!("storage_error"));
}

#[tokio::test]
async fn health_check_reports_healthy() {
    let app = test_app();
    let response = app.oneshot(get_request("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], json!("healthy"));
}

#[tokio::test]
async fn metrics_count_mutations() {
    let app = test_app();

    app.clone()
        .oneshot(json_request(
            "POST",
            "/api/colors",
            json!({"name": "Red", "red": 255, "green": 0, "blue": 0}),
        ))
        .await
        .unwrap();
    app.clone()
        .oneshot(json_request(
            "PUT",
            "/api/colors/1",
            json!({"name": "Crimson", "red": 220, "green": 20, "blue": 60}),
        ))
        .await
        .unwrap();

    let response = app.oneshot(get_request("/api/metrics")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["colors_created"], json!(1));
    assert_eq!(body["colors_updated"], json!(1));
    assert_eq!(body["colors_deleted"], json!(0));
}
