//! Drives the axum router in-process and checks the wire envelopes.

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use chrono::Duration;
use message_bottle::transport::http::{create_router, AppState};
use message_bottle::{BottleService, MemoryContentStore};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    let service = BottleService::new(MemoryContentStore::new("https://gw.example/ipfs"), Duration::seconds(3600));
    create_router(AppState {
        service: Arc::new(service),
    })
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(v) => builder
            .header("content-type", "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app();
    let (status, body) = call(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["status"], json!("ok"));
    assert_eq!(body["data"]["schemaVersion"], json!(message_bottle::SCHEMA_VERSION));
}

#[tokio::test]
async fn create_then_read_bottle() {
    let app = app();
    let (status, created) = call(
        &app,
        Method::POST,
        "/api/bottles",
        Some(json!({ "content": "hello", "userId": "u1" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["success"], json!(true));
    let cid = created["data"]["upload"]["cid"].as_str().unwrap().to_string();
    assert_eq!(created["data"]["bottle"]["ipfsHash"], json!(cid));
    assert_eq!(created["data"]["bottle"]["likeCount"], json!(0));

    let (status, fetched) = call(&app, Method::GET, "/api/bottles/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["data"]["content"], json!("hello"));
    assert_eq!(fetched["data"]["userId"], json!("u1"));
    assert_eq!(fetched["data"]["ipfsHash"], json!(cid));
    assert!(fetched["data"].get("bottleId").is_none());
}

#[tokio::test]
async fn malformed_body_is_422_error_envelope() {
    let app = app();
    let (status, body) = call(&app, Method::POST, "/api/bottles", Some(json!({ "content": "hi" }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["code"], json!("INVALID_JSON"));
}

#[tokio::test]
async fn unknown_bottle_is_404_error_envelope() {
    let app = app();
    let (status, body) = call(&app, Method::GET, "/api/bottles/77", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["code"], json!("NOT_FOUND"));
    assert_eq!(body["details"]["id"], json!("77"));
}

#[tokio::test]
async fn like_unlike_and_list() {
    let app = app();
    for content in ["a", "b", "c"] {
        let (status, _) = call(
            &app,
            Method::POST,
            "/api/bottles",
            Some(json!({ "content": content, "userId": "u1" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let like = json!({ "bottleId": 2, "userId": "u2" });
    let (_, first) = call(&app, Method::POST, "/api/likes", Some(like.clone())).await;
    let (_, second) = call(&app, Method::POST, "/api/likes", Some(like.clone())).await;
    assert_eq!(first["data"]["changed"], json!(true));
    assert_eq!(second["data"]["changed"], json!(false));
    assert_eq!(second["data"]["likeCount"], json!(1));

    let (status, page) = call(&app, Method::GET, "/api/bottles?page=1&limit=2&sortBy=likeCount", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["pagination"], json!({ "page": 1, "limit": 2, "total": 3, "totalPages": 2 }));
    assert_eq!(page["data"][0]["id"], json!(2));
    assert_eq!(page["data"][0]["type"], json!("bottle"));

    let (status, removed) = call(&app, Method::DELETE, "/api/likes", Some(like.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(removed["data"]["liked"], json!(false));
    let (_, noop) = call(&app, Method::DELETE, "/api/likes", Some(like)).await;
    assert_eq!(noop["data"]["changed"], json!(false));
}

#[tokio::test]
async fn zero_limit_query_is_rejected() {
    let app = app();
    let (status, body) = call(&app, Method::GET, "/api/bottles?limit=0", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], json!("INVALID_PAGINATION"));
}

#[tokio::test]
async fn comments_and_session_round_trip() {
    let app = app();
    call(&app, Method::POST, "/api/users", Some(json!({ "id": "u1", "email": "u1@example.com" }))).await;
    call(&app, Method::POST, "/api/bottles", Some(json!({ "content": "hello", "userId": "u1" }))).await;

    let (status, created) = call(
        &app,
        Method::POST,
        "/api/comments",
        Some(json!({ "content": "reply", "bottleId": 1, "userId": "u1" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["data"]["comment"]["bottleId"], json!(1));

    let (status, page) = call(&app, Method::GET, "/api/comments?bottleId=1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["data"][0]["content"], json!("reply"));
    assert_eq!(page["pagination"]["total"], json!(1));

    let (status, session) = call(&app, Method::GET, "/api/users/u1/session", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(session["data"]["limits"]["bottles"], json!([1]));
    assert_eq!(session["data"]["limits"]["comments"], json!([1]));
    assert_eq!(session["data"]["likedBottles"], json!([]));
}
