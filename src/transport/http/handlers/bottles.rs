use crate::transport::http::handlers::common::{query_400, service_error};
use crate::transport::http::responses::SuccessResponse;
use crate::transport::http::types::{json_422, AppState, BottleFilterParams, CreateBottleRequest};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

#[utoipa::path(
    post,
    path = "/api/bottles",
    request_body = CreateBottleRequest,
    responses(
        (status = 201, description = "Bottle content stored and record created", body = SuccessResponse),
        (status = 400, description = "Blank content or user id", body = ErrorResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ErrorResponse)
    )
)]
pub async fn create_bottle_handler(
    State(state): State<AppState>,
    request: Result<Json<CreateBottleRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, r#"{"content": "...", "userId": "..."}"#).into_response(),
    };

    match state.service.create_bottle(request, Utc::now()).await {
        Ok(created) => (StatusCode::CREATED, Json(SuccessResponse::new(created))).into_response(),
        Err(e) => service_error(e).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/bottles",
    params(
        ("page" = Option<u32>, Query, description = "1-based page (default 1)"),
        ("limit" = Option<u32>, Query, description = "Page size (default 20, must be > 0)"),
        ("userId" = Option<String>, Query, description = "Only bottles by this user"),
        ("isForever" = Option<bool>, Query, description = "Only permanent / only expiring bottles"),
        ("includeExpired" = Option<bool>, Query, description = "Include expired bottles"),
        ("sortBy" = Option<String>, Query, description = "createdAt | expiresAt | likeCount | commentCount"),
        ("sortOrder" = Option<String>, Query, description = "asc | desc (default desc)")
    ),
    responses(
        (status = 200, description = "Paginated bottles with content", body = PaginatedResponse),
        (status = 400, description = "Invalid query or pagination", body = ErrorResponse)
    )
)]
pub async fn list_bottles_handler(
    State(state): State<AppState>,
    query: Result<Query<BottleFilterParams>, QueryRejection>,
) -> impl IntoResponse {
    let Query(filter) = match query {
        Ok(v) => v,
        Err(e) => return query_400(e).into_response(),
    };

    match state.service.list_bottles(&filter, Utc::now()).await {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        Err(e) => service_error(e).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/bottles/{id}",
    params(
        ("id" = u64, Path, description = "Bottle id")
    ),
    responses(
        (status = 200, description = "Bottle joined with its content", body = SuccessResponse),
        (status = 404, description = "Unknown bottle", body = ErrorResponse)
    )
)]
pub async fn get_bottle_handler(State(state): State<AppState>, Path(id): Path<u64>) -> impl IntoResponse {
    match state.service.bottle_with_content(id).await {
        Ok(bottle) => (StatusCode::OK, Json(SuccessResponse::new(bottle))).into_response(),
        Err(e) => service_error(e).into_response(),
    }
}
