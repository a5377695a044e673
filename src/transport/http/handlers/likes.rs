use crate::transport::http::handlers::common::service_error;
use crate::transport::http::responses::SuccessResponse;
use crate::transport::http::types::{json_422, AppState, LikeBottleRequest, UnlikeBottleRequest};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

const EXPECTED_BODY: &str = r#"{"bottleId": 1, "userId": "..."}"#;

#[utoipa::path(
    post,
    path = "/api/likes",
    request_body = LikeBottleRequest,
    responses(
        (status = 200, description = "Bottle liked (repeat likes are no-ops)", body = SuccessResponse),
        (status = 404, description = "Unknown bottle", body = ErrorResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ErrorResponse)
    )
)]
pub async fn like_handler(
    State(state): State<AppState>,
    request: Result<Json<LikeBottleRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, EXPECTED_BODY).into_response(),
    };

    match state.service.like(request, Utc::now()).await {
        Ok(outcome) => (StatusCode::OK, Json(SuccessResponse::new(outcome))).into_response(),
        Err(e) => service_error(e).into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/api/likes",
    request_body = UnlikeBottleRequest,
    responses(
        (status = 200, description = "Like removed (missing likes are no-ops)", body = SuccessResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ErrorResponse)
    )
)]
pub async fn unlike_handler(
    State(state): State<AppState>,
    request: Result<Json<UnlikeBottleRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, EXPECTED_BODY).into_response(),
    };

    match state.service.unlike(request).await {
        Ok(outcome) => (StatusCode::OK, Json(SuccessResponse::new(outcome))).into_response(),
        Err(e) => service_error(e).into_response(),
    }
}
