use crate::transport::http::handlers::common::service_error;
use crate::transport::http::responses::SuccessResponse;
use crate::transport::http::types::{json_422, AppState, RegisterUserRequest};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = RegisterUserRequest,
    responses(
        (status = 200, description = "User registered or email updated", body = SuccessResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ErrorResponse)
    )
)]
pub async fn register_user_handler(
    State(state): State<AppState>,
    request: Result<Json<RegisterUserRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, r#"{"id": "...", "email": "..."}"#).into_response(),
    };

    match state.service.register_user(&request.id, &request.email, Utc::now()).await {
        Ok(user) => (StatusCode::OK, Json(SuccessResponse::new(user))).into_response(),
        Err(e) => service_error(e).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/users/{id}/session",
    params(
        ("id" = String, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User, usage limits and liked bottle ids", body = SuccessResponse),
        (status = 404, description = "Unknown user", body = ErrorResponse)
    )
)]
pub async fn session_handler(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match state.service.session_for(&id).await {
        Ok(session) => (StatusCode::OK, Json(SuccessResponse::new(session))).into_response(),
        Err(e) => service_error(e).into_response(),
    }
}
