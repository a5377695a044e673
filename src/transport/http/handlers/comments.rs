use crate::transport::http::handlers::common::{query_400, service_error};
use crate::transport::http::responses::SuccessResponse;
use crate::transport::http::types::{json_422, AppState, CommentFilterParams, CreateCommentRequest};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

#[utoipa::path(
    post,
    path = "/api/comments",
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment content stored and record created", body = SuccessResponse),
        (status = 404, description = "Parent bottle does not exist", body = ErrorResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ErrorResponse)
    )
)]
pub async fn create_comment_handler(
    State(state): State<AppState>,
    request: Result<Json<CreateCommentRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => {
            return json_422(e, r#"{"content": "...", "bottleId": 1, "userId": "..."}"#).into_response()
        }
    };

    match state.service.create_comment(request, Utc::now()).await {
        Ok(created) => (StatusCode::CREATED, Json(SuccessResponse::new(created))).into_response(),
        Err(e) => service_error(e).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/comments",
    params(
        ("page" = Option<u32>, Query, description = "1-based page (default 1)"),
        ("limit" = Option<u32>, Query, description = "Page size (default 20, must be > 0)"),
        ("bottleId" = Option<u64>, Query, description = "Only comments on this bottle"),
        ("userId" = Option<String>, Query, description = "Only comments by this user"),
        ("sortOrder" = Option<String>, Query, description = "asc | desc (default asc)")
    ),
    responses(
        (status = 200, description = "Paginated comments with content", body = PaginatedResponse),
        (status = 400, description = "Invalid query or pagination", body = ErrorResponse)
    )
)]
pub async fn list_comments_handler(
    State(state): State<AppState>,
    query: Result<Query<CommentFilterParams>, QueryRejection>,
) -> impl IntoResponse {
    let Query(filter) = match query {
        Ok(v) => v,
        Err(e) => return query_400(e).into_response(),
    };

    match state.service.list_comments(&filter).await {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        Err(e) => service_error(e).into_response(),
    }
}
