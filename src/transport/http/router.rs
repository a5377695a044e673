use crate::transport::http::handlers::{bottles, comments, health, likes, users};
use crate::transport::http::responses::{ErrorResponse, PaginatedResponse, SuccessResponse};
use crate::transport::http::types::{
    BottleFilterParams, BottleSortField, CommentFilterParams, CommentSortField,
    CreateBottleRequest, CreateCommentRequest, LikeBottleRequest, Pagination, PaginationParams,
    RegisterUserRequest, SortOrder, UnlikeBottleRequest,
};
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        bottles::create_bottle_handler,
        bottles::list_bottles_handler,
        bottles::get_bottle_handler,
        comments::create_comment_handler,
        comments::list_comments_handler,
        likes::like_handler,
        likes::unlike_handler,
        users::register_user_handler,
        users::session_handler
    ),
    components(schemas(
        CreateBottleRequest,
        CreateCommentRequest,
        LikeBottleRequest,
        UnlikeBottleRequest,
        RegisterUserRequest,
        PaginationParams,
        BottleFilterParams,
        CommentFilterParams,
        BottleSortField,
        CommentSortField,
        SortOrder,
        Pagination,
        SuccessResponse,
        PaginatedResponse,
        ErrorResponse
    ))
)]
pub struct ApiDoc;

pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/api/bottles",
            post(bottles::create_bottle_handler).get(bottles::list_bottles_handler),
        )
        .route("/api/bottles/:id", get(bottles::get_bottle_handler))
        .route(
            "/api/comments",
            post(comments::create_comment_handler).get(comments::list_comments_handler),
        )
        .route("/api/likes", post(likes::like_handler).delete(likes::unlike_handler))
        .route("/api/users", post(users::register_user_handler))
        .route("/api/users/:id/session", get(users::session_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
