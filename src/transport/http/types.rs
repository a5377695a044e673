use crate::app::bottle_service::BottleService;
use crate::domain::api::responses::ErrorResponse;
use crate::storage::ipfs::MemoryContentStore;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;

pub use crate::domain::api::requests::{
    BottleFilterParams, BottleSortField, CommentFilterParams, CommentSortField,
    CreateBottleRequest, CreateCommentRequest, LikeBottleRequest, Pagination, PaginationError,
    PaginationParams, RegisterUserRequest, SortOrder, UnlikeBottleRequest, DEFAULT_LIMIT,
    DEFAULT_PAGE,
};

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<BottleService<MemoryContentStore>>,
}

pub fn json_422(err: JsonRejection, expected: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(
            ErrorResponse::new(format!("Invalid JSON body: {} (expected: {})", err, expected))
                .with_code("INVALID_JSON"),
        ),
    )
}
