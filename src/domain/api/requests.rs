//! Request bodies, query parameters and pagination shared by every transport.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBottleRequest {
    pub content: String,
    pub user_id: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub content: String,
    pub bottle_id: u64,
    pub user_id: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LikeBottleRequest {
    pub bottle_id: u64,
    pub user_id: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnlikeBottleRequest {
    pub bottle_id: u64,
    pub user_id: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    pub id: String,
    pub email: String,
}

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 20;

fn default_page() -> u32 {
    DEFAULT_PAGE
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

/// 1-based page selection.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
pub struct PaginationParams {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, ToSchema, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Deserialize, Serialize, Debug, ToSchema, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum BottleSortField {
    CreatedAt,
    ExpiresAt,
    LikeCount,
    CommentCount,
}

impl Default for BottleSortField {
    fn default() -> Self {
        BottleSortField::CreatedAt
    }
}

#[derive(Deserialize, Serialize, Debug, ToSchema, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum CommentSortField {
    CreatedAt,
}

impl Default for CommentSortField {
    fn default() -> Self {
        CommentSortField::CreatedAt
    }
}

/// Query parameters for bottle listings: pagination plus filters and ordering.
///
/// Newest first unless told otherwise.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BottleFilterParams {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub is_forever: Option<bool>,
    /// Expired, non-permanent bottles are hidden unless this is set.
    #[serde(default)]
    pub include_expired: bool,
    #[serde(default)]
    pub sort_by: BottleSortField,
    #[serde(default)]
    pub sort_order: Option<SortOrder>,
}

impl BottleFilterParams {
    pub fn pagination(&self) -> PaginationParams {
        PaginationParams {
            page: self.page,
            limit: self.limit,
        }
    }

    pub fn order(&self) -> SortOrder {
        self.sort_order.unwrap_or(SortOrder::Desc)
    }
}

impl Default for BottleFilterParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            user_id: None,
            is_forever: None,
            include_expired: false,
            sort_by: BottleSortField::default(),
            sort_order: None,
        }
    }
}

/// Query parameters for comment listings. Oldest first unless told otherwise.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentFilterParams {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub bottle_id: Option<u64>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub sort_by: CommentSortField,
    #[serde(default)]
    pub sort_order: Option<SortOrder>,
}

impl CommentFilterParams {
    pub fn pagination(&self) -> PaginationParams {
        PaginationParams {
            page: self.page,
            limit: self.limit,
        }
    }

    pub fn order(&self) -> SortOrder {
        self.sort_order.unwrap_or(SortOrder::Asc)
    }
}

impl Default for CommentFilterParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            bottle_id: None,
            user_id: None,
            sort_by: CommentSortField::default(),
            sort_order: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    #[error("limit must be greater than zero")]
    ZeroLimit,
    #[error("page numbers start at 1")]
    ZeroPage,
}

/// Pagination block of a [`PaginatedResponse`](super::responses::PaginatedResponse).
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u64,
}

impl Pagination {
    /// `total_pages` is `ceil(total / limit)`; a zero limit or page is rejected.
    pub fn new(page: u32, limit: u32, total: u64) -> Result<Self, PaginationError> {
        if limit == 0 {
            return Err(PaginationError::ZeroLimit);
        }
        if page == 0 {
            return Err(PaginationError::ZeroPage);
        }
        Ok(Self {
            page,
            limit,
            total,
            total_pages: total.div_ceil(u64::from(limit)),
        })
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}
