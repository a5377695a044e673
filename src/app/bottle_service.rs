//! Reference service wiring requests, content storage and the record ledger together.
//!
//! Bottles and comments are written to the content store first; the returned CID becomes
//! the record's `ipfs_hash`. Likes are idempotent edges. Usage is recorded in
//! [`UserLimits`] but not enforced.

use crate::app::ledger::{LedgerError, RecordLedger};
use crate::domain::api::requests::{
    BottleFilterParams, BottleSortField, CommentFilterParams, CommentSortField,
    CreateBottleRequest, CreateCommentRequest, LikeBottleRequest, Pagination, PaginationError,
    SortOrder, UnlikeBottleRequest,
};
use crate::domain::api::responses::PaginatedResponse;
use crate::domain::contract::{ContractBottle, ContractComment, ConversionError};
use crate::domain::model::{Bottle, BottleWithContent, Comment, CommentWithContent};
use crate::domain::user::{LikeLedger, User, UserLimits, UserSession};
use crate::storage::ipfs::{
    BottleContent, CommentContent, ContentStore, IpfsContent, IpfsError, UploadResult,
};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("content {cid} does not match its record: {reason}")]
    ContentMismatch { cid: String, reason: String },

    #[error(transparent)]
    Storage(#[from] IpfsError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error(transparent)]
    Pagination(#[from] PaginationError),

    #[error("record id space exhausted")]
    IdsExhausted,
}

impl ServiceError {
    fn not_found(entity: &'static str, id: impl ToString) -> Self {
        ServiceError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Stable machine-readable code for API envelopes.
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::InvalidRequest(_) => "INVALID_REQUEST",
            ServiceError::NotFound { .. } => "NOT_FOUND",
            ServiceError::ContentMismatch { .. } => "CONTENT_MISMATCH",
            ServiceError::Storage(e) => e.code().as_str(),
            ServiceError::Conversion(_) => "CONVERSION_FAILED",
            ServiceError::Pagination(_) => "INVALID_PAGINATION",
            ServiceError::IdsExhausted => "IDS_EXHAUSTED",
        }
    }
}

impl From<LedgerError> for ServiceError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::UnknownBottle(id) => ServiceError::not_found("bottle", id),
            LedgerError::IdsExhausted => ServiceError::IdsExhausted,
            LedgerError::Conversion(e) => ServiceError::Conversion(e),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBottle {
    pub bottle: Bottle,
    pub upload: UploadResult,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreatedComment {
    pub comment: Comment,
    pub upload: UploadResult,
}

/// State of a like edge after a like/unlike call.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LikeOutcome {
    pub bottle_id: u64,
    pub user_id: String,
    pub liked: bool,
    /// False when the call found the edge already in the requested state.
    pub changed: bool,
    pub like_count: u64,
}

pub struct BottleService<S> {
    store: S,
    bottle_ttl: Duration,
    ledger: RwLock<RecordLedger>,
    likes: RwLock<LikeLedger>,
    limits: RwLock<HashMap<String, UserLimits>>,
    users: RwLock<HashMap<String, User>>,
}

fn require(field: &str, value: &str) -> Result<(), ServiceError> {
    if value.trim().is_empty() {
        return Err(ServiceError::InvalidRequest(format!("`{}` must not be empty", field)));
    }
    Ok(())
}

fn apply_order(ordering: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}

impl<S: ContentStore> BottleService<S> {
    pub fn new(store: S, bottle_ttl: Duration) -> Self {
        Self {
            store,
            bottle_ttl,
            ledger: RwLock::new(RecordLedger::new()),
            likes: RwLock::new(LikeLedger::new()),
            limits: RwLock::new(HashMap::new()),
            users: RwLock::new(HashMap::new()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn create_bottle(
        &self,
        req: CreateBottleRequest,
        now: DateTime<Utc>,
    ) -> Result<CreatedBottle, ServiceError> {
        require("content", &req.content)?;
        require("userId", &req.user_id)?;

        let payload = IpfsContent::from(BottleContent::new(req.content, req.user_id.clone(), now));
        let upload = self.store.upload(&payload).await?;

        let record = self.ledger.write().await.mint_bottle(
            None,
            upload.cid.clone(),
            now,
            self.bottle_ttl,
            false,
        )?;
        self.limits
            .write()
            .await
            .entry(req.user_id.clone())
            .or_insert_with(|| UserLimits::new(req.user_id.clone()))
            .record_bottle(record.id, now);

        info!(bottle_id = record.id, cid = %upload.cid, user_id = %req.user_id, "bottle created");
        Ok(CreatedBottle {
            bottle: Bottle::from_contract(&record, 0, 0),
            upload,
        })
    }

    pub async fn create_comment(
        &self,
        req: CreateCommentRequest,
        now: DateTime<Utc>,
    ) -> Result<CreatedComment, ServiceError> {
        require("content", &req.content)?;
        require("userId", &req.user_id)?;
        if self.ledger.read().await.raw_bottle(req.bottle_id).is_none() {
            return Err(ServiceError::not_found("bottle", req.bottle_id));
        }

        let payload = IpfsContent::from(CommentContent::new(
            req.content,
            req.bottle_id,
            req.user_id.clone(),
            now,
        ));
        let upload = self.store.upload(&payload).await?;

        let record = self.ledger.write().await.mint_comment(
            req.bottle_id,
            None,
            upload.cid.clone(),
            now,
        )?;
        self.limits
            .write()
            .await
            .entry(req.user_id.clone())
            .or_insert_with(|| UserLimits::new(req.user_id.clone()))
            .record_comment(record.id);

        info!(comment_id = record.id, bottle_id = record.bottle_id, cid = %upload.cid, "comment created");
        Ok(CreatedComment {
            comment: Comment::from(&record),
            upload,
        })
    }

    pub async fn like(&self, req: LikeBottleRequest, now: DateTime<Utc>) -> Result<LikeOutcome, ServiceError> {
        require("userId", &req.user_id)?;
        if self.ledger.read().await.raw_bottle(req.bottle_id).is_none() {
            return Err(ServiceError::not_found("bottle", req.bottle_id));
        }

        let mut likes = self.likes.write().await;
        let changed = likes.like(&req.user_id, req.bottle_id, now);
        debug!(bottle_id = req.bottle_id, user_id = %req.user_id, changed, "like");
        Ok(LikeOutcome {
            bottle_id: req.bottle_id,
            like_count: likes.like_count(req.bottle_id),
            user_id: req.user_id,
            liked: true,
            changed,
        })
    }

    /// Removing a like that does not exist is not an error.
    pub async fn unlike(&self, req: UnlikeBottleRequest) -> Result<LikeOutcome, ServiceError> {
        require("userId", &req.user_id)?;

        let mut likes = self.likes.write().await;
        let changed = likes.unlike(&req.user_id, req.bottle_id);
        debug!(bottle_id = req.bottle_id, user_id = %req.user_id, changed, "unlike");
        Ok(LikeOutcome {
            bottle_id: req.bottle_id,
            like_count: likes.like_count(req.bottle_id),
            user_id: req.user_id,
            liked: false,
            changed,
        })
    }

    async fn with_counters(&self, record: &ContractBottle) -> Bottle {
        let like_count = self.likes.read().await.like_count(record.id);
        let comment_count = self.ledger.read().await.comment_count(record.id);
        Bottle::from_contract(record, like_count, comment_count)
    }

    pub async fn bottle(&self, id: u64) -> Result<Bottle, ServiceError> {
        let record = self
            .ledger
            .read()
            .await
            .bottle(id)?
            .ok_or_else(|| ServiceError::not_found("bottle", id))?;
        Ok(self.with_counters(&record).await)
    }

    async fn bottle_content(&self, bottle: &Bottle) -> Result<BottleContent, ServiceError> {
        match self.store.fetch(&bottle.ipfs_hash).await? {
            IpfsContent::Bottle(content) => Ok(content),
            IpfsContent::Comment(_) => Err(ServiceError::ContentMismatch {
                cid: bottle.ipfs_hash.clone(),
                reason: format!("bottle {} points at comment content", bottle.id),
            }),
        }
    }

    async fn comment_content(&self, comment: &Comment) -> Result<CommentContent, ServiceError> {
        match self.store.fetch(&comment.ipfs_hash).await? {
            IpfsContent::Comment(content) => Ok(content),
            IpfsContent::Bottle(_) => Err(ServiceError::ContentMismatch {
                cid: comment.ipfs_hash.clone(),
                reason: format!("comment {} points at bottle content", comment.id),
            }),
        }
    }

    pub async fn bottle_with_content(&self, id: u64) -> Result<BottleWithContent, ServiceError> {
        let bottle = self.bottle(id).await?;
        let content = self.bottle_content(&bottle).await?;
        Ok(BottleWithContent::join(bottle, content))
    }

    pub async fn comment_with_content(&self, id: u64) -> Result<CommentWithContent, ServiceError> {
        let record: ContractComment = self
            .ledger
            .read()
            .await
            .comment(id)?
            .ok_or_else(|| ServiceError::not_found("comment", id))?;
        self.join_comment(Comment::from(&record)).await
    }

    async fn join_comment(&self, comment: Comment) -> Result<CommentWithContent, ServiceError> {
        let content = self.comment_content(&comment).await?;
        let cid = comment.ipfs_hash.clone();
        CommentWithContent::join(comment, content).map_err(|e| ServiceError::ContentMismatch {
            cid,
            reason: e.to_string(),
        })
    }

    /// Filters, orders and pages bottles. Expired bottles are hidden unless requested.
    pub async fn list_bottles(
        &self,
        filter: &BottleFilterParams,
        now: DateTime<Utc>,
    ) -> Result<PaginatedResponse<BottleWithContent>, ServiceError> {
        Pagination::new(filter.page, filter.limit, 0)?;

        let records = self.ledger.read().await.bottles()?;
        let mut items = Vec::with_capacity(records.len());
        for record in records.iter().filter(|r| r.exists) {
            if !filter.include_expired && record.is_expired(now) {
                continue;
            }
            if filter.is_forever.is_some_and(|f| f != record.is_forever) {
                continue;
            }
            let bottle = self.with_counters(record).await;
            let content = self.bottle_content(&bottle).await?;
            if filter.user_id.as_deref().is_some_and(|u| u != content.user_id) {
                continue;
            }
            items.push(BottleWithContent::join(bottle, content));
        }

        let order = filter.order();
        items.sort_by(|a, b| {
            let (a, b) = (&a.bottle, &b.bottle);
            let primary = match filter.sort_by {
                BottleSortField::CreatedAt => a.created_at.cmp(&b.created_at),
                BottleSortField::ExpiresAt => a.expires_at.cmp(&b.expires_at),
                BottleSortField::LikeCount => a.like_count.cmp(&b.like_count),
                BottleSortField::CommentCount => a.comment_count.cmp(&b.comment_count),
            };
            apply_order(primary.then(a.id.cmp(&b.id)), order)
        });

        Ok(PaginatedResponse::paginate(items, filter.pagination())?)
    }

    pub async fn list_comments(
        &self,
        filter: &CommentFilterParams,
    ) -> Result<PaginatedResponse<CommentWithContent>, ServiceError> {
        Pagination::new(filter.page, filter.limit, 0)?;

        let records = {
            let ledger = self.ledger.read().await;
            match filter.bottle_id {
                Some(bottle_id) => ledger.comments_for(bottle_id)?,
                None => ledger.comments()?,
            }
        };

        let mut items = Vec::with_capacity(records.len());
        for record in records.iter().filter(|r| r.exists) {
            let joined = self.join_comment(Comment::from(record)).await?;
            if filter.user_id.as_deref().is_some_and(|u| u != joined.user_id) {
                continue;
            }
            items.push(joined);
        }

        let order = filter.order();
        items.sort_by(|a, b| {
            let (a, b) = (&a.comment, &b.comment);
            let primary = match filter.sort_by {
                CommentSortField::CreatedAt => a.created_at.cmp(&b.created_at),
            };
            apply_order(primary.then(a.id.cmp(&b.id)), order)
        });

        Ok(PaginatedResponse::paginate(items, filter.pagination())?)
    }

    pub async fn register_user(&self, id: &str, email: &str, now: DateTime<Utc>) -> Result<User, ServiceError> {
        require("id", id)?;
        let mut users = self.users.write().await;
        let user = users
            .entry(id.to_string())
            .and_modify(|u| {
                if u.email != email {
                    u.email = email.to_string();
                    u.updated_at = now;
                }
            })
            .or_insert_with(|| User {
                id: id.to_string(),
                email: email.to_string(),
                created_at: now,
                updated_at: now,
            });
        Ok(user.clone())
    }

    pub async fn limits_for(&self, user_id: &str) -> UserLimits {
        self.limits
            .read()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_else(|| UserLimits::new(user_id))
    }

    pub async fn session_for(&self, user_id: &str) -> Result<UserSession, ServiceError> {
        let user = self
            .users
            .read()
            .await
            .get(user_id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found("user", user_id))?;
        Ok(UserSession {
            user,
            limits: self.limits_for(user_id).await,
            liked_bottles: self.likes.read().await.liked_bottles(user_id),
        })
    }
}
