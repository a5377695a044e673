use crate::domain::contract::{
    datetime_to_u256, u256_to_datetime, u256_to_u64, ContractComment, ConversionError,
};
use super::tag::CommentTag;
use crate::storage::ipfs::CommentContent;
use chrono::{DateTime, Utc};
use primitive_types::U256;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    pub bottle_id: u64,
    pub ipfs_hash: String,
    pub created_at: DateTime<Utc>,
    pub exists: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawComment {
    pub id: U256,
    pub bottle_id: U256,
    pub ipfs_hash: String,
    pub created_at: U256,
    pub exists: bool,
}

impl From<&ContractComment> for Comment {
    fn from(record: &ContractComment) -> Self {
        Self {
            id: record.id,
            bottle_id: record.bottle_id,
            ipfs_hash: record.ipfs_hash.clone(),
            created_at: record.created_at,
            exists: record.exists,
        }
    }
}

impl TryFrom<RawComment> for Comment {
    type Error = ConversionError;

    fn try_from(raw: RawComment) -> Result<Self, Self::Error> {
        Ok(Self {
            id: u256_to_u64("id", raw.id)?,
            bottle_id: u256_to_u64("bottleId", raw.bottle_id)?,
            ipfs_hash: raw.ipfs_hash,
            created_at: u256_to_datetime("createdAt", raw.created_at)?,
            exists: raw.exists,
        })
    }
}

impl TryFrom<&Comment> for RawComment {
    type Error = ConversionError;

    fn try_from(comment: &Comment) -> Result<Self, Self::Error> {
        Ok(Self {
            id: U256::from(comment.id),
            bottle_id: U256::from(comment.bottle_id),
            ipfs_hash: comment.ipfs_hash.clone(),
            created_at: datetime_to_u256("createdAt", &comment.created_at)?,
            exists: comment.exists,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("comment {comment_id} belongs to bottle {record_bottle_id} but its content names bottle {content_bottle_id}")]
pub struct ParentMismatch {
    pub comment_id: u64,
    pub record_bottle_id: u64,
    pub content_bottle_id: u64,
}

/// A comment joined with its off-chain payload. Decodes strictly, like
/// [`BottleWithContent`](super::BottleWithContent).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "CommentWithContentWire")]
pub struct CommentWithContent {
    #[serde(flatten)]
    pub comment: Comment,
    pub content: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: CommentTag,
    pub timestamp: i64,
}

impl CommentWithContent {
    /// Joins a record with its payload; both must point at the same parent bottle.
    pub fn join(comment: Comment, content: CommentContent) -> Result<Self, ParentMismatch> {
        if comment.bottle_id != content.bottle_id {
            return Err(ParentMismatch {
                comment_id: comment.id,
                record_bottle_id: comment.bottle_id,
                content_bottle_id: content.bottle_id,
            });
        }
        Ok(Self {
            comment,
            content: content.content,
            user_id: content.user_id,
            kind: CommentTag::Comment,
            timestamp: content.timestamp,
        })
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct CommentWithContentWire {
    id: u64,
    bottle_id: u64,
    ipfs_hash: String,
    created_at: DateTime<Utc>,
    exists: bool,
    content: String,
    user_id: String,
    #[serde(rename = "type")]
    kind: CommentTag,
    timestamp: i64,
}

impl From<CommentWithContentWire> for CommentWithContent {
    fn from(wire: CommentWithContentWire) -> Self {
        Self {
            comment: Comment {
                id: wire.id,
                bottle_id: wire.bottle_id,
                ipfs_hash: wire.ipfs_hash,
                created_at: wire.created_at,
                exists: wire.exists,
            },
            content: wire.content,
            user_id: wire.user_id,
            kind: wire.kind,
            timestamp: wire.timestamp,
        }
    }
}
