use crate::domain::contract::{
    datetime_to_u256, u256_to_datetime, u256_to_u64, ContractBottle, ConversionError,
};
use super::tag::BottleTag;
use crate::storage::ipfs::BottleContent;
use chrono::{DateTime, Utc};
use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// Application-facing bottle: on-chain fields plus aggregated counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bottle {
    pub id: u64,
    pub ipfs_hash: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub like_count: u64,
    pub comment_count: u64,
    pub is_forever: bool,
    pub exists: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBottle {
    pub id: U256,
    pub ipfs_hash: String,
    pub created_at: U256,
    pub expires_at: U256,
    pub like_count: U256,
    pub comment_count: U256,
    pub is_forever: bool,
    pub exists: bool,
}

impl Bottle {
    /// Drops chain-only fields and attaches counters owned by the caller.
    pub fn from_contract(record: &ContractBottle, like_count: u64, comment_count: u64) -> Self {
        Self {
            id: record.id,
            ipfs_hash: record.ipfs_hash.clone(),
            created_at: record.created_at,
            expires_at: record.expires_at,
            like_count,
            comment_count,
            is_forever: record.is_forever,
            exists: record.exists,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        !self.is_forever && now >= self.expires_at
    }
}

impl TryFrom<RawBottle> for Bottle {
    type Error = ConversionError;

    fn try_from(raw: RawBottle) -> Result<Self, Self::Error> {
        Ok(Self {
            id: u256_to_u64("id", raw.id)?,
            ipfs_hash: raw.ipfs_hash,
            created_at: u256_to_datetime("createdAt", raw.created_at)?,
            expires_at: u256_to_datetime("expiresAt", raw.expires_at)?,
            like_count: u256_to_u64("likeCount", raw.like_count)?,
            comment_count: u256_to_u64("commentCount", raw.comment_count)?,
            is_forever: raw.is_forever,
            exists: raw.exists,
        })
    }
}

impl TryFrom<&Bottle> for RawBottle {
    type Error = ConversionError;

    fn try_from(bottle: &Bottle) -> Result<Self, Self::Error> {
        Ok(Self {
            id: U256::from(bottle.id),
            ipfs_hash: bottle.ipfs_hash.clone(),
            created_at: datetime_to_u256("createdAt", &bottle.created_at)?,
            expires_at: datetime_to_u256("expiresAt", &bottle.expires_at)?,
            like_count: U256::from(bottle.like_count),
            comment_count: U256::from(bottle.comment_count),
            is_forever: bottle.is_forever,
            exists: bottle.exists,
        })
    }
}

/// A bottle joined with its off-chain payload.
///
/// Decoding goes through [`BottleWithContentWire`] so that fields belonging to other
/// shapes (a `bottleId`, say) are rejected instead of dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "BottleWithContentWire")]
pub struct BottleWithContent {
    #[serde(flatten)]
    pub bottle: Bottle,
    pub content: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: BottleTag,
    pub timestamp: i64,
}

impl BottleWithContent {
    pub fn join(bottle: Bottle, content: BottleContent) -> Self {
        Self {
            bottle,
            content: content.content,
            user_id: content.user_id,
            kind: BottleTag::Bottle,
            timestamp: content.timestamp,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct BottleWithContentWire {
    id: u64,
    ipfs_hash: String,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
    like_count: u64,
    comment_count: u64,
    is_forever: bool,
    exists: bool,
    content: String,
    user_id: String,
    #[serde(rename = "type")]
    kind: BottleTag,
    timestamp: i64,
}

impl From<BottleWithContentWire> for BottleWithContent {
    fn from(wire: BottleWithContentWire) -> Self {
        Self {
            bottle: Bottle {
                id: wire.id,
                ipfs_hash: wire.ipfs_hash,
                created_at: wire.created_at,
                expires_at: wire.expires_at,
                like_count: wire.like_count,
                comment_count: wire.comment_count,
                is_forever: wire.is_forever,
                exists: wire.exists,
            },
            content: wire.content,
            user_id: wire.user_id,
            kind: wire.kind,
            timestamp: wire.timestamp,
        }
    }
}
