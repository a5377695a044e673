use super::convert::{datetime_to_u256, u256_to_datetime, u256_to_u64, ConversionError};
use chrono::{DateTime, Utc};
use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// Comment record as stored on chain, scoped to its parent bottle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawContractComment {
    pub id: U256,
    pub bottle_id: U256,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    pub ipfs_hash: String,
    pub created_at: U256,
    pub exists: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractComment {
    pub id: u64,
    pub bottle_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    pub ipfs_hash: String,
    pub created_at: DateTime<Utc>,
    pub exists: bool,
}

impl TryFrom<RawContractComment> for ContractComment {
    type Error = ConversionError;

    fn try_from(raw: RawContractComment) -> Result<Self, Self::Error> {
        Ok(Self {
            id: u256_to_u64("id", raw.id)?,
            bottle_id: u256_to_u64("bottleId", raw.bottle_id)?,
            creator: raw.creator,
            ipfs_hash: raw.ipfs_hash,
            created_at: u256_to_datetime("createdAt", raw.created_at)?,
            exists: raw.exists,
        })
    }
}

impl TryFrom<&ContractComment> for RawContractComment {
    type Error = ConversionError;

    fn try_from(comment: &ContractComment) -> Result<Self, Self::Error> {
        Ok(Self {
            id: U256::from(comment.id),
            bottle_id: U256::from(comment.bottle_id),
            creator: comment.creator.clone(),
            ipfs_hash: comment.ipfs_hash.clone(),
            created_at: datetime_to_u256("createdAt", &comment.created_at)?,
            exists: comment.exists,
        })
    }
}
