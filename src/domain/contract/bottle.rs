use super::convert::{datetime_to_u256, u256_to_datetime, u256_to_u64, ConversionError};
use chrono::{DateTime, Utc};
use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// Bottle record exactly as the contract stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawContractBottle {
    pub id: U256,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    pub ipfs_hash: String,
    pub created_at: U256,
    pub expires_at: U256,
    pub is_forever: bool,
    pub exists: bool,
}

/// Contract bottle with ids and timestamps in application types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractBottle {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    pub ipfs_hash: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub is_forever: bool,
    pub exists: bool,
}

impl ContractBottle {
    /// Permanent bottles never expire; the rest expire once `now` reaches `expires_at`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        !self.is_forever && now >= self.expires_at
    }
}

impl TryFrom<RawContractBottle> for ContractBottle {
    type Error = ConversionError;

    fn try_from(raw: RawContractBottle) -> Result<Self, Self::Error> {
        Ok(Self {
            id: u256_to_u64("id", raw.id)?,
            creator: raw.creator,
            ipfs_hash: raw.ipfs_hash,
            created_at: u256_to_datetime("createdAt", raw.created_at)?,
            expires_at: u256_to_datetime("expiresAt", raw.expires_at)?,
            is_forever: raw.is_forever,
            exists: raw.exists,
        })
    }
}

impl TryFrom<&ContractBottle> for RawContractBottle {
    type Error = ConversionError;

    fn try_from(bottle: &ContractBottle) -> Result<Self, Self::Error> {
        Ok(Self {
            id: U256::from(bottle.id),
            creator: bottle.creator.clone(),
            ipfs_hash: bottle.ipfs_hash.clone(),
            created_at: datetime_to_u256("createdAt", &bottle.created_at)?,
            expires_at: datetime_to_u256("expiresAt", &bottle.expires_at)?,
            is_forever: bottle.is_forever,
            exists: bottle.exists,
        })
    }
}
