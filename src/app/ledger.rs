//! In-process record ledger.
//!
//! Keeps bottle and comment records in their raw, chain-native form and only hands out
//! normalized records through the lossless conversion. Records are stamped with
//! whole-second block time.

use crate::domain::contract::{
    datetime_to_u256, ContractBottle, ContractComment, ConversionError, RawContractBottle,
    RawContractComment,
};
use chrono::{DateTime, Duration, Utc};
use primitive_types::U256;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("bottle {0} does not exist")]
    UnknownBottle(u64),

    #[error("record id space exhausted")]
    IdsExhausted,

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

pub struct RecordLedger {
    bottles: BTreeMap<U256, RawContractBottle>,
    comments: BTreeMap<U256, RawContractComment>,
    last_bottle_id: U256,
    last_comment_id: U256,
}

fn next_id(last: &mut U256) -> Result<U256, LedgerError> {
    let (next, overflow) = last.overflowing_add(U256::one());
    if overflow {
        return Err(LedgerError::IdsExhausted);
    }
    *last = next;
    Ok(next)
}

fn block_time(at: DateTime<Utc>) -> Result<U256, ConversionError> {
    let floored = DateTime::from_timestamp(at.timestamp(), 0).unwrap_or(at);
    datetime_to_u256("createdAt", &floored)
}

impl RecordLedger {
    pub fn new() -> Self {
        Self {
            bottles: BTreeMap::new(),
            comments: BTreeMap::new(),
            last_bottle_id: U256::zero(),
            last_comment_id: U256::zero(),
        }
    }

    /// Records a new bottle. Ids start at 1 and increase monotonically.
    pub fn mint_bottle(
        &mut self,
        creator: Option<String>,
        ipfs_hash: String,
        at: DateTime<Utc>,
        ttl: Duration,
        is_forever: bool,
    ) -> Result<ContractBottle, LedgerError> {
        let created_at = block_time(at)?;
        let ttl_secs = U256::from(ttl.num_seconds().max(0) as u64);
        let expires_at = created_at.saturating_add(ttl_secs);

        let mut last = self.last_bottle_id;
        let raw = RawContractBottle {
            id: next_id(&mut last)?,
            creator,
            ipfs_hash,
            created_at,
            expires_at,
            is_forever,
            exists: true,
        };
        // A record that cannot be normalized is never stored.
        let normalized = ContractBottle::try_from(raw.clone())?;
        self.last_bottle_id = last;
        self.bottles.insert(raw.id, raw);
        Ok(normalized)
    }

    pub fn mint_comment(
        &mut self,
        bottle_id: u64,
        creator: Option<String>,
        ipfs_hash: String,
        at: DateTime<Utc>,
    ) -> Result<ContractComment, LedgerError> {
        let parent = U256::from(bottle_id);
        if !self.bottles.get(&parent).is_some_and(|b| b.exists) {
            return Err(LedgerError::UnknownBottle(bottle_id));
        }

        let mut last = self.last_comment_id;
        let raw = RawContractComment {
            id: next_id(&mut last)?,
            bottle_id: parent,
            creator,
            ipfs_hash,
            created_at: block_time(at)?,
            exists: true,
        };
        let normalized = ContractComment::try_from(raw.clone())?;
        self.last_comment_id = last;
        self.comments.insert(raw.id, raw);
        Ok(normalized)
    }

    pub fn raw_bottle(&self, id: u64) -> Option<&RawContractBottle> {
        self.bottles.get(&U256::from(id))
    }

    pub fn bottle(&self, id: u64) -> Result<Option<ContractBottle>, LedgerError> {
        match self.raw_bottle(id) {
            Some(raw) => Ok(Some(ContractBottle::try_from(raw.clone())?)),
            None => Ok(None),
        }
    }

    pub fn comment(&self, id: u64) -> Result<Option<ContractComment>, LedgerError> {
        match self.comments.get(&U256::from(id)) {
            Some(raw) => Ok(Some(ContractComment::try_from(raw.clone())?)),
            None => Ok(None),
        }
    }

    /// All bottles in id order.
    pub fn bottles(&self) -> Result<Vec<ContractBottle>, LedgerError> {
        self.bottles
            .values()
            .map(|raw| ContractBottle::try_from(raw.clone()).map_err(LedgerError::from))
            .collect()
    }

    pub fn comments(&self) -> Result<Vec<ContractComment>, LedgerError> {
        self.comments
            .values()
            .map(|raw| ContractComment::try_from(raw.clone()).map_err(LedgerError::from))
            .collect()
    }

    pub fn comments_for(&self, bottle_id: u64) -> Result<Vec<ContractComment>, LedgerError> {
        let parent = U256::from(bottle_id);
        self.comments
            .values()
            .filter(|raw| raw.bottle_id == parent)
            .map(|raw| ContractComment::try_from(raw.clone()).map_err(LedgerError::from))
            .collect()
    }

    pub fn comment_count(&self, bottle_id: u64) -> u64 {
        let parent = U256::from(bottle_id);
        self.comments.values().filter(|raw| raw.bottle_id == parent).count() as u64
    }
}

impl Default for RecordLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn bottles_get_sequential_ids_and_expiry() {
        let mut ledger = RecordLedger::new();
        let at = Utc.timestamp_opt(1_700_000_000, 0).unwrap();

        let first = ledger
            .mint_bottle(Some("0xabc".into()), "bafy1".into(), at, Duration::seconds(3600), false)
            .unwrap();
        let second = ledger
            .mint_bottle(None, "bafy2".into(), at, Duration::seconds(3600), true)
            .unwrap();

        assert_eq!((first.id, second.id), (1, 2));
        assert_eq!(first.expires_at, Utc.timestamp_opt(1_700_003_600, 0).unwrap());
        assert_eq!(ledger.raw_bottle(1).unwrap().created_at, U256::from(1_700_000_000u64));
        assert_eq!(ledger.bottles().unwrap().len(), 2);
    }

    #[test]
    fn sub_second_time_is_floored_to_block_time() {
        let mut ledger = RecordLedger::new();
        let at = Utc.timestamp_millis_opt(1_700_000_000_750).unwrap();
        let bottle = ledger
            .mint_bottle(None, "bafy".into(), at, Duration::seconds(10), false)
            .unwrap();
        assert_eq!(bottle.created_at, Utc.timestamp_opt(1_700_000_000, 0).unwrap());
    }

    #[test]
    fn comments_require_an_existing_parent() {
        let mut ledger = RecordLedger::new();
        let at = Utc.timestamp_opt(1_700_000_000, 0).unwrap();

        let err = ledger.mint_comment(1, None, "bafyc".into(), at).unwrap_err();
        assert!(matches!(err, LedgerError::UnknownBottle(1)));

        ledger.mint_bottle(None, "bafy".into(), at, Duration::seconds(10), false).unwrap();
        let comment = ledger.mint_comment(1, None, "bafyc".into(), at).unwrap();
        assert_eq!((comment.id, comment.bottle_id), (1, 1));
        assert_eq!(ledger.comment_count(1), 1);
        assert_eq!(ledger.comments_for(2).unwrap(), vec![]);
    }
}
