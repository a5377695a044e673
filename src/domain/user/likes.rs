use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A like edge between a user and a bottle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserLike {
    pub user_id: String,
    pub bottle_id: u64,
    pub created_at: DateTime<Utc>,
}

/// Identity of a like edge.
pub type LikeKey = (String, u64);

impl UserLike {
    pub fn key(&self) -> LikeKey {
        (self.user_id.clone(), self.bottle_id)
    }
}

/// Set of like edges, unique per (user, bottle).
#[derive(Debug, Clone, Default)]
pub struct LikeLedger {
    edges: BTreeMap<LikeKey, UserLike>,
}

impl LikeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an edge. Returns `false` when it already existed; the first edge is kept.
    pub fn like(&mut self, user_id: &str, bottle_id: u64, at: DateTime<Utc>) -> bool {
        let key = (user_id.to_string(), bottle_id);
        if self.edges.contains_key(&key) {
            return false;
        }
        self.edges.insert(
            key,
            UserLike {
                user_id: user_id.to_string(),
                bottle_id,
                created_at: at,
            },
        );
        true
    }

    /// Removes an edge. Returns `false` when there was nothing to remove.
    pub fn unlike(&mut self, user_id: &str, bottle_id: u64) -> bool {
        self.edges.remove(&(user_id.to_string(), bottle_id)).is_some()
    }

    pub fn has_liked(&self, user_id: &str, bottle_id: u64) -> bool {
        self.edges.contains_key(&(user_id.to_string(), bottle_id))
    }

    pub fn like_count(&self, bottle_id: u64) -> u64 {
        self.edges.values().filter(|e| e.bottle_id == bottle_id).count() as u64
    }

    /// Bottle ids liked by `user_id`, ascending.
    pub fn liked_bottles(&self, user_id: &str) -> Vec<u64> {
        self.edges
            .range((user_id.to_string(), 0)..=(user_id.to_string(), u64::MAX))
            .map(|(_, edge)| edge.bottle_id)
            .collect()
    }

    pub fn edges(&self) -> impl Iterator<Item = &UserLike> {
        self.edges.values()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn liking_twice_keeps_one_edge() {
        let mut ledger = LikeLedger::new();
        let first = Utc.timestamp_opt(100, 0).unwrap();
        let second = Utc.timestamp_opt(200, 0).unwrap();

        assert!(ledger.like("u1", 1, first));
        assert!(!ledger.like("u1", 1, second));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.edges().next().unwrap().created_at, first);
    }

    #[test]
    fn unlike_missing_edge_is_a_noop() {
        let mut ledger = LikeLedger::new();
        assert!(!ledger.unlike("u1", 1));

        ledger.like("u1", 1, Utc.timestamp_opt(0, 0).unwrap());
        assert!(ledger.unlike("u1", 1));
        assert!(!ledger.unlike("u1", 1));
        assert!(ledger.is_empty());
    }

    #[test]
    fn counts_and_listings_are_per_key() {
        let mut ledger = LikeLedger::new();
        let at = Utc.timestamp_opt(0, 0).unwrap();
        ledger.like("u1", 3, at);
        ledger.like("u1", 1, at);
        ledger.like("u2", 1, at);
        ledger.like("u10", 9, at);

        assert_eq!(ledger.like_count(1), 2);
        assert_eq!(ledger.like_count(3), 1);
        assert_eq!(ledger.liked_bottles("u1"), vec![1, 3]);
        assert_eq!(ledger.liked_bottles("u10"), vec![9]);
        assert!(ledger.has_liked("u2", 1));
        assert!(!ledger.has_liked("u2", 3));
    }
}
