use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Per-user daily usage state.
///
/// `daily_bottle_used` is the last time the user sent a bottle and
/// `daily_comments_used` counts comments in the current day. Resetting both at the
/// day boundary is the job of whoever enforces quotas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserLimits {
    pub user_id: String,
    pub daily_bottle_used: Option<DateTime<Utc>>,
    pub daily_comments_used: u32,
    pub bottles: Vec<u64>,
    pub comments: Vec<u64>,
}

impl UserLimits {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            daily_bottle_used: None,
            daily_comments_used: 0,
            bottles: Vec::new(),
            comments: Vec::new(),
        }
    }

    pub fn record_bottle(&mut self, bottle_id: u64, at: DateTime<Utc>) {
        self.daily_bottle_used = Some(at);
        self.bottles.push(bottle_id);
    }

    pub fn record_comment(&mut self, comment_id: u64) {
        self.daily_comments_used = self.daily_comments_used.saturating_add(1);
        self.comments.push(comment_id);
    }
}
