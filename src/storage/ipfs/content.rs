//! Payloads written to content-addressed storage.
//!
//! Stored content is immutable and addressed by the CID the store returns. The `type`
//! discriminant lives on [`IpfsContent`]; the variant payloads reject unknown fields so a
//! `"bottle"` payload can never smuggle in a `bottleId`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BottleContent {
    pub content: String,
    pub user_id: String,
    /// Client-side epoch milliseconds.
    pub timestamp: i64,
    /// Server-observed creation time (RFC 3339).
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CommentContent {
    pub content: String,
    pub bottle_id: u64,
    pub user_id: String,
    pub timestamp: i64,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum IpfsContent {
    Bottle(BottleContent),
    Comment(CommentContent),
}

impl BottleContent {
    pub fn new(content: impl Into<String>, user_id: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            content: content.into(),
            user_id: user_id.into(),
            timestamp: at.timestamp_millis(),
            created_at: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

impl CommentContent {
    pub fn new(
        content: impl Into<String>,
        bottle_id: u64,
        user_id: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            content: content.into(),
            bottle_id,
            user_id: user_id.into(),
            timestamp: at.timestamp_millis(),
            created_at: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

impl IpfsContent {
    pub fn kind(&self) -> &'static str {
        match self {
            IpfsContent::Bottle(_) => "bottle",
            IpfsContent::Comment(_) => "comment",
        }
    }

    pub fn user_id(&self) -> &str {
        match self {
            IpfsContent::Bottle(b) => &b.user_id,
            IpfsContent::Comment(c) => &c.user_id,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            IpfsContent::Bottle(b) => &b.content,
            IpfsContent::Comment(c) => &c.content,
        }
    }
}

impl From<BottleContent> for IpfsContent {
    fn from(content: BottleContent) -> Self {
        IpfsContent::Bottle(content)
    }
}

impl From<CommentContent> for IpfsContent {
    fn from(content: CommentContent) -> Self {
        IpfsContent::Comment(content)
    }
}

/// Descriptor returned by a store write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResult {
    pub cid: String,
    pub size: u64,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn bottle_payload_carries_its_tag() {
        let at = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let value = serde_json::to_value(IpfsContent::from(BottleContent::new("hello", "u1", at))).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "bottle",
                "content": "hello",
                "userId": "u1",
                "timestamp": 1_700_000_000_000i64,
                "createdAt": "2023-11-14T22:13:20.000Z"
            })
        );
    }

    #[test]
    fn tagged_bottle_with_bottle_id_is_rejected() {
        let payload = json!({
            "type": "bottle",
            "content": "hi",
            "bottleId": 3,
            "userId": "u1",
            "timestamp": 1,
            "createdAt": "2024-01-01T00:00:00Z"
        });
        assert!(serde_json::from_value::<IpfsContent>(payload).is_err());
    }

    #[test]
    fn comment_requires_parent_bottle() {
        let payload = json!({
            "type": "comment",
            "content": "hi",
            "userId": "u1",
            "timestamp": 1,
            "createdAt": "2024-01-01T00:00:00Z"
        });
        assert!(serde_json::from_value::<IpfsContent>(payload).is_err());
    }
}
