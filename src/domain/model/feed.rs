use super::bottle::BottleWithContent;
use super::comment::CommentWithContent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of a mixed bottle/comment feed.
///
/// Both members carry their own `type` discriminant, so the enum itself is untagged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeedItem {
    Bottle(BottleWithContent),
    Comment(CommentWithContent),
}

impl FeedItem {
    pub fn id(&self) -> u64 {
        match self {
            FeedItem::Bottle(b) => b.bottle.id,
            FeedItem::Comment(c) => c.comment.id,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            FeedItem::Bottle(b) => b.bottle.created_at,
            FeedItem::Comment(c) => c.comment.created_at,
        }
    }

    pub fn user_id(&self) -> &str {
        match self {
            FeedItem::Bottle(b) => &b.user_id,
            FeedItem::Comment(c) => &c.user_id,
        }
    }
}

impl From<BottleWithContent> for FeedItem {
    fn from(item: BottleWithContent) -> Self {
        FeedItem::Bottle(item)
    }
}

impl From<CommentWithContent> for FeedItem {
    fn from(item: CommentWithContent) -> Self {
        FeedItem::Comment(item)
    }
}
