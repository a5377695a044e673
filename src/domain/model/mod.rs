//! Application-level bottles and comments.
//!
//! These merge contract records with off-chain content and derived counters. Counters
//! are supplied by whoever aggregates likes and comments; nothing here computes them.

pub mod bottle;
pub mod comment;
pub mod feed;
pub mod tag;

pub use bottle::{Bottle, BottleWithContent, RawBottle};
pub use comment::{Comment, CommentWithContent, ParentMismatch, RawComment};
pub use feed::FeedItem;
pub use tag::{BottleTag, CommentTag};
