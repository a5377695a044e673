//! Single-value `type` discriminants carried by the joined shapes.
//!
//! Each tag only (de)serializes its own literal, so a joined bottle always reads
//! `"type": "bottle"` and a payload tagged otherwise fails to decode as one.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BottleTag {
    #[default]
    #[serde(rename = "bottle")]
    Bottle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CommentTag {
    #[default]
    #[serde(rename = "comment")]
    Comment,
}
