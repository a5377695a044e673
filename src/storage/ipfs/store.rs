//! Content store seam plus an in-process, content-addressed implementation.

use super::address::{compute_cid, parse_cid};
use super::content::{IpfsContent, UploadResult};
use super::error::{IpfsError, IpfsErrorCode};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

/// Append-only content store: payloads are written once and read back by CID.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn upload(&self, content: &IpfsContent) -> Result<UploadResult, IpfsError>;

    async fn fetch(&self, cid: &str) -> Result<IpfsContent, IpfsError>;
}

/// Keeps serialized payloads in memory keyed by their CID.
pub struct MemoryContentStore {
    gateway_url: Option<String>,
    blobs: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryContentStore {
    pub fn new(gateway_url: impl Into<String>) -> Self {
        let gateway = gateway_url.into().trim_end_matches('/').to_string();
        Self {
            gateway_url: Some(gateway),
            blobs: RwLock::new(HashMap::new()),
        }
    }

    /// A store that was never set up; every call fails with `NOT_INITIALIZED`.
    pub fn uninitialized() -> Self {
        Self {
            gateway_url: None,
            blobs: RwLock::new(HashMap::new()),
        }
    }

    fn gateway(&self) -> Result<&str, IpfsError> {
        self.gateway_url.as_deref().ok_or_else(|| {
            IpfsError::new(IpfsErrorCode::NotInitialized, "content store has not been initialized")
        })
    }

    pub async fn len(&self) -> usize {
        self.blobs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.blobs.read().await.is_empty()
    }
}

#[async_trait]
impl ContentStore for MemoryContentStore {
    async fn upload(&self, content: &IpfsContent) -> Result<UploadResult, IpfsError> {
        let gateway = self.gateway()?;
        let bytes = serde_json::to_vec(content).map_err(|e| {
            IpfsError::new(IpfsErrorCode::UploadFailed, "failed to serialize content").with_source(e)
        })?;
        let cid = compute_cid(&bytes)?.to_string();
        let size = bytes.len() as u64;

        self.blobs.write().await.entry(cid.clone()).or_insert(bytes);
        debug!(%cid, size, kind = content.kind(), "stored content");

        Ok(UploadResult {
            url: format!("{}/{}", gateway, cid),
            cid,
            size,
        })
    }

    async fn fetch(&self, cid: &str) -> Result<IpfsContent, IpfsError> {
        self.gateway()?;
        let key = parse_cid(cid)?.to_string();

        let blobs = self.blobs.read().await;
        let bytes = blobs.get(&key).ok_or_else(|| {
            IpfsError::new(IpfsErrorCode::FetchFailed, format!("no content stored under {}", key))
        })?;
        serde_json::from_slice(bytes).map_err(|e| {
            IpfsError::new(IpfsErrorCode::ParseFailed, format!("content under {} is not a bottle or comment", key))
                .with_source(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::ipfs::content::{BottleContent, CommentContent};
    use chrono::{TimeZone, Utc};

    fn bottle() -> IpfsContent {
        let at = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        BottleContent::new("hello", "u1", at).into()
    }

    #[tokio::test]
    async fn upload_then_fetch_returns_same_content() {
        let store = MemoryContentStore::new("https://gw.example/ipfs/");
        let uploaded = store.upload(&bottle()).await.unwrap();

        assert_eq!(uploaded.url, format!("https://gw.example/ipfs/{}", uploaded.cid));
        assert!(uploaded.size > 0);
        assert_eq!(store.fetch(&uploaded.cid).await.unwrap(), bottle());
    }

    #[tokio::test]
    async fn re_uploading_is_idempotent() {
        let store = MemoryContentStore::new("https://gw.example/ipfs");
        let first = store.upload(&bottle()).await.unwrap();
        let second = store.upload(&bottle()).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(store.len().await, 1);

        let at = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let comment: IpfsContent = CommentContent::new("hello", 1, "u1", at).into();
        assert_ne!(store.upload(&comment).await.unwrap().cid, first.cid);
    }

    #[tokio::test]
    async fn fetch_failures_carry_their_codes() {
        let store = MemoryContentStore::new("https://gw.example/ipfs");
        let err = store.fetch("definitely not a cid").await.unwrap_err();
        assert_eq!(err.code(), IpfsErrorCode::InvalidCid);

        let missing = compute_cid(b"never stored").unwrap().to_string();
        let err = store.fetch(&missing).await.unwrap_err();
        assert_eq!(err.code(), IpfsErrorCode::FetchFailed);
    }

    #[tokio::test]
    async fn unparseable_blob_is_a_parse_failure() {
        let store = MemoryContentStore::new("https://gw.example/ipfs");
        let bytes = br#"{"type":"poll","question":"?"}"#.to_vec();
        let cid = compute_cid(&bytes).unwrap().to_string();
        store.blobs.write().await.insert(cid.clone(), bytes);

        assert_eq!(store.fetch(&cid).await.unwrap_err().code(), IpfsErrorCode::ParseFailed);
    }

    #[tokio::test]
    async fn uninitialized_store_refuses_work() {
        let store = MemoryContentStore::uninitialized();
        assert_eq!(store.upload(&bottle()).await.unwrap_err().code(), IpfsErrorCode::NotInitialized);
        assert_eq!(store.fetch("bafy").await.unwrap_err().code(), IpfsErrorCode::NotInitialized);
    }
}
