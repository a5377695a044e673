// Derives and validates content identifiers (CIDs) for stored payloads.

use super::error::{IpfsError, IpfsErrorCode};
use cid::multihash::Multihash;
use cid::Cid;
use sha2::{Digest, Sha256};
use std::str::FromStr;

/// Multicodec code for JSON payloads.
pub const JSON_CODEC: u64 = 0x0200;
/// Multihash code for sha2-256.
pub const SHA2_256: u64 = 0x12;

/// Computes the CIDv1 (json codec, sha2-256) of a serialized payload.
pub fn compute_cid(bytes: &[u8]) -> Result<Cid, IpfsError> {
    let digest = Sha256::digest(bytes);
    let hash = Multihash::<64>::wrap(SHA2_256, &digest).map_err(|e| {
        IpfsError::new(IpfsErrorCode::UploadFailed, "failed to wrap sha2-256 digest").with_source(e)
    })?;
    Ok(Cid::new_v1(JSON_CODEC, hash))
}

/// Parses a textual CID, reporting `INVALID_CID` on failure.
pub fn parse_cid(s: &str) -> Result<Cid, IpfsError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(IpfsError::new(IpfsErrorCode::InvalidCid, "empty CID"));
    }
    Cid::from_str(trimmed).map_err(|e| {
        IpfsError::new(IpfsErrorCode::InvalidCid, format!("invalid CID `{}`", trimmed)).with_source(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_bytes_share_a_cid() {
        let a = compute_cid(br#"{"type":"bottle"}"#).unwrap();
        let b = compute_cid(br#"{"type":"bottle"}"#).unwrap();
        let c = compute_cid(br#"{"type":"comment"}"#).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.codec(), JSON_CODEC);
        assert_eq!(a.hash().code(), SHA2_256);
    }

    #[test]
    fn printed_cid_parses_back() {
        let cid = compute_cid(b"hello").unwrap();
        let text = cid.to_string();
        assert!(text.starts_with('b'));
        assert_eq!(parse_cid(&text).unwrap(), cid);
    }

    #[test]
    fn garbage_is_an_invalid_cid() {
        for input in ["", "   ", "not-a-cid", "bafy!!"] {
            assert_eq!(parse_cid(input).unwrap_err().code(), IpfsErrorCode::InvalidCid);
        }
    }
}
