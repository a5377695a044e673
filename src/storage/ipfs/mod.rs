//! IPFS-shaped content storage: payloads, upload descriptors, errors and the store seam.

pub mod address;
pub mod content;
pub mod error;
pub mod store;

pub use address::{compute_cid, parse_cid};
pub use content::{BottleContent, CommentContent, IpfsContent, UploadResult};
pub use error::{IpfsError, IpfsErrorCode};
pub use store::{ContentStore, MemoryContentStore};
