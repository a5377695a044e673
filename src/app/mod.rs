pub mod bottle_service;
pub mod ledger;

pub use bottle_service::{BottleService, CreatedBottle, CreatedComment, LikeOutcome, ServiceError};
pub use ledger::{LedgerError, RecordLedger};
