//! Mirrors of on-chain records, in raw (`U256`) and normalized form.

pub mod bottle;
pub mod comment;
pub mod convert;

pub use bottle::{ContractBottle, RawContractBottle};
pub use comment::{ContractComment, RawContractComment};
pub use convert::{datetime_to_u256, u256_to_datetime, u256_to_u64, ConversionError};
