//! Narrowing and widening between chain-native `U256` values and application types.
//!
//! Every `Raw*` -> normalized conversion in the crate goes through these helpers so the
//! same range policy applies everywhere: values that do not fit are rejected, never truncated.

use chrono::{DateTime, Timelike, Utc};
use primitive_types::U256;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("field `{field}` value {value} does not fit in u64")]
    OutOfRange { field: &'static str, value: U256 },

    #[error("field `{field}` value {value} is not a representable timestamp")]
    TimestampOutOfRange { field: &'static str, value: U256 },

    #[error("field `{field}` is before the unix epoch ({seconds}s)")]
    NegativeTimestamp { field: &'static str, seconds: i64 },

    #[error("field `{field}` carries sub-second precision; chain time is whole seconds")]
    SubsecondPrecision { field: &'static str },
}

/// Narrows a wide integer into `u64`, failing when the value needs more than 64 bits.
pub fn u256_to_u64(field: &'static str, value: U256) -> Result<u64, ConversionError> {
    if value.bits() > 64 {
        return Err(ConversionError::OutOfRange { field, value });
    }
    Ok(value.low_u64())
}

/// Interprets a wide integer as unix seconds.
pub fn u256_to_datetime(field: &'static str, value: U256) -> Result<DateTime<Utc>, ConversionError> {
    let out_of_range = || ConversionError::TimestampOutOfRange { field, value };
    if value.bits() > 63 {
        return Err(out_of_range());
    }
    let seconds = value.low_u64() as i64;
    DateTime::from_timestamp(seconds, 0).ok_or_else(out_of_range)
}

/// Widens a calendar timestamp back into unix seconds.
pub fn datetime_to_u256(field: &'static str, value: &DateTime<Utc>) -> Result<U256, ConversionError> {
    if value.nanosecond() != 0 {
        return Err(ConversionError::SubsecondPrecision { field });
    }
    let seconds = value.timestamp();
    if seconds < 0 {
        return Err(ConversionError::NegativeTimestamp { field, seconds });
    }
    Ok(U256::from(seconds as u64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn u64_boundary_is_accepted_and_one_past_is_rejected() {
        let max = U256::from(u64::MAX);
        assert_eq!(u256_to_u64("id", max), Ok(u64::MAX));

        let err = u256_to_u64("id", max + U256::one()).unwrap_err();
        assert!(matches!(err, ConversionError::OutOfRange { field: "id", .. }));
    }

    #[test]
    fn seconds_map_to_utc_datetimes() {
        let dt = u256_to_datetime("createdAt", U256::from(1_700_000_000u64)).unwrap();
        assert_eq!(dt, Utc.timestamp_opt(1_700_000_000, 0).unwrap());
        assert_eq!(datetime_to_u256("createdAt", &dt).unwrap(), U256::from(1_700_000_000u64));
    }

    #[test]
    fn huge_seconds_are_rejected() {
        let err = u256_to_datetime("expiresAt", U256::from(i64::MAX as u64)).unwrap_err();
        assert!(matches!(err, ConversionError::TimestampOutOfRange { .. }));

        let err = u256_to_datetime("expiresAt", U256::MAX).unwrap_err();
        assert!(matches!(err, ConversionError::TimestampOutOfRange { .. }));
    }

    #[test]
    fn pre_epoch_and_fractional_times_do_not_widen() {
        let before = Utc.timestamp_opt(-1, 0).unwrap();
        assert!(matches!(
            datetime_to_u256("createdAt", &before),
            Err(ConversionError::NegativeTimestamp { seconds: -1, .. })
        ));

        let fractional = Utc.timestamp_millis_opt(1_700_000_000_500).unwrap();
        assert!(matches!(
            datetime_to_u256("createdAt", &fractional),
            Err(ConversionError::SubsecondPrecision { .. })
        ));
    }
}
