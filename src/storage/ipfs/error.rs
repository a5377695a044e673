use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Closed set of failure kinds a content store client can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IpfsErrorCode {
    InitFailed,
    UploadFailed,
    FetchFailed,
    InvalidCid,
    ParseFailed,
    NotInitialized,
    SpaceRegistrationFailed,
}

impl IpfsErrorCode {
    pub const ALL: [IpfsErrorCode; 7] = [
        IpfsErrorCode::InitFailed,
        IpfsErrorCode::UploadFailed,
        IpfsErrorCode::FetchFailed,
        IpfsErrorCode::InvalidCid,
        IpfsErrorCode::ParseFailed,
        IpfsErrorCode::NotInitialized,
        IpfsErrorCode::SpaceRegistrationFailed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IpfsErrorCode::InitFailed => "INIT_FAILED",
            IpfsErrorCode::UploadFailed => "UPLOAD_FAILED",
            IpfsErrorCode::FetchFailed => "FETCH_FAILED",
            IpfsErrorCode::InvalidCid => "INVALID_CID",
            IpfsErrorCode::ParseFailed => "PARSE_FAILED",
            IpfsErrorCode::NotInitialized => "NOT_INITIALIZED",
            IpfsErrorCode::SpaceRegistrationFailed => "SPACE_REGISTRATION_FAILED",
        }
    }
}

impl fmt::Display for IpfsErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown IPFS error code: {0}")]
pub struct UnknownErrorCode(pub String);

impl FromStr for IpfsErrorCode {
    type Err = UnknownErrorCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IpfsErrorCode::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| UnknownErrorCode(s.to_string()))
    }
}

/// Error raised by a content store. Match on [`IpfsError::code`], not on the message.
#[derive(Debug, Error)]
#[error("{code}: {message}")]
pub struct IpfsError {
    code: IpfsErrorCode,
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl IpfsError {
    pub fn new(code: IpfsErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Attaches the underlying failure that caused this error.
    pub fn with_source(mut self, source: impl Into<BoxError>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn code(&self) -> IpfsErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn codes_round_trip_through_their_wire_names() {
        for code in IpfsErrorCode::ALL {
            assert_eq!(code.as_str().parse::<IpfsErrorCode>().unwrap(), code);
            assert_eq!(
                serde_json::to_value(code).unwrap(),
                serde_json::Value::from(code.as_str())
            );
        }
        assert!("TIMEOUT".parse::<IpfsErrorCode>().is_err());
        assert!(serde_json::from_str::<IpfsErrorCode>("\"TIMEOUT\"").is_err());
    }

    #[test]
    fn wrapped_cause_is_exposed_as_source() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = IpfsError::new(IpfsErrorCode::ParseFailed, "bad payload").with_source(parse);

        assert_eq!(err.code(), IpfsErrorCode::ParseFailed);
        assert_eq!(err.to_string(), "PARSE_FAILED: bad payload");
        assert!(err.source().is_some());
        assert!(IpfsError::new(IpfsErrorCode::InitFailed, "x").source().is_none());
    }
}
