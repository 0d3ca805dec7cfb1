//! Transport-level client errors.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong below the application protocol.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ClientErrorKind {
    /// The request did not complete (unreachable host, timeout, reset).
    #[display("network error: {_0}")]
    Network(String),
    /// The response body could not be decoded into the expected shape.
    #[display("malformed response: {_0}")]
    Malformed(String),
    /// Non-success HTTP status without a usable application payload.
    #[display("HTTP {code}: {detail}")]
    Status {
        /// HTTP status code.
        code: u16,
        /// Body or error text from the service.
        detail: String,
    },
}

/// Transport failure with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Client error: {} at {}:{}", kind, file, line)]
pub struct ClientError {
    /// Failure category.
    pub kind: ClientErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ClientError {
    /// Creates a new client error with caller location tracking.
    #[track_caller]
    #[instrument(skip(kind))]
    pub fn new(kind: ClientErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Shorthand for a [`ClientErrorKind::Malformed`] error.
    #[track_caller]
    pub fn malformed(detail: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::Malformed(detail.into()))
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::new(ClientErrorKind::Malformed(err.to_string()))
        } else {
            Self::new(ClientErrorKind::Network(err.to_string()))
        }
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(ClientErrorKind::Malformed(err.to_string()))
    }
}
