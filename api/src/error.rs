//! Failure taxonomy for ranking fetches.
//!
//! Errors are stored in reactive state and compared for re-render decisions,
//! so every variant carries owned strings rather than source errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("KOBIS API key is not configured (set KOBIS_API_KEY)")]
    MissingApiKey,
    #[error("request could not be sent: {0}")]
    Network(String),
    #[error("ranking API answered HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },
    #[error("unexpected response body: {0}")]
    Malformed(String),
    #[error("ranking API rejected the request ({code}): {message}")]
    Rejected { code: String, message: String },
}

/// Coarse classification the UI could branch on; today it only displays text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NetworkFailure,
    HttpStatusFailure,
    MalformedResponseFailure,
}

impl FetchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Network(_) => ErrorKind::NetworkFailure,
            Self::MissingApiKey | Self::HttpStatus { .. } | Self::Rejected { .. } => {
                ErrorKind::HttpStatusFailure
            }
            Self::Malformed(_) => ErrorKind::MalformedResponseFailure,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("expected an 8-digit YYYYMMDD date, got {0:?}")]
    InvalidFormat(String),
}
