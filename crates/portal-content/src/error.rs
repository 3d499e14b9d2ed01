//! Errors raised while talking to the upstream CMS.
//!
//! None of these reach a page render: [`crate::LayoutLoader`] logs them and
//! degrades the affected widget instead.

use portal_core::NormalizeError;
use thiserror::Error;

pub type ContentResult<T> = Result<T, ContentError>;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("network error: {0}")]
    Network(String),
    #[error("upstream timeout")]
    Timeout,
    #[error("upstream rejected the bearer token")]
    Unauthorized,
    #[error("upstream returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed upstream envelope: {0}")]
    Envelope(String),
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}

impl ContentError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Network(_) => "NETWORK_ERROR",
            Self::Timeout => "UPSTREAM_TIMEOUT",
            Self::Unauthorized => "UPSTREAM_AUTH",
            Self::Status { .. } => "UPSTREAM_STATUS",
            Self::Envelope(_) => "UPSTREAM_INVALID_RESPONSE",
            Self::Normalize(err) => err.code(),
        }
    }
}

impl From<reqwest::Error> for ContentError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            Self::Timeout
        } else {
            Self::Network(value.to_string())
        }
    }
}
