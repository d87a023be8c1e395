//! Error definitions for the API client.
//!
//! # Responsibilities
//! - Distinguish client-side validation failures from remote failures
//! - Surface transport and server errors unmodified
//!
//! # Design Decisions
//! - Required-field checks fail fast, before any network I/O
//! - Remote errors carry the HTTP status so callers can decide how to react
//!   (e.g. treat a 404 on delete as non-fatal during cleanup)

use thiserror::Error;

/// Errors returned by API operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required service identifier was empty.
    #[error("missing required field: service_id")]
    MissingService,

    /// A required service version was zero or unset.
    #[error("missing required field: version")]
    MissingVersion,

    /// A required resource name was empty.
    #[error("missing required field: name")]
    MissingName,

    /// The configured base URL could not be parsed.
    #[error("invalid API base URL: {0}")]
    Url(#[from] url::ParseError),

    /// The client configuration was rejected.
    #[error("invalid client configuration: {0}")]
    Config(String),

    /// The request could not be sent or the response body could not be read.
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("API returned {status}: {detail}")]
    Remote { status: u16, detail: String },
}

impl ApiError {
    /// True if this error is the remote equivalent of "not found".
    ///
    /// Callers deleting speculatively during cleanup use this to tolerate
    /// absence without suppressing other failures.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Remote { status: 404, .. })
    }

    /// True if this error was raised client-side before any request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ApiError::MissingService | ApiError::MissingVersion | ApiError::MissingName
        )
    }
}

/// Convenience alias used throughout the crate.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_detection() {
        let err = ApiError::Remote {
            status: 404,
            detail: "record not found".into(),
        };
        assert!(err.is_not_found());
        assert!(!err.is_validation());

        let err = ApiError::Remote {
            status: 500,
            detail: "boom".into(),
        };
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_validation_detection() {
        assert!(ApiError::MissingService.is_validation());
        assert!(ApiError::MissingVersion.is_validation());
        assert!(ApiError::MissingName.is_validation());
    }
}
