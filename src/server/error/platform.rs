use std::time::Duration;

use thiserror::Error;

/// Failure of a Discord command issued by the temporary voice manager.
///
/// The variants follow how the manager reacts rather than how Discord reports them:
/// permission problems are logged as warnings, a missing channel is treated as an
/// implicit deletion, and everything else is logged as an error. None of them are retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// The bot lacks the rights for the operation (HTTP 403).
    #[error("Missing permissions: {0}")]
    Permission(String),

    /// The channel or member no longer exists (HTTP 404 or absent from the guild).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Discord rejected the request due to rate limiting (HTTP 429).
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// The request did not complete within the allotted time.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Any other failure reported by the client library.
    #[error("{0}")]
    Unknown(String),
}

impl PlatformError {
    /// Maps a serenity error onto the platform error taxonomy.
    ///
    /// HTTP failures are classified by status code; everything else (gateway, model and
    /// decoding errors) becomes `Unknown`.
    pub fn from_serenity(err: serenity::Error) -> Self {
        let status = match &err {
            serenity::Error::Http(http_err) => http_err.status_code().map(|s| s.as_u16()),
            _ => None,
        };

        match status {
            Some(403) => Self::Permission(err.to_string()),
            Some(404) => Self::NotFound(err.to_string()),
            Some(429) => Self::RateLimited(err.to_string()),
            _ => Self::Unknown(err.to_string()),
        }
    }

    /// Returns true when the failure means the target is already gone.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<serenity::Error> for PlatformError {
    fn from(err: serenity::Error) -> Self {
        Self::from_serenity(err)
    }
}
