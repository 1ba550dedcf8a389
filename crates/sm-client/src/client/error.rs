use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that can occur during API calls
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error: {message} (code: {code}) {location}")]
    Api {
        code: String,
        message: String,
        location: ErrorLocation,
    },

    /// Optimistic-locking rejection (HTTP 409). Carries the server's current
    /// version when the error envelope includes it.
    #[error("Conflict: {message} (current version: {current_version:?}) {location}")]
    Conflict {
        message: String,
        current_version: Option<i32>,
        location: ErrorLocation,
    },

    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid response payload: {source} {location}")]
    Payload {
        #[source]
        source: sm_core::CoreError,
        location: ErrorLocation,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// True for stale-version rejections that require rollback + refetch
    pub fn is_conflict(&self) -> bool {
        matches!(self, ClientError::Conflict { .. })
    }

    /// Transport-level failures may be retried; API rejections are final.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ClientError::Http { .. })
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

impl From<sm_core::CoreError> for ClientError {
    #[track_caller]
    fn from(err: sm_core::CoreError) -> Self {
        ClientError::Payload {
            source: err,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;
