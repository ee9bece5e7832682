//! Error type definitions.

use http::StatusCode;
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// A `Result` alias where the `Err` case is `staffdir::Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// Text returned to callers for every error that is not their fault.
const INTERNAL_MESSAGE: &str = "internal server error";

/// The error type for the directory client and the notes store.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("Invalid URL: {0}")]
    InvalidUrl(url::ParseError),
    #[error("Failed to setup HTTP client: {0}")]
    HttpClientSetup(reqwest::Error),
    #[error("Failed to deserialize response: {0}")]
    Deserialize(reqwest::Error),
    #[error("Http error: {0}")]
    Http(reqwest::Error),
    #[error(transparent)]
    Upstream(UpstreamError),
    #[error(transparent)]
    InvalidParams(#[from] serde_qs::Error),
    #[error("Invalid result count {0} (must be between 1 and 5000)")]
    InvalidResults(String),
    #[error("Employee ID must not be empty")]
    EmptyEmployeeId,
    #[error("Note content must not be empty")]
    EmptyContent,
}

impl Error {
    /// Returns true if the error was caused by the random-user API: a
    /// transport failure, a non-success status or a payload we couldn't
    /// decode.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Error::Http(_) | Error::Deserialize(_) | Error::Upstream(_)
        )
    }

    /// Returns true if the caller passed a blank employee ID or note content.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::EmptyEmployeeId | Error::EmptyContent)
    }

    /// The HTTP status an API layer should answer with.
    pub fn status_code(&self) -> StatusCode {
        if self.is_invalid_argument() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    /// The message that is safe to hand back to a caller. Validation errors
    /// are returned verbatim, everything else is replaced by a generic text
    /// so upstream details only end up in the logs.
    pub fn public_message(&self) -> String {
        if self.is_invalid_argument() {
            self.to_string()
        } else {
            INTERNAL_MESSAGE.to_string()
        }
    }
}

/// An error reported by the random-user API, either through a non-success
/// status or through an `error` field in an otherwise successful response.
#[derive(Deserialize, Debug)]
pub struct UpstreamError {
    #[serde(skip)]
    pub status: u16,
    #[serde(skip)]
    pub method: http::Method,
    #[serde(skip)]
    pub path: String,
    #[serde(rename = "error")]
    pub message: Option<String>,
}

impl UpstreamError {
    pub(crate) fn new(
        status: u16,
        method: http::Method,
        path: String,
        message: Option<String>,
    ) -> Self {
        Self {
            status,
            method,
            path,
            message,
        }
    }
}

impl std::error::Error for UpstreamError {}

impl fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(msg) = self.message.as_ref() {
            write!(
                f,
                "Received {} on {} {}: {}",
                self.status, self.method, self.path, msg
            )
        } else {
            write!(f, "Received {} on {} {}", self.status, self.method, self.path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_arguments_map_to_bad_request() {
        for err in [Error::EmptyEmployeeId, Error::EmptyContent] {
            assert!(err.is_invalid_argument());
            assert!(!err.is_upstream());
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
            assert_eq!(err.public_message(), err.to_string());
        }
    }

    #[test]
    fn upstream_details_stay_private() {
        let err = Error::Upstream(UpstreamError::new(
            503,
            http::Method::GET,
            "/api/".to_string(),
            Some("Uh oh, something has gone wrong".to_string()),
        ));
        assert!(err.is_upstream());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "internal server error");
        assert_eq!(
            err.to_string(),
            "Received 503 on GET /api/: Uh oh, something has gone wrong"
        );
    }

    #[test]
    fn other_errors_are_internal() {
        let err = Error::InvalidResults("0".to_string());
        assert!(!err.is_upstream());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
