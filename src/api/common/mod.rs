//
//  travis-client
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types
//!
//! Shared types used by every endpoint: the closed error taxonomy, the
//! Travis error body, and pagination metadata (re-exported from the
//! [`pagination`] submodule).
//!
//! # Example
//!
//! ```rust
//! use travis_client::api::common::TravisError;
//!
//! fn describe<T>(result: Result<T, TravisError>) -> String {
//!     match result {
//!         Ok(_) => "ok".to_string(),
//!         Err(TravisError::NoData) => "nothing came back".to_string(),
//!         Err(TravisError::Http { status, message }) => format!("{}: {}", status, message),
//!         Err(e) => e.to_string(),
//!     }
//! }
//! ```

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod pagination;

pub use pagination::*;

/// Error type for every request-producing operation.
///
/// | Variant | Cause |
/// |---------|-------|
/// | `NoData` | No body came back, including transport failures |
/// | `DecodingFailed` | Body present but not the expected shape |
/// | `Http` | Server answered with a non-2xx status |
/// | `Unlinked` | Tried to follow an embed that has no `@href` |
/// | `Cancelled` | The request was cancelled through its handle |
/// | `InvalidUrl` | A request descriptor did not compose into a URL |
/// | `InvalidOrigin` | The configured origin override is more than scheme, host and port |
/// | `InvalidCredential` | The token cannot be sent as a header value |
/// | `Client` | The HTTP session could not be built |
///
/// Nothing is retried internally; the caller decides what to do.
#[derive(Error, Debug)]
pub enum TravisError {
    /// The transport produced no body to decode.
    ///
    /// Transport-level failures (DNS, TLS, connection resets) land here as
    /// well; they are logged before being folded into this variant.
    #[error("No data returned from the Travis API")]
    NoData,

    /// The body was present but did not decode into the requested type.
    #[error("Unable to decode response: {0}")]
    DecodingFailed(#[source] serde_json::Error),

    /// The server answered with a non-success status code.
    ///
    /// `message` is taken from the Travis error body when one is present,
    /// otherwise it is the raw body text.
    #[error("Travis API error ({status}): {message}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Server supplied error message
        message: String,
    },

    /// The embedded resource carries no follow-link, so its full
    /// representation cannot be fetched.
    #[error("Embedded {resource_type} has no link to follow")]
    Unlinked {
        /// The `@type` tag of the embed
        resource_type: String,
    },

    /// The request was cancelled before it completed.
    #[error("Request cancelled")]
    Cancelled,

    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The origin override has a path, query or fragment, or is not http(s).
    #[error("Origin override must be a bare http(s) origin: {0}")]
    InvalidOrigin(String),

    #[error("Token contains characters that are not valid in an HTTP header")]
    InvalidCredential,

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Result alias used throughout the API layer.
pub type Result<T, E = TravisError> = std::result::Result<T, E>;

/// Error body returned by the v3 API.
///
/// ```json
/// {"@type": "error", "error_type": "not_found", "error_message": "repository not found (or insufficient access)"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Machine readable error kind, e.g. `not_found`
    pub error_type: String,
    /// Human readable message
    pub error_message: String,
}

impl TravisError {
    /// Builds an [`TravisError::Http`] from a status and raw body, pulling
    /// the message out of the Travis error format when it parses.
    pub fn from_status(status: u16, body: &[u8]) -> Self {
        let message = match serde_json::from_slice::<ErrorBody>(body) {
            Ok(error) => error.error_message,
            Err(_) => {
                let text = String::from_utf8_lossy(body).trim().to_string();
                if text.is_empty() {
                    StatusCode::from_u16(status)
                        .ok()
                        .and_then(|s| s.canonical_reason())
                        .unwrap_or("unknown status")
                        .to_string()
                } else {
                    text
                }
            }
        };

        Self::Http { status, message }
    }

    /// Returns the HTTP status when this error came from a non-2xx response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_uses_error_message() {
        let body = br#"{"@type":"error","error_type":"not_found","error_message":"build not found (or insufficient access)"}"#;
        let error = TravisError::from_status(404, body);
        assert!(error.is_not_found());
        match error {
            TravisError::Http { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "build not found (or insufficient access)");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_status_falls_back_to_body_text() {
        let error = TravisError::from_status(502, b"Bad gateway\n");
        assert_eq!(error.to_string(), "Travis API error (502): Bad gateway");
    }

    #[test]
    fn test_from_status_with_empty_body_uses_reason() {
        let error = TravisError::from_status(403, b"");
        assert_eq!(error.to_string(), "Travis API error (403): Forbidden");
        assert_eq!(error.status(), Some(403));
    }

    #[test]
    fn test_non_http_errors_have_no_status() {
        assert_eq!(TravisError::NoData.status(), None);
        assert!(!TravisError::Cancelled.is_not_found());
    }
}
