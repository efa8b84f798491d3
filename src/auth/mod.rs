//
//  travis-client
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication
//!
//! The Travis v3 API authenticates with an API token sent in every request
//! as `Authorization: token <credential>`. The token is owned by the client
//! for its lifetime and is attached once, at session level.
//!
//! ## Example
//!
//! ```rust
//! use travis_client::auth::Credential;
//!
//! let credential = Credential::new("abc123");
//! assert_eq!(format!("{:?}", credential), "Credential(<redacted>)");
//! ```

use std::fmt;

use reqwest::header::HeaderValue;

use crate::api::common::{Result, TravisError};

/// Opaque API token.
///
/// `Debug` never prints the token, so a credential can sit inside structs
/// that are logged or traced.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    token: String,
}

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Checks whether the token is empty or whitespace only.
    pub fn is_empty(&self) -> bool {
        self.token.trim().is_empty()
    }

    /// Builds the `Authorization` header value for this token.
    ///
    /// The value is marked sensitive so HTTP-level tracing in the stack
    /// below does not print it.
    ///
    /// # Errors
    ///
    /// Returns [`TravisError::InvalidCredential`] if the token contains
    /// characters that cannot appear in a header (e.g. a newline).
    pub fn authorization(&self) -> Result<HeaderValue> {
        let mut value = HeaderValue::from_str(&format!("token {}", self.token.trim()))
            .map_err(|_| TravisError::InvalidCredential)?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

impl From<String> for Credential {
    fn from(token: String) -> Self {
        Self::new(token)
    }
}

impl From<&str> for Credential {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorization_header() {
        let value = Credential::new(" secret ").authorization().unwrap();
        assert_eq!(value.to_str().unwrap(), "token secret");
        assert!(value.is_sensitive());
    }

    #[test]
    fn test_invalid_token_is_rejected() {
        let result = Credential::new("line\nbreak").authorization();
        assert!(matches!(result, Err(TravisError::InvalidCredential)));
    }

    #[test]
    fn test_debug_is_redacted() {
        let rendered = format!("{:?}", Credential::from("super-secret"));
        assert!(!rendered.contains("super-secret"));
    }

    #[test]
    fn test_is_empty() {
        assert!(Credential::new("  ").is_empty());
        assert!(!Credential::new("t").is_empty());
    }
}
