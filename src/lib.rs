//
//  travis-client
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Travis Client Library
//!
//! A typed client for the Travis CI v3 REST API.
//!
//! ## Overview
//!
//! The library issues authenticated HTTPS requests, decodes the JSON
//! responses into typed models, and follows the `@href` links of embedded
//! resources to their full representation.
//!
//! ## Module Structure
//!
//! - [`api`]: Request building, typed transport, embed following, endpoints
//! - [`auth`]: API token handling
//! - [`config`]: Client and CLI configuration
//! - [`models`]: Repository, Build, Job, Setting and their minimal forms
//! - [`output`]: Table and JSON rendering for the `travis` binary
//! - [`cli`]: Command-line interface definitions using clap
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use travis_client::api::{Host, TravisClient};
//!
//! # async fn example() -> Result<(), travis_client::api::TravisError> {
//! let client = TravisClient::new("your-token", Host::Org)?;
//!
//! let builds = client.builds_for_repository("travis-ci/travis-web").await?;
//! if let Some(build) = builds.items.first() {
//!     if let Some(branch) = &build.branch {
//!         let branch = client.follow(branch).await?;
//!         println!("{} is default: {}", branch.name, branch.default_branch);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

/// HTTP client for the Travis CI v3 API.
///
/// Handles request building, authentication headers, decoding and the
/// following of embedded resources.
pub mod api;

/// API token handling.
pub mod auth;

/// Client configuration and the CLI configuration file.
pub mod config;

/// Decode targets for API responses.
pub mod models;

/// Output formatting for the CLI (table and JSON).
pub mod output;

/// Command-line interface definitions.
pub mod cli;

pub use api::{Host, TravisClient, TravisError};
pub use cli::Cli;

/// Application name constant.
pub const APP_NAME: &str = "travis";

/// Library version, derived from Cargo.toml at compile time.
///
/// ```rust
/// use travis_client::VERSION;
///
/// assert!(!VERSION.is_empty());
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
/// - `16-31`: Operation-related issues
pub mod exit_codes {
    use crate::api::TravisError;

    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments.
    pub const USAGE: i32 = 2;

    /// Token missing, invalid or lacking access.
    pub const AUTH_ERROR: i32 = 4;

    /// The requested resource does not exist or is not visible.
    pub const NOT_FOUND: i32 = 8;

    /// The request was cancelled.
    pub const CANCELLED: i32 = 16;

    /// Picks the exit code for a failed command.
    pub fn for_error(error: &anyhow::Error) -> i32 {
        match error.downcast_ref::<TravisError>() {
            Some(TravisError::Http { status: 401 | 403, .. }) => AUTH_ERROR,
            Some(TravisError::InvalidCredential) => AUTH_ERROR,
            Some(TravisError::Http { status: 404, .. }) => NOT_FOUND,
            Some(TravisError::Cancelled) => CANCELLED,
            _ => ERROR,
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_exit_code_mapping() {
            let not_found = anyhow::Error::new(TravisError::Http {
                status: 404,
                message: "missing".into(),
            });
            assert_eq!(for_error(&not_found), NOT_FOUND);

            let forbidden = anyhow::Error::new(TravisError::from_status(403, b""));
            assert_eq!(for_error(&forbidden), AUTH_ERROR);

            assert_eq!(for_error(&anyhow::anyhow!("boom")), ERROR);
            assert_eq!(for_error(&anyhow::Error::new(TravisError::NoData)), ERROR);
        }
    }
}
