//
//  travis-client
//  api/host.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Deployment Hosts
//!
//! Travis CI runs two public deployments of the v3 API. A client talks to
//! exactly one of them, chosen when the client is constructed.
//!
//! | Selector | Host |
//! |----------|------|
//! | [`Host::Org`] | `api.travis-ci.org` |
//! | [`Host::Com`] | `api.travis-ci.com` |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// API host for the open-source deployment.
pub const TRAVIS_ORG_API: &str = "api.travis-ci.org";

/// API host for the private/commercial deployment.
pub const TRAVIS_COM_API: &str = "api.travis-ci.com";

/// Identifies which Travis CI deployment a client targets.
///
/// The set of selectors is closed, so resolving a host can never fail.
///
/// # Example
///
/// ```rust
/// use travis_client::api::Host;
///
/// assert_eq!(Host::Org.host(), "api.travis-ci.org");
/// assert_eq!("com".parse::<Host>().unwrap(), Host::Com);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Host {
    /// travis-ci.org, the open-source deployment
    #[default]
    Org,
    /// travis-ci.com, the private/enterprise deployment
    Com,
}

impl Host {
    /// Returns the network host name serving this deployment's API.
    pub fn host(&self) -> &'static str {
        match self {
            Self::Org => TRAVIS_ORG_API,
            Self::Com => TRAVIS_COM_API,
        }
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Org => f.write_str("org"),
            Self::Com => f.write_str("com"),
        }
    }
}

impl FromStr for Host {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "org" | "travis-ci.org" | TRAVIS_ORG_API => Ok(Self::Org),
            "com" | "travis-ci.com" | TRAVIS_COM_API => Ok(Self::Com),
            other => Err(format!("unknown Travis host '{}', expected 'org' or 'com'", other)),
        }
    }
}
