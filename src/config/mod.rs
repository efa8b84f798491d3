//
//  travis-client
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! [`ClientConfig`] holds everything needed to build an HTTP session for the
//! Travis API apart from the token. Library users construct it in code.
//!
//! The `travis` binary additionally reads a [`Config`] file from the
//! platform config directory:
//!
//! - **Linux**: `~/.config/travis/config.toml`
//! - **macOS**: `~/Library/Application Support/travis/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\travis\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! token = "your-api-token"
//!
//! [client]
//! host = "com"
//! user_agent = "my-dashboard/1.0"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::api::Host;

/// Value of the `Travis-API-Version` header.
pub const API_VERSION: &str = "3";

/// `User-Agent` sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("travis-client/", env!("CARGO_PKG_VERSION"));

/// Settings for the shared HTTP session.
///
/// # Example
///
/// ```rust
/// use travis_client::api::Host;
/// use travis_client::config::ClientConfig;
///
/// let config = ClientConfig::default().with_host(Host::Com);
/// assert_eq!(config.api_version, "3");
/// assert!(config.user_agent.starts_with("travis-client/"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Deployment to talk to
    pub host: Host,

    /// `User-Agent` sent with every request
    pub user_agent: String,

    /// `Travis-API-Version` sent with every request
    pub api_version: String,

    /// Sends every request to this origin instead of the deployment host,
    /// keeping the request path and query. Used for proxies and local stubs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: Host::default(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            api_version: API_VERSION.to_string(),
            origin: None,
        }
    }
}

impl ClientConfig {
    pub fn with_host(mut self, host: Host) -> Self {
        self.host = host;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }
}

/// Configuration file read by the `travis` binary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Fallback token when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(default)]
    pub client: ClientConfig,
}

impl Config {
    /// Loads the configuration from the default location.
    ///
    /// A missing file is not an error; defaults are returned instead.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads the configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config file at {}", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Parses configuration from TOML text.
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Returns the platform specific path of `config.toml`.
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "travis").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
