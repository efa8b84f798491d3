//
//  travis-client
//  api/request.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Request descriptors.
//!
//! A [`RequestDescriptor`] fully determines one network operation: scheme,
//! host, already-escaped path, method and query. It carries no headers; the
//! authentication and version headers live on the HTTP session and are
//! identical for every request a client sends.

use reqwest::Method;
use url::Url;

use super::Host;

/// Scheme used for every request. The API is only served over TLS.
pub const SCHEME: &str = "https";

/// Immutable description of a single API request.
///
/// # Example
///
/// ```rust
/// use travis_client::api::{Host, RequestDescriptor};
///
/// let request = RequestDescriptor::get(Host::Org, "/repo/travis-ci%2Ftravis-web/builds");
/// let url = request.url().unwrap();
/// assert_eq!(url.as_str(), "https://api.travis-ci.org/repo/travis-ci%2Ftravis-web/builds");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    host: Host,
    path: String,
    method: Method,
    query: Vec<(String, String)>,
}

impl RequestDescriptor {
    /// Creates a descriptor for `path` on `host`.
    ///
    /// `path` must already be percent-encoded; it is used verbatim.
    pub fn new(host: Host, path: impl Into<String>, query: Vec<(String, String)>, method: Method) -> Self {
        Self {
            host,
            path: path.into(),
            method,
            query,
        }
    }

    /// Shorthand for a GET without query parameters.
    pub fn get(host: Host, path: impl Into<String>) -> Self {
        Self::new(host, path, Vec::new(), Method::GET)
    }

    /// Shorthand for a POST without query parameters.
    pub fn post(host: Host, path: impl Into<String>) -> Self {
        Self::new(host, path, Vec::new(), Method::POST)
    }

    pub fn scheme(&self) -> &'static str {
        SCHEME
    }

    pub fn host(&self) -> Host {
        self.host
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Composes the absolute URL for this request.
    ///
    /// The path is not re-escaped, so an identifier escaped by the caller
    /// (e.g. `owner%2Frepo`) reaches the server encoded exactly once. A path
    /// may carry its own query string (`/builds?offset=25`); the descriptor's
    /// query pairs are appended after it.
    ///
    /// # Errors
    ///
    /// [`url::ParseError::RelativeUrlWithoutBase`] if the path does not start
    /// with exactly one `/`. The host of the returned URL is always the
    /// descriptor's deployment host.
    pub fn url(&self) -> Result<Url, url::ParseError> {
        if !self.path.starts_with('/') || self.path.starts_with("//") {
            return Err(url::ParseError::RelativeUrlWithoutBase);
        }

        let mut url = Url::parse(&format!("{}://{}/", SCHEME, self.host.host()))?;
        match self.path.split_once('?') {
            Some((path, query)) => {
                url.set_path(path);
                url.set_query(Some(query).filter(|q| !q.is_empty()));
            }
            None => url.set_path(&self.path),
        }
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(self.query.iter());
        }
        Ok(url)
    }
}

/// Percent-encodes a caller supplied identifier so it can be used as a
/// single path segment. Repository slugs contain `/`, which must be sent
/// as `%2F`.
///
/// ```rust
/// use travis_client::api::escape_segment;
///
/// assert_eq!(escape_segment("travis-ci/travis-web"), "travis-ci%2Ftravis-web");
/// assert_eq!(escape_segment("1234"), "1234");
/// ```
pub fn escape_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

/// Paging and ordering parameters accepted by the list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Maximum number of items per page
    pub limit: Option<u32>,
    /// Index of the first item to return
    pub offset: Option<u32>,
    /// Sort expression, e.g. `"id:desc"` or `"started_at"`
    pub sort_by: Option<String>,
}

impl ListOptions {
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn sort_by(mut self, sort_by: impl Into<String>) -> Self {
        self.sort_by = Some(sort_by.into());
        self
    }

    /// Encodes the options as query pairs, omitting unset values.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(limit) = self.limit {
            query.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(offset) = self.offset {
            query.push(("offset".to_string(), offset.to_string()));
        }
        if let Some(sort_by) = &self.sort_by {
            query.push(("sort_by".to_string(), sort_by.clone()));
        }
        query
    }
}
