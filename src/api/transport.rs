//
//  travis-client
//  api/transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Transport
//!
//! The [`Transport`] trait is the seam between the typed client and the
//! network. [`HttpTransport`] is the production implementation on top of a
//! shared `reqwest` session; tests substitute an in-memory transport.
//!
//! A transport returns raw status and body bytes. It never interprets the
//! status and never decodes JSON; both happen in
//! [`TravisClient::execute`](super::TravisClient::execute).

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, USER_AGENT};
use reqwest::Client;
use thiserror::Error;
use url::Url;

use super::common::{Result, TravisError};
use super::RequestDescriptor;
use crate::auth::Credential;
use crate::config::{ClientConfig, API_VERSION, DEFAULT_USER_AGENT};

/// Name of the API version header.
pub const API_VERSION_HEADER: &str = "travis-api-version";

/// Status and body of a completed exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// True when there is nothing but whitespace to decode.
    pub fn is_empty(&self) -> bool {
        self.body.iter().all(u8::is_ascii_whitespace)
    }
}

/// Failure to complete an exchange.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// Failure reported by a non-HTTP transport implementation.
    #[error("{0}")]
    Other(String),
}

/// Executes request descriptors.
///
/// Implementations must be safe to share between tasks; a single transport
/// serves every request a client makes.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &RequestDescriptor) -> std::result::Result<RawResponse, TransportError>;
}

/// [`Transport`] over a shared `reqwest` session.
///
/// The `Travis-API-Version`, `Authorization` and `User-Agent` headers are
/// installed as session defaults, so every request sent through one
/// transport carries the same values.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
    origin: Option<Url>,
}

impl HttpTransport {
    /// Builds a session for `credential` using `config`.
    ///
    /// An `api_version` or `user_agent` that is not a valid header value is
    /// logged and replaced by its default.
    ///
    /// # Errors
    ///
    /// - [`TravisError::InvalidCredential`] if the token is not a valid header
    /// - [`TravisError::InvalidUrl`] if `config.origin` does not parse
    /// - [`TravisError::InvalidOrigin`] if `config.origin` carries a path,
    ///   query or fragment
    /// - [`TravisError::Client`] if reqwest fails to build the client
    pub fn new(credential: &Credential, config: &ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(API_VERSION_HEADER),
            header_or_default("api_version", &config.api_version, API_VERSION),
        );
        headers.insert(AUTHORIZATION, credential.authorization()?);
        headers.insert(
            USER_AGENT,
            header_or_default("user_agent", &config.user_agent, DEFAULT_USER_AGENT),
        );

        let http = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(TravisError::Client)?;

        let origin = config.origin.as_deref().map(parse_origin).transpose()?;

        Ok(Self { http, origin })
    }

    /// Resolves the URL a descriptor is sent to.
    ///
    /// With an origin override only its scheme, host and port replace those
    /// of the deployment; path and query always come from the descriptor.
    pub fn resolve(&self, request: &RequestDescriptor) -> std::result::Result<Url, url::ParseError> {
        let mut url = request.url()?;
        if let Some(origin) = &self.origin {
            // http and https are both special schemes, so these setters cannot fail.
            let _ = url.set_scheme(origin.scheme());
            url.set_host(origin.host_str())?;
            let _ = url.set_port(origin.port());
        }
        Ok(url)
    }
}

fn header_or_default(field: &str, value: &str, default: &'static str) -> HeaderValue {
    HeaderValue::from_str(value).unwrap_or_else(|_| {
        tracing::warn!(field, default, "Configured value is not a valid header, using the default");
        HeaderValue::from_static(default)
    })
}

fn parse_origin(origin: &str) -> Result<Url> {
    let url = Url::parse(origin)?;
    if !matches!(url.scheme(), "http" | "https")
        || url.path() != "/"
        || url.query().is_some()
        || url.fragment().is_some()
    {
        return Err(TravisError::InvalidOrigin(origin.to_string()));
    }
    Ok(url)
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &RequestDescriptor) -> std::result::Result<RawResponse, TransportError> {
        let url = self.resolve(request)?;
        tracing::debug!(method = %request.method(), %url, "sending request");

        let response = self
            .http
            .request(request.method().clone(), url)
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        tracing::debug!(status, bytes = body.len(), "received response");
        Ok(RawResponse { status, body })
    }
}

/// In-memory transport for tests.
#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    use super::*;

    /// Replays queued responses in order and records every request.
    #[derive(Default)]
    pub struct StubTransport {
        responses: Mutex<VecDeque<std::result::Result<RawResponse, TransportError>>>,
        requests: Mutex<Vec<RequestDescriptor>>,
        delay: Option<Duration>,
        calls: AtomicUsize,
    }

    impl StubTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn respond(self, status: u16, body: &str) -> Self {
            self.responses
                .lock()
                .unwrap()
                .push_back(Ok(RawResponse::new(status, body.as_bytes())));
            self
        }

        pub fn fail(self, error: TransportError) -> Self {
            self.responses.lock().unwrap().push_back(Err(error));
            self
        }

        pub fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub fn requests(&self) -> Vec<RequestDescriptor> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for StubTransport {
        async fn send(&self, request: &RequestDescriptor) -> std::result::Result<RawResponse, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.requests.lock().unwrap().push(request.clone());
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(RawResponse::new(200, Vec::new())))
        }
    }
}
