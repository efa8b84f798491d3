//
//  travis-client
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Travis API Client
//!
//! [`TravisClient`] turns request descriptors into typed values. It owns a
//! shared [`Transport`] and the deployment [`Host`]; it has no other state,
//! so clones are cheap and can be used from many tasks at once.
//!
//! ## Pipeline
//!
//! 1. The transport sends the request and returns status and body.
//! 2. A transport failure, or a success with an empty body, is `NoData`.
//! 3. A non-2xx status becomes `Http { status, message }`.
//! 4. The body is decoded as JSON into the requested type; a mismatch is
//!    logged and returned as `DecodingFailed`.
//!
//! There are no retries and no automatic pagination.

use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;

use super::common::{Result, TravisError};
use super::transport::{HttpTransport, Transport, TransportError};
use super::{Embed, Host, Link, Minimal, RequestDescriptor};
use crate::auth::Credential;
use crate::config::ClientConfig;

/// Typed client for the Travis CI v3 API.
///
/// # Example
///
/// ```rust,no_run
/// use travis_client::api::{Host, TravisClient};
///
/// # async fn example() -> Result<(), travis_client::api::TravisError> {
/// let client = TravisClient::new("your-token", Host::Com)?;
/// let builds = client.user_builds().await?;
/// for build in &builds {
///     println!("#{} {}", build.number, build.state);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct TravisClient {
    transport: Arc<dyn Transport>,
    host: Host,
}

impl std::fmt::Debug for TravisClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TravisClient").field("host", &self.host).finish_non_exhaustive()
    }
}

impl TravisClient {
    /// Creates a client for `host` authenticated with `token`.
    pub fn new(token: impl Into<Credential>, host: Host) -> Result<Self> {
        Self::with_config(token, &ClientConfig::default().with_host(host))
    }

    /// Creates a client from a full [`ClientConfig`].
    pub fn with_config(token: impl Into<Credential>, config: &ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&token.into(), config)?;
        Ok(Self::with_transport(config.host, Arc::new(transport)))
    }

    /// Creates a client over an existing transport.
    ///
    /// The transport is shared, not copied; several clients may use the
    /// same session.
    pub fn with_transport(host: Host, transport: Arc<dyn Transport>) -> Self {
        Self { transport, host }
    }

    pub fn host(&self) -> Host {
        self.host
    }

    /// Builds a GET descriptor for an already escaped path.
    pub fn request(&self, path: impl Into<String>) -> RequestDescriptor {
        RequestDescriptor::get(self.host, path)
    }

    /// Builds a descriptor with query parameters and an explicit method.
    pub fn request_with(
        &self,
        path: impl Into<String>,
        query: Vec<(String, String)>,
        method: Method,
    ) -> RequestDescriptor {
        RequestDescriptor::new(self.host, path, query, method)
    }

    /// Sends `request` once and decodes the body into `T`.
    ///
    /// # Errors
    ///
    /// - [`TravisError::NoData`] on transport failure or an empty body
    /// - [`TravisError::Http`] on a non-2xx status
    /// - [`TravisError::DecodingFailed`] when the body is not a `T`
    /// - [`TravisError::InvalidUrl`] when the descriptor does not compose
    pub async fn execute<T: DeserializeOwned>(&self, request: &RequestDescriptor) -> Result<T> {
        tracing::debug!(method = %request.method(), path = request.path(), "Travis API request");

        if let Err(e) = request.url() {
            tracing::warn!(path = request.path(), error = %e, "Refusing to send request with an invalid path");
            return Err(TravisError::InvalidUrl(e));
        }

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(TransportError::InvalidUrl(e)) => return Err(TravisError::InvalidUrl(e)),
            Err(e) => {
                tracing::warn!(path = request.path(), error = %e, "Request failed before a body was received");
                return Err(TravisError::NoData);
            }
        };

        if !response.is_success() {
            tracing::debug!(status = response.status, path = request.path(), "Non-success status");
            return Err(TravisError::from_status(response.status, &response.body));
        }

        if response.is_empty() {
            return Err(TravisError::NoData);
        }

        decode(&response.body)
    }

    /// Fetches the full representation of an embedded resource.
    ///
    /// The follow-link is used exactly as the server sent it. If the embed
    /// has no link, no request is made and
    /// [`TravisError::Unlinked`] is returned.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use travis_client::api::{Host, TravisClient};
    ///
    /// # async fn example() -> Result<(), travis_client::api::TravisError> {
    /// let client = TravisClient::new("your-token", Host::Org)?;
    /// let build = client.build("86601346").await?;
    /// if let Some(repository) = &build.repository {
    ///     let full = client.follow(repository).await?;
    ///     println!("{} ({:?})", full.slug, full.github_language);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn follow<M: Minimal>(&self, embed: &Embed<M>) -> Result<M::Full> {
        match embed.link() {
            Link::Linked(path) => self.execute(&self.request(path)).await,
            Link::Unlinked => Err(TravisError::Unlinked {
                resource_type: embed.kind.clone(),
            }),
        }
    }
}

/// Decodes a JSON body into `T`, logging the failure before returning it.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::error!(
            target_type = std::any::type_name::<T>(),
            error = %e,
            "Failed to decode Travis API response"
        );
        TravisError::DecodingFailed(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::transport::testing::StubTransport;
    use crate::models::{Build, MinimalRepository, Repository};

    fn client(stub: StubTransport) -> (TravisClient, Arc<StubTransport>) {
        let stub = Arc::new(stub);
        (TravisClient::with_transport(Host::Org, stub.clone()), stub)
    }

    #[tokio::test]
    async fn test_empty_body_is_no_data() {
        let (client, _) = client(StubTransport::new().respond(200, "").respond(200, "  "));
        let result: Result<Build> = client.execute(&client.request("/build/1")).await;
        assert!(matches!(result, Err(TravisError::NoData)));
        let result: Result<Vec<u8>> = client.execute(&client.request("/repos")).await;
        assert!(matches!(result, Err(TravisError::NoData)));
    }

    #[tokio::test]
    async fn test_transport_failure_is_no_data() {
        let stub = StubTransport::new().fail(TransportError::Other("connection reset".into()));
        let (client, _) = client(stub);
        let result: Result<Build> = client.execute(&client.request("/build/1")).await;
        assert!(matches!(result, Err(TravisError::NoData)));
    }

    #[tokio::test]
    async fn test_unexpected_shape_is_decoding_failed() {
        let (client, _) = client(StubTransport::new().respond(200, r#"{"unexpected":1}"#));
        let result: Result<Build> = client.execute(&client.request("/build/1")).await;
        assert!(matches!(result, Err(TravisError::DecodingFailed(_))));
    }

    #[tokio::test]
    async fn test_error_status_is_http_error() {
        let body = r#"{"@type":"error","error_type":"not_found","error_message":"build not found"}"#;
        let (client, _) = client(StubTransport::new().respond(404, body));
        let result: Result<Build> = client.execute(&client.request("/build/1")).await;
        match result {
            Err(TravisError::Http { status, message }) => {
                assert_eq!(status, 404);
                assert_eq!(message, "build not found");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_follow_requests_exact_link() {
        let body = r#"{"@type":"repository","id":1,"name":"r","slug":"o/r","active":true}"#;
        let (client, stub) = client(StubTransport::new().respond(200, body));
        let embed: Embed<MinimalRepository> = serde_json::from_str(
            r#"{"@type":"repository","@href":"/repo/1","id":1,"name":"r","slug":"o/r"}"#,
        )
        .unwrap();

        let repo: Repository = client.follow(&embed).await.unwrap();
        assert!(repo.active);

        let requests = stub.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path(), "/repo/1");
        assert_eq!(requests[0].method(), &Method::GET);
    }

    #[tokio::test]
    async fn test_follow_link_to_other_host_is_refused() {
        let (client, stub) = client(StubTransport::new());
        for href in ["@attacker.example/repo/1", "//attacker.example/repo/1", "attacker.example"] {
            let json = format!(r#"{{"@type":"repository","@href":"{href}","id":1,"name":"r","slug":"o/r"}}"#);
            let embed: Embed<MinimalRepository> = serde_json::from_str(&json).unwrap();

            let result = client.follow(&embed).await;
            assert!(matches!(result, Err(TravisError::InvalidUrl(_))), "href {href:?}: {result:?}");
        }
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_follow_without_link_makes_no_request() {
        let (client, stub) = client(StubTransport::new());
        let embed: Embed<MinimalRepository> =
            serde_json::from_str(r#"{"@type":"repository","id":1,"name":"r","slug":"o/r"}"#).unwrap();

        let result = client.follow(&embed).await;
        match result {
            Err(TravisError::Unlinked { resource_type }) => assert_eq!(resource_type, "repository"),
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(stub.calls(), 0);
    }

    #[test]
    fn test_requests_target_client_host() {
        let (client, _) = client(StubTransport::new());
        let request = client.request_with("/build/1/restart", Vec::new(), Method::POST);
        assert_eq!(request.host(), Host::Org);
        assert_eq!(request.scheme(), "https");
        assert_eq!(request.method(), &Method::POST);
    }

    #[test]
    fn test_client_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<TravisClient>();
    }
}
