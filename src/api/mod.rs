//
//  travis-client
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! HTTP client for the Travis CI v3 REST API.
//!
//! ## Supported Deployments
//!
//! - **travis-ci.org**: `api.travis-ci.org`
//! - **travis-ci.com**: `api.travis-ci.com`
//!
//! ## Architecture
//!
//! - [`host`]: deployment selector and host resolution
//! - [`request`]: request descriptors, path escaping, list options
//! - [`transport`]: the transport seam and its reqwest implementation
//! - [`client`]: typed execution and embedded-resource following
//! - [`endpoints`]: one method per API path
//! - [`embed`]: `@type`/`@href` wrappers and the minimal/full pairing
//! - [`dispatch`]: background requests, cancellation, completion queues
//! - [`common`]: error type and pagination
//!
//! ## Usage
//!
//! ```rust,no_run
//! use travis_client::api::{Host, TravisClient};
//!
//! # async fn example() -> Result<(), travis_client::api::TravisError> {
//! let client = TravisClient::new("your-token", Host::Org)?;
//! let build = client.build("86601346").await?;
//! for job in &build.jobs {
//!     let job = client.follow(job).await?;
//!     println!("job {} is {}", job.id, job.state);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod common;
pub mod dispatch;
pub mod embed;
pub mod endpoints;
pub mod host;
pub mod request;
pub mod transport;

pub use client::TravisClient;
pub use common::{Page, Pagination, TravisError};
pub use dispatch::{completion_queue, CancelHandle, CompletionQueue, Dispatcher, RequestHandle};
pub use embed::{Embed, Link, Minimal};
pub use host::Host;
pub use request::{escape_segment, ListOptions, RequestDescriptor};
pub use transport::{HttpTransport, RawResponse, Transport, TransportError};
