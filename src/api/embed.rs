//
//  travis-client
//  api/embed.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Embedded Resources
//!
//! When one resource embeds another, the API sends the *minimal*
//! representation of the embedded resource together with two sideband
//! fields in the same JSON object:
//!
//! ```json
//! {"@type": "build", "@href": "/build/86601346", "@representation": "minimal", "id": 86601346, "number": "1234"}
//! ```
//!
//! [`Embed`] reads `@type` and `@href` and decodes everything else into the
//! wrapped minimal object. The full representation is fetched with
//! [`TravisClient::follow`](super::TravisClient::follow), which is only
//! available for types implementing [`Minimal`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A minimal representation that has a full counterpart.
///
/// Implementing this trait is what makes an [`Embed`] followable; the
/// compiler rejects following anything else.
pub trait Minimal: DeserializeOwned {
    /// The full representation fetched through the follow-link.
    type Full: DeserializeOwned;
}

/// An embedded resource: type tag, optional follow-link, and the object.
///
/// The wrapper is transparent to `T`'s field layout: `T` is decoded from
/// the same JSON object, not a nested key.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use travis_client::api::{Embed, Link};
///
/// #[derive(Deserialize)]
/// struct Named {
///     name: String,
/// }
///
/// let embed: Embed<Named> =
///     serde_json::from_str(r#"{"@type":"branch","@href":"/repo/1/branch/main","name":"main"}"#).unwrap();
/// assert_eq!(embed.kind, "branch");
/// assert_eq!(embed.link(), Link::Linked("/repo/1/branch/main"));
/// assert_eq!(embed.object.name, "main");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Embed<T> {
    /// `@type` tag of the embedded resource
    #[serde(rename = "@type")]
    pub kind: String,

    /// `@href` follow-link, an absolute and already escaped path
    #[serde(rename = "@href", default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// The embedded (usually minimal) object
    #[serde(flatten)]
    pub object: T,
}

/// Whether an embed can be expanded to its full representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link<'a> {
    /// The server supplied a follow-link
    Linked(&'a str),
    /// No follow-link; the full representation cannot be fetched
    Unlinked,
}

impl<T> Embed<T> {
    pub fn new(kind: impl Into<String>, path: Option<String>, object: T) -> Self {
        Self {
            kind: kind.into(),
            path,
            object,
        }
    }

    /// Returns the follow-link state of this embed.
    pub fn link(&self) -> Link<'_> {
        match self.path.as_deref() {
            Some(path) if !path.is_empty() => Link::Linked(path),
            _ => Link::Unlinked,
        }
    }

    pub fn is_linked(&self) -> bool {
        matches!(self.link(), Link::Linked(_))
    }

    pub fn into_inner(self) -> T {
        self.object
    }
}

impl<T> std::ops::Deref for Embed<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.object
    }
}
