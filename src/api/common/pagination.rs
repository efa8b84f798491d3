//
//  travis-client
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pagination Types
//!
//! List endpoints of the v3 API wrap their items in a collection envelope
//! that carries `@pagination` metadata:
//!
//! ```json
//! {
//!   "@type": "builds",
//!   "@pagination": {"limit": 25, "offset": 0, "count": 112, "is_first": true, "is_last": false},
//!   "builds": [ ... ]
//! }
//! ```
//!
//! [`Page`] decodes either that envelope or a bare JSON array. Pagination
//! metadata is read-only; nothing here fetches further pages.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, DeserializeOwned, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Pagination metadata describing one page of a list response.
///
/// # Example
///
/// ```rust
/// use travis_client::api::common::Pagination;
///
/// let json = r#"{"limit":5,"offset":0,"count":12,"is_first":true,"is_last":false}"#;
/// let page: Pagination = serde_json::from_str(json).unwrap();
/// assert_eq!(page.count, 12);
/// assert!(page.is_first && !page.is_last);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Maximum number of items per page
    pub limit: u32,

    /// Index of the first item on this page
    pub offset: u32,

    /// Total number of items across all pages
    pub count: u32,

    /// Whether this is the first page
    pub is_first: bool,

    /// Whether this is the last page
    pub is_last: bool,

    /// Link to the next page, absent on the last page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<PageLink>,

    /// Link to the previous page, absent on the first page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<PageLink>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<PageLink>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<PageLink>,
}

impl Pagination {
    /// Checks if the server reported more pages after this one.
    pub fn has_next(&self) -> bool {
        !self.is_last
    }

    /// Offset to request for the following page, if there is one.
    ///
    /// Returns `None` on the last page, or when the computed offset does not
    /// fit in a `u32`.
    pub fn next_offset(&self) -> Option<u32> {
        if self.is_last {
            return None;
        }
        match &self.next {
            Some(link) => Some(link.offset),
            None => self.offset.checked_add(self.limit),
        }
    }
}

/// A pagination link as returned inside `@pagination`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLink {
    /// Path of the linked page, query string included
    #[serde(rename = "@href")]
    pub href: String,
    pub offset: u32,
    pub limit: u32,
}

/// One page of a list response.
///
/// # Example
///
/// ```rust
/// use travis_client::api::common::Page;
///
/// let bare: Page<u32> = serde_json::from_str("[1, 2, 3]").unwrap();
/// assert_eq!(bare.items, vec![1, 2, 3]);
/// assert!(bare.pagination.is_none());
///
/// let envelope: Page<u32> = serde_json::from_str(
///     r#"{"@type":"numbers","@pagination":{"limit":3,"offset":0,"count":9,"is_first":true,"is_last":false},"numbers":[1,2,3]}"#,
/// ).unwrap();
/// assert_eq!(envelope.kind.as_deref(), Some("numbers"));
/// assert_eq!(envelope.pagination.unwrap().count, 9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// `@type` of the collection, when the envelope form was used
    pub kind: Option<String>,

    /// `@pagination` metadata, when the server supplied it
    pub pagination: Option<Pagination>,

    /// Items in server order
    pub items: Vec<T>,
}

impl<T> Page<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Page<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(PageVisitor(PhantomData))
    }
}

struct PageVisitor<T>(PhantomData<T>);

impl<'de, T: DeserializeOwned> Visitor<'de> for PageVisitor<T> {
    type Value = Page<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON array or a collection object with an item array")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Page {
            kind: None,
            pagination: None,
            items,
        })
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut kind: Option<String> = None;
        let mut pagination: Option<Pagination> = None;
        let mut rest = Map::new();

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "@type" => kind = Some(map.next_value()?),
                "@pagination" => pagination = Some(map.next_value()?),
                k if k.starts_with('@') => {
                    map.next_value::<IgnoredAny>()?;
                }
                _ => {
                    let value: Value = map.next_value()?;
                    rest.insert(key, value);
                }
            }
        }

        // The item array is keyed by the collection type. Collections that
        // name it differently (`/active` lists under `builds`) fall back to
        // the array field whose key sorts first.
        let items = kind
            .as_ref()
            .and_then(|k| rest.remove(k))
            .filter(Value::is_array)
            .or_else(|| rest.into_iter().map(|(_, v)| v).find(Value::is_array))
            .ok_or_else(|| de::Error::custom("collection object has no item array"))?;

        let items = serde_json::from_value(items).map_err(de::Error::custom)?;

        Ok(Page {
            kind,
            pagination,
            items,
        })
    }
}
