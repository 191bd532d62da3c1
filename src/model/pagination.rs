/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

//! Paged list responses
//!
//! A [`Page`] is an immutable snapshot of one page of results plus what is
//! needed to fetch the following one: the path and filters that produced it.

use crate::error::AppError;
use crate::model::filters::{Filter, QueryParams};
use crate::model::http::HttpClient;
use crate::presentation::serialization::{null_as_default, null_as_empty_vec};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Paging envelope returned by list and search endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct PageEnvelope<T> {
    /// Items of this page
    #[serde(default = "Vec::new", deserialize_with = "null_as_empty_vec")]
    pub content: Vec<T>,
    /// Whether this is the first page
    #[serde(default, deserialize_with = "null_as_default")]
    pub first: bool,
    /// Whether this is the last page
    #[serde(default, deserialize_with = "null_as_default")]
    pub last: bool,
    /// Number of items on this page
    #[serde(default, deserialize_with = "null_as_default")]
    pub number_of_elements: i64,
    /// Number of items across all pages
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_elements: i64,
    /// Zero-based index of this page
    #[serde(default, rename = "number", deserialize_with = "null_as_default")]
    pub page_number: i32,
    /// Requested page size
    #[serde(default, rename = "size", deserialize_with = "null_as_default")]
    pub page_size: i32,
    /// Number of pages
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_pages: i64,
}

/// One page of a list or search result
pub struct Page<T> {
    envelope: PageEnvelope<T>,
    path: String,
    filters: Vec<Filter>,
    client: Arc<HttpClient>,
}

impl<T> Page<T>
where
    T: DeserializeOwned + Send,
{
    /// Fetches the page selected by `filters` from `path`
    ///
    /// With no filters the request carries no query string.
    pub async fn fetch(
        client: Arc<HttpClient>,
        path: &str,
        filters: Vec<Filter>,
    ) -> Result<Self, AppError> {
        let query = QueryParams::from_filters(&filters);
        let envelope: PageEnvelope<T> = client.get(path, &query).await?;

        debug!(
            "Page {} of {} fetched from {}: {} items",
            envelope.page_number,
            envelope.total_pages,
            path,
            envelope.content.len()
        );

        Ok(Self {
            envelope,
            path: path.to_string(),
            filters,
            client,
        })
    }

    /// Fetches the page after this one
    ///
    /// Keeps every selection filter and the page size, and asks for page
    /// `number + 1`.
    ///
    /// # Returns
    /// * `Ok(Page)` - The following page
    /// * `Err(AppError::NoMorePages)` - This is the last page; nothing is sent
    pub async fn next(&self) -> Result<Page<T>, AppError> {
        if self.envelope.last {
            return Err(AppError::NoMorePages);
        }

        let filters = self.next_filters();
        Self::fetch(self.client.clone(), &self.path, filters).await
    }

    fn next_filters(&self) -> Vec<Filter> {
        let size = if self.envelope.page_size > 0 {
            self.envelope.page_size
        } else {
            self.client.config().page_size
        };

        self.filters
            .iter()
            .filter(|filter| !filter.is_paging())
            .cloned()
            .chain([
                Filter::page_number(self.envelope.page_number + 1),
                Filter::page_size(size),
            ])
            .collect()
    }
}

impl<T> Page<T> {
    /// Builds a page from an envelope that has already been received
    #[must_use]
    pub fn from_envelope(
        client: Arc<HttpClient>,
        path: impl Into<String>,
        filters: Vec<Filter>,
        envelope: PageEnvelope<T>,
    ) -> Self {
        Self {
            envelope,
            path: path.into(),
            filters,
            client,
        }
    }

    /// Items of this page
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.envelope.content
    }

    /// Consumes the page and returns its items
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.envelope.content
    }

    /// Paging metadata and items as returned by the server
    #[must_use]
    pub fn envelope(&self) -> &PageEnvelope<T> {
        &self.envelope
    }

    /// Whether this is the first page
    #[must_use]
    pub fn is_first(&self) -> bool {
        self.envelope.first
    }

    /// Whether this is the last page
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.envelope.last
    }

    /// Whether [`Page::next`] can be called
    #[must_use]
    pub fn has_next(&self) -> bool {
        !self.envelope.last
    }

    /// Zero-based index of this page
    #[must_use]
    pub fn number(&self) -> i32 {
        self.envelope.page_number
    }

    /// Page size reported by the server
    #[must_use]
    pub fn size(&self) -> i32 {
        self.envelope.page_size
    }

    /// Number of pages
    #[must_use]
    pub fn total_pages(&self) -> i64 {
        self.envelope.total_pages
    }

    /// Number of items across all pages
    #[must_use]
    pub fn total_elements(&self) -> i64 {
        self.envelope.total_elements
    }

    /// Filters that produced this page
    #[must_use]
    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Page<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("path", &self.path)
            .field("filters", &self.filters)
            .field("number", &self.envelope.page_number)
            .field("last", &self.envelope.last)
            .field("content", &self.envelope.content)
            .finish()
    }
}
