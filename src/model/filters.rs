/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

//! Query filters for list and search endpoints
//!
//! A filter is a plain value naming one query parameter contribution. A list
//! call folds its filters, in order, into a [`QueryParams`] multimap; keys
//! that appear more than once keep their insertion order.

use std::fmt;

/// Sort order on the last-update timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Oldest update first
    TimeUpdatedAscending,
    /// Newest update first
    TimeUpdatedDescending,
}

impl SortOrder {
    /// Query value understood by the API
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::TimeUpdatedAscending => "timeUpdated:asc",
            SortOrder::TimeUpdatedDescending => "timeUpdated:desc",
        }
    }
}

/// A single query parameter contribution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// `email`
    Email(String),
    /// `firstName`
    FirstName(String),
    /// `lastName`
    LastName(String),
    /// `businessName`
    BusinessName(String),
    /// `batchId`
    BatchId(i64),
    /// `batchItemIds`, one parameter per id
    BatchItemIds(Vec<i64>),
    /// `pageNumber`
    PageNumber(i32),
    /// `pageSize`
    PageSize(i32),
    /// `paymentIds`, one parameter per id
    PaymentIds(Vec<i64>),
    /// `status`, one parameter per status
    Statuses(Vec<String>),
    /// `sort`
    Sort(SortOrder),
}

impl Filter {
    /// Filter by email address
    pub fn email(email: impl Into<String>) -> Self {
        Filter::Email(email.into())
    }

    /// Filter by first name
    pub fn first_name(name: impl Into<String>) -> Self {
        Filter::FirstName(name.into())
    }

    /// Filter by last name
    pub fn last_name(name: impl Into<String>) -> Self {
        Filter::LastName(name.into())
    }

    /// Filter by business name
    pub fn business_name(name: impl Into<String>) -> Self {
        Filter::BusinessName(name.into())
    }

    /// Filter by the batch that created the items
    #[must_use]
    pub fn batch_id(id: i64) -> Self {
        Filter::BatchId(id)
    }

    /// Filter by batch item ids
    pub fn batch_item_ids(ids: impl IntoIterator<Item = i64>) -> Self {
        Filter::BatchItemIds(ids.into_iter().collect())
    }

    /// Request a given page
    #[must_use]
    pub fn page_number(number: i32) -> Self {
        Filter::PageNumber(number)
    }

    /// Request a given page size
    #[must_use]
    pub fn page_size(size: i32) -> Self {
        Filter::PageSize(size)
    }

    /// Filter by payment ids
    pub fn payment_ids(ids: impl IntoIterator<Item = i64>) -> Self {
        Filter::PaymentIds(ids.into_iter().collect())
    }

    /// Filter by one or more statuses
    pub fn statuses<S: Into<String>>(statuses: impl IntoIterator<Item = S>) -> Self {
        Filter::Statuses(statuses.into_iter().map(Into::into).collect())
    }

    /// Sort by last update, oldest first
    #[must_use]
    pub fn sort_time_updated_ascending() -> Self {
        Filter::Sort(SortOrder::TimeUpdatedAscending)
    }

    /// Sort by last update, newest first
    #[must_use]
    pub fn sort_time_updated_descending() -> Self {
        Filter::Sort(SortOrder::TimeUpdatedDescending)
    }

    /// Whether this filter controls paging rather than selection
    #[must_use]
    pub fn is_paging(&self) -> bool {
        matches!(self, Filter::PageNumber(_) | Filter::PageSize(_))
    }

    /// Appends this filter's parameters to `params`
    pub fn apply(&self, params: &mut QueryParams) {
        match self {
            Filter::Email(v) => params.push("email", v),
            Filter::FirstName(v) => params.push("firstName", v),
            Filter::LastName(v) => params.push("lastName", v),
            Filter::BusinessName(v) => params.push("businessName", v),
            Filter::BatchId(id) => params.push("batchId", id),
            Filter::BatchItemIds(ids) => ids.iter().for_each(|id| params.push("batchItemIds", id)),
            Filter::PageNumber(n) => params.push("pageNumber", n),
            Filter::PageSize(n) => params.push("pageSize", n),
            Filter::PaymentIds(ids) => ids.iter().for_each(|id| params.push("paymentIds", id)),
            Filter::Statuses(statuses) => statuses.iter().for_each(|s| params.push("status", s)),
            Filter::Sort(order) => params.push("sort", order.as_str()),
        }
    }
}

/// Ordered query-parameter multimap
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Creates an empty parameter set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds `filters` into a parameter set, in order
    #[must_use]
    pub fn from_filters(filters: &[Filter]) -> Self {
        filters.iter().fold(Self::new(), |mut params, filter| {
            filter.apply(&mut params);
            params
        })
    }

    /// Appends a parameter
    pub fn push(&mut self, key: &str, value: impl fmt::Display) {
        self.pairs.push((key.to_string(), value.to_string()));
    }

    /// Appends a parameter, builder style
    #[must_use]
    pub fn with(mut self, key: &str, value: impl fmt::Display) -> Self {
        self.push(key, value);
        self
    }

    /// All values recorded under `key`, in insertion order
    #[must_use]
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// The parameters as key/value pairs
    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Returns true if no parameter has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
