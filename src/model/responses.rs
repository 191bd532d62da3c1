/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::error::ApiError;
use crate::presentation::exchange_rate::Quote;
use crate::presentation::serialization::{
    null_as_default, null_as_empty_string, null_as_empty_vec,
};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Server-side tracking object for a bulk create request
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BatchOperation {
    /// Batch identifier, used with `get_batch`
    #[serde(default, deserialize_with = "null_as_default")]
    pub batch_id: i64,
    /// Per-item outcome; only present when requested with `include_items`
    #[serde(
        default,
        deserialize_with = "null_as_empty_vec",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub batch_items: Vec<BatchItem>,
    /// Whether any item failed
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_errors: bool,
    /// Items processed so far
    #[serde(default, deserialize_with = "null_as_default")]
    pub processed_items: i64,
    /// Batch status
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub status: String,
    /// Items submitted
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_items: i64,
}

impl BatchOperation {
    /// Whether every submitted item has been processed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.processed_items >= self.total_items
    }

    /// Items that reported an error
    pub fn failed_items(&self) -> impl Iterator<Item = &BatchItem> {
        self.batch_items.iter().filter(|item| item.error_info.is_some())
    }
}

/// Outcome of one item in a batch
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BatchItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub batch_item_id: i64,
    /// Error reported for this item, if it failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_info: Option<ApiError>,
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub status: String,
}

/// Result of a batch quote request
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BatchQuoteResponse {
    /// Quotes that were generated
    #[serde(rename = "success", default, deserialize_with = "null_as_empty_vec")]
    pub quotes: Vec<Quote>,
    /// Requests that could not be quoted
    #[serde(rename = "failure", default, deserialize_with = "null_as_empty_vec")]
    pub failures: Vec<QuoteFailure>,
}

/// A quote request that failed within a batch
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct QuoteFailure {
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub batch_item_id: String,
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub error_code: String,
}
