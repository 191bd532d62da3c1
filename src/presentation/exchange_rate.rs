/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::presentation::serialization::{
    lenient_datetime_opt, null_as_default, null_as_empty_string,
};
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// A quote for an exchange between two currencies
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Quote identifier, referenced by payments as `exchangeRateQuoteId`
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub id: String,
    /// Time the quote stops being honoured
    #[serde(default, deserialize_with = "lenient_datetime_opt")]
    pub expiry: Option<DateTime<Utc>>,
    /// Source amount
    #[serde(default, deserialize_with = "null_as_default")]
    pub from_amount: f64,
    /// Target amount
    #[serde(default, deserialize_with = "null_as_default")]
    pub to_amount: f64,
    /// Source currency
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub from_currency: String,
    /// Target currency
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub to_currency: String,
    /// Rate of the exchange
    #[serde(default, deserialize_with = "null_as_default")]
    pub rate: f64,
}

impl Quote {
    /// Whether the quote has expired at `now`; quotes without an expiry never do
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expiry.is_some_and(|expiry| now >= expiry)
    }
}
