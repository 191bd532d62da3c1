/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::presentation::serialization::{
    null_as_default, null_as_empty_string, null_as_empty_vec,
};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Payment capabilities of one country
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CountryCurrencyMap {
    /// Bank account fields required to pay into this country; only
    /// populated when requested
    #[serde(default, deserialize_with = "null_as_empty_vec")]
    pub bank_fields: Vec<String>,
    /// ISO 3166 alpha-2 country code
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub country: String,
    /// Country name
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub country_name: String,
    /// Whether invoices to this country need an attachment
    #[serde(default, deserialize_with = "null_as_default")]
    pub invoice_attachment_required: bool,
    /// Whether payments to this country need a purpose of payment
    #[serde(default, deserialize_with = "null_as_default")]
    pub purpose_of_payment_required: bool,
    /// Accepted purposes of payment
    #[serde(default, deserialize_with = "null_as_empty_vec")]
    pub purpose_of_payment_info: Vec<PaymentPurpose>,
    /// Currencies that can be received
    #[serde(default, deserialize_with = "null_as_empty_vec")]
    pub receiving_currencies: Vec<String>,
    /// Currencies that can be sent
    #[serde(default, deserialize_with = "null_as_empty_vec")]
    pub sending_currencies: Vec<String>,
}

impl CountryCurrencyMap {
    /// Whether `currency` can be received in this country
    #[must_use]
    pub fn can_receive(&self, currency: &str) -> bool {
        self.receiving_currencies
            .iter()
            .any(|c| c.eq_ignore_ascii_case(currency))
    }

    /// Whether `currency` can be sent from this country
    #[must_use]
    pub fn can_send(&self, currency: &str) -> bool {
        self.sending_currencies
            .iter()
            .any(|c| c.eq_ignore_ascii_case(currency))
    }
}

/// A purpose of payment accepted by a country
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PaymentPurpose {
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub country_code: String,
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub industry: String,
    #[serde(
        rename = "subindustry",
        default,
        deserialize_with = "null_as_empty_string"
    )]
    pub sub_industry: String,
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub purpose_code: String,
}
