/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::presentation::serialization::{null_as_default, null_as_empty_string};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Kind of counterparty
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ContactType {
    /// Contact has not completed onboarding
    #[default]
    Incomplete,
    /// A business
    Business,
    /// An individual
    Personal,
    /// Any type this client does not know about
    #[serde(other)]
    Unknown,
}

/// Payer or payee description embedded in payments and invoices
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    /// Business name, for business counterparties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    /// ISO 3166 alpha-2 country code
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub country_code: String,
    /// Email address
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub email: String,
    /// First name
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub first_name: String,
    /// Last name
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub last_name: String,
    /// Whether the counterparty is a business or an individual
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: ContactType,
    /// Phone number including the dial code
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub phone: String,
}

impl Entity {
    /// Creates an entity with the fields the API requires
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        country_code: impl Into<String>,
        kind: ContactType,
    ) -> Self {
        Self {
            business_name: None,
            country_code: country_code.into(),
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            kind,
            phone: String::new(),
        }
    }

    /// Sets the business name
    pub fn with_business_name(mut self, business_name: impl Into<String>) -> Self {
        self.business_name = Some(business_name.into());
        self
    }

    /// Sets the phone number
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }
}

/// A monetary amount in a given currency
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Amount {
    /// Amount value
    #[serde(default, deserialize_with = "null_as_default")]
    pub number: f64,
    /// ISO 4217 currency code
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub currency: String,
}

impl Amount {
    /// Creates a new amount
    pub fn new(number: f64, currency: impl Into<String>) -> Self {
        Self {
            number,
            currency: currency.into(),
        }
    }
}
