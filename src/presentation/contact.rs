/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::presentation::common::{ContactType, Entity};
use crate::presentation::serialization::null_as_empty_string;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize};

/// A contact of the account, as returned by the API
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Server-assigned identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Business name, for business contacts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    /// First name
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub first_name: String,
    /// Last name
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub last_name: String,
    /// Email address
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub email: String,
    /// ISO 3166 alpha-2 country code
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub iso_country_code: String,
    /// Phone dial code, e.g. `+1`
    #[serde(
        rename = "dialCode",
        default,
        deserialize_with = "null_as_empty_string"
    )]
    pub phone_dial_code: String,
    /// Phone number without the dial code
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub phone_number: String,
    /// Batch item that created this contact, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_item_id: Option<i64>,
    /// Veem account of the contact, once it has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_account_id: Option<i64>,
}

impl Contact {
    /// Creates a contact with the fields required on creation
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        iso_country_code: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            iso_country_code: iso_country_code.into(),
            ..Default::default()
        }
    }

    /// Sets the business name
    pub fn with_business_name(mut self, business_name: impl Into<String>) -> Self {
        self.business_name = Some(business_name.into());
        self
    }

    /// Sets the phone dial code and number
    pub fn with_phone(mut self, dial_code: impl Into<String>, number: impl Into<String>) -> Self {
        self.phone_dial_code = dial_code.into();
        self.phone_number = number.into();
        self
    }

    /// Converts the contact into a payer/payee entity of the given kind
    #[must_use]
    pub fn to_entity(&self, kind: ContactType) -> Entity {
        Entity {
            business_name: self.business_name.clone(),
            country_code: self.iso_country_code.clone(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            kind,
            phone: format!("{}{}", self.phone_dial_code, self.phone_number),
        }
    }

    /// Writes the contact in its create-request shape into `map`
    ///
    /// The create endpoint expects the dial code as `phoneDialCode`, while
    /// reads return it as `dialCode`.
    pub(crate) fn serialize_create_fields<M: SerializeMap>(
        &self,
        map: &mut M,
    ) -> Result<(), M::Error> {
        map.serialize_entry("firstName", &self.first_name)?;
        map.serialize_entry("lastName", &self.last_name)?;
        map.serialize_entry("email", &self.email)?;
        map.serialize_entry("isoCountryCode", &self.iso_country_code)?;
        map.serialize_entry("phoneNumber", &self.phone_number)?;
        map.serialize_entry("phoneDialCode", &self.phone_dial_code)?;
        if let Some(name) = self.business_name.as_deref().filter(|n| !n.is_empty()) {
            map.serialize_entry("businessName", name)?;
        }
        if let Some(id) = self.id {
            map.serialize_entry("id", &id)?;
        }
        if let Some(batch_item_id) = self.batch_item_id {
            map.serialize_entry("batchItemId", &batch_item_id)?;
        }
        if let Some(account_id) = self.contact_account_id {
            map.serialize_entry("contactAccountId", &account_id)?;
        }
        Ok(())
    }
}

/// Postal address
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// First address line
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub line1: String,
    /// Second address line
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub line2: String,
    /// City
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub city: String,
    /// State or province
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub state_province: String,
    /// Postal code
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub postal_code: String,
}

/// Bank account details of a contact
///
/// Which fields are required depends on the destination country; see
/// [`crate::presentation::meta::CountryCurrencyMap::bank_fields`].
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    #[serde(
        rename = "bankAccountNumber",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub account_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routing_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_cnaps: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_ifsc_branch_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_institution_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beneficiary_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bsb_bank_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clabe: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iso_country_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swift_bic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transit_code: Option<String>,
}
