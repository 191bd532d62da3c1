/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::presentation::serialization::{null_as_default, null_as_empty_string};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// A Veem customer, as returned by the customer search
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Customer identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
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
    /// Whether the customer is already one of the account's contacts
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_contact: bool,
}
