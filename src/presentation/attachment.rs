/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::presentation::serialization::null_as_empty_string;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Reference to a file attached to a payment or invoice
///
/// Returned by the upload endpoint and passed back, unchanged, in the
/// `attachments` list of a draft payment or invoice.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    /// Stored file name
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub name: String,
    /// Identifier the file is stored under
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub reference_id: String,
    /// Attachment type, e.g. `ExternalInvoice`
    #[serde(rename = "type", default, deserialize_with = "null_as_empty_string")]
    pub kind: String,
}
