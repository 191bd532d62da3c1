/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::presentation::attachment::Attachment;
use crate::presentation::common::{Amount, Entity};
use crate::presentation::serialization::{lenient_datetime_opt, null_as_empty_vec};
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// An invoice sent to a payer
///
/// The same record is posted on creation and returned on retrieval; `id`,
/// `status`, `time_created` and `claim_link` are only populated by the
/// server and are left out of the request body while unset.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Who is asked to pay
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer: Option<Entity>,
    /// Amount requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(
        default,
        deserialize_with = "null_as_empty_vec",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub attachments: Vec<Attachment>,
    #[serde(
        default,
        deserialize_with = "null_as_empty_vec",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub cc_emails: Vec<String>,
    #[serde(
        default,
        deserialize_with = "lenient_datetime_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange_rate_quote_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_invoice_ref_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose_of_payment: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_datetime_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub time_created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claim_link: Option<String>,
}

impl Invoice {
    /// Creates an invoice requesting `amount` from `payer`
    #[must_use]
    pub fn new(payer: Entity, amount: Amount) -> Self {
        Self {
            payer: Some(payer),
            amount: Some(amount),
            ..Default::default()
        }
    }

    /// Sets the due date
    #[must_use]
    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets free-form notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Adds an uploaded attachment
    #[must_use]
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    /// Sets the caller's own invoice reference
    pub fn with_external_invoice_ref_id(mut self, reference: impl Into<String>) -> Self {
        self.external_invoice_ref_id = Some(reference.into());
        self
    }
}
