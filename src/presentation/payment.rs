/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::presentation::attachment::Attachment;
use crate::presentation::common::{Amount, Entity};
use crate::presentation::serialization::{
    lenient_datetime_opt, null_as_default, null_as_empty_string, null_as_empty_vec,
};
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// A payment, as returned by the API
///
/// Identifier, status and timestamps are assigned by the server. Payments
/// are created from a [`crate::model::requests::DraftPayment`].
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Server-assigned identifier
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    /// Payment status, e.g. `Drafted`, `Sent`, `Complete`, `Cancelled`
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub status: String,
    /// Recipient of the payment
    #[serde(default)]
    pub payee: Option<Entity>,
    /// Amount the payee receives
    #[serde(default)]
    pub payee_amount: Option<Amount>,
    #[serde(
        default,
        deserialize_with = "null_as_empty_vec",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub attachments: Vec<Attachment>,
    /// Batch item that created this payment, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_item_id: Option<i64>,
    /// Link the payee follows to claim the funds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claim_link: Option<String>,
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
    /// Exchange rate quote the payment was booked against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange_rate_quote_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_invoice_ref_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Next action expected on the payment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_approval: Option<PaymentApproval>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_approval_request: Option<PaymentApprovalRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose_of_payment: Option<String>,
    /// Instructions for push payments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub push_payment_info: Option<PushPaymentInfo>,
    #[serde(default, deserialize_with = "lenient_datetime_opt")]
    pub time_created: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_datetime_opt")]
    pub time_updated: Option<DateTime<Utc>>,
}

/// Approval state of a payment that needs sign-off
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PaymentApproval {
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub approval_status: String,
    /// Number of approvals collected so far
    #[serde(default, deserialize_with = "null_as_default")]
    pub approver_number: i64,
    /// Number of approvals required
    #[serde(default, deserialize_with = "null_as_default")]
    pub approver_number_required: i64,
    #[serde(
        rename = "userApprovalList",
        default,
        deserialize_with = "null_as_empty_vec"
    )]
    pub user_approvals: Vec<UserApproval>,
}

/// Decision of a single approver
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserApproval {
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub approval_status: String,
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub middle_name: String,
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub last_name: String,
}

/// User that requested approval of a payment
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PaymentApprovalRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub account_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_id: i64,
}

/// Push payment instructions
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PushPaymentInfo {
    #[serde(default)]
    pub amount: Option<Amount>,
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub push_payment_info: String,
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub reference: String,
}
