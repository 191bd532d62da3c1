/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::presentation::attachment::Attachment;
use crate::presentation::common::{Amount, ContactType, Entity};
use crate::presentation::contact::{Address, BankAccount, Contact};
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// Contact creation payload: a base contact plus creation-only details
///
/// Serialized as one flat JSON object. Absent optional parts are left out
/// entirely rather than sent as `null`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactFull {
    /// Base contact fields
    pub contact: Contact,
    /// Business or personal contact
    pub kind: Option<ContactType>,
    /// Caller's own identifier for the business
    pub external_business_id: Option<i64>,
    /// Registered business address
    pub business_address: Option<Address>,
    /// Bank account payments to this contact are sent to
    pub bank_account: Option<BankAccount>,
}

impl ContactFull {
    /// Wraps a base contact with no extra details
    #[must_use]
    pub fn new(contact: Contact) -> Self {
        Self {
            contact,
            ..Default::default()
        }
    }

    /// Sets the contact type
    #[must_use]
    pub fn with_type(mut self, kind: ContactType) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Sets the external business id
    #[must_use]
    pub fn with_external_business_id(mut self, id: i64) -> Self {
        self.external_business_id = Some(id);
        self
    }

    /// Sets the business address
    #[must_use]
    pub fn with_business_address(mut self, address: Address) -> Self {
        self.business_address = Some(address);
        self
    }

    /// Sets the bank account
    #[must_use]
    pub fn with_bank_account(mut self, bank_account: BankAccount) -> Self {
        self.bank_account = Some(bank_account);
        self
    }
}

impl From<Contact> for ContactFull {
    fn from(contact: Contact) -> Self {
        Self::new(contact)
    }
}

impl Serialize for ContactFull {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        self.contact.serialize_create_fields(&mut map)?;
        if let Some(kind) = &self.kind {
            map.serialize_entry("type", kind)?;
        }
        if let Some(id) = self.external_business_id {
            map.serialize_entry("externalBusinessID", &id)?;
        }
        if let Some(address) = &self.business_address {
            map.serialize_entry("businessAddress", address)?;
        }
        if let Some(bank_account) = &self.bank_account {
            map.serialize_entry("bankAccount", bank_account)?;
        }
        map.end()
    }
}

/// Payment creation payload
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DraftPayment {
    /// Amount to send
    pub amount: Amount,
    /// Recipient
    pub payee: Entity,
    /// Skip the approval step
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub approve_automatically: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cc_emails: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    /// Quote obtained from the exchange rate endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange_rate_quote_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_invoice_ref_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose_of_payment: Option<String>,
}

impl DraftPayment {
    /// Creates a draft paying `amount` to `payee`
    #[must_use]
    pub fn new(payee: Entity, amount: Amount) -> Self {
        Self {
            amount,
            payee,
            ..Default::default()
        }
    }

    /// Approve the payment as soon as it is created
    #[must_use]
    pub fn approve_automatically(mut self) -> Self {
        self.approve_automatically = true;
        self
    }

    /// Adds an uploaded attachment
    #[must_use]
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    /// Copies the payment notification to `email`
    pub fn with_cc_email(mut self, email: impl Into<String>) -> Self {
        self.cc_emails.push(email.into());
        self
    }

    /// Sets the due date
    #[must_use]
    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Books the payment against an exchange rate quote
    pub fn with_exchange_rate_quote_id(mut self, quote_id: impl Into<String>) -> Self {
        self.exchange_rate_quote_id = Some(quote_id.into());
        self
    }

    /// Sets the caller's own invoice reference
    pub fn with_external_invoice_ref_id(mut self, reference: impl Into<String>) -> Self {
        self.external_invoice_ref_id = Some(reference.into());
        self
    }

    /// Sets free-form notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Sets the purpose of payment, required by some destination countries
    pub fn with_purpose_of_payment(mut self, purpose: impl Into<String>) -> Self {
        self.purpose_of_payment = Some(purpose.into());
        self
    }
}

/// Exchange rate quote request
///
/// Exactly one of `from_amount` and `to_amount` is normally given; the
/// server calculates the other.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_amount: Option<f64>,
    pub from_currency: String,
    pub to_currency: String,
    /// Destination country, checked for support of the transfer
    pub to_country: String,
    /// Recipient email, used to obtain a discounted rate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_account_email: Option<String>,
}

impl QuoteRequest {
    /// Quote for sending `amount` of `from_currency`
    pub fn sending(
        amount: f64,
        from_currency: impl Into<String>,
        to_currency: impl Into<String>,
        to_country: impl Into<String>,
    ) -> Self {
        Self {
            from_amount: Some(amount),
            to_amount: None,
            from_currency: from_currency.into(),
            to_currency: to_currency.into(),
            to_country: to_country.into(),
            recipient_account_email: None,
        }
    }

    /// Quote for delivering `amount` of `to_currency`
    pub fn receiving(
        amount: f64,
        from_currency: impl Into<String>,
        to_currency: impl Into<String>,
        to_country: impl Into<String>,
    ) -> Self {
        Self {
            from_amount: None,
            to_amount: Some(amount),
            from_currency: from_currency.into(),
            to_currency: to_currency.into(),
            to_country: to_country.into(),
            recipient_account_email: None,
        }
    }

    /// Sets the recipient email
    pub fn with_recipient_email(mut self, email: impl Into<String>) -> Self {
        self.recipient_account_email = Some(email.into());
        self
    }
}
