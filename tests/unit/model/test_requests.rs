use assert_json_diff::assert_json_eq;
use chrono::{TimeZone, Utc};
use serde_json::json;
use veem_client::model::requests::{ContactFull, DraftPayment, QuoteRequest};
use veem_client::presentation::{
    Address, Amount, Attachment, BankAccount, Contact, ContactType, Entity,
};

#[test]
fn test_contact_full_minimal_has_no_optional_keys() {
    let full = ContactFull::new(Contact::new("Ada", "Lovelace", "ada@example.com", "GB"));

    assert_json_eq!(
        serde_json::to_value(&full).unwrap(),
        json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "isoCountryCode": "GB",
            "phoneNumber": "",
            "phoneDialCode": ""
        })
    );
}

#[test]
fn test_contact_full_flattens_present_parts() {
    let contact = Contact::new("Ada", "Lovelace", "ada@example.com", "GB")
        .with_phone("+44", "2071234567")
        .with_business_name("Analytical Engines Ltd");
    let full = ContactFull::new(contact)
        .with_type(ContactType::Business)
        .with_external_business_id(991)
        .with_business_address(Address {
            line1: "12 St James's Square".into(),
            city: "London".into(),
            postal_code: "SW1Y 4LB".into(),
            ..Default::default()
        })
        .with_bank_account(BankAccount {
            account_number: Some("31926819".into()),
            sort_code: Some("601613".into()),
            ..Default::default()
        });

    assert_json_eq!(
        serde_json::to_value(&full).unwrap(),
        json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "isoCountryCode": "GB",
            "phoneNumber": "2071234567",
            "phoneDialCode": "+44",
            "businessName": "Analytical Engines Ltd",
            "type": "Business",
            "externalBusinessID": 991,
            "businessAddress": {
                "line1": "12 St James's Square",
                "line2": "",
                "city": "London",
                "stateProvince": "",
                "postalCode": "SW1Y 4LB"
            },
            "bankAccount": {
                "bankAccountNumber": "31926819",
                "sortCode": "601613"
            }
        })
    );
}

#[test]
fn test_contact_full_keeps_server_ids_when_present() {
    let mut contact = Contact::new("Ada", "Lovelace", "ada@example.com", "GB");
    contact.id = Some(5);
    contact.batch_item_id = Some(6);
    contact.contact_account_id = Some(7);

    let value = serde_json::to_value(ContactFull::from(contact)).unwrap();
    assert_eq!(value["id"], 5);
    assert_eq!(value["batchItemId"], 6);
    assert_eq!(value["contactAccountId"], 7);
    assert!(value.get("dialCode").is_none());
}

#[test]
fn test_contact_full_skips_empty_business_name() {
    let contact = Contact::new("Ada", "Lovelace", "ada@example.com", "GB").with_business_name("");
    let value = serde_json::to_value(ContactFull::new(contact)).unwrap();
    assert!(value.get("businessName").is_none());
}

#[test]
fn test_draft_payment_minimal() {
    let payee = Entity::new("Grace", "Hopper", "grace@example.com", "US", ContactType::Personal);
    let draft = DraftPayment::new(payee, Amount::new(12.5, "USD"));

    assert_json_eq!(
        serde_json::to_value(&draft).unwrap(),
        json!({
            "amount": {"number": 12.5, "currency": "USD"},
            "payee": {
                "countryCode": "US",
                "email": "grace@example.com",
                "firstName": "Grace",
                "lastName": "Hopper",
                "type": "Personal",
                "phone": ""
            }
        })
    );
}

#[test]
fn test_draft_payment_with_options() {
    let payee = Entity::new("Grace", "Hopper", "grace@example.com", "US", ContactType::Business)
        .with_phone("+15551234567");
    let draft = DraftPayment::new(payee, Amount::new(1000.0, "EUR"))
        .approve_automatically()
        .with_attachment(Attachment {
            name: "invoice.pdf".into(),
            reference_id: "ref-1".into(),
            kind: "application/pdf".into(),
        })
        .with_cc_email("ap@example.com")
        .with_due_date(Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap())
        .with_exchange_rate_quote_id("q-9")
        .with_external_invoice_ref_id("INV-001")
        .with_notes("March services")
        .with_purpose_of_payment("P0802");

    let value = serde_json::to_value(&draft).unwrap();
    assert_eq!(value["approveAutomatically"], true);
    assert_eq!(value["attachments"][0]["referenceId"], "ref-1");
    assert_eq!(value["attachments"][0]["type"], "application/pdf");
    assert_eq!(value["ccEmails"], json!(["ap@example.com"]));
    assert_eq!(value["dueDate"], "2024-04-01T00:00:00Z");
    assert_eq!(value["exchangeRateQuoteId"], "q-9");
    assert_eq!(value["externalInvoiceRefId"], "INV-001");
    assert_eq!(value["notes"], "March services");
    assert_eq!(value["purposeOfPayment"], "P0802");
    assert_eq!(value["payee"]["phone"], "+15551234567");
}

#[test]
fn test_quote_request_sending_and_receiving() {
    let sending = serde_json::to_value(QuoteRequest::sending(100.0, "USD", "EUR", "DE")).unwrap();
    assert_json_eq!(
        sending,
        json!({
            "fromAmount": 100.0,
            "fromCurrency": "USD",
            "toCurrency": "EUR",
            "toCountry": "DE"
        })
    );

    let receiving = serde_json::to_value(
        QuoteRequest::receiving(50.0, "USD", "MXN", "MX").with_recipient_email("juan@example.mx"),
    )
    .unwrap();
    assert_json_eq!(
        receiving,
        json!({
            "toAmount": 50.0,
            "fromCurrency": "USD",
            "toCurrency": "MXN",
            "toCountry": "MX",
            "recipientAccountEmail": "juan@example.mx"
        })
    );
}
