use serde_json::json;
use veem_client::presentation::{Contact, ContactType, Customer};

#[test]
fn test_contact_reads_dial_code() {
    let contact: Contact = serde_json::from_value(json!({
        "id": 12,
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada@example.com",
        "isoCountryCode": "GB",
        "dialCode": "+44",
        "phoneNumber": "2071234567",
        "businessName": null,
        "contactAccountId": 300
    }))
    .unwrap();

    assert_eq!(contact.id, Some(12));
    assert_eq!(contact.phone_dial_code, "+44");
    assert_eq!(contact.business_name, None);
    assert_eq!(contact.contact_account_id, Some(300));
}

#[test]
fn test_contact_null_strings_become_empty() {
    let contact: Contact =
        serde_json::from_value(json!({"id": 1, "firstName": null, "phoneNumber": null})).unwrap();
    assert!(contact.first_name.is_empty());
    assert!(contact.phone_number.is_empty());
}

#[test]
fn test_to_entity_joins_phone() {
    let contact = Contact::new("Ada", "Lovelace", "ada@example.com", "GB")
        .with_phone("+44", "2071234567")
        .with_business_name("Analytical Engines Ltd");

    let entity = contact.to_entity(ContactType::Business);

    assert_eq!(entity.first_name, "Ada");
    assert_eq!(entity.last_name, "Lovelace");
    assert_eq!(entity.email, "ada@example.com");
    assert_eq!(entity.country_code, "GB");
    assert_eq!(entity.phone, "+442071234567");
    assert_eq!(entity.kind, ContactType::Business);
    assert_eq!(entity.business_name.as_deref(), Some("Analytical Engines Ltd"));
}

#[test]
fn test_to_entity_without_phone() {
    let entity = Contact::new("Ada", "Lovelace", "ada@example.com", "GB")
        .to_entity(ContactType::Personal);
    assert!(entity.phone.is_empty());
    assert!(entity.business_name.is_none());
}

#[test]
fn test_customer_deserialization() {
    let customer: Customer = serde_json::from_value(json!({
        "id": 8,
        "name": "Acme",
        "firstName": "Wile",
        "lastName": "Coyote",
        "email": "wile@acme.test",
        "isoCountryCode": "US",
        "isContact": false
    }))
    .unwrap();
    assert_eq!(customer.id, Some(8));
    assert!(!customer.is_contact);
}
