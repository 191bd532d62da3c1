use serde_json::json;
use std::sync::Arc;
use veem_client::application::config::{Config, Environment};
use veem_client::error::AppError;
use veem_client::model::filters::Filter;
use veem_client::model::http::HttpClient;
use veem_client::model::pagination::{Page, PageEnvelope};
use veem_client::presentation::Contact;

fn offline_client() -> Arc<HttpClient> {
    // Nothing listens on port 9; any request would fail with a network error
    let config = Config::with_credentials("id", "secret", Environment::Sandbox)
        .with_base_url("http://127.0.0.1:9");
    Arc::new(HttpClient::new_lazy(config).unwrap())
}

#[test]
fn test_envelope_deserialization() {
    let envelope: PageEnvelope<Contact> = serde_json::from_value(json!({
        "content": [{"id": 1, "firstName": "Ada", "dialCode": "+44"}],
        "first": true,
        "last": false,
        "numberOfElements": 1,
        "totalElements": 10,
        "number": 0,
        "size": 1,
        "totalPages": 10
    }))
    .unwrap();

    assert_eq!(envelope.content.len(), 1);
    assert_eq!(envelope.content[0].phone_dial_code, "+44");
    assert!(!envelope.last);
    assert_eq!(envelope.page_size, 1);
    assert_eq!(envelope.total_pages, 10);
}

#[test]
fn test_envelope_null_content_is_empty() {
    let envelope: PageEnvelope<Contact> =
        serde_json::from_value(json!({"content": null, "last": true})).unwrap();
    assert!(envelope.content.is_empty());
    assert!(envelope.last);
}

#[test]
fn test_envelope_null_metadata_defaults() {
    let envelope: PageEnvelope<Contact> = serde_json::from_value(json!({
        "content": [{"id": 2, "firstName": null, "type": null}],
        "first": null,
        "last": true,
        "numberOfElements": null,
        "totalElements": 1,
        "number": null,
        "size": null,
        "totalPages": 1
    }))
    .unwrap();

    assert!(envelope.content[0].first_name.is_empty());
    assert!(!envelope.first);
    assert_eq!(envelope.page_number, 0);
    assert_eq!(envelope.page_size, 0);
    assert_eq!(envelope.total_elements, 1);
}

#[test]
fn test_next_on_last_page_fails_without_request() {
    let envelope: PageEnvelope<Contact> =
        serde_json::from_value(json!({"content": [], "last": true, "number": 4, "size": 25}))
            .unwrap();
    let page = Page::from_envelope(
        offline_client(),
        "veem/v1.1/contacts",
        vec![Filter::email("ada@example.com")],
        envelope,
    );

    assert!(!page.has_next());
    let err = tokio_test::block_on(page.next()).unwrap_err();
    // A network attempt would have surfaced as AppError::Network
    assert!(matches!(err, AppError::NoMorePages));
}

#[tokio::test]
async fn test_page_accessors() {
    let envelope: PageEnvelope<Contact> = serde_json::from_value(json!({
        "content": [{"id": 1}, {"id": 2}],
        "first": true,
        "last": false,
        "number": 0,
        "size": 2,
        "totalPages": 3,
        "totalElements": 6
    }))
    .unwrap();
    let filters = vec![Filter::last_name("Lovelace")];
    let page = Page::from_envelope(
        offline_client(),
        "veem/v1.1/contacts",
        filters.clone(),
        envelope,
    );

    assert!(page.is_first());
    assert!(page.has_next());
    assert_eq!(page.number(), 0);
    assert_eq!(page.size(), 2);
    assert_eq!(page.total_pages(), 3);
    assert_eq!(page.total_elements(), 6);
    assert_eq!(page.filters(), filters.as_slice());
    let ids: Vec<Option<i64>> = page.into_items().into_iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![Some(1), Some(2)]);
}
