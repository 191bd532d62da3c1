use serde_json::json;
use veem_client::model::responses::{BatchOperation, BatchQuoteResponse};

#[test]
fn test_batch_operation_without_items() {
    let batch: BatchOperation = serde_json::from_value(json!({
        "batchId": 3,
        "status": "Pending",
        "totalItems": 4,
        "processedItems": 1,
        "hasErrors": false,
        "batchItems": null
    }))
    .unwrap();

    assert_eq!(batch.batch_id, 3);
    assert!(batch.batch_items.is_empty());
    assert!(!batch.is_complete());
    assert_eq!(batch.failed_items().count(), 0);
}

#[test]
fn test_batch_operation_failed_items() {
    let batch: BatchOperation = serde_json::from_value(json!({
        "batchId": 3,
        "status": "Completed",
        "totalItems": 2,
        "processedItems": 2,
        "hasErrors": true,
        "batchItems": [
            {"batchItemId": 10, "status": "Completed"},
            {"batchItemId": 11, "status": "Failed",
             "errorInfo": {"error": "validation", "message": "Missing payee email"}}
        ]
    }))
    .unwrap();

    assert!(batch.is_complete());
    let failed: Vec<_> = batch.failed_items().collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].batch_item_id, 11);
    let info = failed[0].error_info.as_ref().unwrap();
    assert_eq!(info.to_string(), "(validation) Missing payee email");
}

#[test]
fn test_batch_quote_response() {
    let response: BatchQuoteResponse = serde_json::from_value(json!({
        "success": [{"id": "q-1", "fromCurrency": "USD", "toCurrency": "CAD", "rate": 1.35}],
        "failure": null
    }))
    .unwrap();

    assert_eq!(response.quotes[0].to_currency, "CAD");
    assert!(response.failures.is_empty());
}

#[test]
fn test_batch_operation_with_null_fields() {
    let batch: BatchOperation = serde_json::from_value(json!({
        "batchId": 8,
        "status": null,
        "totalItems": 1,
        "processedItems": null,
        "hasErrors": null,
        "batchItems": [
            {"batchItemId": 20, "status": null,
             "errorInfo": {"error": null, "message": "Duplicate contact"}}
        ]
    }))
    .unwrap();

    assert!(batch.status.is_empty());
    assert_eq!(batch.processed_items, 0);
    assert!(!batch.has_errors);
    assert!(!batch.is_complete());
    let failed: Vec<_> = batch.failed_items().collect();
    assert!(failed[0].status.is_empty());
    assert_eq!(failed[0].error_info.as_ref().unwrap().message(), "Duplicate contact");
}

#[test]
fn test_batch_quote_failure_with_null_fields() {
    let response: BatchQuoteResponse = serde_json::from_value(json!({
        "success": [],
        "failure": [{"batchItemId": "b-1", "errorCode": null}]
    }))
    .unwrap();

    assert_eq!(response.failures[0].batch_item_id, "b-1");
    assert!(response.failures[0].error_code.is_empty());
}
