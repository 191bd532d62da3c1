use veem_client::model::filters::{Filter, QueryParams, SortOrder};

#[test]
fn test_every_filter_maps_to_its_query_key() {
    let params = QueryParams::from_filters(&[
        Filter::email("ada@example.com"),
        Filter::first_name("Ada"),
        Filter::last_name("Lovelace"),
        Filter::business_name("Engines"),
        Filter::batch_id(12),
        Filter::page_number(3),
        Filter::page_size(50),
        Filter::sort_time_updated_ascending(),
    ]);

    assert_eq!(
        params.pairs(),
        &[
            ("email".to_string(), "ada@example.com".to_string()),
            ("firstName".to_string(), "Ada".to_string()),
            ("lastName".to_string(), "Lovelace".to_string()),
            ("businessName".to_string(), "Engines".to_string()),
            ("batchId".to_string(), "12".to_string()),
            ("pageNumber".to_string(), "3".to_string()),
            ("pageSize".to_string(), "50".to_string()),
            ("sort".to_string(), "timeUpdated:asc".to_string()),
        ]
    );
}

#[test]
fn test_list_filters_repeat_their_key() {
    let params = QueryParams::from_filters(&[
        Filter::batch_item_ids([1, 2, 3]),
        Filter::payment_ids(vec![9]),
    ]);
    assert_eq!(params.get_all("batchItemIds"), vec!["1", "2", "3"]);
    assert_eq!(params.get_all("paymentIds"), vec!["9"]);
}

#[test]
fn test_empty_list_filter_adds_nothing() {
    let params = QueryParams::from_filters(&[Filter::statuses(Vec::<String>::new())]);
    assert!(params.is_empty());
}

#[test]
fn test_is_paging() {
    assert!(Filter::page_number(1).is_paging());
    assert!(Filter::page_size(10).is_paging());
    assert!(!Filter::email("a@b.c").is_paging());
    assert!(!Filter::Sort(SortOrder::TimeUpdatedDescending).is_paging());
}

#[test]
fn test_query_params_builder() {
    let params = QueryParams::new()
        .with("includeItems", true)
        .with("bankFields", false);
    assert_eq!(params.get_all("includeItems"), vec!["true"]);
    assert_eq!(params.get_all("bankFields"), vec!["false"]);
    assert!(params.get_all("missing").is_empty());
}
