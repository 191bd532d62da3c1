use std::collections::HashSet;
use veem_client::utils::id::request_id;

#[test]
fn test_request_id_is_lowercase_hex() {
    let id = request_id();
    assert_eq!(id.len(), 32);
    assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}

#[test]
fn test_request_ids_are_unique() {
    let ids: HashSet<String> = (0..1000).map(|_| request_id()).collect();
    assert_eq!(ids.len(), 1000);
}
