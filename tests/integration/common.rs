// Common utilities for integration tests

use mockito::{Matcher, Mock, ServerGuard};
use serde_json::json;
use veem_client::prelude::*;

pub const CLIENT_ID: &str = "test-client";
pub const CLIENT_SECRET: &str = "test-secret";
/// `Basic base64("test-client:test-secret")`
pub const BASIC_AUTH: &str = "Basic dGVzdC1jbGllbnQ6dGVzdC1zZWNyZXQ=";
pub const ACCESS_TOKEN: &str = "test-access-token";
pub const BEARER: &str = "Bearer test-access-token";

/// Configuration pointing at the mock server
pub fn test_config(server: &ServerGuard) -> Config {
    Config::with_credentials(CLIENT_ID, CLIENT_SECRET, Environment::Sandbox)
        .with_base_url(server.url())
}

/// Token endpoint mock answering `hits` times with a token living `expires_in` seconds
pub async fn mock_token(server: &mut ServerGuard, expires_in: i64, hits: usize) -> Mock {
    let body = json!({
        "access_token": ACCESS_TOKEN,
        "token_type": "bearer",
        "expires_in": expires_in,
        "scope": "all",
        "user_id": 1001,
        "account_id": 2002,
        "user_name": "ada@example.com"
    });

    server
        .mock("POST", "/oauth/token")
        .match_header("authorization", BASIC_AUTH)
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("grant_type".into(), "client_credentials".into()),
            Matcher::UrlEncoded("scope".into(), "all".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .expect(hits)
        .create_async()
        .await
}

/// Client that has already been handed a long-lived token
pub async fn authenticated_client(server: &mut ServerGuard) -> (Client, Mock) {
    setup_logger();
    let token = mock_token(server, 3600, 1).await;
    let client = Client::new(test_config(server))
        .await
        .expect("client should authenticate");
    (client, token)
}

pub fn contact_json(id: i64, first_name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "firstName": first_name,
        "lastName": "Lovelace",
        "email": format!("{}@example.com", first_name.to_lowercase()),
        "isoCountryCode": "GB",
        "dialCode": "+44",
        "phoneNumber": "2071234567"
    })
}
