use crate::common::*;
use mockito::Server;
use veem_client::prelude::*;

#[tokio::test]
async fn test_new_client_acquires_token_eagerly() {
    let mut server = Server::new_async().await;
    let token = mock_token(&mut server, 3600, 1).await;

    let client = Client::new(test_config(&server)).await.unwrap();

    token.assert_async().await;
    let current = client.http_client().auth().current_token().await.unwrap();
    assert_eq!(current.access_token, ACCESS_TOKEN);
    assert_eq!(current.account_id.as_deref(), Some("2002"));
    assert_eq!(current.username.as_deref(), Some("ada@example.com"));
    assert_eq!(current.authorization_header(), BEARER);
}

#[tokio::test]
async fn test_lazy_client_defers_token_until_first_request() {
    let mut server = Server::new_async().await;
    let token = mock_token(&mut server, 3600, 0).await;

    let client = Client::new_lazy(test_config(&server)).unwrap();

    token.assert_async().await;
    assert!(client.http_client().auth().current_token().await.is_none());
}

#[tokio::test]
async fn test_token_close_to_expiry_is_refreshed_before_the_call() {
    let mut server = Server::new_async().await;
    // 30 seconds is inside the one minute safety margin
    let token = mock_token(&mut server, 30, 2).await;
    let contact = server
        .mock("GET", "/veem/v1.1/contacts/1")
        .match_header("authorization", BEARER)
        .with_status(200)
        .with_body(contact_json(1, "Ada").to_string())
        .expect(1)
        .create_async()
        .await;

    let client = Client::new(test_config(&server)).await.unwrap();
    let result = client.contacts().get(1).await.unwrap();

    assert_eq!(result.id, Some(1));
    token.assert_async().await;
    contact.assert_async().await;
}

#[tokio::test]
async fn test_valid_token_is_reused() {
    let mut server = Server::new_async().await;
    let token = mock_token(&mut server, 3600, 1).await;
    let contact = server
        .mock("GET", "/veem/v1.1/contacts/1")
        .match_header("authorization", BEARER)
        .with_status(200)
        .with_body(contact_json(1, "Ada").to_string())
        .expect(3)
        .create_async()
        .await;

    let client = Client::new(test_config(&server)).await.unwrap();
    for _ in 0..3 {
        client.contacts().get(1).await.unwrap();
    }

    token.assert_async().await;
    contact.assert_async().await;
}

#[tokio::test]
async fn test_concurrent_requests_share_a_single_refresh() {
    let mut server = Server::new_async().await;
    let token = mock_token(&mut server, 3600, 1).await;
    let contact = server
        .mock("GET", "/veem/v1.1/contacts/1")
        .with_status(200)
        .with_body(contact_json(1, "Ada").to_string())
        .expect(4)
        .create_async()
        .await;

    let client = Client::new_lazy(test_config(&server)).unwrap();
    let contacts = client.contacts();
    let (a, b, c, d) = tokio::join!(
        contacts.get(1),
        contacts.get(1),
        contacts.get(1),
        contacts.get(1)
    );

    assert!(a.is_ok() && b.is_ok() && c.is_ok() && d.is_ok());
    token.assert_async().await;
    contact.assert_async().await;
}

#[tokio::test]
async fn test_rejected_credentials_fail_client_creation() {
    let mut server = Server::new_async().await;
    let token = server
        .mock("POST", "/oauth/token")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error":"invalid_client","error_description":"Bad client credentials"}"#)
        .create_async()
        .await;

    let err = Client::new(test_config(&server)).await.unwrap_err();

    token.assert_async().await;
    assert!(matches!(err, AppError::Authentication(_)));
    assert_eq!(err.api_error().unwrap().message(), "Bad client credentials");
    assert_eq!(
        err.to_string(),
        "authentication failed: (invalid_client) Bad client credentials"
    );
}

#[tokio::test]
async fn test_auth_failure_prevents_the_original_request() {
    let mut server = Server::new_async().await;
    let token = server
        .mock("POST", "/oauth/token")
        .with_status(400)
        .with_body("bad request")
        .create_async()
        .await;
    let payment = server
        .mock("GET", "/veem/v1.1/payments/5")
        .expect(0)
        .create_async()
        .await;

    let client = Client::new_lazy(test_config(&server)).unwrap();
    let err = client.payments().get(5).await.unwrap_err();

    assert!(matches!(err, AppError::Authentication(_)));
    assert_eq!(err.api_error().unwrap().message(), "bad request");
    token.assert_async().await;
    payment.assert_async().await;
}

#[tokio::test]
async fn test_token_is_checked_after_waiting_for_the_rate_limiter() {
    let mut server = Server::new_async().await;
    // Valid for one second past the safety margin
    let token = mock_token(&mut server, 61, 2).await;
    let contact = server
        .mock("GET", "/veem/v1.1/contacts/1")
        .match_header("authorization", BEARER)
        .with_status(200)
        .with_body(contact_json(1, "Ada").to_string())
        .expect(2)
        .create_async()
        .await;

    let mut config = test_config(&server);
    config.rate_limiter = RateLimiterConfig {
        max_requests: 1,
        period_seconds: 2,
        burst_size: 1,
    };
    let client = Client::new(config).await.unwrap();

    client.contacts().get(1).await.unwrap();
    // Throttled for about two seconds, by which time the token is too close to expiry
    client.contacts().get(1).await.unwrap();

    token.assert_async().await;
    contact.assert_async().await;
}
