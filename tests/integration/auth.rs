//! Integration tests for the token exchange

use super::*;
use boekuwzending_client::{BuzError, Environment, HttpMethod};
use pretty_assertions::assert_eq;
use wiremock::matchers::header;

#[tokio::test]
async fn test_token_is_exchanged_once() {
    let mock_server = setup_mock_server().await;
    mount_token(&mock_server, 1).await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .and(header("Authorization", "Bearer integration-token"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "Webshop"})))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let first = client.me().get().await.unwrap();
    let second = client.me().get().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first["name"], "Webshop");
}

#[tokio::test]
async fn test_token_form_carries_credentials() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("client_id=client-1"))
        .and(body_string_contains("client_secret=s3cret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": TOKEN})))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    assert!(client.me().get().await.is_ok());
}

#[tokio::test]
async fn test_rejected_credentials() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "invalid_client"})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.shipments().get("123").await;

    assert!(matches!(result, Err(BuzError::AuthorizationFailed)));
    assert!(!client.has_token().await);
}

#[tokio::test]
async fn test_missing_credentials_send_nothing() {
    let mock_server = setup_mock_server().await;

    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = BuzClient::builder()
        .environment(Environment::Staging)
        .base_url(mock_server.uri())
        .build()
        .unwrap();

    let result = client.request("/me", HttpMethod::Get, None).await;

    assert!(matches!(result, Err(BuzError::NoCredentials)));
}

#[tokio::test]
async fn test_unreachable_token_endpoint() {
    let mock_server = setup_mock_server().await;
    let uri = mock_server.uri();
    drop(mock_server);

    let client = BuzClient::builder()
        .base_url(uri)
        .credentials("client-1", "s3cret")
        .build()
        .unwrap();

    let result = client.me().get().await;

    assert!(matches!(result, Err(BuzError::AuthorizationFailed)));
}

#[tokio::test]
async fn test_expired_token_is_not_refreshed() {
    let mock_server = setup_mock_server().await;
    mount_token(&mock_server, 1).await;

    Mock::given(method("GET"))
        .and(path("/shipments/123"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Expired JWT Token"})))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    for _ in 0..2 {
        let err = client.shipments().get("123").await.unwrap_err();
        assert_eq!(err.status(), Some(401));
    }
    assert!(client.has_token().await);
}
