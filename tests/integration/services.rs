//! Integration tests for the endpoint services

use super::*;
use boekuwzending_client::{BuzError, SerializerRegistry};
use pretty_assertions::assert_eq;
use wiremock::matchers::{body_partial_json, header};

#[tokio::test]
async fn test_get_shipment() {
    let mock_server = setup_mock_server().await;
    mount_token(&mock_server, 1).await;

    let registry = SerializerRegistry::new();
    Mock::given(method("GET"))
        .and(path("/shipments/123"))
        .and(header("Authorization", "Bearer integration-token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(registry.serialize_value(&shipment()).unwrap()),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let fetched = client.shipments().get("123").await.unwrap();

    assert_eq!(fetched, shipment());
}

#[tokio::test]
async fn test_create_shipment_sends_wire_document() {
    let mock_server = setup_mock_server().await;
    mount_token(&mock_server, 1).await;

    let registry = SerializerRegistry::new();
    Mock::given(method("POST"))
        .and(path("/shipments"))
        .and(header("Content-Type", "application/json"))
        .and(body_partial_json(json!({
            "reference": "ORD-2001",
            "shipTo": {"address": {"postcode": "1012AB", "countryCode": "NL"}},
            "dispatch": {"date": "2024-05-13", "timeFrom": "13:00", "timeTo": "17:30"},
            "delivery": {"timeFrom": "08:15:30", "timeTo": null}
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(registry.serialize_value(&shipment()).unwrap()),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let created = client.shipments().create(&shipment()).await.unwrap();

    assert_eq!(created.id.as_deref(), Some("8b7d2c1e"));
}

#[tokio::test]
async fn test_create_order() {
    let mock_server = setup_mock_server().await;
    mount_token(&mock_server, 1).await;

    let registry = SerializerRegistry::new();
    Mock::given(method("POST"))
        .and(path("/orders"))
        .and(body_partial_json(json!({
            "externalId": "ORD-2001",
            "createdAtSource": "2024-05-10T08:00:00+02:00",
            "orderLines": [{"description": "Theepot"}, {"description": "Theeglazen"}]
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(registry.serialize_value(&order()).unwrap()),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let created = client.orders().create(&order()).await.unwrap();

    assert_eq!(created, order());
}

#[tokio::test]
async fn test_tracking_and_labels() {
    let mock_server = setup_mock_server().await;
    mount_token(&mock_server, 1).await;

    let registry = SerializerRegistry::new();
    Mock::given(method("GET"))
        .and(path("/shipments/8b7d2c1e/tracking"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(registry.serialize_value(&tracking()).unwrap()),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/shipments/8b7d2c1e/labels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            registry.serialize_value(&label()).unwrap()
        ])))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/labels/lbl-7"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(registry.serialize_value(&label()).unwrap()),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let tracking = client.tracking().get("8b7d2c1e").await.unwrap();
    assert_eq!(tracking.latest().map(|l| l.code.as_str()), Some("I01"));

    let labels = client.labels().for_shipment("8b7d2c1e").await.unwrap();
    assert_eq!(labels, vec![label()]);

    let single = client.labels().get("lbl-7").await.unwrap();
    assert_eq!(single.decode_content().unwrap(), b"^XA^FO50,50^FDHello^FS^XZ".to_vec());
}

#[tokio::test]
async fn test_server_error_is_request_failed() {
    let mock_server = setup_mock_server().await;
    mount_token(&mock_server, 1).await;

    Mock::given(method("GET"))
        .and(path("/shipments/404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"title": "Not Found"})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.shipments().get("404").await;

    match result {
        Err(BuzError::RequestFailed { message, status }) => {
            assert_eq!(status, Some(404));
            assert_eq!(message, "HTTP 404 returned for /shipments/404");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_request_failed() {
    let mock_server = setup_mock_server().await;
    mount_token(&mock_server, 1).await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.me().get().await;

    assert!(matches!(result, Err(BuzError::RequestFailed { status: None, .. })));
}
