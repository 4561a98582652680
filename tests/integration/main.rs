//! Integration tests using WireMock
//!
//! These tests run the full client against a mock HTTP server: token
//! exchange, bearer requests, serialization and error mapping.

mod auth;
mod resources;
mod services;

use boekuwzending_client::{
    Address, BuzClient, Contact, DeliveryInstruction, DispatchInstruction, Item, Label, Order,
    OrderLine, Shipment, Tracking, TrackingLine,
};
use chrono::{DateTime, NaiveDate, NaiveTime};
use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN: &str = "integration-token";

/// Starts a mock server.
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Builds a client with credentials pointing at the mock server.
pub fn client_for(server: &MockServer) -> BuzClient {
    BuzClient::builder()
        .base_url(server.uri())
        .credentials("client-1", "s3cret")
        .build()
        .expect("Failed to build client")
}

/// Mounts a token endpoint that expects exactly `times` exchanges.
pub async fn mount_token(server: &MockServer, times: u64) {
    Mock::given(method("POST"))
        .and(path("/token"))
        .and(body_string_contains("grant_type=client_credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": TOKEN,
            "token_type": "Bearer",
            "expires_in": 3600
        })))
        .expect(times)
        .mount(server)
        .await;
}

pub fn contact() -> Contact {
    Contact {
        company: Some("Boekuwzending B.V.".to_string()),
        name: "Jan Jansen".to_string(),
        email: Some("jan@example.com".to_string()),
        phone: Some("+31201234567".to_string()),
    }
}

pub fn address() -> Address {
    Address {
        street: "Stationsplein".to_string(),
        number: "1".to_string(),
        number_addition: None,
        postcode: "1012AB".to_string(),
        city: "Amsterdam".to_string(),
        country_code: "NL".to_string(),
        private_address: false,
    }
}

pub fn order() -> Order {
    Order {
        external_id: "ORD-2001".to_string(),
        reference: None,
        created_at_source: DateTime::parse_from_rfc3339("2024-05-10T08:00:00+02:00").unwrap(),
        order_lines: vec![
            OrderLine {
                external_id: Some("1".to_string()),
                description: "Theepot".to_string(),
                quantity: 1,
                value: Some(19.5),
            },
            OrderLine {
                external_id: Some("2".to_string()),
                description: "Theeglazen".to_string(),
                quantity: 6,
                value: Some(3.25),
            },
        ],
        ship_to_contact: contact(),
        ship_to_address: address(),
    }
}

pub fn shipment() -> Shipment {
    Shipment {
        id: Some("8b7d2c1e".to_string()),
        reference: Some("ORD-2001".to_string()),
        ship_from_contact: Some(Contact {
            name: "Magazijn".to_string(),
            ..Contact::default()
        }),
        ship_from_address: Some(address()),
        ship_to_contact: contact(),
        ship_to_address: address(),
        dispatch: Some(DispatchInstruction {
            date: NaiveDate::from_ymd_opt(2024, 5, 13).unwrap(),
            time_from: NaiveTime::from_hms_opt(13, 0, 0),
            time_to: NaiveTime::from_hms_opt(17, 30, 0),
        }),
        delivery: Some(DeliveryInstruction {
            date: NaiveDate::from_ymd_opt(2024, 5, 14).unwrap(),
            time_from: NaiveTime::from_hms_opt(8, 15, 30),
            time_to: None,
        }),
        items: vec![Item {
            description: "Servies".to_string(),
            quantity: 1,
            weight: 2300,
            length: 40,
            width: 30,
            height: 25,
        }],
    }
}

pub fn tracking() -> Tracking {
    Tracking {
        tracking_number: "3SBUZ0009876".to_string(),
        carrier: Some("DHL".to_string()),
        status: "delivered".to_string(),
        lines: vec![
            TrackingLine {
                code: "A01".to_string(),
                description: "Aangemeld".to_string(),
                occurred_at: DateTime::parse_from_rfc3339("2024-05-13T13:05:00+02:00").unwrap(),
                location: None,
            },
            TrackingLine {
                code: "I01".to_string(),
                description: "Bezorgd".to_string(),
                occurred_at: DateTime::parse_from_rfc3339("2024-05-14T10:02:00+02:00").unwrap(),
                location: Some("Amsterdam".to_string()),
            },
        ],
    }
}

pub fn label() -> Label {
    Label {
        id: "lbl-7".to_string(),
        shipment_id: Some("8b7d2c1e".to_string()),
        tracking_number: Some("3SBUZ0009876".to_string()),
        format: "zpl".to_string(),
        content: "XlhBXkZPNTAsNTBeRkRIZWxsb15GU15YWg==".to_string(),
    }
}
