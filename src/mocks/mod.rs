//! Mock implementations for testing.
//!
//! Provides a recording mock transport and resource fixtures so the
//! authorization flow and the endpoint services can be tested without
//! network access.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use crate::transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, RequestBody, TransportError};

/// Mock HTTP transport for testing.
///
/// Responses are returned in the order they were queued; once the queue is
/// empty the default response (or a 500) is returned. Every request is
/// recorded, including those answered with a transport failure.
pub struct MockTransport {
    outcomes: Mutex<VecDeque<MockOutcome>>,
    requests: Mutex<Vec<RecordedRequest>>,
    default_response: Mutex<Option<MockResponse>>,
}

enum MockOutcome {
    Response(MockResponse),
    Failure(String),
}

/// A recorded request.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Request path.
    pub path: String,
    /// Request headers.
    pub headers: HashMap<String, String>,
    /// Request body.
    pub body: RequestBody,
}

impl RecordedRequest {
    /// Returns a header value, matching the name case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// A mock response.
#[derive(Debug, Clone)]
pub struct MockResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HashMap<String, String>,
    /// Response body.
    pub body: Vec<u8>,
}

impl MockResponse {
    /// Creates a successful JSON response.
    pub fn json<T: serde::Serialize>(value: &T) -> Self {
        let body = serde_json::to_vec(value).unwrap_or_default();
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());

        Self {
            status: 200,
            headers,
            body,
        }
    }

    /// Creates a successful token response.
    pub fn token(access_token: &str) -> Self {
        Self::json(&serde_json::json!({
            "access_token": access_token,
            "token_type": "Bearer",
            "expires_in": 3600
        }))
    }

    /// Creates an error response.
    pub fn error(status: u16, message: &str) -> Self {
        Self::json(&serde_json::json!({
            "title": "An error occurred",
            "detail": message
        }))
        .with_status(status)
    }

    /// Creates a response with a raw body.
    pub fn raw(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: body.into(),
        }
    }

    /// Creates a response with custom status.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }
}

impl MockTransport {
    /// Creates a new mock transport.
    pub fn new() -> Self {
        Self {
            outcomes: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            default_response: Mutex::new(None),
        }
    }

    /// Queues a response.
    pub fn queue(&self, response: MockResponse) -> &Self {
        lock(&self.outcomes).push_back(MockOutcome::Response(response));
        self
    }

    /// Queues a JSON response.
    pub fn queue_json<T: serde::Serialize>(&self, value: &T) -> &Self {
        self.queue(MockResponse::json(value))
    }

    /// Queues a successful token response.
    pub fn queue_token(&self, access_token: &str) -> &Self {
        self.queue(MockResponse::token(access_token))
    }

    /// Queues a transport-level failure.
    pub fn queue_transport_error(&self, message: &str) -> &Self {
        lock(&self.outcomes).push_back(MockOutcome::Failure(message.to_string()));
        self
    }

    /// Sets the default response.
    pub fn set_default(&self, response: MockResponse) {
        *lock(&self.default_response) = Some(response);
    }

    /// Gets all recorded requests.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }

    /// Gets the last recorded request.
    pub fn last_request(&self) -> Option<RecordedRequest> {
        lock(&self.requests).last().cloned()
    }

    /// Returns the number of requests made.
    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }

    /// Returns the number of requests made to a path.
    pub fn request_count_for(&self, path: &str) -> usize {
        lock(&self.requests)
            .iter()
            .filter(|r| r.path == path)
            .count()
    }

    fn next_outcome(&self) -> MockOutcome {
        if let Some(outcome) = lock(&self.outcomes).pop_front() {
            return outcome;
        }
        MockOutcome::Response(
            lock(&self.default_response)
                .clone()
                .unwrap_or_else(|| MockResponse::error(500, "No mock response configured")),
        )
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        lock(&self.requests).push(RecordedRequest {
            method: request.method,
            path: request.path,
            headers: request.headers,
            body: request.body,
        });

        match self.next_outcome() {
            MockOutcome::Response(response) => Ok(HttpResponse {
                status: response.status,
                headers: response.headers,
                body: response.body,
            }),
            MockOutcome::Failure(message) => Err(TransportError::Connection { message }),
        }
    }
}

impl std::fmt::Debug for MockTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockTransport")
            .field("request_count", &self.request_count())
            .finish()
    }
}

/// Test fixtures for common resources.
pub mod fixtures {
    use chrono::{DateTime, NaiveDate, NaiveTime};

    use crate::types::{
        Address, Contact, DeliveryInstruction, DispatchInstruction, Item, Label, Order, OrderLine,
        Shipment, Tracking, TrackingLine,
    };

    /// Shipment id used by the fixtures.
    pub const SHIPMENT_ID: &str = "5f1c9a7e-2d4b-4c1a-9a43-1c2d3e4f5a6b";

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default()
    }

    fn timestamp(raw: &str) -> DateTime<chrono::FixedOffset> {
        DateTime::parse_from_rfc3339(raw).unwrap_or_default()
    }

    /// A recipient contact.
    pub fn contact() -> Contact {
        Contact {
            company: Some("Boekuwzending B.V.".to_string()),
            name: "Jan Jansen".to_string(),
            email: Some("jan@example.com".to_string()),
            phone: None,
        }
    }

    /// A recipient address.
    pub fn address() -> Address {
        Address {
            street: "Stationsplein".to_string(),
            number: "1".to_string(),
            number_addition: Some("A".to_string()),
            postcode: "1012AB".to_string(),
            city: "Amsterdam".to_string(),
            country_code: "NL".to_string(),
            private_address: true,
        }
    }

    /// An order with two lines.
    pub fn order() -> Order {
        Order {
            external_id: "ORD-1001".to_string(),
            reference: Some("Webshop #1001".to_string()),
            created_at_source: timestamp("2024-03-01T10:15:00+01:00"),
            order_lines: vec![
                OrderLine {
                    external_id: Some("L1".to_string()),
                    description: "Koffiebonen 1kg".to_string(),
                    quantity: 2,
                    value: Some(24.95),
                },
                OrderLine {
                    external_id: Some("L2".to_string()),
                    description: "Filterpapier".to_string(),
                    quantity: 1,
                    value: None,
                },
            ],
            ship_to_contact: contact(),
            ship_to_address: address(),
        }
    }

    /// A parcel item.
    pub fn item() -> Item {
        Item {
            description: "Boeken".to_string(),
            quantity: 1,
            weight: 1500,
            length: 30,
            width: 20,
            height: 10,
        }
    }

    /// A shipment with instructions and two items.
    pub fn shipment() -> Shipment {
        Shipment {
            id: Some(SHIPMENT_ID.to_string()),
            reference: Some("ORD-1001".to_string()),
            ship_from_contact: None,
            ship_from_address: None,
            ship_to_contact: contact(),
            ship_to_address: address(),
            dispatch: Some(DispatchInstruction {
                date: date(2024, 3, 4),
                time_from: Some(time(9, 0)),
                time_to: Some(time(17, 0)),
            }),
            delivery: Some(DeliveryInstruction {
                date: date(2024, 3, 5),
                time_from: None,
                time_to: None,
            }),
            items: vec![
                item(),
                Item {
                    description: "Tijdschriften".to_string(),
                    quantity: 2,
                    weight: 400,
                    length: 25,
                    width: 18,
                    height: 2,
                },
            ],
        }
    }

    /// Tracking with two events.
    pub fn tracking() -> Tracking {
        Tracking {
            tracking_number: "3SBUZ0001234".to_string(),
            carrier: Some("PostNL".to_string()),
            status: "in_transit".to_string(),
            lines: vec![
                TrackingLine {
                    code: "A01".to_string(),
                    description: "Zending is aangemeld".to_string(),
                    occurred_at: timestamp("2024-03-04T09:12:00+01:00"),
                    location: None,
                },
                TrackingLine {
                    code: "B01".to_string(),
                    description: "Zending is gesorteerd".to_string(),
                    occurred_at: timestamp("2024-03-04T22:40:00+01:00"),
                    location: Some("Nieuwegein".to_string()),
                },
            ],
        }
    }

    /// A PDF label.
    pub fn label() -> Label {
        Label {
            id: "lbl-42".to_string(),
            shipment_id: Some(SHIPMENT_ID.to_string()),
            tracking_number: Some("3SBUZ0001234".to_string()),
            format: "pdf".to_string(),
            content: "JVBERi0xLjQ=".to_string(),
        }
    }
}
