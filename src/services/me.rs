//! Account service.

use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::instrument;

use crate::client::AuthorizedClient;
use crate::errors::{BuzError, BuzResult};
use crate::transport::HttpMethod;

/// Service for the authenticated account (`/me`).
#[derive(Debug, Clone)]
pub struct MeService {
    client: Arc<AuthorizedClient>,
}

impl MeService {
    /// Creates a new account service.
    pub fn new(client: Arc<AuthorizedClient>) -> Self {
        Self { client }
    }

    /// Returns the account information as an untyped JSON map.
    #[instrument(skip(self))]
    pub async fn get(&self) -> BuzResult<Map<String, Value>> {
        match self.client.request("/me", HttpMethod::Get, None).await? {
            Value::Object(map) => Ok(map),
            other => Err(BuzError::request_failed(format!(
                "expected a JSON object from /me, got {}",
                json_type(&other)
            ))),
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
