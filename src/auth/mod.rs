//! Authentication for the Boekuwzending client.
//!
//! The API uses the OAuth2 client-credentials grant: the client id and secret
//! are exchanged at `POST /token` for a bearer token, which is then sent on
//! every application request.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;

use crate::config::Credentials;
use crate::transport::HttpRequest;

/// Path of the token endpoint.
pub const TOKEN_PATH: &str = "/token";

/// Grant type sent to the token endpoint.
pub const GRANT_TYPE: &str = "client_credentials";

/// A bearer token issued by the token endpoint.
#[derive(Clone)]
pub struct AccessToken(SecretString);

impl AccessToken {
    /// Wraps a raw token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(SecretString::new(token.into()))
    }

    /// Returns true if the server issued an empty token.
    pub fn is_empty(&self) -> bool {
        self.0.expose_secret().is_empty()
    }

    /// Returns the `Authorization` header value for this token.
    pub(crate) fn bearer(&self) -> String {
        format!("Bearer {}", self.0.expose_secret())
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&"[REDACTED]").finish()
    }
}

/// Token endpoint response body.
///
/// Only `access_token` is read; other fields are kept as untyped JSON. A
/// response without a string `access_token` yields an empty token.
#[derive(Deserialize)]
#[serde(transparent)]
pub struct TokenResponse(Map<String, Value>);

impl TokenResponse {
    /// Returns the raw value of a response field.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Converts the response into an access token.
    pub fn into_token(self) -> AccessToken {
        AccessToken::new(
            self.0
                .get("access_token")
                .and_then(Value::as_str)
                .unwrap_or_default(),
        )
    }
}

impl fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields: Vec<_> = self.0.keys().collect();
        fields.sort_unstable();
        f.debug_struct("TokenResponse")
            .field("fields", &fields)
            .finish_non_exhaustive()
    }
}

/// Builds the client-credentials token request.
pub(crate) fn token_request(credentials: &Credentials) -> HttpRequest {
    HttpRequest::post(TOKEN_PATH)
        .with_header("Accept", "application/json")
        .with_form([
            ("grant_type", GRANT_TYPE),
            ("client_id", credentials.client_id()),
            ("client_secret", credentials.client_secret()),
        ])
}
