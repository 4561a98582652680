//! Bearer-authorized request client.

use serde_json::{Map, Value};
use std::fmt;
use std::sync::{Arc, OnceLock};
use tokio::sync::Mutex;
use tracing::instrument;

use crate::auth::{token_request, AccessToken, TokenResponse};
use crate::config::Credentials;
use crate::errors::{BuzError, BuzResult};
use crate::transport::{HttpMethod, HttpRequest, HttpTransport};

const RESERVED_HEADERS: &[&str] = &["Authorization", "Accept"];

/// Sends application requests with a cached client-credentials token.
///
/// The first request exchanges the credentials for a token at `POST /token`;
/// later requests reuse it. The token cache lock is held across the exchange,
/// so concurrent first callers share a single exchange.
///
/// A token rejected by the API (for example after expiry) is not refreshed:
/// the request fails with [`BuzError::RequestFailed`] and the token stays
/// cached.
pub struct AuthorizedClient {
    transport: Arc<dyn HttpTransport>,
    credentials: OnceLock<Credentials>,
    token: Mutex<Option<AccessToken>>,
    headers: Vec<(String, String)>,
}

impl AuthorizedClient {
    /// Creates a client without credentials.
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            credentials: OnceLock::new(),
            token: Mutex::new(None),
            headers: Vec::new(),
        }
    }

    /// Adds headers sent with every application request.
    ///
    /// `Authorization` and `Accept` are set by the client and cannot be
    /// overridden; such entries are dropped.
    pub fn with_headers(mut self, headers: Vec<(String, String)>) -> Self {
        self.headers = headers
            .into_iter()
            .filter(|(name, _)| {
                let reserved = RESERVED_HEADERS
                    .iter()
                    .any(|reserved| name.eq_ignore_ascii_case(reserved));
                if reserved {
                    tracing::warn!(header = %name, "Ignoring custom header reserved by the client");
                }
                !reserved
            })
            .collect();
        self
    }

    /// Sets the client credentials.
    ///
    /// Credentials can be set once; a second call returns
    /// [`BuzError::Configuration`].
    pub fn set_credentials(&self, credentials: Credentials) -> BuzResult<()> {
        self.credentials
            .set(credentials)
            .map_err(|_| BuzError::configuration("credentials are already set"))
    }

    /// Returns true once credentials have been set.
    pub fn has_credentials(&self) -> bool {
        self.credentials.get().is_some()
    }

    /// Returns true if a non-empty token is cached.
    pub async fn has_token(&self) -> bool {
        self.token
            .lock()
            .await
            .as_ref()
            .is_some_and(|token| !token.is_empty())
    }

    /// Performs an authorized request and returns the decoded JSON body.
    ///
    /// `body` is sent as JSON; `None` sends `{}`. An empty response body
    /// decodes to `{}`.
    ///
    /// # Errors
    ///
    /// - [`BuzError::NoCredentials`] if no complete credentials are set
    /// - [`BuzError::AuthorizationFailed`] if the token exchange fails
    /// - [`BuzError::RequestFailed`] on transport failure, a non-2xx status or
    ///   an undecodable body
    #[instrument(skip(self, body), fields(method = %method, path = %path))]
    pub async fn request(
        &self,
        path: &str,
        method: HttpMethod,
        body: Option<Value>,
    ) -> BuzResult<Value> {
        let token = self.token().await?;

        let mut request = HttpRequest::new(method, path)
            .with_header("Authorization", token.bearer())
            .with_header("Accept", "application/json")
            .with_json(body.unwrap_or_else(|| Value::Object(Map::new())));
        for (name, value) in &self.headers {
            request = request.with_header(name.clone(), value.clone());
        }

        let response = self
            .transport
            .send(request)
            .await
            .map_err(|e| BuzError::request_failed(e.to_string()))?;

        if !response.is_success() {
            tracing::warn!(status = response.status, "Request returned an error status");
            return Err(BuzError::request_failed_status(
                response.status,
                format!("HTTP {} returned for {}", response.status, path),
            ));
        }

        if response.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Object(Map::new()));
        }

        response
            .json()
            .map_err(|e| BuzError::request_failed(e.to_string()))
    }

    /// Returns the cached token, authorizing first when none is usable.
    async fn token(&self) -> BuzResult<AccessToken> {
        let mut cached = self.token.lock().await;

        if let Some(token) = cached.as_ref().filter(|token| !token.is_empty()) {
            return Ok(token.clone());
        }

        let token = self.authorize().await?;
        *cached = Some(token.clone());
        Ok(token)
    }

    #[instrument(skip(self))]
    async fn authorize(&self) -> BuzResult<AccessToken> {
        let credentials = self
            .credentials
            .get()
            .filter(|credentials| credentials.is_complete())
            .ok_or(BuzError::NoCredentials)?;

        tracing::debug!(client_id = %credentials.client_id(), "Requesting access token");

        let response = self
            .transport
            .send(token_request(credentials))
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Token request failed");
                BuzError::AuthorizationFailed
            })?;

        if !response.is_success() {
            tracing::warn!(status = response.status, "Token endpoint rejected the credentials");
            return Err(BuzError::AuthorizationFailed);
        }

        let token = response
            .json::<TokenResponse>()
            .map_err(|e| {
                tracing::warn!(error = %e, "Token response could not be decoded");
                BuzError::AuthorizationFailed
            })?
            .into_token();

        if token.is_empty() {
            tracing::warn!("Token endpoint returned no access token");
        } else {
            tracing::debug!("Access token acquired");
        }

        Ok(token)
    }
}

impl fmt::Debug for AuthorizedClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthorizedClient")
            .field("credentials", &self.credentials.get())
            .finish_non_exhaustive()
    }
}
