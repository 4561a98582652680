//! Configuration module for the Boekuwzending client.
//!
//! Provides environment selection (live or staging), base URL resolution,
//! timeouts and optional client credentials.

use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::errors::{BuzError, BuzResult};

/// Base URL of the live environment.
pub const LIVE_BASE_URL: &str = "https://api.mijn.boekuwzending.com";

/// Base URL of the staging environment.
pub const STAGING_BASE_URL: &str = "https://api.staging.mijn.boekuwzending.com";

/// Default request timeout (30 seconds).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default user agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("boekuwzending-client/", env!("CARGO_PKG_VERSION"));

/// API environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Production API.
    #[default]
    Live,
    /// Staging API for integration testing.
    Staging,
}

impl Environment {
    /// Returns the base URL of this environment.
    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Live => LIVE_BASE_URL,
            Environment::Staging => STAGING_BASE_URL,
        }
    }

    /// Returns the environment name.
    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Live => "live",
            Environment::Staging => "staging",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = BuzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "live" => Ok(Environment::Live),
            "staging" => Ok(Environment::Staging),
            other => Err(BuzError::configuration(format!(
                "Unknown environment '{}', expected 'live' or 'staging'",
                other
            ))),
        }
    }
}

/// OAuth client credentials.
#[derive(Clone)]
pub struct Credentials {
    client_id: String,
    client_secret: SecretString,
}

impl Credentials {
    /// Creates a credential pair.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: SecretString::new(client_secret.into()),
        }
    }

    /// Returns the client id.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Returns the client secret (exposing the secret).
    pub(crate) fn client_secret(&self) -> &str {
        self.client_secret.expose_secret()
    }

    /// Returns true if both parts are non-empty.
    pub fn is_complete(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.expose_secret().is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .finish()
    }
}

/// Configuration for the Boekuwzending client.
#[derive(Clone)]
pub struct BuzConfig {
    /// Selected environment.
    pub environment: Environment,
    /// Base URL for API requests (environment URL unless overridden).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// User agent header value.
    pub user_agent: String,
    /// Custom headers to include in requests.
    pub custom_headers: Vec<(String, String)>,
    pub(crate) credentials: Option<Credentials>,
}

impl BuzConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> BuzConfigBuilder {
        BuzConfigBuilder::new()
    }

    /// Creates a configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `BUZ_CLIENT_ID` / `BUZ_CLIENT_SECRET` (optional): client credentials
    /// - `BUZ_ENVIRONMENT` (optional): `live` or `staging`
    /// - `BUZ_BASE_URL` (optional): custom base URL
    /// - `BUZ_TIMEOUT` (optional): request timeout in seconds
    pub fn from_env() -> BuzResult<Self> {
        let mut builder = BuzConfigBuilder::new();

        if let (Ok(id), Ok(secret)) = (
            std::env::var("BUZ_CLIENT_ID"),
            std::env::var("BUZ_CLIENT_SECRET"),
        ) {
            builder = builder.credentials(id, secret);
        }

        if let Ok(environment) = std::env::var("BUZ_ENVIRONMENT") {
            builder = builder.environment(environment.parse()?);
        }

        if let Ok(base_url) = std::env::var("BUZ_BASE_URL") {
            builder = builder.base_url(base_url);
        }

        if let Ok(timeout_str) = std::env::var("BUZ_TIMEOUT") {
            let secs = timeout_str.parse::<u64>().map_err(|_| {
                BuzError::configuration(format!("BUZ_TIMEOUT is not a number: {}", timeout_str))
            })?;
            builder = builder.timeout(Duration::from_secs(secs));
        }

        builder.build()
    }

    /// Returns the configured credentials, if any.
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Returns the full URL for an endpoint path.
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl fmt::Debug for BuzConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuzConfig")
            .field("environment", &self.environment)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("credentials", &self.credentials)
            .finish()
    }
}

/// Builder for `BuzConfig`.
#[derive(Default)]
pub struct BuzConfigBuilder {
    environment: Option<Environment>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    custom_headers: Vec<(String, String)>,
    credentials: Option<Credentials>,
}

impl BuzConfigBuilder {
    /// Creates a new configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the API environment.
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Overrides the base URL of the selected environment.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Adds a custom header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_headers.push((name.into(), value.into()));
        self
    }

    /// Sets the client credentials.
    pub fn credentials(mut self, client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        self.credentials = Some(Credentials::new(client_id, client_secret));
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> BuzResult<BuzConfig> {
        let environment = self.environment.unwrap_or_default();

        let base_url = self
            .base_url
            .unwrap_or_else(|| environment.base_url().to_string())
            .trim_end_matches('/')
            .to_string();

        url::Url::parse(&base_url)?;

        if !base_url.starts_with("https://") {
            tracing::warn!(base_url = %base_url, "Base URL does not use HTTPS");
        }

        Ok(BuzConfig {
            environment,
            base_url,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            user_agent: self
                .user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            custom_headers: self.custom_headers,
            credentials: self.credentials,
        })
    }
}
