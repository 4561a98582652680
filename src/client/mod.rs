//! Boekuwzending API client.
//!
//! Provides the main client interface for interacting with the Boekuwzending API.

mod authorized;

pub use authorized::AuthorizedClient;

use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

use crate::config::{BuzConfig, BuzConfigBuilder, Credentials, Environment};
use crate::errors::{BuzError, BuzResult};
use crate::serializer::SerializerRegistry;
use crate::services::{LabelsService, MeService, OrdersService, ShipmentsService, TrackingService};
use crate::transport::{HttpMethod, HttpTransport, ReqwestTransport};

/// The main Boekuwzending client.
///
/// # Example
///
/// ```rust,no_run
/// use boekuwzending_client::{BuzClient, Environment};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = BuzClient::builder()
///         .environment(Environment::Staging)
///         .credentials("client-id", "client-secret")
///         .build()?;
///
///     let shipment = client.shipments().get("123").await?;
///     println!("{:?}", shipment.id);
///     Ok(())
/// }
/// ```
pub struct BuzClient {
    config: BuzConfig,
    inner: Arc<AuthorizedClient>,
    registry: Arc<SerializerRegistry>,
    me_service: MeService,
    orders_service: OrdersService,
    shipments_service: ShipmentsService,
    tracking_service: TrackingService,
    labels_service: LabelsService,
}

impl BuzClient {
    /// Creates a new client builder.
    pub fn builder() -> BuzClientBuilder {
        BuzClientBuilder::new()
    }

    /// Creates a client for an environment, without credentials.
    pub fn new(environment: Environment) -> BuzResult<Self> {
        BuzClientBuilder::new().environment(environment).build()
    }

    /// Creates a client from environment variables.
    ///
    /// See [`BuzConfig::from_env`] for the variables read.
    pub fn from_env() -> BuzResult<Self> {
        let config = BuzConfig::from_env()?;
        BuzClientBuilder::from_config(config).build()
    }

    /// Sets the client credentials used for the token exchange.
    ///
    /// # Errors
    ///
    /// Returns [`BuzError::Configuration`] if credentials were already set.
    pub fn set_credentials(
        &self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> BuzResult<()> {
        self.inner
            .set_credentials(Credentials::new(client_id, client_secret))
    }

    /// Performs an authorized request against an arbitrary path.
    ///
    /// See [`AuthorizedClient::request`].
    pub async fn request(
        &self,
        path: &str,
        method: HttpMethod,
        body: Option<Value>,
    ) -> BuzResult<Value> {
        self.inner.request(path, method, body).await
    }

    /// Returns true if an access token is cached.
    pub async fn has_token(&self) -> bool {
        self.inner.has_token().await
    }

    /// Returns the account service.
    pub fn me(&self) -> &MeService {
        &self.me_service
    }

    /// Returns the orders service.
    pub fn orders(&self) -> &OrdersService {
        &self.orders_service
    }

    /// Returns the shipments service.
    pub fn shipments(&self) -> &ShipmentsService {
        &self.shipments_service
    }

    /// Returns the tracking service.
    pub fn tracking(&self) -> &TrackingService {
        &self.tracking_service
    }

    /// Returns the labels service.
    pub fn labels(&self) -> &LabelsService {
        &self.labels_service
    }

    /// Returns the serializer registry.
    pub fn registry(&self) -> &SerializerRegistry {
        &self.registry
    }

    /// Returns the configuration.
    pub fn config(&self) -> &BuzConfig {
        &self.config
    }
}

impl std::fmt::Debug for BuzClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuzClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Builder for the Boekuwzending client.
pub struct BuzClientBuilder {
    config_builder: BuzConfigBuilder,
    config: Option<BuzConfig>,
    transport: Option<Arc<dyn HttpTransport>>,
    registry: Option<Arc<SerializerRegistry>>,
}

impl BuzClientBuilder {
    /// Creates a new client builder.
    pub fn new() -> Self {
        Self {
            config_builder: BuzConfigBuilder::new(),
            config: None,
            transport: None,
            registry: None,
        }
    }

    /// Creates a builder from an existing configuration.
    ///
    /// Configuration setters on the builder are ignored afterwards.
    pub fn from_config(config: BuzConfig) -> Self {
        Self {
            config: Some(config),
            ..Self::new()
        }
    }

    /// Sets the environment.
    pub fn environment(mut self, environment: Environment) -> Self {
        self.config_builder = self.config_builder.environment(environment);
        self
    }

    /// Overrides the base URL of the environment.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.base_url(base_url);
        self
    }

    /// Sets the client credentials.
    pub fn credentials(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.config_builder = self.config_builder.credentials(client_id, client_secret);
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config_builder = self.config_builder.timeout(timeout);
        self
    }

    /// Sets the user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.user_agent(user_agent);
        self
    }

    /// Adds a header sent with every application request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.header(name, value);
        self
    }

    /// Sets a custom transport.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Sets a custom serializer registry.
    pub fn registry(mut self, registry: SerializerRegistry) -> Self {
        self.registry = Some(Arc::new(registry));
        self
    }

    /// Builds the client.
    pub fn build(self) -> BuzResult<BuzClient> {
        let config = match self.config {
            Some(config) => config,
            None => self.config_builder.build()?,
        };

        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(t) => t,
            None => Arc::new(
                ReqwestTransport::new(&config.base_url, config.timeout, &config.user_agent)
                    .map_err(|e| BuzError::configuration(e.to_string()))?,
            ),
        };

        let inner = Arc::new(
            AuthorizedClient::new(transport).with_headers(config.custom_headers.clone()),
        );
        if let Some(credentials) = config.credentials.clone() {
            inner.set_credentials(credentials)?;
        }

        let registry = self
            .registry
            .unwrap_or_else(|| Arc::new(SerializerRegistry::new()));

        tracing::debug!(
            environment = %config.environment,
            base_url = %config.base_url,
            "Boekuwzending client created"
        );

        Ok(BuzClient {
            me_service: MeService::new(Arc::clone(&inner)),
            orders_service: OrdersService::new(Arc::clone(&inner), Arc::clone(&registry)),
            shipments_service: ShipmentsService::new(Arc::clone(&inner), Arc::clone(&registry)),
            tracking_service: TrackingService::new(Arc::clone(&inner), Arc::clone(&registry)),
            labels_service: LabelsService::new(Arc::clone(&inner), Arc::clone(&registry)),
            config,
            inner,
            registry,
        })
    }
}

impl Default for BuzClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
