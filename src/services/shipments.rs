//! Shipments service.

use std::sync::Arc;
use tracing::instrument;

use super::require_id;
use crate::client::AuthorizedClient;
use crate::errors::BuzResult;
use crate::serializer::SerializerRegistry;
use crate::transport::HttpMethod;
use crate::types::Shipment;

/// Service for creating and retrieving shipments.
#[derive(Debug, Clone)]
pub struct ShipmentsService {
    client: Arc<AuthorizedClient>,
    registry: Arc<SerializerRegistry>,
}

impl ShipmentsService {
    /// Creates a new shipments service.
    pub fn new(client: Arc<AuthorizedClient>, registry: Arc<SerializerRegistry>) -> Self {
        Self { client, registry }
    }

    /// Creates a shipment and returns it as stored by the API, including its id.
    #[instrument(skip(self, shipment), fields(items = shipment.items.len()))]
    pub async fn create(&self, shipment: &Shipment) -> BuzResult<Shipment> {
        let body = self.registry.serialize_value(shipment)?;
        let response = self
            .client
            .request("/shipments", HttpMethod::Post, Some(body))
            .await?;
        self.registry.deserialize_as(&response)
    }

    /// Retrieves a shipment by id.
    #[instrument(skip(self), fields(shipment_id = %id))]
    pub async fn get(&self, id: &str) -> BuzResult<Shipment> {
        let id = require_id(id, "Shipment ID")?;
        let response = self
            .client
            .request(&format!("/shipments/{}", id), HttpMethod::Get, None)
            .await?;
        self.registry.deserialize_as(&response)
    }
}
