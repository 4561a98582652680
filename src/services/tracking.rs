//! Tracking service.

use std::sync::Arc;
use tracing::instrument;

use super::require_id;
use crate::client::AuthorizedClient;
use crate::errors::BuzResult;
use crate::serializer::SerializerRegistry;
use crate::transport::HttpMethod;
use crate::types::Tracking;

/// Service for shipment track & trace.
#[derive(Debug, Clone)]
pub struct TrackingService {
    client: Arc<AuthorizedClient>,
    registry: Arc<SerializerRegistry>,
}

impl TrackingService {
    /// Creates a new tracking service.
    pub fn new(client: Arc<AuthorizedClient>, registry: Arc<SerializerRegistry>) -> Self {
        Self { client, registry }
    }

    /// Retrieves the tracking history of a shipment.
    #[instrument(skip(self), fields(shipment_id = %shipment_id))]
    pub async fn get(&self, shipment_id: &str) -> BuzResult<Tracking> {
        let shipment_id = require_id(shipment_id, "Shipment ID")?;
        let response = self
            .client
            .request(
                &format!("/shipments/{}/tracking", shipment_id),
                HttpMethod::Get,
                None,
            )
            .await?;
        self.registry.deserialize_as(&response)
    }
}
