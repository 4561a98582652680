//! Orders service.

use std::sync::Arc;
use tracing::instrument;

use crate::client::AuthorizedClient;
use crate::errors::BuzResult;
use crate::serializer::SerializerRegistry;
use crate::transport::HttpMethod;
use crate::types::Order;

/// Service for importing orders.
#[derive(Debug, Clone)]
pub struct OrdersService {
    client: Arc<AuthorizedClient>,
    registry: Arc<SerializerRegistry>,
}

impl OrdersService {
    /// Creates a new orders service.
    pub fn new(client: Arc<AuthorizedClient>, registry: Arc<SerializerRegistry>) -> Self {
        Self { client, registry }
    }

    /// Creates an order and returns it as stored by the API.
    #[instrument(skip(self, order), fields(external_id = %order.external_id))]
    pub async fn create(&self, order: &Order) -> BuzResult<Order> {
        let body = self.registry.serialize_value(order)?;
        let response = self
            .client
            .request("/orders", HttpMethod::Post, Some(body))
            .await?;
        self.registry.deserialize_as(&response)
    }
}
