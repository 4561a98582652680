//! Labels service.

use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

use super::require_id;
use crate::client::AuthorizedClient;
use crate::errors::{BuzError, BuzResult};
use crate::serializer::SerializerRegistry;
use crate::transport::HttpMethod;
use crate::types::{Label, ResourceKind};

/// Service for shipping labels.
#[derive(Debug, Clone)]
pub struct LabelsService {
    client: Arc<AuthorizedClient>,
    registry: Arc<SerializerRegistry>,
}

impl LabelsService {
    /// Creates a new labels service.
    pub fn new(client: Arc<AuthorizedClient>, registry: Arc<SerializerRegistry>) -> Self {
        Self { client, registry }
    }

    /// Retrieves a label by id.
    #[instrument(skip(self), fields(label_id = %label_id))]
    pub async fn get(&self, label_id: &str) -> BuzResult<Label> {
        let label_id = require_id(label_id, "Label ID")?;
        let response = self
            .client
            .request(&format!("/labels/{}", label_id), HttpMethod::Get, None)
            .await?;
        self.registry.deserialize_as(&response)
    }

    /// Retrieves all labels of a shipment.
    #[instrument(skip(self), fields(shipment_id = %shipment_id))]
    pub async fn for_shipment(&self, shipment_id: &str) -> BuzResult<Vec<Label>> {
        let shipment_id = require_id(shipment_id, "Shipment ID")?;
        let response = self
            .client
            .request(
                &format!("/shipments/{}/labels", shipment_id),
                HttpMethod::Get,
                None,
            )
            .await?;

        match response {
            Value::Array(items) => self.registry.deserialize_list(&items),
            _ => Err(BuzError::invalid_data(
                ResourceKind::Label.name(),
                "expected a JSON array of labels",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::fixtures;
    use crate::services::test_support;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;

    #[tokio::test]
    async fn test_get_label() {
        let (transport, client, registry) = test_support::parts();
        transport.queue_json(&registry.serialize_value(&fixtures::label()).unwrap());

        let label = LabelsService::new(client, registry)
            .get("lbl-42")
            .await
            .unwrap();

        assert_eq!(label, fixtures::label());
        assert_eq!(label.decode_content().unwrap(), b"%PDF-1.4");
        assert_eq!(transport.last_request().unwrap().path, "/labels/lbl-42");
    }

    #[tokio::test]
    async fn test_labels_for_shipment_keep_order() {
        let (transport, client, registry) = test_support::parts();
        let first = fixtures::label();
        let second = Label {
            id: "lbl-43".to_string(),
            ..fixtures::label()
        };
        transport.queue_json(&json!([
            registry.serialize_value(&first).unwrap(),
            registry.serialize_value(&second).unwrap()
        ]));

        let labels = LabelsService::new(client, registry)
            .for_shipment("123")
            .await
            .unwrap();

        assert_eq!(labels, vec![first, second]);
        assert_eq!(transport.last_request().unwrap().path, "/shipments/123/labels");
    }

    #[tokio::test]
    async fn test_labels_for_shipment_empty_body() {
        let (transport, client, registry) = test_support::parts();
        transport.queue_json(&json!({}));

        let result = LabelsService::new(client, registry).for_shipment("123").await;

        assert!(matches!(result, Err(BuzError::InvalidData { .. })));
    }

    #[test_case(""; "empty")]
    #[test_case("   "; "blank")]
    #[tokio::test]
    async fn test_empty_ids_are_rejected(id: &str) {
        let (transport, client, registry) = test_support::parts();
        let service = LabelsService::new(client, registry);

        assert!(matches!(service.get(id).await, Err(BuzError::Validation { .. })));
        assert!(matches!(
            service.for_shipment(id).await,
            Err(BuzError::Validation { .. })
        ));
        assert_eq!(transport.request_count(), 0);
    }
}
