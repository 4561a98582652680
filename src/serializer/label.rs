//! Label serializer.

use serde_json::{json, Map, Value};

use super::fields::{self, FieldReader};
use super::{unsupported, ResourceSerializer, SerializerRegistry};
use crate::errors::BuzResult;
use crate::types::{Label, Resource, ResourceKind, ResourceRef};

/// Serializer for [`Label`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LabelSerializer;

impl ResourceSerializer for LabelSerializer {
    fn serialize(
        &self,
        resource: ResourceRef<'_>,
        _registry: &SerializerRegistry,
    ) -> BuzResult<Map<String, Value>> {
        let ResourceRef::Label(label) = resource else {
            return Err(unsupported("LabelSerializer", resource.kind()));
        };

        let mut map = Map::new();
        map.insert("id".into(), json!(label.id));
        map.insert("shipmentId".into(), fields::opt_string(label.shipment_id.as_ref()));
        map.insert("trackingNumber".into(), fields::opt_string(label.tracking_number.as_ref()));
        map.insert("format".into(), json!(label.format));
        map.insert("content".into(), json!(label.content));
        Ok(map)
    }

    fn deserialize(
        &self,
        data: &Map<String, Value>,
        kind: ResourceKind,
        _registry: &SerializerRegistry,
    ) -> BuzResult<Resource> {
        if kind != ResourceKind::Label {
            return Err(unsupported("LabelSerializer", kind));
        }

        let fields = FieldReader::new(kind, data);
        Ok(Resource::Label(Label {
            id: fields.string("id")?,
            shipment_id: fields.opt_string("shipmentId")?,
            tracking_number: fields.opt_string("trackingNumber")?,
            format: fields.string("format")?,
            content: fields.string("content")?,
        }))
    }
}
