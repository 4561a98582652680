//! Tracking serializers.

use serde_json::{json, Map, Value};

use super::fields::{self, FieldReader};
use super::{unsupported, ResourceSerializer, SerializerRegistry};
use crate::errors::BuzResult;
use crate::types::{Resource, ResourceKind, ResourceRef, Tracking, TrackingLine};

/// Serializer for [`Tracking`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TrackingSerializer;

impl ResourceSerializer for TrackingSerializer {
    fn serialize(
        &self,
        resource: ResourceRef<'_>,
        registry: &SerializerRegistry,
    ) -> BuzResult<Map<String, Value>> {
        let ResourceRef::Tracking(tracking) = resource else {
            return Err(unsupported("TrackingSerializer", resource.kind()));
        };

        let mut map = Map::new();
        map.insert("trackingNumber".into(), json!(tracking.tracking_number));
        map.insert("carrier".into(), fields::opt_string(tracking.carrier.as_ref()));
        map.insert("status".into(), json!(tracking.status));
        map.insert("lines".into(), registry.serialize_list(&tracking.lines)?);
        Ok(map)
    }

    fn deserialize(
        &self,
        data: &Map<String, Value>,
        kind: ResourceKind,
        registry: &SerializerRegistry,
    ) -> BuzResult<Resource> {
        if kind != ResourceKind::Tracking {
            return Err(unsupported("TrackingSerializer", kind));
        }

        let fields = FieldReader::new(kind, data);
        Ok(Resource::Tracking(Tracking {
            tracking_number: fields.string("trackingNumber")?,
            carrier: fields.opt_string("carrier")?,
            status: fields.string("status")?,
            lines: registry.deserialize_list::<TrackingLine>(fields.array("lines")?)?,
        }))
    }
}

/// Serializer for [`TrackingLine`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TrackingLineSerializer;

impl ResourceSerializer for TrackingLineSerializer {
    fn serialize(
        &self,
        resource: ResourceRef<'_>,
        _registry: &SerializerRegistry,
    ) -> BuzResult<Map<String, Value>> {
        let ResourceRef::TrackingLine(line) = resource else {
            return Err(unsupported("TrackingLineSerializer", resource.kind()));
        };

        let mut map = Map::new();
        map.insert("code".into(), json!(line.code));
        map.insert("description".into(), json!(line.description));
        map.insert("occurredAt".into(), fields::datetime(&line.occurred_at));
        map.insert("location".into(), fields::opt_string(line.location.as_ref()));
        Ok(map)
    }

    fn deserialize(
        &self,
        data: &Map<String, Value>,
        kind: ResourceKind,
        _registry: &SerializerRegistry,
    ) -> BuzResult<Resource> {
        if kind != ResourceKind::TrackingLine {
            return Err(unsupported("TrackingLineSerializer", kind));
        }

        let fields = FieldReader::new(kind, data);
        Ok(Resource::TrackingLine(TrackingLine {
            code: fields.string("code")?,
            description: fields.string("description")?,
            occurred_at: fields.datetime("occurredAt")?,
            location: fields.opt_string("location")?,
        }))
    }
}
