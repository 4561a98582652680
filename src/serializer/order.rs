//! Order serializers.
//!
//! The order holds its recipient as two flat fields; on the wire they are
//! nested under `shipTo`.

use serde_json::{json, Map, Value};

use super::fields::{self, FieldReader};
use super::{unsupported, ResourceSerializer, SerializerRegistry};
use crate::errors::BuzResult;
use crate::types::{Address, Contact, Order, OrderLine, Resource, ResourceKind, ResourceRef};

/// Serializer for [`Order`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderSerializer;

impl ResourceSerializer for OrderSerializer {
    fn serialize(
        &self,
        resource: ResourceRef<'_>,
        registry: &SerializerRegistry,
    ) -> BuzResult<Map<String, Value>> {
        let ResourceRef::Order(order) = resource else {
            return Err(unsupported("OrderSerializer", resource.kind()));
        };

        let mut ship_to = Map::new();
        ship_to.insert("contact".into(), registry.serialize_value(&order.ship_to_contact)?);
        ship_to.insert("address".into(), registry.serialize_value(&order.ship_to_address)?);

        let mut map = Map::new();
        map.insert("externalId".into(), json!(order.external_id));
        map.insert("reference".into(), fields::opt_string(order.reference.as_ref()));
        map.insert("createdAtSource".into(), fields::datetime(&order.created_at_source));
        map.insert("orderLines".into(), registry.serialize_list(&order.order_lines)?);
        map.insert("shipTo".into(), Value::Object(ship_to));
        Ok(map)
    }

    fn deserialize(
        &self,
        data: &Map<String, Value>,
        kind: ResourceKind,
        registry: &SerializerRegistry,
    ) -> BuzResult<Resource> {
        if kind != ResourceKind::Order {
            return Err(unsupported("OrderSerializer", kind));
        }

        let fields = FieldReader::new(kind, data);
        let ship_to = fields.object("shipTo")?;
        let ship_to_fields = FieldReader::new(kind, ship_to);

        Ok(Resource::Order(Order {
            external_id: fields.string("externalId")?,
            reference: fields.opt_string("reference")?,
            created_at_source: fields.datetime("createdAtSource")?,
            order_lines: registry.deserialize_list::<OrderLine>(fields.array("orderLines")?)?,
            ship_to_contact: registry.deserialize_map_as::<Contact>(ship_to_fields.object("contact")?)?,
            ship_to_address: registry.deserialize_map_as::<Address>(ship_to_fields.object("address")?)?,
        }))
    }
}

/// Serializer for [`OrderLine`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderLineSerializer;

impl ResourceSerializer for OrderLineSerializer {
    fn serialize(
        &self,
        resource: ResourceRef<'_>,
        _registry: &SerializerRegistry,
    ) -> BuzResult<Map<String, Value>> {
        let ResourceRef::OrderLine(line) = resource else {
            return Err(unsupported("OrderLineSerializer", resource.kind()));
        };

        let mut map = Map::new();
        map.insert("externalId".into(), fields::opt_string(line.external_id.as_ref()));
        map.insert("description".into(), json!(line.description));
        map.insert("quantity".into(), json!(line.quantity));
        map.insert("value".into(), fields::opt_f64(line.value));
        Ok(map)
    }

    fn deserialize(
        &self,
        data: &Map<String, Value>,
        kind: ResourceKind,
        _registry: &SerializerRegistry,
    ) -> BuzResult<Resource> {
        if kind != ResourceKind::OrderLine {
            return Err(unsupported("OrderLineSerializer", kind));
        }

        let fields = FieldReader::new(kind, data);
        Ok(Resource::OrderLine(OrderLine {
            external_id: fields.opt_string("externalId")?,
            description: fields.string("description")?,
            quantity: fields.u32("quantity")?,
            value: fields.opt_f64("value")?,
        }))
    }
}
