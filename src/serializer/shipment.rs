//! Shipment, instruction and item serializers.

use serde_json::{json, Map, Value};

use super::fields::{self, FieldReader};
use super::{unsupported, ResourceSerializer, SerializerRegistry};
use crate::errors::BuzResult;
use crate::types::{
    Address, Contact, DeliveryInstruction, DispatchInstruction, Item, Resource, ResourceKind,
    ResourceRef, Shipment,
};

/// Serializer for [`Shipment`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ShipmentSerializer;

impl ShipmentSerializer {
    fn party(
        contact: Option<&Contact>,
        address: Option<&Address>,
        registry: &SerializerRegistry,
    ) -> BuzResult<Value> {
        let mut party = Map::new();
        party.insert(
            "contact".into(),
            contact.map_or(Ok(Value::Null), |c| registry.serialize_value(c))?,
        );
        party.insert(
            "address".into(),
            address.map_or(Ok(Value::Null), |a| registry.serialize_value(a))?,
        );
        Ok(Value::Object(party))
    }
}

impl ResourceSerializer for ShipmentSerializer {
    fn serialize(
        &self,
        resource: ResourceRef<'_>,
        registry: &SerializerRegistry,
    ) -> BuzResult<Map<String, Value>> {
        let ResourceRef::Shipment(shipment) = resource else {
            return Err(unsupported("ShipmentSerializer", resource.kind()));
        };

        let ship_from = if shipment.ship_from_contact.is_none() && shipment.ship_from_address.is_none() {
            Value::Null
        } else {
            Self::party(
                shipment.ship_from_contact.as_ref(),
                shipment.ship_from_address.as_ref(),
                registry,
            )?
        };
        let ship_to = Self::party(
            Some(&shipment.ship_to_contact),
            Some(&shipment.ship_to_address),
            registry,
        )?;

        let mut map = Map::new();
        map.insert("id".into(), fields::opt_string(shipment.id.as_ref()));
        map.insert("reference".into(), fields::opt_string(shipment.reference.as_ref()));
        map.insert("shipFrom".into(), ship_from);
        map.insert("shipTo".into(), ship_to);
        map.insert(
            "dispatch".into(),
            shipment
                .dispatch
                .as_ref()
                .map_or(Ok(Value::Null), |d| registry.serialize_value(d))?,
        );
        map.insert(
            "delivery".into(),
            shipment
                .delivery
                .as_ref()
                .map_or(Ok(Value::Null), |d| registry.serialize_value(d))?,
        );
        map.insert("items".into(), registry.serialize_list(&shipment.items)?);
        Ok(map)
    }

    fn deserialize(
        &self,
        data: &Map<String, Value>,
        kind: ResourceKind,
        registry: &SerializerRegistry,
    ) -> BuzResult<Resource> {
        if kind != ResourceKind::Shipment {
            return Err(unsupported("ShipmentSerializer", kind));
        }

        let fields = FieldReader::new(kind, data);

        let (ship_from_contact, ship_from_address) = match fields.opt_object("shipFrom")? {
            Some(ship_from) => {
                let ship_from = FieldReader::new(kind, ship_from);
                (
                    ship_from
                        .opt_object("contact")?
                        .map(|c| registry.deserialize_map_as::<Contact>(c))
                        .transpose()?,
                    ship_from
                        .opt_object("address")?
                        .map(|a| registry.deserialize_map_as::<Address>(a))
                        .transpose()?,
                )
            }
            None => (None, None),
        };

        let ship_to = FieldReader::new(kind, fields.object("shipTo")?);

        Ok(Resource::Shipment(Shipment {
            id: fields.opt_string("id")?,
            reference: fields.opt_string("reference")?,
            ship_from_contact,
            ship_from_address,
            ship_to_contact: registry.deserialize_map_as::<Contact>(ship_to.object("contact")?)?,
            ship_to_address: registry.deserialize_map_as::<Address>(ship_to.object("address")?)?,
            dispatch: fields
                .opt_object("dispatch")?
                .map(|d| registry.deserialize_map_as::<DispatchInstruction>(d))
                .transpose()?,
            delivery: fields
                .opt_object("delivery")?
                .map(|d| registry.deserialize_map_as::<DeliveryInstruction>(d))
                .transpose()?,
            items: registry.deserialize_list::<Item>(fields.array("items")?)?,
        }))
    }
}

/// Serializer for [`DispatchInstruction`] and [`DeliveryInstruction`].
///
/// Both instructions share one wire shape; the requested kind decides which
/// type is produced.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstructionSerializer;

impl ResourceSerializer for InstructionSerializer {
    fn serialize(
        &self,
        resource: ResourceRef<'_>,
        _registry: &SerializerRegistry,
    ) -> BuzResult<Map<String, Value>> {
        let (date, time_from, time_to) = match resource {
            ResourceRef::DispatchInstruction(i) => (i.date, i.time_from, i.time_to),
            ResourceRef::DeliveryInstruction(i) => (i.date, i.time_from, i.time_to),
            other => return Err(unsupported("InstructionSerializer", other.kind())),
        };

        let mut map = Map::new();
        map.insert("date".into(), fields::date(date));
        map.insert("timeFrom".into(), fields::opt_time(time_from));
        map.insert("timeTo".into(), fields::opt_time(time_to));
        Ok(map)
    }

    fn deserialize(
        &self,
        data: &Map<String, Value>,
        kind: ResourceKind,
        _registry: &SerializerRegistry,
    ) -> BuzResult<Resource> {
        let fields = FieldReader::new(kind, data);

        match kind {
            ResourceKind::DispatchInstruction => Ok(Resource::DispatchInstruction(DispatchInstruction {
                date: fields.date("date")?,
                time_from: fields.opt_time("timeFrom")?,
                time_to: fields.opt_time("timeTo")?,
            })),
            ResourceKind::DeliveryInstruction => Ok(Resource::DeliveryInstruction(DeliveryInstruction {
                date: fields.date("date")?,
                time_from: fields.opt_time("timeFrom")?,
                time_to: fields.opt_time("timeTo")?,
            })),
            other => Err(unsupported("InstructionSerializer", other)),
        }
    }
}

/// Serializer for [`Item`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemSerializer;

impl ResourceSerializer for ItemSerializer {
    fn serialize(
        &self,
        resource: ResourceRef<'_>,
        _registry: &SerializerRegistry,
    ) -> BuzResult<Map<String, Value>> {
        let ResourceRef::Item(item) = resource else {
            return Err(unsupported("ItemSerializer", resource.kind()));
        };

        let mut map = Map::new();
        map.insert("description".into(), json!(item.description));
        map.insert("quantity".into(), json!(item.quantity));
        map.insert("weight".into(), json!(item.weight));
        map.insert("length".into(), json!(item.length));
        map.insert("width".into(), json!(item.width));
        map.insert("height".into(), json!(item.height));
        Ok(map)
    }

    fn deserialize(
        &self,
        data: &Map<String, Value>,
        kind: ResourceKind,
        _registry: &SerializerRegistry,
    ) -> BuzResult<Resource> {
        if kind != ResourceKind::Item {
            return Err(unsupported("ItemSerializer", kind));
        }

        let fields = FieldReader::new(kind, data);
        Ok(Resource::Item(Item {
            description: fields.string("description")?,
            quantity: fields.u32("quantity")?,
            weight: fields.u32("weight")?,
            length: fields.u32("length")?,
            width: fields.u32("width")?,
            height: fields.u32("height")?,
        }))
    }
}
