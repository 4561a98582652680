//! Integration tests for resource serialization through the public registry

use super::*;
use boekuwzending_client::serializer::ShipmentSerializer;
use boekuwzending_client::{BuzError, ResourceKind, SerializerRegistry, TypedResource};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use test_case::test_case;

fn round_trip<T>(value: &T) -> T
where
    T: TypedResource,
    for<'a> &'a T: Into<boekuwzending_client::ResourceRef<'a>>,
{
    let registry = SerializerRegistry::new();
    let wire = registry.serialize_value(value).unwrap();
    registry.deserialize_as(&wire).unwrap()
}

#[test]
fn test_composite_resources_survive_the_wire() {
    assert_eq!(round_trip(&order()), order());
    assert_eq!(round_trip(&shipment()), shipment());
    assert_eq!(round_trip(&tracking()), tracking());
}

#[test]
fn test_empty_collections_survive_the_wire() {
    let mut order = order();
    order.order_lines.clear();
    let mut shipment = shipment();
    shipment.items.clear();
    shipment.dispatch = None;
    shipment.delivery = None;

    assert_eq!(round_trip(&order), order);
    assert_eq!(round_trip(&shipment), shipment);
}

#[test]
fn test_every_kind_is_registered() {
    let registry = SerializerRegistry::new();

    for kind in ResourceKind::ALL {
        assert!(registry.contains(*kind), "{} is not registered", kind);
    }
}

#[test_case(json!({"description": "Doos", "quantity": 1, "weight": 100, "length": 1, "width": 1}), "height"; "missing height")]
#[test_case(json!({"description": "Doos", "quantity": -1, "weight": 100, "length": 1, "width": 1, "height": 1}), "quantity"; "negative quantity")]
#[test_case(json!({"description": ["Doos"], "quantity": 1, "weight": 100, "length": 1, "width": 1, "height": 1}), "description"; "description not a string")]
fn test_invalid_item_names_field(data: serde_json::Value, field: &str) {
    let registry = SerializerRegistry::new();

    match registry.deserialize_as::<Item>(&data) {
        Err(BuzError::InvalidData { type_name, message }) => {
            assert_eq!(type_name, "Item");
            assert!(message.contains(field), "{}", message);
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_address_from_lenient_wire() {
    let registry = SerializerRegistry::new();
    let address: Address = registry
        .deserialize_as(&json!({
            "street": "Dorpsstraat",
            "number": 12,
            "numberAddition": null,
            "postcode": "1234AB",
            "city": "Ergens",
            "countryCode": "NL"
        }))
        .unwrap();

    assert_eq!(address.number, "12");
    assert_eq!(address.number_addition, None);
    assert!(!address.private_address);
}

#[test]
fn test_custom_registry_misses_nested_kind() {
    let registry = SerializerRegistry::builder()
        .register(ResourceKind::Shipment, Arc::new(ShipmentSerializer))
        .build();

    match registry.serialize(&shipment()) {
        Err(BuzError::SerializerNotFound { type_name }) => assert_eq!(type_name, "Contact"),
        other => panic!("unexpected result: {:?}", other),
    }
}
