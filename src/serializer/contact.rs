//! Contact and address serializers.

use serde_json::{json, Map, Value};

use super::fields::{self, FieldReader};
use super::{unsupported, ResourceSerializer, SerializerRegistry};
use crate::errors::BuzResult;
use crate::types::{Address, Contact, Resource, ResourceKind, ResourceRef};

/// Serializer for [`Contact`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactSerializer;

impl ResourceSerializer for ContactSerializer {
    fn serialize(
        &self,
        resource: ResourceRef<'_>,
        _registry: &SerializerRegistry,
    ) -> BuzResult<Map<String, Value>> {
        let ResourceRef::Contact(contact) = resource else {
            return Err(unsupported("ContactSerializer", resource.kind()));
        };

        let mut map = Map::new();
        map.insert("company".into(), fields::opt_string(contact.company.as_ref()));
        map.insert("name".into(), json!(contact.name));
        map.insert("email".into(), fields::opt_string(contact.email.as_ref()));
        map.insert("phone".into(), fields::opt_string(contact.phone.as_ref()));
        Ok(map)
    }

    fn deserialize(
        &self,
        data: &Map<String, Value>,
        kind: ResourceKind,
        _registry: &SerializerRegistry,
    ) -> BuzResult<Resource> {
        if kind != ResourceKind::Contact {
            return Err(unsupported("ContactSerializer", kind));
        }

        let fields = FieldReader::new(kind, data);
        Ok(Resource::Contact(Contact {
            company: fields.opt_string("company")?,
            name: fields.string("name")?,
            email: fields.opt_string("email")?,
            phone: fields.opt_string("phone")?,
        }))
    }
}

/// Serializer for [`Address`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressSerializer;

impl ResourceSerializer for AddressSerializer {
    fn serialize(
        &self,
        resource: ResourceRef<'_>,
        _registry: &SerializerRegistry,
    ) -> BuzResult<Map<String, Value>> {
        let ResourceRef::Address(address) = resource else {
            return Err(unsupported("AddressSerializer", resource.kind()));
        };

        let mut map = Map::new();
        map.insert("street".into(), json!(address.street));
        map.insert("number".into(), json!(address.number));
        map.insert(
            "numberAddition".into(),
            fields::opt_string(address.number_addition.as_ref()),
        );
        map.insert("postcode".into(), json!(address.postcode));
        map.insert("city".into(), json!(address.city));
        map.insert("countryCode".into(), json!(address.country_code));
        map.insert("privateAddress".into(), json!(address.private_address));
        Ok(map)
    }

    fn deserialize(
        &self,
        data: &Map<String, Value>,
        kind: ResourceKind,
        _registry: &SerializerRegistry,
    ) -> BuzResult<Resource> {
        if kind != ResourceKind::Address {
            return Err(unsupported("AddressSerializer", kind));
        }

        let fields = FieldReader::new(kind, data);
        Ok(Resource::Address(Address {
            street: fields.string("street")?,
            number: fields.string("number")?,
            number_addition: fields.opt_string("numberAddition")?,
            postcode: fields.string("postcode")?,
            city: fields.string("city")?,
            country_code: fields.string("countryCode")?,
            private_address: fields.bool("privateAddress")?,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::BuzError;
    use crate::mocks::fixtures;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_contact_wire_shape() {
        let registry = SerializerRegistry::new();
        let map = registry.serialize(&fixtures::contact()).unwrap();

        assert_eq!(
            Value::Object(map),
            json!({
                "company": "Boekuwzending B.V.",
                "name": "Jan Jansen",
                "email": "jan@example.com",
                "phone": null
            })
        );
    }

    #[test]
    fn test_address_wire_shape() {
        let registry = SerializerRegistry::new();
        let map = registry.serialize(&fixtures::address()).unwrap();

        assert_eq!(
            Value::Object(map),
            json!({
                "street": "Stationsplein",
                "number": "1",
                "numberAddition": "A",
                "postcode": "1012AB",
                "city": "Amsterdam",
                "countryCode": "NL",
                "privateAddress": true
            })
        );
    }

    #[test]
    fn test_address_missing_required_field() {
        let registry = SerializerRegistry::new();
        let result = registry.deserialize_as::<Address>(&json!({
            "street": "Stationsplein",
            "number": "1",
            "city": "Amsterdam",
            "countryCode": "NL"
        }));

        match result {
            Err(BuzError::InvalidData { type_name, message }) => {
                assert_eq!(type_name, "Address");
                assert!(message.contains("postcode"));
            }
            other => panic!("expected InvalidData, got {:?}", other),
        }
    }
}
