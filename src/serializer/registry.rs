//! Serializer registry.

use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::{
    AddressSerializer, ContactSerializer, InstructionSerializer, ItemSerializer, LabelSerializer,
    OrderLineSerializer, OrderSerializer, ResourceSerializer, ShipmentSerializer,
    TrackingLineSerializer, TrackingSerializer,
};
use crate::errors::{BuzError, BuzResult};
use crate::types::{Resource, ResourceKind, ResourceRef, TypedResource};

/// Type-directed dispatch table from resource kind to serializer.
///
/// The table is fixed once built. Lookups are exact: a kind without an entry
/// fails with [`BuzError::SerializerNotFound`] and nothing is produced.
///
/// # Example
///
/// ```rust
/// use boekuwzending_client::serializer::SerializerRegistry;
/// use boekuwzending_client::types::Contact;
///
/// let registry = SerializerRegistry::new();
/// let contact = Contact {
///     name: "Jan Jansen".to_string(),
///     ..Contact::default()
/// };
///
/// let map = registry.serialize(&contact).unwrap();
/// assert_eq!(map["name"], "Jan Jansen");
/// ```
pub struct SerializerRegistry {
    serializers: HashMap<ResourceKind, Arc<dyn ResourceSerializer>>,
}

impl SerializerRegistry {
    /// Creates a registry with a serializer for every resource kind.
    pub fn new() -> Self {
        let instructions: Arc<dyn ResourceSerializer> = Arc::new(InstructionSerializer);

        SerializerRegistryBuilder::new()
            .register(ResourceKind::Order, Arc::new(OrderSerializer))
            .register(ResourceKind::OrderLine, Arc::new(OrderLineSerializer))
            .register(ResourceKind::Contact, Arc::new(ContactSerializer))
            .register(ResourceKind::Address, Arc::new(AddressSerializer))
            .register(ResourceKind::Shipment, Arc::new(ShipmentSerializer))
            .register(ResourceKind::DispatchInstruction, Arc::clone(&instructions))
            .register(ResourceKind::DeliveryInstruction, instructions)
            .register(ResourceKind::Item, Arc::new(ItemSerializer))
            .register(ResourceKind::Tracking, Arc::new(TrackingSerializer))
            .register(ResourceKind::TrackingLine, Arc::new(TrackingLineSerializer))
            .register(ResourceKind::Label, Arc::new(LabelSerializer))
            .build()
    }

    /// Creates an empty registry builder.
    pub fn builder() -> SerializerRegistryBuilder {
        SerializerRegistryBuilder::new()
    }

    /// Returns true if a serializer is registered for the kind.
    pub fn contains(&self, kind: ResourceKind) -> bool {
        self.serializers.contains_key(&kind)
    }

    fn serializer(&self, kind: ResourceKind) -> BuzResult<&dyn ResourceSerializer> {
        self.serializers
            .get(&kind)
            .map(|serializer| &**serializer)
            .ok_or_else(|| BuzError::serializer_not_found(kind.name()))
    }

    /// Encodes a resource into its wire map.
    pub fn serialize<'a>(&self, resource: impl Into<ResourceRef<'a>>) -> BuzResult<Map<String, Value>> {
        let resource = resource.into();
        self.serializer(resource.kind())?.serialize(resource, self)
    }

    /// Encodes a resource into a JSON value.
    pub fn serialize_value<'a>(&self, resource: impl Into<ResourceRef<'a>>) -> BuzResult<Value> {
        self.serialize(resource).map(Value::Object)
    }

    /// Decodes a wire map into a resource of the requested kind.
    pub fn deserialize(&self, data: &Map<String, Value>, kind: ResourceKind) -> BuzResult<Resource> {
        let resource = self.serializer(kind)?.deserialize(data, kind, self)?;
        if resource.kind() != kind {
            return Err(BuzError::configuration(format!(
                "serializer registered for {} produced a {}",
                kind,
                resource.kind()
            )));
        }
        Ok(resource)
    }

    /// Decodes a JSON value, which must be an object, into a resource.
    pub fn deserialize_value(&self, data: &Value, kind: ResourceKind) -> BuzResult<Resource> {
        match data {
            Value::Object(map) => self.deserialize(map, kind),
            _ => Err(BuzError::invalid_data(kind.name(), "expected a JSON object")),
        }
    }

    /// Decodes a JSON value into a concrete resource type.
    pub fn deserialize_as<T: TypedResource>(&self, data: &Value) -> BuzResult<T> {
        match data {
            Value::Object(map) => self.deserialize_map_as(map),
            _ => Err(BuzError::invalid_data(T::KIND.name(), "expected a JSON object")),
        }
    }

    /// Decodes a wire map into a concrete resource type.
    pub fn deserialize_map_as<T: TypedResource>(&self, data: &Map<String, Value>) -> BuzResult<T> {
        let resource = self.deserialize(data, T::KIND)?;
        T::from_resource(resource).map_err(|other| {
            BuzError::configuration(format!("expected {} but decoded {}", T::KIND, other.kind()))
        })
    }

    /// Decodes every element of a JSON array into a concrete resource type.
    pub fn deserialize_list<T: TypedResource>(&self, data: &[Value]) -> BuzResult<Vec<T>> {
        data.iter().map(|item| self.deserialize_as(item)).collect()
    }

    /// Encodes every resource of a slice, preserving order.
    pub(crate) fn serialize_list<'a, T>(&self, items: &'a [T]) -> BuzResult<Value>
    where
        &'a T: Into<ResourceRef<'a>>,
    {
        items
            .iter()
            .map(|item| self.serialize_value(item))
            .collect::<BuzResult<Vec<_>>>()
            .map(Value::Array)
    }
}

impl Default for SerializerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SerializerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<_> = self.serializers.keys().map(|k| k.name()).collect();
        kinds.sort_unstable();
        f.debug_struct("SerializerRegistry")
            .field("kinds", &kinds)
            .finish()
    }
}

/// Builder for a custom [`SerializerRegistry`].
#[derive(Default)]
pub struct SerializerRegistryBuilder {
    serializers: HashMap<ResourceKind, Arc<dyn ResourceSerializer>>,
}

impl SerializerRegistryBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a serializer for a kind, replacing any earlier entry.
    pub fn register(mut self, kind: ResourceKind, serializer: Arc<dyn ResourceSerializer>) -> Self {
        self.serializers.insert(kind, serializer);
        self
    }

    /// Builds the registry.
    pub fn build(self) -> SerializerRegistry {
        SerializerRegistry {
            serializers: self.serializers,
        }
    }
}
