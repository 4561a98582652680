//! Serialization between wire maps and resources.
//!
//! [`SerializerRegistry`] maps each [`ResourceKind`] to one
//! [`ResourceSerializer`]. Serializers receive the registry on every call so
//! that composite resources (orders, shipments, tracking) encode and decode
//! their nested resources through the same table.

mod contact;
mod fields;
mod label;
mod order;
mod registry;
mod shipment;
mod tracking;

pub use contact::{AddressSerializer, ContactSerializer};
pub use label::LabelSerializer;
pub use order::{OrderLineSerializer, OrderSerializer};
pub use registry::{SerializerRegistry, SerializerRegistryBuilder};
pub use shipment::{InstructionSerializer, ItemSerializer, ShipmentSerializer};
pub use tracking::{TrackingLineSerializer, TrackingSerializer};

use serde_json::{Map, Value};

use crate::errors::{BuzError, BuzResult};
use crate::types::{Resource, ResourceKind, ResourceRef};

/// Encode/decode strategy for one or more resource kinds.
pub trait ResourceSerializer: Send + Sync {
    /// Encodes a resource into its wire map.
    fn serialize(
        &self,
        resource: ResourceRef<'_>,
        registry: &SerializerRegistry,
    ) -> BuzResult<Map<String, Value>>;

    /// Decodes a wire map into a resource of the requested kind.
    fn deserialize(
        &self,
        data: &Map<String, Value>,
        kind: ResourceKind,
        registry: &SerializerRegistry,
    ) -> BuzResult<Resource>;
}

/// Error for a serializer registered under a kind it cannot handle.
pub(crate) fn unsupported(serializer: &str, kind: ResourceKind) -> BuzError {
    BuzError::configuration(format!("{} cannot handle {} resources", serializer, kind))
}
