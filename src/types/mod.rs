//! Resource model for the Boekuwzending API.
//!
//! Resources are plain data holders. Every resource type is listed once in
//! the `resources!` invocation below, which derives the closed type tag
//! [`ResourceKind`] and the owned/borrowed unions [`Resource`] and
//! [`ResourceRef`] that the serializer registry dispatches on.

pub mod contact;
pub mod label;
pub mod order;
pub mod shipment;
pub mod tracking;

pub use contact::{Address, Contact};
pub use label::Label;
pub use order::{Order, OrderLine};
pub use shipment::{DeliveryInstruction, DispatchInstruction, Item, Shipment};
pub use tracking::{Tracking, TrackingLine};

use std::fmt;

/// A resource type with a statically known type tag.
pub trait TypedResource: Sized + Into<Resource> {
    /// Type tag of this resource.
    const KIND: ResourceKind;

    /// Extracts this type from an owned resource, returning the resource
    /// unchanged if it holds another type.
    fn from_resource(resource: Resource) -> Result<Self, Resource>;
}

macro_rules! resources {
    ($($name:ident),+ $(,)?) => {
        /// Type tag identifying a resource type.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ResourceKind {
            $(
                #[doc = concat!("`", stringify!($name), "` resource.")]
                $name,
            )+
        }

        impl ResourceKind {
            /// All resource kinds.
            pub const ALL: &'static [ResourceKind] = &[$(ResourceKind::$name),+];

            /// Returns the type name.
            pub fn name(self) -> &'static str {
                match self {
                    $(ResourceKind::$name => stringify!($name),)+
                }
            }
        }

        /// An owned resource of any type.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Resource {
            $(
                #[doc = concat!("`", stringify!($name), "` resource.")]
                $name($name),
            )+
        }

        impl Resource {
            /// Returns the type tag of the held resource.
            pub fn kind(&self) -> ResourceKind {
                match self {
                    $(Resource::$name(_) => ResourceKind::$name,)+
                }
            }

            /// Borrows the held resource.
            pub fn as_resource_ref(&self) -> ResourceRef<'_> {
                match self {
                    $(Resource::$name(inner) => ResourceRef::$name(inner),)+
                }
            }
        }

        /// A borrowed resource of any type.
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub enum ResourceRef<'a> {
            $(
                #[doc = concat!("`", stringify!($name), "` resource.")]
                $name(&'a $name),
            )+
        }

        impl ResourceRef<'_> {
            /// Returns the type tag of the borrowed resource.
            pub fn kind(&self) -> ResourceKind {
                match self {
                    $(ResourceRef::$name(_) => ResourceKind::$name,)+
                }
            }
        }

        $(
            impl From<$name> for Resource {
                fn from(value: $name) -> Self {
                    Resource::$name(value)
                }
            }

            impl<'a> From<&'a $name> for ResourceRef<'a> {
                fn from(value: &'a $name) -> Self {
                    ResourceRef::$name(value)
                }
            }

            impl TypedResource for $name {
                const KIND: ResourceKind = ResourceKind::$name;

                fn from_resource(resource: Resource) -> Result<Self, Resource> {
                    match resource {
                        Resource::$name(inner) => Ok(inner),
                        other => Err(other),
                    }
                }
            }
        )+
    };
}

resources! {
    Order,
    OrderLine,
    Contact,
    Address,
    Shipment,
    DispatchInstruction,
    DeliveryInstruction,
    Item,
    Tracking,
    TrackingLine,
    Label,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl<'a> From<&'a Resource> for ResourceRef<'a> {
    fn from(value: &'a Resource) -> Self {
        value.as_resource_ref()
    }
}
