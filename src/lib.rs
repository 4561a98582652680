//! Boekuwzending API Client Library
//!
//! An async Rust client for the Boekuwzending shipping API. It handles the
//! OAuth2 client-credentials exchange, attaches the bearer token to every
//! request and converts between the API's JSON documents and typed resources.
//!
//! # Features
//!
//! - **Lazy authorization**: the token is fetched on the first request and cached
//! - **Typed resources**: orders, shipments, tracking and labels
//! - **Serializer registry**: one encode/decode strategy per resource kind,
//!   replaceable per client
//! - **Environments**: live and staging, or a custom base URL
//! - **Observability**: `tracing` spans and events, secrets never logged
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use boekuwzending_client::{BuzClient, Environment};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BuzClient::new(Environment::Staging)?;
//!     client.set_credentials("client-id", "client-secret")?;
//!
//!     let tracking = client.tracking().get("5f1c9a7e").await?;
//!     if let Some(line) = tracking.latest() {
//!         println!("{}: {}", line.occurred_at, line.description);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod observability;
pub mod serializer;
pub mod services;
pub mod transport;
pub mod types;

#[cfg(any(test, feature = "mocks"))]
pub mod mocks;

pub use client::{AuthorizedClient, BuzClient, BuzClientBuilder};
pub use config::{BuzConfig, BuzConfigBuilder, Credentials, Environment};
pub use errors::{BuzError, BuzResult};
pub use serializer::{ResourceSerializer, SerializerRegistry, SerializerRegistryBuilder};
pub use transport::{HttpMethod, HttpTransport};
pub use types::{
    Address, Contact, DeliveryInstruction, DispatchInstruction, Item, Label, Order, OrderLine,
    Resource, ResourceKind, ResourceRef, Shipment, Tracking, TrackingLine, TypedResource,
};
