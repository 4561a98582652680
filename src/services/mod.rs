//! Endpoint services.
//!
//! Each service is a thin façade over
//! [`AuthorizedClient`](crate::client::AuthorizedClient): it serializes the
//! outgoing resource, performs the request and deserializes the response
//! through the shared [`SerializerRegistry`](crate::serializer::SerializerRegistry).

mod labels;
mod me;
mod orders;
mod shipments;
mod tracking;

pub use labels::LabelsService;
pub use me::MeService;
pub use orders::OrdersService;
pub use shipments::ShipmentsService;
pub use tracking::TrackingService;

use crate::errors::{BuzError, BuzResult};

/// Rejects an empty path identifier before any request is made.
pub(crate) fn require_id<'a>(id: &'a str, name: &str) -> BuzResult<&'a str> {
    if id.trim().is_empty() {
        return Err(BuzError::validation(format!("{} is required", name)));
    }
    Ok(id)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_id() {
        assert_eq!(require_id("abc", "Shipment ID").unwrap(), "abc");
        assert!(matches!(
            require_id("  ", "Shipment ID"),
            Err(BuzError::Validation { .. })
        ));
    }
}
