//! Label types.

use base64::Engine;

use crate::errors::{BuzError, BuzResult};

/// A shipping label.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Label {
    /// Label id.
    pub id: String,
    /// Shipment the label belongs to.
    pub shipment_id: Option<String>,
    /// Carrier tracking number printed on the label.
    pub tracking_number: Option<String>,
    /// Document format, e.g. "pdf" or "zpl".
    pub format: String,
    /// Base64 encoded label document.
    pub content: String,
}

impl Label {
    /// Decodes the base64 label document.
    pub fn decode_content(&self) -> BuzResult<Vec<u8>> {
        base64::engine::general_purpose::STANDARD
            .decode(self.content.trim())
            .map_err(|e| BuzError::invalid_data("Label", format!("content is not base64: {}", e)))
    }
}
