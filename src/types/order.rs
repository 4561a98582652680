//! Order types.

use chrono::{DateTime, FixedOffset};

use super::{Address, Contact};

/// An order imported from an external shop system.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    /// Order id in the source system.
    pub external_id: String,
    /// Free-form reference.
    pub reference: Option<String>,
    /// When the order was created in the source system.
    pub created_at_source: DateTime<FixedOffset>,
    /// Order lines, in source order.
    pub order_lines: Vec<OrderLine>,
    /// Recipient.
    pub ship_to_contact: Contact,
    /// Delivery address.
    pub ship_to_address: Address,
}

/// A single order line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderLine {
    /// Line id in the source system.
    pub external_id: Option<String>,
    /// Product description.
    pub description: String,
    /// Ordered quantity.
    pub quantity: u32,
    /// Line value in euros.
    pub value: Option<f64>,
}

impl Order {
    /// Total quantity across all order lines.
    pub fn total_quantity(&self) -> u32 {
        self.order_lines.iter().map(|line| line.quantity).sum()
    }
}
