//! Shipment types.

use chrono::{NaiveDate, NaiveTime};

use super::{Address, Contact};

/// A shipment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Shipment {
    /// Shipment id, assigned by the API.
    pub id: Option<String>,
    /// Free-form reference.
    pub reference: Option<String>,
    /// Sender, when it differs from the account default.
    pub ship_from_contact: Option<Contact>,
    /// Pickup address, when it differs from the account default.
    pub ship_from_address: Option<Address>,
    /// Recipient.
    pub ship_to_contact: Contact,
    /// Delivery address.
    pub ship_to_address: Address,
    /// When and how the parcel is handed to the carrier.
    pub dispatch: Option<DispatchInstruction>,
    /// When and how the parcel is delivered.
    pub delivery: Option<DeliveryInstruction>,
    /// Items in the shipment, in order.
    pub items: Vec<Item>,
}

impl Shipment {
    /// Total weight of all items in grams.
    pub fn total_weight(&self) -> u32 {
        self.items.iter().map(|item| item.weight * item.quantity).sum()
    }
}

/// Pickup instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchInstruction {
    /// Pickup date.
    pub date: NaiveDate,
    /// Start of the pickup window.
    pub time_from: Option<NaiveTime>,
    /// End of the pickup window.
    pub time_to: Option<NaiveTime>,
}

/// Delivery instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryInstruction {
    /// Delivery date.
    pub date: NaiveDate,
    /// Start of the delivery window.
    pub time_from: Option<NaiveTime>,
    /// End of the delivery window.
    pub time_to: Option<NaiveTime>,
}

/// A packaged item.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Item {
    /// Content description.
    pub description: String,
    /// Number of identical packages.
    pub quantity: u32,
    /// Weight per package in grams.
    pub weight: u32,
    /// Length in centimeters.
    pub length: u32,
    /// Width in centimeters.
    pub width: u32,
    /// Height in centimeters.
    pub height: u32,
}
