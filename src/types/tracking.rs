//! Tracking types.

use chrono::{DateTime, FixedOffset};

/// Tracking status of a shipment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tracking {
    /// Carrier tracking number.
    pub tracking_number: String,
    /// Carrier name.
    pub carrier: Option<String>,
    /// Current status.
    pub status: String,
    /// Tracking events, oldest first.
    pub lines: Vec<TrackingLine>,
}

impl Tracking {
    /// Returns the most recent tracking event.
    pub fn latest(&self) -> Option<&TrackingLine> {
        self.lines.iter().max_by_key(|line| line.occurred_at)
    }
}

/// A single tracking event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingLine {
    /// Event code.
    pub code: String,
    /// Human readable description.
    pub description: String,
    /// When the event occurred.
    pub occurred_at: DateTime<FixedOffset>,
    /// Where the event occurred.
    pub location: Option<String>,
}
