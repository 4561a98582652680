//! Contact and address types.

/// A person or company at an address.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Contact {
    /// Company name.
    pub company: Option<String>,
    /// Contact name.
    pub name: String,
    /// Email address.
    pub email: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
}

/// A postal address.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address {
    /// Street name.
    pub street: String,
    /// House number.
    pub number: String,
    /// House number addition (e.g. "A", "bis").
    pub number_addition: Option<String>,
    /// Postal code.
    pub postcode: String,
    /// City.
    pub city: String,
    /// ISO 3166-1 alpha-2 country code.
    pub country_code: String,
    /// Whether this is a private (residential) address.
    pub private_address: bool,
}
