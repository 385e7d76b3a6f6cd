//! Postal address and coordinates of a contact.

use serde::{Deserialize, Serialize};

/// Raw projected coordinates plus geographic latitude/longitude.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub latitude: f64,
    pub longitude: f64,
}

/// All components of a contact's address.
///
/// Every field is optional and no cross-field consistency is enforced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Address {
    /// Primary-store identifier of the address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// County or département
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,

    /// State or région
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Free-text complement (building, floor, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addition: Option<String>,

    /// Polling station code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polling_station: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}
