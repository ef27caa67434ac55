//! Station identity and location as resolved from the metadata endpoint.

use serde::{Deserialize, Serialize};

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
///
/// # Examples
///
/// ```
/// use low_tide::LatLon;
///
/// let the_battery = LatLon(40.7006, -74.0142);
/// assert_eq!(the_battery.0, 40.7006); // Latitude
/// assert_eq!(the_battery.1, -74.0142); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon(pub f64, pub f64);

/// A single tide station.
///
/// `location` is `None` when the metadata lookup failed. Such a station keeps a
/// placeholder name and is never ranked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// The upstream station identifier (e.g., "8518750").
    pub id: String,
    /// Display name, title-cased.
    pub name: String,
    /// Coordinate of the station, if metadata could be resolved.
    pub location: Option<LatLon>,
}

impl Station {
    pub fn new(id: impl Into<String>, name: impl Into<String>, location: LatLon) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location: Some(location),
        }
    }

    /// The placeholder used when metadata for `id` could not be fetched.
    pub fn unresolved(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: format!("Station {id}"),
            location: None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.location.is_some()
    }
}
