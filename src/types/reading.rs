use crate::types::station::{LatLon, Station};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

/// Display form for minimum times: calendar date plus 12-hour clock.
pub const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %I:%M %p";

/// Whether a predicted extreme is a high or a low tide.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TideKind {
    High,
    Low,
}

impl TideKind {
    /// Maps the upstream `type` code (`"H"`, `"L"`, also `"HH"`/`"LL"`) to a kind.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "H" | "HH" => Some(TideKind::High),
            "L" | "LL" => Some(TideKind::Low),
            _ => None,
        }
    }
}

impl Display for TideKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TideKind::High => write!(f, "high"),
            TideKind::Low => write!(f, "low"),
        }
    }
}

/// One predicted water level for a station.
///
/// `timestamp` is station-local time exactly as reported upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub station_id: String,
    pub timestamp: NaiveDateTime,
    pub value: f64,
    pub kind: Option<TideKind>,
}

impl Reading {
    pub fn new(station_id: impl Into<String>, timestamp: NaiveDateTime, value: f64) -> Self {
        Self {
            station_id: station_id.into(),
            timestamp,
            value,
            kind: None,
        }
    }

    pub fn with_kind(mut self, kind: Option<TideKind>) -> Self {
        self.kind = kind;
        self
    }
}

/// The lowest reading of one station within the requested window, together with
/// what the presentation layer needs to show it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationMinimum {
    pub station_id: String,
    pub station_name: String,
    pub location: LatLon,
    pub reading: Reading,
    /// `reading.timestamp` rendered as [`DISPLAY_TIME_FORMAT`], e.g. `2024-01-06 02:00 PM`.
    pub display_time: String,
}

impl StationMinimum {
    pub fn new(station_id: &str, station_name: &str, location: LatLon, reading: Reading) -> Self {
        let display_time = reading.timestamp.format(DISPLAY_TIME_FORMAT).to_string();
        Self {
            station_id: station_id.to_string(),
            station_name: station_name.to_string(),
            location,
            reading,
            display_time,
        }
    }

    /// Builds the minimum for a resolved station. Returns `None` when the station has no location.
    pub fn for_station(station: &Station, reading: Reading) -> Option<Self> {
        let location = station.location?;
        Some(Self::new(&station.id, &station.name, location, reading))
    }

    pub fn value(&self) -> f64 {
        self.reading.value
    }
}
