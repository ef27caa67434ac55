//! In-memory [`TideSource`] used by the unit tests.

use crate::tide_data::source::TideSource;
use crate::types::date_window::StartEndDate;
use crate::types::reading::Reading;
use crate::types::station::{LatLon, Station};
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// 2024-01-`day` `hour`:`minute`.
pub(crate) fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

pub(crate) fn window() -> StartEndDate {
    StartEndDate::new(
        NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
    )
}

struct MockStation {
    resolved: bool,
    readings: Vec<Reading>,
}

#[derive(Default)]
pub(crate) struct MockTideSource {
    stations: HashMap<String, MockStation>,
    delays: HashMap<String, Duration>,
    panics: HashSet<String>,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

struct InFlight<'a>(&'a AtomicUsize);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl MockTideSource {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// A station named "`id` Harbor" with readings given as `(day, hour, value)`.
    pub(crate) fn with_station(mut self, id: &str, readings: &[(u32, u32, f64)]) -> Self {
        self.stations.insert(id.to_string(), mock_station(id, true, readings));
        self
    }

    /// A station whose metadata lookup fails but whose series would succeed.
    pub(crate) fn with_unresolved_station(
        mut self,
        id: &str,
        readings: &[(u32, u32, f64)],
    ) -> Self {
        self.stations.insert(id.to_string(), mock_station(id, false, readings));
        self
    }

    pub(crate) fn with_delay(mut self, id: &str, delay: Duration) -> Self {
        self.delays.insert(id.to_string(), delay);
        self
    }

    pub(crate) fn with_panic(mut self, id: &str) -> Self {
        self.panics.insert(id.to_string());
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

fn mock_station(id: &str, resolved: bool, readings: &[(u32, u32, f64)]) -> MockStation {
    MockStation {
        resolved,
        readings: readings
            .iter()
            .map(|&(day, hour, value)| Reading::new(id, at(day, hour, 0), value))
            .collect(),
    }
}

impl TideSource for MockTideSource {
    async fn fetch_metadata(&self, station_id: &str) -> Station {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.panics.contains(station_id) {
            panic!("metadata lookup exploded for {station_id}");
        }

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        let _guard = InFlight(&self.in_flight);
        if let Some(delay) = self.delays.get(station_id) {
            tokio::time::sleep(*delay).await;
        }

        match self.stations.get(station_id) {
            Some(station) if station.resolved => {
                Station::new(station_id, format!("{station_id} Harbor"), LatLon(40.0, -74.0))
            }
            _ => Station::unresolved(station_id),
        }
    }

    async fn fetch_series(&self, station_id: &str, _window: StartEndDate) -> Vec<Reading> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.stations
            .get(station_id)
            .map(|station| station.readings.clone())
            .unwrap_or_default()
    }
}
