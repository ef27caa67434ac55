//! Runtime settings for [`LowTide`](crate::LowTide).

use bon::Builder;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_CATALOG_PATH: &str = "stations.json";
pub const DEFAULT_METADATA_BASE_URL: &str = "https://api.tidesandcurrents.noaa.gov/mdapi/prod/webapi";
pub const DEFAULT_SERIES_BASE_URL: &str = "https://api.tidesandcurrents.noaa.gov/api/prod";

/// Settings for the tide search.
///
/// Every field has a default, so `LowTideConfig::default()` talks to the public
/// NOAA CO-OPS APIs and reads regions from `./stations.json`.
///
/// # Examples
///
/// ```
/// use low_tide::LowTideConfig;
/// use std::time::Duration;
///
/// let config = LowTideConfig::builder()
///     .catalog_path("data/stations.json")
///     .max_concurrent_requests(4)
///     .request_timeout(Duration::from_secs(5))
///     .build();
///
/// assert_eq!(config.datum, "MLLW");
/// assert_eq!(config.max_concurrent_requests, 4);
/// ```
#[derive(Debug, Clone, Builder)]
pub struct LowTideConfig {
    /// JSON document mapping region names to station ids. Re-read on every search.
    #[builder(into, default = PathBuf::from(DEFAULT_CATALOG_PATH))]
    pub catalog_path: PathBuf,

    /// Base of the station metadata API; `/stations/{id}.json` is appended.
    #[builder(into, default = DEFAULT_METADATA_BASE_URL.to_string())]
    pub metadata_base_url: String,

    /// Base of the data API; `/datagetter` is appended.
    #[builder(into, default = DEFAULT_SERIES_BASE_URL.to_string())]
    pub series_base_url: String,

    /// Upper bound on stations fetched at the same time.
    #[builder(default = 8)]
    pub max_concurrent_requests: usize,

    /// Applied to every outbound request. A timed out station counts as having no data.
    #[builder(default = Duration::from_secs(10))]
    pub request_timeout: Duration,

    #[builder(into, default = "MLLW".to_string())]
    pub datum: String,

    /// `english` (feet) or `metric` (meters).
    #[builder(into, default = "english".to_string())]
    pub units: String,

    /// `lst_ldt` keeps timestamps in the station's local standard/daylight time.
    #[builder(into, default = "lst_ldt".to_string())]
    pub time_zone: String,

    /// Identifies this client to the upstream API.
    #[builder(into, default = "low_tide_rs".to_string())]
    pub application: String,
}

impl Default for LowTideConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
