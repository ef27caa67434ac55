mod catalog;
mod config;
mod error;
mod low_tide;
mod ranking;
mod tide_data;
mod types;
mod utils;
mod validation;

#[cfg(test)]
mod test_support;

pub use config::*;
pub use error::LowTideError;
pub use low_tide::LowTide;
pub use ranking::select_lowest;

pub use catalog::error::CatalogError;
pub use catalog::region_catalog::RegionCatalog;

pub use tide_data::aggregator::{lowest_reading, StationAggregator};
pub use tide_data::error::TideDataError;
pub use tide_data::noaa_client::NoaaClient;
pub use tide_data::source::TideSource;

pub use types::date_window::{AnyDate, StartEndDate};
pub use types::ranked::{LowTideOutcome, RankedResult, StatusClass, NO_DATA_MESSAGE};
pub use types::reading::{Reading, StationMinimum, TideKind, DISPLAY_TIME_FORMAT};
pub use types::station::{LatLon, Station};

pub use validation::{
    validate_query, validate_range_query, ValidatedQuery, ValidationError, MAX_RANGE_DAYS,
    MAX_RESULTS, MIN_RESULTS,
};
