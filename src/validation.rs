//! Input checks run before any station is contacted.

use crate::catalog::region_catalog::RegionCatalog;
use crate::types::date_window::{split_date_range, AnyDate, StartEndDate};
use crate::types::ranked::StatusClass;
use chrono::NaiveDate;
use std::fmt::Display;
use thiserror::Error;

/// Longest accepted window, counting both the first and the last day.
pub const MAX_RANGE_DAYS: i64 = 31;
pub const MIN_RESULTS: usize = 1;
pub const MAX_RESULTS: usize = 25;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid region '{region}'. Available regions: {}", .available.join(", "))]
    UnknownRegion {
        region: String,
        available: Vec<String>,
    },

    #[error("'{0}' is not a valid date; use YYYYMMDD, YYYY-MM-DD or MM/DD/YYYY")]
    InvalidDate(String),

    #[error("'{0}' is not a valid date range; use MM/DD/YYYY - MM/DD/YYYY")]
    InvalidDateRange(String),

    #[error("End date {end} is before start date {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },

    #[error("Date range covers {days} days; at most {max} days can be searched")]
    RangeTooLong { days: i64, max: i64 },

    #[error("Number of results must be between {min} and {max}, got {count}")]
    CountOutOfRange { count: usize, min: usize, max: usize },
}

impl ValidationError {
    pub fn status(&self) -> StatusClass {
        match self {
            ValidationError::UnknownRegion { .. } => StatusClass::NotFound,
            _ => StatusClass::BadInput,
        }
    }
}

/// A request that passed every check.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedQuery {
    pub region: String,
    pub station_ids: Vec<String>,
    pub window: StartEndDate,
    pub count: usize,
}

/// Checks region, dates and result count, in that order, stopping at the first failure.
///
/// Dates can be anything implementing [`AnyDate`]: a `NaiveDate`, or text in one of
/// the accepted formats.
pub fn validate_query(
    catalog: &RegionCatalog,
    region: &str,
    start_date: impl AnyDate + Display,
    end_date: impl AnyDate + Display,
    count: usize,
) -> Result<ValidatedQuery, ValidationError> {
    let station_ids = region_stations(catalog, region)?;
    let window = validate_window(start_date, end_date)?;
    let count = validate_count(count)?;
    Ok(ValidatedQuery {
        region: region.to_string(),
        station_ids,
        window,
        count,
    })
}

/// Same as [`validate_query`] for a picker range such as `"01/05/2024 - 01/20/2024"`.
pub fn validate_range_query(
    catalog: &RegionCatalog,
    region: &str,
    date_range: &str,
    count: usize,
) -> Result<ValidatedQuery, ValidationError> {
    region_stations(catalog, region)?;
    let (start_date, end_date) = split_date_range(date_range)
        .ok_or_else(|| ValidationError::InvalidDateRange(date_range.to_string()))?;
    validate_query(catalog, region, start_date, end_date, count)
}

fn region_stations(catalog: &RegionCatalog, region: &str) -> Result<Vec<String>, ValidationError> {
    catalog
        .stations(region)
        .map(<[String]>::to_vec)
        .ok_or_else(|| ValidationError::UnknownRegion {
            region: region.to_string(),
            available: catalog.region_names(),
        })
}

fn validate_window(
    start_date: impl AnyDate + Display,
    end_date: impl AnyDate + Display,
) -> Result<StartEndDate, ValidationError> {
    let start = parse_date(start_date)?;
    let end = parse_date(end_date)?;
    if end < start {
        return Err(ValidationError::EndBeforeStart { start, end });
    }

    let window = StartEndDate::new(start, end);
    let days = window.span_days();
    if days > MAX_RANGE_DAYS {
        return Err(ValidationError::RangeTooLong {
            days,
            max: MAX_RANGE_DAYS,
        });
    }
    Ok(window)
}

fn parse_date(input: impl AnyDate + Display) -> Result<NaiveDate, ValidationError> {
    let shown = input.to_string();
    input
        .get_date()
        .ok_or(ValidationError::InvalidDate(shown))
}

fn validate_count(count: usize) -> Result<usize, ValidationError> {
    if (MIN_RESULTS..=MAX_RESULTS).contains(&count) {
        Ok(count)
    } else {
        Err(ValidationError::CountOutOfRange {
            count,
            min: MIN_RESULTS,
            max: MAX_RESULTS,
        })
    }
}
