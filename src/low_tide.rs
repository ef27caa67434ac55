//! This module provides the main entry point of the crate. [`LowTide`] loads the
//! region catalog, validates a search, fetches every station of the region and
//! ranks the per-station minima.

use crate::catalog::region_catalog::RegionCatalog;
use crate::config::LowTideConfig;
use crate::error::LowTideError;
use crate::ranking::select_lowest;
use crate::tide_data::aggregator::StationAggregator;
use crate::tide_data::noaa_client::NoaaClient;
use crate::tide_data::source::TideSource;
use crate::types::date_window::AnyDate;
use crate::types::ranked::LowTideOutcome;
use crate::validation::{validate_query, validate_range_query, ValidatedQuery};
use bon::bon;
use log::info;
use std::fmt::Display;
use std::sync::Arc;
use tokio_util::sync::{CancellationToken, DropGuard};

/// The main client for finding the lowest tides in a region.
///
/// The region catalog is read from disk at the start of every call, so edits to
/// the catalog file are picked up without rebuilding the client.
///
/// # Examples
///
/// ```no_run
/// # use low_tide::{LowTide, LowTideConfig, LowTideError, LowTideOutcome};
/// # #[tokio::main]
/// # async fn main() -> Result<(), LowTideError> {
/// let client = LowTide::with_config(LowTideConfig::builder().catalog_path("stations.json").build())?;
///
/// let outcome = client
///     .lowest_tides()
///     .region("east_coast")
///     .start_date("20240105")
///     .end_date("20240120")
///     .count(5)
///     .call()
///     .await?;
///
/// match outcome {
///     LowTideOutcome::Ranked(ranked) => {
///         for minimum in ranked.iter() {
///             println!("{} at {}: {} ft", minimum.station_name, minimum.display_time, minimum.value());
///         }
///     }
///     LowTideOutcome::NoData => println!("{}", low_tide::NO_DATA_MESSAGE),
/// }
/// # Ok(())
/// # }
/// ```
pub struct LowTide<S = NoaaClient> {
    config: LowTideConfig,
    aggregator: StationAggregator<S>,
}

impl LowTide<NoaaClient> {
    /// Creates a client talking to NOAA with the default configuration.
    pub fn new() -> Result<Self, LowTideError> {
        Self::with_config(LowTideConfig::default())
    }

    /// Creates a client talking to NOAA.
    ///
    /// # Errors
    ///
    /// Returns [`LowTideError::HttpClient`] if the HTTP client cannot be initialized.
    pub fn with_config(config: LowTideConfig) -> Result<Self, LowTideError> {
        let client = NoaaClient::new(&config).map_err(LowTideError::HttpClient)?;
        Ok(Self::with_source(config, client))
    }
}

impl<S: TideSource> LowTide<S> {
    /// Creates a client that fetches station data from `source`.
    pub fn with_source(config: LowTideConfig, source: S) -> Self {
        let aggregator = StationAggregator::new(
            Arc::new(source),
            config.max_concurrent_requests,
            config.request_timeout,
        );
        Self { config, aggregator }
    }

    pub fn config(&self) -> &LowTideConfig {
        &self.config
    }

    /// Names of all regions in the catalog, alphabetically.
    pub async fn regions(&self) -> Result<Vec<String>, LowTideError> {
        let catalog = RegionCatalog::load(&self.config.catalog_path).await?;
        Ok(catalog.region_names())
    }

    /// `done` is dropped, cancelling its token, once every station has answered.
    async fn rank(&self, query: ValidatedQuery, done: Option<DropGuard>) -> LowTideOutcome {
        info!(
            "Searching {} stations in {} for the {} lowest tides, {}",
            query.station_ids.len(),
            query.region,
            query.count,
            query.window
        );
        let minimums = self
            .aggregator
            .collect_minimums(&query.station_ids, query.window)
            .await;
        drop(done);

        LowTideOutcome::from_ranked(select_lowest(minimums, query.count))
    }
}

#[bon]
impl<S: TideSource> LowTide<S> {
    /// Finds the stations of `region` with the lowest predicted tides between
    /// `start_date` and `end_date` (inclusive).
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.region(&str)`: **Required.** A region name from the catalog.
    /// * `.start_date(impl AnyDate)` / `.end_date(impl AnyDate)`: **Required.** A `NaiveDate`, or
    ///   text as `YYYYMMDD`, `YYYY-MM-DD` or `MM/DD/YYYY`. The window may cover at most 31 days.
    /// * `.count(usize)`: **Required.** How many stations to return, 1 to 25.
    /// * `.done_signal(CancellationToken)`: Optional. Cancelled as soon as every station has
    ///   been fetched (or the request was rejected), e.g. to stop a progress spinner.
    ///
    /// # Returns
    ///
    /// [`LowTideOutcome::Ranked`] with up to `count` stations sorted by ascending tide, or
    /// [`LowTideOutcome::NoData`] if no station produced predictions.
    ///
    /// # Errors
    ///
    /// Returns [`LowTideError::Catalog`] if the catalog cannot be read, and
    /// [`LowTideError::Validation`] for an unknown region, unreadable or out of range dates,
    /// or a count outside 1..=25. No station is contacted in either case.
    #[builder]
    pub async fn lowest_tides<StartDate, EndDate>(
        &self,
        region: &str,
        start_date: StartDate,
        end_date: EndDate,
        count: usize,
        done_signal: Option<CancellationToken>,
    ) -> Result<LowTideOutcome, LowTideError>
    where
        StartDate: AnyDate + Display,
        EndDate: AnyDate + Display,
    {
        let done = done_signal.map(CancellationToken::drop_guard);
        let catalog = RegionCatalog::load(&self.config.catalog_path).await?;
        let query = validate_query(&catalog, region, start_date, end_date, count)?;
        Ok(self.rank(query, done).await)
    }

    /// Same as [`LowTide::lowest_tides`], with both dates given as one picker range
    /// such as `"01/05/2024 - 01/20/2024"`.
    #[builder]
    pub async fn lowest_tides_in_range(
        &self,
        region: &str,
        date_range: &str,
        count: usize,
        done_signal: Option<CancellationToken>,
    ) -> Result<LowTideOutcome, LowTideError> {
        let done = done_signal.map(CancellationToken::drop_guard);
        let catalog = RegionCatalog::load(&self.config.catalog_path).await?;
        let query = validate_range_query(&catalog, region, date_range, count)?;
        Ok(self.rank(query, done).await)
    }
}
