//! Fans a region's stations out over a bounded pool of tokio tasks and reduces
//! each station's predictions to its lowest reading.

use crate::tide_data::error::TideDataError;
use crate::tide_data::source::TideSource;
use crate::types::date_window::StartEndDate;
use crate::types::reading::{Reading, StationMinimum};
use log::{debug, info, warn};
use ordered_float::OrderedFloat;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

pub struct StationAggregator<S> {
    source: Arc<S>,
    max_concurrent: usize,
    request_timeout: Duration,
}

impl<S: TideSource> StationAggregator<S> {
    /// `max_concurrent` is clamped to at least one worker.
    pub fn new(source: Arc<S>, max_concurrent: usize, request_timeout: Duration) -> Self {
        Self {
            source,
            max_concurrent: max_concurrent.max(1),
            request_timeout,
        }
    }

    #[cfg(test)]
    pub(crate) fn source(&self) -> &S {
        &self.source
    }

    /// Returns the minimum reading of every station that produced usable data,
    /// in the order the stations were given.
    ///
    /// Waits for every station before returning. A failing, timed out or
    /// panicking station is logged and left out; it never affects the others.
    pub async fn collect_minimums(
        &self,
        station_ids: &[String],
        window: StartEndDate,
    ) -> Vec<StationMinimum> {
        let semaphore = Arc::new(Semaphore::new(self.max_concurrent));
        let mut units = JoinSet::new();

        for (index, station_id) in station_ids.iter().cloned().enumerate() {
            let source = Arc::clone(&self.source);
            let semaphore = Arc::clone(&semaphore);
            let request_timeout = self.request_timeout;
            units.spawn(async move {
                let Ok(_permit) = semaphore.acquire_owned().await else {
                    return (index, None);
                };
                let minimum =
                    station_minimum(source.as_ref(), &station_id, window, request_timeout).await;
                (index, minimum)
            });
        }

        let mut collected = Vec::with_capacity(station_ids.len());
        while let Some(joined) = units.join_next().await {
            match joined {
                Ok((index, Some(minimum))) => collected.push((index, minimum)),
                Ok((_, None)) => {}
                Err(e) => warn!("Station task ended abnormally: {}", e),
            }
        }

        // Completion order is arbitrary; restore catalog order for stable ranking.
        collected.sort_by_key(|(index, _)| *index);
        info!(
            "{} of {} stations returned predictions for {}",
            collected.len(),
            station_ids.len(),
            window
        );
        collected.into_iter().map(|(_, minimum)| minimum).collect()
    }
}

async fn station_minimum<S: TideSource>(
    source: &S,
    station_id: &str,
    window: StartEndDate,
    request_timeout: Duration,
) -> Option<StationMinimum> {
    let metadata = tokio::time::timeout(request_timeout, source.fetch_metadata(station_id));
    let Ok(station) = metadata.await else {
        log_timeout(station_id, request_timeout);
        return None;
    };
    if !station.is_resolved() {
        debug!("Skipping station {}: no metadata", station_id);
        return None;
    }

    let series = tokio::time::timeout(request_timeout, source.fetch_series(station_id, window));
    let Ok(readings) = series.await else {
        log_timeout(station_id, request_timeout);
        return None;
    };

    let Some(lowest) = lowest_reading(&readings) else {
        debug!("Skipping station {}: no predictions in {}", station_id, window);
        return None;
    };
    StationMinimum::for_station(&station, lowest.clone())
}

fn log_timeout(station_id: &str, after: Duration) {
    let timeout = TideDataError::Timeout {
        station: station_id.to_string(),
        after,
    };
    warn!("{}", timeout);
}

/// The reading with the smallest value; the earliest listed one on ties.
pub fn lowest_reading(readings: &[Reading]) -> Option<&Reading> {
    readings.iter().min_by_key(|r| OrderedFloat(r.value))
}
