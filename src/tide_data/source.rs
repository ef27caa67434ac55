use crate::types::date_window::StartEndDate;
use crate::types::reading::Reading;
use crate::types::station::Station;
use std::future::Future;

/// A remote source of station metadata and predicted tides.
///
/// Both calls are infallible by contract: a failed metadata lookup yields
/// [`Station::unresolved`], a failed series lookup yields an empty vector.
/// Implementations log the underlying cause.
pub trait TideSource: Send + Sync + 'static {
    fn fetch_metadata(&self, station_id: &str) -> impl Future<Output = Station> + Send;

    /// All predicted highs and lows for the station within `window`, in upstream order.
    fn fetch_series(
        &self,
        station_id: &str,
        window: StartEndDate,
    ) -> impl Future<Output = Vec<Reading>> + Send;
}
