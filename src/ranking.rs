//! Picks the K lowest station minima.

use crate::types::ranked::RankedResult;
use crate::types::reading::StationMinimum;

/// Sorts `minimums` by ascending value and keeps the first `k`.
///
/// The sort is stable, so equal values keep the order they were handed in
/// (catalog order when called from the pipeline). Asking for more entries than
/// exist returns all of them.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use low_tide::{select_lowest, LatLon, Reading, StationMinimum};
///
/// let at = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap().and_hms_opt(3, 0, 0).unwrap();
/// let minimums = vec![
///     StationMinimum::new("A", "Alpha", LatLon(0.0, 0.0), Reading::new("A", at, 1.2)),
///     StationMinimum::new("C", "Charlie", LatLon(0.0, 0.0), Reading::new("C", at, 0.8)),
/// ];
///
/// let ranked = select_lowest(minimums, 5);
/// assert_eq!(ranked.len(), 2);
/// assert_eq!(ranked[0].station_id, "C");
/// ```
pub fn select_lowest(mut minimums: Vec<StationMinimum>, k: usize) -> RankedResult {
    minimums.sort_by(|a, b| a.value().total_cmp(&b.value()));
    minimums.truncate(k);
    RankedResult::from_sorted(minimums)
}
