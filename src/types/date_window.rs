use chrono::NaiveDate;
use std::fmt;
use std::fmt::{Display, Formatter};

/// Date formats accepted from callers, tried in order.
const ACCEPTED_DATE_FORMATS: [&str; 3] = ["%Y%m%d", "%Y-%m-%d", "%m/%d/%Y"];

/// Separator used by the date-range picker: `"01/05/2024 - 01/20/2024"`.
const RANGE_SEPARATOR: &str = " - ";

/// An inclusive calendar-date window `start..=end`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct StartEndDate {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl StartEndDate {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Number of calendar days covered, counting both ends.
    ///
    /// A window whose end precedes its start covers zero days.
    pub fn span_days(&self) -> i64 {
        ((self.end - self.start).num_days() + 1).max(0)
    }

    /// `begin_date` query value in the 8-digit `YYYYMMDD` form.
    pub fn begin_param(&self) -> String {
        self.start.format("%Y%m%d").to_string()
    }

    /// `end_date` query value in the 8-digit `YYYYMMDD` form.
    pub fn end_param(&self) -> String {
        self.end.format("%Y%m%d").to_string()
    }
}

impl Display for StartEndDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Anything a caller may hand over as a calendar date.
pub trait AnyDate {
    fn get_date(self) -> Option<NaiveDate>;
}

impl AnyDate for NaiveDate {
    fn get_date(self) -> Option<NaiveDate> {
        Some(self)
    }
}

impl AnyDate for &str {
    fn get_date(self) -> Option<NaiveDate> {
        let trimmed = self.trim();
        ACCEPTED_DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
    }
}

impl AnyDate for String {
    fn get_date(self) -> Option<NaiveDate> {
        self.as_str().get_date()
    }
}

/// Splits a picker range such as `"01/05/2024 - 01/20/2024"` into its two ends.
///
/// Both ends are returned unparsed so each can be reported on its own.
pub fn split_date_range(range: &str) -> Option<(&str, &str)> {
    let (start, end) = range.split_once(RANGE_SEPARATOR)?;
    let (start, end) = (start.trim(), end.trim());
    if start.is_empty() || end.is_empty() || end.contains(RANGE_SEPARATOR) {
        return None;
    }
    Some((start, end))
}
