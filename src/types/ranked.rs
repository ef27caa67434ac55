use crate::types::reading::StationMinimum;
use serde::Serialize;
use std::ops::Deref;

/// Message shown when a search completed but no station produced data.
pub const NO_DATA_MESSAGE: &str = "No tide data found. Please check your input and try again.";

/// Per-station minima ordered by ascending value, at most K long.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RankedResult(Vec<StationMinimum>);

impl RankedResult {
    /// Wraps minima that are already sorted and truncated.
    pub(crate) fn from_sorted(minimums: Vec<StationMinimum>) -> Self {
        Self(minimums)
    }

    pub fn into_inner(self) -> Vec<StationMinimum> {
        self.0
    }
}

impl Deref for RankedResult {
    type Target = [StationMinimum];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for RankedResult {
    type Item = StationMinimum;
    type IntoIter = std::vec::IntoIter<StationMinimum>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// How an outcome or failure should be classified for the user.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StatusClass {
    /// The request itself was malformed or out of bounds.
    BadInput,
    /// The requested region does not exist.
    NotFound,
    /// The search ran but nothing came back.
    NoData,
}

/// Result of a successful pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub enum LowTideOutcome {
    Ranked(RankedResult),
    NoData,
}

impl LowTideOutcome {
    pub(crate) fn from_ranked(ranked: RankedResult) -> Self {
        if ranked.is_empty() {
            LowTideOutcome::NoData
        } else {
            LowTideOutcome::Ranked(ranked)
        }
    }

    /// The ranked minima; empty for [`LowTideOutcome::NoData`].
    pub fn minimums(&self) -> &[StationMinimum] {
        match self {
            LowTideOutcome::Ranked(ranked) => ranked,
            LowTideOutcome::NoData => &[],
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, LowTideOutcome::NoData)
    }

    /// `None` when there is something to show.
    pub fn status(&self) -> Option<StatusClass> {
        match self {
            LowTideOutcome::Ranked(_) => None,
            LowTideOutcome::NoData => Some(StatusClass::NoData),
        }
    }
}
