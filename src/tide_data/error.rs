use std::time::Duration;
use thiserror::Error;

/// Why a single station fetch produced nothing.
///
/// These never leave the aggregation step; they are logged and the station is
/// dropped from the ranking.
#[derive(Debug, Error)]
pub enum TideDataError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("Request for station {station} timed out after {after:?}")]
    Timeout { station: String, after: Duration },

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read response body from {0}")]
    BodyRead(String, #[source] reqwest::Error),

    #[error("Failed to parse JSON response for station {station}")]
    JsonParse {
        station: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Upstream reported an error for station {station}: {message}")]
    Upstream { station: String, message: String },

    #[error("Response for station {station} is missing '{field}'")]
    MissingField { station: String, field: &'static str },

    #[error("Metadata response for station {0} lists no stations")]
    NoStationEntry(String),
}

impl TideDataError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, TideDataError::Timeout { .. })
    }
}
