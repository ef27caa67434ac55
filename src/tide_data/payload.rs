//! Response bodies of the NOAA CO-OPS metadata and data APIs and their
//! conversion into [`Station`] and [`Reading`] values.

use crate::tide_data::error::TideDataError;
use crate::types::reading::{Reading, TideKind};
use crate::types::station::{LatLon, Station};
use crate::utils::title_case;
use chrono::NaiveDateTime;
use log::debug;
use serde::Deserialize;
use serde_json::Value;

/// Timestamp layout of the `t` field, e.g. `2024-01-05 03:00`.
const PREDICTION_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Deserialize)]
struct MetadataResponse {
    stations: Option<Vec<MetadataEntry>>,
}

#[derive(Debug, Deserialize)]
struct MetadataEntry {
    name: Option<String>,
    lat: Option<f64>,
    lng: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct SeriesResponse {
    predictions: Option<Vec<RawPrediction>>,
    error: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct RawPrediction {
    t: Option<String>,
    v: Option<Value>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

/// Parses a `/stations/{id}.json` body. The first listed station wins.
pub(crate) fn parse_metadata(station_id: &str, body: &str) -> Result<Station, TideDataError> {
    let response: MetadataResponse =
        serde_json::from_str(body).map_err(|source| TideDataError::JsonParse {
            station: station_id.to_string(),
            source,
        })?;

    let entry = response
        .stations
        .ok_or_else(|| missing(station_id, "stations"))?
        .into_iter()
        .next()
        .ok_or_else(|| TideDataError::NoStationEntry(station_id.to_string()))?;

    let name = entry.name.ok_or_else(|| missing(station_id, "name"))?;
    let lat = entry.lat.ok_or_else(|| missing(station_id, "lat"))?;
    let lng = entry.lng.ok_or_else(|| missing(station_id, "lng"))?;

    Ok(Station::new(station_id, title_case(&name), LatLon(lat, lng)))
}

/// Parses a `datagetter` predictions body.
///
/// An `error` member or a missing `predictions` member fails the whole
/// response. Single entries with an unreadable time or value are skipped.
pub(crate) fn parse_series(station_id: &str, body: &str) -> Result<Vec<Reading>, TideDataError> {
    let response: SeriesResponse =
        serde_json::from_str(body).map_err(|source| TideDataError::JsonParse {
            station: station_id.to_string(),
            source,
        })?;

    if let Some(error) = response.error {
        return Err(TideDataError::Upstream {
            station: station_id.to_string(),
            message: upstream_message(&error),
        });
    }

    let predictions = response
        .predictions
        .ok_or_else(|| missing(station_id, "predictions"))?;

    let total = predictions.len();
    let readings: Vec<Reading> = predictions
        .into_iter()
        .filter_map(|raw| to_reading(station_id, raw))
        .collect();
    if readings.len() < total {
        debug!(
            "Skipped {} malformed predictions for station {}",
            total - readings.len(),
            station_id
        );
    }
    Ok(readings)
}

fn to_reading(station_id: &str, raw: RawPrediction) -> Option<Reading> {
    let timestamp = NaiveDateTime::parse_from_str(raw.t?.trim(), PREDICTION_TIME_FORMAT).ok()?;
    // Values arrive as strings ("-0.123"), occasionally as plain numbers.
    let value = match raw.v? {
        Value::String(text) => text.trim().parse::<f64>().ok()?,
        Value::Number(number) => number.as_f64()?,
        _ => return None,
    };
    if !value.is_finite() {
        return None;
    }
    let kind = raw.kind.as_deref().and_then(TideKind::from_code);
    Some(Reading::new(station_id, timestamp, value).with_kind(kind))
}

fn upstream_message(error: &Value) -> String {
    match error {
        Value::String(message) => message.clone(),
        Value::Object(fields) => fields
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| error.to_string()),
        other => other.to_string(),
    }
}

fn missing(station_id: &str, field: &'static str) -> TideDataError {
    TideDataError::MissingField {
        station: station_id.to_string(),
        field,
    }
}
