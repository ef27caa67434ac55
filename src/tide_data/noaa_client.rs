use crate::config::LowTideConfig;
use crate::tide_data::error::TideDataError;
use crate::tide_data::payload::{parse_metadata, parse_series};
use crate::tide_data::source::TideSource;
use crate::types::date_window::StartEndDate;
use crate::types::reading::Reading;
use crate::types::station::Station;
use log::{debug, warn};
use reqwest::Client;
use std::time::Duration;

/// Client for the NOAA CO-OPS metadata and prediction APIs.
///
/// One request per call, no retries, nothing remembered between calls.
#[derive(Debug, Clone)]
pub struct NoaaClient {
    http: Client,
    metadata_base_url: String,
    series_base_url: String,
    datum: String,
    units: String,
    time_zone: String,
    application: String,
    request_timeout: Duration,
}

impl NoaaClient {
    pub fn new(config: &LowTideConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self {
            http,
            metadata_base_url: config.metadata_base_url.trim_end_matches('/').to_string(),
            series_base_url: config.series_base_url.trim_end_matches('/').to_string(),
            datum: config.datum.clone(),
            units: config.units.clone(),
            time_zone: config.time_zone.clone(),
            application: config.application.clone(),
            request_timeout: config.request_timeout,
        })
    }

    pub fn metadata_url(&self, station_id: &str) -> String {
        format!("{}/stations/{}.json", self.metadata_base_url, station_id)
    }

    pub fn series_url(&self, station_id: &str, window: StartEndDate) -> String {
        format!(
            "{}/datagetter?begin_date={}&end_date={}&station={}&product=predictions&datum={}&time_zone={}&interval=hilo&units={}&application={}&format=json",
            self.series_base_url,
            window.begin_param(),
            window.end_param(),
            station_id,
            self.datum,
            self.time_zone,
            self.units,
            self.application,
        )
    }

    /// Fetches name and coordinate for one station.
    pub async fn try_fetch_metadata(&self, station_id: &str) -> Result<Station, TideDataError> {
        let url = self.metadata_url(station_id);
        let body = self.get_text(station_id, &url).await?;
        parse_metadata(station_id, &body)
    }

    /// Fetches the predicted highs and lows for one station.
    pub async fn try_fetch_series(
        &self,
        station_id: &str,
        window: StartEndDate,
    ) -> Result<Vec<Reading>, TideDataError> {
        let url = self.series_url(station_id, window);
        let body = self.get_text(station_id, &url).await?;
        parse_series(station_id, &body)
    }

    async fn get_text(&self, station_id: &str, url: &str) -> Result<String, TideDataError> {
        debug!("Requesting {}", url);
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.request_error(station_id, url, e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                return Err(if let Some(status) = e.status() {
                    TideDataError::HttpStatus {
                        url: url.to_string(),
                        status,
                        source: e,
                    }
                } else {
                    TideDataError::NetworkRequest(url.to_string(), e)
                });
            }
        };

        response
            .text()
            .await
            .map_err(|e| self.request_error(station_id, url, e))
    }

    fn request_error(&self, station_id: &str, url: &str, e: reqwest::Error) -> TideDataError {
        if e.is_timeout() {
            TideDataError::Timeout {
                station: station_id.to_string(),
                after: self.request_timeout,
            }
        } else if e.is_body() || e.is_decode() {
            TideDataError::BodyRead(url.to_string(), e)
        } else {
            TideDataError::NetworkRequest(url.to_string(), e)
        }
    }
}

impl TideSource for NoaaClient {
    async fn fetch_metadata(&self, station_id: &str) -> Station {
        match self.try_fetch_metadata(station_id).await {
            Ok(station) => station,
            Err(e) => {
                warn!("Metadata unavailable for station {}: {}", station_id, e);
                Station::unresolved(station_id)
            }
        }
    }

    async fn fetch_series(&self, station_id: &str, window: StartEndDate) -> Vec<Reading> {
        match self.try_fetch_series(station_id, window).await {
            Ok(readings) => readings,
            Err(e) => {
                warn!("No predictions for station {} ({}): {}", station_id, window, e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::reading::TideKind;
    use crate::types::station::LatLon;
    use chrono::NaiveDate;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const METADATA_BODY: &str =
        r#"{"stations":[{"id":"9414290","name":"SAN FRANCISCO","lat":1.0,"lng":2.0}]}"#;
    const SERIES_BODY: &str =
        r#"{"predictions":[{"t":"2024-01-05 03:12","v":"-0.25","type":"L"}]}"#;

    fn window() -> StartEndDate {
        StartEndDate::new(
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 6).unwrap(),
        )
    }

    /// Serves every request on a local port with `status`, answering metadata paths with
    /// [`METADATA_BODY`] and everything else with [`SERIES_BODY`].
    async fn serve(status: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let mut request = vec![0u8; 4096];
                let read = socket.read(&mut request).await.unwrap_or(0);
                let request = String::from_utf8_lossy(&request[..read]);
                let body = if request.contains("/stations/") {
                    METADATA_BODY
                } else {
                    SERIES_BODY
                };
                let response = format!(
                    "HTTP/1.1 {status}\r\nContent-Type: application/json\r\n\
                     Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });
        format!("http://{addr}")
    }

    fn local_client(base_url: &str, request_timeout: Duration) -> NoaaClient {
        let config = LowTideConfig::builder()
            .metadata_base_url(base_url)
            .series_base_url(base_url)
            .request_timeout(request_timeout)
            .build();
        NoaaClient::new(&config).expect("client")
    }

    fn client() -> NoaaClient {
        let config = LowTideConfig::builder()
            .metadata_base_url("http://tides.test/mdapi/")
            .series_base_url("http://tides.test/api")
            .build();
        NoaaClient::new(&config).expect("client")
    }

    #[test]
    fn metadata_url_points_at_station_document() {
        assert_eq!(
            client().metadata_url("8518750"),
            "http://tides.test/mdapi/stations/8518750.json"
        );
    }

    #[test]
    fn series_url_carries_window_and_product() {
        let window = StartEndDate::new(
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
        );
        assert_eq!(
            client().series_url("8518750", window),
            "http://tides.test/api/datagetter?begin_date=20240105&end_date=20240120&station=8518750\
             &product=predictions&datum=MLLW&time_zone=lst_ldt&interval=hilo&units=english\
             &application=low_tide_rs&format=json"
        );
    }

    #[tokio::test]
    async fn unreachable_host_falls_back_to_markers() {
        // Port 9 on localhost is not expected to serve HTTP; the connection fails fast.
        let config = LowTideConfig::builder()
            .metadata_base_url("http://127.0.0.1:9")
            .series_base_url("http://127.0.0.1:9")
            .request_timeout(Duration::from_secs(2))
            .build();
        let client = NoaaClient::new(&config).expect("client");
        let window = StartEndDate::new(
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 6).unwrap(),
        );

        assert!(client.try_fetch_metadata("8518750").await.is_err());
        let station = client.fetch_metadata("8518750").await;
        assert_eq!(station, Station::unresolved("8518750"));
        assert!(client.fetch_series("8518750", window).await.is_empty());
    }

    #[tokio::test]
    async fn error_status_falls_back_to_markers() {
        let base_url = serve("500 Internal Server Error").await;
        let client = local_client(&base_url, Duration::from_secs(5));

        let error = client.try_fetch_metadata("1").await.unwrap_err();
        assert!(
            matches!(
                error,
                TideDataError::HttpStatus { status, .. }
                    if status == reqwest::StatusCode::INTERNAL_SERVER_ERROR
            ),
            "unexpected error: {error}"
        );
        assert!(matches!(
            client.try_fetch_series("1", window()).await,
            Err(TideDataError::HttpStatus { .. })
        ));

        assert_eq!(client.fetch_metadata("1").await, Station::unresolved("1"));
        assert!(client.fetch_series("1", window()).await.is_empty());
    }

    #[tokio::test]
    async fn successful_responses_are_parsed() {
        let client = local_client(&serve("200 OK").await, Duration::from_secs(5));

        let station = client.fetch_metadata("9414290").await;
        assert_eq!(station.name, "San Francisco");
        assert_eq!(station.location, Some(LatLon(1.0, 2.0)));

        let readings = client.fetch_series("9414290", window()).await;
        assert_eq!(readings.len(), 1);
        assert_eq!(readings[0].value, -0.25);
        assert_eq!(readings[0].kind, Some(TideKind::Low));
    }

    #[tokio::test]
    async fn silent_server_is_a_timeout() {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        // Accept and hold connections without ever answering.
        let _server = tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });
        let client = local_client(&format!("http://{addr}"), Duration::from_millis(200));

        let error = client.try_fetch_metadata("1").await.unwrap_err();
        assert!(error.is_timeout(), "unexpected error: {error}");
        assert_eq!(client.fetch_metadata("1").await, Station::unresolved("1"));
    }
}
