//! Async HTTP client for the railwayapi.com v2 API.
//!
//! Handles authentication, dispatch, and decoding of responses into the
//! typed model. The API key travels as a trailing path segment on every
//! request; error values and logs carry only the key-free path.

use serde::de::DeserializeOwned;

use crate::convert::{
    convert_arrivals, convert_cancelled_trains, convert_live_status, convert_pnr_status,
    convert_rescheduled_trains, convert_seat_availability, convert_train_details,
    convert_train_fare, convert_train_list, convert_train_route, convert_trains_between,
};
use crate::error::RailError;
use crate::model::{
    Arrivals, CancelledTrains, LiveStatus, PnrStatus, RescheduledTrains, SeatAvailability,
    Stations, TrainDetails, TrainFare, TrainList, TrainRoute, TrainsBetween,
};
use crate::request::{
    ArrivalsRequest, CancelledTrainsRequest, CheckSeatRequest, LiveStatusRequest,
    PnrStatusRequest, RescheduledTrainsRequest, StationCodeToNameRequest,
    StationNameToCodeRequest, SuggestStationRequest, SuggestTrainRequest, TrainByNameRequest,
    TrainByNumberRequest, TrainFareRequest, TrainRouteRequest, TrainsBetweenRequest,
};
use crate::types::{
    RawArrivals, RawCancelledTrains, RawLiveStatus, RawPnrStatus, RawRescheduledTrains,
    RawSeatAvailability, RawTrainDetails, RawTrainFare, RawTrainList, RawTrainRoute,
    RawTrainsBetween,
};

/// Default base URL for the API.
const DEFAULT_BASE_URL: &str = "https://api.railwayapi.com";

/// User agent sent with every request.
const USER_AGENT: &str = concat!("rail-client/", env!("CARGO_PKG_VERSION"));

/// Configuration for the rail client.
#[derive(Debug, Clone)]
pub struct RailConfig {
    /// API key for authentication
    pub api_key: String,
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl RailConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// railwayapi.com v2 API client.
///
/// One method per endpoint; each takes a request value from
/// [`request`](crate::request), performs the HTTP round trip, and decodes
/// the response into the typed model.
#[derive(Debug, Clone)]
pub struct RailClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RailClient {
    /// Create a new client with the given configuration.
    pub fn new(config: RailConfig) -> Result<Self, RailError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }

    /// Perform a GET for the given key-free path, appending the API key
    /// segment, and return the response body on success.
    async fn fetch(&self, path: &str) -> Result<String, RailError> {
        let url = format!("{}{}/apikey/{}/", self.base_url, path, self.api_key);

        tracing::debug!(path, "rail API request");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(RailError::Api {
                status: status.as_u16(),
                url: path.to_string(),
            });
        }

        Ok(response.text().await?)
    }

    /// Get the booking status of a PNR.
    pub async fn pnr_status(&self, req: PnrStatusRequest) -> Result<PnrStatus, RailError> {
        let body = self.fetch(&req.path()?).await?;
        let raw: RawPnrStatus = decode(&body)?;
        Ok(convert_pnr_status(raw)?)
    }

    /// Get the live running status of a train on a journey date.
    pub async fn live_train_status(
        &self,
        req: LiveStatusRequest,
    ) -> Result<LiveStatus, RailError> {
        let body = self.fetch(&req.path()?).await?;
        let raw: RawLiveStatus = decode(&body)?;
        Ok(convert_live_status(raw)?)
    }

    /// Get the full scheduled route of a train.
    pub async fn train_route(&self, req: TrainRouteRequest) -> Result<TrainRoute, RailError> {
        let body = self.fetch(&req.path()?).await?;
        let raw: RawTrainRoute = decode(&body)?;
        Ok(convert_train_route(raw)?)
    }

    /// Check seat availability between two stations.
    pub async fn check_seat(&self, req: CheckSeatRequest) -> Result<SeatAvailability, RailError> {
        let body = self.fetch(&req.path()?).await?;
        let raw: RawSeatAvailability = decode(&body)?;
        Ok(convert_seat_availability(raw)?)
    }

    /// Get the fare for a journey.
    pub async fn train_fare(&self, req: TrainFareRequest) -> Result<TrainFare, RailError> {
        let body = self.fetch(&req.path()?).await?;
        let raw: RawTrainFare = decode(&body)?;
        Ok(convert_train_fare(raw)?)
    }

    /// List trains running between two stations on a date.
    pub async fn trains_between(
        &self,
        req: TrainsBetweenRequest,
    ) -> Result<TrainsBetween, RailError> {
        let body = self.fetch(&req.path()?).await?;
        let raw: RawTrainsBetween = decode(&body)?;
        Ok(convert_trains_between(raw)?)
    }

    /// Get the arrivals board for a station.
    pub async fn train_arrivals(&self, req: ArrivalsRequest) -> Result<Arrivals, RailError> {
        let body = self.fetch(&req.path()?).await?;
        let raw: RawArrivals = decode(&body)?;
        Ok(convert_arrivals(raw)?)
    }

    /// Resolve a station name to its code.
    pub async fn station_name_to_code(
        &self,
        req: StationNameToCodeRequest,
    ) -> Result<Stations, RailError> {
        let body = self.fetch(&req.path()?).await?;
        decode(&body)
    }

    /// Resolve a station code to its full name.
    pub async fn station_code_to_name(
        &self,
        req: StationCodeToNameRequest,
    ) -> Result<Stations, RailError> {
        let body = self.fetch(&req.path()?).await?;
        decode(&body)
    }

    /// Suggest stations matching a partial name.
    pub async fn suggest_station(
        &self,
        req: SuggestStationRequest,
    ) -> Result<Stations, RailError> {
        let body = self.fetch(&req.path()?).await?;
        decode(&body)
    }

    /// Look up a train by its number.
    pub async fn train_by_number(
        &self,
        req: TrainByNumberRequest,
    ) -> Result<TrainDetails, RailError> {
        let body = self.fetch(&req.path()?).await?;
        let raw: RawTrainDetails = decode(&body)?;
        Ok(convert_train_details(raw)?)
    }

    /// Look up a train by its name.
    pub async fn train_by_name(
        &self,
        req: TrainByNameRequest,
    ) -> Result<TrainDetails, RailError> {
        let body = self.fetch(&req.path()?).await?;
        let raw: RawTrainDetails = decode(&body)?;
        Ok(convert_train_details(raw)?)
    }

    /// List trains cancelled on a date.
    pub async fn cancelled_trains(
        &self,
        req: CancelledTrainsRequest,
    ) -> Result<CancelledTrains, RailError> {
        let body = self.fetch(&req.path()?).await?;
        let raw: RawCancelledTrains = decode(&body)?;
        Ok(convert_cancelled_trains(raw)?)
    }

    /// List trains rescheduled on a date.
    pub async fn rescheduled_trains(
        &self,
        req: RescheduledTrainsRequest,
    ) -> Result<RescheduledTrains, RailError> {
        let body = self.fetch(&req.path()?).await?;
        let raw: RawRescheduledTrains = decode(&body)?;
        Ok(convert_rescheduled_trains(raw)?)
    }

    /// Suggest trains matching a partial name.
    pub async fn suggest_train(&self, req: SuggestTrainRequest) -> Result<TrainList, RailError> {
        let body = self.fetch(&req.path()?).await?;
        let raw: RawTrainList = decode(&body)?;
        Ok(convert_train_list(raw)?)
    }
}

/// Decode a response body, keeping a truncated copy for diagnostics.
fn decode<T: DeserializeOwned>(body: &str) -> Result<T, RailError> {
    serde_json::from_str(body).map_err(|e| RailError::Json {
        message: e.to_string(),
        body: Some(body.chars().take(500).collect()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder() {
        let config = RailConfig::new("test-key")
            .with_base_url("http://localhost:8080")
            .with_timeout(60);

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn config_defaults() {
        let config = RailConfig::new("test-key");

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn client_creation() {
        let config = RailConfig::new("test-key");
        let client = RailClient::new(config);
        assert!(client.is_ok());
    }

    #[test]
    fn decode_reports_truncated_body() {
        let body = "not json at all";
        let err = decode::<Stations>(body).unwrap_err();
        match err {
            RailError::Json { body: Some(b), .. } => assert_eq!(b, "not json at all"),
            other => panic!("expected JSON error, got {other:?}"),
        }
    }

    // Integration tests would go here, but require a real API key
    // and would make actual HTTP requests. They should be marked
    // with #[ignore] and run separately.
}
