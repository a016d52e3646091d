use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::Config;
use crate::error::SensorError;
use crate::sensor::models::{DoorStateResponse, DurationSummary, RawRoom, TemperatureResponse};
use crate::sensor::range::TimeRange;

/// Upstream resource names under `/rooms/{id}/`.
pub const TEMPERATURE_RESOURCE: &str = "temperatureData";
pub const DOOR_STATE_STATISTIC_RESOURCE: &str = "doorStateStatistic";
pub const DOOR_STATE_RESOURCE: &str = "doorStateData";

pub struct SensorQueryClient {
    http_client: Client,
    base_url: Url,
}

impl SensorQueryClient {
    /// Build a client for the configured sensor platform.
    ///
    /// # Errors
    ///
    /// Returns `SensorError::InvalidBaseUrl` if the base URL cannot carry a path,
    /// and `SensorError::Transport` if the HTTP client cannot be created.
    pub fn new(config: &Config) -> Result<Self, SensorError> {
        let base_url = Url::parse(&config.sensor_api_base_url)
            .map_err(|e| SensorError::InvalidBaseUrl(format!("{}: {e}", config.sensor_api_base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(SensorError::InvalidBaseUrl(
                config.sensor_api_base_url.clone(),
            ));
        }

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.sensor_api_timeout_seconds))
            .build()?;

        Ok(Self {
            http_client,
            base_url,
        })
    }

    /// List the rooms known to the platform.
    ///
    /// # Errors
    ///
    /// Returns `SensorError::Transport`, `SensorError::RequestFailed` or
    /// `SensorError::ParseFailed`.
    pub async fn fetch_rooms(&self) -> Result<Vec<RawRoom>, SensorError> {
        let url = self.url(&["rooms"], None);
        self.get_json(url).await
    }

    /// Temperature series for a room over a range.
    ///
    /// # Errors
    ///
    /// Returns `SensorError::Transport`, `SensorError::RequestFailed` or
    /// `SensorError::ParseFailed`.
    pub async fn fetch_temperature(
        &self,
        room_id: &str,
        range: &TimeRange,
    ) -> Result<TemperatureResponse, SensorError> {
        self.get_json(self.room_url(room_id, TEMPERATURE_RESOURCE, range))
            .await
    }

    /// Total open and closed time for a room over a range.
    ///
    /// # Errors
    ///
    /// Returns `SensorError::Transport`, `SensorError::RequestFailed` or
    /// `SensorError::ParseFailed`.
    pub async fn fetch_door_state_duration(
        &self,
        room_id: &str,
        range: &TimeRange,
    ) -> Result<DurationSummary, SensorError> {
        self.get_json(self.room_url(room_id, DOOR_STATE_STATISTIC_RESOURCE, range))
            .await
    }

    /// Door-state intervals for a room over a range.
    ///
    /// # Errors
    ///
    /// Returns `SensorError::Transport`, `SensorError::RequestFailed` or
    /// `SensorError::ParseFailed`.
    pub async fn fetch_door_state_intervals(
        &self,
        room_id: &str,
        range: &TimeRange,
    ) -> Result<DoorStateResponse, SensorError> {
        self.get_json(self.room_url(room_id, DOOR_STATE_RESOURCE, range))
            .await
    }

    /// `{base}/rooms/{room_id}/{resource}?{encoded range}`.
    ///
    /// The room id is a single path segment, so ids like `"Meeting Room M3"`
    /// are percent-encoded rather than split.
    #[must_use]
    pub fn room_url(&self, room_id: &str, resource: &str, range: &TimeRange) -> Url {
        self.url(&["rooms", room_id, resource], Some(&range.to_query()))
    }

    fn url(&self, segments: &[&str], query: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url.set_query(query);
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, SensorError> {
        tracing::debug!(url = %url, "Sensor API request");

        let response = self.http_client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SensorError::RequestFailed {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let text = response.text().await?;

        serde_json::from_str(&text).map_err(|e| {
            tracing::error!(
                error = %e,
                body_preview = %text.chars().take(500).collect::<String>(),
                "Failed to parse sensor API response"
            );
            SensorError::ParseFailed(e.to_string())
        })
    }
}
