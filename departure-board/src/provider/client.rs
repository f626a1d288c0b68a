//! Transit provider HTTP client.
//!
//! Every call is a `GET` on the base URL with an `action` query parameter;
//! responses wrap their payload in `{"data": ...}`.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::board::TransitProvider;
use crate::domain::{Departure, Journey, JourneyId, LineId, Point, StopId};

use super::convert::{convert_departures, convert_journey};
use super::error::ProviderError;
use super::types::{DeparturesData, Envelope, JourneyData};

/// Default base URL for the provider gateway.
const DEFAULT_BASE_URL: &str = "http://localhost:8787/gantry/";

/// API revision the response shapes were written against.
const DEFAULT_COMPATIBILITY_DATE: &str = "2025-01-21";

/// Configuration for the provider client.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// API key, sent as the `apiKey` query parameter
    pub api_key: String,
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Value of the `compatibilityDate` query parameter
    pub compatibility_date: String,
}

impl ProviderConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            compatibility_date: DEFAULT_COMPATIBILITY_DATE.to_string(),
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

    pub fn with_compatibility_date(mut self, date: impl Into<String>) -> Self {
        self.compatibility_date = date.into();
        self
    }
}

/// Transit provider API client.
#[derive(Debug, Clone)]
pub struct ProviderClient {
    http: reqwest::Client,
    config: ProviderConfig,
}

impl ProviderClient {
    /// Create a new provider client with the given configuration.
    pub fn new(config: ProviderConfig) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, config })
    }

    /// Upcoming departures of `line` at `stops`, leaving after `now`.
    pub async fn departures(
        &self,
        line: &LineId,
        stops: &[StopId],
        region: Point,
        now: DateTime<Utc>,
    ) -> Result<Vec<Departure>, ProviderError> {
        let stop_list = serde_json::Value::from(
            stops.iter().map(StopId::as_str).collect::<Vec<_>>(),
        );

        let data: DeparturesData = self
            .fetch(
                "departures",
                region,
                vec![
                    ("line", line.to_string()),
                    ("stops", stop_list.to_string()),
                    ("isTerminus", "0".to_string()),
                ],
            )
            .await?;

        convert_departures(&data, now).map_err(|e| ProviderError::Malformed {
            message: e.to_string(),
            body: None,
        })
    }

    /// Full journey with its stops in origin-to-terminus order.
    pub async fn journey(&self, id: &JourneyId, region: Point) -> Result<Journey, ProviderError> {
        let data: JourneyData = self
            .fetch("journey", region, vec![("journeyId", id.to_string())])
            .await?;

        convert_journey(id, &data).map_err(|e| ProviderError::Malformed {
            message: e.to_string(),
            body: None,
        })
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        action: &str,
        region: Point,
        mut params: Vec<(&str, String)>,
    ) -> Result<T, ProviderError> {
        params.extend([
            ("action", action.to_string()),
            ("coordinates", region.to_query()),
            ("compatibilityDate", self.config.compatibility_date.clone()),
            ("apiKey", self.config.api_key.clone()),
        ]);

        debug!(action, "provider request");

        let response = self
            .http
            .get(&self.config.base_url)
            .query(&params)
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(ProviderError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Unavailable {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        parse_envelope(&body)
    }
}

/// Parse a `{"data": ...}` response body.
pub(crate) fn parse_envelope<T: DeserializeOwned>(body: &str) -> Result<T, ProviderError> {
    serde_json::from_str::<Envelope<T>>(body)
        .map(|envelope| envelope.data)
        .map_err(|e| ProviderError::Malformed {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
}

impl TransitProvider for ProviderClient {
    async fn fetch_departures(
        &self,
        line: &LineId,
        origin_stops: &[StopId],
        region: Point,
    ) -> Result<Vec<Departure>, ProviderError> {
        self.departures(line, origin_stops, region, Utc::now()).await
    }

    async fn fetch_journey(
        &self,
        journey: &JourneyId,
        region: Point,
    ) -> Result<Journey, ProviderError> {
        self.journey(journey, region).await
    }
}
