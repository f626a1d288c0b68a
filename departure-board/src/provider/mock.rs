//! Mock provider for testing without API access.
//!
//! Serves departures and journeys from memory, either registered directly
//! or loaded from JSON files in the provider's wire format.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Mutex;

use chrono::{DateTime, Utc};

use crate::board::TransitProvider;
use crate::domain::{Departure, Journey, JourneyId, LineId, Point, StopId};

use super::client::parse_envelope;
use super::convert::{convert_departures, convert_journey};
use super::error::ProviderError;
use super::types::{DeparturesData, JourneyData};

/// Mock provider that serves pre-loaded data.
///
/// Counts journey fetches per id so tests can observe the refresh policy.
#[derive(Default)]
pub struct MockProvider {
    /// Departures, keyed by line.
    departures: HashMap<LineId, Vec<Departure>>,
    journeys: HashMap<JourneyId, Journey>,
    journey_fetches: Mutex<HashMap<JourneyId, usize>>,
    failing_journeys: HashSet<JourneyId>,
    failing_departures: bool,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load fixtures from a directory.
    ///
    /// Expects files named `departures-{line}.json` and `journey-{id}.json`
    /// holding raw provider responses. Departures not leaving after `now`
    /// are dropped, as the real client does.
    pub fn load(data_dir: impl AsRef<Path>, now: DateTime<Utc>) -> Result<Self, ProviderError> {
        let data_dir = data_dir.as_ref();
        let mut provider = Self::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| ProviderError::Unavailable {
            status: 0,
            message: format!("Failed to read mock data directory: {}", e),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| ProviderError::Unavailable {
                status: 0,
                message: format!("Failed to read directory entry: {}", e),
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let json = std::fs::read_to_string(&path).map_err(|e| ProviderError::Unavailable {
                status: 0,
                message: format!("Failed to read {:?}: {}", path, e),
            })?;

            if let Some(line) = stem.strip_prefix("departures-") {
                let line = LineId::new(line).map_err(|e| ProviderError::malformed(e.to_string()))?;
                let data: DeparturesData = parse_envelope(&json)?;
                let departures = convert_departures(&data, now)
                    .map_err(|e| ProviderError::malformed(e.to_string()))?;
                provider.add_departures(line, departures);
            } else if let Some(id) = stem.strip_prefix("journey-") {
                let id = JourneyId::new(id).map_err(|e| ProviderError::malformed(e.to_string()))?;
                let data: JourneyData = parse_envelope(&json)?;
                let journey =
                    convert_journey(&id, &data).map_err(|e| ProviderError::malformed(e.to_string()))?;
                provider.add_journey(journey);
            }
        }

        Ok(provider)
    }

    pub fn add_departures(&mut self, line: LineId, departures: Vec<Departure>) {
        self.departures.insert(line, departures);
    }

    pub fn add_journey(&mut self, journey: Journey) {
        self.journeys.insert(journey.id.clone(), journey);
    }

    /// Make every fetch of this journey fail.
    pub fn fail_journey(&mut self, id: &str) {
        if let Ok(id) = JourneyId::new(id) {
            self.failing_journeys.insert(id);
        }
    }

    /// Make every departures fetch fail.
    pub fn fail_departures(&mut self) {
        self.failing_departures = true;
    }

    /// Number of times the journey has been fetched.
    pub fn journey_fetches(&self, id: &str) -> usize {
        let fetches = self
            .journey_fetches
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        JourneyId::new(id)
            .ok()
            .and_then(|id| fetches.get(&id).copied())
            .unwrap_or(0)
    }

    /// Lines with departure data.
    pub fn available_lines(&self) -> Vec<LineId> {
        self.departures.keys().cloned().collect()
    }
}

impl TransitProvider for MockProvider {
    async fn fetch_departures(
        &self,
        line: &LineId,
        _origin_stops: &[StopId],
        _region: Point,
    ) -> Result<Vec<Departure>, ProviderError> {
        if self.failing_departures {
            return Err(ProviderError::Unavailable {
                status: 503,
                message: "mock departures failure".to_string(),
            });
        }
        Ok(self.departures.get(line).cloned().unwrap_or_default())
    }

    async fn fetch_journey(
        &self,
        journey: &JourneyId,
        _region: Point,
    ) -> Result<Journey, ProviderError> {
        *self
            .journey_fetches
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .entry(journey.clone())
            .or_insert(0) += 1;

        if self.failing_journeys.contains(journey) {
            return Err(ProviderError::Unavailable {
                status: 503,
                message: format!("mock failure for journey {journey}"),
            });
        }

        self.journeys
            .get(journey)
            .cloned()
            .ok_or_else(|| ProviderError::Unavailable {
                status: 404,
                message: format!("No mock data for journey {journey}"),
            })
    }
}
