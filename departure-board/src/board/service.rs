//! Caller-facing entry points.

use std::future::Future;

use chrono::{Local, Timelike};
use tracing::debug;

use crate::domain::{
    Departure, Journey, JourneyId, LineId, Point, ResolvedJourney, StopId, TerminusArrival,
};
use crate::provider::ProviderError;

use super::assemble::assemble_journeys;
use super::config::BoardConfig;
use super::select::select_departures;
use super::terminus::next_terminus_arrivals;

/// Source of live transit data.
///
/// This abstraction allows the board to be tested with mock data.
pub trait TransitProvider {
    /// Upcoming departures of `line` at any of `origin_stops`.
    ///
    /// Only departures with a valid leave time in the future are returned.
    fn fetch_departures(
        &self,
        line: &LineId,
        origin_stops: &[StopId],
        region: Point,
    ) -> impl Future<Output = Result<Vec<Departure>, ProviderError>> + Send;

    /// The full journey, stops in origin-to-terminus order.
    fn fetch_journey(
        &self,
        journey: &JourneyId,
        region: Point,
    ) -> impl Future<Output = Result<Journey, ProviderError>> + Send;
}

/// Computes the next distinct journeys for a stop and line.
pub struct DepartureBoard<P> {
    provider: P,
    config: BoardConfig,
}

impl<P: TransitProvider> DepartureBoard<P> {
    pub fn new(provider: P, config: BoardConfig) -> Self {
        Self { provider, config }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Next distinct journeys from `origin` on `line`, using the local clock.
    ///
    /// `previous` is the caller's last result for the same stop and line;
    /// it is read, never modified. Storing the returned list for the next
    /// poll is up to the caller.
    pub async fn next_journeys(
        &self,
        origin: &StopId,
        line: &LineId,
        terminus_reference: Option<Point>,
        previous: &[ResolvedJourney],
    ) -> Result<Vec<ResolvedJourney>, ProviderError> {
        let clock_minute = Local::now().minute();
        self.next_journeys_at(origin, line, terminus_reference, previous, clock_minute)
            .await
    }

    /// Like [`next_journeys`](Self::next_journeys), with an explicit clock minute.
    pub async fn next_journeys_at(
        &self,
        origin: &StopId,
        line: &LineId,
        terminus_reference: Option<Point>,
        previous: &[ResolvedJourney],
        clock_minute: u32,
    ) -> Result<Vec<ResolvedJourney>, ProviderError> {
        let region = terminus_reference.unwrap_or(Point::ORIGIN);
        let departures = self
            .provider
            .fetch_departures(line, std::slice::from_ref(origin), region)
            .await?;

        let selected = select_departures(&departures, terminus_reference, self.config.limit);
        debug!(
            stop = %origin,
            line = %line,
            departures = departures.len(),
            selected = selected.len(),
            "selected departures"
        );

        assemble_journeys(
            &self.provider,
            &self.config,
            &selected,
            origin,
            terminus_reference,
            previous,
            clock_minute,
        )
        .await
    }

    /// Next arrival at each distinct terminus among `journeys`.
    pub fn next_unique_terminus_arrivals(journeys: &[ResolvedJourney]) -> Vec<TerminusArrival> {
        next_terminus_arrivals(journeys)
    }
}
