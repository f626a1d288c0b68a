//! Journey assembly.
//!
//! Resolves each selected departure to a full journey, either from the
//! caller's previous snapshot or from the provider, and trims its stops
//! to the rider's frame of reference.

use tracing::{debug, trace};

use crate::domain::{Departure, Journey, Point, ResolvedJourney, StopId};
use crate::provider::ProviderError;

use super::config::BoardConfig;
use super::service::TransitProvider;

/// Where a resolved journey's data came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Fetched from the provider.
    Fetched,
    /// Taken verbatim from the previous snapshot.
    Reused,
}

/// Decide how the departure at `position` in the selection is resolved.
///
/// The lead departure is always refetched on refresh minutes. Every other
/// departure reuses the snapshot when it has an entry for the same id.
pub fn resolution_for(
    position: usize,
    clock_minute: u32,
    in_snapshot: bool,
    config: &BoardConfig,
) -> Resolution {
    if position == 0 && config.is_refresh_minute(clock_minute) {
        return Resolution::Fetched;
    }
    if in_snapshot {
        Resolution::Reused
    } else {
        Resolution::Fetched
    }
}

/// Trim a journey's stops to start at the rider's origin.
///
/// The lead departure (`position == 0`) starts exactly at the origin.
/// Later departures keep one stop before it for context. When the origin
/// is the first stop or is not served at all, nothing is trimmed. The
/// terminus is always kept.
pub fn trim_to_origin(journey: Journey, origin: &StopId, position: usize) -> Journey {
    let start = match journey.position_of(origin) {
        None | Some(0) => 0,
        Some(idx) if position == 0 => idx,
        Some(idx) => idx - 1,
    };
    journey.into_tail(start)
}

/// Resolve and trim every selected departure, in order.
///
/// Fetches run one after another. The first provider failure aborts the
/// whole call; no partial list is returned.
pub async fn assemble_journeys<P: TransitProvider>(
    provider: &P,
    config: &BoardConfig,
    selected: &[Departure],
    origin: &StopId,
    reference_terminus: Option<Point>,
    previous: &[ResolvedJourney],
    clock_minute: u32,
) -> Result<Vec<ResolvedJourney>, ProviderError> {
    let region = reference_terminus.unwrap_or(Point::ORIGIN);
    let mut resolved = Vec::with_capacity(selected.len());

    for (position, departure) in selected.iter().enumerate() {
        let cached = previous.iter().find(|r| r.id() == &departure.id);

        let journey = match (
            resolution_for(position, clock_minute, cached.is_some(), config),
            cached,
        ) {
            (Resolution::Reused, Some(r)) => {
                debug!(journey = %departure.id, "reusing journey from snapshot");
                r.journey.clone()
            }
            _ => {
                debug!(journey = %departure.id, position, "fetching journey");
                provider.fetch_journey(&departure.id, region).await?
            }
        };

        let journey = trim_to_origin(journey, origin, position);

        trace!(
            journey = %departure.id,
            "{}",
            journey
                .stops()
                .iter()
                .map(|s| s.name.as_str())
                .collect::<Vec<_>>()
                .join(" -> ")
        );

        resolved.push(ResolvedJourney {
            departure: departure.clone(),
            journey,
        });
    }

    Ok(resolved)
}
