//! Journeys and the itineraries assembled from them.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use super::{Departure, DomainError, JourneyId, Line, Stop, StopId};

/// A specific vehicle run, with its stops in origin-to-terminus order.
///
/// # Invariants
///
/// - `stops` is non-empty; its last element is the terminus.
#[derive(Debug, Clone, PartialEq)]
pub struct Journey {
    pub id: JourneyId,
    pub line: Line,
    stops: Vec<Stop>,
    /// Stops that are closed for this run.
    pub closed_stops: HashSet<StopId>,
    /// Stops this run passes without calling.
    pub skipped_stops: HashSet<StopId>,
}

impl Journey {
    /// Create a journey.
    ///
    /// Returns `EmptyJourney` if there are no stops.
    pub fn new(
        id: JourneyId,
        line: Line,
        stops: Vec<Stop>,
        closed_stops: HashSet<StopId>,
        skipped_stops: HashSet<StopId>,
    ) -> Result<Self, DomainError> {
        if stops.is_empty() {
            return Err(DomainError::EmptyJourney);
        }
        Ok(Self {
            id,
            line,
            stops,
            closed_stops,
            skipped_stops,
        })
    }

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// The final stop of the run.
    pub fn terminus(&self) -> &Stop {
        // Non-empty by construction
        &self.stops[self.stops.len() - 1]
    }

    /// Index of the first stop with the given id.
    pub fn position_of(&self, stop: &StopId) -> Option<usize> {
        self.stops.iter().position(|s| &s.id == stop)
    }

    pub fn is_closed(&self, stop: &StopId) -> bool {
        self.closed_stops.contains(stop)
    }

    pub fn is_skipped(&self, stop: &StopId) -> bool {
        self.skipped_stops.contains(stop)
    }

    /// Drop every stop before `start`.
    ///
    /// `start` is clamped so that the terminus is always retained.
    pub(crate) fn into_tail(mut self, start: usize) -> Self {
        let start = start.min(self.stops.len() - 1);
        self.stops.drain(..start);
        self
    }
}

/// A journey as shown to the rider: the departure that triggered it,
/// with stops trimmed to start around the rider's origin.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedJourney {
    /// The departure at the rider's stop.
    pub departure: Departure,
    pub journey: Journey,
}

impl ResolvedJourney {
    pub fn id(&self) -> &JourneyId {
        &self.journey.id
    }

    pub fn stops(&self) -> &[Stop] {
        self.journey.stops()
    }

    pub fn terminus_id(&self) -> &StopId {
        &self.journey.terminus().id
    }
}

/// The next arrival at a distinct branch terminus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminusArrival {
    pub terminus_id: StopId,
    /// Leave time of the departure serving the terminus.
    pub eta: DateTime<Utc>,
}
