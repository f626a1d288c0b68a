//! Domain types for the departure board.
//!
//! These types represent validated transit data. Identifiers and journeys
//! enforce their invariants at construction time, so code that receives
//! them can trust their validity.

mod departure;
mod error;
mod ids;
mod journey;
mod line;
mod point;
mod stop;

#[cfg(test)]
pub(crate) mod fixtures {
    pub use super::departure::fixtures::*;
    pub use super::journey::fixtures::*;
}

pub use departure::{Departure, Destination, VehicleLength};
pub use error::DomainError;
pub use ids::{InvalidId, JourneyId, LineId, StopId};
pub use journey::{Journey, ResolvedJourney, TerminusArrival};
pub use line::Line;
pub use point::Point;
pub use stop::Stop;
