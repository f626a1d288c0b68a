//! Departure board core.
//!
//! Turns a provider's raw departure list for one stop and one line into a
//! short list of distinct upcoming journeys:
//!
//! 1. [`select_departures`] keeps the branch heading towards the rider's
//!    terminus and collapses near-duplicates.
//! 2. [`assemble_journeys`] resolves each selection to a full itinerary,
//!    reusing the caller's previous snapshot where allowed, and trims it
//!    to start at the rider's stop.
//! 3. [`next_terminus_arrivals`] summarises a journey list as the next
//!    arrival at each distinct terminus.

mod assemble;
mod config;
mod select;
mod service;
mod terminus;

pub use assemble::{Resolution, assemble_journeys, resolution_for, trim_to_origin};
pub use config::BoardConfig;
pub use select::select_departures;
pub use service::{DepartureBoard, TransitProvider};
pub use terminus::next_terminus_arrivals;
