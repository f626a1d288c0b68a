//! Transit data provider client.
//!
//! This module provides an HTTP client for the live transit data gateway,
//! which serves departures at a stop and full journey stop lists.
//!
//! Key characteristics of the provider:
//! - Departures carry the id of their journey; that id is used to fetch
//!   the journey's stops, closures and skipped stops
//! - Positions are `[lat, lon]` pairs
//! - Timestamps are ISO 8601; realtime values are preferred over
//!   timetabled ones when both are present

mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use client::{ProviderClient, ProviderConfig};
pub use convert::{ConversionError, convert_departures, convert_journey, parse_timestamp};
pub use error::ProviderError;
pub use mock::MockProvider;
pub use types::{
    DepartureDto, DeparturesData, Envelope, JourneyData, JourneyStopDto, LineDto, StopDto,
};
