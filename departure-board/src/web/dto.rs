//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Departure, Line, ResolvedJourney, Stop, TerminusArrival};

/// Query for the next journeys at a stop.
#[derive(Debug, Deserialize)]
pub struct JourneysRequest {
    /// Origin stop id
    pub stop: String,

    /// Line id
    pub line: String,

    /// Terminus reference latitude (requires `lon`)
    pub lat: Option<f64>,

    /// Terminus reference longitude (requires `lat`)
    pub lon: Option<f64>,
}

/// Response for the next journeys at a stop.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneysResponse {
    pub journeys: Vec<JourneyResult>,
    pub terminus_arrivals: Vec<TerminusArrivalResult>,
}

/// A resolved journey.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyResult {
    pub id: String,
    pub line: LineResult,
    pub departure: DepartureResult,
    /// Stops from around the rider's origin to the terminus
    pub stops: Vec<StopResult>,
}

impl JourneyResult {
    pub fn from_resolved(resolved: &ResolvedJourney) -> Self {
        let journey = &resolved.journey;
        Self {
            id: journey.id.to_string(),
            line: LineResult::from_line(&journey.line),
            departure: DepartureResult::from_departure(&resolved.departure),
            stops: journey
                .stops()
                .iter()
                .map(|stop| {
                    StopResult::from_stop(
                        stop,
                        journey.is_closed(&stop.id),
                        journey.is_skipped(&stop.id),
                    )
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineResult {
    pub id: String,
    pub number: String,
    pub background_color: String,
    pub text_color: String,
    pub picto_svg: Option<String>,
    pub number_shape_svg: Option<String>,
    pub importance: i32,
}

impl LineResult {
    pub fn from_line(line: &Line) -> Self {
        Self {
            id: line.id.to_string(),
            number: line.number.clone(),
            background_color: line.background_color.clone(),
            text_color: line.text_color.clone(),
            picto_svg: line.picto_svg.clone(),
            number_shape_svg: line.number_shape_svg.clone(),
            importance: line.importance,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartureResult {
    pub destination: String,
    /// RFC 3339
    pub leaves_at: String,
    /// RFC 3339
    pub arrives_at: String,
    pub branch_hash: Option<String>,
    pub journey_code: Option<String>,
    pub vehicle_length: Option<&'static str>,
}

impl DepartureResult {
    pub fn from_departure(departure: &Departure) -> Self {
        Self {
            destination: departure.destination.name.clone(),
            leaves_at: departure.leaves_at.to_rfc3339(),
            arrives_at: departure.arrives_at.to_rfc3339(),
            branch_hash: departure.branch_hash.clone(),
            journey_code: departure.journey_code.clone(),
            vehicle_length: departure.vehicle_length.map(|v| v.as_str()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StopResult {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub is_closed: bool,
    pub is_skipped: bool,
}

impl StopResult {
    pub fn from_stop(stop: &Stop, is_closed: bool, is_skipped: bool) -> Self {
        Self {
            id: stop.id.to_string(),
            name: stop.name.clone(),
            lat: stop.position.lat,
            lon: stop.position.lon,
            is_closed,
            is_skipped,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminusArrivalResult {
    pub terminus_id: String,
    /// RFC 3339
    pub eta: String,
}

impl TerminusArrivalResult {
    pub fn from_arrival(arrival: &TerminusArrival) -> Self {
        Self {
            terminus_id: arrival.terminus_id.to_string(),
            eta: arrival.eta.to_rfc3339(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
