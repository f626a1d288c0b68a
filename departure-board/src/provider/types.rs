//! Provider API response DTOs.
//!
//! These types map directly to the provider's JSON responses. Optional
//! fields use `Option` because the provider omits them rather than
//! sending null.

use serde::Deserialize;

/// `[lat, lon]` pair.
pub type PositionDto = [f64; 2];

/// Every response wraps its payload in `data`.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Payload of `action=departures`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeparturesData {
    pub departures: Vec<DepartureDto>,
}

/// One departure at the queried stop.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartureDto {
    /// Id of the journey this departure belongs to.
    pub journey_id: String,

    /// Display label of the destination.
    pub destination_label: String,

    pub destination: DestinationDto,

    /// Leave time at the queried stop.
    pub departure: Option<TimesDto>,

    /// Arrival time at the queried stop.
    pub arrival: Option<TimesDto>,

    pub branch_hash: Option<String>,

    /// Mission code, e.g. "PAPA-12".
    pub journey_code: Option<String>,

    /// "SHORT" or "LONG".
    pub vehicle_length: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationDto {
    pub average_position: PositionDto,
}

/// Realtime and timetabled ISO-8601 timestamps.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimesDto {
    pub real_time: Option<String>,
    pub theoretical: Option<String>,
}

/// Payload of `action=journey`.
#[derive(Debug, Clone, Deserialize)]
pub struct JourneyData {
    pub line: LineDto,
    pub stops: Vec<JourneyStopDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDto {
    pub id: String,
    pub number: String,
    pub background_color: String,
    pub text_color: String,
    pub mode_svg: Option<String>,
    pub number_shape_svg: Option<String>,
    pub importance: i32,
}

/// A stop along a journey with its status for this run.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyStopDto {
    pub stop: StopDto,
    #[serde(default)]
    pub is_closed: bool,
    #[serde(default)]
    pub is_skipped: bool,
}

/// A stop area, made of one or more physical stops.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopDto {
    pub id: String,
    pub name: String,
    pub average_position: PositionDto,
    #[serde(default)]
    pub stops: Vec<PhysicalStopDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhysicalStopDto {
    #[serde(default)]
    pub lines: Vec<String>,
}
