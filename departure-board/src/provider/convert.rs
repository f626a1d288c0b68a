//! Conversion from provider DTOs to domain types.
//!
//! Departures with unusable times are dropped here rather than failing the
//! whole response; structural problems are reported as errors.

use std::collections::HashSet;

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use tracing::debug;

use crate::domain::{
    Departure, Destination, DomainError, Journey, JourneyId, Line, LineId, Point, Stop, StopId,
    VehicleLength,
};

use super::types::{DepartureDto, DeparturesData, JourneyData, LineDto, StopDto, TimesDto};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConversionError {
    /// A record failed domain validation
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A journey payload failed domain validation
    #[error("journey {journey}: {source}")]
    Journey {
        journey: String,
        #[source]
        source: DomainError,
    },
}

/// Parse an ISO-8601 timestamp.
///
/// Offsets are honoured; timestamps without one are taken as local time.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Some(t.with_timezone(&Utc));
    }
    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").ok()?;
    Local
        .from_local_datetime(&naive)
        .single()
        .map(|t| t.with_timezone(&Utc))
}

/// Realtime if present and non-empty, else timetabled.
fn best_time(times: Option<&TimesDto>) -> Option<DateTime<Utc>> {
    let times = times?;
    times
        .real_time
        .as_deref()
        .filter(|s| !s.is_empty())
        .or(times.theoretical.as_deref())
        .and_then(parse_timestamp)
}

fn non_empty(s: &Option<String>) -> Option<String> {
    s.as_ref().filter(|s| !s.is_empty()).cloned()
}

/// Convert a departures payload, keeping only departures leaving after `now`.
pub fn convert_departures(
    data: &DeparturesData,
    now: DateTime<Utc>,
) -> Result<Vec<Departure>, ConversionError> {
    let mut results = Vec::with_capacity(data.departures.len());

    for dto in &data.departures {
        let Some(leaves_at) = best_time(dto.departure.as_ref()) else {
            debug!(journey = %dto.journey_id, "dropping departure without a valid leave time");
            continue;
        };
        if leaves_at <= now {
            debug!(journey = %dto.journey_id, %leaves_at, "dropping departure in the past");
            continue;
        }
        results.push(convert_departure(dto, leaves_at)?);
    }

    Ok(results)
}

fn convert_departure(
    dto: &DepartureDto,
    leaves_at: DateTime<Utc>,
) -> Result<Departure, ConversionError> {
    let id = JourneyId::new(dto.journey_id.clone()).map_err(DomainError::from)?;

    Ok(Departure {
        id,
        destination: Destination {
            name: dto.destination_label.clone(),
            average_position: Point::from_pair(dto.destination.average_position),
        },
        leaves_at,
        arrives_at: best_time(dto.arrival.as_ref()).unwrap_or(leaves_at),
        branch_hash: non_empty(&dto.branch_hash),
        journey_code: non_empty(&dto.journey_code),
        vehicle_length: dto.vehicle_length.as_deref().and_then(VehicleLength::parse),
    })
}

/// Convert a journey payload.
pub fn convert_journey(id: &JourneyId, data: &JourneyData) -> Result<Journey, ConversionError> {
    let line = convert_line(&data.line)?;

    let mut stops = Vec::with_capacity(data.stops.len());
    let mut closed_stops = HashSet::new();
    let mut skipped_stops = HashSet::new();

    for entry in &data.stops {
        let stop = convert_stop(&entry.stop)?;
        if entry.is_closed {
            closed_stops.insert(stop.id.clone());
        }
        if entry.is_skipped {
            skipped_stops.insert(stop.id.clone());
        }
        stops.push(stop);
    }

    Journey::new(id.clone(), line, stops, closed_stops, skipped_stops).map_err(|source| {
        ConversionError::Journey {
            journey: id.to_string(),
            source,
        }
    })
}

fn convert_line(dto: &LineDto) -> Result<Line, ConversionError> {
    Ok(Line {
        id: LineId::new(dto.id.clone()).map_err(DomainError::from)?,
        number: dto.number.clone(),
        background_color: dto.background_color.clone(),
        text_color: dto.text_color.clone(),
        picto_svg: non_empty(&dto.mode_svg),
        number_shape_svg: non_empty(&dto.number_shape_svg),
        importance: dto.importance,
    })
}

fn convert_stop(dto: &StopDto) -> Result<Stop, ConversionError> {
    let id = StopId::new(dto.id.clone()).map_err(DomainError::from)?;

    // Served lines: union over the physical stops, first-seen order
    let mut seen = HashSet::new();
    let lines = dto
        .stops
        .iter()
        .flat_map(|physical| physical.lines.iter())
        .filter(|line| seen.insert(*line))
        .filter_map(|line| LineId::new(line.clone()).ok())
        .collect();

    Ok(Stop {
        id,
        name: dto.name.clone(),
        position: Point::from_pair(dto.average_position),
        lines,
    })
}
