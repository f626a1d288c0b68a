//! Upcoming departures at the rider's stop.

use chrono::{DateTime, Utc};

use super::{JourneyId, Point};

/// Number of leading journey-code characters that identify a route variant.
const VARIANT_PREFIX_LEN: usize = 2;

/// Train formation length, when the provider reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleLength {
    Short,
    Long,
}

impl VehicleLength {
    /// Parse the provider's `"SHORT"` / `"LONG"` tag.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "SHORT" => Some(VehicleLength::Short),
            "LONG" => Some(VehicleLength::Long),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleLength::Short => "SHORT",
            VehicleLength::Long => "LONG",
        }
    }
}

/// Where a departure is heading.
#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    /// Display label, e.g. "Saint-Rémy-lès-Chevreuse".
    pub name: String,
    /// Average position of the destination's stop area.
    pub average_position: Point,
}

/// One upcoming vehicle at the queried stop.
///
/// Constructed fresh for every query. The provider only hands out
/// departures whose leave time is in the future.
#[derive(Debug, Clone, PartialEq)]
pub struct Departure {
    /// Id of the journey this departure belongs to.
    pub id: JourneyId,
    pub destination: Destination,
    pub leaves_at: DateTime<Utc>,
    pub arrives_at: DateTime<Utc>,
    /// Groups departures that follow the same physical branch.
    pub branch_hash: Option<String>,
    /// Short mission code; its first two characters name the route variant.
    pub journey_code: Option<String>,
    pub vehicle_length: Option<VehicleLength>,
}

impl Departure {
    /// Key under which near-duplicate departures collapse.
    ///
    /// The first two characters of the journey code when there is one,
    /// otherwise the full destination name.
    ///
    /// ```
    /// # use departure_board::domain::{Departure, Destination, JourneyId, Point};
    /// # use chrono::Utc;
    /// let mut d = Departure {
    ///     id: JourneyId::new("j1").unwrap(),
    ///     destination: Destination { name: "Massy".into(), average_position: Point::ORIGIN },
    ///     leaves_at: Utc::now(),
    ///     arrives_at: Utc::now(),
    ///     branch_hash: None,
    ///     journey_code: Some("A1-123".into()),
    ///     vehicle_length: None,
    /// };
    /// assert_eq!(d.uniqueness_key(), "A1");
    /// d.journey_code = None;
    /// assert_eq!(d.uniqueness_key(), "Massy");
    /// ```
    pub fn uniqueness_key(&self) -> &str {
        match self.journey_code.as_deref() {
            Some(code) if !code.is_empty() => {
                let end = code
                    .char_indices()
                    .nth(VARIANT_PREFIX_LEN)
                    .map_or(code.len(), |(i, _)| i);
                &code[..end]
            }
            _ => &self.destination.name,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::departure;
    use super::*;

    #[test]
    fn key_uses_code_prefix() {
        let mut a = departure("j1", "Massy", 0);
        let mut b = departure("j2", "Dourdan", 5);
        a.journey_code = Some("A1-123".into());
        b.journey_code = Some("A1-999".into());
        assert_eq!(a.uniqueness_key(), "A1");
        assert_eq!(a.uniqueness_key(), b.uniqueness_key());
    }

    #[test]
    fn key_falls_back_to_destination() {
        let d = departure("j1", "Versailles Château", 0);
        assert_eq!(d.uniqueness_key(), "Versailles Château");
    }

    #[test]
    fn empty_code_falls_back_to_destination() {
        let mut d = departure("j1", "Pontoise", 0);
        d.journey_code = Some(String::new());
        assert_eq!(d.uniqueness_key(), "Pontoise");
    }

    #[test]
    fn short_code_is_whole_key() {
        let mut d = departure("j1", "Pontoise", 0);
        d.journey_code = Some("Z".into());
        assert_eq!(d.uniqueness_key(), "Z");
    }

    #[test]
    fn multibyte_code_prefix() {
        let mut d = departure("j1", "Pontoise", 0);
        d.journey_code = Some("ÉÀX".into());
        assert_eq!(d.uniqueness_key(), "ÉÀ");
    }

    #[test]
    fn vehicle_length_parse() {
        assert_eq!(VehicleLength::parse("SHORT"), Some(VehicleLength::Short));
        assert_eq!(VehicleLength::parse("LONG"), Some(VehicleLength::Long));
        assert_eq!(VehicleLength::parse("long"), None);
        assert_eq!(VehicleLength::Long.as_str(), "LONG");
    }
}
