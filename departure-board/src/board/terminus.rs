//! Next arrival at each distinct branch terminus.

use std::collections::HashSet;

use crate::domain::{ResolvedJourney, StopId, TerminusArrival};

/// Find the next departure towards each genuinely new terminus.
///
/// A stop counts as a terminus only if it ends some journey and no journey
/// calls at it on the way elsewhere. The terminus of the journey at
/// index 1 is already shown as "next", so it is never reported. Journeys
/// are scanned from index 1; the first qualifying journey per terminus
/// wins and its leave time becomes the eta.
///
/// Fewer than two journeys yields nothing.
pub fn next_terminus_arrivals(journeys: &[ResolvedJourney]) -> Vec<TerminusArrival> {
    if journeys.len() < 2 {
        return Vec::new();
    }

    let next_terminus = journeys[1].terminus_id();

    let mut candidates: HashSet<&StopId> = journeys.iter().map(|j| j.terminus_id()).collect();
    for journey in journeys {
        let stops = journey.stops();
        for stop in &stops[..stops.len() - 1] {
            candidates.remove(&stop.id);
        }
    }

    let mut reported: HashSet<&StopId> = HashSet::new();
    let mut arrivals = Vec::new();

    for journey in &journeys[1..] {
        let terminus = journey.terminus_id();
        if candidates.contains(terminus) && terminus != next_terminus && reported.insert(terminus)
        {
            arrivals.push(TerminusArrival {
                terminus_id: terminus.clone(),
                eta: journey.departure.leaves_at,
            });
        }
    }

    arrivals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::{departure, journey};

    fn resolved(id: &str, stops: &[&str], mins: i64) -> ResolvedJourney {
        ResolvedJourney {
            departure: departure(id, stops[stops.len() - 1], mins),
            journey: journey(id, stops),
        }
    }

    fn termini(arrivals: &[TerminusArrival]) -> Vec<&str> {
        arrivals.iter().map(|a| a.terminus_id.as_str()).collect()
    }

    #[test]
    fn fewer_than_two_journeys() {
        assert!(next_terminus_arrivals(&[]).is_empty());
        assert!(next_terminus_arrivals(&[resolved("j0", &["O", "A"], 0)]).is_empty());
    }

    #[test]
    fn false_terminus_and_next_terminus_excluded() {
        // Terminuses T, T, U, T; U is passed through by j0
        let journeys = vec![
            resolved("j0", &["O", "U", "T"], 0),
            resolved("j1", &["O", "T"], 5),
            resolved("j2", &["O", "U"], 10),
            resolved("j3", &["O", "T"], 15),
        ];
        assert!(next_terminus_arrivals(&journeys).is_empty());
    }

    #[test]
    fn reports_new_termini_in_first_seen_order() {
        let journeys = vec![
            resolved("j0", &["O", "A"], 0),
            resolved("j1", &["O", "B"], 4),
            resolved("j2", &["O", "C"], 8),
            resolved("j3", &["O", "A"], 12),
            resolved("j4", &["O", "C"], 16),
            resolved("j5", &["O", "B"], 20),
        ];
        let arrivals = next_terminus_arrivals(&journeys);

        assert_eq!(termini(&arrivals), vec!["C", "A"]);
        assert_eq!(arrivals[0].eta, journeys[2].departure.leaves_at);
        assert_eq!(arrivals[1].eta, journeys[3].departure.leaves_at);
    }

    #[test]
    fn lead_journey_stops_invalidate_candidates() {
        // j0 continues through B, so B is not a terminus
        let journeys = vec![
            resolved("j0", &["O", "B", "Z"], 0),
            resolved("j1", &["O", "A"], 4),
            resolved("j2", &["O", "B"], 8),
        ];
        assert!(next_terminus_arrivals(&journeys).is_empty());
    }

    #[test]
    fn lead_terminus_not_reported_from_index_zero() {
        let journeys = vec![
            resolved("j0", &["O", "A"], 0),
            resolved("j1", &["O", "B"], 4),
        ];
        assert!(next_terminus_arrivals(&journeys).is_empty());
    }

    #[test]
    fn idempotent() {
        let journeys = vec![
            resolved("j0", &["O", "A"], 0),
            resolved("j1", &["O", "B"], 4),
            resolved("j2", &["O", "C"], 8),
        ];
        assert_eq!(
            next_terminus_arrivals(&journeys),
            next_terminus_arrivals(&journeys)
        );
    }
}
