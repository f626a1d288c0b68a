//! Nearest-neighbour lookup over geographic points.

use geo::{Distance, Haversine};

use crate::domain::Point;

/// Great-circle distance between two points, in metres.
pub fn distance_m(a: Point, b: Point) -> f64 {
    Haversine.distance(geo::Point::from(a), geo::Point::from(b))
}

/// Returns the candidate closest to `reference`, or `None` if there are none.
///
/// Ties go to the first candidate encountered.
pub fn nearest<'a, C>(
    reference: Point,
    candidates: &'a [C],
    coordinate_of: impl Fn(&C) -> Point,
) -> Option<&'a C> {
    let mut best: Option<(&C, f64)> = None;
    for candidate in candidates {
        let dist = distance_m(reference, coordinate_of(candidate));
        match best {
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => best = Some((candidate, dist)),
        }
    }
    best.map(|(c, _)| c)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHATELET: Point = Point::new(48.8584, 2.3470);
    const VERSAILLES: Point = Point::new(48.7994, 2.1286);
    const MASSY: Point = Point::new(48.7254, 2.2610);

    #[test]
    fn distance_is_symmetric_and_plausible() {
        let d = distance_m(CHATELET, VERSAILLES);
        assert!((d - distance_m(VERSAILLES, CHATELET)).abs() < 1e-6);
        // Roughly 17 km apart
        assert!(d > 15_000.0 && d < 19_000.0, "got {d}");
        assert_eq!(distance_m(MASSY, MASSY), 0.0);
    }

    #[test]
    fn empty_candidates() {
        let candidates: Vec<Point> = vec![];
        assert!(nearest(CHATELET, &candidates, |p| *p).is_none());
    }

    #[test]
    fn picks_closest() {
        let candidates = vec![("versailles", VERSAILLES), ("massy", MASSY)];
        let near_massy = Point::new(48.73, 2.27);
        let found = nearest(near_massy, &candidates, |c| c.1).unwrap();
        assert_eq!(found.0, "massy");
    }

    #[test]
    fn ties_go_to_first() {
        let candidates = vec![("a", MASSY), ("b", MASSY)];
        let found = nearest(CHATELET, &candidates, |c| c.1).unwrap();
        assert_eq!(found.0, "a");
    }
}
