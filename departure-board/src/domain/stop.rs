//! Physical stops.

use super::{LineId, Point, StopId};

/// A station along a journey.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub id: StopId,
    pub name: String,
    pub position: Point,
    /// Lines serving this stop, in provider order.
    pub lines: Vec<LineId>,
}

impl Stop {
    pub fn new(id: StopId, name: impl Into<String>, position: Point) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            lines: Vec::new(),
        }
    }
}
