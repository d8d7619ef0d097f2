use std::fmt;

use crate::club::Club;
use crate::coordinate::{Coordinate, format_distance};

/// Identifies a shot within one tracker. Never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShotId(pub u64);

impl fmt::Display for ShotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A committed swing with the club used and where it went.
#[derive(Clone, Debug, PartialEq)]
pub struct Shot {
    pub id: ShotId,
    pub club: Club,
    pub start: Coordinate,
    pub end: Coordinate,
    /// Meters between `start` and `end`
    pub distance: f64,
}

impl Shot {
    pub(crate) fn new(id: ShotId, club: Club, start: Coordinate, end: Coordinate) -> Self {
        Self {
            id,
            club,
            start,
            end,
            distance: start.distance_to(&end),
        }
    }
}

impl fmt::Display for Shot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.club, format_distance(self.distance))
    }
}
