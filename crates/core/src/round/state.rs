use crate::club::Club;
use crate::coordinate::{Coordinate, haversine_distance};
use crate::round::shot::Shot;

/// Everything recorded for one hole.
///
/// `swings` is its own tally: manual swings raise it without adding a shot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Hole {
    pub(crate) shots: Vec<Shot>,
    pub(crate) swings: u32,
}

impl Hole {
    /// Committed shots in the order they were played
    pub fn shots(&self) -> &[Shot] {
        &self.shots
    }

    pub fn swings(&self) -> u32 {
        self.swings
    }
}

/// The shot-tracking state of a round.
///
/// Holes are numbered from 1; `holes[n - 1]` belongs to hole `n`.
#[derive(Clone, Debug, PartialEq)]
pub struct RoundState {
    pub(crate) holes: Vec<Hole>,
    pub(crate) current_hole: usize,
    pub(crate) pending_start: Option<Coordinate>,
    pub(crate) pending_end: Option<Coordinate>,
    pub(crate) staged_point: Option<Coordinate>,
    pub(crate) selected_club: Option<Club>,
}

impl RoundState {
    /// `hole_count` must be positive.
    pub(crate) fn new(hole_count: usize) -> Self {
        debug_assert!(hole_count > 0);
        Self {
            holes: vec![Hole::default(); hole_count],
            current_hole: 1,
            pending_start: None,
            pending_end: None,
            staged_point: None,
            selected_club: None,
        }
    }

    pub fn hole_count(&self) -> usize {
        self.holes.len()
    }

    pub fn current_hole(&self) -> usize {
        self.current_hole
    }

    pub fn holes(&self) -> &[Hole] {
        &self.holes
    }

    /// Look up a hole by its 1-based number
    pub fn hole(&self, number: usize) -> Option<&Hole> {
        number.checked_sub(1).and_then(|index| self.holes.get(index))
    }

    pub fn pending_start(&self) -> Option<Coordinate> {
        self.pending_start
    }

    pub fn pending_end(&self) -> Option<Coordinate> {
        self.pending_end
    }

    /// Distance between the pending points, present only when both are set.
    ///
    /// Computed on read so it can never disagree with the points.
    pub fn pending_distance(&self) -> Option<f64> {
        Some(haversine_distance(self.pending_start?, self.pending_end?))
    }

    /// The long-pressed point waiting to be assigned a role
    pub fn staged_point(&self) -> Option<Coordinate> {
        self.staged_point
    }

    pub fn selected_club(&self) -> Option<Club> {
        self.selected_club
    }

    pub(crate) fn hole_mut(&mut self) -> &mut Hole {
        let index = self.current_hole - 1;
        &mut self.holes[index]
    }

    pub(crate) fn current(&self) -> &Hole {
        &self.holes[self.current_hole - 1]
    }
}
