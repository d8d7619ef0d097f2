//! Round tracking: staged shot points, club attribution, and per-hole
//! shot history and swing counts.
//!
//! Every operation runs to completion synchronously. Operations whose
//! preconditions are not met (committing without both points and a club,
//! confirming with nothing staged) leave the state untouched.

use tracing::{debug, trace, warn};

use crate::club::Club;
use crate::config::RoundConfig;
use crate::coordinate::Coordinate;
use crate::location::{LocationError, LocationProvider};

mod shot;
mod state;

pub use shot::{Shot, ShotId};
pub use state::{Hole, RoundState};

/// Largest hole count a round can be laid out for.
pub const MAX_HOLES: usize = 72;

#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum RoundError {
    #[error("A round needs at least one hole")]
    ZeroHoleCount,

    #[error("A round can have at most {max} holes, got {count}")]
    TooManyHoles { count: usize, max: usize },
}

fn check_hole_count(count: usize) -> Result<usize, RoundError> {
    match count {
        0 => Err(RoundError::ZeroHoleCount),
        count if count > MAX_HOLES => Err(RoundError::TooManyHoles {
            count,
            max: MAX_HOLES,
        }),
        count => Ok(count),
    }
}

/// Which end of the next shot a staged point becomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointRole {
    Start,
    End,
}

/// Owns one round's state and applies user events to it.
#[derive(Clone, Debug)]
pub struct RoundTracker {
    state: RoundState,
    next_shot_id: u64,
}

impl Default for RoundTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundTracker {
    /// A nine hole round with nothing recorded
    pub fn new() -> Self {
        Self {
            state: RoundState::new(RoundConfig::default().default_hole_count),
            next_shot_id: 1,
        }
    }

    pub fn with_config(config: &RoundConfig) -> Result<Self, RoundError> {
        let count = check_hole_count(config.default_hole_count)?;

        Ok(Self {
            state: RoundState::new(count),
            next_shot_id: 1,
        })
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    // ------------------------------------------------------------------
    // Pending points
    // ------------------------------------------------------------------

    pub fn set_pending_start(&mut self, coordinate: Coordinate) {
        trace!(?coordinate, "pending start set");
        self.state.pending_start = Some(coordinate);
    }

    /// Where a single tap on the map lands.
    pub fn set_pending_end(&mut self, coordinate: Coordinate) {
        trace!(?coordinate, "pending end set");
        self.state.pending_end = Some(coordinate);
    }

    /// Use the device position as the start of the next shot.
    ///
    /// On failure the pending start is left as it was.
    pub fn set_start_from_location(
        &mut self,
        provider: &dyn LocationProvider,
    ) -> Result<Coordinate, LocationError> {
        match provider.current_location() {
            Ok(coordinate) => {
                self.set_pending_start(coordinate);
                Ok(coordinate)
            }
            Err(error) => {
                warn!(%error, "could not start shot from device location");
                Err(error)
            }
        }
    }

    pub fn clear_pending(&mut self) {
        trace!("pending points cleared");
        self.state.pending_start = None;
        self.state.pending_end = None;
    }

    /// The "reset points" action.
    pub fn reset_pending(&mut self) {
        self.clear_pending();
    }

    // ------------------------------------------------------------------
    // Long-press staging
    // ------------------------------------------------------------------

    pub fn stage_point(&mut self, coordinate: Coordinate) {
        self.state.staged_point = Some(coordinate);
    }

    /// Hand the staged point to the pending start or end and clear the stage.
    pub fn confirm_staged(&mut self, role: PointRole) {
        let Some(coordinate) = self.state.staged_point.take() else {
            return;
        };

        match role {
            PointRole::Start => self.set_pending_start(coordinate),
            PointRole::End => self.set_pending_end(coordinate),
        }
    }

    pub fn cancel_staged(&mut self) {
        self.state.staged_point = None;
    }

    // ------------------------------------------------------------------
    // Shots and swings
    // ------------------------------------------------------------------

    pub fn select_club(&mut self, club: Club) {
        self.state.selected_club = Some(club);
    }

    /// Record the pending shot on the current hole.
    ///
    /// Returns `None` without touching anything unless both points and a club
    /// are set. On success the end point becomes the next shot's start.
    pub fn commit_shot(&mut self) -> Option<ShotId> {
        let (Some(start), Some(end), Some(club)) = (
            self.state.pending_start,
            self.state.pending_end,
            self.state.selected_club,
        ) else {
            debug!("commit ignored: shot is incomplete");
            return None;
        };

        let id = ShotId(self.next_shot_id);
        self.next_shot_id += 1;

        let shot = Shot::new(id, club, start, end);
        debug!(
            hole = self.state.current_hole,
            %id,
            %club,
            distance = shot.distance,
            "shot committed"
        );

        let hole = self.state.hole_mut();
        hole.shots.push(shot);
        hole.swings += 1;

        self.state.pending_start = Some(end);
        self.state.pending_end = None;

        Some(id)
    }

    /// Count a swing that was not mapped.
    pub fn add_swing(&mut self) {
        let hole = self.state.hole_mut();
        hole.swings += 1;
        trace!(swings = hole.swings, "swing added");
    }

    /// Drop the latest shot (if any) and one swing (floored at zero).
    ///
    /// The two are independent: the removed shot need not be the source of
    /// the removed swing when manual swings were interleaved.
    pub fn undo_last_swing(&mut self) {
        let current_hole = self.state.current_hole;
        let hole = self.state.hole_mut();

        let removed = hole.shots.pop();
        hole.swings = hole.swings.saturating_sub(1);

        debug!(
            hole = current_hole,
            removed = ?removed.map(|shot| shot.id),
            swings = hole.swings,
            "last swing undone"
        );
    }

    // ------------------------------------------------------------------
    // Holes
    // ------------------------------------------------------------------

    /// Jump to hole `number`, clamped to the round.
    pub fn go_to_hole(&mut self, number: usize) {
        self.state.current_hole = number.clamp(1, self.state.hole_count());
    }

    pub fn next_hole(&mut self) {
        self.go_to_hole(self.state.current_hole.saturating_add(1));
    }

    pub fn previous_hole(&mut self) {
        self.go_to_hole(self.state.current_hole.saturating_sub(1));
    }

    /// Re-lay the round for `count` holes.
    ///
    /// Discards every shot and swing count and returns to hole 1. Pending
    /// points, the staged point and the selected club are kept.
    pub fn set_hole_count(&mut self, count: usize) -> Result<(), RoundError> {
        let count = check_hole_count(count)?;

        debug!(
            from = self.state.hole_count(),
            to = count,
            "hole count changed, round history reset"
        );
        self.state.holes = vec![Hole::default(); count];
        self.state.current_hole = 1;

        Ok(())
    }

    // ------------------------------------------------------------------
    // Read views
    // ------------------------------------------------------------------

    pub fn current_shots(&self) -> &[Shot] {
        self.state.current().shots()
    }

    pub fn current_swing_count(&self) -> u32 {
        self.state.current().swings()
    }

    pub fn is_final_hole(&self) -> bool {
        self.state.current_hole == self.state.hole_count()
    }

    pub fn can_commit(&self) -> bool {
        self.state.pending_start.is_some()
            && self.state.pending_end.is_some()
            && self.state.selected_club.is_some()
    }
}
