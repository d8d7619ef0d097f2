//! # fairway-core
//!
//! Shot tracking for a round of golf: staged start/end points, club
//! attribution, per-hole shot history and swing counts.
//!
//! ## Example
//!
//! ```
//! use fairway_core::prelude::*;
//!
//! let mut round = RoundTracker::new();
//! round.set_pending_start(Coordinate::new(40.0, -74.0));
//! round.set_pending_end(Coordinate::new(40.001, -74.0));
//! round.select_club(Club::SevenIron);
//!
//! assert!(round.commit_shot().is_some());
//! assert_eq!(round.current_swing_count(), 1);
//! assert_eq!(round.current_shots().len(), 1);
//! ```

pub mod club;
pub mod config;
pub mod coordinate;
pub mod course;
pub mod location;
pub mod region;
pub mod round;

pub mod prelude {
    pub use crate::club::Club;
    pub use crate::config::{RoundConfig, ViewConfig};
    pub use crate::coordinate::{Coordinate, EARTH_RADIUS_METERS, format_distance, haversine_distance};
    pub use crate::course::{Course, CourseError, CourseIdentifier, CourseSelection};
    pub use crate::location::{LastKnownLocation, LocationError, LocationProvider};
    pub use crate::region::{MapRegion, display_region};
    pub use crate::round::{Hole, MAX_HOLES, PointRole, RoundError, RoundState, RoundTracker, Shot, ShotId};
}

pub use prelude::*;
