use crate::coordinate::Coordinate;

/// Settings applied when a round starts.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RoundConfig {
    /// Number of holes a fresh round is laid out for
    pub default_hole_count: usize,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            default_hole_count: 9,
        }
    }
}

/// How far the map zooms in on whatever it is centered on.
///
/// Deltas are the latitude/longitude span of the visible region in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewConfig {
    pub course_delta: f64,
    pub location_delta: f64,
    /// Shown before a course is picked or a location fix arrives
    pub fallback_center: Coordinate,
    pub fallback_delta: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            course_delta: 0.001,
            location_delta: 0.01,
            fallback_center: Coordinate::new(37.78825, -122.4324),
            fallback_delta: 0.01,
        }
    }
}
