use crate::config::ViewConfig;
use crate::coordinate::Coordinate;
use crate::course::Course;

/// A rectangular map viewport: a center plus the visible span in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapRegion {
    pub center: Coordinate,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl MapRegion {
    pub fn around(center: Coordinate, delta: f64) -> Self {
        Self {
            center,
            latitude_delta: delta,
            longitude_delta: delta,
        }
    }
}

/// Pick the region the map should show.
///
/// A selected course wins over the device location, which wins over the
/// configured fallback.
pub fn display_region(
    course: Option<&Course>,
    location: Option<Coordinate>,
    config: &ViewConfig,
) -> MapRegion {
    match (course, location) {
        (Some(course), _) => MapRegion::around(course.location, config.course_delta),
        (None, Some(location)) => MapRegion::around(location, config.location_delta),
        (None, None) => MapRegion::around(config.fallback_center, config.fallback_delta),
    }
}
