//! Plain records handed across the FFI boundary.

use fairway_core::{Coordinate, Course, MapRegion, PointRole, RoundTracker, Shot, format_distance};

#[derive(Clone, Copy, Debug, PartialEq, uniffi::Record)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<Coordinate> for GeoPoint {
    fn from(coordinate: Coordinate) -> Self {
        Self {
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
        }
    }
}

impl From<GeoPoint> for Coordinate {
    fn from(point: GeoPoint) -> Self {
        Coordinate::new(point.latitude, point.longitude)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum PointTarget {
    Start,
    End,
}

impl From<PointTarget> for PointRole {
    fn from(target: PointTarget) -> Self {
        match target {
            PointTarget::Start => PointRole::Start,
            PointTarget::End => PointRole::End,
        }
    }
}

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct ShotRecord {
    pub id: u64,
    pub club: String,
    pub start: GeoPoint,
    pub end: GeoPoint,
    pub distance_meters: f64,
    /// e.g. `7I 152.3 m`
    pub label: String,
}

impl From<&Shot> for ShotRecord {
    fn from(shot: &Shot) -> Self {
        Self {
            id: shot.id.0,
            club: shot.club.label().to_owned(),
            start: shot.start.into(),
            end: shot.end.into(),
            distance_meters: shot.distance,
            label: shot.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct CourseRecord {
    pub id: String,
    pub name: String,
    pub location: GeoPoint,
}

impl From<&Course> for CourseRecord {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id.to_string(),
            name: course.name.to_string(),
            location: course.location.into(),
        }
    }
}

impl From<CourseRecord> for Course {
    fn from(record: CourseRecord) -> Self {
        Course::new(record.id, record.name, record.location.into())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, uniffi::Record)]
pub struct RegionRecord {
    pub center: GeoPoint,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl From<MapRegion> for RegionRecord {
    fn from(region: MapRegion) -> Self {
        Self {
            center: region.center.into(),
            latitude_delta: region.latitude_delta,
            longitude_delta: region.longitude_delta,
        }
    }
}

/// Everything the round screen renders.
#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct RoundSnapshot {
    pub current_hole: u32,
    pub hole_count: u32,
    pub swing_count: u32,
    pub shots: Vec<ShotRecord>,
    pub pending_start: Option<GeoPoint>,
    pub pending_end: Option<GeoPoint>,
    pub pending_distance_meters: Option<f64>,
    pub pending_distance_label: Option<String>,
    pub staged_point: Option<GeoPoint>,
    pub selected_club: Option<String>,
    pub can_commit: bool,
    pub is_final_hole: bool,
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

impl From<&RoundTracker> for RoundSnapshot {
    fn from(tracker: &RoundTracker) -> Self {
        let state = tracker.state();
        let pending_distance = state.pending_distance();

        Self {
            current_hole: to_u32(state.current_hole()),
            hole_count: to_u32(state.hole_count()),
            swing_count: tracker.current_swing_count(),
            shots: tracker.current_shots().iter().map(ShotRecord::from).collect(),
            pending_start: state.pending_start().map(GeoPoint::from),
            pending_end: state.pending_end().map(GeoPoint::from),
            pending_distance_meters: pending_distance,
            pending_distance_label: pending_distance.map(format_distance),
            staged_point: state.staged_point().map(GeoPoint::from),
            selected_club: state.selected_club().map(|club| club.label().to_owned()),
            can_commit: tracker.can_commit(),
            is_final_hole: tracker.is_final_hole(),
        }
    }
}
