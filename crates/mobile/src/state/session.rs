use std::str::FromStr;
use std::sync::{Arc, Mutex, MutexGuard};

use fairway_core::{
    Club, CourseIdentifier, CourseSelection, LastKnownLocation, RoundConfig, RoundTracker,
    ViewConfig, display_region,
};

use crate::state::{
    SessionError,
    records::{CourseRecord, GeoPoint, PointTarget, RegionRecord, RoundSnapshot},
};

/// Optional JSON document accepted by [`RoundSession::with_config_json`].
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct SessionConfig {
    round: RoundConfig,
    view: ViewConfig,
}

struct SessionInner {
    tracker: RoundTracker,
    courses: CourseSelection,
    location: LastKnownLocation,
    view: ViewConfig,
}

/// One round on the device, shared with the UI thread.
#[derive(uniffi::Object)]
pub struct RoundSession {
    inner: Mutex<SessionInner>,
}

impl RoundSession {
    fn from_parts(tracker: RoundTracker, view: ViewConfig) -> Self {
        Self {
            inner: Mutex::new(SessionInner {
                tracker,
                courses: CourseSelection::new(),
                location: LastKnownLocation::new(),
                view,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn with_tracker<T>(&self, f: impl FnOnce(&mut RoundTracker) -> T) -> T {
        f(&mut self.lock().tracker)
    }
}

#[uniffi::export]
impl RoundSession {
    #[uniffi::constructor]
    pub fn new() -> Self {
        Self::from_parts(RoundTracker::new(), ViewConfig::default())
    }

    #[uniffi::constructor]
    pub fn with_config_json(json: String) -> Result<Arc<Self>, SessionError> {
        let config: SessionConfig =
            serde_json::from_str(&json).map_err(|e| SessionError::InvalidConfig(e.to_string()))?;
        let tracker = RoundTracker::with_config(&config.round)?;

        Ok(Arc::new(Self::from_parts(tracker, config.view)))
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot::from(&self.lock().tracker)
    }

    // points

    pub fn set_pending_start(&self, point: GeoPoint) {
        self.with_tracker(|tracker| tracker.set_pending_start(point.into()));
    }

    /// Map tap
    pub fn set_pending_end(&self, point: GeoPoint) {
        self.with_tracker(|tracker| tracker.set_pending_end(point.into()));
    }

    pub fn set_start_from_location(&self) -> Result<GeoPoint, SessionError> {
        let mut inner = self.lock();
        let SessionInner {
            tracker, location, ..
        } = &mut *inner;

        Ok(tracker.set_start_from_location(&*location)?.into())
    }

    pub fn reset_points(&self) {
        self.with_tracker(RoundTracker::reset_pending);
    }

    /// Map long press
    pub fn stage_point(&self, point: GeoPoint) {
        self.with_tracker(|tracker| tracker.stage_point(point.into()));
    }

    pub fn confirm_staged(&self, target: PointTarget) {
        self.with_tracker(|tracker| tracker.confirm_staged(target.into()));
    }

    pub fn cancel_staged(&self) {
        self.with_tracker(RoundTracker::cancel_staged);
    }

    // swings

    pub fn select_club(&self, label: String) -> Result<(), SessionError> {
        let club = Club::from_str(&label).map_err(|_| SessionError::UnknownClub(label))?;
        self.with_tracker(|tracker| tracker.select_club(club));
        Ok(())
    }

    /// Id of the recorded shot, or `None` when the shot was incomplete
    pub fn commit_shot(&self) -> Option<u64> {
        self.with_tracker(|tracker| tracker.commit_shot().map(|id| id.0))
    }

    pub fn add_swing(&self) {
        self.with_tracker(RoundTracker::add_swing);
    }

    pub fn undo_last_swing(&self) {
        self.with_tracker(RoundTracker::undo_last_swing);
    }

    // holes

    pub fn go_to_hole(&self, number: u32) {
        self.with_tracker(|tracker| tracker.go_to_hole(number as usize));
    }

    pub fn next_hole(&self) {
        self.with_tracker(RoundTracker::next_hole);
    }

    pub fn previous_hole(&self) {
        self.with_tracker(RoundTracker::previous_hole);
    }

    pub fn set_hole_count(&self, count: u32) -> Result<(), SessionError> {
        Ok(self.with_tracker(|tracker| tracker.set_hole_count(count as usize))?)
    }

    // location

    pub fn record_location_fix(&self, point: GeoPoint) {
        self.lock().location.record_fix(point.into());
    }

    pub fn record_location_denied(&self) {
        self.lock().location.record_denied();
    }

    // courses

    pub fn set_courses(&self, courses: Vec<CourseRecord>) {
        self.lock()
            .courses
            .replace_courses(courses.into_iter().map(Into::into).collect());
    }

    pub fn select_course(&self, id: String) -> Result<CourseRecord, SessionError> {
        let mut inner = self.lock();
        let course = inner.courses.select(&CourseIdentifier::new(id))?;

        Ok(CourseRecord::from(course))
    }

    pub fn clear_course(&self) {
        self.lock().courses.clear_selection();
    }

    pub fn display_region(&self) -> RegionRecord {
        let inner = self.lock();
        display_region(
            inner.courses.selected(),
            inner.location.coordinate(),
            &inner.view,
        )
        .into()
    }
}
