//! Courses supplied by the lookup screen.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::coordinate::Coordinate;

/// Id of a course as reported by the lookup service (e.g. `way/123`).
///
/// Shared rather than copied when a selection clones its course.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CourseIdentifier(Arc<str>);

impl CourseIdentifier {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(id.as_ref().into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for CourseIdentifier {
    fn from(id: String) -> Self {
        Self(id.into())
    }
}

impl From<&str> for CourseIdentifier {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Course {
    pub id: CourseIdentifier,
    pub name: Arc<str>,
    pub location: Coordinate,
}

impl Course {
    pub fn new(id: impl Into<CourseIdentifier>, name: impl AsRef<str>, location: Coordinate) -> Self {
        Self {
            id: id.into(),
            name: name.as_ref().into(),
            location,
        }
    }
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum CourseError {
    #[error("Course not found: {0}")]
    NotFound(CourseIdentifier),
}

/// The latest course list and the course the player picked from it.
///
/// The selection is held by value, so refreshing the list never drops it.
#[derive(Clone, Debug, Default)]
pub struct CourseSelection {
    courses: Vec<Course>,
    selected: Option<Course>,
}

impl CourseSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn replace_courses(&mut self, courses: Vec<Course>) {
        debug!(count = courses.len(), "course list replaced");
        self.courses = courses;
    }

    pub fn select(&mut self, id: &CourseIdentifier) -> Result<&Course, CourseError> {
        let course = self
            .courses
            .iter()
            .find(|course| &course.id == id)
            .cloned()
            .ok_or_else(|| CourseError::NotFound(id.clone()))?;

        debug!(id = %course.id, name = %course.name, "course selected");
        Ok(&*self.selected.insert(course))
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Course> {
        self.selected.as_ref()
    }
}
