//! Device location as seen by the round.
//!
//! The host platform owns permissions and GPS; it reports outcomes here and
//! the round only ever sees a resolved coordinate or an error.

use tracing::debug;

use crate::coordinate::Coordinate;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    #[error("Permission to access location was denied")]
    PermissionDenied,

    #[error("Location fix unavailable")]
    Unavailable,
}

pub trait LocationProvider {
    fn current_location(&self) -> Result<Coordinate, LocationError>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum Fix {
    #[default]
    Pending,
    Located(Coordinate),
    Denied,
}

/// Caches the most recent report from the platform location service.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LastKnownLocation {
    fix: Fix,
}

impl LastKnownLocation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_fix(&mut self, coordinate: Coordinate) {
        debug!(?coordinate, "location fix recorded");
        self.fix = Fix::Located(coordinate);
    }

    pub fn record_denied(&mut self) {
        debug!("location permission denied");
        self.fix = Fix::Denied;
    }

    pub fn coordinate(&self) -> Option<Coordinate> {
        match self.fix {
            Fix::Located(coordinate) => Some(coordinate),
            Fix::Pending | Fix::Denied => None,
        }
    }
}

impl LocationProvider for LastKnownLocation {
    fn current_location(&self) -> Result<Coordinate, LocationError> {
        match self.fix {
            Fix::Located(coordinate) => Ok(coordinate),
            Fix::Pending => Err(LocationError::Unavailable),
            Fix::Denied => Err(LocationError::PermissionDenied),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_report_is_unavailable() {
        let location = LastKnownLocation::new();
        assert_eq!(location.current_location(), Err(LocationError::Unavailable));
        assert_eq!(location.coordinate(), None);
    }

    #[test]
    fn test_latest_report_wins() {
        let mut location = LastKnownLocation::new();
        location.record_fix(Coordinate::new(1.0, 2.0));
        assert_eq!(location.current_location(), Ok(Coordinate::new(1.0, 2.0)));

        location.record_denied();
        assert_eq!(location.current_location(), Err(LocationError::PermissionDenied));

        location.record_fix(Coordinate::new(3.0, 4.0));
        assert_eq!(location.coordinate(), Some(Coordinate::new(3.0, 4.0)));
    }
}
