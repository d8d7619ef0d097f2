//! Geographic coordinates and great-circle distance.

use geo::{Distance, HaversineMeasure};

/// Mean Earth radius used for every distance in a round, in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// A latitude/longitude pair in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Haversine distance to `other` in meters
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        haversine_distance(*self, *other)
    }
}

/// Great-circle surface distance between two coordinates in meters.
///
/// Symmetric in its arguments and zero only for identical coordinates.
pub fn haversine_distance(a: Coordinate, b: Coordinate) -> f64 {
    HaversineMeasure::new(EARTH_RADIUS_METERS).distance(geo::Point::from(a), geo::Point::from(b))
}

/// Render a distance the way shot labels show it, e.g. `212.4 m`.
pub fn format_distance(meters: f64) -> String {
    format!("{meters:.1} m")
}

impl From<geo::Point> for Coordinate {
    fn from(point: geo::Point) -> Self {
        Coordinate::new(point.y(), point.x())
    }
}

impl From<Coordinate> for geo::Point {
    fn from(coordinate: Coordinate) -> Self {
        geo::Point::new(coordinate.longitude, coordinate.latitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_distance_to_self_is_zero() {
        for point in [
            Coordinate::new(0.0, 0.0),
            Coordinate::new(40.7128, -74.0060),
            Coordinate::new(-33.8688, 151.2093),
            Coordinate::new(89.9, 179.9),
        ] {
            assert_eq!(haversine_distance(point, point), 0.0);
        }
    }

    #[test]
    fn test_distance_is_symmetric() {
        let tee = Coordinate::new(56.3480, -2.8030);
        let green = Coordinate::new(56.3445, -2.8071);

        assert_relative_eq!(
            haversine_distance(tee, green),
            haversine_distance(green, tee),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_one_degree_of_latitude_at_equator() {
        let dist = haversine_distance(Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 0.0));
        assert_abs_diff_eq!(dist, 111_195.0, epsilon = 1.0);
    }

    #[test]
    fn test_long_distance() {
        // Distance from NYC to LA is approximately 3,936 km
        let nyc = Coordinate::new(40.7128, -74.0060);
        let la = Coordinate::new(34.0522, -118.2437);

        let dist = nyc.distance_to(&la);
        assert!((dist - 3_936_000.0).abs() < 50_000.0); // Within 50km
    }

    #[test]
    fn test_distance_uses_round_earth_radius() {
        // geo's default mean radius (6,371,008.8 m) would be off by ~0.15 m here
        let dist = haversine_distance(Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 0.0));
        assert_relative_eq!(dist, EARTH_RADIUS_METERS.to_radians(), max_relative = 1e-12);
    }

    #[test]
    fn test_antipodal_points_stay_finite() {
        let dist = haversine_distance(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 180.0));
        assert_relative_eq!(dist, std::f64::consts::PI * EARTH_RADIUS_METERS, max_relative = 1e-9);
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(212.44), "212.4 m");
        assert_eq!(format_distance(0.0), "0.0 m");
    }

    #[test]
    fn test_geo_point_conversion() {
        let coordinate = Coordinate::new(40.7505, -73.9935);
        let point: geo::Point = coordinate.into();

        assert_eq!(point.x(), -73.9935);
        assert_eq!(point.y(), 40.7505);
        assert_eq!(Coordinate::from(point), coordinate);
    }
}
