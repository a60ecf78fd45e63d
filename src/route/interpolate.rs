//! # Linear Route Interpolation
//!
//! Evenly spaced positions along the straight line between two waypoints.

use super::waypoint::Waypoint;

/// Decimal places kept on interpolated coordinates
pub const COORDINATE_DECIMALS: i32 = 6;

/// Round a coordinate to 6 decimal places
///
/// # Arguments
///
/// * `value` - Coordinate in decimal degrees
///
/// # Returns
///
/// * `f64` - Value rounded to the nearest 1e-6 degree
///
/// # Examples
///
/// ```
/// use rsrp_simulator::route::interpolate::round_coordinate;
///
/// assert_eq!(round_coordinate(37.5098149999), 37.509815);
/// ```
#[must_use]
pub fn round_coordinate(value: f64) -> f64 {
    let scale = 10f64.powi(COORDINATE_DECIMALS);
    (value * scale).round() / scale
}

/// Linearly blend two scalar values
fn lerp(v1: f64, v2: f64, ratio: f64) -> f64 {
    v1 + (v2 - v1) * ratio
}

/// Position on the segment from `start` to `end` at fractional `ratio`
///
/// Both coordinates are blended linearly and rounded to 6 decimal places.
/// A ratio of 0.0 yields `start`; a ratio of 1.0 yields `end`.
///
/// # Arguments
///
/// * `start` - Segment start waypoint
/// * `end` - Segment end waypoint
/// * `ratio` - Fraction of the segment travelled (0.0 to 1.0)
///
/// # Examples
///
/// ```
/// use rsrp_simulator::route::interpolate::point_between;
/// use rsrp_simulator::route::waypoint::Waypoint;
///
/// let mid = point_between(Waypoint::new(0.0, 0.0), Waypoint::new(10.0, 20.0), 0.5);
/// assert_eq!(mid, Waypoint::new(5.0, 10.0));
/// ```
#[must_use]
pub fn point_between(start: Waypoint, end: Waypoint, ratio: f64) -> Waypoint {
    Waypoint::new(
        round_coordinate(lerp(start.latitude, end.latitude, ratio)),
        round_coordinate(lerp(start.longitude, end.longitude, ratio)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Rounding Tests ====================

    #[test]
    fn test_round_coordinate_truncates_excess_digits() {
        assert_eq!(round_coordinate(37.1234564), 37.123456);
        assert_eq!(round_coordinate(37.1234566), 37.123457);
    }

    #[test]
    fn test_round_coordinate_negative_values() {
        assert_eq!(round_coordinate(-127.0976626), -127.097663);
        assert_eq!(round_coordinate(-0.0000004), 0.0);
    }

    #[test]
    fn test_round_coordinate_preserves_short_values() {
        assert_eq!(round_coordinate(37.5), 37.5);
        assert_eq!(round_coordinate(0.0), 0.0);
        assert_eq!(round_coordinate(-14.0), -14.0);
    }

    // ==================== Interpolation Tests ====================

    #[test]
    fn test_point_between_at_start() {
        let start = Waypoint::new(37.509815, 127.097662);
        let end = Waypoint::new(37.506635, 127.097452);
        assert_eq!(point_between(start, end, 0.0), start);
    }

    #[test]
    fn test_point_between_at_end() {
        let start = Waypoint::new(37.509815, 127.097662);
        let end = Waypoint::new(37.506635, 127.097452);
        assert_eq!(point_between(start, end, 1.0), end);
    }

    #[test]
    fn test_point_between_quarter_steps() {
        // Quarter steps along (0,0) -> (10,20) land on exact grid values
        let start = Waypoint::new(0.0, 0.0);
        let end = Waypoint::new(10.0, 20.0);

        assert_eq!(point_between(start, end, 0.0), Waypoint::new(0.0, 0.0));
        assert_eq!(point_between(start, end, 0.25), Waypoint::new(2.5, 5.0));
        assert_eq!(point_between(start, end, 0.5), Waypoint::new(5.0, 10.0));
        assert_eq!(point_between(start, end, 0.75), Waypoint::new(7.5, 15.0));
    }

    #[test]
    fn test_point_between_rounds_result() {
        // 1/3 of the way across a 1e-5 span needs rounding to 6 places
        let start = Waypoint::new(37.0, 127.0);
        let end = Waypoint::new(37.00001, 127.00001);
        let point = point_between(start, end, 1.0 / 3.0);
        assert_eq!(point.latitude, 37.000003);
        assert_eq!(point.longitude, 127.000003);
    }

    #[test]
    fn test_point_between_descending_coordinates() {
        let start = Waypoint::new(10.0, 20.0);
        let end = Waypoint::new(0.0, 0.0);
        assert_eq!(point_between(start, end, 0.5), Waypoint::new(5.0, 10.0));
    }
}
