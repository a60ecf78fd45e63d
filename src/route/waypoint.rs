//! # Waypoint Type
//!
//! Geographic anchor points that define a survey route.

/// A single latitude/longitude anchor on a survey route
///
/// Consecutive waypoints define the straight-line segments the simulated
/// device travels along. Coordinates are WGS84 decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    /// Latitude in decimal degrees (-90 to 90)
    pub latitude: f64,

    /// Longitude in decimal degrees (-180 to 180)
    pub longitude: f64,
}

impl Waypoint {
    /// Create a new waypoint
    ///
    /// # Arguments
    ///
    /// * `latitude` - Latitude in decimal degrees
    /// * `longitude` - Longitude in decimal degrees
    ///
    /// # Examples
    ///
    /// ```
    /// use rsrp_simulator::route::waypoint::Waypoint;
    ///
    /// let anchor = Waypoint::new(37.509815, 127.097662);
    /// assert_eq!(anchor.latitude, 37.509815);
    /// assert_eq!(anchor.longitude, 127.097662);
    /// ```
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}
