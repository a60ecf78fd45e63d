//! # Configuration Module
//!
//! Run parameters for one trace generation, validated before use.
//!
//! There is no configuration file; runs are parameterized in code from the
//! preset routes and the defaults below.

use chrono::NaiveDateTime;

use crate::error::{Result, RsrpSimulatorError};
use crate::route::presets::SEOKCHON_LAKE;
use crate::route::waypoint::Waypoint;
use crate::trace::record::TIMESTAMP_FORMAT;

/// Default interpolated points per route segment
pub const DEFAULT_POINTS_PER_SEGMENT: u32 = 80;

/// Default seconds advanced per generated row
pub const DEFAULT_INTERVAL_SECS: u32 = 1;

/// Default start of the series, the first recorded Seokchon Lake survey lap
pub const DEFAULT_START_TIME: &str = "2025-11-08 14:00:00";

/// Parameters of one generation run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Ordered route anchors; consecutive pairs form the travelled segments
    pub waypoints: Vec<Waypoint>,

    /// Interpolated points per segment
    pub points_per_segment: u32,

    /// Seconds advanced per generated row
    pub interval_secs: u32,

    /// Timestamp of the first row
    pub start_time: NaiveDateTime,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            waypoints: SEOKCHON_LAKE.to_vec(),
            points_per_segment: DEFAULT_POINTS_PER_SEGMENT,
            interval_secs: DEFAULT_INTERVAL_SECS,
            start_time: default_start_time(),
        }
    }
}

fn default_start_time() -> NaiveDateTime {
    NaiveDateTime::parse_from_str(DEFAULT_START_TIME, TIMESTAMP_FORMAT).unwrap_or_default()
}

impl RunConfig {
    /// Validate configuration values
    ///
    /// # Returns
    ///
    /// * `Result<()>` - Ok if valid, Err if invalid
    ///
    /// # Errors
    ///
    /// Returns error if the route has fewer than 2 waypoints, if any anchor
    /// coordinate is out of geographic range, or if the interpolation
    /// density or row interval is zero.
    pub fn validate(&self) -> Result<()> {
        if self.waypoints.len() < 2 {
            return Err(RsrpSimulatorError::Config(
                "route must contain at least 2 waypoints".to_string(),
            ));
        }

        if self.points_per_segment == 0 {
            return Err(RsrpSimulatorError::Config(
                "points_per_segment must be greater than 0".to_string(),
            ));
        }

        if self.interval_secs == 0 {
            return Err(RsrpSimulatorError::Config(
                "interval_secs must be greater than 0".to_string(),
            ));
        }

        for (index, point) in self.waypoints.iter().enumerate() {
            if !(-90.0..=90.0).contains(&point.latitude) {
                return Err(RsrpSimulatorError::Config(format!(
                    "waypoint {} latitude {} must be between -90 and 90",
                    index, point.latitude
                )));
            }

            if !(-180.0..=180.0).contains(&point.longitude) {
                return Err(RsrpSimulatorError::Config(format!(
                    "waypoint {} longitude {} must be between -180 and 180",
                    index, point.longitude
                )));
            }
        }

        Ok(())
    }

    /// Number of rows one run of this configuration produces
    ///
    /// # Examples
    ///
    /// ```
    /// use rsrp_simulator::config::RunConfig;
    ///
    /// // 6 segments of 80 points each
    /// assert_eq!(RunConfig::default().total_rows(), 480);
    /// ```
    #[must_use]
    pub fn total_rows(&self) -> usize {
        self.waypoints.len().saturating_sub(1) * self.points_per_segment as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_valid_config() -> RunConfig {
        RunConfig::default()
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = RunConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_values() {
        let config = RunConfig::default();
        assert_eq!(config.waypoints.len(), 7);
        assert_eq!(config.points_per_segment, 80);
        assert_eq!(config.interval_secs, 1);

        let formatted = config.start_time.format(TIMESTAMP_FORMAT).to_string();
        assert_eq!(formatted, DEFAULT_START_TIME);
    }

    #[test]
    fn test_default_route_is_seokchon_lake() {
        let config = RunConfig::default();
        assert_eq!(config.waypoints, SEOKCHON_LAKE.to_vec());
    }

    #[test]
    fn test_empty_route_is_invalid() {
        let mut config = create_valid_config();
        config.waypoints = vec![];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_single_waypoint_route_is_invalid() {
        let mut config = create_valid_config();
        config.waypoints = vec![Waypoint::new(0.0, 0.0)];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_two_waypoint_route_is_valid() {
        let mut config = create_valid_config();
        config.waypoints = vec![Waypoint::new(0.0, 0.0), Waypoint::new(1.0, 1.0)];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_points_per_segment_is_invalid() {
        let mut config = create_valid_config();
        config.points_per_segment = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_interval_is_invalid() {
        let mut config = create_valid_config();
        config.interval_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_latitude_out_of_range_is_invalid() {
        let mut config = create_valid_config();
        config.waypoints[2] = Waypoint::new(90.5, 127.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_longitude_out_of_range_is_invalid() {
        let mut config = create_valid_config();
        config.waypoints[2] = Waypoint::new(37.5, -180.5);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_boundary_coordinates_are_valid() {
        let mut config = create_valid_config();
        config.waypoints = vec![
            Waypoint::new(-90.0, -180.0),
            Waypoint::new(90.0, 180.0),
        ];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_total_rows_for_default_config() {
        assert_eq!(RunConfig::default().total_rows(), 480);
    }

    #[test]
    fn test_total_rows_scales_with_density() {
        let mut config = create_valid_config();
        config.points_per_segment = 3;
        assert_eq!(config.total_rows(), 18);
    }

    #[test]
    fn test_total_rows_for_degenerate_route() {
        let mut config = create_valid_config();
        config.waypoints = vec![];
        assert_eq!(config.total_rows(), 0);

        config.waypoints = vec![Waypoint::new(0.0, 0.0)];
        assert_eq!(config.total_rows(), 0);
    }

    #[test]
    fn test_error_message_names_the_offending_waypoint() {
        let mut config = create_valid_config();
        config.waypoints[4] = Waypoint::new(123.0, 127.0);
        let message = config.validate().unwrap_err().to_string();
        assert!(message.contains("waypoint 4"));
    }
}
