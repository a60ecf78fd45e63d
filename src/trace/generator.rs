//! # Trace Generator
//!
//! Walks a survey route and produces the full measurement time series.
//!
//! Coordinates and timestamps are fully determined by the run configuration;
//! only the two signal metrics come from the supplied random source.

use chrono::Duration;
use rand::Rng;
use tracing::debug;

use crate::config::RunConfig;
use crate::error::Result;
use crate::route::interpolate::point_between;
use crate::signal::sampling::{sample_rsrp, sample_rsrq};
use crate::trace::record::TraceRecord;

/// Generate the measurement rows for one run
///
/// Walks every consecutive waypoint pair of the configured route. Each
/// segment contributes `points_per_segment` rows at evenly spaced ratios
/// `j / points_per_segment` for `j` in `0..points_per_segment`; the segment
/// end itself is emitted as the start of the following segment, and the
/// route's final waypoint is never emitted on its own. Timestamps start at
/// `start_time` and advance by `interval_secs` per row.
///
/// # Arguments
///
/// * `config` - Run parameters, validated before any row is produced
/// * `rng` - Random source for the RSRP/RSRQ readings
///
/// # Returns
///
/// * `Result<Vec<TraceRecord>>` - Rows in generation order
///
/// # Errors
///
/// Returns error if the configuration is invalid (fewer than 2 waypoints,
/// zero interpolation density, zero interval, or out-of-range coordinates).
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use rsrp_simulator::config::RunConfig;
/// use rsrp_simulator::trace::generator::generate;
///
/// let config = RunConfig::default();
/// let mut rng = StdRng::seed_from_u64(7);
/// let records = generate(&config, &mut rng)?;
/// assert_eq!(records.len(), 480);
/// # Ok::<(), rsrp_simulator::error::RsrpSimulatorError>(())
/// ```
pub fn generate(config: &RunConfig, rng: &mut impl Rng) -> Result<Vec<TraceRecord>> {
    config.validate()?;

    let mut rows = Vec::with_capacity(config.total_rows());
    let mut timestamp = config.start_time;
    let step = Duration::seconds(i64::from(config.interval_secs));

    for segment in config.waypoints.windows(2) {
        for j in 0..config.points_per_segment {
            let ratio = f64::from(j) / f64::from(config.points_per_segment);
            let position = point_between(segment[0], segment[1], ratio);

            rows.push(TraceRecord {
                timestamp,
                latitude: position.latitude,
                longitude: position.longitude,
                rsrp: sample_rsrp(rng),
                rsrq: sample_rsrq(rng),
            });

            timestamp += step;
        }
    }

    debug!(
        "Generated {} rows across {} segments",
        rows.len(),
        config.waypoints.len() - 1
    );

    Ok(rows)
}
