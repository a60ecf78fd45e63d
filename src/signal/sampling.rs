//! # Signal Metric Sampling
//!
//! Uniform random RSRP/RSRQ readings in the ranges the simulator emits.
//!
//! Both metrics are drawn independently per row from a caller-supplied
//! random source, so a seeded generator reproduces a trace exactly.

use rand::Rng;

/// Weakest RSRP the simulator emits, in dBm
pub const RSRP_MIN: i32 = -110;

/// Strongest RSRP the simulator emits, in dBm
pub const RSRP_MAX: i32 = -80;

/// Weakest RSRQ the simulator emits, in dB
pub const RSRQ_MIN: i32 = -14;

/// Strongest RSRQ the simulator emits, in dB
pub const RSRQ_MAX: i32 = -6;

/// Draw one RSRP reading, uniform over [`RSRP_MIN`]..=[`RSRP_MAX`]
///
/// # Arguments
///
/// * `rng` - Random source supplying the draw
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use rsrp_simulator::signal::sampling::{sample_rsrp, RSRP_MAX, RSRP_MIN};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let rsrp = sample_rsrp(&mut rng);
/// assert!((RSRP_MIN..=RSRP_MAX).contains(&rsrp));
/// ```
pub fn sample_rsrp(rng: &mut impl Rng) -> i32 {
    rng.gen_range(RSRP_MIN..=RSRP_MAX)
}

/// Draw one RSRQ reading, uniform over [`RSRQ_MIN`]..=[`RSRQ_MAX`]
///
/// # Arguments
///
/// * `rng` - Random source supplying the draw
pub fn sample_rsrq(rng: &mut impl Rng) -> i32 {
    rng.gen_range(RSRQ_MIN..=RSRQ_MAX)
}
