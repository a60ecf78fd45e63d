//! # Signal Level Classification
//!
//! Qualitative grading of RSRP/RSRQ readings.
//!
//! ## Thresholds
//!
//! | Grade     | RSRP (dBm) | RSRQ (dB) |
//! |-----------|------------|-----------|
//! | Excellent | >= -80     | >= -3     |
//! | Good      | >= -90     | >= -8     |
//! | Fair      | >= -100    | >= -12    |
//! | Poor      | >= -110    | >= -16    |
//! | Very poor | >= -120    | >= -19    |
//! | No signal | below      | below     |
//!
//! A combined grade for a measurement is the worse of its two per-metric
//! grades.

use std::fmt;

/// RSRP threshold for an excellent link, in dBm
const RSRP_EXCELLENT: i32 = -80;
/// RSRP threshold for a good link, in dBm
const RSRP_GOOD: i32 = -90;
/// RSRP threshold for a fair link, in dBm
const RSRP_FAIR: i32 = -100;
/// RSRP threshold for a poor link, in dBm
const RSRP_POOR: i32 = -110;
/// RSRP threshold for a very poor link, in dBm
const RSRP_VERY_POOR: i32 = -120;

/// RSRQ threshold for an excellent link, in dB
const RSRQ_EXCELLENT: i32 = -3;
/// RSRQ threshold for a good link, in dB
const RSRQ_GOOD: i32 = -8;
/// RSRQ threshold for a fair link, in dB
const RSRQ_FAIR: i32 = -12;
/// RSRQ threshold for a poor link, in dB
const RSRQ_POOR: i32 = -16;
/// RSRQ threshold for a very poor link, in dB
const RSRQ_VERY_POOR: i32 = -19;

/// Qualitative signal grade derived from measured metrics
///
/// Variants are ordered from worst to best, so `Ord` comparisons follow
/// link quality and [`Ord::min`] picks the worse of two grades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SignalLevel {
    /// No usable signal
    NoSignal,
    /// Barely usable link
    VeryPoor,
    /// Unreliable link
    Poor,
    /// Serviceable link
    Fair,
    /// Strong link
    Good,
    /// Near-ideal link
    Excellent,
}

impl SignalLevel {
    /// Grade an RSRP reading in dBm
    ///
    /// # Examples
    ///
    /// ```
    /// use rsrp_simulator::signal::level::SignalLevel;
    ///
    /// assert_eq!(SignalLevel::from_rsrp(-85), SignalLevel::Good);
    /// ```
    #[must_use]
    pub fn from_rsrp(rsrp: i32) -> Self {
        if rsrp >= RSRP_EXCELLENT {
            Self::Excellent
        } else if rsrp >= RSRP_GOOD {
            Self::Good
        } else if rsrp >= RSRP_FAIR {
            Self::Fair
        } else if rsrp >= RSRP_POOR {
            Self::Poor
        } else if rsrp >= RSRP_VERY_POOR {
            Self::VeryPoor
        } else {
            Self::NoSignal
        }
    }

    /// Grade an RSRQ reading in dB
    #[must_use]
    pub fn from_rsrq(rsrq: i32) -> Self {
        if rsrq >= RSRQ_EXCELLENT {
            Self::Excellent
        } else if rsrq >= RSRQ_GOOD {
            Self::Good
        } else if rsrq >= RSRQ_FAIR {
            Self::Fair
        } else if rsrq >= RSRQ_POOR {
            Self::Poor
        } else if rsrq >= RSRQ_VERY_POOR {
            Self::VeryPoor
        } else {
            Self::NoSignal
        }
    }

    /// Combined grade for a measurement, the worse of the two metrics
    ///
    /// # Examples
    ///
    /// ```
    /// use rsrp_simulator::signal::level::SignalLevel;
    ///
    /// // Strong power but poor quality grades as poor overall
    /// assert_eq!(SignalLevel::from_measurement(-75, -15), SignalLevel::Poor);
    /// ```
    #[must_use]
    pub fn from_measurement(rsrp: i32, rsrq: i32) -> Self {
        Self::from_rsrp(rsrp).min(Self::from_rsrq(rsrq))
    }

    /// Numeric rank of the grade, 0 (no signal) to 5 (excellent)
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            Self::NoSignal => 0,
            Self::VeryPoor => 1,
            Self::Poor => 2,
            Self::Fair => 3,
            Self::Good => 4,
            Self::Excellent => 5,
        }
    }
}

impl fmt::Display for SignalLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::NoSignal => "No signal",
            Self::VeryPoor => "Very poor",
            Self::Poor => "Poor",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        };
        write!(f, "{}", label)
    }
}
