//! # Signal Module
//!
//! LTE signal-quality metrics for simulated measurements.
//!
//! This module handles:
//! - Uniform random sampling of RSRP/RSRQ readings
//! - Qualitative grading of readings (excellent through no-signal)

pub mod sampling;
pub mod level;
