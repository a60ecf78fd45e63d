//! # Trace Module
//!
//! Generation of the measurement time series.
//!
//! This module handles:
//! - The per-row record type and its CSV column layout
//! - Walking a route and producing timestamped, sampled rows

pub mod record;
pub mod generator;
