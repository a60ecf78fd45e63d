//! # Route Module
//!
//! Survey routes the simulated device travels along.
//!
//! This module handles:
//! - Waypoint representation (latitude/longitude anchors)
//! - Preset routes around Songpa-gu, Seoul
//! - Linear interpolation of positions between consecutive waypoints

pub mod waypoint;
pub mod presets;
pub mod interpolate;
