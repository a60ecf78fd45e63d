//! # RSRP Simulator Library
//!
//! Generate synthetic LTE signal-strength traces along a survey route.
//!
//! This library provides the core functionality for producing timestamped
//! (latitude, longitude, RSRP, RSRQ) records: route interpolation, signal
//! sampling, and CSV export/import.

pub mod config;
pub mod error;
pub mod route;
pub mod signal;
pub mod trace;
pub mod export;
