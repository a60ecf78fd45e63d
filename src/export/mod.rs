//! # Export Module
//!
//! Trace file input and output.
//!
//! This module handles:
//! - Writing generated rows to CSV with the canonical header
//! - Reading traces back with per-line validation
//! - Resolving the output file name from the optional user argument

pub mod writer;
pub mod reader;
pub mod filename;
