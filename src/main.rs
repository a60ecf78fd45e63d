//! # RSRP Simulator
//!
//! Generate synthetic LTE signal-strength traces along a survey route.
//!
//! The simulator walks the Seokchon Lake loop, interpolating evenly spaced
//! positions between waypoints and attaching uniformly sampled RSRP/RSRQ
//! readings to each one, then writes the time series to a CSV file.

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber;

use rsrp_simulator::config::RunConfig;
use rsrp_simulator::export::filename::resolve_output_name;
use rsrp_simulator::export::writer::write_trace_file;
use rsrp_simulator::signal::level::SignalLevel;
use rsrp_simulator::trace::generator::generate;

/// Command line arguments
#[derive(Debug, Parser)]
#[command(
    name = "rsrp-simulator",
    version,
    about = "Generate a synthetic RSRP/RSRQ trace along the Seokchon Lake loop"
)]
struct Cli {
    /// Output file name; ".csv" is appended when missing.
    /// Defaults to dummy_data_<YYYYMMDD_HHMMSS>.csv.
    output: Option<String>,
}

/// Main entry point for the RSRP Simulator
///
/// # Control Flow
///
/// 1. **Initialization**
///    - Set up logging with tracing subscriber
///    - Parse the optional output-name argument
///    - Resolve the final file name from the argument or the wall clock
///
/// 2. **Generation**
///    - Walk the default route with the default run configuration
///    - Sample RSRP/RSRQ per row from the thread-local random source
///
/// 3. **Export**
///    - Write the header and all rows to the destination file
///    - Print a confirmation with the final file name
///
/// # Errors
///
/// Returns error if the run configuration is invalid or the destination
/// file cannot be written. The process exits non-zero and the error is
/// reported on stderr.
///
/// # Examples
///
/// Run the simulator:
/// ```bash
/// cargo run --release -- survey_run
/// ```
///
/// Expected output:
/// ```text
/// INFO rsrp_simulator: RSRP Simulator v0.1.0 starting...
/// INFO rsrp_simulator: Wrote 480 rows to survey_run.csv
/// CSV file created: survey_run.csv
/// ```
fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    info!("RSRP Simulator v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = RunConfig::default();
    let filename = resolve_output_name(cli.output.as_deref(), Local::now().naive_local());
    debug!(
        "Generating {} rows along {} waypoints into {}",
        config.total_rows(),
        config.waypoints.len(),
        filename
    );

    let mut rng = rand::thread_rng();
    let records = generate(&config, &mut rng)?;

    let degraded = records
        .iter()
        .filter(|row| SignalLevel::from_measurement(row.rsrp, row.rsrq) <= SignalLevel::Poor)
        .count();
    debug!("{} of {} rows graded poor or worse", degraded, records.len());

    write_trace_file(&filename, &records)?;

    info!("Wrote {} rows to {}", records.len(), filename);
    println!("CSV file created: {}", filename);

    Ok(())
}
