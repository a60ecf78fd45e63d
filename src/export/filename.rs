//! # Output Name Resolution
//!
//! Turns the optional user-supplied name into the final trace file name.

use chrono::NaiveDateTime;

/// File extension appended to trace exports
pub const TRACE_EXTENSION: &str = ".csv";

/// Prefix of generated trace file names
pub const DEFAULT_NAME_PREFIX: &str = "dummy_data_";

/// Timestamp format embedded in generated trace file names
pub const NAME_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Resolve the output file name for a run
///
/// An explicit name is used verbatim, with the `.csv` extension appended
/// when missing. Without one, a name is derived from the supplied wall-clock
/// time as `dummy_data_<YYYYMMDD_HHMMSS>.csv`.
///
/// # Arguments
///
/// * `requested` - User-supplied name, if any
/// * `now` - Current local wall-clock time
///
/// # Examples
///
/// ```
/// use rsrp_simulator::export::filename::resolve_output_name;
/// use chrono::NaiveDateTime;
///
/// let now = NaiveDateTime::parse_from_str("2025-11-08 14:00:00", "%Y-%m-%d %H:%M:%S")?;
/// assert_eq!(resolve_output_name(Some("run1"), now), "run1.csv");
/// assert_eq!(resolve_output_name(None, now), "dummy_data_20251108_140000.csv");
/// # Ok::<(), chrono::ParseError>(())
/// ```
#[must_use]
pub fn resolve_output_name(requested: Option<&str>, now: NaiveDateTime) -> String {
    match requested {
        Some(name) if name.ends_with(TRACE_EXTENSION) => name.to_string(),
        Some(name) => format!("{}{}", name, TRACE_EXTENSION),
        None => format!(
            "{}{}{}",
            DEFAULT_NAME_PREFIX,
            now.format(NAME_TIMESTAMP_FORMAT),
            TRACE_EXTENSION
        ),
    }
}
