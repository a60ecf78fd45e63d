//! # Trace Record Type
//!
//! One timestamped measurement row of a simulated trace.

use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

/// Canonical header row of a trace file
pub const CSV_HEADER: &str = "timestamp,latitude,longitude,rsrp,rsrq";

/// Timestamp format used in trace files (`YYYY-MM-DD HH:MM:SS`)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single generated measurement row
///
/// Field order matches the trace file's column order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TraceRecord {
    /// Moment the measurement was taken
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: NaiveDateTime,

    /// Interpolated latitude in decimal degrees, rounded to 6 places
    pub latitude: f64,

    /// Interpolated longitude in decimal degrees, rounded to 6 places
    pub longitude: f64,

    /// Reference Signal Received Power in dBm
    pub rsrp: i32,

    /// Reference Signal Received Quality in dB
    pub rsrq: i32,
}

/// Serialize a timestamp as `YYYY-MM-DD HH:MM:SS`
fn serialize_timestamp<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.format(TIMESTAMP_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_time(raw: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT).unwrap()
    }

    #[test]
    fn test_csv_header_is_fixed() {
        assert_eq!(CSV_HEADER, "timestamp,latitude,longitude,rsrp,rsrq");
    }

    #[test]
    fn test_header_matches_field_order() {
        let columns: Vec<&str> = CSV_HEADER.split(',').collect();
        assert_eq!(
            columns,
            vec!["timestamp", "latitude", "longitude", "rsrp", "rsrq"]
        );
    }

    #[test]
    fn test_record_serializes_to_one_csv_line() {
        let record = TraceRecord {
            timestamp: parse_time("2025-11-08 14:00:00"),
            latitude: 37.509815,
            longitude: 127.097662,
            rsrp: -95,
            rsrq: -10,
        };

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(vec![]);
        writer.serialize(record).unwrap();
        let line = String::from_utf8(writer.into_inner().unwrap()).unwrap();

        assert_eq!(line, "2025-11-08 14:00:00,37.509815,127.097662,-95,-10\n");
    }

    #[test]
    fn test_timestamp_format_pads_with_zeros() {
        let record = TraceRecord {
            timestamp: parse_time("2025-01-02 03:04:05"),
            latitude: 0.0,
            longitude: 0.0,
            rsrp: -80,
            rsrq: -6,
        };

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(vec![]);
        writer.serialize(record).unwrap();
        let line = String::from_utf8(writer.into_inner().unwrap()).unwrap();

        assert!(line.starts_with("2025-01-02 03:04:05,"));
    }
}
