//! # Preset Survey Routes
//!
//! Fixed waypoint routes around Songpa-gu, Seoul, used as enumerated options
//! for trace generation. Each route is a closed polygonal loop whose first
//! and last anchors coincide.

use super::waypoint::Waypoint;

/// Seokchon Lake walking loop (7 anchors, closed)
pub const SEOKCHON_LAKE: [Waypoint; 7] = [
    Waypoint::new(37.509815, 127.097662),
    Waypoint::new(37.506635, 127.097452),
    Waypoint::new(37.506639, 127.099296),
    Waypoint::new(37.508722, 127.103625),
    Waypoint::new(37.510870, 127.101626),
    Waypoint::new(37.510013, 127.099767),
    Waypoint::new(37.509815, 127.097662),
];

/// Olympic Park outer walk (6 anchors, closed)
pub const OLYMPIC_PARK: [Waypoint; 6] = [
    Waypoint::new(37.521633, 127.121520),
    Waypoint::new(37.519138, 127.117998),
    Waypoint::new(37.516024, 127.120974),
    Waypoint::new(37.516906, 127.126106),
    Waypoint::new(37.520588, 127.126919),
    Waypoint::new(37.521633, 127.121520),
];
