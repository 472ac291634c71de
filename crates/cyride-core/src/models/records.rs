// ABOUTME: RawRecord model for a single device sample at its native sampling time
// ABOUTME: All sensor fields are optional; positions remain in FIT semicircles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyride Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One sample per device tick
///
/// Samples are not evenly spaced and any sensor may drop out at any point.
/// Field names on the wire follow the FIT record message.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Sample time (UTC)
    pub timestamp: DateTime<Utc>,
    /// Latitude in semicircles
    #[serde(
        rename = "position_lat",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub latitude: Option<f64>,
    /// Longitude in semicircles
    #[serde(
        rename = "position_long",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub longitude: Option<f64>,
    /// Altitude (meters)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,
    /// Cumulative distance (meters)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Speed (m/s)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    /// Heart rate (bpm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<f64>,
    /// Power (watts)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<f64>,
    /// Cadence (rpm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cadence: Option<f64>,
    /// Temperature (degrees C)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Grade (percent), recorded by Wahoo devices only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<f64>,
    /// GPS accuracy (meters), recorded by Wahoo devices only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gps_accuracy: Option<f64>,
}

impl RawRecord {
    /// Create a record with only a timestamp
    #[must_use]
    pub const fn at(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            latitude: None,
            longitude: None,
            altitude: None,
            distance: None,
            speed: None,
            heart_rate: None,
            power: None,
            cadence: None,
            temperature: None,
            grade: None,
            gps_accuracy: None,
        }
    }

    /// Named numeric fields, keyed by their FIT record column names
    #[must_use]
    pub const fn fields(&self) -> [(&'static str, Option<f64>); 11] {
        use crate::constants::fields::records;
        [
            (records::POSITION_LAT, self.latitude),
            (records::POSITION_LONG, self.longitude),
            (records::ALTITUDE, self.altitude),
            (records::DISTANCE, self.distance),
            (records::SPEED, self.speed),
            (records::HEART_RATE, self.heart_rate),
            (records::POWER, self.power),
            (records::CADENCE, self.cadence),
            (records::TEMPERATURE, self.temperature),
            (records::GRADE, self.grade),
            (records::GPS_ACCURACY, self.gps_accuracy),
        ]
    }
}
