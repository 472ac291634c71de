// ABOUTME: Processed output models: one uniformly-sampled row per timestep plus the activity wrapper
// ABOUTME: Rows carry converted units, the pause flag, and the smoothed vertical ascent rate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyride Contributors

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ActivitySummary;
use crate::errors::EventConsistencyWarning;

/// One processed sample on the regular grid
///
/// Units are those of the final conversion stage: speed in mph, altitude in
/// feet, distance in miles, positions in decimal degrees. Sensor fields that
/// the activity never recorded stay `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedRecord {
    /// Seconds since activity start
    pub elapsed_time: f64,
    /// Latitude (degrees)
    pub lat: Option<f64>,
    /// Longitude (degrees)
    pub lon: Option<f64>,
    /// Altitude (feet)
    pub altitude: Option<f64>,
    /// Cumulative distance (miles)
    pub distance: Option<f64>,
    /// Speed (mph)
    pub speed: Option<f64>,
    /// Heart rate (bpm)
    pub heart_rate: Option<f64>,
    /// Power (watts)
    pub power: Option<f64>,
    /// Cadence (rpm)
    pub cadence: Option<f64>,
    /// Temperature (degrees C)
    pub temperature: Option<f64>,
    /// Grade (percent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<f64>,
    /// GPS accuracy (meters)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gps_accuracy: Option<f64>,
    /// Whether the sample falls inside a pause
    pub pause_mask: bool,
    /// Vertical ascent rate (meters per hour, computed before unit conversion)
    pub vam: Option<f64>,
    /// Any further device columns, interpolated but not converted
    #[serde(flatten, default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, Option<f64>>,
}

impl ProcessedRecord {
    /// An empty row at the given elapsed time
    #[must_use]
    pub const fn at(elapsed_time: f64) -> Self {
        Self {
            elapsed_time,
            lat: None,
            lon: None,
            altitude: None,
            distance: None,
            speed: None,
            heart_rate: None,
            power: None,
            cadence: None,
            temperature: None,
            grade: None,
            gps_accuracy: None,
            pause_mask: false,
            vam: None,
            extra: BTreeMap::new(),
        }
    }
}

/// The full result of processing one activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedActivity {
    /// Activity identifier
    pub activity_id: String,
    /// Absolute time of `elapsed_time == 0`
    pub start_time: DateTime<Utc>,
    /// Grid spacing (seconds)
    pub timestep: f64,
    /// Processed rows, one per grid point
    pub records: Vec<ProcessedRecord>,
    /// Event anomalies repaired or tolerated during processing
    pub warnings: Vec<EventConsistencyWarning>,
    /// Derived summary statistics
    pub summary: ActivitySummary,
}
