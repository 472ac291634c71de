// ABOUTME: Derived activity summary computed from processed records
// ABOUTME: Durations, distance, elevation gain, and heart rate / power / VAM aggregates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyride Contributors

use serde::{Deserialize, Serialize};

/// Scalar statistics derived from an activity's processed records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivitySummary {
    /// Number of processed samples
    pub sample_count: usize,
    /// Seconds from first to last sample
    pub elapsed_seconds: f64,
    /// Seconds spent outside pauses
    pub moving_seconds: f64,
    /// Distance covered (miles)
    pub distance_miles: Option<f64>,
    /// Sum of positive altitude changes between unpaused samples (feet)
    pub elevation_gain_feet: Option<f64>,
    /// Mean heart rate (bpm)
    pub average_heart_rate: Option<f64>,
    /// Max heart rate (bpm)
    pub max_heart_rate: Option<f64>,
    /// Mean power over non-spurious readings (watts)
    pub average_power: Option<f64>,
    /// Max non-spurious power (watts)
    pub max_power: Option<f64>,
    /// Max vertical ascent rate (meters per hour)
    pub max_vam: Option<f64>,
}
