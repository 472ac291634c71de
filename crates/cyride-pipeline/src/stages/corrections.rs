// ABOUTME: Device glitch corrections applied to raw speed and altitude before resampling
// ABOUTME: Repairs unit-corrupted speeds and decodes the offset/scale altitude encoding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyride Contributors

use cyride_core::constants::fields::records::{ALTITUDE, SPEED};
use cyride_core::models::RecordTable;

use crate::config::CorrectionConfig;

/// Repair a single speed value (m/s)
#[must_use]
pub fn correct_speed(speed: f64, config: &CorrectionConfig) -> f64 {
    if speed > config.speed_glitch_threshold_mps {
        speed / config.speed_glitch_divisor
    } else {
        speed
    }
}

/// Decode a single raw altitude value to meters
#[must_use]
pub fn correct_altitude(raw: f64, config: &CorrectionConfig) -> f64 {
    (raw - config.altitude_offset) / config.altitude_scale
}

/// Apply the enabled corrections to the speed and altitude columns
#[must_use]
pub fn apply_corrections(mut table: RecordTable, config: &CorrectionConfig) -> RecordTable {
    if config.speed_correction {
        table.map_column(SPEED, |speed| correct_speed(speed, config));
    }
    if config.altitude_correction {
        table.map_column(ALTITUDE, |raw| correct_altitude(raw, config));
    }
    table
}
