// ABOUTME: Unit conversion stages: semicircle positions to degrees, SI to imperial display units
// ABOUTME: Scalar conversions plus whole-column stages over raw and resampled tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyride Contributors

use cyride_core::constants::fields::records::{ALTITUDE, DISTANCE, LAT, LON, SPEED};
use cyride_core::constants::units::{
    FEET_PER_METER, MILES_PER_METER, MPS_TO_MPH, SEMICIRCLES_TO_DEGREES,
};
use cyride_core::models::RecordTable;

use crate::resample::ResampledTable;

/// FIT semicircles to decimal degrees
#[must_use]
pub fn semicircles_to_degrees(semicircles: f64) -> f64 {
    semicircles * SEMICIRCLES_TO_DEGREES
}

/// Meters per second to miles per hour
#[must_use]
pub fn mps_to_mph(speed: f64) -> f64 {
    speed * MPS_TO_MPH
}

/// Meters to feet
#[must_use]
pub fn meters_to_feet(meters: f64) -> f64 {
    meters * FEET_PER_METER
}

/// Meters to miles
#[must_use]
pub fn meters_to_miles(meters: f64) -> f64 {
    meters * MILES_PER_METER
}

/// Convert `lat`/`lon` columns from semicircles to degrees; indoor rides have neither
#[must_use]
pub fn convert_positions(mut table: RecordTable) -> RecordTable {
    table.map_column(LAT, semicircles_to_degrees);
    table.map_column(LON, semicircles_to_degrees);
    table
}

/// Convert speed to mph, altitude to feet, and distance to miles
#[must_use]
pub fn convert_to_display_units(mut table: ResampledTable) -> ResampledTable {
    table.map_column(SPEED, mps_to_mph);
    table.map_column(ALTITUDE, meters_to_feet);
    table.map_column(DISTANCE, meters_to_miles);
    table
}
