// ABOUTME: Unit conversion constants for position, distance, speed, and time
// ABOUTME: Provides named constants to eliminate magic numbers in record processing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyride Contributors

/// Semicircles per half revolution (2^31), the FIT position encoding
pub const SEMICIRCLES_PER_HALF_REVOLUTION: f64 = 2_147_483_648.0;

/// Semicircles to decimal degrees conversion factor (180 / 2^31)
pub const SEMICIRCLES_TO_DEGREES: f64 = 180.0 / SEMICIRCLES_PER_HALF_REVOLUTION;

/// Feet per mile
pub const FEET_PER_MILE: f64 = 5280.0;

/// Feet per meter
pub const FEET_PER_METER: f64 = 3.2808;

/// Miles per meter
pub const MILES_PER_METER: f64 = FEET_PER_METER / FEET_PER_MILE;

/// Seconds per hour
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Meters-per-second to miles-per-hour conversion factor
pub const MPS_TO_MPH: f64 = MILES_PER_METER * SECONDS_PER_HOUR;

/// Joules per kilocalorie
pub const JOULES_PER_KCAL: f64 = 4184.0;

/// Microseconds per second
pub const MICROSECONDS_PER_SECOND: f64 = 1_000_000.0;
