// ABOUTME: FIT message names and record/event field names used across the pipeline
// ABOUTME: Canonical column names plus the device-specific aliases they replace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyride Contributors

/// Message names in parsed FIT data
pub mod messages {
    /// Time-series data
    pub const RECORD: &str = "record";
    /// Timer start/stop events (both manual and auto-pauses)
    pub const EVENT: &str = "event";
    /// File identity, including the creation timestamp
    pub const FILE_ID: &str = "file_id";
    /// Device summary statistics (always one per activity)
    pub const SESSION: &str = "session";
}

/// Record column names
pub mod records {
    /// Absolute sample time
    pub const TIMESTAMP: &str = "timestamp";
    /// Device latitude column (semicircles)
    pub const POSITION_LAT: &str = "position_lat";
    /// Device longitude column (semicircles)
    pub const POSITION_LONG: &str = "position_long";
    /// Canonical latitude column
    pub const LAT: &str = "lat";
    /// Canonical longitude column
    pub const LON: &str = "lon";
    /// Altitude (meters)
    pub const ALTITUDE: &str = "altitude";
    /// Duplicate altitude variant written by some devices
    pub const ENHANCED_ALTITUDE: &str = "enhanced_altitude";
    /// Speed (m/s)
    pub const SPEED: &str = "speed";
    /// Duplicate speed variant written by some devices
    pub const ENHANCED_SPEED: &str = "enhanced_speed";
    /// Cumulative distance (meters)
    pub const DISTANCE: &str = "distance";
    /// Heart rate (bpm)
    pub const HEART_RATE: &str = "heart_rate";
    /// Power (watts)
    pub const POWER: &str = "power";
    /// Cadence (rpm)
    pub const CADENCE: &str = "cadence";
    /// Temperature (degrees C)
    pub const TEMPERATURE: &str = "temperature";
    /// Grade (percent, Wahoo only)
    pub const GRADE: &str = "grade";
    /// GPS accuracy (meters, Wahoo only)
    pub const GPS_ACCURACY: &str = "gps_accuracy";
    /// Elapsed seconds since the first record
    pub const ELAPSED_TIME: &str = "elapsed_time";

    /// Device-specific aliases and the canonical names they map to
    pub const ALIASES: &[(&str, &str)] = &[(POSITION_LAT, LAT), (POSITION_LONG, LON)];

    /// Enhanced variants and the canonical columns they duplicate
    pub const ENHANCED_VARIANTS: &[(&str, &str)] =
        &[(ENHANCED_SPEED, SPEED), (ENHANCED_ALTITUDE, ALTITUDE)];
}

/// Event field names and values
pub mod events {
    /// Event time
    pub const TIMESTAMP: &str = "timestamp";
    /// Event category ('timer', 'session', 'off_course', ...)
    pub const EVENT: &str = "event";
    /// Event subtype ('start', 'stop', 'stop_all', 'stop_disable_all', 'marker')
    pub const EVENT_TYPE: &str = "event_type";
    /// The only event category that identifies pauses
    pub const TIMER: &str = "timer";
}

/// File id field names
pub mod file_id {
    /// File creation time, the source of the activity id
    pub const TIME_CREATED: &str = "time_created";
    /// Activity id timestamp format
    pub const ACTIVITY_ID_FORMAT: &str = "%Y%m%d%H%M%S";
}
