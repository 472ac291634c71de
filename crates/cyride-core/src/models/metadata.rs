// ABOUTME: Activity metadata carried alongside records: identity, dates, type, gear, device, sensors
// ABOUTME: Immutable context for one activity; never inferred by the processing pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyride Contributors

use serde::{Deserialize, Serialize};

/// Strava-style activity type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    /// Cycling
    Ride,
    /// Running
    Run,
    /// Hiking
    Hike,
    /// Indoor cycling
    Indoor,
}

impl ActivityType {
    /// Map a FIT `session.sport` value to an activity type
    #[must_use]
    pub fn from_fit_sport(sport: &str) -> Option<Self> {
        match sport.to_ascii_lowercase().as_str() {
            "cycling" => Some(Self::Ride),
            "running" => Some(Self::Run),
            "hiking" => Some(Self::Hike),
            "indoor_cycling" => Some(Self::Indoor),
            _ => None,
        }
    }
}

/// Where a ride took place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CyclingType {
    /// Outdoor road ride
    Road,
    /// Trainer ride
    Indoor,
}

/// Scalar attributes of one activity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityMetadata {
    /// Activity identifier (`YYYYMMDDHHMMSS` of the file creation time)
    pub activity_id: String,
    /// File creation time as recorded by the device
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_date: Option<String>,
    /// Start date from the Strava export
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strava_date: Option<String>,
    /// Title from the Strava export
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strava_title: Option<String>,
    /// Source filename within the Strava export
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Activity type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_type: Option<ActivityType>,
    /// Cycling type, for rides only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycling_type: Option<CyclingType>,
    /// Bike name, for rides only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bike_name: Option<String>,
    /// Recording device manufacturer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_manufacturer: Option<String>,
    /// Recording device model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_model: Option<String>,
    /// Heart rate monitor present
    #[serde(default)]
    pub heart_rate_flag: bool,
    /// Power meter present
    #[serde(default)]
    pub power_flag: bool,
    /// Speed sensor present
    #[serde(default)]
    pub speed_flag: bool,
}

impl ActivityMetadata {
    /// Metadata with only an activity id
    #[must_use]
    pub fn with_id(activity_id: impl Into<String>) -> Self {
        Self {
            activity_id: activity_id.into(),
            ..Self::default()
        }
    }
}
