// ABOUTME: Timer event models: normalized start/stop type and the raw event record
// ABOUTME: Normalizes device subtypes such as 'stop_all' and 'start_manual'
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyride Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized timer event type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// Timer started or resumed
    Start,
    /// Timer stopped or paused
    Stop,
}

impl EventType {
    /// Normalize a device event subtype
    ///
    /// Any subtype beginning with `start` maps to [`EventType::Start`] and any
    /// beginning with `stop` (`stop_all`, `stop_disable_all`, ...) maps to
    /// [`EventType::Stop`]. Other subtypes such as `marker` return `None`.
    #[must_use]
    pub fn normalize(subtype: &str) -> Option<Self> {
        let subtype = subtype.trim().to_ascii_lowercase();
        if subtype.starts_with("start") {
            Some(Self::Start)
        } else if subtype.starts_with("stop") {
            Some(Self::Stop)
        } else {
            None
        }
    }

    /// Wire name of this type
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A timer event as recorded by the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEvent {
    /// Event time (UTC)
    pub timestamp: DateTime<Utc>,
    /// Normalized event type
    pub event_type: EventType,
}

impl RawEvent {
    /// Create an event
    #[must_use]
    pub const fn new(timestamp: DateTime<Utc>, event_type: EventType) -> Self {
        Self {
            timestamp,
            event_type,
        }
    }
}
