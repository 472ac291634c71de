// ABOUTME: Recoverable event-consistency warnings raised while cleaning timer events
// ABOUTME: Serializable so they can be carried in processed output and batch reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyride Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::EventType;

/// A start/stop event anomaly that was repaired or tolerated
///
/// Device event streams are frequently inconsistent. None of these abort
/// processing; they are collected on the processed activity and logged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventConsistencyWarning {
    /// Events were not in timestamp order and have been re-sorted
    OutOfOrder {
        /// Number of events whose position changed
        moved: usize,
    },
    /// Two consecutive events share a timestamp and a type, both are kept
    DuplicateTimestamp {
        /// Shared timestamp
        timestamp: DateTime<Utc>,
        /// Shared event type
        event_type: EventType,
    },
    /// A trailing stop/stop pair was collapsed to a single stop
    TrailingStopCollapsed {
        /// Timestamp of the dropped stop
        dropped: DateTime<Utc>,
    },
    /// The cleaned sequence does not begin with a start
    MissingOpeningStart {
        /// Type of the first event
        first: EventType,
    },
    /// The cleaned sequence does not end with a stop
    MissingClosingStop {
        /// Type of the last event
        last: EventType,
    },
    /// Two consecutive events have the same type
    RepeatedEventType {
        /// Position of the second event in the cleaned sequence
        index: usize,
        /// Repeated type
        event_type: EventType,
    },
    /// A stop/start interval does not move forward in time and marks nothing
    InvertedPause {
        /// Stop timestamp
        stop: DateTime<Utc>,
        /// Start timestamp
        start: DateTime<Utc>,
    },
}

impl fmt::Display for EventConsistencyWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfOrder { moved } => {
                write!(f, "{moved} events were out of timestamp order")
            }
            Self::DuplicateTimestamp {
                timestamp,
                event_type,
            } => write!(
                f,
                "two '{event_type}' events share the timestamp {timestamp}"
            ),
            Self::TrailingStopCollapsed { dropped } => {
                write!(f, "dropped trailing duplicate stop at {dropped}")
            }
            Self::MissingOpeningStart { first } => {
                write!(f, "first event is '{first}' rather than 'start'")
            }
            Self::MissingClosingStop { last } => {
                write!(f, "last event is '{last}' rather than 'stop'")
            }
            Self::RepeatedEventType { index, event_type } => {
                write!(f, "event {index} repeats type '{event_type}'")
            }
            Self::InvertedPause { stop, start } => {
                write!(f, "pause from {stop} to {start} does not move forward")
            }
        }
    }
}
