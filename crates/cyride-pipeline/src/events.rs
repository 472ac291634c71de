// ABOUTME: Timer event cleaning: ordering, spurious start/stop pair removal, trailing stop repair
// ABOUTME: Never fails; every anomaly is reported as an EventConsistencyWarning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyride Contributors

//! # Event Cleaning
//!
//! Device timer streams should alternate start/stop, beginning with a start
//! and ending with a stop. In practice they contain zero-length pauses
//! (a start and a stop at the same instant), doubled stops at the end of a
//! ride, and the occasional repeated event. Cleaning repairs what it safely
//! can and reports the rest.

use cyride_core::errors::EventConsistencyWarning;
use cyride_core::models::{EventType, RawEvent};

/// Cleaned timer events with the anomalies found along the way
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanedEvents {
    /// Events in timestamp order after repair
    pub events: Vec<RawEvent>,
    /// Anomalies repaired or tolerated
    pub warnings: Vec<EventConsistencyWarning>,
}

/// Clean a raw timer event stream
///
/// 1. Events are stably sorted by timestamp.
/// 2. Adjacent events sharing a timestamp with one start and one stop are
///    removed as a pair. Adjacent events sharing a timestamp and a type are
///    both kept.
/// 3. A trailing stop/stop pair collapses to its first stop.
/// 4. Remaining alternation violations are reported.
#[must_use]
pub fn clean_events(raw: &[RawEvent]) -> CleanedEvents {
    let mut warnings = Vec::new();

    let mut sorted = raw.to_vec();
    sorted.sort_by_key(|event| event.timestamp);
    let moved = sorted
        .iter()
        .zip(raw)
        .filter(|(after, before)| after != before)
        .count();
    if moved > 0 {
        warnings.push(EventConsistencyWarning::OutOfOrder { moved });
    }

    let mut events: Vec<RawEvent> = Vec::with_capacity(sorted.len());
    for event in sorted {
        match events.last() {
            Some(previous) if previous.timestamp == event.timestamp => {
                if previous.event_type == event.event_type {
                    warnings.push(EventConsistencyWarning::DuplicateTimestamp {
                        timestamp: event.timestamp,
                        event_type: event.event_type,
                    });
                    events.push(event);
                } else {
                    events.pop();
                }
            }
            _ => events.push(event),
        }
    }

    let trailing_stops = matches!(
        events.as_slice(),
        [.., previous, last]
            if previous.event_type == EventType::Stop && last.event_type == EventType::Stop
    );
    if trailing_stops {
        if let Some(dropped) = events.pop() {
            warnings.push(EventConsistencyWarning::TrailingStopCollapsed {
                dropped: dropped.timestamp,
            });
        }
    }

    check_alternation(&events, &mut warnings);

    CleanedEvents { events, warnings }
}

fn check_alternation(events: &[RawEvent], warnings: &mut Vec<EventConsistencyWarning>) {
    if let Some(first) = events.first() {
        if first.event_type != EventType::Start {
            warnings.push(EventConsistencyWarning::MissingOpeningStart {
                first: first.event_type,
            });
        }
    }
    if let Some(last) = events.last() {
        if last.event_type != EventType::Stop {
            warnings.push(EventConsistencyWarning::MissingClosingStop {
                last: last.event_type,
            });
        }
    }
    for (offset, pair) in events.windows(2).enumerate() {
        if pair[0].event_type == pair[1].event_type {
            warnings.push(EventConsistencyWarning::RepeatedEventType {
                index: offset + 1,
                event_type: pair[1].event_type,
            });
        }
    }
}
