// ABOUTME: Pause mask construction from cleaned timer events on the resampled grid
// ABOUTME: Each interior stop/start pair marks the grid points strictly between them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyride Contributors

use chrono::{DateTime, Utc};
use cyride_core::constants::units::MICROSECONDS_PER_SECOND;
use cyride_core::errors::EventConsistencyWarning;
use cyride_core::models::{EventType, RawEvent};

/// Pause flags aligned to a grid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PauseMask {
    /// One flag per grid point; true inside a pause
    pub mask: Vec<bool>,
    /// Intervals that could not be applied
    pub warnings: Vec<EventConsistencyWarning>,
}

impl PauseMask {
    /// Number of paused grid points
    #[must_use]
    pub fn paused_count(&self) -> usize {
        self.mask.iter().filter(|paused| **paused).count()
    }
}

/// Build the pause mask for `elapsed_time` (seconds since `start_time`)
///
/// The first and last events bracket the activity and are ignored. Every
/// remaining consecutive stop followed by start is a pause; grid points
/// strictly between the two are marked. Overlapping pauses combine.
#[must_use]
pub fn build_pause_mask(
    events: &[RawEvent],
    elapsed_time: &[f64],
    start_time: DateTime<Utc>,
) -> PauseMask {
    let mut mask = vec![false; elapsed_time.len()];
    let mut warnings = Vec::new();

    let interior: &[RawEvent] = if events.len() > 2 {
        &events[1..events.len() - 1]
    } else {
        &[]
    };

    for pair in interior.windows(2) {
        let (stop, start) = (pair[0], pair[1]);
        if stop.event_type != EventType::Stop || start.event_type != EventType::Start {
            continue;
        }
        if start.timestamp <= stop.timestamp {
            warnings.push(EventConsistencyWarning::InvertedPause {
                stop: stop.timestamp,
                start: start.timestamp,
            });
            continue;
        }

        let from = seconds_since(start_time, stop.timestamp);
        let to = seconds_since(start_time, start.timestamp);
        let first = elapsed_time.partition_point(|&t| t <= from);
        let end = elapsed_time.partition_point(|&t| t < to);
        if first < end {
            mask[first..end].fill(true);
        }
    }

    PauseMask { mask, warnings }
}

fn seconds_since(origin: DateTime<Utc>, instant: DateTime<Utc>) -> f64 {
    let span = instant - origin;
    span.num_microseconds().map_or_else(
        || span.num_milliseconds() as f64 / 1000.0,
        |micros| micros as f64 / MICROSECONDS_PER_SECOND,
    )
}
