// ABOUTME: Integration tests for pause mask construction from timer events
// ABOUTME: Verifies strict interval boundaries, bracket events, overlapping pauses, and inverted intervals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyride Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{at, base_time, seconds, start, stop};
use cyride_core::errors::EventConsistencyWarning;
use cyride_pipeline::pause::build_pause_mask;

#[test]
fn test_pause_boundaries_are_excluded() {
    let events = [start(0.0), stop(10.0), start(20.0), stop(30.0)];
    let grid = seconds(31);

    let pause = build_pause_mask(&events, &grid, base_time());

    assert!(!pause.mask[10], "stop instant must not be paused");
    assert!(!pause.mask[20], "restart instant must not be paused");
    for i in 11..20 {
        assert!(pause.mask[i], "sample {i} should be paused");
    }
    assert_eq!(pause.paused_count(), 9);
    assert!(pause.warnings.is_empty());
}

#[test]
fn test_bracketing_events_do_not_pause() {
    let events = [start(0.0), stop(30.0)];
    let pause = build_pause_mask(&events, &seconds(31), base_time());

    assert_eq!(pause.paused_count(), 0);
    assert_eq!(pause.mask.len(), 31);
}

#[test]
fn test_no_events_leaves_mask_unpaused() {
    let pause = build_pause_mask(&[], &seconds(5), base_time());
    assert_eq!(pause.mask, vec![false; 5]);
}

#[test]
fn test_multiple_pauses() {
    let events = [
        start(0.0),
        stop(5.0),
        start(8.0),
        stop(12.0),
        start(15.0),
        stop(20.0),
    ];

    let pause = build_pause_mask(&events, &seconds(21), base_time());

    let paused: Vec<usize> = pause
        .mask
        .iter()
        .enumerate()
        .filter_map(|(i, p)| p.then_some(i))
        .collect();
    assert_eq!(paused, vec![6, 7, 13, 14]);
}

#[test]
fn test_pause_between_grid_points() {
    let events = [start(0.0), stop(3.2), start(5.7), stop(10.0)];

    let pause = build_pause_mask(&events, &seconds(11), base_time());

    assert!(!pause.mask[3]);
    assert!(pause.mask[4]);
    assert!(pause.mask[5]);
    assert!(!pause.mask[6]);
}

#[test]
fn test_pause_relative_to_start_time() {
    // grid starts 100 s after the first event
    let events = [start(100.0), stop(105.0), start(110.0), stop(120.0)];

    let pause = build_pause_mask(&events, &seconds(21), at(100.0));

    assert_eq!(pause.paused_count(), 4);
    assert!(pause.mask[6] && pause.mask[9]);
    assert!(!pause.mask[5] && !pause.mask[10]);
}

#[test]
fn test_inverted_pause_marks_nothing_and_warns() {
    let events = [start(0.0), stop(10.0), start(10.0), stop(20.0)];

    let pause = build_pause_mask(&events, &seconds(21), base_time());

    assert_eq!(pause.paused_count(), 0);
    assert_eq!(
        pause.warnings,
        vec![EventConsistencyWarning::InvertedPause {
            stop: at(10.0),
            start: at(10.0),
        }]
    );
}
