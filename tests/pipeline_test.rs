// ABOUTME: End-to-end tests of the record processing pipeline for stored and local activities
// ABOUTME: Verifies interpolated output, unit conversion, pause masks, VAM, and per-activity failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyride Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{
    base_time, local_activity_document, seconds, start, stop, stored_activity, table_at,
    table_with, uncorrected_config,
};
use cyride_core::constants::fields::records;
use cyride_core::constants::units::FEET_PER_METER;
use cyride_core::errors::{ErrorCode, ProcessingError};
use cyride_core::models::{activity_id_from_time_created, ActivitySource, ActivityType};
use cyride_pipeline::pipeline::UNKNOWN_ACTIVITY_ID;
use cyride_pipeline::{ExtrapolationPolicy, ProcessingConfig, RecordProcessor};

/// Independent linear interpolation through `(x, y)` points
fn lerp(points: &[(f64, f64)], t: f64) -> f64 {
    let segment = points
        .windows(2)
        .find(|pair| pair[0].0 <= t && t <= pair[1].0)
        .unwrap();
    let ((x0, y0), (x1, y1)) = (segment[0], segment[1]);
    y0 + (y1 - y0) * (t - x0) / (x1 - x0)
}

fn processor(config: ProcessingConfig) -> RecordProcessor {
    RecordProcessor::new(config).unwrap()
}

#[test]
fn test_irregular_samples_resample_to_three_rows() {
    common::init_test_logging();
    let times = [0.0, 0.5, 1.3, 2.1, 3.0];
    let altitudes = [100.0, 100.5, 101.8, 102.5, 103.0];
    let source = stored_activity(
        "ride-1",
        table_with(&times, records::ALTITUDE, &altitudes),
        vec![start(0.0), stop(3.0)],
    );

    let activity = processor(uncorrected_config()).process(&source).unwrap();

    assert_eq!(activity.activity_id, "ride-1");
    assert_eq!(activity.start_time, base_time());
    assert_eq!(activity.records.len(), 3);

    let points: Vec<(f64, f64)> = times.iter().copied().zip(altitudes).collect();
    for (i, row) in activity.records.iter().enumerate() {
        let t = i as f64;
        assert!((row.elapsed_time - t).abs() < f64::EPSILON);
        let expected_feet = lerp(&points, t) * FEET_PER_METER;
        assert!(
            (row.altitude.unwrap() - expected_feet).abs() < 1e-9,
            "row {i}: expected {expected_feet}, got {:?}",
            row.altitude
        );
        assert!(!row.pause_mask);
        assert_eq!(row.vam, None);
    }
    assert!((activity.records[1].altitude.unwrap() - 101.3125 * FEET_PER_METER).abs() < 1e-9);
    assert!((activity.records[2].altitude.unwrap() - 102.4125 * FEET_PER_METER).abs() < 1e-9);
    assert!(activity.warnings.is_empty());
}

#[test]
fn test_default_corrections_decode_altitude() {
    let source = stored_activity(
        "ride-2",
        table_with(&seconds(5), records::ALTITUDE, &[3000.0; 5]),
        vec![start(0.0), stop(4.0)],
    );

    let activity = processor(ProcessingConfig::default()).process(&source).unwrap();

    for row in &activity.records {
        assert!((row.altitude.unwrap() - 100.0 * FEET_PER_METER).abs() < 1e-9);
    }
}

#[test]
fn test_non_monotonic_timestamps_fail_with_activity_id() {
    let source = stored_activity(
        "ride-3",
        table_with(&[0.0, 1.0, 3.0, 2.0, 4.0], records::POWER, &[100.0; 5]),
        vec![],
    );

    let err = processor(uncorrected_config()).process(&source).unwrap_err();

    assert_eq!(err.activity_id, "ride-3");
    assert_eq!(err.code(), ErrorCode::NonMonotonicTime);
    assert!(matches!(
        err.source,
        ProcessingError::NonMonotonicTime { index: 3, .. }
    ));
    assert!(err.to_string().contains("ride-3"));
}

#[test]
fn test_extrapolation_policy_applies_to_pipeline() {
    let table = table_at(&seconds(6))
        .with_column(
            records::HEART_RATE,
            vec![None, Some(120.0), Some(122.0), Some(124.0), Some(126.0), Some(128.0)],
        )
        .unwrap();
    let source = stored_activity("ride-4", table, vec![start(0.0), stop(5.0)]);

    let err = processor(uncorrected_config()).process(&source).unwrap_err();
    assert_eq!(err.code(), ErrorCode::Extrapolation);

    let mut config = uncorrected_config();
    config.resample.extrapolation = ExtrapolationPolicy::Missing;
    let activity = processor(config).process(&source).unwrap();
    assert_eq!(activity.records[0].heart_rate, None);
    assert!((activity.records[1].heart_rate.unwrap() - 120.0).abs() < 1e-9);
}

#[test]
fn test_vam_on_coarse_grid_fails() {
    let source = stored_activity(
        "ride-5",
        table_with(&seconds(30), records::ALTITUDE, &[100.0; 30]),
        vec![start(0.0), stop(29.0)],
    );
    let mut config = uncorrected_config();
    config.resample.timestep_seconds = 2.0;

    let err = processor(config).process(&source).unwrap_err();

    assert_eq!(err.code(), ErrorCode::IrregularGrid);
}

#[test]
fn test_coarse_grid_without_altitude_succeeds() {
    let source = stored_activity(
        "ride-6",
        table_with(&seconds(30), records::POWER, &[200.0; 30]),
        vec![start(0.0), stop(29.0)],
    );
    let mut config = uncorrected_config();
    config.resample.timestep_seconds = 2.0;

    let activity = processor(config).process(&source).unwrap();

    assert_eq!(activity.records.len(), 14);
    assert!(activity.records.iter().all(|row| row.vam.is_none()));
}

#[test]
fn test_unknown_columns_are_carried_as_extras() {
    let source = stored_activity(
        "ride-7",
        table_with(&seconds(4), "left_right_balance", &[50.0, 51.0, 52.0, 53.0]),
        vec![],
    );

    let activity = processor(uncorrected_config()).process(&source).unwrap();

    let balance = activity.records[2].extra.get("left_right_balance").unwrap();
    assert!((balance.unwrap() - 52.0).abs() < 1e-9);

    let json = serde_json::to_value(&activity.records[2]).unwrap();
    assert!(json.get("left_right_balance").is_some());
    assert_eq!(json["pause_mask"], serde_json::Value::Bool(false));
}

#[test]
fn test_processing_is_repeatable_and_leaves_input_untouched() {
    let source = stored_activity(
        "ride-8",
        table_with(&[0.0, 0.7, 1.9, 3.4], records::SPEED, &[1.0, 2.0, 3.0, 4.0]),
        vec![start(0.0), stop(3.4)],
    );
    let before = source.clone();
    let processor = processor(uncorrected_config());

    let first = processor.process(&source).unwrap();
    let second = processor.process(&source).unwrap();

    assert_eq!(first, second);
    assert_eq!(source, before);
}

fn climbing_local_activity() -> ActivitySource {
    // raw altitude 3000 + 5 i decodes to 100 + i meters: a 1 m/s climb
    let samples: Vec<(f64, f64, f64)> = (0..=30)
        .map(|i| (f64::from(i), 5.0f64.mul_add(f64::from(i), 3000.0), 5.0))
        .collect();
    let document = local_activity_document(
        &samples,
        &[(0.0, "start"), (10.0, "stop_all"), (20.0, "start"), (30.0, "stop_all")],
    );
    serde_json::from_value(document).unwrap()
}

#[test]
fn test_local_activity_end_to_end() {
    let source = climbing_local_activity();

    let metadata = source.metadata().unwrap();
    assert_eq!(metadata.activity_id, "20240512083000");
    assert_eq!(metadata.activity_type, Some(ActivityType::Ride));
    assert_eq!(metadata.device_manufacturer.as_deref(), Some("garmin"));

    let activity = processor(ProcessingConfig::default()).process(&source).unwrap();

    assert_eq!(activity.activity_id, "20240512083000");
    assert_eq!(activity.records.len(), 30);

    let row = &activity.records[25];
    assert!((row.lat.unwrap() - 45.0).abs() < 1e-9);
    assert!((row.lon.unwrap() + 90.0).abs() < 1e-9);
    assert!((row.altitude.unwrap() - 125.0 * FEET_PER_METER).abs() < 1e-6);
    assert!((row.speed.unwrap() - 11.184_545).abs() < 1e-4);
    assert!((row.heart_rate.unwrap() - 140.0).abs() < 1e-9);
    assert!((row.vam.unwrap() - 3600.0).abs() < 1e-6);

    let paused: Vec<usize> = activity
        .records
        .iter()
        .enumerate()
        .filter_map(|(i, r)| r.pause_mask.then_some(i))
        .collect();
    assert_eq!(paused, (11..20).collect::<Vec<_>>());
    assert!((activity.summary.moving_seconds - 21.0).abs() < 1e-9);
}

#[test]
fn test_local_activity_without_event_message_fails() {
    let mut document = local_activity_document(&[(0.0, 3000.0, 5.0), (2.0, 3000.0, 5.0)], &[]);
    document["messages"]
        .as_object_mut()
        .unwrap()
        .remove("event");
    let source: ActivitySource = serde_json::from_value(document).unwrap();

    let err = processor(ProcessingConfig::default()).process(&source).unwrap_err();

    assert_eq!(err.activity_id, "20240512083000");
    assert_eq!(
        err.source,
        ProcessingError::MissingColumn {
            column: "event".to_owned()
        }
    );
}

#[test]
fn test_local_activity_without_file_id_reports_unknown_id() {
    let mut document = local_activity_document(&[(0.0, 3000.0, 5.0), (2.0, 3000.0, 5.0)], &[]);
    document["messages"]
        .as_object_mut()
        .unwrap()
        .remove("file_id");
    let source: ActivitySource = serde_json::from_value(document).unwrap();

    let err = processor(ProcessingConfig::default()).process(&source).unwrap_err();

    assert_eq!(err.activity_id, UNKNOWN_ACTIVITY_ID);
    assert_eq!(err.code(), ErrorCode::MissingColumn);
}

#[test]
fn test_non_timer_events_are_ignored() {
    let mut document = local_activity_document(
        &[(0.0, 3000.0, 5.0), (1.0, 3000.0, 5.0), (2.0, 3000.0, 5.0), (3.0, 3000.0, 5.0)],
        &[(0.0, "start"), (3.0, "stop_all")],
    );
    document["messages"]["event"]
        .as_array_mut()
        .unwrap()
        .push(serde_json::json!({
            "timestamp": common::at(1.0).to_rfc3339(),
            "event": "off_course",
            "event_type": "marker",
        }));
    let source: ActivitySource = serde_json::from_value(document).unwrap();

    let events = source.raw_events().unwrap();

    assert_eq!(events, vec![start(0.0), stop(3.0)]);
}

#[test]
fn test_activity_id_format() {
    assert_eq!(activity_id_from_time_created(base_time()), "20240512083000");
}

#[test]
fn test_invalid_config_is_rejected_by_processor() {
    let mut config = ProcessingConfig::default();
    config.resample.timestep_seconds = 0.0;

    let err = RecordProcessor::new(config).unwrap_err();

    assert_eq!(err.code(), ErrorCode::InvalidConfig);
}
