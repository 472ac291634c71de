// ABOUTME: Integration tests for fixed-timestep resampling of record tables
// ABOUTME: Covers grid determinism, interpolation accuracy, repeated timestamps, and extrapolation policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyride Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{at, table_at, table_with};
use cyride_core::errors::{ErrorCode, ProcessingError};
use cyride_core::models::RecordTable;
use cyride_pipeline::resample::Resampler;
use cyride_pipeline::ExtrapolationPolicy;

fn resampler(timestep: f64) -> Resampler {
    Resampler::new(timestep, ExtrapolationPolicy::Error).unwrap()
}

#[test]
fn test_grid_has_floor_total_over_timestep_points() {
    common::init_test_logging();
    let table = table_with(&[0.0, 0.7, 2.2, 4.5, 7.9], "power", &[100.0, 110.0, 120.0, 130.0, 140.0]);

    let resampled = resampler(1.0).resample(&table).unwrap();

    assert_eq!(resampled.len(), 7);
    for (i, t) in resampled.elapsed_time().iter().enumerate() {
        assert!((t - i as f64).abs() < f64::EPSILON, "grid point {i} was {t}");
    }
}

#[test]
fn test_grid_with_wider_timestep() {
    let table = table_with(&[0.0, 3.0, 6.0, 10.0], "cadence", &[80.0, 82.0, 84.0, 86.0]);

    let resampled = resampler(2.5).resample(&table).unwrap();

    let expected = [0.0, 2.5, 5.0, 7.5];
    assert_eq!(resampled.len(), expected.len());
    for (e, a) in expected.iter().zip(resampled.elapsed_time()) {
        assert!((e - a).abs() < 1e-12);
    }
    assert!((resampled.timestep() - 2.5).abs() < f64::EPSILON);
}

#[test]
fn test_grid_is_deterministic_across_runs() {
    let table = table_with(&[0.0, 1.1, 2.9, 3.3], "heart_rate", &[120.0, 125.0, 131.0, 133.0]);

    let first = resampler(1.0).resample(&table).unwrap();
    let second = resampler(1.0).resample(&table).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_regular_samples_round_trip() {
    let times: Vec<f64> = (0..=10).map(f64::from).collect();
    let values: Vec<f64> = times.iter().map(|t| 0.5f64.mul_add(t * t, 3.0)).collect();
    let table = table_with(&times, "altitude", &values);

    let resampled = resampler(1.0).resample(&table).unwrap();
    let altitude = resampled.column("altitude").unwrap();

    assert_eq!(altitude.len(), 10);
    for (expected, actual) in values.iter().zip(altitude) {
        assert!((expected - actual.unwrap()).abs() < 1e-9);
    }
}

#[test]
fn test_linear_interpolation_between_samples() {
    let table = table_with(&[0.0, 2.0, 4.0], "speed", &[0.0, 10.0, 30.0]);

    let resampled = resampler(1.0).resample(&table).unwrap();
    let speed: Vec<f64> = resampled
        .column("speed")
        .unwrap()
        .iter()
        .map(|v| v.unwrap())
        .collect();

    let expected = [0.0, 5.0, 10.0, 20.0];
    for (e, a) in expected.iter().zip(&speed) {
        assert!((e - a).abs() < 1e-9, "expected {e}, got {a}");
    }
}

#[test]
fn test_columns_interpolate_through_their_own_gaps() {
    let table = table_at(&[0.0, 1.0, 2.0, 3.0, 4.0])
        .with_column("power", vec![Some(100.0), None, None, Some(160.0), Some(160.0)])
        .unwrap()
        .with_column("cadence", vec![Some(80.0), Some(80.0), Some(90.0), Some(90.0), Some(90.0)])
        .unwrap();

    let resampled = resampler(1.0).resample(&table).unwrap();
    let power = resampled.column("power").unwrap();

    assert!((power[1].unwrap() - 120.0).abs() < 1e-9);
    assert!((power[2].unwrap() - 140.0).abs() < 1e-9);
    assert!((resampled.column("cadence").unwrap()[2].unwrap() - 90.0).abs() < 1e-9);
}

#[test]
fn test_repeated_timestamp_keeps_last_sample() {
    let table = table_with(&[0.0, 1.0, 1.0, 2.0, 3.0], "power", &[100.0, 150.0, 200.0, 200.0, 200.0]);

    let resampled = resampler(1.0).resample(&table).unwrap();

    assert!((resampled.column("power").unwrap()[1].unwrap() - 200.0).abs() < 1e-9);
}

#[test]
fn test_start_time_is_first_timestamp() {
    let table = table_with(&[0.0, 1.5, 3.0], "power", &[1.0, 2.0, 3.0]);

    let resampled = resampler(1.0).resample(&table).unwrap();

    assert_eq!(resampled.start_time(), at(0.0));
}

#[test]
fn test_empty_table_is_rejected() {
    let err = resampler(1.0).resample(&RecordTable::default()).unwrap_err();
    assert_eq!(err, ProcessingError::EmptyRecords);
    assert_eq!(err.code(), ErrorCode::EmptyRecords);
}

#[test]
fn test_shorter_than_one_timestep_is_rejected() {
    let table = table_with(&[0.0, 0.4, 0.8], "power", &[1.0, 2.0, 3.0]);
    assert_eq!(
        resampler(1.0).resample(&table).unwrap_err(),
        ProcessingError::EmptyRecords
    );
}

#[test]
fn test_decreasing_timestamps_are_rejected() {
    let table = table_with(&[0.0, 2.0, 1.0, 3.0], "power", &[1.0, 2.0, 3.0, 4.0]);

    let err = resampler(1.0).resample(&table).unwrap_err();

    match err {
        ProcessingError::NonMonotonicTime { index, .. } => assert_eq!(index, 2),
        other => panic!("expected NonMonotonicTime, got {other:?}"),
    }
}

#[test]
fn test_extrapolation_error_policy_fails() {
    let table = table_at(&[0.0, 1.0, 2.0, 3.0, 4.0])
        .with_column("heart_rate", vec![None, None, Some(130.0), Some(132.0), Some(134.0)])
        .unwrap();

    let err = resampler(1.0).resample(&table).unwrap_err();

    match err {
        ProcessingError::Extrapolation {
            column,
            elapsed_time,
            valid_start,
            valid_end,
        } => {
            assert_eq!(column, "heart_rate");
            assert!(elapsed_time.abs() < f64::EPSILON);
            assert!((valid_start - 2.0).abs() < f64::EPSILON);
            assert!((valid_end - 4.0).abs() < f64::EPSILON);
        }
        other => panic!("expected Extrapolation, got {other:?}"),
    }
}

#[test]
fn test_extrapolation_missing_policy_yields_none_outside_range() {
    let table = table_at(&[0.0, 1.0, 2.0, 3.0, 4.0])
        .with_column("heart_rate", vec![None, None, Some(130.0), Some(132.0), Some(134.0)])
        .unwrap();

    let resampled = Resampler::new(1.0, ExtrapolationPolicy::Missing)
        .unwrap()
        .resample(&table)
        .unwrap();
    let heart_rate = resampled.column("heart_rate").unwrap();

    assert_eq!(heart_rate[0], None);
    assert_eq!(heart_rate[1], None);
    assert!((heart_rate[2].unwrap() - 130.0).abs() < 1e-9);
    assert!((heart_rate[3].unwrap() - 132.0).abs() < 1e-9);
}

#[test]
fn test_column_without_values_resamples_to_none() {
    let table = table_at(&[0.0, 1.0, 2.0, 3.0])
        .with_column("temperature", vec![None; 4])
        .unwrap();

    let resampled = resampler(1.0).resample(&table).unwrap();

    assert!(resampled.column("temperature").unwrap().iter().all(Option::is_none));
}

#[test]
fn test_invalid_timestep_is_rejected() {
    assert!(Resampler::new(0.0, ExtrapolationPolicy::Error).is_err());
    assert!(Resampler::new(-1.0, ExtrapolationPolicy::Error).is_err());
    assert!(Resampler::new(f64::NAN, ExtrapolationPolicy::Error).is_err());
}
