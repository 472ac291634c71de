// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, record table and event builders, and activity documents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyride Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `cyride`
//!
//! This module provides common fixtures to reduce duplication across
//! integration tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;

use chrono::{DateTime, Duration, TimeZone, Utc};
use cyride_core::models::{
    ActivityMetadata, ActivitySource, EventType, RawEvent, RecordTable, StoredActivity,
};
use cyride_pipeline::config::CorrectionConfig;
use cyride_pipeline::ProcessingConfig;
use serde_json::{json, Value};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fixed activity start used by every fixture
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 12, 8, 30, 0).unwrap()
}

/// `base_time()` plus `seconds`
pub fn at(seconds: f64) -> DateTime<Utc> {
    base_time() + Duration::microseconds((seconds * 1_000_000.0).round() as i64)
}

/// Table with timestamps at the given offsets and no columns
pub fn table_at(seconds: &[f64]) -> RecordTable {
    RecordTable::new(seconds.iter().map(|s| at(*s)).collect())
}

/// Table with one fully-populated column
pub fn table_with(seconds: &[f64], column: &str, values: &[f64]) -> RecordTable {
    table_at(seconds)
        .with_column(column, values.iter().copied().map(Some).collect())
        .unwrap()
}

/// Regular one-second grid `0..n`
pub fn seconds(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64).collect()
}

pub fn start(seconds: f64) -> RawEvent {
    RawEvent::new(at(seconds), EventType::Start)
}

pub fn stop(seconds: f64) -> RawEvent {
    RawEvent::new(at(seconds), EventType::Stop)
}

/// Default processing settings with the device glitch corrections switched off
pub fn uncorrected_config() -> ProcessingConfig {
    ProcessingConfig {
        corrections: CorrectionConfig::disabled(),
        ..ProcessingConfig::default()
    }
}

/// Stored activity over `table` bracketed by start/stop events
pub fn stored_activity(activity_id: &str, table: RecordTable, events: Vec<RawEvent>) -> ActivitySource {
    ActivitySource::Stored(StoredActivity {
        metadata: ActivityMetadata::with_id(activity_id),
        records: table,
        events,
    })
}

/// Decoded-FIT activity document with one record per `(seconds, altitude_raw, speed)` tuple
pub fn local_activity_document(samples: &[(f64, f64, f64)], events: &[(f64, &str)]) -> Value {
    let records: Vec<Value> = samples
        .iter()
        .map(|(s, altitude, speed)| {
            json!({
                "timestamp": at(*s).to_rfc3339(),
                "position_lat": 536_870_912,
                "position_long": -1_073_741_824,
                "enhanced_altitude": altitude,
                "enhanced_speed": speed,
                "heart_rate": 140,
                "distance": s * 5.0,
            })
        })
        .collect();
    let timer_events: Vec<Value> = events
        .iter()
        .map(|(s, subtype)| {
            json!({
                "timestamp": at(*s).to_rfc3339(),
                "event": "timer",
                "event_type": subtype,
            })
        })
        .collect();

    json!({
        "source": "local",
        "messages": {
            "file_id": [{
                "time_created": base_time().to_rfc3339(),
                "manufacturer": "garmin",
            }],
            "session": [{ "sport": "cycling" }],
            "record": records,
            "event": timer_events,
        }
    })
}

/// Write a JSON document to `dir/name`
pub fn write_document(dir: &Path, name: &str, document: &Value) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_string_pretty(document).unwrap()).unwrap();
    path
}
