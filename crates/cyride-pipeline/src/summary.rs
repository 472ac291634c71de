// ABOUTME: Derived activity summary over processed records
// ABOUTME: Moving time, distance, elevation gain, and heart rate / power / VAM aggregates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyride Contributors

use cyride_core::models::{ActivitySummary, ProcessedRecord};

use crate::config::SummaryConfig;

/// Summarize processed records sampled every `timestep` seconds
///
/// Power readings above `config.max_power_watts` are spurious and ignored.
/// Elevation gain only counts climbs between two unpaused samples.
#[must_use]
pub fn summarize(
    records: &[ProcessedRecord],
    timestep: f64,
    config: &SummaryConfig,
) -> ActivitySummary {
    let (Some(first), Some(last)) = (records.first(), records.last()) else {
        return ActivitySummary::default();
    };

    let moving_samples = records.iter().filter(|r| !r.pause_mask).count();

    let distances: Vec<f64> = records.iter().filter_map(|r| r.distance).collect();
    let distance_miles = match (distances.first(), distances.last()) {
        (Some(start), Some(end)) => Some(end - start),
        _ => None,
    };

    let elevation_gain_feet = records
        .iter()
        .any(|r| r.altitude.is_some())
        .then(|| elevation_gain(records));

    let (average_heart_rate, max_heart_rate) =
        mean_and_max(records.iter().filter_map(|r| r.heart_rate));
    let (average_power, max_power) = mean_and_max(
        records
            .iter()
            .filter_map(|r| r.power)
            .filter(|watts| *watts <= config.max_power_watts),
    );
    let (_, max_vam) = mean_and_max(records.iter().filter_map(|r| r.vam));

    ActivitySummary {
        sample_count: records.len(),
        elapsed_seconds: last.elapsed_time - first.elapsed_time,
        moving_seconds: moving_samples as f64 * timestep,
        distance_miles,
        elevation_gain_feet,
        average_heart_rate,
        max_heart_rate,
        average_power,
        max_power,
        max_vam,
    }
}

fn elevation_gain(records: &[ProcessedRecord]) -> f64 {
    records
        .windows(2)
        .filter(|pair| !pair[0].pause_mask && !pair[1].pause_mask)
        .filter_map(|pair| match (pair[0].altitude, pair[1].altitude) {
            (Some(from), Some(to)) if to > from => Some(to - from),
            _ => None,
        })
        .sum()
}

fn mean_and_max(values: impl Iterator<Item = f64>) -> (Option<f64>, Option<f64>) {
    let mut count = 0usize;
    let mut total = 0.0;
    let mut max: Option<f64> = None;
    for value in values {
        count += 1;
        total += value;
        max = Some(max.map_or(value, |m| m.max(value)));
    }
    if count == 0 {
        (None, None)
    } else {
        (Some(total / count as f64), max)
    }
}
