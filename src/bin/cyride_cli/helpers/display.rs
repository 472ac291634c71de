// ABOUTME: Output formatting helpers for cyride-cli
// ABOUTME: Human-readable batch reports and activity summaries on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyride Contributors

use std::path::Path;

use cyride::batch::BatchReport;
use cyride_core::models::ProcessedActivity;

/// Display the outcome of a batch run
pub fn display_batch_report(report: &BatchReport, output_dir: &Path) {
    println!("\nBatch Run {}", report.run_id);
    println!("{}", "=".repeat(60));
    println!("   Started: {}", report.started_at.format("%Y-%m-%d %H:%M:%S UTC"));
    println!("   Duration: {} ms", report.duration_ms);
    println!("   Processed: {}", report.processed);
    println!("   Failed: {}", report.failed);
    println!("   Event warnings: {}", report.warnings);
    println!("   Output: {}", output_dir.display());

    if !report.failures.is_empty() {
        println!("\nFAILURES:");
        println!("{}", "-".repeat(60));
        for failure in &report.failures {
            println!(
                "   {} [{}] {}",
                failure.activity_id, failure.code, failure.message
            );
            println!("      file: {}", failure.path.display());
        }
    }
}

/// Display a processed activity's summary
pub fn display_activity_summary(activity: &ProcessedActivity) {
    let summary = &activity.summary;
    println!("\nActivity {}", activity.activity_id);
    println!("{}", "=".repeat(60));
    println!("   Start: {}", activity.start_time.format("%Y-%m-%d %H:%M:%S UTC"));
    println!("   Timestep: {} s", activity.timestep);
    println!("   Samples: {}", summary.sample_count);
    println!("   Elapsed: {}", format_duration(summary.elapsed_seconds));
    println!("   Moving: {}", format_duration(summary.moving_seconds));
    println!("   Distance: {}", format_optional(summary.distance_miles, "mi", 2));
    println!(
        "   Elevation gain: {}",
        format_optional(summary.elevation_gain_feet, "ft", 0)
    );
    println!(
        "   Heart rate: avg {} / max {}",
        format_optional(summary.average_heart_rate, "bpm", 0),
        format_optional(summary.max_heart_rate, "bpm", 0)
    );
    println!(
        "   Power: avg {} / max {}",
        format_optional(summary.average_power, "W", 0),
        format_optional(summary.max_power, "W", 0)
    );
    println!("   Max VAM: {}", format_optional(summary.max_vam, "m/h", 0));

    if !activity.warnings.is_empty() {
        println!("\nEVENT WARNINGS:");
        for warning in &activity.warnings {
            println!("   - {warning}");
        }
    }
}

fn format_duration(seconds: f64) -> String {
    let total = seconds.max(0.0).round() as u64;
    format!("{}:{:02}:{:02}", total / 3600, (total % 3600) / 60, total % 60)
}

fn format_optional(value: Option<f64>, unit: &str, precision: usize) -> String {
    value.map_or_else(|| "n/a".to_owned(), |v| format!("{v:.precision$} {unit}"))
}
