// ABOUTME: Batch processing command for cyride-cli
// ABOUTME: Discovers activity files, runs them on the worker pool, and reports the outcome
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyride Contributors

use anyhow::{bail, Result};
use cyride::batch::BatchProcessor;
use cyride::config::DriverConfig;
use cyride::ingest::discover_activity_files;
use cyride::sink::JsonDirectorySink;
use cyride_pipeline::RecordProcessor;
use tracing::{info, warn};

use crate::helpers::display::display_batch_report;

/// Process every activity under the configured input directory
pub fn run(config: &DriverConfig, json: bool) -> Result<()> {
    let pattern = config.discovery_pattern();
    let files = discover_activity_files(&pattern)?;
    if files.is_empty() {
        warn!(pattern = %pattern, "No activity files found");
        return Ok(());
    }
    info!(
        count = files.len(),
        output_dir = %config.output_dir.display(),
        "Processing activities"
    );

    let sink = JsonDirectorySink::new(&config.output_dir)?;
    let processor = RecordProcessor::new(config.processing.clone())?;
    let report = BatchProcessor::new(processor, config.threads).run(&files, &sink)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display_batch_report(&report, sink.dir());
    }

    if report.processed == 0 {
        bail!("all {} activities failed", report.failed);
    }
    Ok(())
}
