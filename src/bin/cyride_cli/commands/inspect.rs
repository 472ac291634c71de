// ABOUTME: Single-activity inspection command for cyride-cli
// ABOUTME: Loads and processes one document, printing its summary or full JSON without writing output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyride Contributors

use std::path::Path;

use anyhow::Result;
use cyride::config::DriverConfig;
use cyride::ingest::load_activity;
use cyride_pipeline::RecordProcessor;

use crate::helpers::display::display_activity_summary;

/// Process `file` and print the result
pub fn run(config: &DriverConfig, file: &Path, json: bool) -> Result<()> {
    let source = load_activity(file)?;
    let processor = RecordProcessor::new(config.processing.clone())?;
    let activity = processor.process(&source)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&activity)?);
    } else {
        display_activity_summary(&activity);
    }
    Ok(())
}
