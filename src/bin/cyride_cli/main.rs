// ABOUTME: Cyride CLI - batch processing and inspection of recorded activities
// ABOUTME: Parses arguments, initializes logging, merges overrides into DriverConfig, dispatches commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyride Contributors
//!
//! Usage:
//! ```bash
//! # Process every activity document in a directory
//! cyride-cli process ./activities --output ./processed
//!
//! # Four workers, 2 s grid, missing values instead of extrapolation errors
//! cyride-cli process ./activities --threads 4 --timestep 2 --extrapolation missing
//!
//! # Print one activity's summary
//! cyride-cli inspect ./activities/20240512083000.json
//!
//! # Debug logging
//! cyride-cli -v process ./activities
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cyride::config::DriverConfig;
use cyride::logging::LoggingConfig;
use cyride_pipeline::ExtrapolationPolicy;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "cyride-cli",
    about = "Cyride activity processing CLI",
    long_about = "Resamples raw activity records onto a fixed grid, derives pause masks and VAM, and writes processed activities."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// Pipeline overrides shared by every command
#[derive(clap::Args)]
struct PipelineArgs {
    /// Resampling timestep in seconds
    #[arg(long)]
    timestep: Option<f64>,

    /// Extrapolation policy: error or missing
    #[arg(long)]
    extrapolation: Option<ExtrapolationPolicy>,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Process every activity document in a directory
    Process {
        /// Directory holding activity JSON files
        input_dir: PathBuf,

        /// Directory receiving processed activities
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Worker thread count (default: one per CPU)
        #[arg(long, short = 't')]
        threads: Option<usize>,

        /// Glob pattern for activity files, relative to the input directory
        #[arg(long)]
        pattern: Option<String>,

        /// Print the batch report as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        pipeline: PipelineArgs,
    },

    /// Process one activity document and print its summary
    Inspect {
        /// Activity JSON file
        file: PathBuf,

        /// Print the full processed activity as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        pipeline: PipelineArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::from_env().verbose(cli.verbose).init()?;

    let mut config = DriverConfig::from_environment()?;

    match cli.command {
        Command::Process {
            input_dir,
            output,
            threads,
            pattern,
            json,
            pipeline,
        } => {
            config.input_dir = input_dir;
            if let Some(output) = output {
                config.output_dir = output;
            }
            if threads.is_some() {
                config.threads = threads;
            }
            if let Some(pattern) = pattern {
                config.file_pattern = pattern;
            }
            apply_pipeline_args(&mut config, &pipeline);
            config.validate()?;
            debug!(?config, "Resolved driver configuration");
            commands::process::run(&config, json)?;
        }
        Command::Inspect {
            file,
            json,
            pipeline,
        } => {
            apply_pipeline_args(&mut config, &pipeline);
            config.validate()?;
            commands::inspect::run(&config, &file, json)?;
        }
    }

    Ok(())
}

fn apply_pipeline_args(config: &mut DriverConfig, args: &PipelineArgs) {
    if let Some(timestep) = args.timestep {
        config.processing.resample.timestep_seconds = timestep;
    }
    if let Some(extrapolation) = args.extrapolation {
        config.processing.resample.extrapolation = extrapolation;
    }
}
