// ABOUTME: Main library entry point for the Cyride activity ETL driver
// ABOUTME: Discovers activity documents, runs the processing pipeline in parallel, and writes results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyride Contributors

#![deny(unsafe_code)]

//! # Cyride
//!
//! Batch driver for the activity processing pipeline. Raw activities arrive
//! as JSON documents, either decoded FIT messages (`"source": "local"`) or a
//! stored record table plus timer events (`"source": "stored"`). Each one is
//! run through [`cyride_pipeline::RecordProcessor`] and handed to a
//! [`sink::RecordSink`].
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use cyride::batch::BatchProcessor;
//! use cyride::config::DriverConfig;
//! use cyride::ingest::discover_activity_files;
//! use cyride::sink::JsonDirectorySink;
//! use cyride_pipeline::RecordProcessor;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = DriverConfig::from_environment()?;
//!     let files = discover_activity_files(&config.discovery_pattern())?;
//!     let sink = JsonDirectorySink::new(&config.output_dir)?;
//!     let processor = RecordProcessor::new(config.processing.clone())?;
//!     let report = BatchProcessor::new(processor, config.threads).run(&files, &sink)?;
//!     println!("processed {} activities", report.processed);
//!     Ok(())
//! }
//! ```

/// Parallel batch driver and run reports
pub mod batch;

/// Driver configuration from environment and command line
pub mod config;

/// Driver error types
pub mod errors;

/// Activity file discovery and loading
pub mod ingest;

/// Structured logging setup
pub mod logging;

/// Destinations for processed activities
pub mod sink;

pub use batch::{BatchFailure, BatchProcessor, BatchReport};
pub use config::DriverConfig;
pub use errors::{IngestError, IngestResult};
pub use sink::{JsonDirectorySink, MemorySink, RecordSink};
