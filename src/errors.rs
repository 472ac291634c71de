// ABOUTME: Batch driver error types for activity discovery, loading, and output
// ABOUTME: Wraps I/O, JSON, glob, configuration, and thread pool failures with file context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyride Contributors

//! # Driver Errors
//!
//! Processing failures live in [`cyride_core::errors`]; this module covers
//! everything around them: finding input files, reading and decoding them,
//! and writing results.

use std::io;
use std::path::PathBuf;

use cyride_pipeline::ConfigError;
use thiserror::Error;

/// Errors raised while discovering, loading, or writing activities
#[derive(Debug, Error)]
pub enum IngestError {
    /// Reading or writing a file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// A file is not a valid activity or processed-activity document
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        /// File involved
        path: PathBuf,
        /// Underlying error
        source: serde_json::Error,
    },

    /// The discovery pattern is malformed
    #[error("Invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// A matched path could not be read during discovery
    #[error("File discovery failed: {0}")]
    Glob(#[from] glob::GlobError),

    /// Driver or processing configuration is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The processing pipeline rejected its configuration
    #[error("Processing setup failed: {0}")]
    Processing(#[from] cyride_core::errors::ProcessingError),

    /// An activity id cannot be used as an output file name
    #[error("Activity id {activity_id:?} is not a valid output file name")]
    InvalidActivityId {
        /// Offending id
        activity_id: String,
    },

    /// Another input earlier in the batch already produced this activity id
    #[error("Activity id {activity_id} already produced by {first}")]
    DuplicateActivityId {
        /// Repeated id
        activity_id: String,
        /// Input that claimed the id first
        first: PathBuf,
    },

    /// The worker pool could not be created
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl IngestError {
    /// Create an I/O error for `path`
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a JSON error for `path`
    #[must_use]
    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }

    /// Stable code used in batch reports
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "IO_ERROR",
            Self::Json { .. } => "INVALID_JSON",
            Self::Pattern(_) | Self::Glob(_) => "DISCOVERY_ERROR",
            Self::Config(_) | Self::Processing(_) => "INVALID_CONFIG",
            Self::InvalidActivityId { .. } => "INVALID_ACTIVITY_ID",
            Self::DuplicateActivityId { .. } => "DUPLICATE_ACTIVITY_ID",
            Self::ThreadPool(_) => "WORKER_POOL_ERROR",
        }
    }
}

/// Result alias for driver operations
pub type IngestResult<T> = Result<T, IngestError>;
