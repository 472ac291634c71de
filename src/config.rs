// ABOUTME: Batch driver configuration merging environment variables with command-line overrides
// ABOUTME: Input/output locations, discovery pattern, worker count, and processing settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyride Contributors

use std::env;
use std::path::PathBuf;

use cyride_pipeline::{ConfigError, ProcessingConfig};
use serde::{Deserialize, Serialize};

/// Default glob pattern for activity files, relative to the input directory
pub const DEFAULT_FILE_PATTERN: &str = "*.json";

/// Environment variable names read by [`DriverConfig::from_environment`]
pub mod env_vars {
    /// Directory holding activity JSON files
    pub const INPUT_DIR: &str = "CYRIDE_INPUT_DIR";
    /// Directory receiving processed activities
    pub const OUTPUT_DIR: &str = "CYRIDE_OUTPUT_DIR";
    /// Glob pattern for activity files
    pub const FILE_PATTERN: &str = "CYRIDE_FILE_PATTERN";
    /// Worker thread count
    pub const THREADS: &str = "CYRIDE_THREADS";
}

/// Batch driver configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverConfig {
    /// Directory holding activity JSON files
    pub input_dir: PathBuf,
    /// Directory receiving processed activities
    pub output_dir: PathBuf,
    /// Glob pattern for activity files, relative to `input_dir`
    pub file_pattern: String,
    /// Worker thread count; `None` uses one per logical CPU
    pub threads: Option<usize>,
    /// Pipeline settings
    pub processing: ProcessingConfig,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_dir: default_output_dir(),
            file_pattern: DEFAULT_FILE_PATTERN.to_owned(),
            threads: None,
            processing: ProcessingConfig::default(),
        }
    }
}

/// Per-user data directory for processed output, falling back to `./processed`
#[must_use]
pub fn default_output_dir() -> PathBuf {
    dirs::data_local_dir().map_or_else(
        || PathBuf::from("processed"),
        |dir| dir.join("cyride").join("processed"),
    )
}

impl DriverConfig {
    /// Load configuration from environment variables over the defaults
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or validation fails
    pub fn from_environment() -> Result<Self, ConfigError> {
        let mut config = Self {
            processing: ProcessingConfig::from_environment()?,
            ..Self::default()
        };

        if let Ok(dir) = env::var(env_vars::INPUT_DIR) {
            config.input_dir = PathBuf::from(dir);
        }
        if let Ok(dir) = env::var(env_vars::OUTPUT_DIR) {
            config.output_dir = PathBuf::from(dir);
        }
        if let Ok(pattern) = env::var(env_vars::FILE_PATTERN) {
            config.file_pattern = pattern;
        }
        if let Ok(value) = env::var(env_vars::THREADS) {
            let threads = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidEnvValue {
                    variable: env_vars::THREADS,
                    value,
                })?;
            config.threads = Some(threads);
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.file_pattern.trim().is_empty() {
            return Err(ConfigError::ValueOutOfRange("file_pattern must not be empty"));
        }
        if self.threads == Some(0) {
            return Err(ConfigError::ValueOutOfRange("threads must be at least 1"));
        }
        self.processing.validate()
    }

    /// Full discovery pattern: `input_dir` joined with `file_pattern`
    #[must_use]
    pub fn discovery_pattern(&self) -> String {
        self.input_dir
            .join(&self.file_pattern)
            .to_string_lossy()
            .into_owned()
    }
}
