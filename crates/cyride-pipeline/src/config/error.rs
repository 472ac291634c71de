// ABOUTME: Configuration error types for processing configuration validation
// ABOUTME: Defines error variants for unparseable environment values and out-of-range settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyride Contributors

//! Configuration error types for processing configuration validation.

use cyride_core::errors::ProcessingError;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Environment variable holds a value that cannot be parsed
    #[error("Invalid value '{value}' for environment variable {variable}")]
    InvalidEnvValue {
        /// Variable name
        variable: &'static str,
        /// Raw value
        value: String,
    },

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// Unknown extrapolation policy name
    #[error("Unknown extrapolation policy '{0}' (expected 'error' or 'missing')")]
    UnknownExtrapolationPolicy(String),
}

impl From<ConfigError> for ProcessingError {
    fn from(error: ConfigError) -> Self {
        Self::InvalidConfig(error.to_string())
    }
}
