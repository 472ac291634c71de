// ABOUTME: Unified error types for record processing with stable error codes
// ABOUTME: Defines ProcessingError, ActivityError, and the recoverable event warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyride Contributors

//! # Processing Error Types
//!
//! Every precondition violation in the pipeline surfaces as a
//! [`ProcessingError`] instead of silently-wrong numeric output. The batch
//! driver wraps those in [`ActivityError`] so each failure is tied to the
//! activity that produced it. Event anomalies that can be repaired or worked
//! around are [`EventConsistencyWarning`]s and never abort processing.

mod warning;

pub use warning::EventConsistencyWarning;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable error codes used in batch reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A required column or message is absent
    MissingColumn,
    /// Timestamps are not non-decreasing
    NonMonotonicTime,
    /// A series is not on the expected regular grid
    IrregularGrid,
    /// A grid point falls outside a column's sampled range
    Extrapolation,
    /// There is nothing to resample
    EmptyRecords,
    /// A field has an unusable value or a column has the wrong length
    InvalidField,
    /// Processing configuration is invalid
    InvalidConfig,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::MissingColumn => "A required column is missing from the record set",
            Self::NonMonotonicTime => "Record timestamps are not in non-decreasing order",
            Self::IrregularGrid => "The series is not on a regular one-second grid",
            Self::Extrapolation => "A resampling grid point lies outside the sampled range",
            Self::EmptyRecords => "The record set is empty or has zero duration",
            Self::InvalidField => "A field value or column shape is invalid",
            Self::InvalidConfig => "The processing configuration is invalid",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::MissingColumn => "MISSING_COLUMN",
            Self::NonMonotonicTime => "NON_MONOTONIC_TIME",
            Self::IrregularGrid => "IRREGULAR_GRID",
            Self::Extrapolation => "EXTRAPOLATION",
            Self::EmptyRecords => "EMPTY_RECORDS",
            Self::InvalidField => "INVALID_FIELD",
            Self::InvalidConfig => "INVALID_CONFIG",
        };
        f.write_str(name)
    }
}

/// Errors raised by the record processing pipeline
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProcessingError {
    /// A required column (or message table) is absent
    #[error("Missing required column '{column}'")]
    MissingColumn {
        /// Name of the missing column
        column: String,
    },

    /// Timestamps decrease somewhere in the record set
    #[error(
        "Timestamps are not non-decreasing at sample {index}: {previous_seconds}s followed by {current_seconds}s"
    )]
    NonMonotonicTime {
        /// Index of the first out-of-order sample
        index: usize,
        /// Elapsed seconds of the preceding sample
        previous_seconds: f64,
        /// Elapsed seconds of the offending sample
        current_seconds: f64,
    },

    /// A series that must be regular has a deviating step
    #[error("Series is not on a regular {expected}s grid: step of {step}s before sample {index}")]
    IrregularGrid {
        /// Index of the sample ending the irregular step
        index: usize,
        /// Observed step in seconds
        step: f64,
        /// Required step in seconds
        expected: f64,
    },

    /// A grid point lies outside the sampled range of a sparse column
    #[error(
        "Grid point {elapsed_time}s lies outside the sampled range [{valid_start}s, {valid_end}s] of column '{column}'"
    )]
    Extrapolation {
        /// Column being interpolated
        column: String,
        /// Offending grid point (elapsed seconds)
        elapsed_time: f64,
        /// First valid sample of the column (elapsed seconds)
        valid_start: f64,
        /// Last valid sample of the column (elapsed seconds)
        valid_end: f64,
    },

    /// The record set has no samples or spans zero time
    #[error("Record set is empty or spans less than one timestep")]
    EmptyRecords,

    /// A column has the wrong length or a field value cannot be used
    #[error("Invalid field '{field}': {reason}")]
    InvalidField {
        /// Field or column name
        field: String,
        /// Why it is unusable
        reason: String,
    },

    /// Processing configuration failed validation
    #[error("Invalid processing configuration: {0}")]
    InvalidConfig(String),
}

impl ProcessingError {
    /// Create a "missing column" error
    #[must_use]
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }

    /// Create an "invalid field" error
    #[must_use]
    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Stable code for this error
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::MissingColumn { .. } => ErrorCode::MissingColumn,
            Self::NonMonotonicTime { .. } => ErrorCode::NonMonotonicTime,
            Self::IrregularGrid { .. } => ErrorCode::IrregularGrid,
            Self::Extrapolation { .. } => ErrorCode::Extrapolation,
            Self::EmptyRecords => ErrorCode::EmptyRecords,
            Self::InvalidField { .. } => ErrorCode::InvalidField,
            Self::InvalidConfig(_) => ErrorCode::InvalidConfig,
        }
    }
}

/// A processing failure tied to the activity that produced it
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Activity {activity_id} failed: {source}")]
pub struct ActivityError {
    /// Identifier of the failed activity
    pub activity_id: String,
    /// Underlying processing error
    pub source: ProcessingError,
}

impl ActivityError {
    /// Wrap a processing error with its activity id
    #[must_use]
    pub fn new(activity_id: impl Into<String>, source: ProcessingError) -> Self {
        Self {
            activity_id: activity_id.into(),
            source,
        }
    }

    /// Stable code of the underlying error
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.source.code()
    }
}

/// Result alias for pipeline stages
pub type ProcessingResult<T> = Result<T, ProcessingError>;
