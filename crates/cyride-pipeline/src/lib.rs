// ABOUTME: Record processing pipeline for the cyride activity ETL
// ABOUTME: Resampling, event cleaning and pause masks, VAM estimation, and derived summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyride Contributors

#![deny(unsafe_code)]

//! # Cyride Pipeline
//!
//! Pure, single-activity transformations from raw device records to a
//! uniformly-sampled, unit-converted, pause-aware series. Nothing here
//! performs I/O or shares state between activities, so callers may process
//! any number of activities in parallel.
//!
//! ## Stages
//!
//! 1. [`stages::columns`]: canonical column names
//! 2. [`stages::corrections`]: device glitch corrections
//! 3. [`stages::units`]: semicircles to degrees
//! 4. [`resample`]: fixed-timestep grid
//! 5. [`events`] and [`pause`]: cleaned timer events and the pause mask
//! 6. [`vam`]: vertical ascent rate
//! 7. [`stages::units`]: display units
//! 8. [`summary`]: derived statistics
//!
//! [`pipeline::RecordProcessor`] runs them in order.

/// Processing configuration and environment overrides
pub mod config;

/// Timer event cleaning
pub mod events;

/// Pause mask construction
pub mod pause;

/// Record processing pipeline entry point
pub mod pipeline;

/// Weighted linear regression
pub mod regression;

/// Fixed-timestep resampling
pub mod resample;

/// Column-level stages
pub mod stages;

/// Derived activity summary
pub mod summary;

/// Vertical ascent rate estimation
pub mod vam;

pub use config::{ConfigError, ExtrapolationPolicy, ProcessingConfig};
pub use pipeline::RecordProcessor;
