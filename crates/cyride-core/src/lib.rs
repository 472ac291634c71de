// ABOUTME: Core types and constants for the cyride activity ETL pipeline
// ABOUTME: Foundation crate with error handling, unit constants, and record/event models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyride Contributors

#![deny(unsafe_code)]

//! # Cyride Core
//!
//! Foundation crate providing shared types and constants for the cyride
//! activity pipeline. Nothing in here performs I/O; the processing crate and
//! the batch driver build on these types.
//!
//! ## Modules
//!
//! - **errors**: Typed processing errors, error codes, and event consistency warnings
//! - **constants**: Unit conversion factors and empirical processing defaults
//! - **models**: Raw records, raw events, record tables, processed records, and activity sources

/// Typed processing errors, stable error codes, and recoverable warnings
pub mod errors;

/// Unit conversion factors and empirical processing defaults
pub mod constants;

/// Record, event, metadata, and activity source models
pub mod models;
