// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for unit conversion and record processing defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyride Contributors

//! Constants module
//!
//! Constants are grouped by domain: physical unit conversions live in
//! [`units`], empirical and device-specific processing defaults in
//! [`processing`], and record/message field names in [`fields`].

/// Unit conversion and measurement constants
pub mod units;

/// Empirical defaults for resampling, VAM, and glitch correction
pub mod processing;

/// FIT message and record field names
pub mod fields;
