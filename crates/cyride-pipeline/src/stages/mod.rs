// ABOUTME: Column-level pipeline stages run before and after resampling
// ABOUTME: Canonical naming, glitch corrections, and unit conversions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyride Contributors

/// Canonical column naming
pub mod columns;

/// Device glitch corrections
pub mod corrections;

/// Unit conversions
pub mod units;

pub use columns::canonicalize_columns;
pub use corrections::apply_corrections;
pub use units::{convert_positions, convert_to_display_units};
