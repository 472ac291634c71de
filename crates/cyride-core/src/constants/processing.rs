// ABOUTME: Empirical and device-specific defaults for record processing
// ABOUTME: Resampling timestep, VAM smoothing parameters, and known glitch corrections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyride Contributors

/// Timestep for records resampling (seconds)
pub const DEFAULT_TIMESTEP_SECONDS: f64 = 1.0;

/// Half-life of the exponential weights used by the VAM regression (seconds)
pub const DEFAULT_VAM_HALF_LIFE_SECONDS: f64 = 7.0;

/// VAM regression window length, in multiples of the half-life
pub const DEFAULT_VAM_WINDOW_HALF_LIVES: f64 = 3.0;

/// Speeds above this value (m/s) are a known unit-corruption artifact
pub const DEFAULT_SPEED_GLITCH_THRESHOLD_MPS: f64 = 30.0;

/// Divisor that repairs a corrupted speed value
pub const DEFAULT_SPEED_GLITCH_DIVISOR: f64 = 1000.0;

/// Fixed offset of the stored altitude encoding
pub const DEFAULT_ALTITUDE_OFFSET: f64 = 2500.0;

/// Fixed scale of the stored altitude encoding
pub const DEFAULT_ALTITUDE_SCALE: f64 = 5.0;

/// Max non-spurious power reading (watts)
pub const DEFAULT_MAX_POWER_WATTS: f64 = 700.0;

/// Tolerance used when checking that a series lies on a regular grid (seconds)
pub const GRID_TOLERANCE_SECONDS: f64 = 1e-6;

/// Tolerance absorbing float error when counting grid points
pub const GRID_COUNT_EPSILON: f64 = 1e-9;
