// ABOUTME: Vertical ascent rate (VAM) estimator over a one-second altitude series
// ABOUTME: Sliding exponentially-weighted regression slope, reported in meters per hour
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyride Contributors

//! # Vertical Ascent Rate
//!
//! Raw altitude is too noisy to difference directly. Instead each sample's
//! rate comes from a weighted line fit over the trailing window ending at
//! that sample, with recent samples weighted most. The first `window - 1`
//! samples have no full window and are left undefined.

use cyride_core::constants::processing::GRID_TOLERANCE_SECONDS;
use cyride_core::constants::units::SECONDS_PER_HOUR;
use cyride_core::errors::{ProcessingError, ProcessingResult};
use tracing::debug;

use crate::config::VamConfig;
use crate::regression::{LinearFit, WeightedRegression};

/// Spacing the estimator requires between samples (seconds)
pub const VAM_GRID_SECONDS: f64 = 1.0;

/// Sliding-window VAM estimator
#[derive(Debug, Clone, PartialEq)]
pub struct VamEstimator {
    regression: WeightedRegression,
}

impl VamEstimator {
    /// Create an estimator with the given half-life (seconds) and window (samples)
    ///
    /// # Errors
    ///
    /// Returns [`ProcessingError::InvalidConfig`] for a non-positive half-life
    /// or a window shorter than two samples
    pub fn new(half_life_seconds: f64, window: usize) -> ProcessingResult<Self> {
        Ok(Self {
            regression: WeightedRegression::exponential(half_life_seconds, window)?,
        })
    }

    /// Create an estimator from configuration
    ///
    /// # Errors
    ///
    /// Returns [`ProcessingError::InvalidConfig`] for invalid settings
    pub fn from_config(config: &VamConfig) -> ProcessingResult<Self> {
        Self::new(config.half_life_seconds, config.window_len())
    }

    /// Window length in samples
    #[must_use]
    pub fn window(&self) -> usize {
        self.regression.window()
    }

    /// VAM in meters per hour for every sample
    ///
    /// # Errors
    ///
    /// Returns [`ProcessingError::IrregularGrid`] if `elapsed_time` is not a
    /// one-second grid, and [`ProcessingError::InvalidField`] if the two
    /// series differ in length
    pub fn estimate(
        &self,
        elapsed_time: &[f64],
        altitude: &[Option<f64>],
    ) -> ProcessingResult<Vec<Option<f64>>> {
        check_grid(elapsed_time, altitude)?;
        let vam: Vec<Option<f64>> = self
            .windows(altitude, |regression, y| regression.slope(y))
            .into_iter()
            .map(|slope| slope.map(|s| s * SECONDS_PER_HOUR))
            .collect();

        debug!(
            samples = altitude.len(),
            window = self.window(),
            defined = vam.iter().filter(|v| v.is_some()).count(),
            "Computed vertical ascent rate"
        );
        Ok(vam)
    }

    /// Full line fits for every sample, for diagnostics
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::estimate`]
    pub fn fits(
        &self,
        elapsed_time: &[f64],
        altitude: &[Option<f64>],
    ) -> ProcessingResult<Vec<Option<LinearFit>>> {
        check_grid(elapsed_time, altitude)?;
        Ok(self.windows(altitude, WeightedRegression::fit))
    }

    fn windows<T>(
        &self,
        altitude: &[Option<f64>],
        fit: impl Fn(&WeightedRegression, &[f64]) -> T,
    ) -> Vec<Option<T>> {
        let window = self.window();
        let mut output: Vec<Option<T>> = Vec::with_capacity(altitude.len());
        output.resize_with(altitude.len().min(window - 1), || None);
        if altitude.len() < window {
            return output;
        }

        let mut buffer = Vec::with_capacity(window);
        for values in altitude.windows(window) {
            buffer.clear();
            buffer.extend(values.iter().map_while(|v| *v));
            output.push((buffer.len() == window).then(|| fit(&self.regression, &buffer)));
        }
        output
    }
}

fn check_grid(elapsed_time: &[f64], altitude: &[Option<f64>]) -> ProcessingResult<()> {
    if elapsed_time.len() != altitude.len() {
        return Err(ProcessingError::invalid_field(
            "altitude",
            format!(
                "{} altitude values for {} grid points",
                altitude.len(),
                elapsed_time.len()
            ),
        ));
    }
    for (offset, pair) in elapsed_time.windows(2).enumerate() {
        let step = pair[1] - pair[0];
        if (step - VAM_GRID_SECONDS).abs() > GRID_TOLERANCE_SECONDS {
            return Err(ProcessingError::IrregularGrid {
                index: offset + 1,
                step,
                expected: VAM_GRID_SECONDS,
            });
        }
    }
    Ok(())
}
