// ABOUTME: Weighted least-squares line fitting over a fixed window with precomputed slope kernel
// ABOUTME: Exponential recency weights parameterized by a half-life in samples
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyride Contributors

//! # Weighted Linear Regression
//!
//! Fits `y = offset + slope * x` over `x = 0..n-1` with fixed weights. Since
//! the x positions and weights never change between windows, the slope is a
//! linear functional of `y`:
//!
//! ```text
//! slope = sum_i c_i * y_i,   c_i = w_i * (x_i - x_mean) / S_xx
//! ```
//!
//! where `x_mean` and `S_xx` are the weighted mean and weighted sum of
//! squared deviations of x. [`WeightedRegression`] stores `c` once so each
//! fit costs a single dot product.

use cyride_core::errors::{ProcessingError, ProcessingResult};

/// Exponential weights over `window` samples, most recent sample heaviest
///
/// `alpha = 1 - 0.5^(1 / half_life)`; the raw weight `i` samples before the
/// window end is `(1 - alpha)^i`. Weights are normalized to sum to one.
#[must_use]
pub fn exponential_weights(half_life: f64, window: usize) -> Vec<f64> {
    let alpha = 1.0 - 0.5_f64.powf(1.0 / half_life);
    let decay = 1.0 - alpha;
    let mut weights: Vec<f64> = (0..window).map(|i| decay.powf(i as f64)).collect();
    weights.reverse();
    let total: f64 = weights.iter().sum();
    if total > 0.0 {
        for weight in &mut weights {
            *weight /= total;
        }
    }
    weights
}

/// Result of one weighted fit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    /// Fitted slope (units of y per sample)
    pub slope: f64,
    /// Fitted value at `x = 0`
    pub offset: f64,
    /// Unweighted root-mean-square residual
    pub rms_residual: f64,
}

/// Weighted least-squares fit over a fixed window
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedRegression {
    weights: Vec<f64>,
    kernel: Vec<f64>,
    x_mean: f64,
}

impl WeightedRegression {
    /// Prepare a regression for the given weights
    ///
    /// # Errors
    ///
    /// Returns [`ProcessingError::InvalidConfig`] if there are fewer than two
    /// weights, any weight is negative or non-finite, or the weights do not
    /// have a positive sum
    pub fn new(weights: Vec<f64>) -> ProcessingResult<Self> {
        if weights.len() < 2 {
            return Err(ProcessingError::InvalidConfig(
                "regression window must span at least two samples".to_owned(),
            ));
        }
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(ProcessingError::InvalidConfig(
                "regression weights must be finite and non-negative".to_owned(),
            ));
        }
        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return Err(ProcessingError::InvalidConfig(
                "regression weights must have a positive sum".to_owned(),
            ));
        }
        let weights: Vec<f64> = weights.iter().map(|w| w / total).collect();

        let x_mean: f64 = weights.iter().enumerate().map(|(i, w)| w * i as f64).sum();
        let s_xx: f64 = weights
            .iter()
            .enumerate()
            .map(|(i, w)| w * (i as f64 - x_mean).powi(2))
            .sum();
        if s_xx <= 0.0 {
            return Err(ProcessingError::InvalidConfig(
                "regression weights are concentrated on a single sample".to_owned(),
            ));
        }

        let kernel = weights
            .iter()
            .enumerate()
            .map(|(i, w)| w * (i as f64 - x_mean) / s_xx)
            .collect();

        Ok(Self {
            weights,
            kernel,
            x_mean,
        })
    }

    /// Exponentially-weighted regression over `window` samples
    ///
    /// # Errors
    ///
    /// Returns [`ProcessingError::InvalidConfig`] if the half-life is not
    /// positive or the window is shorter than two samples
    pub fn exponential(half_life: f64, window: usize) -> ProcessingResult<Self> {
        if !half_life.is_finite() || half_life <= 0.0 {
            return Err(ProcessingError::InvalidConfig(format!(
                "half-life must be a positive number, got {half_life}"
            )));
        }
        Self::new(exponential_weights(half_life, window))
    }

    /// Window length
    #[must_use]
    pub fn window(&self) -> usize {
        self.weights.len()
    }

    /// Normalized weights
    #[must_use]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Fitted slope of `y`, which must have exactly [`Self::window`] values
    #[must_use]
    pub fn slope(&self, y: &[f64]) -> f64 {
        self.kernel.iter().zip(y).map(|(c, y)| c * y).sum()
    }

    /// Full fit of `y`, which must have exactly [`Self::window`] values
    #[must_use]
    pub fn fit(&self, y: &[f64]) -> LinearFit {
        let slope = self.slope(y);
        let y_mean: f64 = self.weights.iter().zip(y).map(|(w, y)| w * y).sum();
        let offset = slope.mul_add(-self.x_mean, y_mean);

        let squared: f64 = y
            .iter()
            .enumerate()
            .map(|(i, y)| (y - slope.mul_add(i as f64, offset)).powi(2))
            .sum();
        let rms_residual = (squared / y.len().max(1) as f64).sqrt();

        LinearFit {
            slope,
            offset,
            rms_residual,
        }
    }
}
