// ABOUTME: Resampler mapping an irregularly-sampled record table onto a fixed-timestep grid
// ABOUTME: Each column is linearly interpolated through its own valid samples
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyride Contributors

//! # Resampler
//!
//! Converts a [`RecordTable`] with arbitrary sample times into a
//! [`ResampledTable`] on the grid `0, dt, 2dt, ...`. The grid has
//! `floor(total_elapsed / dt)` points, so it never reaches past the last
//! sample. Columns are interpolated independently: a dropout in one sensor
//! never affects another.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use cyride_core::constants::processing::GRID_COUNT_EPSILON;
use cyride_core::errors::{ProcessingError, ProcessingResult};
use cyride_core::models::RecordTable;
use tracing::debug;

use crate::config::{ExtrapolationPolicy, ResampleConfig};

/// A record set on a regular grid
#[derive(Debug, Clone, PartialEq)]
pub struct ResampledTable {
    start_time: DateTime<Utc>,
    timestep: f64,
    elapsed_time: Vec<f64>,
    columns: BTreeMap<String, Vec<Option<f64>>>,
}

impl ResampledTable {
    /// Absolute time of the first grid point
    #[must_use]
    pub const fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    /// Grid spacing (seconds)
    #[must_use]
    pub const fn timestep(&self) -> f64 {
        self.timestep
    }

    /// Grid points in seconds since the first sample
    #[must_use]
    pub fn elapsed_time(&self) -> &[f64] {
        &self.elapsed_time
    }

    /// Number of grid points
    #[must_use]
    pub fn len(&self) -> usize {
        self.elapsed_time.len()
    }

    /// Whether the grid is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elapsed_time.is_empty()
    }

    /// Interpolated column by name
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&[Option<f64>]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    /// Whether a column exists
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Iterate over `(name, values)` pairs in name order
    pub fn columns(&self) -> impl Iterator<Item = (&str, &[Option<f64>])> {
        self.columns
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Apply `f` to every present value of a column; returns false when absent
    pub fn map_column(&mut self, name: &str, f: impl Fn(f64) -> f64) -> bool {
        match self.columns.get_mut(name) {
            Some(values) => {
                for value in values.iter_mut().flatten() {
                    *value = f(*value);
                }
                true
            }
            None => false,
        }
    }

    /// Remove a column, returning its values
    pub fn remove_column(&mut self, name: &str) -> Option<Vec<Option<f64>>> {
        self.columns.remove(name)
    }
}

/// Linear resampler onto a fixed-timestep grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resampler {
    timestep: f64,
    extrapolation: ExtrapolationPolicy,
}

impl Resampler {
    /// Create a resampler
    ///
    /// # Errors
    ///
    /// Returns [`ProcessingError::InvalidConfig`] if the timestep is not a
    /// positive finite number
    pub fn new(timestep: f64, extrapolation: ExtrapolationPolicy) -> ProcessingResult<Self> {
        if !timestep.is_finite() || timestep <= 0.0 {
            return Err(ProcessingError::InvalidConfig(format!(
                "timestep must be a positive number, got {timestep}"
            )));
        }
        Ok(Self {
            timestep,
            extrapolation,
        })
    }

    /// Create a resampler from configuration
    ///
    /// # Errors
    ///
    /// Returns [`ProcessingError::InvalidConfig`] if the timestep is invalid
    pub fn from_config(config: &ResampleConfig) -> ProcessingResult<Self> {
        Self::new(config.timestep_seconds, config.extrapolation)
    }

    /// Grid spacing (seconds)
    #[must_use]
    pub const fn timestep(&self) -> f64 {
        self.timestep
    }

    /// Resample every column of `table` onto the grid
    ///
    /// # Errors
    ///
    /// - [`ProcessingError::NonMonotonicTime`] if timestamps decrease
    /// - [`ProcessingError::EmptyRecords`] if the grid would have no points
    /// - [`ProcessingError::Extrapolation`] if a grid point falls outside a
    ///   column's valid range under [`ExtrapolationPolicy::Error`]
    pub fn resample(&self, table: &RecordTable) -> ProcessingResult<ResampledTable> {
        let elapsed = table.elapsed_seconds()?;
        let (Some(start_time), Some(&total)) = (table.start_time(), elapsed.last()) else {
            return Err(ProcessingError::EmptyRecords);
        };

        let count = (total / self.timestep + GRID_COUNT_EPSILON).floor() as usize;
        if count == 0 {
            return Err(ProcessingError::EmptyRecords);
        }
        let grid: Vec<f64> = (0..count).map(|i| i as f64 * self.timestep).collect();

        let mut columns = BTreeMap::new();
        for (name, values) in table.columns() {
            let points = valid_points(&elapsed, values);
            let resampled = self.interpolate_column(name, &points, &grid)?;
            columns.insert(name.to_owned(), resampled);
        }

        debug!(
            samples = table.len(),
            grid_points = count,
            timestep = self.timestep,
            columns = columns.len(),
            "Resampled record table"
        );

        Ok(ResampledTable {
            start_time,
            timestep: self.timestep,
            elapsed_time: grid,
            columns,
        })
    }

    fn interpolate_column(
        &self,
        column: &str,
        points: &[(f64, f64)],
        grid: &[f64],
    ) -> ProcessingResult<Vec<Option<f64>>> {
        let (Some(&(first_x, _)), Some(&(last_x, _))) = (points.first(), points.last()) else {
            return Ok(vec![None; grid.len()]);
        };

        let mut output = Vec::with_capacity(grid.len());
        let mut segment = 0usize;
        for &t in grid {
            if t < first_x - GRID_COUNT_EPSILON || t > last_x + GRID_COUNT_EPSILON {
                match self.extrapolation {
                    ExtrapolationPolicy::Error => {
                        return Err(ProcessingError::Extrapolation {
                            column: column.to_owned(),
                            elapsed_time: t,
                            valid_start: first_x,
                            valid_end: last_x,
                        });
                    }
                    ExtrapolationPolicy::Missing => {
                        output.push(None);
                        continue;
                    }
                }
            }

            // advance so that points[segment].x <= t <= points[segment + 1].x
            while segment + 1 < points.len() && points[segment + 1].0 < t {
                segment += 1;
            }
            output.push(Some(interpolate_at(points, segment, t)));
        }
        Ok(output)
    }
}

/// `(elapsed, value)` pairs of a column's present values, last sample winning at repeated times
fn valid_points(elapsed: &[f64], values: &[Option<f64>]) -> Vec<(f64, f64)> {
    let mut points: Vec<(f64, f64)> = Vec::with_capacity(values.len());
    for (&x, value) in elapsed.iter().zip(values) {
        let Some(y) = *value else { continue };
        match points.last_mut() {
            Some(last) if (last.0 - x).abs() <= GRID_COUNT_EPSILON => last.1 = y,
            _ => points.push((x, y)),
        }
    }
    points
}

fn interpolate_at(points: &[(f64, f64)], segment: usize, t: f64) -> f64 {
    let (x0, y0) = points[segment];
    let Some(&(x1, y1)) = points.get(segment + 1) else {
        return y0;
    };
    let fraction = ((t - x0) / (x1 - x0)).clamp(0.0, 1.0);
    (y1 - y0).mul_add(fraction, y0)
}
