// ABOUTME: Columnar record table: a timestamp column plus named optional numeric columns
// ABOUTME: Validates column lengths on construction and derives elapsed seconds from timestamps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyride Contributors

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::RawRecord;
use crate::constants::units::MICROSECONDS_PER_SECOND;
use crate::errors::{ProcessingError, ProcessingResult};

/// A record set in columnar form
///
/// Every column has exactly one entry per timestamp. Column names are
/// free-form here: device-specific names such as `position_lat` or
/// `enhanced_speed` are allowed and mapped to canonical names by the
/// pipeline. Columns are kept in name order so output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RecordTableRepr")]
pub struct RecordTable {
    timestamps: Vec<DateTime<Utc>>,
    columns: BTreeMap<String, Vec<Option<f64>>>,
}

#[derive(Deserialize)]
struct RecordTableRepr {
    timestamps: Vec<DateTime<Utc>>,
    #[serde(default)]
    columns: BTreeMap<String, Vec<Option<f64>>>,
}

impl TryFrom<RecordTableRepr> for RecordTable {
    type Error = ProcessingError;

    fn try_from(repr: RecordTableRepr) -> Result<Self, Self::Error> {
        let mut table = Self::new(repr.timestamps);
        for (name, values) in repr.columns {
            table.insert_column(name, values)?;
        }
        Ok(table)
    }
}

impl RecordTable {
    /// Create a table with timestamps and no data columns
    #[must_use]
    pub const fn new(timestamps: Vec<DateTime<Utc>>) -> Self {
        Self {
            timestamps,
            columns: BTreeMap::new(),
        }
    }

    /// Builder-style column insertion
    ///
    /// # Errors
    ///
    /// Returns [`ProcessingError::InvalidField`] if the column length does not
    /// match the number of timestamps
    pub fn with_column(
        mut self,
        name: impl Into<String>,
        values: Vec<Option<f64>>,
    ) -> ProcessingResult<Self> {
        self.insert_column(name, values)?;
        Ok(self)
    }

    /// Insert or replace a column
    ///
    /// # Errors
    ///
    /// Returns [`ProcessingError::InvalidField`] if the column length does not
    /// match the number of timestamps
    pub fn insert_column(
        &mut self,
        name: impl Into<String>,
        values: Vec<Option<f64>>,
    ) -> ProcessingResult<()> {
        let name = name.into();
        if values.len() != self.timestamps.len() {
            return Err(ProcessingError::invalid_field(
                name,
                format!(
                    "column has {} values but the table has {} timestamps",
                    values.len(),
                    self.timestamps.len()
                ),
            ));
        }
        self.columns.insert(name, values);
        Ok(())
    }

    /// Build a table from row records, dropping fields with no data at all
    #[must_use]
    pub fn from_raw_records(records: &[RawRecord]) -> Self {
        let timestamps = records.iter().map(|r| r.timestamp).collect();
        let mut columns: BTreeMap<String, Vec<Option<f64>>> = BTreeMap::new();

        for (row, record) in records.iter().enumerate() {
            for (name, value) in record.fields() {
                if let Some(value) = value {
                    columns
                        .entry(name.to_owned())
                        .or_insert_with(|| vec![None; records.len()])[row] = Some(value);
                }
            }
        }

        Self {
            timestamps,
            columns,
        }
    }

    /// Number of samples
    #[must_use]
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Whether the table has no samples
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Sample timestamps
    #[must_use]
    pub fn timestamps(&self) -> &[DateTime<Utc>] {
        &self.timestamps
    }

    /// First sample time
    #[must_use]
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.timestamps.first().copied()
    }

    /// Column values by name
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

    /// Column names in name order
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Remove a column, returning its values
    pub fn remove_column(&mut self, name: &str) -> Option<Vec<Option<f64>>> {
        self.columns.remove(name)
    }

    /// Rename a column; returns false when `from` is absent
    ///
    /// An existing column named `to` is replaced.
    pub fn rename_column(&mut self, from: &str, to: &str) -> bool {
        match self.columns.remove(from) {
            Some(values) => {
                self.columns.insert(to.to_owned(), values);
                true
            }
            None => false,
        }
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

    /// Elapsed seconds of every sample relative to the first one
    ///
    /// # Errors
    ///
    /// Returns [`ProcessingError::NonMonotonicTime`] if any timestamp precedes
    /// its predecessor, and [`ProcessingError::InvalidField`] if a time span
    /// overflows microsecond precision
    pub fn elapsed_seconds(&self) -> ProcessingResult<Vec<f64>> {
        let Some(&start) = self.timestamps.first() else {
            return Ok(Vec::new());
        };

        let mut elapsed = Vec::with_capacity(self.timestamps.len());
        for (index, timestamp) in self.timestamps.iter().enumerate() {
            let micros = (*timestamp - start).num_microseconds().ok_or_else(|| {
                ProcessingError::invalid_field("timestamp", "time span exceeds microsecond range")
            })?;
            #[allow(clippy::cast_precision_loss)]
            let seconds = micros as f64 / MICROSECONDS_PER_SECOND;

            if let Some(&previous) = elapsed.last() {
                if seconds < previous {
                    return Err(ProcessingError::NonMonotonicTime {
                        index,
                        previous_seconds: previous,
                        current_seconds: seconds,
                    });
                }
            }
            elapsed.push(seconds);
        }
        Ok(elapsed)
    }
}
