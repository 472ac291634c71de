// ABOUTME: Output sinks receiving processed activities from the batch driver
// ABOUTME: RecordSink trait with a JSON-per-activity directory sink and an in-memory sink
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyride Contributors

//! # Output Sinks
//!
//! The relational store is an external collaborator; the driver only needs
//! somewhere to hand each processed activity. Sinks are shared across worker
//! threads, so implementations must be `Send + Sync`.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use cyride_core::models::ProcessedActivity;
use tracing::debug;

use crate::errors::{IngestError, IngestResult};

/// Destination for processed activities
pub trait RecordSink: Send + Sync {
    /// Persist one processed activity
    ///
    /// # Errors
    ///
    /// Returns an error if the activity cannot be written
    fn write(&self, activity: &ProcessedActivity) -> IngestResult<()>;
}

/// Writes each activity to `<dir>/<activity_id>.json`
#[derive(Debug, Clone)]
pub struct JsonDirectorySink {
    dir: PathBuf,
}

impl JsonDirectorySink {
    /// Create the sink, creating `dir` if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created
    pub fn new(dir: impl Into<PathBuf>) -> IngestResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| IngestError::io(&dir, e))?;
        Ok(Self { dir })
    }

    /// Output directory
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Output path for an activity id
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::InvalidActivityId`] if the id is empty, a
    /// relative directory name, or contains a path separator
    pub fn path_for(&self, activity_id: &str) -> IngestResult<PathBuf> {
        validate_file_stem(activity_id)?;
        Ok(self.dir.join(format!("{activity_id}.json")))
    }
}

impl RecordSink for JsonDirectorySink {
    fn write(&self, activity: &ProcessedActivity) -> IngestResult<()> {
        let path = self.path_for(&activity.activity_id)?;
        let json = serde_json::to_string_pretty(activity).map_err(|e| IngestError::json(&path, e))?;
        fs::write(&path, json).map_err(|e| IngestError::io(&path, e))?;
        debug!(path = %path.display(), rows = activity.records.len(), "Wrote processed activity");
        Ok(())
    }
}

/// Ids become file names, so they must stay inside the output directory
fn validate_file_stem(activity_id: &str) -> IngestResult<()> {
    if activity_id.is_empty()
        || activity_id == "."
        || activity_id == ".."
        || activity_id.contains(['/', '\\', '\0'])
    {
        return Err(IngestError::InvalidActivityId {
            activity_id: activity_id.to_owned(),
        });
    }
    Ok(())
}

/// Keeps processed activities in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    activities: Mutex<Vec<ProcessedActivity>>,
}

impl MemorySink {
    /// Create an empty sink
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take everything written so far, sorted by activity id
    pub fn take(&self) -> Vec<ProcessedActivity> {
        let mut activities = std::mem::take(
            &mut *self
                .activities
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        );
        activities.sort_by(|a, b| a.activity_id.cmp(&b.activity_id));
        activities
    }
}

impl RecordSink for MemorySink {
    fn write(&self, activity: &ProcessedActivity) -> IngestResult<()> {
        self.activities
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(activity.clone());
        Ok(())
    }
}
