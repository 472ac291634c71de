// ABOUTME: Activity discovery and loading from JSON documents on disk
// ABOUTME: Glob-based file discovery and decoding of tagged ActivitySource documents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyride Contributors

use std::fs;
use std::path::{Path, PathBuf};

use cyride_core::models::ActivitySource;
use tracing::debug;

use crate::errors::{IngestError, IngestResult};

/// Files matching `pattern`, sorted by path
///
/// Directories that happen to match are skipped.
///
/// # Errors
///
/// Returns an error if the pattern is malformed or a matched path cannot be read
pub fn discover_activity_files(pattern: &str) -> IngestResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in glob::glob(pattern)? {
        let path = entry?;
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    debug!(pattern, count = files.len(), "Discovered activity files");
    Ok(files)
}

/// Load one activity document
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid
/// `{"source": "local" | "stored", ...}` document
pub fn load_activity(path: &Path) -> IngestResult<ActivitySource> {
    let contents = fs::read_to_string(path).map_err(|e| IngestError::io(path, e))?;
    serde_json::from_str(&contents).map_err(|e| IngestError::json(path, e))
}

/// Identifier to report for a file whose activity id is unknown
#[must_use]
pub fn fallback_activity_id(path: &Path) -> String {
    path.file_stem().map_or_else(
        || path.to_string_lossy().into_owned(),
        |stem| stem.to_string_lossy().into_owned(),
    )
}
