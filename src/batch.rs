// ABOUTME: Batch driver processing many activity files in parallel on a rayon worker pool
// ABOUTME: Each activity succeeds or fails independently; failures are collected in a BatchReport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyride Contributors

//! # Batch Driver
//!
//! Activities are independent, so the driver fans them out across a
//! dedicated rayon pool. A failing activity is recorded in the
//! [`BatchReport`] and never stops the others.
//!
//! Each activity id is written at most once per run. Before processing, the
//! driver reads every input's id; when several inputs share an id, the
//! first in input order is processed and the rest fail with
//! `DUPLICATE_ACTIVITY_ID`, so the outcome does not depend on scheduling.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{DateTime, Utc};
use cyride_pipeline::pipeline::UNKNOWN_ACTIVITY_ID;
use cyride_pipeline::RecordProcessor;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::errors::{IngestError, IngestResult};
use crate::ingest::{fallback_activity_id, load_activity};
use crate::sink::RecordSink;

/// One activity that could not be processed or written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchFailure {
    /// Activity id, or the file stem when the id could not be determined
    pub activity_id: String,
    /// Input file
    pub path: PathBuf,
    /// Stable error code
    pub code: String,
    /// Human-readable message
    pub message: String,
}

/// Outcome of a batch run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    /// Unique id of this run
    pub run_id: Uuid,
    /// When the run started
    pub started_at: DateTime<Utc>,
    /// Wall-clock duration (milliseconds)
    pub duration_ms: u64,
    /// Activities processed and written
    pub processed: usize,
    /// Activities that failed
    pub failed: usize,
    /// Event consistency warnings across all processed activities
    pub warnings: usize,
    /// Failure details, ordered by input path
    pub failures: Vec<BatchFailure>,
}

impl BatchReport {
    /// Whether every activity succeeded
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

enum Outcome {
    Processed { warnings: usize },
    Failed(BatchFailure),
}

/// Processes activity files with a shared processor and sink
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    processor: RecordProcessor,
    threads: Option<usize>,
}

impl BatchProcessor {
    /// Create a batch processor; `threads == None` uses one worker per logical CPU
    #[must_use]
    pub const fn new(processor: RecordProcessor, threads: Option<usize>) -> Self {
        Self { processor, threads }
    }

    /// Process `files` in parallel, writing successes to `sink`
    ///
    /// # Errors
    ///
    /// Returns an error only if the worker pool cannot be built; per-activity
    /// failures are reported in the [`BatchReport`]
    pub fn run(&self, files: &[PathBuf], sink: &dyn RecordSink) -> IngestResult<BatchReport> {
        let run_id = Uuid::new_v4();
        let started_at = Utc::now();
        let timer = Instant::now();

        let mut builder = rayon::ThreadPoolBuilder::new();
        if let Some(threads) = self.threads {
            builder = builder.num_threads(threads);
        }
        let pool = builder.build()?;

        info!(
            run_id = %run_id,
            files = files.len(),
            threads = pool.current_num_threads(),
            "Starting batch run"
        );

        let outcomes: Vec<Outcome> = pool.install(|| {
            let ids: Vec<Option<String>> = files
                .par_iter()
                .map(|path| peek_activity_id(path))
                .collect();
            let claims = first_claims(&ids);

            files
                .par_iter()
                .zip(ids.par_iter())
                .enumerate()
                .map(|(index, (path, id))| {
                    let claim = id
                        .as_deref()
                        .and_then(|id| claims.get(id).map(|&first| (id, first)));
                    match claim {
                        Some((id, first)) if first != index => {
                            duplicate_failure(path, id, &files[first])
                        }
                        _ => self.process_file(path, sink),
                    }
                })
                .collect()
        });

        let mut report = BatchReport {
            run_id,
            started_at,
            duration_ms: u64::try_from(timer.elapsed().as_millis()).unwrap_or(u64::MAX),
            processed: 0,
            failed: 0,
            warnings: 0,
            failures: Vec::new(),
        };
        for outcome in outcomes {
            match outcome {
                Outcome::Processed { warnings } => {
                    report.processed += 1;
                    report.warnings += warnings;
                }
                Outcome::Failed(failure) => {
                    report.failed += 1;
                    report.failures.push(failure);
                }
            }
        }

        info!(
            run_id = %run_id,
            processed = report.processed,
            failed = report.failed,
            warnings = report.warnings,
            duration_ms = report.duration_ms,
            "Batch run complete"
        );
        Ok(report)
    }

    fn process_file(&self, path: &Path, sink: &dyn RecordSink) -> Outcome {
        let source = match load_activity(path) {
            Ok(source) => source,
            Err(e) => {
                error!(path = %path.display(), error = %e, "Failed to load activity");
                return Outcome::Failed(BatchFailure {
                    activity_id: fallback_activity_id(path),
                    path: path.to_path_buf(),
                    code: e.code().to_owned(),
                    message: e.to_string(),
                });
            }
        };

        let activity = match self.processor.process(&source) {
            Ok(activity) => activity,
            Err(e) => {
                let activity_id = if e.activity_id == UNKNOWN_ACTIVITY_ID {
                    fallback_activity_id(path)
                } else {
                    e.activity_id.clone()
                };
                return Outcome::Failed(BatchFailure {
                    activity_id,
                    path: path.to_path_buf(),
                    code: e.code().to_string(),
                    message: e.source.to_string(),
                });
            }
        };

        if let Err(e) = sink.write(&activity) {
            error!(
                activity_id = %activity.activity_id,
                error = %e,
                "Failed to write processed activity"
            );
            return Outcome::Failed(BatchFailure {
                activity_id: activity.activity_id,
                path: path.to_path_buf(),
                code: e.code().to_owned(),
                message: e.to_string(),
            });
        }

        if !activity.warnings.is_empty() {
            warn!(
                activity_id = %activity.activity_id,
                warnings = activity.warnings.len(),
                "Activity processed with event warnings"
            );
        }
        Outcome::Processed {
            warnings: activity.warnings.len(),
        }
    }
}

/// Activity id of an input, if it can be read without processing
fn peek_activity_id(path: &Path) -> Option<String> {
    load_activity(path).ok()?.activity_id().ok()
}

/// Map each id to the index of the first input carrying it
fn first_claims(ids: &[Option<String>]) -> HashMap<&str, usize> {
    let mut claims = HashMap::with_capacity(ids.len());
    for (index, id) in ids.iter().enumerate() {
        if let Some(id) = id {
            claims.entry(id.as_str()).or_insert(index);
        }
    }
    claims
}

fn duplicate_failure(path: &Path, activity_id: &str, first: &Path) -> Outcome {
    let e = IngestError::DuplicateActivityId {
        activity_id: activity_id.to_owned(),
        first: first.to_path_buf(),
    };
    warn!(path = %path.display(), error = %e, "Skipping duplicate activity");
    Outcome::Failed(BatchFailure {
        activity_id: activity_id.to_owned(),
        path: path.to_path_buf(),
        code: e.code().to_owned(),
        message: e.to_string(),
    })
}
