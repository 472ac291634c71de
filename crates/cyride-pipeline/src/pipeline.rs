// ABOUTME: Record processing pipeline turning one activity source into processed records
// ABOUTME: Runs naming, corrections, resampling, pause masking, VAM, and unit conversion in order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyride Contributors

//! # Record Processing Pipeline
//!
//! [`RecordProcessor::process`] is the single entry point for both local and
//! stored activities. Processing is all-or-nothing per activity: any
//! precondition violation is returned as an [`ActivityError`] carrying the
//! activity id, while event anomalies are collected as warnings on the
//! result. Inputs are never modified.

use cyride_core::constants::fields::records;
use cyride_core::errors::{ActivityError, EventConsistencyWarning, ProcessingResult};
use cyride_core::models::{
    ActivitySource, ProcessedActivity, ProcessedRecord, RawEvent, RecordTable,
};
use tracing::{debug, info, info_span, warn};

use crate::config::ProcessingConfig;
use crate::events::clean_events;
use crate::pause::build_pause_mask;
use crate::resample::{ResampledTable, Resampler};
use crate::stages::{
    apply_corrections, canonicalize_columns, convert_positions, convert_to_display_units,
};
use crate::summary::summarize;
use crate::vam::VamEstimator;

/// Activity id reported when a source has no usable identity
pub const UNKNOWN_ACTIVITY_ID: &str = "unknown";

/// Processes activities with a fixed, validated configuration
#[derive(Debug, Clone)]
pub struct RecordProcessor {
    config: ProcessingConfig,
    resampler: Resampler,
    vam: VamEstimator,
}

impl RecordProcessor {
    /// Create a processor
    ///
    /// # Errors
    ///
    /// Returns [`cyride_core::errors::ProcessingError::InvalidConfig`] if the
    /// configuration fails validation
    pub fn new(config: ProcessingConfig) -> ProcessingResult<Self> {
        config.validate()?;
        let resampler = Resampler::from_config(&config.resample)?;
        let vam = VamEstimator::from_config(&config.vam)?;
        Ok(Self {
            config,
            resampler,
            vam,
        })
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &ProcessingConfig {
        &self.config
    }

    /// Process one activity source
    ///
    /// # Errors
    ///
    /// Returns an [`ActivityError`] wrapping the first processing failure
    pub fn process(&self, source: &ActivitySource) -> Result<ProcessedActivity, ActivityError> {
        let activity_id = source
            .activity_id()
            .map_err(|error| ActivityError::new(UNKNOWN_ACTIVITY_ID, error))?;

        let span = info_span!("process_activity", activity_id = %activity_id);
        let _guard = span.enter();

        let result = source.record_table().and_then(|table| {
            let events = source.raw_events()?;
            self.process_records(&activity_id, &table, &events)
        });

        result.map_err(|error| {
            warn!(code = %error.code(), error = %error, "Activity processing failed");
            ActivityError::new(activity_id, error)
        })
    }

    /// Process a raw record table and its timer events
    ///
    /// # Errors
    ///
    /// Returns the first processing failure
    pub fn process_records(
        &self,
        activity_id: &str,
        table: &RecordTable,
        events: &[RawEvent],
    ) -> ProcessingResult<ProcessedActivity> {
        let table = canonicalize_columns(table.clone());
        let table = apply_corrections(table, &self.config.corrections);
        let table = convert_positions(table);

        let mut resampled = self.resampler.resample(&table)?;

        let cleaned = clean_events(events);
        let pause = build_pause_mask(
            &cleaned.events,
            resampled.elapsed_time(),
            resampled.start_time(),
        );
        debug!(
            events = events.len(),
            cleaned = cleaned.events.len(),
            paused = pause.paused_count(),
            "Built pause mask"
        );

        let vam = match resampled.column(records::ALTITUDE) {
            Some(altitude) => Some(self.vam.estimate(resampled.elapsed_time(), altitude)?),
            None => None,
        };

        resampled = convert_to_display_units(resampled);
        let rows = assemble_rows(&resampled, &pause.mask, vam.as_deref());

        let warnings: Vec<EventConsistencyWarning> =
            cleaned.warnings.into_iter().chain(pause.warnings).collect();
        for warning in &warnings {
            warn!(warning = %warning, "Event consistency warning");
        }

        let summary = summarize(&rows, resampled.timestep(), &self.config.summary);
        info!(
            rows = rows.len(),
            warnings = warnings.len(),
            moving_seconds = summary.moving_seconds,
            "Processed activity records"
        );

        Ok(ProcessedActivity {
            activity_id: activity_id.to_owned(),
            start_time: resampled.start_time(),
            timestep: resampled.timestep(),
            records: rows,
            warnings,
            summary,
        })
    }
}

fn assemble_rows(
    table: &ResampledTable,
    pause_mask: &[bool],
    vam: Option<&[Option<f64>]>,
) -> Vec<ProcessedRecord> {
    let mut rows: Vec<ProcessedRecord> = table
        .elapsed_time()
        .iter()
        .map(|&elapsed| ProcessedRecord::at(elapsed))
        .collect();

    for (name, values) in table.columns() {
        for (row, value) in rows.iter_mut().zip(values) {
            *field_slot(row, name) = *value;
        }
    }
    for (row, paused) in rows.iter_mut().zip(pause_mask) {
        row.pause_mask = *paused;
    }
    if let Some(vam) = vam {
        for (row, value) in rows.iter_mut().zip(vam) {
            row.vam = *value;
        }
    }
    rows
}

fn field_slot<'a>(row: &'a mut ProcessedRecord, name: &str) -> &'a mut Option<f64> {
    match name {
        records::LAT => &mut row.lat,
        records::LON => &mut row.lon,
        records::ALTITUDE => &mut row.altitude,
        records::DISTANCE => &mut row.distance,
        records::SPEED => &mut row.speed,
        records::HEART_RATE => &mut row.heart_rate,
        records::POWER => &mut row.power,
        records::CADENCE => &mut row.cadence,
        records::TEMPERATURE => &mut row.temperature,
        records::GRADE => &mut row.grade,
        records::GPS_ACCURACY => &mut row.gps_accuracy,
        other => row.extra.entry(other.to_owned()).or_insert(None),
    }
}
