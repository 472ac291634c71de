// ABOUTME: Activity sources: freshly parsed FIT messages or raw data read back from the store
// ABOUTME: Both expose an activity id, metadata, a raw record table, and raw timer events
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyride Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::messages::{field_f64, field_str, field_timestamp};
use super::{ActivityMetadata, ActivityType, EventType, ParsedMessages, RawEvent, RecordTable};
use crate::constants::fields::{events, file_id, messages, records};
use crate::errors::{ProcessingError, ProcessingResult};

/// Format the activity id for a file creation time
#[must_use]
pub fn activity_id_from_time_created(time_created: DateTime<Utc>) -> String {
    time_created.format(file_id::ACTIVITY_ID_FORMAT).to_string()
}

/// Input to the record processing pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum ActivitySource {
    /// Parsed FIT messages straight from a device file
    Local(LocalActivity),
    /// Raw tables previously persisted to the store
    Stored(StoredActivity),
}

impl ActivitySource {
    /// Activity identifier
    ///
    /// # Errors
    ///
    /// Returns an error if a local activity lacks a usable `file_id.time_created`
    pub fn activity_id(&self) -> ProcessingResult<String> {
        match self {
            Self::Local(local) => local.activity_id(),
            Self::Stored(stored) => Ok(stored.metadata.activity_id.clone()),
        }
    }

    /// Activity metadata
    ///
    /// # Errors
    ///
    /// Returns an error if a local activity lacks a usable `file_id.time_created`
    pub fn metadata(&self) -> ProcessingResult<ActivityMetadata> {
        match self {
            Self::Local(local) => local.metadata(),
            Self::Stored(stored) => Ok(stored.metadata.clone()),
        }
    }

    /// Raw records in columnar form
    ///
    /// # Errors
    ///
    /// Returns an error if a local activity has no `record` message or a
    /// record without a timestamp
    pub fn record_table(&self) -> ProcessingResult<RecordTable> {
        match self {
            Self::Local(local) => local.record_table(),
            Self::Stored(stored) => Ok(stored.records.clone()),
        }
    }

    /// Raw timer events
    ///
    /// # Errors
    ///
    /// Returns an error if a local activity has no `event` message or an
    /// event with an unusable timestamp
    pub fn raw_events(&self) -> ProcessingResult<Vec<RawEvent>> {
        match self {
            Self::Local(local) => local.raw_events(),
            Self::Stored(stored) => Ok(stored.events.clone()),
        }
    }
}

/// An activity parsed from a local FIT file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalActivity {
    /// Parsed messages keyed by message name
    pub messages: ParsedMessages,
}

impl LocalActivity {
    /// Wrap parsed messages
    #[must_use]
    pub const fn new(messages: ParsedMessages) -> Self {
        Self { messages }
    }

    fn time_created(&self) -> ProcessingResult<DateTime<Utc>> {
        let row = self
            .messages
            .single(messages::FILE_ID)
            .ok_or_else(|| ProcessingError::missing_column(messages::FILE_ID))?;
        field_timestamp(row, file_id::TIME_CREATED)?
            .ok_or_else(|| ProcessingError::missing_column(file_id::TIME_CREATED))
    }

    /// Activity id from the `file_id` creation time
    ///
    /// # Errors
    ///
    /// Returns [`ProcessingError::MissingColumn`] if `file_id` or its
    /// `time_created` field is absent
    pub fn activity_id(&self) -> ProcessingResult<String> {
        Ok(activity_id_from_time_created(self.time_created()?))
    }

    /// Metadata available directly in the parsed messages
    ///
    /// # Errors
    ///
    /// Returns [`ProcessingError::MissingColumn`] if `file_id` or its
    /// `time_created` field is absent
    pub fn metadata(&self) -> ProcessingResult<ActivityMetadata> {
        let time_created = self.time_created()?;
        let activity_type = self
            .messages
            .single(messages::SESSION)
            .and_then(|session| field_str(session, "sport"))
            .and_then(ActivityType::from_fit_sport);
        let file_row = self.messages.single(messages::FILE_ID);

        Ok(ActivityMetadata {
            activity_id: activity_id_from_time_created(time_created),
            file_date: Some(time_created.to_rfc3339()),
            activity_type,
            device_manufacturer: file_row
                .and_then(|row| field_str(row, "manufacturer"))
                .map(str::to_owned),
            ..ActivityMetadata::default()
        })
    }

    /// Record messages as a columnar table
    ///
    /// Every numeric field becomes a column; non-numeric values are treated as
    /// missing and columns with no values at all are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessingError::MissingColumn`] if the `record` message or any
    /// record timestamp is absent
    pub fn record_table(&self) -> ProcessingResult<RecordTable> {
        let rows = self.messages.required_rows(messages::RECORD)?;

        let mut timestamps = Vec::with_capacity(rows.len());
        for row in rows {
            let timestamp = field_timestamp(row, records::TIMESTAMP)?
                .ok_or_else(|| ProcessingError::missing_column(records::TIMESTAMP))?;
            timestamps.push(timestamp);
        }

        let mut names: Vec<&str> = rows
            .iter()
            .flat_map(|row| row.keys().map(String::as_str))
            .filter(|name| *name != records::TIMESTAMP)
            .collect();
        names.sort_unstable();
        names.dedup();

        let mut table = RecordTable::new(timestamps);
        for name in names {
            let values: Vec<Option<f64>> = rows.iter().map(|row| field_f64(row, name)).collect();
            if values.iter().any(Option::is_some) {
                table.insert_column(name, values)?;
            } else {
                debug!(field = name, "Dropping record field with no numeric values");
            }
        }
        Ok(table)
    }

    /// Timer start/stop events with normalized types
    ///
    /// Events of any category other than `timer`, and timer subtypes that are
    /// neither start nor stop, are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessingError::MissingColumn`] if the `event` message is
    /// absent or a timer event has no timestamp
    pub fn raw_events(&self) -> ProcessingResult<Vec<RawEvent>> {
        let rows = self.messages.required_rows(messages::EVENT)?;

        let mut raw = Vec::new();
        for row in rows {
            if field_str(row, events::EVENT) != Some(events::TIMER) {
                continue;
            }
            let Some(event_type) = field_str(row, events::EVENT_TYPE).and_then(EventType::normalize)
            else {
                debug!(
                    subtype = field_str(row, events::EVENT_TYPE),
                    "Skipping timer event that is neither start nor stop"
                );
                continue;
            };
            let timestamp = field_timestamp(row, events::TIMESTAMP)?
                .ok_or_else(|| ProcessingError::missing_column(events::TIMESTAMP))?;
            raw.push(RawEvent::new(timestamp, event_type));
        }
        Ok(raw)
    }
}

/// An activity read back from the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredActivity {
    /// Activity metadata
    pub metadata: ActivityMetadata,
    /// Raw records
    pub records: RecordTable,
    /// Raw timer events
    #[serde(default)]
    pub events: Vec<RawEvent>,
}
