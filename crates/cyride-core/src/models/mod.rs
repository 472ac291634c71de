// ABOUTME: Core data models for activity processing
// ABOUTME: Re-exports raw records and events, record tables, sources, and processed output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyride Contributors

//! # Data Models
//!
//! Raw inputs arrive as an [`ActivitySource`]: either parsed FIT messages
//! ([`LocalActivity`]) or raw tables read back from the store
//! ([`StoredActivity`]). Both reduce to a [`RecordTable`] and a list of
//! [`RawEvent`]s, which the pipeline turns into [`ProcessedRecord`] rows.

// Raw inputs
mod events;
mod records;
mod table;

pub use events::{EventType, RawEvent};
pub use records::RawRecord;
pub use table::RecordTable;

// Parsed FIT messages
pub mod messages;
pub use messages::{MessageRow, ParsedMessages};

// Activity sources and metadata
mod metadata;
mod source;

pub use metadata::{ActivityMetadata, ActivityType, CyclingType};
pub use source::{activity_id_from_time_created, ActivitySource, LocalActivity, StoredActivity};

// Processed output
mod processed;
mod summary;

pub use processed::{ProcessedActivity, ProcessedRecord};
pub use summary::ActivitySummary;
