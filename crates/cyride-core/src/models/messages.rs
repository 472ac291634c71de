// ABOUTME: Parsed FIT message tables keyed by message name, as produced by an external parser
// ABOUTME: Field accessors for numbers, strings, and timestamps in loosely-typed message rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyride Contributors

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{ProcessingError, ProcessingResult};

/// One parsed message: field name to value
pub type MessageRow = BTreeMap<String, Value>;

/// Naive datetime layouts accepted in addition to RFC 3339, interpreted as UTC
const NAIVE_TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parsed messages of one activity file, keyed by message name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParsedMessages(BTreeMap<String, Vec<MessageRow>>);

impl ParsedMessages {
    /// Create an empty message set
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder-style insertion of a message table
    #[must_use]
    pub fn with_message(mut self, name: impl Into<String>, rows: Vec<MessageRow>) -> Self {
        self.0.insert(name.into(), rows);
        self
    }

    /// Rows of a message, if present
    #[must_use]
    pub fn rows(&self, name: &str) -> Option<&[MessageRow]> {
        self.0.get(name).map(Vec::as_slice)
    }

    /// Rows of a required message
    ///
    /// # Errors
    ///
    /// Returns [`ProcessingError::MissingColumn`] naming the message if absent
    pub fn required_rows(&self, name: &str) -> ProcessingResult<&[MessageRow]> {
        self.rows(name)
            .ok_or_else(|| ProcessingError::missing_column(name))
    }

    /// First row of a message that should occur exactly once
    #[must_use]
    pub fn single(&self, name: &str) -> Option<&MessageRow> {
        self.rows(name).and_then(<[MessageRow]>::first)
    }

    /// Message names present
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Numeric value of a field; non-numeric and null values read as `None`
#[must_use]
pub fn field_f64(row: &MessageRow, field: &str) -> Option<f64> {
    row.get(field).and_then(Value::as_f64)
}

/// String value of a field
#[must_use]
pub fn field_str<'a>(row: &'a MessageRow, field: &str) -> Option<&'a str> {
    row.get(field).and_then(Value::as_str)
}

/// Timestamp value of a field
///
/// Accepts RFC 3339 strings and naive `YYYY-MM-DD[T ]HH:MM:SS[.f]` strings,
/// the latter interpreted as UTC. A missing or null field reads as `None`.
///
/// # Errors
///
/// Returns [`ProcessingError::InvalidField`] if the value is present but is
/// not a parseable timestamp string
pub fn field_timestamp(row: &MessageRow, field: &str) -> ProcessingResult<Option<DateTime<Utc>>> {
    match row.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => parse_timestamp(text)
            .map(Some)
            .ok_or_else(|| {
                ProcessingError::invalid_field(field, format!("unparseable timestamp '{text}'"))
            }),
        Some(other) => Err(ProcessingError::invalid_field(
            field,
            format!("expected a timestamp string, found {other}"),
        )),
    }
}

fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }
    NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .map(|naive| naive.and_utc())
}
