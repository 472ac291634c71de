// ABOUTME: Column naming stage mapping device-specific record columns to canonical names
// ABOUTME: Renames position aliases and resolves duplicate 'enhanced' speed/altitude variants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyride Contributors

use cyride_core::constants::fields::records::{ALIASES, ELAPSED_TIME, ENHANCED_VARIANTS};
use cyride_core::models::RecordTable;
use tracing::debug;

/// Map device column names onto canonical names
///
/// `position_lat`/`position_long` become `lat`/`lon`. An `enhanced_*`
/// variant is dropped when its canonical column exists, and renamed to the
/// canonical name when it does not. A stored `elapsed_time` column is
/// dropped since elapsed time is always derived from the timestamps.
#[must_use]
pub fn canonicalize_columns(mut table: RecordTable) -> RecordTable {
    if table.remove_column(ELAPSED_TIME).is_some() {
        debug!("Dropped stored elapsed_time column");
    }

    for &(alias, canonical) in ALIASES {
        table.rename_column(alias, canonical);
    }

    for &(enhanced, canonical) in ENHANCED_VARIANTS {
        if !table.has_column(enhanced) {
            continue;
        }
        if table.has_column(canonical) {
            table.remove_column(enhanced);
            debug!(column = enhanced, "Dropped duplicate enhanced column");
        } else {
            table.rename_column(enhanced, canonical);
            debug!(
                from = enhanced,
                to = canonical,
                "Promoted enhanced column to canonical name"
            );
        }
    }

    table
}
