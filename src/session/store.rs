// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Session store and edit merging.
//!
//! A table is created the first time its key is requested and keeps the
//! shape it was created with for the rest of the session. Edits replace the
//! stored table wholesale (last write wins) once they pass validation; a
//! rejected commit leaves the stored table exactly as it was.

use super::SessionKey;
use crate::error::{AnnotateError, Result};
use crate::models::annotation::{AnnotationTable, RawAnnotationRow};
use crate::models::segment::Segment;
use std::collections::HashMap;

/// In-memory annotation tables for one working session.
#[derive(Debug, Default)]
pub struct SessionStore {
    tables: HashMap<SessionKey, AnnotationTable>,
}

impl SessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the table for `key`, creating an all-pending one on first use.
    ///
    /// On later calls `role` and `segments` are ignored: the table keeps the
    /// shape it was created with.
    pub fn get_or_create_table(
        &mut self,
        key: &SessionKey,
        role: &str,
        segments: &[Segment],
    ) -> &AnnotationTable {
        if self.tables.contains_key(key) {
            log::debug!("Reusing annotation table for {}", key);
        }
        self.tables.entry(key.clone()).or_insert_with(|| {
            log::info!(
                "Created annotation table for {} with {} segments",
                key,
                segments.len()
            );
            AnnotationTable::pending(role, segments)
        })
    }

    /// Look up a table without creating it.
    pub fn table(&self, key: &SessionKey) -> Option<&AnnotationTable> {
        self.tables.get(key)
    }

    /// Replace the stored table for `key` with an edited one.
    ///
    /// Fails with `ShapeMismatch` when the row count differs and with
    /// `UnknownSession` when no table was created for `key`.
    pub fn commit_edits(&mut self, key: &SessionKey, edited: AnnotationTable) -> Result<()> {
        let existing = self
            .tables
            .get_mut(key)
            .ok_or_else(|| AnnotateError::UnknownSession(key.clone()))?;

        if edited.len() != existing.len() {
            log::warn!(
                "Rejected commit for {}: expected {} rows, got {}",
                key,
                existing.len(),
                edited.len()
            );
            return Err(AnnotateError::ShapeMismatch {
                expected: existing.len(),
                actual: edited.len(),
            });
        }

        *existing = edited;
        log::debug!("Committed {} rows for {}", existing.len(), key);
        Ok(())
    }

    /// Validate labels of rows coming back from an editing surface, then
    /// commit them. Nothing is stored unless every row is valid.
    pub fn commit_raw_edits(&mut self, key: &SessionKey, rows: Vec<RawAnnotationRow>) -> Result<()> {
        let edited = AnnotationTable::try_from_raw(rows).inspect_err(|e| {
            log::warn!("Rejected commit for {}: {}", key, e);
        })?;
        self.commit_edits(key, edited)
    }

    /// Commit a table loaded from a file, such as a re-imported workbook.
    ///
    /// Besides the checks of [`commit_edits`](Self::commit_edits), every row
    /// must carry the same start, end and role as the stored row at the same
    /// position. A file for another role or video is rejected as a whole.
    pub fn commit_imported(&mut self, key: &SessionKey, imported: AnnotationTable) -> Result<()> {
        let existing = self
            .tables
            .get(key)
            .ok_or_else(|| AnnotateError::UnknownSession(key.clone()))?;

        if imported.len() == existing.len() {
            for (row, (stored, incoming)) in existing.rows().iter().zip(imported.rows()).enumerate() {
                let columns: [(&'static str, &str, &str); 3] = [
                    ("Start Time", stored.start_label(), incoming.start_label()),
                    ("End Time", stored.end_label(), incoming.end_label()),
                    ("Role", stored.role(), incoming.role()),
                ];
                if let Some((field, stored, incoming)) = columns.into_iter().find(|(_, a, b)| a != b) {
                    log::warn!(
                        "Rejected import for {}: row {} {} is {:?}, stored {:?}",
                        key,
                        row,
                        field,
                        incoming,
                        stored
                    );
                    return Err(AnnotateError::ReadOnlyFieldChanged {
                        row,
                        field,
                        stored: stored.to_string(),
                        imported: incoming.to_string(),
                    });
                }
            }
        }

        self.commit_edits(key, imported)?;
        log::info!("Imported {} rows into {}", self.tables[key].len(), key);
        Ok(())
    }

    /// Drop the table for `key`. The next request re-creates it all pending.
    pub fn reset(&mut self, key: &SessionKey) -> bool {
        let removed = self.tables.remove(key).is_some();
        if removed {
            log::info!("Reset annotation table for {}", key);
        }
        removed
    }

    /// Drop every table.
    pub fn clear(&mut self) {
        log::info!("Cleared {} annotation tables", self.tables.len());
        self.tables.clear();
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
