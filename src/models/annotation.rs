// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation data structures.
//!
//! An annotation table holds one row per segment for a single role. Row
//! order follows segment order and never changes; only the label and the
//! notes of a row are meant to be edited.

use super::emotion::EmotionLabel;
use super::segment::Segment;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Column headers, in export order.
pub const COLUMN_HEADERS: [&str; 5] = ["Start Time", "End Time", "Role", "Emotion Label", "Notes"];

/// One annotated segment for one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationRow {
    #[serde(rename = "Start Time")]
    start_label: String,
    #[serde(rename = "End Time")]
    end_label: String,
    #[serde(rename = "Role")]
    role: String,
    #[serde(rename = "Emotion Label")]
    pub label: EmotionLabel,
    #[serde(rename = "Notes", default)]
    pub notes: String,
}

impl AnnotationRow {
    /// Create a row with every field given explicitly.
    pub fn new(
        start_label: impl Into<String>,
        end_label: impl Into<String>,
        role: impl Into<String>,
        label: EmotionLabel,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            start_label: start_label.into(),
            end_label: end_label.into(),
            role: role.into(),
            label,
            notes: notes.into(),
        }
    }

    /// Create an unlabeled row for a segment.
    pub fn pending(segment: &Segment, role: &str) -> Self {
        Self::new(
            segment.start_label.clone(),
            segment.end_label.clone(),
            role,
            EmotionLabel::Pending,
            String::new(),
        )
    }

    pub fn start_label(&self) -> &str {
        &self.start_label
    }

    pub fn end_label(&self) -> &str {
        &self.end_label
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    /// Cell values in export order.
    pub fn cells(&self) -> [&str; 5] {
        [
            &self.start_label,
            &self.end_label,
            &self.role,
            self.label.display_name(),
            &self.notes,
        ]
    }
}

/// A row as returned by an external editing surface, label not yet checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAnnotationRow {
    #[serde(rename = "Start Time")]
    pub start_label: String,
    #[serde(rename = "End Time")]
    pub end_label: String,
    #[serde(rename = "Role")]
    pub role: String,
    #[serde(rename = "Emotion Label")]
    pub label: String,
    #[serde(rename = "Notes", default)]
    pub notes: String,
}

impl RawAnnotationRow {
    /// Validate the label and build a typed row.
    pub fn into_row(self) -> Result<AnnotationRow> {
        let label = self.label.parse::<EmotionLabel>()?;
        Ok(AnnotationRow {
            start_label: self.start_label,
            end_label: self.end_label,
            role: self.role,
            label,
            notes: self.notes,
        })
    }
}

impl From<&AnnotationRow> for RawAnnotationRow {
    fn from(row: &AnnotationRow) -> Self {
        Self {
            start_label: row.start_label.clone(),
            end_label: row.end_label.clone(),
            role: row.role.clone(),
            label: row.label.display_name().to_string(),
            notes: row.notes.clone(),
        }
    }
}

/// The ordered rows for one (video, role) annotation task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnotationTable {
    rows: Vec<AnnotationRow>,
}

impl AnnotationTable {
    /// Build a table from rows already in segment order.
    pub fn from_rows(rows: Vec<AnnotationRow>) -> Self {
        Self { rows }
    }

    /// One pending row per segment, all attributed to `role`.
    pub fn pending(role: &str, segments: &[Segment]) -> Self {
        Self {
            rows: segments
                .iter()
                .map(|segment| AnnotationRow::pending(segment, role))
                .collect(),
        }
    }

    /// Validate every label of an edited batch. One bad label rejects the
    /// whole batch.
    pub fn try_from_raw(rows: Vec<RawAnnotationRow>) -> Result<Self> {
        let rows = rows
            .into_iter()
            .map(RawAnnotationRow::into_row)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[AnnotationRow] {
        &self.rows
    }

    /// Mutable access to rows for an editing surface. The slice cannot grow,
    /// shrink or be replaced through this handle.
    pub fn rows_mut(&mut self) -> &mut [AnnotationRow] {
        &mut self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows in the loose, string-labeled form used at the editing boundary.
    pub fn to_raw(&self) -> Vec<RawAnnotationRow> {
        self.rows.iter().map(RawAnnotationRow::from).collect()
    }
}
