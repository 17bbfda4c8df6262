// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Completion status of an annotation table.

use crate::models::annotation::AnnotationTable;
use std::fmt;

/// Number of rows still carrying the pending label.
pub fn count_pending(table: &AnnotationTable) -> usize {
    table.rows().iter().filter(|row| row.label.is_pending()).count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionStatus {
    Complete,
    Incomplete { pending: usize },
}

impl CompletionStatus {
    pub fn of(table: &AnnotationTable) -> Self {
        match count_pending(table) {
            0 => CompletionStatus::Complete,
            pending => CompletionStatus::Incomplete { pending },
        }
    }

    pub fn is_complete(self) -> bool {
        matches!(self, CompletionStatus::Complete)
    }
}

impl fmt::Display for CompletionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompletionStatus::Complete => write!(f, "All segments are labeled"),
            CompletionStatus::Incomplete { pending: 1 } => {
                write!(f, "1 segment is still pending")
            }
            CompletionStatus::Incomplete { pending } => {
                write!(f, "{} segments are still pending", pending)
            }
        }
    }
}
