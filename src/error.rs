// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Error types for the annotation core.
//!
//! Every error here is local to the operation that raised it. A rejected
//! commit or a failed export never changes what the session store holds.

use crate::session::SessionKey;
use thiserror::Error;

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, AnnotateError>;

#[derive(Error, Debug)]
pub enum AnnotateError {
    /// A duration that is negative, not finite, or not a whole second count.
    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Segment length must be a positive number of seconds")]
    InvalidSegmentLength,

    /// An edited table whose row count differs from the stored one.
    #[error("Row count mismatch: stored table has {expected} rows, edited table has {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// An imported row whose start, end or role differs from the stored row.
    #[error("Row {row} changes read-only column {field}: stored {stored:?}, imported {imported:?}")]
    ReadOnlyFieldChanged {
        row: usize,
        field: &'static str,
        stored: String,
        imported: String,
    },

    #[error("Invalid emotion label: {0:?}")]
    InvalidLabel(String),

    #[error("No annotation table exists for {0}")]
    UnknownSession(SessionKey),

    #[error("Unknown video: {0}")]
    UnknownVideo(String),

    #[error("Role {role:?} is not listed for video {video_id:?}")]
    UnknownRole { video_id: String, role: String },

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Spreadsheet serialization failed: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<zip::result::ZipError> for AnnotateError {
    fn from(err: zip::result::ZipError) -> Self {
        AnnotateError::Serialization(err.to_string())
    }
}
