// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Working-session state.
//!
//! The store maps each (video, role) pair to its annotation table. It is an
//! ordinary value owned by whoever drives the session and handed to the
//! operations that need it; there is no global instance.

pub mod completion;
pub mod store;

pub use completion::{count_pending, CompletionStatus};
pub use store::SessionStore;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one annotation task: a role within a video.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionKey {
    pub video_id: String,
    pub role: String,
}

impl SessionKey {
    pub fn new(video_id: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            video_id: video_id.into(),
            role: role.into(),
        }
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.video_id, self.role)
    }
}
