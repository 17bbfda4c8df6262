// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Emotion labels.
//!
//! The label set is closed. Labels travel across the editing surface and
//! into exported spreadsheets as their display strings, never as variant
//! names.

use crate::error::AnnotateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The emotional state of a role during one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum EmotionLabel {
    /// Not annotated yet.
    #[default]
    Pending,
    IntenseConflict,
    ExcitedJoy,
    EmotionalBreakdown,
    CalmCommunication,
    /// The role does not appear during the segment.
    NotPresent,
}

impl EmotionLabel {
    /// Every label, in the order an editor should offer them.
    pub const ALL: [EmotionLabel; 6] = [
        EmotionLabel::Pending,
        EmotionLabel::IntenseConflict,
        EmotionLabel::ExcitedJoy,
        EmotionLabel::EmotionalBreakdown,
        EmotionLabel::CalmCommunication,
        EmotionLabel::NotPresent,
    ];

    /// Labels that describe an emotional state, shown in the legend.
    pub const EMOTIONS: [EmotionLabel; 4] = [
        EmotionLabel::IntenseConflict,
        EmotionLabel::ExcitedJoy,
        EmotionLabel::EmotionalBreakdown,
        EmotionLabel::CalmCommunication,
    ];

    /// Full display string, as written into exported spreadsheets.
    pub fn display_name(self) -> &'static str {
        match self {
            EmotionLabel::Pending => "尚未標記 (Pending)",
            EmotionLabel::IntenseConflict => "Intense Conflict (極度憤怒與厭惡)",
            EmotionLabel::ExcitedJoy => "Excited Joy (以快樂和驚訝為主)",
            EmotionLabel::EmotionalBreakdown => "Emotional Breakdown (悲傷和恐懼伴隨痛苦跡象)",
            EmotionLabel::CalmCommunication => "Calm Communication (持續的平靜狀態)",
            EmotionLabel::NotPresent => "Not Present (角色未出現)",
        }
    }

    /// Short English name.
    pub fn short_name(self) -> &'static str {
        match self {
            EmotionLabel::Pending => "Pending",
            EmotionLabel::IntenseConflict => "Intense Conflict",
            EmotionLabel::ExcitedJoy => "Excited Joy",
            EmotionLabel::EmotionalBreakdown => "Emotional Breakdown",
            EmotionLabel::CalmCommunication => "Calm Communication",
            EmotionLabel::NotPresent => "Not Present",
        }
    }

    /// Observable cues for the legend. Empty for the non-emotion labels.
    pub fn cue(self) -> &'static str {
        match self {
            EmotionLabel::IntenseConflict => "怒吼、爭執、高張力",
            EmotionLabel::ExcitedJoy => "大笑、驚喜、正向能量",
            EmotionLabel::EmotionalBreakdown => "哭泣、崩潰、恐懼",
            EmotionLabel::CalmCommunication => "理性、平穩",
            EmotionLabel::Pending | EmotionLabel::NotPresent => "",
        }
    }

    pub fn is_pending(self) -> bool {
        matches!(self, EmotionLabel::Pending)
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for EmotionLabel {
    type Err = AnnotateError;

    /// Accepts the full display string or the short English name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        EmotionLabel::ALL
            .into_iter()
            .find(|label| label.display_name() == s || label.short_name() == s)
            .ok_or_else(|| AnnotateError::InvalidLabel(s.to_string()))
    }
}

impl TryFrom<String> for EmotionLabel {
    type Error = AnnotateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<EmotionLabel> for String {
    fn from(label: EmotionLabel) -> Self {
        label.display_name().to_string()
    }
}
