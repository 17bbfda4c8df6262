// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the annotation window.

pub mod sidebar;
pub mod table;
pub mod video;

use crate::models::emotion::EmotionLabel;

/// Legend colour for a label.
pub fn label_color(label: EmotionLabel) -> egui::Color32 {
    match label {
        EmotionLabel::IntenseConflict => egui::Color32::from_rgb(220, 60, 60),
        EmotionLabel::ExcitedJoy => egui::Color32::from_rgb(230, 190, 40),
        EmotionLabel::EmotionalBreakdown => egui::Color32::from_rgb(70, 120, 220),
        EmotionLabel::CalmCommunication => egui::Color32::from_rgb(60, 170, 90),
        EmotionLabel::NotPresent => egui::Color32::from_gray(140),
        EmotionLabel::Pending => egui::Color32::from_gray(200),
    }
}
