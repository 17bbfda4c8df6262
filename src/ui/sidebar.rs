// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation target selection and emotion legend.
//!
//! This module provides the side panel where the annotator picks the video
//! and the role to label, with a quick reference of the emotion categories.

use super::label_color;
use crate::models::catalog::VideoCatalog;
use crate::models::emotion::EmotionLabel;
use crate::session::SessionKey;

/// Result of sidebar interaction.
pub enum SidebarAction {
    None,
    SelectVideo(String),
    SelectRole(String),
}

/// Display the sidebar.
pub fn show(ui: &mut egui::Ui, catalog: &VideoCatalog, key: &SessionKey) -> SidebarAction {
    let mut action = SidebarAction::None;

    ui.heading("Annotation Target");
    ui.add_space(6.0);

    ui.label("Video:");
    egui::ComboBox::from_id_source("video_select")
        .selected_text(key.video_id.as_str())
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            for video in catalog.videos() {
                let selected = video.video_id == key.video_id;
                if ui.selectable_label(selected, video.video_id.as_str()).clicked() && !selected {
                    action = SidebarAction::SelectVideo(video.video_id.clone());
                }
            }
        });

    ui.add_space(4.0);

    ui.label("Role:");
    if let Some(video) = catalog.get(&key.video_id) {
        egui::ComboBox::from_id_source("role_select")
            .selected_text(key.role.as_str())
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                for role in &video.roles {
                    let selected = *role == key.role;
                    if ui.selectable_label(selected, role.as_str()).clicked() && !selected {
                        action = SidebarAction::SelectRole(role.clone());
                    }
                }
            });
    }

    ui.separator();

    ui.label(egui::RichText::new("Emotion quick reference").strong());
    ui.add_space(4.0);
    for label in EmotionLabel::EMOTIONS {
        ui.horizontal(|ui| {
            ui.colored_label(label_color(label), "●");
            ui.label(egui::RichText::new(label.short_name()).strong());
        });
        ui.label(egui::RichText::new(label.cue()).weak());
    }

    ui.add_space(8.0);
    ui.label(
        egui::RichText::new(format!(
            "Pick \"{}\" when the role is off screen for the whole segment.",
            EmotionLabel::NotPresent.short_name()
        ))
        .italics()
        .weak(),
    );

    action
}
