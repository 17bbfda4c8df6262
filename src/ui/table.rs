// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation table editor.
//!
//! Start, end and role are shown read-only. The emotion label is a single
//! choice from the fixed label set and the notes are free text; these are
//! the only cells the editor can change.

use super::label_color;
use crate::io::spreadsheet::export_file_name;
use crate::models::annotation::AnnotationTable;
use crate::models::catalog::VideoCatalogEntry;
use crate::models::emotion::EmotionLabel;
use crate::models::segment::Segment;
use crate::session::CompletionStatus;

/// Result of table interaction.
pub enum TableAction {
    None,
    /// A label or note changed in the draft table.
    Edited,
    Export,
}

/// Display the editable table and the completion status below it.
pub fn show(
    ui: &mut egui::Ui,
    draft: &mut AnnotationTable,
    entry: &VideoCatalogEntry,
    segments: &[Segment],
    role: &str,
    status: CompletionStatus,
) -> TableAction {
    let mut action = TableAction::None;

    ui.heading(format!("📝 Annotations: {}", role));
    ui.add_space(4.0);

    if draft.is_empty() {
        ui.label(egui::RichText::new("This video has no segments to annotate.").weak());
        return action;
    }

    let table_height = (ui.available_height() - 70.0).max(120.0);
    egui::ScrollArea::vertical()
        .max_height(table_height)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            egui::Grid::new("annotation_grid")
                .striped(true)
                .num_columns(6)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    for header in ["", "Start", "End", "Role", "Emotion Label", "Notes"] {
                        ui.label(egui::RichText::new(header).strong());
                    }
                    ui.end_row();

                    for (i, row) in draft.rows_mut().iter_mut().enumerate() {
                        match segments.get(i) {
                            Some(segment) => {
                                ui.hyperlink_to("▶", entry.locator_at(segment.start_seconds));
                            }
                            None => {
                                ui.label("");
                            }
                        }

                        ui.label(row.start_label());
                        ui.label(row.end_label());
                        ui.label(row.role());

                        let before = row.label;
                        egui::ComboBox::from_id_source(("emotion_label", i))
                            .selected_text(
                                egui::RichText::new(row.label.display_name())
                                    .color(label_color(row.label)),
                            )
                            .width(280.0)
                            .show_ui(ui, |ui| {
                                for label in EmotionLabel::ALL {
                                    ui.selectable_value(&mut row.label, label, label.display_name());
                                }
                            });
                        if row.label != before {
                            action = TableAction::Edited;
                        }

                        let notes = ui.add(
                            egui::TextEdit::singleline(&mut row.notes)
                                .hint_text("cue, e.g. shouting")
                                .desired_width(200.0),
                        );
                        if notes.changed() {
                            action = TableAction::Edited;
                        }

                        ui.end_row();
                    }
                });
        });

    ui.separator();

    match status {
        CompletionStatus::Complete => {
            ui.colored_label(egui::Color32::from_rgb(60, 170, 90), format!("✅ {}", status));
        }
        CompletionStatus::Incomplete { .. } => {
            ui.colored_label(
                egui::Color32::from_rgb(230, 160, 40),
                format!("⚠ {}. Finish labeling before downloading if you can.", status),
            );
        }
    }

    if ui
        .button(format!("📥 Download Excel ({})", export_file_name(role)))
        .clicked()
    {
        action = TableAction::Export;
    }

    action
}
