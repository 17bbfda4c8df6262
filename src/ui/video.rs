// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Video information header.
//!
//! Playback happens in the annotator's browser or player; this panel only
//! shows where the video lives and how it is segmented.

use crate::models::catalog::VideoCatalogEntry;
use crate::util::timecode::format_duration_short;

/// Display the header for the selected video.
pub fn show(ui: &mut egui::Ui, entry: &VideoCatalogEntry, segment_count: usize, segment_length: u64) {
    ui.horizontal(|ui| {
        ui.heading(format!("📺 {}", entry.video_id));
        ui.separator();
        ui.hyperlink_to("Open video ↗", &entry.media_locator);
    });

    ui.label(format!(
        "Duration {} · {} segments of {} s",
        format_duration_short(entry.duration_seconds),
        segment_count,
        segment_length
    ));

    ui.label(
        egui::RichText::new(format!(
            "Watch the video and label the role's emotion for every {}-second segment. \
             Use ▶ on a row to open the video at that segment.",
            segment_length
        ))
        .italics()
        .weak(),
    );
}
