// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! emotag - video emotion annotation tool
//!
//! A desktop application for labeling the emotional state of each role in
//! a video, segment by segment, and exporting the result as a spreadsheet.

use anyhow::Result;
use clap::Parser;
use emotag::app::EmotagApp;
use emotag::config::{Args, Settings};

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();
    let settings = Settings::from_args(&args)?;
    log::info!(
        "Starting with {} videos, {} s segments",
        settings.catalog.videos().len(),
        settings.segment_length
    );

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 800.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("emotag - Video Emotion Annotation"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "emotag",
        options,
        Box::new(move |_cc| Ok(Box::new(EmotagApp::new(settings)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
