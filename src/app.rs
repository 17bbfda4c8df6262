// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! The window keeps a draft copy of the active table for the editor to
//! mutate. Every edit is committed to the session store straight away; if
//! the store rejects it, the draft is reloaded from the committed table.

use crate::config::Settings;
use crate::io::{serialization, spreadsheet};
use crate::models::annotation::AnnotationTable;
use crate::models::catalog::VideoCatalog;
use crate::models::segment::Segment;
use crate::session::{CompletionStatus, SessionKey, SessionStore};
use crate::ui::{sidebar, table, video};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NoticeKind {
    Info,
    Error,
}

/// Message shown in the status bar until dismissed.
struct Notice {
    kind: NoticeKind,
    text: String,
}

/// Main application state.
pub struct EmotagApp {
    catalog: VideoCatalog,
    segment_length: u64,

    /// Committed tables for every (video, role) opened this session
    store: SessionStore,

    /// Currently selected video and role
    key: SessionKey,

    /// Segments of the selected video
    segments: Vec<Segment>,

    /// Editor's working copy of the selected table
    draft: AnnotationTable,

    notice: Option<Notice>,
}

impl EmotagApp {
    /// Create the application and open the first video and role.
    pub fn new(settings: Settings) -> Self {
        let key = settings
            .catalog
            .first_selection()
            .map(|(video_id, role)| SessionKey::new(video_id, role))
            .unwrap_or_else(|| SessionKey::new("", ""));

        let mut app = Self {
            catalog: settings.catalog,
            segment_length: settings.segment_length,
            store: SessionStore::new(),
            key,
            segments: Vec::new(),
            draft: AnnotationTable::default(),
            notice: None,
        };
        app.activate();
        app
    }

    fn info(&mut self, text: String) {
        log::info!("{}", text);
        self.notice = Some(Notice {
            kind: NoticeKind::Info,
            text,
        });
    }

    fn error(&mut self, text: String) {
        log::error!("{}", text);
        self.notice = Some(Notice {
            kind: NoticeKind::Error,
            text,
        });
    }

    /// Open the table for the current key, creating it on first use.
    fn activate(&mut self) {
        let segments = self
            .catalog
            .resolve(&self.key.video_id, &self.key.role)
            .and_then(|entry| entry.segments(self.segment_length));

        match segments {
            Ok(segments) => {
                let table = self
                    .store
                    .get_or_create_table(&self.key, &self.key.role, &segments);
                self.draft = table.clone();
                self.segments = segments;
            }
            Err(e) => {
                self.segments.clear();
                self.draft = AnnotationTable::default();
                self.error(format!("Cannot open {}: {}", self.key, e));
            }
        }
    }

    fn select_video(&mut self, video_id: String) {
        let role = self
            .catalog
            .get(&video_id)
            .and_then(|video| video.roles.first().cloned())
            .unwrap_or_default();
        self.key = SessionKey::new(video_id, role);
        self.activate();
    }

    fn select_role(&mut self, role: String) {
        self.key.role = role;
        self.activate();
    }

    fn reload_draft(&mut self) {
        self.draft = self.store.table(&self.key).cloned().unwrap_or_default();
    }

    /// Commit the editor's draft as the new table for the current key.
    fn commit_draft(&mut self) {
        if let Err(e) = self.store.commit_edits(&self.key, self.draft.clone()) {
            self.reload_draft();
            self.error(format!("Edit rejected: {}", e));
        }
    }

    fn status(&self) -> CompletionStatus {
        match self.store.table(&self.key) {
            Some(table) => CompletionStatus::of(table),
            None => CompletionStatus::of(&self.draft),
        }
    }

    fn export_spreadsheet(&mut self, path: PathBuf) {
        let Some(table) = self.store.table(&self.key) else {
            return;
        };
        let pending = crate::session::count_pending(table);
        match spreadsheet::write_spreadsheet(table, &path) {
            Ok(()) if pending > 0 => self.info(format!(
                "Exported to {} with {} segments still pending",
                path.display(),
                pending
            )),
            Ok(()) => self.info(format!("Exported to {}", path.display())),
            Err(e) => self.error(format!("Failed to export spreadsheet: {}", e)),
        }
    }

    fn import_spreadsheet(&mut self, path: PathBuf) {
        let result = spreadsheet::read_spreadsheet(&path)
            .and_then(|imported| self.store.commit_imported(&self.key, imported));
        match result {
            Ok(()) => {
                self.reload_draft();
                self.info(format!("Loaded annotations from {}", path.display()));
            }
            Err(e) => self.error(format!("Failed to import spreadsheet: {}", e)),
        }
    }

    fn export_json(&mut self, path: PathBuf) {
        let Some(table) = self.store.table(&self.key) else {
            return;
        };
        match serialization::export_table_json(table, &path) {
            Ok(()) => self.info(format!("Saved table to {}", path.display())),
            Err(e) => self.error(format!("Failed to save table: {:#}", e)),
        }
    }

    fn import_json(&mut self, path: PathBuf) {
        let rows = match serialization::import_rows_json(&path) {
            Ok(rows) => rows,
            Err(e) => {
                self.error(format!("Failed to read {}: {:#}", path.display(), e));
                return;
            }
        };
        let result = AnnotationTable::try_from_raw(rows)
            .and_then(|imported| self.store.commit_imported(&self.key, imported));
        match result {
            Ok(()) => {
                self.reload_draft();
                self.info(format!("Loaded edits from {}", path.display()));
            }
            Err(e) => self.error(format!("Edit rejected: {}", e)),
        }
    }

    fn reset_current(&mut self) {
        self.store.reset(&self.key);
        self.activate();
        self.info(format!("Reset annotations for {}", self.key));
    }

    fn clear_all(&mut self) {
        self.store.clear();
        self.activate();
        self.info("Cleared all annotation tables".to_string());
    }

    fn menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    let file_name = spreadsheet::export_file_name(&self.key.role);
                    if ui.button("Export Spreadsheet...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Excel", &["xlsx"])
                            .set_file_name(&file_name)
                            .save_file()
                        {
                            self.export_spreadsheet(path);
                        }
                        ui.close_menu();
                    }
                    if ui.button("Import Spreadsheet...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Excel", &["xlsx"])
                            .pick_file()
                        {
                            self.import_spreadsheet(path);
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Save Table as JSON...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("JSON", &["json"])
                            .set_file_name(format!("{}.json", self.key.role))
                            .save_file()
                        {
                            self.export_json(path);
                        }
                        ui.close_menu();
                    }
                    if ui.button("Load Edits from JSON...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("JSON", &["json"])
                            .pick_file()
                        {
                            self.import_json(path);
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Session", |ui| {
                    if ui.button("Reset Current Table").clicked() {
                        self.reset_current();
                        ui.close_menu();
                    }
                    if ui.button("Clear All Tables").clicked() {
                        self.clear_all();
                        ui.close_menu();
                    }
                });
            });
        });
    }

    fn status_bar(&mut self, ctx: &egui::Context) {
        let mut dismissed = false;
        if let Some(notice) = &self.notice {
            egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let color = match notice.kind {
                        NoticeKind::Info => egui::Color32::from_gray(200),
                        NoticeKind::Error => egui::Color32::from_rgb(230, 80, 80),
                    };
                    ui.colored_label(color, notice.text.as_str());
                    if ui.small_button("✖").clicked() {
                        dismissed = true;
                    }
                });
            });
        }
        if dismissed {
            self.notice = None;
        }
    }
}

impl eframe::App for EmotagApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.menu_bar(ctx);
        self.status_bar(ctx);

        let sidebar_action = egui::SidePanel::left("sidebar")
            .default_width(240.0)
            .show(ctx, |ui| sidebar::show(ui, &self.catalog, &self.key))
            .inner;

        match sidebar_action {
            sidebar::SidebarAction::SelectVideo(video_id) => self.select_video(video_id),
            sidebar::SidebarAction::SelectRole(role) => self.select_role(role),
            sidebar::SidebarAction::None => {}
        }

        let status = self.status();
        let table_action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                let Some(entry) = self.catalog.get(&self.key.video_id) else {
                    ui.label("No video selected.");
                    return table::TableAction::None;
                };
                video::show(ui, entry, self.segments.len(), self.segment_length);
                ui.separator();
                table::show(
                    ui,
                    &mut self.draft,
                    entry,
                    &self.segments,
                    &self.key.role,
                    status,
                )
            })
            .inner;

        match table_action {
            table::TableAction::Edited => self.commit_draft(),
            table::TableAction::Export => {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Excel", &["xlsx"])
                    .set_file_name(spreadsheet::export_file_name(&self.key.role))
                    .save_file()
                {
                    self.export_spreadsheet(path);
                }
            }
            table::TableAction::None => {}
        }
    }
}
