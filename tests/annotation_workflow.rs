// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! End-to-end annotation cycle through the public API.

use emotag::io::spreadsheet::{export_to_spreadsheet, import_spreadsheet};
use emotag::models::catalog::VideoCatalog;
use emotag::models::emotion::EmotionLabel;
use emotag::models::segment::DEFAULT_SEGMENT_LENGTH;
use emotag::session::{count_pending, CompletionStatus, SessionKey, SessionStore};
use emotag::AnnotateError;

#[test]
fn annotate_commit_and_export_a_role() {
    let catalog = VideoCatalog::builtin();
    let mut store = SessionStore::new();

    let entry = catalog.resolve("2 Broke Girls", "Max").unwrap();
    let segments = entry.segments(DEFAULT_SEGMENT_LENGTH).unwrap();
    let key = SessionKey::new(&entry.video_id, "Max");

    let table = store.get_or_create_table(&key, "Max", &segments).clone();
    assert_eq!(table.len(), 13);
    assert_eq!(count_pending(&table), 13);

    // Label half the rows, then commit.
    let mut draft = table.clone();
    for row in draft.rows_mut().iter_mut().take(7) {
        row.label = EmotionLabel::ExcitedJoy;
        row.notes = "laughing".to_string();
    }
    store.commit_edits(&key, draft.clone()).unwrap();
    assert_eq!(
        CompletionStatus::of(store.table(&key).unwrap()),
        CompletionStatus::Incomplete { pending: 6 }
    );

    // Finish the rest.
    for row in draft.rows_mut().iter_mut().skip(7) {
        row.label = EmotionLabel::NotPresent;
    }
    store.commit_edits(&key, draft).unwrap();
    let committed = store.table(&key).unwrap();
    assert_eq!(count_pending(committed), 0);

    let bytes = export_to_spreadsheet(committed).unwrap();
    let reparsed = import_spreadsheet(&bytes).unwrap();
    assert_eq!(&reparsed, committed);
    assert_eq!(reparsed.rows()[12].start_label(), "00:03:00");
    assert_eq!(reparsed.rows()[12].end_label(), "00:03:01");
}

#[test]
fn rejected_commit_keeps_previous_state() {
    let catalog = VideoCatalog::builtin();
    let mut store = SessionStore::new();
    let entry = catalog.resolve("Marriage Story", "Charlie").unwrap();
    let segments = entry.segments(DEFAULT_SEGMENT_LENGTH).unwrap();
    let key = SessionKey::new("Marriage Story", "Charlie");

    let mut first = store.get_or_create_table(&key, "Charlie", &segments).clone();
    first.rows_mut()[0].label = EmotionLabel::IntenseConflict;
    store.commit_edits(&key, first.clone()).unwrap();

    let mut raw = first.to_raw();
    raw.truncate(10);
    let err = store.commit_raw_edits(&key, raw).unwrap_err();
    assert!(matches!(
        err,
        AnnotateError::ShapeMismatch {
            expected: 18,
            actual: 10
        }
    ));
    assert_eq!(store.table(&key), Some(&first));

    // A failed export leaves the store alone as well.
    let other = SessionKey::new("Marriage Story", "Nicole");
    let empty = store.get_or_create_table(&other, "Nicole", &[]).clone();
    assert!(export_to_spreadsheet(&empty).is_err());
    assert_eq!(store.table(&key), Some(&first));
}

#[test]
fn spreadsheet_from_another_session_can_be_loaded() {
    let catalog = VideoCatalog::builtin();
    let entry = catalog.resolve("Marriage Story", "Nicole").unwrap();
    let segments = entry.segments(DEFAULT_SEGMENT_LENGTH).unwrap();
    let key = SessionKey::new("Marriage Story", "Nicole");

    let mut earlier = SessionStore::new();
    let mut table = earlier.get_or_create_table(&key, "Nicole", &segments).clone();
    table.rows_mut()[5].label = EmotionLabel::EmotionalBreakdown;
    table.rows_mut()[5].notes = "哭泣".to_string();
    earlier.commit_edits(&key, table.clone()).unwrap();
    let bytes = export_to_spreadsheet(earlier.table(&key).unwrap()).unwrap();

    let mut later = SessionStore::new();
    later.get_or_create_table(&key, "Nicole", &segments);
    later
        .commit_imported(&key, import_spreadsheet(&bytes).unwrap())
        .unwrap();
    assert_eq!(later.table(&key), Some(&table));
}

#[test]
fn workbook_of_another_role_cannot_replace_a_table() {
    let catalog = VideoCatalog::builtin();
    let entry = catalog.resolve("Marriage Story", "Charlie").unwrap();
    let segments = entry.segments(DEFAULT_SEGMENT_LENGTH).unwrap();
    let charlie = SessionKey::new("Marriage Story", "Charlie");
    let nicole = SessionKey::new("Marriage Story", "Nicole");

    let mut store = SessionStore::new();
    let mut charlie_table = store.get_or_create_table(&charlie, "Charlie", &segments).clone();
    for row in charlie_table.rows_mut() {
        row.label = EmotionLabel::IntenseConflict;
    }
    store.commit_edits(&charlie, charlie_table.clone()).unwrap();
    let nicole_before = store.get_or_create_table(&nicole, "Nicole", &segments).clone();

    // Same row count, so only the read-only columns tell the files apart.
    let bytes = export_to_spreadsheet(&charlie_table).unwrap();
    let err = store
        .commit_imported(&nicole, import_spreadsheet(&bytes).unwrap())
        .unwrap_err();

    assert!(matches!(
        err,
        AnnotateError::ReadOnlyFieldChanged { field: "Role", .. }
    ));
    assert_eq!(store.table(&nicole), Some(&nicole_before));
    assert!(store
        .table(&nicole)
        .unwrap()
        .rows()
        .iter()
        .all(|row| row.role() == "Nicole"));
}
