// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Catalog files and JSON table exchange.
//!
//! Catalogs are read from YAML or JSON, chosen by file extension. Tables
//! are exchanged with external editors as a JSON array of rows keyed by
//! the spreadsheet column headers, with labels as display strings.

use crate::models::annotation::{AnnotationTable, RawAnnotationRow};
use crate::models::catalog::{RawCatalog, VideoCatalog};
use anyhow::{bail, Context, Result};
use std::path::Path;

/// Parse and validate a YAML catalog.
pub fn parse_catalog_yaml(yaml: &str) -> Result<VideoCatalog> {
    let raw: RawCatalog = serde_yaml::from_str(yaml).context("Malformed YAML catalog")?;
    Ok(VideoCatalog::from_raw(raw)?)
}

/// Parse and validate a JSON catalog.
pub fn parse_catalog_json(json: &str) -> Result<VideoCatalog> {
    let raw: RawCatalog = serde_json::from_str(json).context("Malformed JSON catalog")?;
    Ok(VideoCatalog::from_raw(raw)?)
}

/// Load a catalog file, YAML or JSON by extension.
pub fn load_catalog(path: &Path) -> Result<VideoCatalog> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog {}", path.display()))?;

    let extension = path.extension().and_then(|s| s.to_str());
    let catalog = match extension {
        Some("yaml") | Some("yml") => parse_catalog_yaml(&contents),
        Some("json") => parse_catalog_json(&contents),
        _ => bail!("Unsupported catalog extension: {:?}", extension),
    }
    .with_context(|| format!("Invalid catalog {}", path.display()))?;

    log::info!(
        "Loaded {} videos from {}",
        catalog.videos().len(),
        path.display()
    );
    Ok(catalog)
}

/// Export a table as a JSON array of rows.
pub fn export_table_json(table: &AnnotationTable, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(&table.to_raw())?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Import edited rows from JSON. Labels are checked later, at commit time.
pub fn import_rows_json(path: &Path) -> Result<Vec<RawAnnotationRow>> {
    let json = std::fs::read_to_string(path)?;
    let rows = serde_json::from_str(&json)?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnnotateError;
    use crate::models::emotion::EmotionLabel;
    use crate::models::segment::generate_segments;

    const CATALOG_YAML: &str = r#"
videos:
  - id: Marriage Story
    url: https://www.youtube.com/watch?v=FDFdroN7d0w
    duration_sec: 259
    roles: [Nicole, Charlie]
  - id: 2 Broke Girls
    url: https://www.youtube.com/watch?v=Wfkaq1t7C9o
    duration_sec: 181
    roles: [Max, Caroline]
"#;

    #[test]
    fn test_yaml_catalog_matches_builtin() {
        let catalog = parse_catalog_yaml(CATALOG_YAML).unwrap();
        assert_eq!(catalog, VideoCatalog::builtin());
    }

    #[test]
    fn test_json_catalog() {
        let json = r#"{"videos":[{"id":"clip","url":"file:///clip.mp4","duration_sec":30,"roles":["A","B"]}]}"#;
        let catalog = parse_catalog_json(json).unwrap();
        let entry = catalog.get("clip").unwrap();
        assert_eq!(entry.duration_seconds, 30);
        assert_eq!(entry.roles, vec!["A", "B"]);
    }

    #[test]
    fn test_negative_duration_is_invalid_duration() {
        let json = r#"{"videos":[{"id":"clip","url":"u","duration_sec":-3,"roles":["A"]}]}"#;
        let err = parse_catalog_json(json).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AnnotateError>(),
            Some(AnnotateError::InvalidDuration(_))
        ));
    }

    #[test]
    fn test_load_catalog_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let yaml_path = dir.path().join("catalog.yml");
        std::fs::write(&yaml_path, CATALOG_YAML).unwrap();
        assert_eq!(load_catalog(&yaml_path).unwrap().videos().len(), 2);

        let txt_path = dir.path().join("catalog.txt");
        std::fs::write(&txt_path, CATALOG_YAML).unwrap();
        assert!(load_catalog(&txt_path).is_err());

        assert!(load_catalog(&dir.path().join("missing.yaml")).is_err());
    }

    #[test]
    fn test_table_json_exchange() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Max.json");

        let segments = generate_segments(45, 15).unwrap();
        let mut table = AnnotationTable::pending("Max", &segments);
        table.rows_mut()[2].label = EmotionLabel::ExcitedJoy;
        table.rows_mut()[2].notes = "laughing".to_string();

        export_table_json(&table, &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"Emotion Label\": \"Excited Joy (以快樂和驚訝為主)\""));

        let rows = import_rows_json(&path).unwrap();
        assert_eq!(AnnotationTable::try_from_raw(rows).unwrap(), table);
    }
}
