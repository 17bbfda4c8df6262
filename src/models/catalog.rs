// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Video catalog.
//!
//! The catalog is static reference data: which videos can be annotated,
//! where they can be watched, how long they are and which roles appear in
//! them. It is loaded once at startup and never mutated.

use super::segment::{checked_duration, generate_segments, Segment};
use crate::error::{AnnotateError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One video that can be annotated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoCatalogEntry {
    #[serde(rename = "id")]
    pub video_id: String,
    #[serde(rename = "url")]
    pub media_locator: String,
    #[serde(rename = "duration_sec")]
    pub duration_seconds: u64,
    pub roles: Vec<String>,
}

impl VideoCatalogEntry {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// Segments covering the whole video.
    pub fn segments(&self, segment_length: u64) -> Result<Vec<Segment>> {
        generate_segments(self.duration_seconds, segment_length)
    }

    /// Media locator that starts playback at `seconds`.
    pub fn locator_at(&self, seconds: u64) -> String {
        let separator = if self.media_locator.contains('?') { '&' } else { '?' };
        format!("{}{}t={}s", self.media_locator, separator, seconds)
    }
}

/// Catalog entry as written in a catalog file, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCatalogEntry {
    pub id: String,
    pub url: String,
    pub duration_sec: f64,
    pub roles: Vec<String>,
}

/// Catalog file contents, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCatalog {
    pub videos: Vec<RawCatalogEntry>,
}

/// The ordered set of annotatable videos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoCatalog {
    videos: Vec<VideoCatalogEntry>,
}

impl VideoCatalog {
    /// Validate a parsed catalog file.
    pub fn from_raw(raw: RawCatalog) -> Result<Self> {
        let mut seen_ids = HashSet::new();
        let mut videos = Vec::with_capacity(raw.videos.len());

        for entry in raw.videos {
            if !seen_ids.insert(entry.id.clone()) {
                return Err(AnnotateError::InvalidCatalog(format!(
                    "video {:?} is listed more than once",
                    entry.id
                )));
            }
            if entry.roles.is_empty() {
                return Err(AnnotateError::InvalidCatalog(format!(
                    "video {:?} has no roles",
                    entry.id
                )));
            }
            let mut seen_roles = HashSet::new();
            if let Some(dup) = entry.roles.iter().find(|r| !seen_roles.insert(r.as_str())) {
                return Err(AnnotateError::InvalidCatalog(format!(
                    "role {:?} is listed more than once for video {:?}",
                    dup, entry.id
                )));
            }

            videos.push(VideoCatalogEntry {
                duration_seconds: checked_duration(entry.duration_sec)?,
                video_id: entry.id,
                media_locator: entry.url,
                roles: entry.roles,
            });
        }

        if videos.is_empty() {
            return Err(AnnotateError::InvalidCatalog("catalog lists no videos".to_string()));
        }

        Ok(Self { videos })
    }

    /// The two clips used by the original annotation study.
    pub fn builtin() -> Self {
        Self {
            videos: vec![
                VideoCatalogEntry {
                    video_id: "Marriage Story".to_string(),
                    media_locator: "https://www.youtube.com/watch?v=FDFdroN7d0w".to_string(),
                    duration_seconds: 259,
                    roles: vec!["Nicole".to_string(), "Charlie".to_string()],
                },
                VideoCatalogEntry {
                    video_id: "2 Broke Girls".to_string(),
                    media_locator: "https://www.youtube.com/watch?v=Wfkaq1t7C9o".to_string(),
                    duration_seconds: 181,
                    roles: vec!["Max".to_string(), "Caroline".to_string()],
                },
            ],
        }
    }

    pub fn videos(&self) -> &[VideoCatalogEntry] {
        &self.videos
    }

    pub fn get(&self, video_id: &str) -> Option<&VideoCatalogEntry> {
        self.videos.iter().find(|v| v.video_id == video_id)
    }

    /// Look up a video and check that `role` belongs to it.
    pub fn resolve(&self, video_id: &str, role: &str) -> Result<&VideoCatalogEntry> {
        let entry = self
            .get(video_id)
            .ok_or_else(|| AnnotateError::UnknownVideo(video_id.to_string()))?;
        if !entry.has_role(role) {
            return Err(AnnotateError::UnknownRole {
                video_id: video_id.to_string(),
                role: role.to_string(),
            });
        }
        Ok(entry)
    }

    /// First video and its first role, the initial selection.
    pub fn first_selection(&self) -> Option<(&str, &str)> {
        let video = self.videos.first()?;
        let role = video.roles.first()?;
        Some((&video.video_id, role))
    }
}

impl Default for VideoCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_entry(id: &str, duration: f64, roles: &[&str]) -> RawCatalogEntry {
        RawCatalogEntry {
            id: id.to_string(),
            url: format!("https://example.com/{}.mp4", id),
            duration_sec: duration,
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn test_builtin_catalog() {
        let catalog = VideoCatalog::builtin();
        assert_eq!(catalog.videos().len(), 2);
        assert_eq!(catalog.first_selection(), Some(("Marriage Story", "Nicole")));

        let girls = catalog.get("2 Broke Girls").unwrap();
        assert_eq!(girls.duration_seconds, 181);
        assert_eq!(girls.segments(15).unwrap().len(), 13);
    }

    #[test]
    fn test_resolve_checks_role() {
        let catalog = VideoCatalog::builtin();
        assert!(catalog.resolve("Marriage Story", "Charlie").is_ok());
        assert!(matches!(
            catalog.resolve("Marriage Story", "Max"),
            Err(AnnotateError::UnknownRole { .. })
        ));
        assert!(matches!(
            catalog.resolve("Heat", "Neil"),
            Err(AnnotateError::UnknownVideo(_))
        ));
    }

    #[test]
    fn test_locator_at() {
        let catalog = VideoCatalog::builtin();
        let entry = catalog.get("Marriage Story").unwrap();
        assert_eq!(
            entry.locator_at(45),
            "https://www.youtube.com/watch?v=FDFdroN7d0w&t=45s"
        );

        let raw = RawCatalog {
            videos: vec![raw_entry("clip", 10.0, &["A"])],
        };
        let catalog = VideoCatalog::from_raw(raw).unwrap();
        assert_eq!(
            catalog.get("clip").unwrap().locator_at(0),
            "https://example.com/clip.mp4?t=0s"
        );
    }

    #[test]
    fn test_from_raw_rejects_bad_duration() {
        let raw = RawCatalog {
            videos: vec![raw_entry("clip", -5.0, &["A"])],
        };
        assert!(matches!(
            VideoCatalog::from_raw(raw),
            Err(AnnotateError::InvalidDuration(_))
        ));
    }

    #[test]
    fn test_from_raw_rejects_duplicates() {
        let raw = RawCatalog {
            videos: vec![raw_entry("clip", 10.0, &["A"]), raw_entry("clip", 20.0, &["B"])],
        };
        assert!(matches!(
            VideoCatalog::from_raw(raw),
            Err(AnnotateError::InvalidCatalog(_))
        ));

        let raw = RawCatalog {
            videos: vec![raw_entry("clip", 10.0, &["A", "A"])],
        };
        assert!(matches!(
            VideoCatalog::from_raw(raw),
            Err(AnnotateError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn test_from_raw_rejects_empty() {
        assert!(VideoCatalog::from_raw(RawCatalog { videos: vec![] }).is_err());
        let raw = RawCatalog {
            videos: vec![raw_entry("clip", 10.0, &[])],
        };
        assert!(VideoCatalog::from_raw(raw).is_err());
    }
}
