// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Command line options and startup configuration.

use crate::error::AnnotateError;
use crate::io::serialization::load_catalog;
use crate::models::catalog::VideoCatalog;
use crate::models::segment::DEFAULT_SEGMENT_LENGTH;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Annotate fixed-length video segments with per-role emotion labels
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Video catalog file (YAML or JSON). The built-in catalog is used when omitted
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Length of each annotation segment, in seconds
    #[arg(short, long, default_value_t = DEFAULT_SEGMENT_LENGTH)]
    pub segment_length: u64,
}

/// Effective configuration for one working session.
#[derive(Debug, Clone)]
pub struct Settings {
    pub catalog: VideoCatalog,
    pub segment_length: u64,
}

impl Settings {
    pub fn from_args(args: &Args) -> Result<Self> {
        if args.segment_length == 0 {
            return Err(AnnotateError::InvalidSegmentLength.into());
        }

        let catalog = match &args.catalog {
            Some(path) => load_catalog(path)?,
            None => {
                log::info!("Using built-in video catalog");
                VideoCatalog::builtin()
            }
        };

        Ok(Self {
            catalog,
            segment_length: args.segment_length,
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog: VideoCatalog::builtin(),
            segment_length: DEFAULT_SEGMENT_LENGTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["emotag"]).unwrap();
        assert_eq!(args.segment_length, 15);
        assert!(args.catalog.is_none());

        let settings = Settings::from_args(&args).unwrap();
        assert_eq!(settings.catalog, VideoCatalog::builtin());
    }

    #[test]
    fn test_zero_segment_length_rejected() {
        let args = Args::try_parse_from(["emotag", "--segment-length", "0"]).unwrap();
        let err = Settings::from_args(&args).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AnnotateError>(),
            Some(AnnotateError::InvalidSegmentLength)
        ));
    }

    #[test]
    fn test_catalog_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"{"videos":[{"id":"clip","url":"file:///clip.mp4","duration_sec":61,"roles":["A"]}]}"#,
        )
        .unwrap();

        let args = Args::try_parse_from([
            "emotag",
            "-c",
            path.to_str().unwrap(),
            "-s",
            "30",
        ])
        .unwrap();
        let settings = Settings::from_args(&args).unwrap();
        assert_eq!(settings.segment_length, 30);
        assert_eq!(settings.catalog.videos().len(), 1);
    }
}
