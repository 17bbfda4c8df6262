// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! emotag - per-role emotion annotation of fixed-length video segments.
//!
//! A video's duration is cut into fixed-length segments; each (video, role)
//! pair gets its own annotation table with one row per segment. Tables live
//! in a [`session::SessionStore`] for the working session, accept edits
//! through validated commits, report how many rows are still pending and
//! export to an `.xlsx` workbook.

pub mod app;
pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod session;
pub mod ui;
pub mod util;

pub use error::{AnnotateError, Result};
