// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model: segments, labels, annotation tables and the video catalog.

pub mod annotation;
pub mod catalog;
pub mod emotion;
pub mod segment;
