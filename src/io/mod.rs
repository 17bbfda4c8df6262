// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for catalogs, table exchange and spreadsheets.

pub mod serialization;
pub mod spreadsheet;
