// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Spreadsheet export and re-import.
//!
//! Tables are written as a minimal Office Open XML workbook: one sheet
//! named `Sheet1`, a header row, then one row per annotation row. Every
//! cell is an inline string, so the workbook needs no shared-string table
//! and no styles.
//!
//! The reader only understands workbooks written by this module. Files
//! re-saved by a spreadsheet program use shared strings and are rejected.

use crate::error::{AnnotateError, Result};
use crate::models::annotation::{AnnotationTable, RawAnnotationRow, COLUMN_HEADERS};
use std::io::{Cursor, Read, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// MIME type of the exported workbook.
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Name of the single worksheet.
pub const SHEET_NAME: &str = "Sheet1";

/// Longest text a spreadsheet cell can hold.
const MAX_CELL_CHARS: usize = 32_767;

const SHEET_PATH: &str = "xl/worksheets/sheet1.xml";

const COLUMNS: [&str; 5] = ["A", "B", "C", "D", "E"];

const CONTENT_TYPES_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
    r#"<Default Extension="xml" ContentType="application/xml"/>"#,
    r#"<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>"#,
    r#"<Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#,
    r#"</Types>"#
);

const ROOT_RELS_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>"#,
    r#"</Relationships>"#
);

const WORKBOOK_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" "#,
    r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
    r#"<sheets><sheet name="Sheet1" sheetId="1" r:id="rId1"/></sheets>"#,
    r#"</workbook>"#
);

const WORKBOOK_RELS_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>"#,
    r#"</Relationships>"#
);

/// Download file name for a role's workbook.
pub fn export_file_name(role: &str) -> String {
    format!("{}.xlsx", role)
}

/// Serialize a table into workbook bytes.
///
/// Fails with `Serialization` when the table has no rows or a cell holds
/// text a spreadsheet cannot store.
pub fn export_to_spreadsheet(table: &AnnotationTable) -> Result<Vec<u8>> {
    if table.is_empty() {
        return Err(AnnotateError::Serialization(
            "table has no rows to export".to_string(),
        ));
    }

    let sheet = sheet_xml(table)?;

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let parts = [
        ("[Content_Types].xml", CONTENT_TYPES_XML),
        ("_rels/.rels", ROOT_RELS_XML),
        ("xl/workbook.xml", WORKBOOK_XML),
        ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS_XML),
        (SHEET_PATH, sheet.as_str()),
    ];
    for (name, contents) in parts {
        zip.start_file(name, options)?;
        zip.write_all(contents.as_bytes())
            .map_err(|e| AnnotateError::Serialization(format!("writing {}: {}", name, e)))?;
    }

    let bytes = zip.finish()?.into_inner();
    log::debug!("Serialized {} rows into {} bytes", table.len(), bytes.len());
    Ok(bytes)
}

/// Export a table and write the workbook to `path`.
pub fn write_spreadsheet(table: &AnnotationTable, path: &Path) -> Result<()> {
    let bytes = export_to_spreadsheet(table)?;
    std::fs::write(path, bytes)?;
    log::info!("Exported {} rows to {}", table.len(), path.display());
    Ok(())
}

/// Parse a workbook written by [`export_to_spreadsheet`].
pub fn import_spreadsheet(bytes: &[u8]) -> Result<AnnotationTable> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut xml = String::new();
    archive
        .by_name(SHEET_PATH)?
        .read_to_string(&mut xml)
        .map_err(|e| AnnotateError::Serialization(format!("reading {}: {}", SHEET_PATH, e)))?;

    let mut rows = parse_rows(&xml)?.into_iter();

    match rows.next() {
        Some(header) if header == COLUMN_HEADERS => {}
        Some(header) => {
            return Err(AnnotateError::Serialization(format!(
                "unexpected header row {:?}",
                header
            )))
        }
        None => return Err(AnnotateError::Serialization("sheet has no rows".to_string())),
    }

    let raw = rows
        .enumerate()
        .map(|(i, cells)| -> Result<RawAnnotationRow> {
            let [start_label, end_label, role, label, notes]: [String; 5] =
                cells.try_into().map_err(|cells: Vec<String>| {
                    AnnotateError::Serialization(format!(
                        "data row {} has {} cells, expected 5",
                        i + 1,
                        cells.len()
                    ))
                })?;
            Ok(RawAnnotationRow {
                start_label,
                end_label,
                role,
                label,
                notes,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    AnnotationTable::try_from_raw(raw)
}

/// Read and parse a workbook file.
pub fn read_spreadsheet(path: &Path) -> Result<AnnotationTable> {
    let bytes = std::fs::read(path)?;
    let table = import_spreadsheet(&bytes)?;
    log::info!("Imported {} rows from {}", table.len(), path.display());
    Ok(table)
}

fn sheet_xml(table: &AnnotationTable) -> Result<String> {
    let mut xml = String::from(concat!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
        r#"<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
        r#"<sheetData>"#
    ));

    push_row(&mut xml, 1, COLUMN_HEADERS)?;
    for (i, row) in table.rows().iter().enumerate() {
        push_row(&mut xml, i + 2, row.cells())?;
    }

    xml.push_str("</sheetData></worksheet>");
    Ok(xml)
}

fn push_row(xml: &mut String, number: usize, cells: [&str; 5]) -> Result<()> {
    xml.push_str(&format!(r#"<row r="{}">"#, number));
    for (column, value) in COLUMNS.iter().zip(cells) {
        check_cell(value, column, number)?;
        xml.push_str(&format!(
            r#"<c r="{}{}" t="inlineStr"><is><t xml:space="preserve">{}</t></is></c>"#,
            column,
            number,
            escape_xml(value)
        ));
    }
    xml.push_str("</row>");
    Ok(())
}

fn check_cell(value: &str, column: &str, row: usize) -> Result<()> {
    if value.chars().count() > MAX_CELL_CHARS {
        return Err(AnnotateError::Serialization(format!(
            "cell {}{} exceeds {} characters",
            column, row, MAX_CELL_CHARS
        )));
    }
    if let Some(c) = value.chars().find(|&c| !is_xml_char(c)) {
        return Err(AnnotateError::Serialization(format!(
            "cell {}{} contains unsupported character U+{:04X}",
            column, row, c as u32
        )));
    }
    Ok(())
}

/// Characters allowed in XML 1.0 documents.
fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\t' | '\n' | '\r'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

fn escape_xml(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            // XML readers normalize a bare CR to LF unless it is a reference.
            '\r' => out.push_str("&#13;"),
            _ => out.push(c),
        }
    }
    out
}

fn unescape_xml(value: &str) -> Result<String> {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        let semi = tail
            .find(';')
            .ok_or_else(|| malformed("unterminated entity reference"))?;
        let entity = &tail[1..semi];
        let decoded = match entity {
            "amp" => '&',
            "lt" => '<',
            "gt" => '>',
            "quot" => '"',
            "apos" => '\'',
            _ => {
                let code = if let Some(hex) = entity.strip_prefix("#x") {
                    u32::from_str_radix(hex, 16).ok()
                } else if let Some(dec) = entity.strip_prefix('#') {
                    dec.parse::<u32>().ok()
                } else {
                    None
                };
                code.and_then(char::from_u32)
                    .ok_or_else(|| malformed(&format!("unknown entity &{};", entity)))?
            }
        };
        out.push(decoded);
        rest = &tail[semi + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

fn parse_rows(xml: &str) -> Result<Vec<Vec<String>>> {
    let start = xml
        .find("<sheetData>")
        .ok_or_else(|| malformed("missing sheetData"))?;
    let end = xml
        .find("</sheetData>")
        .ok_or_else(|| malformed("unterminated sheetData"))?;
    let mut rest = &xml[start..end];

    let mut rows = Vec::new();
    while let Some(open) = rest.find("<row") {
        let tail = &rest[open..];
        let close = tail
            .find("</row>")
            .ok_or_else(|| malformed("unterminated row"))?;
        rows.push(parse_cells(&tail[..close])?);
        rest = &tail[close + "</row>".len()..];
    }
    Ok(rows)
}

fn parse_cells(row_xml: &str) -> Result<Vec<String>> {
    let mut cells = Vec::new();
    let mut rest = row_xml;
    while let Some(open) = rest.find("<c ") {
        let tail = &rest[open..];
        let close = tail
            .find("</c>")
            .ok_or_else(|| malformed("unterminated cell"))?;
        cells.push(cell_text(&tail[..close])?);
        rest = &tail[close + "</c>".len()..];
    }
    Ok(cells)
}

fn cell_text(cell_xml: &str) -> Result<String> {
    if !cell_xml.contains(r#"t="inlineStr""#) {
        return Err(AnnotateError::Serialization(
            "only inline-string cells are supported".to_string(),
        ));
    }
    let open = cell_xml
        .find("<t")
        .ok_or_else(|| malformed("cell without text"))?;
    let tag = &cell_xml[open..];
    let tag_end = tag.find('>').ok_or_else(|| malformed("unterminated tag"))?;
    if tag[..tag_end].ends_with('/') {
        return Ok(String::new());
    }
    let body = &tag[tag_end + 1..];
    let close = body
        .find("</t>")
        .ok_or_else(|| malformed("unterminated text"))?;
    unescape_xml(&body[..close])
}

fn malformed(what: &str) -> AnnotateError {
    AnnotateError::Serialization(format!("malformed worksheet: {}", what))
}
