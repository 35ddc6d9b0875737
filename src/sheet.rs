//! Spreadsheet adapter: reads the first sheet of an `.xlsx` workbook into
//! header-keyed string rows for import, and writes the table back out as a
//! one-sheet workbook for export.

use crate::import::RawRow;
use crate::statics;
use anyhow::Context;
use calamine::{Data, Reader, open_workbook_auto};
use chrono::{DateTime, Local};
use indexmap::IndexMap;
use rust_xlsxwriter::Workbook;
use std::path::Path;

/// Read the first sheet. The first row is the header; every later row maps
/// header name -> stringified cell. Headerless trailing cells are ignored,
/// and any workbook error aborts the whole import.
pub fn read_rows(path: &Path) -> anyhow::Result<Vec<RawRow>> {
    let mut workbook = open_workbook_auto(path).with_context(|| format!("opening {path:?}"))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| anyhow::anyhow!("workbook {path:?} has no sheets"))?
        .with_context(|| format!("reading first sheet of {path:?}"))?;

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Ok(Vec::new());
    };
    let columns: Vec<String> = header.iter().map(cell_text).collect();

    let mut out = Vec::new();
    for row in rows {
        let mut mapped = IndexMap::new();
        for (i, name) in columns.iter().enumerate() {
            if name.is_empty() {
                continue;
            }
            let value = row.get(i).map(cell_text).unwrap_or_default();
            mapped.insert(name.clone(), value);
        }
        out.push(mapped);
    }
    Ok(out)
}

/// Write a single sheet: header row, then one row per record, all as text.
pub fn write_rows<'a, I>(path: &Path, columns: &[String], rows: I) -> anyhow::Result<()>
where
    I: IntoIterator<Item = &'a [String]>,
{
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (c, name) in columns.iter().enumerate() {
        sheet
            .write_string(0, c as u16, name)
            .context("writing header row")?;
    }
    for (r, row) in rows.into_iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            sheet
                .write_string((r + 1) as u32, c as u16, value)
                .context("writing data row")?;
        }
    }

    workbook
        .save(path)
        .with_context(|| format!("writing {path:?}"))?;
    Ok(())
}

pub fn export_filename(now: DateTime<Local>) -> String {
    format!(
        "{}{}{}",
        statics::EXPORT_PREFIX,
        now.format(statics::EXPORT_TIME_FMT),
        statics::EXPORT_EXT
    )
}

/// Stringify a cell the way the table stores values: text as-is, integral
/// floats without the fraction, everything else via its display form.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => e.to_string(),
    }
}
