//! Bulk-import pipeline: normalize externally parsed rows against the table
//! schema, merge new option values, and stage everything behind a preview so
//! nothing is committed until the user confirms.

use crate::{OptionRegistry, TaskTable, statics};
use indexmap::IndexMap;

/// One externally parsed row: column name -> raw cell text, as read from the
/// spreadsheet. Columns the schema does not know are dropped during
/// normalization; schema columns missing here are synthesized empty.
pub type RawRow = IndexMap<String, String>;

/// The staged result of an import: rows ready to append plus the would-be
/// updated option registry. Nothing is persisted until the preview commits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportPreview {
    pub new_rows: Vec<Vec<String>>,
    pub staged_options: OptionRegistry,
}

impl ImportPreview {
    pub fn is_empty(&self) -> bool {
        self.new_rows.is_empty()
    }

    /// Length of the read-only joined view: existing rows then staged rows.
    pub fn joined_len(&self, table: &TaskTable) -> usize {
        table.row_count() + self.new_rows.len()
    }

    pub fn joined_row<'a>(&'a self, table: &'a TaskTable, index: usize) -> Option<&'a [String]> {
        if index < table.row_count() {
            return table.get_row(index).ok();
        }
        self.new_rows
            .get(index - table.row_count())
            .map(Vec::as_slice)
    }
}

pub fn stage_import(
    table: &TaskTable,
    registry: &OptionRegistry,
    raw_rows: &[RawRow],
) -> ImportPreview {
    let new_rows = normalize_rows(table.column_names(), raw_rows);
    let staged_options = merge_option_values(registry, table.column_names(), &new_rows);
    ImportPreview {
        new_rows,
        staged_options,
    }
}

/// Shape imported rows to the schema: drop rows that are empty across every
/// recognized column, fill missing cells with "", order columns like the
/// schema, backfill empty Status as Active, and title-case the columns that
/// carry display names.
pub fn normalize_rows(schema: &[String], raw_rows: &[RawRow]) -> Vec<Vec<String>> {
    let mut out = Vec::with_capacity(raw_rows.len());
    for raw in raw_rows {
        let mut row: Vec<String> = schema
            .iter()
            .map(|col| raw.get(col).cloned().unwrap_or_default())
            .collect();
        if row.iter().all(String::is_empty) {
            continue;
        }
        for (i, col) in schema.iter().enumerate() {
            if col == statics::COL_STATUS && row[i].is_empty() {
                row[i] = statics::STATUS_ACTIVE.to_string();
            } else if statics::TITLECASE_COLUMNS.contains(&col.as_str()) {
                row[i] = title_case(&row[i]);
            }
        }
        out.push(row);
    }
    out
}

/// Union each constrained column's existing values with the distinct
/// non-empty values arriving in the new rows. Existing values keep their
/// positions; unseen imports follow in first-seen order.
pub fn merge_option_values(
    registry: &OptionRegistry,
    schema: &[String],
    new_rows: &[Vec<String>],
) -> OptionRegistry {
    let mut staged = registry.clone();
    for (i, col) in schema.iter().enumerate() {
        if !registry.contains(col) {
            continue;
        }
        let mut merged: Vec<String> = registry.values(col).to_vec();
        for row in new_rows {
            let value = &row[i];
            if !value.is_empty() && !merged.contains(value) {
                merged.push(value.clone());
            }
        }
        staged.set_values(col.clone(), merged);
    }
    staged
}

/// Capitalize the first letter of every word and lowercase the rest, with
/// any non-alphabetic character acting as a word boundary.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut inside_word = false;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            if inside_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            inside_word = true;
        } else {
            out.push(ch);
            inside_word = false;
        }
    }
    out
}
