use crate::{TaskTable, statics};

/// Two composable predicates over the task table: an exact match on the
/// Status column and a case-insensitive substring search across all columns.
/// Reads only; never mutates the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    status: String,
    text: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty means "show all statuses"; anything else must match the Status
    /// cell exactly.
    pub fn set_status_filter(&mut self, exact: impl Into<String>) {
        self.status = exact.into();
    }

    pub fn status_filter(&self) -> &str {
        &self.status
    }

    /// A row is visible if any column contains the substring, ignoring case.
    /// Empty matches every row.
    pub fn set_text_filter(&mut self, substring: impl Into<String>) {
        self.text = substring.into();
    }

    pub fn text_filter(&self) -> &str {
        &self.text
    }

    /// Indices of the visible rows, in underlying row order: the status
    /// filter is applied first, the text filter over its result.
    pub fn visible_rows(&self, table: &TaskTable) -> Vec<usize> {
        let status_col = table.column_index(statics::COL_STATUS);
        let needle = self.text.to_lowercase();

        table
            .rows()
            .enumerate()
            .filter(|(_, row)| self.status_pass(row, status_col))
            .filter(|(_, row)| text_pass(row, &needle))
            .map(|(index, _)| index)
            .collect()
    }

    fn status_pass(&self, row: &[String], status_col: Option<usize>) -> bool {
        if self.status.is_empty() {
            return true;
        }
        status_col.is_some_and(|col| row[col] == self.status)
    }
}

fn text_pass(row: &[String], needle: &str) -> bool {
    needle.is_empty() || row.iter().any(|cell| cell.to_lowercase().contains(needle))
}
