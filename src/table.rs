use crate::statics;
use anyhow::Context;
use indexmap::IndexMap;
use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Validation errors raised by the table's mutation and accessor contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("cell ({row}, {col}) is out of range for a {rows}x{cols} table")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("column {0:?} can only be changed through its dedicated action")]
    ProtectedColumn(String),
    #[error("row has {got} values but the schema has {expected} columns")]
    ShapeMismatch { expected: usize, got: usize },
}

/// Granularity of a mutation, for observers that track affected ranges.
/// Delivery is a drained queue; see [`TaskTable::take_changes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableChange {
    Cell { row: usize, col: usize },
    RowsInserted { first: usize, last: usize },
    Reset,
}

/// The in-memory task table: ordered rows of string cells under a fixed,
/// named column schema, with a dirty flag that only a successful save clears.
#[derive(Debug, Clone)]
pub struct TaskTable {
    source_path: Option<PathBuf>,
    schema: Vec<String>,
    rows: Vec<Vec<String>>,
    dirty: bool,
    revision: u64,
    pending: Vec<TableChange>,
}

/// On-disk shape: a column-oriented JSON object, one map of row-key -> cell
/// per column. Row keys are rewritten contiguously ("0".."n-1") on save.
type RawDocument = IndexMap<String, IndexMap<String, serde_json::Value>>;

impl TaskTable {
    pub fn new(schema: Vec<String>) -> Self {
        Self {
            source_path: None,
            schema,
            rows: Vec::new(),
            dirty: false,
            revision: 0,
            pending: Vec::new(),
        }
    }

    pub fn load_path(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path).with_context(|| format!("reading {path:?}"))?;
        let doc: RawDocument =
            serde_json::from_str(&text).with_context(|| format!("parsing {path:?}"))?;
        anyhow::ensure!(!doc.is_empty(), "task data file {path:?} defines no columns");

        let schema: Vec<String> = doc.keys().cloned().collect();
        let keys = row_keys_in_order(&doc);

        let rows = keys
            .iter()
            .map(|key| {
                schema
                    .iter()
                    .map(|col| {
                        doc.get(col)
                            .and_then(|cells| cells.get(key))
                            .map(canonical_string)
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect();

        Ok(Self {
            source_path: Some(path.to_path_buf()),
            schema,
            rows,
            dirty: false,
            revision: 0,
            pending: Vec::new(),
        })
    }

    /// Rewrite the whole document, then clear the dirty flag. There are no
    /// incremental writes; the dataset is small.
    pub fn save_to_path(&mut self, path: &Path) -> anyhow::Result<()> {
        let text = serde_json::to_string(&self.to_document()).context("serializing task data")?;
        fs::write(path, text).with_context(|| format!("writing {path:?}"))?;
        self.source_path = Some(path.to_path_buf());
        self.mark_clean();
        Ok(())
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_names(&self) -> &[String] {
        &self.schema
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.schema.iter().position(|c| c == name)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn get_cell(&self, row: usize, col: usize) -> Result<&str, TableError> {
        self.check_bounds(row, col)?;
        Ok(&self.rows[row][col])
    }

    pub fn get_row(&self, row: usize) -> Result<&[String], TableError> {
        if row >= self.rows.len() {
            return Err(self.out_of_bounds(row, 0));
        }
        Ok(&self.rows[row])
    }

    /// The generic cell-edit path. Protected columns (Category, Priority,
    /// Status) are rejected here; their dedicated actions go through
    /// [`TaskTable::overwrite_cell`].
    pub fn set_cell(&mut self, row: usize, col: usize, value: String) -> Result<(), TableError> {
        self.check_bounds(row, col)?;
        let name = &self.schema[col];
        if statics::PROTECTED_COLUMNS.contains(&name.as_str()) {
            return Err(TableError::ProtectedColumn(name.clone()));
        }
        self.write_cell(row, col, value);
        Ok(())
    }

    /// Bounds-checked setter that skips the protected-column rule. Only the
    /// dropdown-edit and mark-completed actions call this.
    pub fn overwrite_cell(
        &mut self,
        row: usize,
        col: usize,
        value: String,
    ) -> Result<(), TableError> {
        self.check_bounds(row, col)?;
        self.write_cell(row, col, value);
        Ok(())
    }

    /// Append rows at the end. Every row is validated against the schema
    /// before anything mutates; a single mismatch leaves the table untouched.
    /// An empty set is accepted and does nothing, so committing an empty
    /// import preview is a no-op.
    pub fn append_rows(&mut self, rows: Vec<Vec<String>>) -> Result<(), TableError> {
        for row in &rows {
            if row.len() != self.schema.len() {
                return Err(TableError::ShapeMismatch {
                    expected: self.schema.len(),
                    got: row.len(),
                });
            }
        }
        if rows.is_empty() {
            return Ok(());
        }

        let first = self.rows.len();
        let last = first + rows.len() - 1;
        self.rows.extend(rows);
        self.touch(TableChange::RowsInserted { first, last });
        Ok(())
    }

    /// Drop every row, keep the schema.
    pub fn clear_all(&mut self) {
        self.rows.clear();
        self.touch(TableChange::Reset);
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag. Called only after a successful persist
    /// ([`TaskTable::save_to_path`] does this itself).
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Monotonic counter bumped by every mutation. Readers that cache derived
    /// views (the filter pipeline) recompute when this moves.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Drain the mutation notifications accumulated since the last call.
    pub fn take_changes(&mut self) -> Vec<TableChange> {
        std::mem::take(&mut self.pending)
    }

    fn to_document(&self) -> IndexMap<String, IndexMap<String, String>> {
        let mut doc = IndexMap::new();
        for (c, name) in self.schema.iter().enumerate() {
            let mut cells = IndexMap::new();
            for (r, row) in self.rows.iter().enumerate() {
                cells.insert(r.to_string(), row[c].clone());
            }
            doc.insert(name.clone(), cells);
        }
        doc
    }

    fn write_cell(&mut self, row: usize, col: usize, value: String) {
        self.rows[row][col] = value;
        self.touch(TableChange::Cell { row, col });
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), TableError> {
        if row >= self.rows.len() || col >= self.schema.len() {
            return Err(self.out_of_bounds(row, col));
        }
        Ok(())
    }

    fn out_of_bounds(&self, row: usize, col: usize) -> TableError {
        TableError::OutOfBounds {
            row,
            col,
            rows: self.rows.len(),
            cols: self.schema.len(),
        }
    }

    fn touch(&mut self, change: TableChange) {
        self.dirty = true;
        self.revision += 1;
        self.pending.push(change);
    }
}

/// Row keys across all columns, de-duplicated, ordered numerically where they
/// parse as integers (the writer emits "0".."n-1") and lexicographically
/// otherwise.
fn row_keys_in_order(doc: &RawDocument) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    let mut seen = HashSet::new();
    for cells in doc.values() {
        for key in cells.keys() {
            if seen.insert(key.clone()) {
                keys.push(key.clone());
            }
        }
    }
    keys.sort_by(|a, b| match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => std::cmp::Ordering::Less,
        (Err(_), Ok(_)) => std::cmp::Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    });
    keys
}

/// Canonical string form of a loaded cell. The table stores strings only;
/// scalars that older writers stored natively are converted on the way in.
fn canonical_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}
