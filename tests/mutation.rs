use pretty_assertions::assert_eq;
use tasktracker::{TableChange, TableError, TaskTable, statics};

fn schema() -> Vec<String> {
    statics::SCHEMA_COLUMNS.iter().map(|c| c.to_string()).collect()
}

fn record(title: &str) -> Vec<String> {
    schema()
        .iter()
        .map(|col| match col.as_str() {
            statics::COL_TITLE => title.to_string(),
            statics::COL_STATUS => statics::STATUS_ACTIVE.to_string(),
            _ => String::new(),
        })
        .collect()
}

#[test]
fn append_grows_row_count_and_dirties() {
    let mut table = TaskTable::new(schema());
    assert!(!table.is_dirty());

    table.append_rows(vec![record("a"), record("b")]).unwrap();
    assert_eq!(table.row_count(), 2);
    assert!(table.is_dirty());
    assert_eq!(
        table.take_changes(),
        vec![TableChange::RowsInserted { first: 0, last: 1 }]
    );

    // A second append reports exactly the appended span.
    table.append_rows(vec![record("c")]).unwrap();
    assert_eq!(
        table.take_changes(),
        vec![TableChange::RowsInserted { first: 2, last: 2 }]
    );
}

#[test]
fn shape_mismatch_mutates_nothing() {
    let mut table = TaskTable::new(schema());
    table.append_rows(vec![record("a")]).unwrap();
    table.take_changes();
    let revision = table.revision();

    let err = table
        .append_rows(vec![record("b"), vec!["too".to_string(), "short".to_string()]])
        .unwrap_err();
    assert_eq!(
        err,
        TableError::ShapeMismatch {
            expected: statics::SCHEMA_COLUMNS.len(),
            got: 2
        }
    );
    assert_eq!(table.row_count(), 1);
    assert_eq!(table.revision(), revision);
    assert!(table.take_changes().is_empty());
}

#[test]
fn clear_all_keeps_schema() {
    let mut table = TaskTable::new(schema());
    table.append_rows(vec![record("a"), record("b")]).unwrap();
    table.take_changes();

    table.clear_all();
    assert_eq!(table.row_count(), 0);
    assert_eq!(table.column_names().len(), statics::SCHEMA_COLUMNS.len());
    assert!(table.is_dirty());
    assert_eq!(table.take_changes(), vec![TableChange::Reset]);
}

#[test]
fn generic_edit_rejects_protected_columns() {
    let mut table = TaskTable::new(schema());
    table.append_rows(vec![record("a")]).unwrap();
    let status_col = table.column_index(statics::COL_STATUS).unwrap();
    let title_col = table.column_index(statics::COL_TITLE).unwrap();
    table.take_changes();

    let err = table
        .set_cell(0, status_col, "Completed 2024-03-01".to_string())
        .unwrap_err();
    assert_eq!(err, TableError::ProtectedColumn(statics::COL_STATUS.to_string()));
    assert_eq!(table.get_cell(0, status_col).unwrap(), statics::STATUS_ACTIVE);

    // Unprotected columns edit normally and report the single cell.
    table.set_cell(0, title_col, "renamed".to_string()).unwrap();
    assert_eq!(table.get_cell(0, title_col).unwrap(), "renamed");
    assert_eq!(
        table.take_changes(),
        vec![TableChange::Cell {
            row: 0,
            col: title_col
        }]
    );
}

#[test]
fn privileged_path_updates_status() {
    let mut table = TaskTable::new(schema());
    table.append_rows(vec![record("a")]).unwrap();
    let status_col = table.column_index(statics::COL_STATUS).unwrap();

    table
        .overwrite_cell(0, status_col, "Completed 2024-03-01".to_string())
        .unwrap();
    assert_eq!(table.get_cell(0, status_col).unwrap(), "Completed 2024-03-01");
}

#[test]
fn out_of_range_access_fails() {
    let mut table = TaskTable::new(schema());
    table.append_rows(vec![record("a")]).unwrap();

    assert!(matches!(
        table.get_cell(1, 0),
        Err(TableError::OutOfBounds { .. })
    ));
    assert!(matches!(
        table.get_cell(0, statics::SCHEMA_COLUMNS.len()),
        Err(TableError::OutOfBounds { .. })
    ));
    assert!(matches!(table.get_row(5), Err(TableError::OutOfBounds { .. })));
    assert!(matches!(
        table.set_cell(9, 0, String::new()),
        Err(TableError::OutOfBounds { .. })
    ));
}

#[test]
fn dirty_clears_only_on_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("task_data.json");

    let mut table = TaskTable::new(schema());
    table.append_rows(vec![record("a")]).unwrap();
    assert!(table.is_dirty());

    table.save_to_path(&path).unwrap();
    assert!(!table.is_dirty());

    let title_col = table.column_index(statics::COL_TITLE).unwrap();
    table.set_cell(0, title_col, "again".to_string()).unwrap();
    assert!(table.is_dirty());
}
