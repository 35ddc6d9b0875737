use pretty_assertions::assert_eq;
use tasktracker::{TaskTable, statics};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn schema() -> Vec<String> {
    statics::SCHEMA_COLUMNS.iter().map(|c| c.to_string()).collect()
}

fn record(title: &str, status: &str) -> Vec<String> {
    schema()
        .iter()
        .map(|col| match col.as_str() {
            statics::COL_TITLE => title.to_string(),
            statics::COL_STATUS => status.to_string(),
            statics::COL_DATE_CREATED => "2024-01-01".to_string(),
            _ => String::new(),
        })
        .collect()
}

#[test]
fn save_then_load_reproduces_records_and_resets_dirty() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("task_data.json");

    let mut table = TaskTable::new(schema());
    table.append_rows(vec![
        record("Buy Milk", "Active"),
        record("File Taxes", "Completed 2024-02-01"),
        record("Walk Dog", "Active"),
    ])?;
    assert!(table.is_dirty());

    table.save_to_path(&path)?;
    assert!(!table.is_dirty());

    let reloaded = TaskTable::load_path(&path)?;
    assert!(!reloaded.is_dirty());
    assert_eq!(reloaded.column_names(), table.column_names());
    assert_eq!(reloaded.row_count(), 3);
    for row in 0..3 {
        assert_eq!(reloaded.get_row(row)?, table.get_row(row)?);
    }
    Ok(())
}

#[test]
fn load_orders_rows_numerically_and_canonicalizes_scalars() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("task_data.json");

    // Row keys out of order, and cells stored as non-string scalars by an
    // older writer: both get normalized on load.
    let input = r#"{
        "Title": {"10": "ten", "2": "two", "0": "zero"},
        "Status": {"10": "Active", "2": "Active", "0": "Active"},
        "Notes": {"10": 7, "2": true, "0": null}
    }"#;
    std::fs::write(&path, input)?;

    let table = TaskTable::load_path(&path)?;
    assert_eq!(
        table.column_names(),
        ["Title".to_string(), "Status".to_string(), "Notes".to_string()]
    );
    assert_eq!(table.row_count(), 3);
    assert_eq!(table.get_cell(0, 0)?, "zero");
    assert_eq!(table.get_cell(1, 0)?, "two");
    assert_eq!(table.get_cell(2, 0)?, "ten");
    assert_eq!(table.get_cell(0, 2)?, "");
    assert_eq!(table.get_cell(1, 2)?, "true");
    assert_eq!(table.get_cell(2, 2)?, "7");
    Ok(())
}

#[test]
fn saved_document_rekeys_rows_contiguously() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let in_path = dir.path().join("in.json");
    let out_path = dir.path().join("out.json");

    std::fs::write(
        &in_path,
        r#"{"Title": {"3": "a", "7": "b"}, "Status": {"3": "Active", "7": "Active"}}"#,
    )?;
    let mut table = TaskTable::load_path(&in_path)?;
    table.save_to_path(&out_path)?;

    let doc: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&out_path)?)?;
    let title_keys: Vec<&String> = doc["Title"].as_object().unwrap().keys().collect();
    assert_eq!(title_keys, vec!["0", "1"]);
    assert_eq!(doc["Title"]["0"], "a");
    assert_eq!(doc["Title"]["1"], "b");
    Ok(())
}

#[test]
fn empty_table_round_trips_with_schema_intact() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("task_data.json");

    let mut table = TaskTable::new(schema());
    table.save_to_path(&path)?;

    let reloaded = TaskTable::load_path(&path)?;
    assert_eq!(reloaded.row_count(), 0);
    assert_eq!(reloaded.column_names(), table.column_names());
    Ok(())
}

#[test]
fn missing_file_fails_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");
    assert!(TaskTable::load_path(&path).is_err());
}
