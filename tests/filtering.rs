use pretty_assertions::assert_eq;
use tasktracker::{FilterState, TaskTable, statics};

fn schema() -> Vec<String> {
    statics::SCHEMA_COLUMNS.iter().map(|c| c.to_string()).collect()
}

fn record(title: &str, notes: &str, status: &str) -> Vec<String> {
    schema()
        .iter()
        .map(|col| match col.as_str() {
            statics::COL_TITLE => title.to_string(),
            statics::COL_NOTES => notes.to_string(),
            statics::COL_STATUS => status.to_string(),
            _ => String::new(),
        })
        .collect()
}

fn sample_table() -> TaskTable {
    let mut table = TaskTable::new(schema());
    table
        .append_rows(vec![
            record("foo groceries", "", "Active"),
            record("laundry", "", "Active"),
            record("foo taxes", "", "Completed 2024-01-01"),
            record("calls", "ask about FOO", "Active"),
            record("foo backlog", "", "Completed 2024-01-01"),
        ])
        .unwrap();
    table
}

#[test]
fn composition_is_the_intersection_of_both_predicates() {
    let table = sample_table();
    let mut filters = FilterState::new();
    filters.set_status_filter("Active");
    filters.set_text_filter("foo");

    // Rows must be Active AND contain "foo" in some column; never one
    // without the other.
    assert_eq!(filters.visible_rows(&table), vec![0, 3]);
}

#[test]
fn status_filter_alone_matches_exactly() {
    let table = sample_table();
    let mut filters = FilterState::new();
    filters.set_status_filter("Completed 2024-01-01");
    assert_eq!(filters.visible_rows(&table), vec![2, 4]);

    filters.set_status_filter("Completed");
    assert_eq!(filters.visible_rows(&table), Vec::<usize>::new());
}

#[test]
fn empty_filters_match_all_rows_in_order() {
    let table = sample_table();
    let filters = FilterState::new();
    assert_eq!(filters.visible_rows(&table), vec![0, 1, 2, 3, 4]);
}

#[test]
fn text_filter_is_case_insensitive_across_columns() {
    let table = sample_table();
    let mut filters = FilterState::new();
    filters.set_text_filter("FOO");
    assert_eq!(filters.visible_rows(&table), vec![0, 2, 3, 4]);
}

#[test]
fn filters_track_table_mutations() {
    let mut table = sample_table();
    let mut filters = FilterState::new();
    filters.set_status_filter("Active");
    assert_eq!(filters.visible_rows(&table), vec![0, 1, 3]);

    let status_col = table.column_index(statics::COL_STATUS).unwrap();
    table
        .overwrite_cell(1, status_col, "Completed 2024-06-01".to_string())
        .unwrap();

    // Recomputing after the mutation reflects the new status.
    assert_eq!(filters.visible_rows(&table), vec![0, 3]);
}
