// Central place for UI strings and other non-localized constants.
// Keep these out of gui.rs to reduce duplication and make tweaks safer.

// Column schema. Order here is the canonical column order of the task table.
pub const COL_TITLE: &str = "Title";
pub const COL_DESCRIPTION: &str = "Description";
pub const COL_CATEGORY: &str = "Category";
pub const COL_SUBTASKS: &str = "Subtasks";
pub const COL_PRIORITY: &str = "Priority";
pub const COL_DATE_CREATED: &str = "Date Created";
pub const COL_STATUS: &str = "Status";
pub const COL_TIMELINE: &str = "Timeline";
pub const COL_NOTES: &str = "Notes";

pub const SCHEMA_COLUMNS: [&str; 9] = [
    COL_TITLE,
    COL_DESCRIPTION,
    COL_CATEGORY,
    COL_SUBTASKS,
    COL_PRIORITY,
    COL_DATE_CREATED,
    COL_STATUS,
    COL_TIMELINE,
    COL_NOTES,
];

// Columns that reject the generic cell-edit path. Category and Priority change
// through their dropdowns, Status only through the mark-completed action.
pub const PROTECTED_COLUMNS: [&str; 3] = [COL_CATEGORY, COL_PRIORITY, COL_STATUS];

// Columns whose imported values are title-cased.
pub const TITLECASE_COLUMNS: [&str; 3] = [COL_TITLE, COL_CATEGORY, COL_PRIORITY];

pub const STATUS_ACTIVE: &str = "Active";
pub const STATUS_COMPLETED_PREFIX: &str = "Completed";

// Persisted state files inside the data directory.
pub const FILE_TASK_DATA: &str = "task_data.json";
pub const FILE_TYPE_DATA: &str = "type_data.json";
pub const FILE_ACTIVE_SESSION: &str = "active_session.txt";

pub const ENV_DATA_DIR: &str = "TASK_TRACKER_DATA";
pub const DEFAULT_DATA_DIR: &str = "data";

// Export naming: task_tracker_on_<MMDDYYYY_HHMMSS>.xlsx
pub const EXPORT_PREFIX: &str = "task_tracker_on_";
pub const EXPORT_TIME_FMT: &str = "%m%d%Y_%H%M%S";
pub const EXPORT_EXT: &str = ".xlsx";
pub const EN_FILTER_EXCEL: &str = "Excel";
pub const EXCEL_EXTENSIONS: [&str; 1] = ["xlsx"];

// Typed confirmation for the destructive clear-all action.
pub const CLEAR_ALL_PASSWORD: &str = "CLEAR ALL DATA";

// English UI strings (EN_ prefix to make future localization easier)
pub const EN_APP_TITLE: &str = "Task Tracker";

pub const EN_MODE_VIEW: &str = "View Mode";
pub const EN_MODE_EDIT: &str = "Edit Mode";

pub const EN_BTN_SAVE: &str = "Save Changes";
pub const EN_BTN_NEW: &str = "New";
pub const EN_BTN_EXPORT: &str = "Export Data";
pub const EN_BTN_IMPORT: &str = "Import Data";
pub const EN_BTN_CLEAR_DATA: &str = "Clear Data";
pub const EN_BTN_EDIT_VALUES: &str = "Edit Column Values";
pub const EN_BTN_HIDE_COLUMNS: &str = "Hide Columns";
pub const EN_BTN_ABOUT: &str = "About";
pub const EN_BTN_TOGGLE_THEME: &str = "Theme";
pub const EN_CHECKBOX_HIDE_COMPLETED: &str = "Hide Completed";

pub const EN_LABEL_SEARCH: &str = "Search:";
pub const EN_HINT_SEARCH: &str = "any column";

pub const EN_BTN_OK: &str = "OK";
pub const EN_BTN_CANCEL: &str = "Cancel";
pub const EN_BTN_CLEAR: &str = "Clear";

// Small glyphs used in table headers.
pub const EN_GLYPH_SORT_ASC: &str = "^";
pub const EN_GLYPH_SORT_DESC: &str = "v";

pub const EN_WINDOW_ABOUT: &str = "About";
pub const EN_ABOUT_HEADING: &str = "Task Tracker";
pub const EN_ABOUT_VERSION: &str = "Version:";
pub const EN_ABOUT_NOTE_VIEW_ONLY: &str =
    "Another session held the edit lock at startup, so this window is view-only.";
pub const EN_ABOUT_NOTE_DATA_DIR: &str = "Data directory:";

pub const EN_WINDOW_NEW_TASK: &str = "Add New Task";
pub const EN_LABEL_TITLE: &str = "Title:";
pub const EN_LABEL_DESCRIPTION: &str = "Description:";
pub const EN_LABEL_CATEGORY: &str = "Category:";
pub const EN_LABEL_SUBTASKS: &str = "Subtasks:";
pub const EN_LABEL_PRIORITY: &str = "Priority:";
pub const EN_LABEL_TIMELINE: &str = "Timeline:";
pub const EN_LABEL_NOTES: &str = "Notes:";

pub const EN_WINDOW_IMPORT_PREVIEW: &str = "New Data Preview";
pub const EN_IMPORT_PREVIEW_HINT: &str =
    "Existing rows followed by the rows staged for import. Nothing is written until you save.";
pub const EN_IMPORT_CONFIRM_TITLE: &str = "Confirm Submit New Data";
pub const EN_IMPORT_CONFIRM_BODY: &str =
    "Are you sure you want to append the uploaded data to the database?";
pub const EN_IMPORT_DECLINED: &str = "You did not upload the data.";

pub const EN_WINDOW_CLEAR_DATA: &str = "Confirm Clear All Data";
pub const EN_CLEAR_DATA_PROMPT: &str = "Enter password:";
pub const EN_CLEAR_CONFIRM_TITLE: &str = "Confirm Clear";
pub const EN_CLEAR_CONFIRM_BODY: &str =
    "Are you sure you want to clear all data? This action is irreversible.";
pub const EN_CLEAR_WRONG_PASSWORD: &str = "The password inputted was incorrect, try again.";
pub const EN_CLEAR_DONE: &str = "The database is empty.";

pub const EN_WINDOW_EDIT_VALUES_PREFIX: &str = "Edit";
pub const EN_WINDOW_EDIT_VALUES_SUFFIX: &str = "Values";
pub const EN_EDIT_VALUES_INSTRUCTIONS: &str =
    "Values should be formatted as a comma separated list.";

pub const EN_WINDOW_UNSAVED: &str = "Unsaved Changes";
pub const EN_UNSAVED_PROMPT: &str = "Would you like to save your changes before exiting?";
pub const EN_BTN_SAVE_AND_EXIT: &str = "Save and Exit";
pub const EN_BTN_DISCARD: &str = "Discard";
pub const EN_DISCARD_CONFIRM_TITLE: &str = "Discard Changes";
pub const EN_DISCARD_CONFIRM_BODY: &str = "Are you sure you want to delete all changes and exit?";

pub const EN_MENU_MARK_COMPLETED: &str = "Mark Completed";
pub const EN_MENU_CLONE: &str = "Clone";
pub const EN_COMPLETE_CONFIRM_TITLE: &str = "Confirm Mark Complete";
pub const EN_COMPLETE_CONFIRM_SUFFIX: &str = "This cannot be undone.";
pub const EN_CLONE_CONFIRM_TITLE: &str = "Confirm Clone";

pub const EN_EXPORT_CONFIRM_TITLE: &str = "Export Database";
pub const EN_EXPORT_CONFIRM_PREFIX: &str = "Exporting to:";

pub const EN_STATUS_SAVED: &str = "Your changes have been successfully saved.";
pub const EN_STATUS_IMPORTED: &str = "The data has been added to the database.";

pub const EN_SESSION_ACTIVE_TITLE: &str = "Edit Session Active";
pub const EN_SESSION_ACTIVE_BODY: &str =
    "is running an active editing session, so the application will open in view-only mode.\n\n\
     Yes: open in view-only mode\n\
     No: clear the session data and open in editing mode (could cause data conflicts)\n\
     Cancel: quit";
pub const EN_SESSION_RESET_TITLE: &str = "Clear Session Data";
pub const EN_SESSION_RESET_BODY: &str =
    "Are you sure you want to clear session data? This could cause data conflicts if another \
     user is actively editing.";

pub const EN_EMPTY: &str = "";
