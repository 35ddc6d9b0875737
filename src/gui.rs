use crate::import::{self, ImportPreview};
use crate::options::parse_value_list;
use crate::{DataPaths, FilterState, OptionRegistry, TaskTable, sheet, statics};
use chrono::Local;
use eframe::egui;
use egui_extras::{Column, TableBuilder};

pub fn run_gui(
    paths: DataPaths,
    table: TaskTable,
    registry: OptionRegistry,
    edit_allowed: bool,
) -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };
    let title = format!("{} {}", statics::EN_APP_TITLE, env!("CARGO_PKG_VERSION"));
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| {
            Ok(Box::new(TrackerApp::new(
                paths,
                table,
                registry,
                edit_allowed,
            )))
        }),
    )
}

/// The main application state and GUI logic. Owns the task table and option
/// registry; everything else is UI state (filters, sort, open windows).
struct TrackerApp {
    paths: DataPaths,
    table: TaskTable,
    registry: OptionRegistry,

    // View-only launches never offer the edit actions; `edit_mode` is the
    // in-session View/Edit toggle on top of that.
    edit_allowed: bool,
    edit_mode: bool,

    filters: FilterState,
    hide_completed: bool,
    search_text: String,
    hidden_columns: Vec<bool>,
    sort_column: Option<usize>,
    sort_ascending: bool,

    // Visible-row cache, recomputed when the table revision or either filter
    // moves.
    visible_cache: Option<Vec<usize>>,
    visible_cache_revision: u64,
    visible_cache_status: String,
    visible_cache_text: String,

    status: String,
    last_error: Option<String>,

    about_open: bool,
    new_task_open: bool,
    new_task: NewTaskForm,
    new_task_request_focus: bool,
    options_editor: Option<OptionsEditor>,
    clear_data_open: bool,
    clear_password: String,
    clear_request_focus: bool,
    import_preview: Option<ImportPreview>,
    close_confirm_open: bool,
    allow_close: bool,

    theme_dark: bool,
}

#[derive(Clone, Debug, Default)]
struct NewTaskForm {
    title: String,
    description: String,
    category: String,
    subtasks: String,
    priority: String,
    timeline: String,
    notes: String,
}

#[derive(Clone, Debug)]
struct OptionsEditor {
    column: String,
    text: String,
    old_values: Vec<String>,
}

impl OptionsEditor {
    fn open(column: String, registry: &OptionRegistry) -> Self {
        let old_values = registry.values(&column).to_vec();
        let text = old_values.join(", ");
        Self {
            column,
            text,
            old_values,
        }
    }
}

/// Row-level actions collected from the context menu during table layout and
/// applied after it, once the table borrow ends.
#[derive(Clone, Debug)]
enum RowAction {
    MarkCompleted(usize),
    CloneRow(usize),
    ChooseValue(usize, usize, String),
    EditCell(usize, usize, String),
}

fn confirm(title: &str, description: &str) -> bool {
    matches!(
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Warning)
            .set_title(title)
            .set_description(description)
            .set_buttons(rfd::MessageButtons::YesNo)
            .show(),
        rfd::MessageDialogResult::Yes
    )
}

impl TrackerApp {
    fn new(
        paths: DataPaths,
        table: TaskTable,
        registry: OptionRegistry,
        edit_allowed: bool,
    ) -> Self {
        let column_count = table.column_names().len();
        let mut filters = FilterState::new();
        // Completed tasks start hidden, matching the checkbox default.
        filters.set_status_filter(statics::STATUS_ACTIVE);

        Self {
            paths,
            table,
            registry,
            edit_allowed,
            edit_mode: false,
            filters,
            hide_completed: true,
            search_text: String::new(),
            hidden_columns: vec![false; column_count],
            sort_column: None,
            sort_ascending: true,
            visible_cache: None,
            visible_cache_revision: 0,
            visible_cache_status: String::new(),
            visible_cache_text: String::new(),
            status: String::new(),
            last_error: None,
            about_open: false,
            new_task_open: false,
            new_task: NewTaskForm::default(),
            new_task_request_focus: false,
            options_editor: None,
            clear_data_open: false,
            clear_password: String::new(),
            clear_request_focus: false,
            import_preview: None,
            close_confirm_open: false,
            allow_close: false,
            theme_dark: true,
        }
    }

    /// Visible row indices in display order: filtered (cached per table
    /// revision + filter strings), then display-sorted. The underlying row
    /// order is never touched.
    fn display_order(&mut self) -> Vec<usize> {
        let revision = self.table.revision();
        let stale = self.visible_cache.is_none()
            || self.visible_cache_revision != revision
            || self.visible_cache_status != self.filters.status_filter()
            || self.visible_cache_text != self.filters.text_filter();
        if stale {
            self.visible_cache = Some(self.filters.visible_rows(&self.table));
            self.visible_cache_revision = revision;
            self.visible_cache_status = self.filters.status_filter().to_string();
            self.visible_cache_text = self.filters.text_filter().to_string();
        }

        let mut order = self.visible_cache.clone().unwrap_or_default();
        if let Some(col) = self.sort_column {
            order.sort_by(|&a, &b| {
                let left = self.table.get_cell(a, col).unwrap_or_default().to_lowercase();
                let right = self.table.get_cell(b, col).unwrap_or_default().to_lowercase();
                left.cmp(&right)
            });
            if !self.sort_ascending {
                order.reverse();
            }
        }
        order
    }

    fn save_table(&mut self) {
        match self.table.save_to_path(&self.paths.task_data()) {
            Ok(()) => {
                self.status = statics::EN_STATUS_SAVED.to_string();
                self.last_error = None;
            }
            Err(e) => self.last_error = Some(format!("Failed to save: {e:#}")),
        }
    }

    /// Export the whole table to a timestamped workbook in the download
    /// folder. Returns whether a file was written.
    fn export_table(&mut self) -> bool {
        let filename = sheet::export_filename(Local::now());
        let path = DataPaths::export_dir().join(&filename);
        if !confirm(
            statics::EN_EXPORT_CONFIRM_TITLE,
            &format!("{} {}", statics::EN_EXPORT_CONFIRM_PREFIX, path.display()),
        ) {
            return false;
        }
        match sheet::write_rows(&path, self.table.column_names(), self.table.rows()) {
            Ok(()) => {
                self.status = format!("Exported {}", path.display());
                self.last_error = None;
                true
            }
            Err(e) => {
                self.last_error = Some(format!("Failed to export: {e:#}"));
                false
            }
        }
    }

    fn import_file(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter(statics::EN_FILTER_EXCEL, &statics::EXCEL_EXTENSIONS)
            .pick_file()
        else {
            return;
        };
        match sheet::read_rows(&path) {
            Ok(raw) => {
                self.import_preview = Some(import::stage_import(&self.table, &self.registry, &raw));
                self.last_error = None;
            }
            Err(e) => self.last_error = Some(format!("Failed to import: {e:#}")),
        }
    }

    fn commit_import(&mut self, preview: ImportPreview) {
        if let Err(e) = self.table.append_rows(preview.new_rows) {
            self.last_error = Some(format!("Failed to append imported rows: {e}"));
            return;
        }
        self.registry = preview.staged_options;
        if let Err(e) = self.registry.save_to_path(&self.paths.type_data()) {
            self.last_error = Some(format!("Failed to save column options: {e:#}"));
            return;
        }
        self.save_table();
        if self.last_error.is_none() {
            self.status = statics::EN_STATUS_IMPORTED.to_string();
        }
    }

    fn submit_new_task(&mut self) -> bool {
        let form = self.new_task.clone();
        let mut title = form.title;
        // All-caps titles are deliberate (acronyms); leave them alone.
        if title != title.to_uppercase() {
            title = import::title_case(&title);
        }
        if title.is_empty() && !form.description.is_empty() {
            title = form
                .description
                .split_whitespace()
                .next()
                .unwrap_or_default()
                .to_string();
        }
        let today = Local::now().date_naive().to_string();

        let record: Vec<String> = self
            .table
            .column_names()
            .iter()
            .map(|col| match col.as_str() {
                statics::COL_TITLE => title.clone(),
                statics::COL_DESCRIPTION => form.description.clone(),
                statics::COL_CATEGORY => form.category.clone(),
                statics::COL_SUBTASKS => form.subtasks.clone(),
                statics::COL_PRIORITY => form.priority.clone(),
                statics::COL_DATE_CREATED => today.clone(),
                statics::COL_STATUS => statics::STATUS_ACTIVE.to_string(),
                statics::COL_TIMELINE => form.timeline.clone(),
                statics::COL_NOTES => form.notes.clone(),
                _ => String::new(),
            })
            .collect();

        match self.table.append_rows(vec![record]) {
            Ok(()) => {
                self.status = format!("{title} was successfully added.");
                self.last_error = None;
                true
            }
            Err(e) => {
                self.last_error = Some(format!("Failed to add task: {e}"));
                false
            }
        }
    }

    fn mark_completed(&mut self, row: usize) {
        let title = self.table.get_cell(row, 0).unwrap_or_default().to_string();
        if !confirm(
            statics::EN_COMPLETE_CONFIRM_TITLE,
            &format!(
                "Are you sure you want to mark complete {title}? {}",
                statics::EN_COMPLETE_CONFIRM_SUFFIX
            ),
        ) {
            return;
        }
        let Some(status_col) = self.table.column_index(statics::COL_STATUS) else {
            self.last_error = Some(format!("No {} column", statics::COL_STATUS));
            return;
        };
        let stamp = format!(
            "{} {}",
            statics::STATUS_COMPLETED_PREFIX,
            Local::now().date_naive()
        );
        match self.table.overwrite_cell(row, status_col, stamp) {
            Ok(()) => {
                self.status = format!("{title} has been successfully marked as completed.");
                self.last_error = None;
            }
            Err(e) => self.last_error = Some(format!("Failed to mark completed: {e}")),
        }
    }

    fn clone_row(&mut self, row: usize) {
        let mut copy = match self.table.get_row(row) {
            Ok(source) => source.to_vec(),
            Err(e) => {
                self.last_error = Some(format!("Failed to clone: {e}"));
                return;
            }
        };
        let title = copy.first().cloned().unwrap_or_default();
        if !confirm(
            statics::EN_CLONE_CONFIRM_TITLE,
            &format!("Are you sure you want to clone {title}?"),
        ) {
            return;
        }
        if let Some(date_col) = self.table.column_index(statics::COL_DATE_CREATED) {
            copy[date_col] = Local::now().date_naive().to_string();
        }
        match self.table.append_rows(vec![copy]) {
            Ok(()) => {
                self.status = format!("{title} was successfully cloned.");
                self.last_error = None;
            }
            Err(e) => self.last_error = Some(format!("Failed to clone: {e}")),
        }
    }

    /// The password-gated wipe: back the table up to a spreadsheet first,
    /// then clear rows and option values and persist both documents.
    fn clear_all_data(&mut self) {
        self.export_table();
        self.table.clear_all();
        self.registry.clear_all_values();
        if let Err(e) = self.registry.save_to_path(&self.paths.type_data()) {
            self.last_error = Some(format!("Failed to save column options: {e:#}"));
            return;
        }
        self.save_table();
        if self.last_error.is_none() {
            self.status = statics::EN_CLEAR_DONE.to_string();
        }
    }

    fn apply_row_action(&mut self, action: RowAction) {
        match action {
            RowAction::MarkCompleted(row) => self.mark_completed(row),
            RowAction::CloneRow(row) => self.clone_row(row),
            RowAction::ChooseValue(row, col, value) => {
                if let Err(e) = self.table.overwrite_cell(row, col, value) {
                    self.last_error = Some(format!("Failed to change cell: {e}"));
                }
            }
            RowAction::EditCell(row, col, value) => {
                if let Err(e) = self.table.set_cell(row, col, value) {
                    self.last_error = Some(format!("Failed to change cell: {e}"));
                }
            }
        }
    }
}

impl eframe::App for TrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Intercept window close while unsaved changes exist.
        if ctx.input(|i| i.viewport().close_requested())
            && self.table.is_dirty()
            && !self.allow_close
        {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            self.close_confirm_open = true;
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.selectable_value(&mut self.edit_mode, false, statics::EN_MODE_VIEW);
                if self.edit_allowed {
                    ui.selectable_value(&mut self.edit_mode, true, statics::EN_MODE_EDIT);
                }
                ui.separator();

                if self.edit_allowed {
                    if ui.button(statics::EN_BTN_SAVE).clicked() {
                        self.save_table();
                    }
                    if ui.button(statics::EN_BTN_NEW).clicked() {
                        self.new_task_open = true;
                        self.new_task = NewTaskForm::default();
                        self.new_task_request_focus = true;
                    }
                }
                if ui.button(statics::EN_BTN_EXPORT).clicked() {
                    self.export_table();
                }
                if self.edit_allowed {
                    if ui.button(statics::EN_BTN_IMPORT).clicked() {
                        self.import_file();
                    }
                    if ui.button(statics::EN_BTN_CLEAR_DATA).clicked() {
                        self.clear_data_open = true;
                        self.clear_password.clear();
                        self.clear_request_focus = true;
                    }
                    ui.menu_button(statics::EN_BTN_EDIT_VALUES, |ui| {
                        let columns: Vec<String> =
                            self.registry.columns().map(str::to_string).collect();
                        for column in columns {
                            let label = format!(
                                "{} {} {}",
                                statics::EN_WINDOW_EDIT_VALUES_PREFIX,
                                column,
                                statics::EN_WINDOW_EDIT_VALUES_SUFFIX
                            );
                            if ui.button(label).clicked() {
                                self.options_editor =
                                    Some(OptionsEditor::open(column, &self.registry));
                                ui.close();
                            }
                        }
                    });
                }

                ui.menu_button(statics::EN_BTN_HIDE_COLUMNS, |ui| {
                    let names: Vec<String> = self.table.column_names().to_vec();
                    for (i, name) in names.iter().enumerate() {
                        let mut shown = !self.hidden_columns[i];
                        if ui.checkbox(&mut shown, name).changed() {
                            self.hidden_columns[i] = !shown;
                        }
                    }
                });

                if ui
                    .checkbox(
                        &mut self.hide_completed,
                        statics::EN_CHECKBOX_HIDE_COMPLETED,
                    )
                    .changed()
                {
                    self.filters.set_status_filter(if self.hide_completed {
                        statics::STATUS_ACTIVE
                    } else {
                        statics::EN_EMPTY
                    });
                }

                ui.separator();
                if ui.button(statics::EN_BTN_ABOUT).clicked() {
                    self.about_open = true;
                }
                if ui.button(statics::EN_BTN_TOGGLE_THEME).clicked() {
                    self.theme_dark = !self.theme_dark;
                    if self.theme_dark {
                        ctx.set_visuals(egui::Visuals::dark());
                    } else {
                        ctx.set_visuals(egui::Visuals::light());
                    }
                }
            });
        });

        egui::TopBottomPanel::top("search_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(statics::EN_LABEL_SEARCH);
                let resp = ui.add(
                    egui::TextEdit::singleline(&mut self.search_text)
                        .hint_text(statics::EN_HINT_SEARCH)
                        .desired_width(300.0),
                );
                if resp.changed() {
                    self.filters.set_text_filter(self.search_text.clone());
                }
                if ui.small_button(statics::EN_BTN_CLEAR).clicked() {
                    self.search_text.clear();
                    self.filters.set_text_filter(statics::EN_EMPTY);
                }
            });
        });

        if let Some(err) = self.last_error.clone() {
            egui::TopBottomPanel::top("error_bar").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.colored_label(egui::Color32::RED, err);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button(statics::EN_BTN_CLEAR).clicked() {
                            self.last_error = None;
                        }
                    });
                });
            });
        }

        if self.about_open {
            let mut open = self.about_open;
            egui::Window::new(statics::EN_WINDOW_ABOUT)
                .collapsible(false)
                .open(&mut open)
                .show(ctx, |ui| {
                    ui.heading(statics::EN_ABOUT_HEADING);
                    ui.label(format!(
                        "{} {}",
                        statics::EN_ABOUT_VERSION,
                        env!("CARGO_PKG_VERSION")
                    ));
                    ui.separator();
                    ui.label(format!(
                        "{} {}",
                        statics::EN_ABOUT_NOTE_DATA_DIR,
                        self.paths.root().display()
                    ));
                    if !self.edit_allowed {
                        ui.separator();
                        ui.label(statics::EN_ABOUT_NOTE_VIEW_ONLY);
                    }
                });
            self.about_open = open;
        }

        if self.new_task_open {
            self.show_new_task_window(ctx);
        }
        if self.options_editor.is_some() {
            self.show_options_editor_window(ctx);
        }
        if self.clear_data_open {
            self.show_clear_data_window(ctx);
        }
        if self.import_preview.is_some() {
            self.show_import_preview_window(ctx);
        }
        if self.close_confirm_open {
            self.show_close_confirm_window(ctx);
        }

        let order = self.display_order();

        egui::TopBottomPanel::bottom("bottom_status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("{} of {} tasks", order.len(), self.table.row_count()));
                if self.table.is_dirty() {
                    ui.separator();
                    ui.label("unsaved changes");
                }
                if !self.status.is_empty() {
                    ui.separator();
                    ui.label(&self.status);
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_task_table(ui, &order);
        });

        // Drain the mutation notifications accumulated this frame; repaint is
        // wholesale in immediate mode, so the granularity is diagnostic.
        for change in self.table.take_changes() {
            log::debug!("table change: {change:?}");
        }
    }
}

impl TrackerApp {
    fn show_task_table(&mut self, ui: &mut egui::Ui, order: &[usize]) {
        let shown: Vec<usize> = (0..self.table.column_names().len())
            .filter(|&i| !self.hidden_columns[i])
            .collect();
        if shown.is_empty() {
            ui.label("All columns are hidden.");
            return;
        }

        let row_h = ui.text_style_height(&egui::TextStyle::Body) + 8.0;
        let editing = self.edit_allowed && self.edit_mode;
        let mut pending: Option<RowAction> = None;
        let mut sort_clicked: Option<usize> = None;

        ui.push_id("task_table", |ui| {
            let mut builder = TableBuilder::new(ui)
                .striped(true)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center));
            for n in 0..shown.len() {
                builder = if n + 1 == shown.len() {
                    builder.column(Column::remainder().resizable(true))
                } else {
                    builder.column(Column::initial(140.0).resizable(true))
                };
            }

            builder
                .header(row_h, |mut header| {
                    for &col in &shown {
                        header.col(|ui| {
                            let name = &self.table.column_names()[col];
                            let glyph = match self.sort_column {
                                Some(c) if c == col && self.sort_ascending => {
                                    statics::EN_GLYPH_SORT_ASC
                                }
                                Some(c) if c == col => statics::EN_GLYPH_SORT_DESC,
                                _ => statics::EN_EMPTY,
                            };
                            if ui.button(format!("{name} {glyph}").trim()).clicked() {
                                sort_clicked = Some(col);
                            }
                        });
                    }
                })
                .body(|mut body| {
                    for &row_idx in order {
                        body.row(row_h, |mut row| {
                            for &col_idx in &shown {
                                row.col(|ui| {
                                    let value = self
                                        .table
                                        .get_cell(row_idx, col_idx)
                                        .unwrap_or_default()
                                        .to_string();
                                    let name = self.table.column_names()[col_idx].clone();
                                    let constrained = self.registry.contains(&name);
                                    let protected =
                                        statics::PROTECTED_COLUMNS.contains(&name.as_str());

                                    if editing && !protected {
                                        let mut buf = value.clone();
                                        let resp = ui.add(
                                            egui::TextEdit::singleline(&mut buf)
                                                .desired_width(ui.available_width()),
                                        );
                                        if resp.changed() {
                                            pending =
                                                Some(RowAction::EditCell(row_idx, col_idx, buf));
                                        }
                                        // The first column carries the task-level actions.
                                        if col_idx == 0 {
                                            resp.context_menu(|ui| {
                                                if ui
                                                    .button(statics::EN_MENU_MARK_COMPLETED)
                                                    .clicked()
                                                {
                                                    pending =
                                                        Some(RowAction::MarkCompleted(row_idx));
                                                    ui.close();
                                                }
                                                if ui.button(statics::EN_MENU_CLONE).clicked() {
                                                    pending = Some(RowAction::CloneRow(row_idx));
                                                    ui.close();
                                                }
                                            });
                                        }
                                    } else {
                                        let resp = ui.add(
                                            egui::Label::new(&value)
                                                .sense(egui::Sense::click())
                                                .truncate(),
                                        );
                                        if editing && constrained {
                                            resp.context_menu(|ui| {
                                                let values =
                                                    self.registry.values(&name).to_vec();
                                                for option in values {
                                                    if ui.button(&option).clicked() {
                                                        pending = Some(RowAction::ChooseValue(
                                                            row_idx, col_idx, option,
                                                        ));
                                                        ui.close();
                                                    }
                                                }
                                            });
                                        }
                                    }
                                });
                            }
                        });
                    }
                });
        });

        if let Some(col) = sort_clicked {
            if self.sort_column == Some(col) {
                if self.sort_ascending {
                    self.sort_ascending = false;
                } else {
                    // Third click returns to the underlying row order.
                    self.sort_column = None;
                    self.sort_ascending = true;
                }
            } else {
                self.sort_column = Some(col);
                self.sort_ascending = true;
            }
        }

        if let Some(action) = pending {
            self.apply_row_action(action);
        }
    }

    fn show_new_task_window(&mut self, ctx: &egui::Context) {
        let mut open = self.new_task_open;
        let mut submitted = false;
        let mut cancelled = false;

        egui::Window::new(statics::EN_WINDOW_NEW_TASK)
            .collapsible(false)
            .open(&mut open)
            .show(ctx, |ui| {
                egui::Grid::new("new_task_grid")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        ui.label(statics::EN_LABEL_TITLE);
                        let resp = ui.text_edit_singleline(&mut self.new_task.title);
                        if self.new_task_request_focus {
                            resp.request_focus();
                            self.new_task_request_focus = false;
                        }
                        ui.end_row();

                        ui.label(statics::EN_LABEL_DESCRIPTION);
                        ui.text_edit_singleline(&mut self.new_task.description);
                        ui.end_row();

                        ui.label(statics::EN_LABEL_CATEGORY);
                        egui::ComboBox::from_id_salt("new_task_category")
                            .selected_text(self.new_task.category.clone())
                            .show_ui(ui, |ui| {
                                ui.selectable_value(
                                    &mut self.new_task.category,
                                    String::new(),
                                    statics::EN_EMPTY,
                                );
                                let values =
                                    self.registry.values(statics::COL_CATEGORY).to_vec();
                                for value in values {
                                    ui.selectable_value(
                                        &mut self.new_task.category,
                                        value.clone(),
                                        value,
                                    );
                                }
                            });
                        ui.end_row();

                        ui.label(statics::EN_LABEL_SUBTASKS);
                        ui.text_edit_singleline(&mut self.new_task.subtasks);
                        ui.end_row();

                        ui.label(statics::EN_LABEL_PRIORITY);
                        egui::ComboBox::from_id_salt("new_task_priority")
                            .selected_text(self.new_task.priority.clone())
                            .show_ui(ui, |ui| {
                                ui.selectable_value(
                                    &mut self.new_task.priority,
                                    String::new(),
                                    statics::EN_EMPTY,
                                );
                                let values =
                                    self.registry.values(statics::COL_PRIORITY).to_vec();
                                for value in values {
                                    ui.selectable_value(
                                        &mut self.new_task.priority,
                                        value.clone(),
                                        value,
                                    );
                                }
                            });
                        ui.end_row();

                        ui.label(statics::EN_LABEL_TIMELINE);
                        ui.text_edit_singleline(&mut self.new_task.timeline);
                        ui.end_row();

                        ui.label(statics::EN_LABEL_NOTES);
                        ui.text_edit_singleline(&mut self.new_task.notes);
                        ui.end_row();
                    });

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button(statics::EN_BTN_OK).clicked() {
                        submitted = true;
                    }
                    if ui.button(statics::EN_BTN_CANCEL).clicked() {
                        cancelled = true;
                    }
                });
            });

        if submitted {
            if self.submit_new_task() {
                self.new_task = NewTaskForm::default();
                open = false;
            }
        } else if cancelled {
            open = false;
        }
        self.new_task_open = open;
    }

    fn show_options_editor_window(&mut self, ctx: &egui::Context) {
        let Some(mut editor) = self.options_editor.take() else {
            return;
        };
        let mut open = true;
        let mut save_clicked = false;

        let title = format!(
            "{} {} {}",
            statics::EN_WINDOW_EDIT_VALUES_PREFIX,
            editor.column,
            statics::EN_WINDOW_EDIT_VALUES_SUFFIX
        );
        egui::Window::new(title)
            .collapsible(false)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(statics::EN_EDIT_VALUES_INSTRUCTIONS);
                ui.add(
                    egui::TextEdit::multiline(&mut editor.text)
                        .desired_rows(6)
                        .desired_width(400.0),
                );
                if ui.button(statics::EN_BTN_SAVE).clicked() {
                    save_clicked = true;
                }
            });

        if save_clicked {
            let parsed = parse_value_list(&editor.text);
            if parsed == editor.old_values {
                // No changes: close silently.
                return;
            }
            self.registry.set_values(editor.column.clone(), parsed);
            match self.registry.save_to_path(&self.paths.type_data()) {
                Ok(()) => {
                    self.status = format!("The values for {} were updated.", editor.column);
                    self.last_error = None;
                }
                Err(e) => {
                    self.last_error = Some(format!("Failed to save column options: {e:#}"));
                    self.options_editor = Some(editor);
                }
            }
        } else if open {
            self.options_editor = Some(editor);
        }
    }

    fn show_clear_data_window(&mut self, ctx: &egui::Context) {
        let mut open = self.clear_data_open;
        let mut submitted = false;
        let mut cancelled = false;

        egui::Window::new(statics::EN_WINDOW_CLEAR_DATA)
            .collapsible(false)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(statics::EN_CLEAR_DATA_PROMPT);
                let resp = ui.add(egui::TextEdit::singleline(&mut self.clear_password));
                if self.clear_request_focus {
                    resp.request_focus();
                    self.clear_request_focus = false;
                }
                ui.horizontal(|ui| {
                    if ui.button(statics::EN_BTN_OK).clicked() {
                        submitted = true;
                    }
                    if ui.button(statics::EN_BTN_CANCEL).clicked() {
                        cancelled = true;
                    }
                });
            });

        if submitted {
            open = false;
            if self.clear_password == statics::CLEAR_ALL_PASSWORD {
                if confirm(
                    statics::EN_CLEAR_CONFIRM_TITLE,
                    statics::EN_CLEAR_CONFIRM_BODY,
                ) {
                    self.clear_all_data();
                }
            } else {
                self.last_error = Some(statics::EN_CLEAR_WRONG_PASSWORD.to_string());
            }
            self.clear_password.clear();
        } else if cancelled {
            open = false;
            self.clear_password.clear();
        }
        self.clear_data_open = open;
    }

    fn show_import_preview_window(&mut self, ctx: &egui::Context) {
        let Some(preview) = self.import_preview.take() else {
            return;
        };
        let mut open = true;
        let mut commit = false;
        let mut cancel = false;

        egui::Window::new(statics::EN_WINDOW_IMPORT_PREVIEW)
            .collapsible(false)
            .open(&mut open)
            .default_size([960.0, 540.0])
            .show(ctx, |ui| {
                ui.label(statics::EN_IMPORT_PREVIEW_HINT);
                ui.separator();

                let row_h = ui.text_style_height(&egui::TextStyle::Body) + 6.0;
                let columns = self.table.column_names().to_vec();
                ui.push_id("import_preview_table", |ui| {
                    let mut builder = TableBuilder::new(ui)
                        .striped(true)
                        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                        .max_scroll_height(400.0);
                    for n in 0..columns.len() {
                        builder = if n + 1 == columns.len() {
                            builder.column(Column::remainder().resizable(true))
                        } else {
                            builder.column(Column::initial(120.0).resizable(true))
                        };
                    }
                    builder
                        .header(row_h, |mut header| {
                            for name in &columns {
                                header.col(|ui| {
                                    ui.strong(name);
                                });
                            }
                        })
                        .body(|mut body| {
                            for index in 0..preview.joined_len(&self.table) {
                                body.row(row_h, |mut row| {
                                    let cells = preview.joined_row(&self.table, index);
                                    for c in 0..columns.len() {
                                        row.col(|ui| {
                                            let text = cells
                                                .and_then(|r| r.get(c))
                                                .map(String::as_str)
                                                .unwrap_or_default();
                                            ui.add(egui::Label::new(text).truncate());
                                        });
                                    }
                                });
                            }
                        });
                });

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button(statics::EN_BTN_SAVE).clicked() {
                        commit = true;
                    }
                    if ui.button(statics::EN_BTN_CANCEL).clicked() {
                        cancel = true;
                    }
                });
            });

        if commit {
            if confirm(
                statics::EN_IMPORT_CONFIRM_TITLE,
                statics::EN_IMPORT_CONFIRM_BODY,
            ) {
                self.commit_import(preview);
            } else {
                self.status = statics::EN_IMPORT_DECLINED.to_string();
            }
        } else if cancel || !open {
            self.status = statics::EN_IMPORT_DECLINED.to_string();
        } else {
            self.import_preview = Some(preview);
        }
    }

    fn show_close_confirm_window(&mut self, ctx: &egui::Context) {
        let mut open = self.close_confirm_open;
        let mut save_exit = false;
        let mut discard = false;
        let mut cancel = false;

        egui::Window::new(statics::EN_WINDOW_UNSAVED)
            .collapsible(false)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(statics::EN_UNSAVED_PROMPT);
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button(statics::EN_BTN_SAVE_AND_EXIT).clicked() {
                        save_exit = true;
                    }
                    if ui.button(statics::EN_BTN_DISCARD).clicked() {
                        discard = true;
                    }
                    if ui.button(statics::EN_BTN_CANCEL).clicked() {
                        cancel = true;
                    }
                });
            });

        if save_exit {
            self.save_table();
            if self.last_error.is_none() {
                self.allow_close = true;
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            open = false;
        } else if discard {
            if confirm(
                statics::EN_DISCARD_CONFIRM_TITLE,
                statics::EN_DISCARD_CONFIRM_BODY,
            ) {
                self.allow_close = true;
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            open = false;
        } else if cancel {
            open = false;
        }
        self.close_confirm_open = open;
    }
}
