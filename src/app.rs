// src/app.rs

//! The view-controller: owns the table, the selection and whichever modal
//! dialog is open. Every user command goes through a method here, so the
//! behaviour can be driven without a window.

use crate::config;
use crate::error::StoreError;
use crate::persistence;
use crate::simulators::{HypeSimulator, Marketable};
use crate::stocks::{EditField, StockTable, sample_records};
use crate::ui::dialogs::{self, DialogOutcome};
use crate::ui::{UiAction, chart, controls, table_view};
use eframe::egui;
use std::path::Path;
use tracing::{error, info, warn};

/// A modal prompt waiting for the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    /// Field prompt pre-filled with the current value. `error` holds the last
    /// rejected input's message.
    Edit {
        field: EditField,
        index: usize,
        input: String,
        error: Option<String>,
    },
    ConfirmNewFile,
    LoadPath { input: String },
    SavePath { input: String },
    Message { title: String, message: String },
}

impl Dialog {
    pub fn title(&self) -> String {
        match self {
            Dialog::Edit { field, .. } => field.title().to_string(),
            Dialog::ConfirmNewFile => "New File".to_string(),
            Dialog::LoadPath { .. } => "Load File".to_string(),
            Dialog::SavePath { .. } => "Save File".to_string(),
            Dialog::Message { title, .. } => title.clone(),
        }
    }

    fn message(title: &str, message: impl Into<String>) -> Self {
        Dialog::Message {
            title: title.to_string(),
            message: message.into(),
        }
    }
}

pub struct HypeApp {
    table: StockTable,
    simulator: Box<dyn Marketable>,
    /// Row whose context menu was last opened. Not cleared when the table
    /// changes underneath it; stale indices make edits a no-op.
    selected: Option<usize>,
    dialog: Option<Dialog>,
}

impl HypeApp {
    pub fn new(table: StockTable, simulator: Box<dyn Marketable>) -> Self {
        Self {
            table,
            simulator,
            selected: None,
            dialog: None,
        }
    }

    /// What the window shows on launch.
    pub fn with_sample_data() -> Self {
        Self::new(
            StockTable::from_records(sample_records()),
            Box::new(HypeSimulator::from_entropy()),
        )
    }

    pub fn table(&self) -> &StockTable {
        &self.table
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    /// Replaces the text of the open edit or path prompt.
    pub fn set_dialog_input(&mut self, text: &str) {
        match self.dialog.as_mut() {
            Some(Dialog::Edit { input, .. })
            | Some(Dialog::LoadPath { input })
            | Some(Dialog::SavePath { input }) => *input = text.to_string(),
            _ => {}
        }
    }

    pub fn dispatch(&mut self, action: UiAction) {
        match action {
            UiAction::Select(index) => self.select_row(index),
            UiAction::Edit(field) => self.begin_edit(field),
            UiAction::AddNewEntry => self.add_new_entry(),
            UiAction::SimulateDay => self.simulate_market_day(),
            UiAction::NewFile => self.request_new_file(),
            UiAction::LoadFile => self.request_load(),
            UiAction::SaveFile => self.request_save(),
        }
    }

    pub fn select_row(&mut self, index: usize) {
        self.selected = Some(index);
    }

    /// Opens the prompt for `field` on the selected row. Silently does
    /// nothing without a (live) selection.
    pub fn begin_edit(&mut self, field: EditField) {
        let Some(index) = self.selected else { return };
        let Some(record) = self.table.get(index) else { return };
        self.dialog = Some(Dialog::Edit {
            field,
            index,
            input: field.current_value(record),
            error: None,
        });
    }

    /// The OK/Yes branch of whatever dialog is open.
    pub fn submit_dialog(&mut self) {
        let Some(dialog) = self.dialog.take() else { return };
        match dialog {
            Dialog::Edit {
                field,
                index,
                input,
                ..
            } => match field.parse(&input) {
                Ok(edit) => {
                    self.table.apply_edit(index, edit);
                }
                Err(err) => {
                    warn!(%err, ?field, "rejected edit input");
                    self.dialog = Some(Dialog::Edit {
                        field,
                        index,
                        input,
                        error: Some(err.to_string()),
                    });
                }
            },
            Dialog::ConfirmNewFile => self.new_file(),
            Dialog::LoadPath { input } => {
                let input = input.trim();
                if input.is_empty() {
                    return;
                }
                if let Err(err) = self.load_from(Path::new(input)) {
                    error!(%err, "load failed");
                    self.dialog = Some(Dialog::message("Load Failed", err.to_string()));
                }
            }
            Dialog::SavePath { input } => {
                if input.trim().is_empty() {
                    return;
                }
                let path = persistence::with_default_extension(&input);
                self.dialog = Some(match self.save_to(&path) {
                    Ok(()) => Dialog::message(
                        "Save Successful",
                        format!("Data saved to {}", path.display()),
                    ),
                    Err(err) => {
                        error!(%err, "save failed");
                        Dialog::message("Save Failed", err.to_string())
                    }
                });
            }
            Dialog::Message { .. } => {}
        }
    }

    /// Closes the open dialog without touching the table.
    pub fn cancel_dialog(&mut self) {
        self.dialog = None;
    }

    pub fn add_new_entry(&mut self) {
        self.table.add_new_entry();
        info!(rows = self.table.len(), "added new entry");
    }

    pub fn simulate_market_day(&mut self) {
        self.simulator.step(&mut self.table);
        self.dialog = Some(Dialog::message(
            "Simulation Complete",
            "Market day simulated! Prices updated based on hype factors.",
        ));
    }

    /// Asks before clearing; `submit_dialog` does the clearing.
    pub fn request_new_file(&mut self) {
        self.dialog = Some(Dialog::ConfirmNewFile);
    }

    fn new_file(&mut self) {
        self.table.clear();
        info!("cleared table");
    }

    pub fn request_load(&mut self) {
        self.dialog = Some(Dialog::LoadPath {
            input: config::DEFAULT_FILE_NAME.to_string(),
        });
    }

    pub fn request_save(&mut self) {
        self.dialog = Some(Dialog::SavePath {
            input: config::DEFAULT_FILE_NAME.to_string(),
        });
    }

    /// Replaces the whole table with the file's records, then ranks them. On
    /// error the current table is kept.
    pub fn load_from(&mut self, path: &Path) -> Result<(), StoreError> {
        let records = persistence::load_file(path)?;
        self.table.replace(records);
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), StoreError> {
        persistence::save_file(path, self.table.records())
    }

    fn resolve_dialog(&mut self, outcome: DialogOutcome) {
        match outcome {
            DialogOutcome::Pending => {}
            DialogOutcome::Submit => self.submit_dialog(),
            DialogOutcome::Cancel => self.cancel_dialog(),
        }
    }
}

impl eframe::App for HypeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions: Vec<UiAction> = Vec::new();
        let modal_open = self.dialog.is_some();

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            ui.add_enabled_ui(!modal_open, |ui| controls::menu_bar(ui, &mut actions));
        });

        egui::TopBottomPanel::bottom("button_bar").show(ctx, |ui| {
            ui.add_enabled_ui(!modal_open, |ui| controls::button_row(ui, &mut actions));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!modal_open, |ui| {
                chart::show(ui, &self.table);
                ui.separator();
                table_view::show(ui, &self.table, self.selected, &mut actions);
            });
        });

        if let Some(dialog) = self.dialog.as_mut() {
            let outcome = dialogs::show(ctx, dialog);
            self.resolve_dialog(outcome);
        }

        for action in actions {
            self.dispatch(action);
        }
    }
}
