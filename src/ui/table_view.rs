// src/ui/table_view.rs

use super::UiAction;
use crate::stocks::{COLUMNS, EditField, StockTable};
use eframe::egui::{self, RichText};

/// Renders every record as a grid row. Right-clicking any cell of a row
/// selects it and opens the per-row menu.
pub fn show(
    ui: &mut egui::Ui,
    table: &StockTable,
    selected: Option<usize>,
    actions: &mut Vec<UiAction>,
) {
    egui::ScrollArea::both().auto_shrink([false, false]).show(ui, |ui| {
        egui::Grid::new("stock_table")
            .striped(true)
            .spacing([16.0, 4.0])
            .show(ui, |ui| {
                for heading in COLUMNS {
                    ui.label(RichText::new(heading).strong().underline());
                }
                ui.end_row();

                for (index, record) in table.records().iter().enumerate() {
                    let is_selected = selected == Some(index);
                    for cell in record.display_row() {
                        let response = ui.selectable_label(is_selected, cell);
                        if response.secondary_clicked() {
                            actions.push(UiAction::Select(index));
                        }
                        response.context_menu(|ui| row_menu(ui, actions));
                    }
                    ui.end_row();
                }
            });
    });
}

fn row_menu(ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
    for field in EditField::ALL {
        if ui.button(field.title()).clicked() {
            actions.push(UiAction::Edit(field));
            ui.close_menu();
        }
    }
    ui.separator();
    if ui.button("Add New Entry").clicked() {
        actions.push(UiAction::AddNewEntry);
        ui.close_menu();
    }
}
