// src/ui/controls.rs

use super::UiAction;
use eframe::egui;

/// File → New/Load/Save.
pub fn menu_bar(ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
    egui::menu::bar(ui, |ui| {
        ui.menu_button("File", |ui| {
            for (label, action) in [
                ("New File", UiAction::NewFile),
                ("Load File", UiAction::LoadFile),
                ("Save File", UiAction::SaveFile),
            ] {
                if ui.button(label).clicked() {
                    actions.push(action);
                    ui.close_menu();
                }
            }
        });
    });
}

/// The two always-visible buttons under the table.
pub fn button_row(ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        if ui.button("Simulate a Market Day").clicked() {
            actions.push(UiAction::SimulateDay);
        }
        if ui.button("New Entry").clicked() {
            actions.push(UiAction::AddNewEntry);
        }
    });
    ui.add_space(4.0);
}
