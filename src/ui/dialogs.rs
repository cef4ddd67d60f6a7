// src/ui/dialogs.rs

use crate::app::Dialog;
use crate::stocks::InputKind;
use eframe::egui::{self, Color32, Key};

/// How the user left a dialog this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    Pending,
    Submit,
    Cancel,
}

/// Draws `dialog` as a centered window; text inputs edit the dialog in place.
pub fn show(ctx: &egui::Context, dialog: &mut Dialog) -> DialogOutcome {
    let mut outcome = DialogOutcome::Pending;
    egui::Window::new(dialog.title())
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| match dialog {
            Dialog::Edit {
                field,
                input,
                error,
                ..
            } => {
                ui.label(field.prompt());
                let hint = match field.input_kind() {
                    InputKind::Text => "",
                    InputKind::Float => "number",
                    InputKind::Integer => "whole number",
                };
                text_input(ui, input, hint, &mut outcome);
                if let Some(err) = error {
                    ui.colored_label(Color32::LIGHT_RED, err.as_str());
                }
                buttons(ui, "OK", Some("Cancel"), &mut outcome);
            }
            Dialog::ConfirmNewFile => {
                ui.label("Are you sure? This will clear current data.");
                buttons(ui, "Yes", Some("No"), &mut outcome);
            }
            Dialog::LoadPath { input } | Dialog::SavePath { input } => {
                ui.label("JSON file path:");
                text_input(ui, input, "stocks.json", &mut outcome);
                buttons(ui, "OK", Some("Cancel"), &mut outcome);
            }
            Dialog::Message { message, .. } => {
                ui.label(message.as_str());
                buttons(ui, "OK", None, &mut outcome);
            }
        });

    if outcome == DialogOutcome::Pending && ctx.input(|i| i.key_pressed(Key::Escape)) {
        outcome = DialogOutcome::Cancel;
    }
    outcome
}

fn text_input(ui: &mut egui::Ui, input: &mut String, hint: &str, outcome: &mut DialogOutcome) {
    let response = ui.add(egui::TextEdit::singleline(input).hint_text(hint));
    if ui.memory(|m| m.focused().is_none()) {
        response.request_focus();
    }
    if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
        *outcome = DialogOutcome::Submit;
    }
}

fn buttons(ui: &mut egui::Ui, ok: &str, cancel: Option<&str>, outcome: &mut DialogOutcome) {
    ui.add_space(6.0);
    ui.horizontal(|ui| {
        if ui.button(ok).clicked() {
            *outcome = DialogOutcome::Submit;
        }
        if let Some(cancel) = cancel {
            if ui.button(cancel).clicked() {
                *outcome = DialogOutcome::Cancel;
            }
        }
    });
}
