// src/ui/mod.rs

//! egui rendering. Nothing here mutates the table; widgets report what the
//! user asked for as `UiAction`s and `HypeApp` applies them after the frame.

pub mod chart;
pub mod controls;
pub mod dialogs;
pub mod table_view;

use crate::stocks::EditField;

/// A user command raised by a widget this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// A row's context menu was opened.
    Select(usize),
    Edit(EditField),
    AddNewEntry,
    SimulateDay,
    NewFile,
    LoadFile,
    SaveFile,
}
