// src/stocks/mod.rs
// -----------------
pub mod definitions;
pub mod table;

// Re-export the most useful items so callers don’t have to dive
// another level down the path.
pub use definitions::{
    COLUMNS, EditField, FieldEdit, InputKind, StockRecord, format_currency, sample_records,
};
pub use table::StockTable;
