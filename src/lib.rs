// src/lib.rs

// === 1. Declare all the top-level modules ===
pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod persistence;
pub mod simulators;
pub mod stocks;
pub mod ui;

// === 2. Re-export the public-facing components to create a clean API ===

// --- From `stocks` ---
pub use stocks::{EditField, FieldEdit, StockRecord, StockTable};

// --- From `simulators` ---
pub use simulators::{DaySummary, HypeBucket, HypeSimulator, Marketable};

// --- From `persistence` / `error` ---
pub use error::{EditError, StoreError};
pub use persistence::{load_file, save_file};

// --- The window ---
pub use app::{Dialog, HypeApp};
