// src/config.rs

//! A centralized place for the simulator's tunables.

// --- New entry defaults ---
pub const DEFAULT_NAME: &str = "New Stock";
pub const DEFAULT_PROMO: &str = "";
pub const DEFAULT_PRICE: f64 = 100.00;
pub const DEFAULT_SHARES: u64 = 1_000_000;
pub const DEFAULT_HYPE_SCORE: i64 = 50;

// --- Hype buckets ---
// Scores strictly below this are "low hype" and barely move.
pub const LOW_HYPE_BELOW: i64 = 30;
// Scores strictly above this are "high hype" and crash.
pub const HIGH_HYPE_ABOVE: i64 = 70;

// Percentage change ranges per bucket, both ends inclusive.
pub const LOW_HYPE_CHANGE_PCT: (f64, f64) = (-1.0, 1.0);
pub const MEDIUM_HYPE_CHANGE_PCT: (f64, f64) = (6.0, 30.0);
pub const HIGH_HYPE_CHANGE_PCT: (f64, f64) = (-30.0, -10.0);

// --- Persistence ---
pub const DEFAULT_FILE_NAME: &str = "stocks.json";
pub const FILE_EXTENSION: &str = "json";
pub const JSON_INDENT: &[u8] = b"    ";

// --- Window ---
pub const WINDOW_TITLE: &str = "Hype-Driven Stock Simulator";
pub const WINDOW_SIZE: [f32; 2] = [1100.0, 600.0];
pub const CHART_HEIGHT: f32 = 160.0;

// --- Logging ---
pub const DEFAULT_LOG_FILTER: &str = "info,eframe=warn,egui_glow=warn,winit=warn";
