// src/stocks/definitions.rs
//! Core record types for the hype table.
//
//! A `StockRecord` is a flat row that is persisted field-for-field, so the
//! serde names here *are* the file format.

use crate::config;
use crate::error::EditError;
use serde::{Deserialize, Serialize};

/// One row of the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRecord {
    /// 1-based position by descending price. Reassigned on every resort.
    pub rank: usize,
    /// Display label. Names are not unique.
    pub name: String,
    /// Promotional blurb.
    pub promo: String,
    /// Character count of `promo`, refreshed only when the promo is edited.
    pub weight: usize,
    /// Current price. Edits may set it negative; a market day never does.
    pub price: f64,
    /// Shares outstanding.
    pub shares: u64,
    /// `price * shares`, refreshed whenever either side changes.
    pub market_cap: f64,
    /// Drives the direction and size of a market day move.
    pub hype_score: i64,
}

impl StockRecord {
    /// The row appended by "Add New Entry". `rank` is provisional until the next sort.
    pub fn new_entry(rank: usize) -> Self {
        let promo = config::DEFAULT_PROMO.to_string();
        Self {
            rank,
            name: config::DEFAULT_NAME.to_string(),
            weight: promo.chars().count(),
            promo,
            price: config::DEFAULT_PRICE,
            shares: config::DEFAULT_SHARES,
            market_cap: config::DEFAULT_PRICE * config::DEFAULT_SHARES as f64,
            hype_score: config::DEFAULT_HYPE_SCORE,
        }
    }

    #[inline]
    pub fn update_market_cap(&mut self) {
        self.market_cap = self.price * self.shares as f64;
    }

    /// The eight cells shown in the table, in column order.
    pub fn display_row(&self) -> [String; 8] {
        [
            self.rank.to_string(),
            self.name.clone(),
            self.promo.clone(),
            self.weight.to_string(),
            format_currency(self.price),
            self.shares.to_string(),
            format_currency(self.market_cap),
            self.hype_score.to_string(),
        ]
    }
}

/// Column headings matching `StockRecord::display_row`.
pub const COLUMNS: [&str; 8] = [
    "Rank",
    "Name",
    "Promo Content",
    "Weight (chars)",
    "Price",
    "Shares Outstanding",
    "Market Cap",
    "Hype Score",
];

/// Dollar amount with two decimals, e.g. `$991.00`.
pub fn format_currency(value: f64) -> String {
    format!("${:.2}", value)
}

/// The table shown when the app first opens.
pub fn sample_records() -> Vec<StockRecord> {
    vec![StockRecord {
        rank: 1,
        name: "Tesla".to_string(),
        promo: "World Domination!".to_string(),
        // Not the promo length. Stored rows are trusted as-is.
        weight: 20,
        price: 991.00,
        shares: 900_000_000,
        market_cap: 891_900_000_000.00,
        hype_score: 55,
    }]
}

/// What kind of prompt a field is edited through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Float,
    Integer,
}

/// The user-editable columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Name,
    Promo,
    Price,
    Shares,
    HypeScore,
}

impl EditField {
    pub const ALL: [EditField; 5] = [
        EditField::Name,
        EditField::Promo,
        EditField::Price,
        EditField::Shares,
        EditField::HypeScore,
    ];

    /// Context menu label, also used as the prompt title.
    pub fn title(self) -> &'static str {
        match self {
            EditField::Name => "Edit Name",
            EditField::Promo => "Edit Promo",
            EditField::Price => "Edit Price",
            EditField::Shares => "Edit Shares",
            EditField::HypeScore => "Edit Hype Score",
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            EditField::Name => "Enter new name:",
            EditField::Promo => "Enter new promo content:",
            EditField::Price => "Enter new price:",
            EditField::Shares => "Enter new shares outstanding:",
            EditField::HypeScore => "Enter new hype score:",
        }
    }

    pub fn input_kind(self) -> InputKind {
        match self {
            EditField::Name | EditField::Promo => InputKind::Text,
            EditField::Price => InputKind::Float,
            EditField::Shares | EditField::HypeScore => InputKind::Integer,
        }
    }

    /// The record's current value as prompt text.
    pub fn current_value(self, record: &StockRecord) -> String {
        match self {
            EditField::Name => record.name.clone(),
            EditField::Promo => record.promo.clone(),
            EditField::Price => record.price.to_string(),
            EditField::Shares => record.shares.to_string(),
            EditField::HypeScore => record.hype_score.to_string(),
        }
    }

    /// Turns raw prompt text into a typed edit. Text fields never fail.
    pub fn parse(self, input: &str) -> Result<FieldEdit, EditError> {
        match self {
            EditField::Name => Ok(FieldEdit::Name(input.to_string())),
            EditField::Promo => Ok(FieldEdit::Promo(input.to_string())),
            EditField::Price => {
                let trimmed = input.trim();
                match trimmed.parse::<f64>() {
                    Ok(price) if price.is_finite() => Ok(FieldEdit::Price(price)),
                    _ => Err(EditError::InvalidFloat(trimmed.to_string())),
                }
            }
            EditField::Shares => input
                .trim()
                .parse::<u64>()
                .map(FieldEdit::Shares)
                .map_err(|_| EditError::InvalidInteger(input.trim().to_string())),
            EditField::HypeScore => input
                .trim()
                .parse::<i64>()
                .map(FieldEdit::HypeScore)
                .map_err(|_| EditError::InvalidInteger(input.trim().to_string())),
        }
    }
}

/// A validated new value for one field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    Name(String),
    Promo(String),
    Price(f64),
    Shares(u64),
    HypeScore(i64),
}
