// src/simulators/market_trait.rs

use super::hype::DaySummary;
use crate::stocks::StockTable;

/// A trait for any engine that can move a table through one market day.
/// This allows for a pluggable (and seedable) simulation engine.
pub trait Marketable {
    /// Reprices every record once, refreshes market caps and reranks the table.
    fn step(&mut self, table: &mut StockTable) -> DaySummary;
}
