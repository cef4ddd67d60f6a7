// src/stocks/table.rs
//! The ordered record container behind the view.

use super::definitions::{FieldEdit, StockRecord};
use tracing::debug;

/// Records kept in rank order. Only mutations that touch price or membership
/// resort; plain text and hype edits leave the order alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StockTable {
    records: Vec<StockRecord>,
}

impl StockTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes ownership of `records` and ranks them. Stored fields other than
    /// `rank` are kept verbatim.
    pub fn from_records(records: Vec<StockRecord>) -> Self {
        let mut table = Self { records };
        table.sort_by_price_desc();
        table
    }

    pub fn records(&self) -> &[StockRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&StockRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn records_mut(&mut self) -> &mut [StockRecord] {
        &mut self.records
    }

    /// Stable sort by price, highest first, then renumber ranks 1..=N.
    /// Equal prices keep their previous relative order; `-0.0` equals `0.0`.
    pub fn sort_by_price_desc(&mut self) {
        self.records
            .sort_by(|a, b| sort_key(b.price).total_cmp(&sort_key(a.price)));
        for (i, record) in self.records.iter_mut().enumerate() {
            record.rank = i + 1;
        }
    }

    /// Applies a validated edit to the record at `index`.
    ///
    /// Returns `false` when nothing changed: the index is stale, or the edit is
    /// an empty name. An empty promo is a real edit and zeroes the weight.
    /// Prices are stored as given, negative included.
    pub fn apply_edit(&mut self, index: usize, edit: FieldEdit) -> bool {
        let Some(record) = self.records.get_mut(index) else {
            return false;
        };
        debug!(index, ?edit, "editing record");
        match edit {
            FieldEdit::Name(name) => {
                if name.is_empty() {
                    return false;
                }
                record.name = name;
            }
            FieldEdit::Promo(promo) => {
                record.weight = promo.chars().count();
                record.promo = promo;
            }
            FieldEdit::Price(price) => {
                record.price = price;
                record.update_market_cap();
            }
            FieldEdit::Shares(shares) => {
                record.shares = shares;
                record.update_market_cap();
            }
            FieldEdit::HypeScore(score) => {
                record.hype_score = score;
            }
        }
        true
    }

    /// Appends a default record and resorts.
    pub fn add_new_entry(&mut self) {
        self.records.push(StockRecord::new_entry(self.records.len() + 1));
        self.sort_by_price_desc();
    }

    /// Drops every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Swaps in a whole new set of records and ranks them.
    pub fn replace(&mut self, records: Vec<StockRecord>) {
        self.records = records;
        self.sort_by_price_desc();
    }

    pub fn into_records(self) -> Vec<StockRecord> {
        self.records
    }
}

/// Folds signed zero so `total_cmp` only splits prices that compare unequal.
#[inline]
fn sort_key(price: f64) -> f64 {
    if price == 0.0 { 0.0 } else { price }
}

// -----------------------------------------------------------------------------
//  Unit tests: ordering and derived fields
// -----------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, price: f64) -> StockRecord {
        let mut r = StockRecord::new_entry(0);
        r.name = name.to_string();
        r.price = price;
        r.update_market_cap();
        r
    }

    fn names(table: &StockTable) -> Vec<&str> {
        table.records().iter().map(|r| r.name.as_str()).collect()
    }

    fn ranks(table: &StockTable) -> Vec<usize> {
        table.records().iter().map(|r| r.rank).collect()
    }

    #[test]
    fn sort_orders_by_price_and_renumbers() {
        let table = StockTable::from_records(vec![
            record("low", 5.0),
            record("high", 50.0),
            record("mid", 20.0),
        ]);
        assert_eq!(names(&table), ["high", "mid", "low"]);
        assert_eq!(ranks(&table), [1, 2, 3]);
    }

    #[test]
    fn sort_is_stable_for_equal_prices() {
        let table = StockTable::from_records(vec![
            record("a", 10.0),
            record("b", 30.0),
            record("c", 10.0),
            record("d", 10.0),
        ]);
        assert_eq!(names(&table), ["b", "a", "c", "d"]);
        assert_eq!(ranks(&table), [1, 2, 3, 4]);
    }

    #[test]
    fn signed_zero_prices_tie() {
        let table = StockTable::from_records(vec![
            record("neg_zero", -0.0),
            record("zero", 0.0),
            record("penny", 0.01),
            record("zero_again", -0.0),
        ]);
        assert_eq!(names(&table), ["penny", "neg_zero", "zero", "zero_again"]);
        assert_eq!(ranks(&table), [1, 2, 3, 4]);
    }

    #[test]
    fn price_edit_to_negative_zero_keeps_order_on_resort() {
        let mut table = StockTable::from_records(vec![record("a", 0.0), record("b", 0.0)]);
        assert!(table.apply_edit(0, FieldEdit::Price(-0.0)));
        table.add_new_entry();
        assert_eq!(names(&table), ["New Stock", "a", "b"]);
    }

    #[test]
    fn add_to_empty_table_gives_single_default_row() {
        let mut table = StockTable::new();
        table.add_new_entry();
        assert_eq!(table.len(), 1);
        let r = &table.records()[0];
        assert_eq!(*r, StockRecord::new_entry(1));
    }

    #[test]
    fn add_resorts_new_row_into_place() {
        let mut table = StockTable::from_records(vec![record("big", 500.0), record("tiny", 1.0)]);
        table.add_new_entry();
        assert_eq!(names(&table), ["big", "New Stock", "tiny"]);
        assert_eq!(ranks(&table), [1, 2, 3]);
    }

    #[test]
    fn promo_edit_sets_weight_even_when_empty() {
        let mut table = StockTable::from_records(vec![record("x", 1.0)]);
        assert!(table.apply_edit(0, FieldEdit::Promo("To the moon 🚀".into())));
        assert_eq!(table.records()[0].weight, 13);
        assert!(table.apply_edit(0, FieldEdit::Promo(String::new())));
        assert_eq!(table.records()[0].weight, 0);
        assert_eq!(table.records()[0].promo, "");
    }

    #[test]
    fn empty_name_is_ignored() {
        let mut table = StockTable::from_records(vec![record("keep", 1.0)]);
        assert!(!table.apply_edit(0, FieldEdit::Name(String::new())));
        assert_eq!(table.records()[0].name, "keep");
        assert!(table.apply_edit(0, FieldEdit::Name("renamed".into())));
        assert_eq!(table.records()[0].name, "renamed");
    }

    #[test]
    fn price_and_shares_edits_refresh_market_cap() {
        let mut table = StockTable::from_records(vec![record("x", 10.0)]);
        table.apply_edit(0, FieldEdit::Price(2.5));
        assert_eq!(table.records()[0].market_cap, 2.5 * 1_000_000.0);
        table.apply_edit(0, FieldEdit::Shares(40));
        assert_eq!(table.records()[0].market_cap, 100.0);
    }

    #[test]
    fn negative_price_edit_is_not_clamped() {
        let mut table = StockTable::from_records(vec![record("only", 10.0)]);
        table.apply_edit(0, FieldEdit::Price(-3.0));
        let r = &table.records()[0];
        assert_eq!(r.price, -3.0);
        assert_eq!(r.market_cap, -3_000_000.0);
    }

    #[test]
    fn field_edits_do_not_resort() {
        let mut table = StockTable::from_records(vec![record("a", 10.0), record("b", 5.0)]);
        table.apply_edit(1, FieldEdit::Price(99.0));
        table.apply_edit(1, FieldEdit::HypeScore(3));
        assert_eq!(names(&table), ["a", "b"]);
        assert_eq!(ranks(&table), [1, 2]);
    }

    #[test]
    fn stale_index_is_a_no_op() {
        let mut table = StockTable::new();
        assert!(!table.apply_edit(3, FieldEdit::HypeScore(1)));
        assert!(table.is_empty());
    }

    #[test]
    fn replace_keeps_stored_fields_but_reranks() {
        let mut stale = record("s", 7.0);
        stale.rank = 42;
        stale.weight = 99;
        stale.market_cap = 1.0;
        let mut table = StockTable::new();
        table.replace(vec![stale]);
        let r = &table.records()[0];
        assert_eq!(r.rank, 1);
        assert_eq!(r.weight, 99);
        assert_eq!(r.market_cap, 1.0);
    }
}
