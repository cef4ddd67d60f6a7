// src/simulators/hype.rs

use super::market_trait::Marketable;
use crate::config;
use crate::stocks::StockTable;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Uniform};
use tracing::{debug, info};

/// Which rule a hype score falls under for a market day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HypeBucket {
    /// Below 30: drifts within ±1%.
    Low,
    /// 30 through 70: rallies 6% to 30%.
    Medium,
    /// Above 70: crashes 10% to 30%.
    High,
}

impl HypeBucket {
    pub fn from_score(hype_score: i64) -> Self {
        if hype_score < config::LOW_HYPE_BELOW {
            HypeBucket::Low
        } else if hype_score <= config::HIGH_HYPE_ABOVE {
            HypeBucket::Medium
        } else {
            HypeBucket::High
        }
    }

    /// Inclusive percentage range a move is drawn from.
    pub fn change_range(self) -> (f64, f64) {
        match self {
            HypeBucket::Low => config::LOW_HYPE_CHANGE_PCT,
            HypeBucket::Medium => config::MEDIUM_HYPE_CHANGE_PCT,
            HypeBucket::High => config::HIGH_HYPE_CHANGE_PCT,
        }
    }
}

/// Counts of how a market day went, for the log line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DaySummary {
    pub gainers: usize,
    pub losers: usize,
    pub unchanged: usize,
}

/// One-shot hype-driven random walk. Holds no state between days besides the RNG.
pub struct HypeSimulator<R = StdRng> {
    rng: R,
    low: Uniform<f64>,
    medium: Uniform<f64>,
    high: Uniform<f64>,
}

impl HypeSimulator<StdRng> {
    /// Reproducible simulator for tests and benches.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: rand::Rng> HypeSimulator<R> {
    pub fn new(rng: R) -> Self {
        let uniform = |(lo, hi): (f64, f64)| -> Uniform<f64> { Uniform::new_inclusive(lo, hi) };
        Self {
            rng,
            low: uniform(HypeBucket::Low.change_range()),
            medium: uniform(HypeBucket::Medium.change_range()),
            high: uniform(HypeBucket::High.change_range()),
        }
    }

    /// Draws a percentage change for a record with this hype score.
    pub fn draw_change_pct(&mut self, hype_score: i64) -> f64 {
        match HypeBucket::from_score(hype_score) {
            HypeBucket::Low => self.low.sample(&mut self.rng),
            HypeBucket::Medium => self.medium.sample(&mut self.rng),
            HypeBucket::High => self.high.sample(&mut self.rng),
        }
    }
}

/// Applies a percentage move and floors the result at zero.
#[inline]
pub fn apply_change(price: f64, change_pct: f64) -> f64 {
    (price * (1.0 + change_pct / 100.0)).max(0.0)
}

impl<R: rand::Rng> Marketable for HypeSimulator<R> {
    fn step(&mut self, table: &mut StockTable) -> DaySummary {
        let mut summary = DaySummary::default();
        for record in table.records_mut() {
            let change_pct = self.draw_change_pct(record.hype_score);
            let old_price = record.price;
            record.price = apply_change(old_price, change_pct);
            record.update_market_cap();

            if record.price > old_price {
                summary.gainers += 1;
            } else if record.price < old_price {
                summary.losers += 1;
            } else {
                summary.unchanged += 1;
            }
            debug!(
                name = %record.name,
                hype = record.hype_score,
                change_pct,
                old_price,
                new_price = record.price,
                "repriced"
            );
        }
        table.sort_by_price_desc();
        info!(
            gainers = summary.gainers,
            losers = summary.losers,
            unchanged = summary.unchanged,
            "market day simulated"
        );
        summary
    }
}
