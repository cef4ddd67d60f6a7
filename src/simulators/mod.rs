// src/simulators/mod.rs

pub mod hype;
pub mod market_trait;

pub use hype::{DaySummary, HypeBucket, HypeSimulator};
pub use market_trait::Marketable;
