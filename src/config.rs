//! Analysis configuration
//!
//! Thresholds for the value/contrarian scanners. All fields have defaults so
//! an empty (or missing) config file yields the stock heuristics.

use crate::error::Result;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub value: ValueScanConfig,
    #[serde(default)]
    pub contrarian: ContrarianConfig,
}

impl Config {
    /// Load from a TOML file (optional) with `TENNIS_EDGE_*` env overrides.
    pub fn load(path: &str) -> Result<Self> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::with_name(path).required(false))
            .add_source(::config::Environment::with_prefix("TENNIS_EDGE").separator("__"))
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}

/// Value-bet scanner thresholds
#[derive(Debug, Clone, Deserialize)]
pub struct ValueScanConfig {
    /// Raw odds for a side must strictly exceed this floor. Set to 0 to
    /// disable the filter.
    #[serde(default = "default_min_odds")]
    pub min_odds: Decimal,
    /// Minimum expert/fair probability ratio (inclusive).
    #[serde(default = "default_min_value_ratio")]
    pub min_value_ratio: Decimal,
    /// Minimum absolute vote count on the candidate side.
    #[serde(default = "default_min_votes")]
    pub min_votes: u32,
    /// Candidates retained after the descending value-ratio sort.
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

impl Default for ValueScanConfig {
    fn default() -> Self {
        Self {
            min_odds: default_min_odds(),
            min_value_ratio: default_min_value_ratio(),
            min_votes: default_min_votes(),
            top_n: default_top_n(),
        }
    }
}

/// Contrarian scanner thresholds
///
/// Flags matches where experts are confident in P1 while the de-vigged
/// market still gives P2 materially more weight than experts do.
#[derive(Debug, Clone, Deserialize)]
pub struct ContrarianConfig {
    /// Expert support for P1 must strictly exceed this.
    #[serde(default = "default_min_expert_p1")]
    pub min_expert_p1: Decimal,
    /// Fair probability for P2 must strictly exceed this.
    #[serde(default = "default_min_fair_p2")]
    pub min_fair_p2: Decimal,
    /// Fair P2 must exceed expert P2 times this multiplier.
    #[serde(default = "default_fair_over_expert")]
    pub fair_over_expert: Decimal,
    /// Candidates retained after the descending gap sort.
    #[serde(default = "default_contrarian_top_n")]
    pub top_n: usize,
}

impl Default for ContrarianConfig {
    fn default() -> Self {
        Self {
            min_expert_p1: default_min_expert_p1(),
            min_fair_p2: default_min_fair_p2(),
            fair_over_expert: default_fair_over_expert(),
            top_n: default_contrarian_top_n(),
        }
    }
}

fn default_min_odds() -> Decimal {
    dec!(1.45)
}

fn default_min_value_ratio() -> Decimal {
    dec!(1.15)
}

fn default_min_votes() -> u32 {
    10
}

fn default_top_n() -> usize {
    6
}

fn default_min_expert_p1() -> Decimal {
    dec!(0.70)
}

fn default_min_fair_p2() -> Decimal {
    dec!(0.45)
}

fn default_fair_over_expert() -> Decimal {
    dec!(1.1)
}

fn default_contrarian_top_n() -> usize {
    3
}
