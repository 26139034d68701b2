//! Value-bet scanner
//!
//! Compares expert vote ratios against de-vigged bookmaker probabilities and
//! flags matches where the consensus diverges from the market by a
//! configurable margin. Slots missing odds or votes yield nothing; odds not
//! strictly above 1.0 on both sides are skipped as invalid.

mod contrarian;
mod value;

#[cfg(test)]
mod tests;

pub use contrarian::scan_contrarian;
pub use value::scan_value;

use crate::types::Side;
use rust_decimal::Decimal;
use serde::Serialize;

/// A match where expert-implied probability beats the market's fair price.
#[derive(Debug, Clone, Serialize)]
pub struct ValueBetCandidate {
    pub slot: u8,
    pub side: Side,
    /// Raw decimal odds for the flagged side.
    pub odds: Decimal,
    /// Share of expert votes backing this side.
    pub expert_prob: Decimal,
    /// De-vigged market probability for this side.
    pub fair_prob: Decimal,
    /// `expert_prob / fair_prob`.
    pub value_ratio: Decimal,
    pub side_votes: u32,
    pub total_votes: u32,
}

/// A match where experts are confident in P1 but the de-vigged market still
/// gives P2 materially more weight than experts do.
#[derive(Debug, Clone, Serialize)]
pub struct ContrarianCandidate {
    pub slot: u8,
    pub expert_p1: Decimal,
    pub expert_p2: Decimal,
    pub fair_p2: Decimal,
    /// `fair_p2 - expert_p2`, the sort key.
    pub gap: Decimal,
    /// Raw decimal odds for P2.
    pub odds_p2: Decimal,
}
