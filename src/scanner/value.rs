//! Value-bet detection

use super::ValueBetCandidate;
use crate::analysis::VoteTally;
use crate::config::ValueScanConfig;
use crate::ingest::OddsBook;
use crate::types::{Side, ANALYSIS_SLOTS};
use rust_decimal::Decimal;

/// Scan slots 1..=14 for sides where expert support beats the fair price.
///
/// A side qualifies when its raw odds strictly exceed `min_odds`, expert
/// probability strictly exceeds fair probability, the value ratio meets
/// `min_value_ratio`, and the side carries at least `min_votes` votes.
/// Candidates across all slots and both sides are pooled, sorted descending
/// by value ratio, and truncated to `top_n`.
pub fn scan_value(
    tally: &VoteTally,
    book: &OddsBook,
    config: &ValueScanConfig,
) -> Vec<ValueBetCandidate> {
    let mut candidates = Vec::new();

    for slot in 1..=ANALYSIS_SLOTS {
        let Some(odds) = book.get(&slot) else {
            continue;
        };
        let votes = tally.votes(slot);
        let total_votes = votes.total();
        if total_votes == 0 {
            continue;
        }

        let Some((fair_p1, fair_p2)) = odds.fair_probabilities() else {
            tracing::debug!(slot, "skipping slot with odds not above 1.0");
            continue;
        };

        for (side, fair_prob) in [(Side::P1, fair_p1), (Side::P2, fair_p2)] {
            let side_odds = odds.for_side(side);
            if side_odds <= config.min_odds {
                continue;
            }

            let side_votes = votes.side_votes(side);
            if side_votes < config.min_votes {
                continue;
            }

            let expert_prob = Decimal::from(side_votes) / Decimal::from(total_votes);
            if expert_prob <= fair_prob {
                continue;
            }

            let value_ratio = expert_prob / fair_prob;
            if value_ratio < config.min_value_ratio {
                continue;
            }

            candidates.push(ValueBetCandidate {
                slot,
                side,
                odds: side_odds,
                expert_prob,
                fair_prob,
                value_ratio,
                side_votes,
                total_votes,
            });
        }
    }

    candidates.sort_by(|a, b| b.value_ratio.cmp(&a.value_ratio));
    candidates.truncate(config.top_n);
    candidates
}
