//! Contrarian detection
//!
//! Asymmetric check: only the "experts pile onto P1, market still likes P2"
//! direction is flagged, as possible expert over-confidence.

use super::ContrarianCandidate;
use crate::analysis::VoteTally;
use crate::config::ContrarianConfig;
use crate::ingest::OddsBook;
use crate::types::{Side, ANALYSIS_SLOTS};
use rust_decimal::Decimal;

/// Scan slots 1..=14 for expert over-confidence in P1.
///
/// Emits a candidate when `expert_p1 > min_expert_p1`, `fair_p2 > min_fair_p2`
/// and `fair_p2 > expert_p2 * fair_over_expert`. Sorted descending by
/// `fair_p2 - expert_p2`, truncated to `top_n`.
pub fn scan_contrarian(
    tally: &VoteTally,
    book: &OddsBook,
    config: &ContrarianConfig,
) -> Vec<ContrarianCandidate> {
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

        let Some((_, fair_p2)) = odds.fair_probabilities() else {
            tracing::debug!(slot, "skipping slot with odds not above 1.0");
            continue;
        };

        let total = Decimal::from(total_votes);
        let expert_p1 = Decimal::from(votes.side_votes(Side::P1)) / total;
        let expert_p2 = Decimal::from(votes.side_votes(Side::P2)) / total;

        if expert_p1 > config.min_expert_p1
            && fair_p2 > config.min_fair_p2
            && fair_p2 > expert_p2 * config.fair_over_expert
        {
            candidates.push(ContrarianCandidate {
                slot,
                expert_p1,
                expert_p2,
                fair_p2,
                gap: fair_p2 - expert_p2,
                odds_p2: odds.p2,
            });
        }
    }

    candidates.sort_by(|a, b| b.gap.cmp(&a.gap));
    candidates.truncate(config.top_n);
    candidates
}
