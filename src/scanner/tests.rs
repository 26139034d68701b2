//! Unit tests for the value/contrarian scanners

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::analysis::{analyze, VoteTally};
    use crate::config::{ContrarianConfig, ValueScanConfig};
    use crate::ingest::{parse_odds, parse_predictions};
    use crate::types::Side;
    use rust_decimal_macros::dec;

    fn tally_of(text: &str) -> VoteTally {
        analyze(&parse_predictions(text)).tally
    }

    fn repeat_line(line: &str, n: usize) -> String {
        std::iter::repeat(format!("{line}\n")).take(n).collect()
    }

    #[test]
    fn test_unanimous_away_support_is_top_value() {
        // Scenario B: 20 experts all on P2, market fair P2 ~0.4241.
        let tally = tally_of(&repeat_line("1-(1:2,0:2)", 20));
        let book = parse_odds("1\t1.65\t2.24");

        let bets = scan_value(&tally, &book, &ValueScanConfig::default());
        assert_eq!(bets.len(), 1);

        let bet = &bets[0];
        assert_eq!(bet.slot, 1);
        assert_eq!(bet.side, Side::P2);
        assert_eq!(bet.expert_prob, dec!(1));
        assert!(bet.fair_prob > dec!(0.42) && bet.fair_prob < dec!(0.43));
        assert!(bet.value_ratio > dec!(2.35) && bet.value_ratio < dec!(2.36));
        assert_eq!(bet.side_votes, 40);
        assert_eq!(bet.total_votes, 40);
        assert_eq!(bet.odds, dec!(2.24));
    }

    #[test]
    fn test_min_votes_floor() {
        let tally = tally_of(&repeat_line("1-(0:2)", 4));
        let book = parse_odds("1\t1.65\t2.24");

        let strict = scan_value(&tally, &book, &ValueScanConfig::default());
        assert!(strict.is_empty());

        let relaxed = ValueScanConfig {
            min_votes: 0,
            ..Default::default()
        };
        let bets = scan_value(&tally, &book, &relaxed);
        assert_eq!(bets.len(), 1);
        assert_eq!(bets[0].side_votes, 4);
    }

    #[test]
    fn test_min_odds_floor_is_strict() {
        // P2 fully backed by experts and valuable, but odds 1.45 does not
        // strictly exceed the floor.
        let tally = tally_of(&repeat_line("1-(1:2,0:2)", 10));
        let book = parse_odds("1\t4.50\t1.45");
        assert!(scan_value(&tally, &book, &ValueScanConfig::default()).is_empty());

        let book = parse_odds("1\t4.50\t1.46");
        assert_eq!(scan_value(&tally, &book, &ValueScanConfig::default()).len(), 1);
    }

    #[test]
    fn test_value_ratio_threshold_inclusive() {
        let tally = tally_of(&repeat_line("1-(1:2,0:2)", 10));
        let book = parse_odds("1\t1.65\t2.24");

        // Ratio ~2.36 clears an exact-match threshold but not a higher one.
        let at = ValueScanConfig {
            min_value_ratio: dec!(2.0),
            ..Default::default()
        };
        assert_eq!(scan_value(&tally, &book, &at).len(), 1);

        let above = ValueScanConfig {
            min_value_ratio: dec!(2.5),
            ..Default::default()
        };
        assert!(scan_value(&tally, &book, &above).is_empty());
    }

    #[test]
    fn test_expert_must_beat_fair_probability() {
        // Experts split 50/50 against coin-flip odds: expert probability
        // never strictly exceeds fair probability on either side.
        let tally = tally_of(&format!(
            "{}{}",
            repeat_line("1-(2:0)", 10),
            repeat_line("1-(0:2)", 10)
        ));
        let book = parse_odds("1\t1.90\t1.90");
        assert!(scan_value(&tally, &book, &ValueScanConfig::default()).is_empty());
    }

    #[test]
    fn test_slots_without_odds_or_votes_yield_nothing() {
        let tally = tally_of(&repeat_line("1-(1:2,0:2)", 10));
        // Odds only for slot 2, votes only for slot 1.
        let book = parse_odds("2\t1.65\t2.24");
        assert!(scan_value(&tally, &book, &ValueScanConfig::default()).is_empty());
        assert!(scan_contrarian(&tally, &book, &ContrarianConfig::default()).is_empty());
    }

    #[test]
    fn test_invalid_odds_skipped() {
        let tally = tally_of(&repeat_line("1-(1:2,0:2)", 10));
        let book = parse_odds("1\t0.95\t2.24");
        assert!(scan_value(&tally, &book, &ValueScanConfig::default()).is_empty());
        assert!(scan_contrarian(&tally, &book, &ContrarianConfig::default()).is_empty());
    }

    #[test]
    fn test_slot_15_outside_analysis_window() {
        let tally = tally_of(&repeat_line("15-(1:2,0:2)", 20));
        let book = parse_odds("15\t1.65\t2.24");
        assert!(scan_value(&tally, &book, &ValueScanConfig::default()).is_empty());
    }

    #[test]
    fn test_candidates_sorted_by_value_ratio_descending() {
        // Slot 1 unanimous (ratio ~2.36), slot 2 at 75% support
        // (ratio ~1.77).
        let text = format!(
            "{}{}{}",
            repeat_line("1-(1:2,0:2)", 10),
            repeat_line("2-(0:2)", 15),
            repeat_line("2-(2:0)", 5)
        );
        let tally = tally_of(&text);
        let book = parse_odds("1\t1.65\t2.24\n2\t1.65\t2.24");

        let bets = scan_value(&tally, &book, &ValueScanConfig::default());
        assert_eq!(bets.len(), 2);
        assert_eq!(bets[0].slot, 1);
        assert!(bets[0].value_ratio > bets[1].value_ratio);

        let top_one = ValueScanConfig {
            top_n: 1,
            ..Default::default()
        };
        let bets = scan_value(&tally, &book, &top_one);
        assert_eq!(bets.len(), 1);
        assert_eq!(bets[0].slot, 1);
    }

    #[test]
    fn test_contrarian_flags_expert_overconfidence() {
        // Experts unanimous on P1, market close to a coin flip.
        let tally = tally_of(&repeat_line("1-(2:0)", 20));
        let book = parse_odds("1\t1.90\t1.90");

        let candidates = scan_contrarian(&tally, &book, &ContrarianConfig::default());
        assert_eq!(candidates.len(), 1);

        let c = &candidates[0];
        assert_eq!(c.slot, 1);
        assert_eq!(c.expert_p1, dec!(1));
        assert_eq!(c.expert_p2, dec!(0));
        assert_eq!(c.fair_p2, dec!(0.5));
        assert_eq!(c.gap, dec!(0.5));
        assert_eq!(c.odds_p2, dec!(1.90));
    }

    #[test]
    fn test_contrarian_requires_meaningful_market_weight() {
        // Market agrees with the experts: fair P2 well under 0.45.
        let tally = tally_of(&repeat_line("1-(2:0)", 20));
        let book = parse_odds("1\t1.30\t3.50");
        assert!(scan_contrarian(&tally, &book, &ContrarianConfig::default()).is_empty());
    }

    #[test]
    fn test_contrarian_requires_expert_confidence_in_p1() {
        // Only 60% of votes on P1: below the 0.70 gate.
        let tally = tally_of(&format!(
            "{}{}",
            repeat_line("1-(2:0)", 12),
            repeat_line("1-(0:2)", 8)
        ));
        let book = parse_odds("1\t1.90\t1.90");
        assert!(scan_contrarian(&tally, &book, &ContrarianConfig::default()).is_empty());
    }

    #[test]
    fn test_contrarian_fair_must_exceed_expert_p2_with_margin() {
        // Experts: 80% P1, 20% P2. Fair P2 = 0.5 > 0.2 * 1.1 → flagged.
        let tally = tally_of(&format!(
            "{}{}",
            repeat_line("1-(2:0)", 16),
            repeat_line("1-(0:2)", 4)
        ));
        let book = parse_odds("1\t1.90\t1.90");
        let candidates = scan_contrarian(&tally, &book, &ContrarianConfig::default());
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].gap, dec!(0.3));

        // Raise the multiplier until the margin fails.
        let strict = ContrarianConfig {
            fair_over_expert: dec!(2.6),
            ..Default::default()
        };
        assert!(scan_contrarian(&tally, &book, &strict).is_empty());
    }

    #[test]
    fn test_contrarian_sorted_by_gap_descending() {
        let text = format!(
            "{}{}{}",
            repeat_line("1-(2:0)", 10),
            repeat_line("2-(2:0)", 8),
            repeat_line("2-(0:2)", 2)
        );
        let tally = tally_of(&text);
        let book = parse_odds("1\t1.90\t1.90\n2\t1.90\t1.90");

        let candidates = scan_contrarian(&tally, &book, &ContrarianConfig::default());
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].slot, 1);
        assert!(candidates[0].gap > candidates[1].gap);
    }
}
