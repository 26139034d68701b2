//! Report generation
//!
//! The report is the sole interface handed to presentation layers: a
//! structured, serializable value plus a flattened plain-text rendering for
//! export. Missing odds degrade the value/contrarian sections to "skipped"
//! instead of erroring.

use crate::analysis::{analyze, PatternKind};
use crate::config::Config;
use crate::error::{AnalysisError, Result};
use crate::ingest::{parse_odds, parse_predictions};
use crate::scanner::{scan_contrarian, scan_value, ContrarianCandidate, ValueBetCandidate};
use crate::types::{Outcome, ANALYSIS_SLOTS};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::fmt::Write as _;

/// One row of the vote-distribution table.
#[derive(Debug, Clone, Serialize)]
pub struct DistributionRow {
    pub slot: u8,
    #[serde(rename = "2:0")]
    pub two_nil: u32,
    #[serde(rename = "2:1")]
    pub two_one: u32,
    #[serde(rename = "1:2")]
    pub one_two: u32,
    #[serde(rename = "0:2")]
    pub nil_two: u32,
    pub total: u32,
}

/// Slots where one named pattern fired at least once.
#[derive(Debug, Clone, Serialize)]
pub struct PatternSection {
    pub pattern: &'static str,
    pub slots: Vec<u8>,
}

/// Full analysis result.
///
/// `value_bets`/`contrarian` are `None` when no odds were provided.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub total_experts: usize,
    pub distribution: Vec<DistributionRow>,
    pub patterns: Vec<PatternSection>,
    pub value_bets: Option<Vec<ValueBetCandidate>>,
    pub contrarian: Option<Vec<ContrarianCandidate>>,
}

impl Report {
    /// Run the full pipeline over the two raw input texts.
    ///
    /// Empty prediction text is the only hard error; everything else is
    /// silent-drop leniency inside the parsers.
    pub fn generate(predictions: &str, odds: Option<&str>, config: &Config) -> Result<Report> {
        if predictions.trim().is_empty() {
            return Err(AnalysisError::EmptyPredictions);
        }

        let parsed = parse_predictions(predictions);
        let summary = analyze(&parsed);

        let book = odds.map(parse_odds).filter(|b| !b.is_empty());
        let (value_bets, contrarian) = match &book {
            Some(book) => (
                Some(scan_value(&summary.tally, book, &config.value)),
                Some(scan_contrarian(&summary.tally, book, &config.contrarian)),
            ),
            None => {
                tracing::info!("no odds provided, skipping value/contrarian scan");
                (None, None)
            }
        };

        // Distribution covers the analysis window only; zero-total rows
        // are omitted.
        let distribution = (1..=ANALYSIS_SLOTS)
            .map(|slot| (slot, summary.tally.votes(slot)))
            .filter(|(_, votes)| votes.total() > 0)
            .map(|(slot, votes)| DistributionRow {
                slot,
                two_nil: votes.count(Outcome::TwoNil),
                two_one: votes.count(Outcome::TwoOne),
                one_two: votes.count(Outcome::OneTwo),
                nil_two: votes.count(Outcome::NilTwo),
                total: votes.total(),
            })
            .collect();

        let patterns = PatternKind::ALL
            .iter()
            .map(|kind| PatternSection {
                pattern: kind.name(),
                slots: summary.patterns.slots_with(*kind),
            })
            .filter(|section| !section.slots.is_empty())
            .collect();

        Ok(Report {
            generated_at: Utc::now(),
            total_experts: summary.total_experts,
            distribution,
            patterns,
            value_bets,
            contrarian,
        })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Flatten into a plain-text document.
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "Tennis Expert vs Market Analysis");
        let _ = writeln!(out, "Generated: {}", self.generated_at.format("%Y-%m-%d %H:%M UTC"));
        let _ = writeln!(out, "Experts processed: {}", self.total_experts);

        let _ = writeln!(out, "\n== Vote distribution (matches 1-{}) ==", ANALYSIS_SLOTS);
        if self.distribution.is_empty() {
            let _ = writeln!(out, "(no votes)");
        } else {
            let _ = writeln!(out, "{:>5} {:>5} {:>5} {:>5} {:>5} {:>6}", "Match", "2:0", "2:1", "1:2", "0:2", "Total");
            for row in &self.distribution {
                let _ = writeln!(
                    out,
                    "{:>5} {:>5} {:>5} {:>5} {:>5} {:>6}",
                    row.slot, row.two_nil, row.two_one, row.one_two, row.nil_two, row.total
                );
            }
        }

        let _ = writeln!(out, "\n== Patterns ==");
        if self.patterns.is_empty() {
            let _ = writeln!(out, "(none)");
        } else {
            for section in &self.patterns {
                let slots: Vec<String> = section.slots.iter().map(u8::to_string).collect();
                let _ = writeln!(out, "{}: matches [{}]", section.pattern, slots.join(", "));
            }
        }

        let _ = writeln!(out, "\n== Value bets ==");
        match &self.value_bets {
            None => {
                let _ = writeln!(out, "skipped: no odds provided");
            }
            Some(bets) if bets.is_empty() => {
                let _ = writeln!(out, "no value bets found");
            }
            Some(bets) => {
                let _ = writeln!(
                    out,
                    "{:>5} {:>4} {:>6} {:>8} {:>7} {:>6} {:>6}",
                    "Match", "Side", "Odds", "Support", "Fair", "Value", "Votes"
                );
                for bet in bets {
                    let _ = writeln!(
                        out,
                        "{:>5} {:>4} {:>6} {:>7}% {:>6}% {:>5}x {:>3}/{}",
                        bet.slot,
                        bet.side,
                        bet.odds,
                        percent(bet.expert_prob),
                        percent(bet.fair_prob),
                        bet.value_ratio.round_dp(2),
                        bet.side_votes,
                        bet.total_votes,
                    );
                }
            }
        }

        let _ = writeln!(out, "\n== Contrarian ==");
        match &self.contrarian {
            None => {
                let _ = writeln!(out, "skipped: no odds provided");
            }
            Some(candidates) if candidates.is_empty() => {
                let _ = writeln!(out, "no contrarian candidates found");
            }
            Some(candidates) => {
                for c in candidates {
                    let _ = writeln!(
                        out,
                        "match {}: experts back P1 at {}%, market fair P2 {}% (odds {}), gap {}%",
                        c.slot,
                        percent(c.expert_p1),
                        percent(c.fair_p2),
                        c.odds_p2,
                        percent(c.gap),
                    );
                }
            }
        }

        out
    }
}

fn percent(p: Decimal) -> Decimal {
    (p * dec!(100)).round_dp(1)
}
