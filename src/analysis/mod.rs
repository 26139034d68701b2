//! Vote tabulation and pattern classification
//!
//! Single pass over all parsed submissions: every outcome in a record bumps
//! the per-slot vote tally, and the record's outcome-set as a whole is
//! matched against the ten named consensus patterns.

pub mod pattern;


pub use pattern::{classify, PatternKind};

use crate::ingest::ParsedPredictions;
use crate::types::{Outcome, Side, MAX_SLOT};
use std::collections::BTreeMap;

/// Vote counts for one match slot, indexed by [`Outcome::index`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchVotes {
    counts: [u32; 4],
}

impl MatchVotes {
    pub fn count(&self, outcome: Outcome) -> u32 {
        self.counts[outcome.index()]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Votes for outcomes where the given side wins the match.
    pub fn side_votes(&self, side: Side) -> u32 {
        Outcome::ALL
            .iter()
            .filter(|o| o.side() == side)
            .map(|o| self.count(*o))
            .sum()
    }

    fn add(&mut self, outcome: Outcome) {
        self.counts[outcome.index()] += 1;
    }
}

/// Per-slot vote distribution across all experts.
///
/// Built fresh per analysis run, mutated only during the tabulation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoteTally {
    slots: BTreeMap<u8, MatchVotes>,
}

impl VoteTally {
    pub fn votes(&self, slot: u8) -> MatchVotes {
        self.slots.get(&slot).copied().unwrap_or_default()
    }

    pub fn count(&self, slot: u8, outcome: Outcome) -> u32 {
        self.votes(slot).count(outcome)
    }
}

/// Per-slot hit counts for the ten named patterns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternCounters {
    counters: BTreeMap<PatternKind, BTreeMap<u8, u32>>,
}

impl PatternCounters {
    pub fn count(&self, kind: PatternKind, slot: u8) -> u32 {
        self.counters
            .get(&kind)
            .and_then(|slots| slots.get(&slot))
            .copied()
            .unwrap_or(0)
    }

    /// Slots (ascending) where the pattern fired at least once.
    pub fn slots_with(&self, kind: PatternKind) -> Vec<u8> {
        self.counters
            .get(&kind)
            .map(|slots| slots.keys().copied().collect())
            .unwrap_or_default()
    }

    fn increment(&mut self, kind: PatternKind, slot: u8) {
        *self
            .counters
            .entry(kind)
            .or_default()
            .entry(slot)
            .or_insert(0) += 1;
    }
}

/// Output of the classification pass. Read-only after construction.
#[derive(Debug, Clone, Default)]
pub struct AnalysisSummary {
    pub tally: VoteTally,
    pub patterns: PatternCounters,
    pub total_experts: usize,
}

/// Tabulate votes and classify patterns for all submissions.
///
/// Pure function of its input: identical input yields identical summaries.
pub fn analyze(parsed: &ParsedPredictions) -> AnalysisSummary {
    let mut summary = AnalysisSummary {
        total_experts: parsed.total_experts,
        ..Default::default()
    };

    for submission in &parsed.submissions {
        for record in &submission.records {
            debug_assert!((1..=MAX_SLOT).contains(&record.slot));

            let votes = summary.tally.slots.entry(record.slot).or_default();
            for outcome in &record.outcomes {
                votes.add(*outcome);
            }

            if let Some(kind) = classify(&record.outcomes) {
                summary.patterns.increment(kind, record.slot);
            }
        }
    }

    tracing::info!(
        experts = summary.total_experts,
        slots = summary.tally.slots.len(),
        "classification pass complete"
    );

    summary
}
