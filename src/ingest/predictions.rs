//! Expert prediction parser
//!
//! Input is one line per expert. A line may carry several match fragments of
//! the form `N-(2:0,2:1)` separated by arbitrary text. Blank lines and lines
//! starting with `#` are skipped.

use crate::types::{ExpertSubmission, Outcome, PredictionRecord, MAX_SLOT};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

static RE_FRAGMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+-\([^)]+\)").unwrap());
static RE_PART: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+)-\((.+)\)$").unwrap());

/// Parsed prediction input: the submissions plus the expert headcount.
///
/// A line counts as one expert as soon as it carries at least one
/// fragment-shaped substring, even if every fragment then fails to parse.
/// Multiple fragments on one line are still a single expert.
#[derive(Debug, Clone, Default)]
pub struct ParsedPredictions {
    pub submissions: Vec<ExpertSubmission>,
    pub total_experts: usize,
}

/// Parse the full prediction text into expert submissions.
pub fn parse_predictions(text: &str) -> ParsedPredictions {
    let mut parsed = ParsedPredictions::default();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fragments: Vec<&str> = RE_FRAGMENT.find_iter(line).map(|m| m.as_str()).collect();
        if fragments.is_empty() {
            continue;
        }

        parsed.total_experts += 1;

        let mut submission = ExpertSubmission::default();
        for fragment in fragments {
            match parse_fragment(fragment) {
                Some(record) => submission.records.push(record),
                None => tracing::debug!("dropped malformed fragment: {}", fragment),
            }
        }
        parsed.submissions.push(submission);
    }

    parsed
}

/// Parse a single `N-(...)` fragment into a prediction record.
///
/// Returns `None` when the slot is outside `1..=15` or no valid outcome
/// token survives filtering.
pub fn parse_fragment(fragment: &str) -> Option<PredictionRecord> {
    let caps = RE_PART.captures(fragment.trim())?;

    let slot: u8 = caps[1].parse().ok()?;
    if !(1..=MAX_SLOT).contains(&slot) {
        return None;
    }

    let outcomes: BTreeSet<Outcome> = caps[2]
        .split(',')
        .filter_map(|token| token.trim().parse().ok())
        .collect();

    if outcomes.is_empty() {
        return None;
    }

    Some(PredictionRecord { slot, outcomes })
}
