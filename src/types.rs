//! Core data types shared across the analysis pipeline

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Highest match slot accepted by the prediction parser.
pub const MAX_SLOT: u8 = 15;

/// Downstream analysis windows (distribution table, value scan) only look at
/// slots 1..=ANALYSIS_SLOTS even though slot 15 is parsed and tallied.
pub const ANALYSIS_SLOTS: u8 = 14;

/// One of the four fixed set-score results for a best-of-three match.
///
/// Closed set; unknown tokens are filtered out during ingest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(rename = "2:0")]
    TwoNil,
    #[serde(rename = "2:1")]
    TwoOne,
    #[serde(rename = "1:2")]
    OneTwo,
    #[serde(rename = "0:2")]
    NilTwo,
}

impl Outcome {
    pub const ALL: [Outcome; 4] = [
        Outcome::TwoNil,
        Outcome::TwoOne,
        Outcome::OneTwo,
        Outcome::NilTwo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::TwoNil => "2:0",
            Outcome::TwoOne => "2:1",
            Outcome::OneTwo => "1:2",
            Outcome::NilTwo => "0:2",
        }
    }

    /// Which player wins the match under this set score.
    pub fn side(&self) -> Side {
        match self {
            Outcome::TwoNil | Outcome::TwoOne => Side::P1,
            Outcome::OneTwo | Outcome::NilTwo => Side::P2,
        }
    }

    /// Tally array index, in `ALL` order.
    pub fn index(&self) -> usize {
        match self {
            Outcome::TwoNil => 0,
            Outcome::TwoOne => 1,
            Outcome::OneTwo => 2,
            Outcome::NilTwo => 3,
        }
    }
}

impl FromStr for Outcome {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "2:0" => Ok(Outcome::TwoNil),
            "2:1" => Ok(Outcome::TwoOne),
            "1:2" => Ok(Outcome::OneTwo),
            "0:2" => Ok(Outcome::NilTwo),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Match winner side (P1 = home/favorite column in the odds feed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    #[serde(rename = "p1")]
    P1,
    #[serde(rename = "p2")]
    P2,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::P1 => f.write_str("P1"),
            Side::P2 => f.write_str("P2"),
        }
    }
}

/// One expert's guess for one match: a non-empty set of outcomes.
///
/// Duplicates within a fragment collapse; order is irrelevant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionRecord {
    pub slot: u8,
    pub outcomes: BTreeSet<Outcome>,
}

/// One qualifying input line: everything a single expert submitted.
///
/// `records` may be empty when every fragment on the line failed to parse;
/// the line still counts toward the expert total.
#[derive(Debug, Clone, Default)]
pub struct ExpertSubmission {
    pub records: Vec<PredictionRecord>,
}

/// Decimal odds for the two match-winner sides of one slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OddsPair {
    pub p1: Decimal,
    pub p2: Decimal,
}

impl OddsPair {
    pub fn new(p1: Decimal, p2: Decimal) -> Self {
        Self { p1, p2 }
    }

    pub fn for_side(&self, side: Side) -> Decimal {
        match side {
            Side::P1 => self.p1,
            Side::P2 => self.p2,
        }
    }

    /// Bookmaker overround: `1/p1 + 1/p2`. Strictly > 1 for real odds.
    pub fn implied_total(&self) -> Option<Decimal> {
        if self.p1 <= Decimal::ONE || self.p2 <= Decimal::ONE {
            return None;
        }
        Some(Decimal::ONE / self.p1 + Decimal::ONE / self.p2)
    }

    /// De-vigged (fair) probabilities for both sides.
    ///
    /// Returns `None` unless both odds are strictly greater than 1, the
    /// validation boundary for nonsensical decimal odds. The two fair
    /// probabilities sum to exactly 1.
    pub fn fair_probabilities(&self) -> Option<(Decimal, Decimal)> {
        let total = self.implied_total()?;
        let fair_p1 = (Decimal::ONE / self.p1) / total;
        Some((fair_p1, Decimal::ONE - fair_p1))
    }
}
