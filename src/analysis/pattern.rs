//! Named consensus patterns
//!
//! Ten fixed outcome-sets get a name: five two-outcome sets, the full
//! four-outcome "anything can happen" set, and all four three-outcome sets.
//! The pair `{2:0, 1:2}` deliberately has no name. Singletons are tallied
//! in the vote distribution but never classified.

use crate::types::Outcome;
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum PatternKind {
    /// `{2:0, 2:1, 1:2, 0:2}` — experts see no edge at all.
    #[serde(rename = "full_uncertainty")]
    FullUncertainty,
    /// `{1:2, 0:2}` — away win, possibly after a third set.
    #[serde(rename = "battle_3set")]
    Battle3Set,
    /// `{2:1, 0:2}` — away leans, home only wins the long way.
    #[serde(rename = "slight_advantage_away")]
    SlightAdvantageAway,
    /// `{2:1, 1:2}` — three sets either way.
    #[serde(rename = "close_fight")]
    CloseFight,
    /// `{2:0, 0:2}` — someone sweeps, nobody knows who.
    #[serde(rename = "split_fav_vs_underdog")]
    SplitFavVsUnderdog,
    /// `{2:0, 2:1}` — home wins, margin uncertain.
    #[serde(rename = "fav_with_battle")]
    FavWithBattle,
    #[serde(rename = "triple_20_21_12")]
    Triple202112,
    #[serde(rename = "triple_20_21_02")]
    Triple202102,
    #[serde(rename = "triple_20_12_02")]
    Triple201202,
    #[serde(rename = "triple_21_12_02")]
    Triple211202,
}

impl PatternKind {
    /// Pairs (and the full set) ahead of triples, matching classification
    /// priority. Disjoint by content, so the order only fixes presentation.
    pub const ALL: [PatternKind; 10] = [
        PatternKind::FullUncertainty,
        PatternKind::Battle3Set,
        PatternKind::SlightAdvantageAway,
        PatternKind::CloseFight,
        PatternKind::SplitFavVsUnderdog,
        PatternKind::FavWithBattle,
        PatternKind::Triple202112,
        PatternKind::Triple202102,
        PatternKind::Triple201202,
        PatternKind::Triple211202,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PatternKind::FullUncertainty => "full_uncertainty",
            PatternKind::Battle3Set => "battle_3set",
            PatternKind::SlightAdvantageAway => "slight_advantage_away",
            PatternKind::CloseFight => "close_fight",
            PatternKind::SplitFavVsUnderdog => "split_fav_vs_underdog",
            PatternKind::FavWithBattle => "fav_with_battle",
            PatternKind::Triple202112 => "triple_20_21_12",
            PatternKind::Triple202102 => "triple_20_21_02",
            PatternKind::Triple201202 => "triple_20_12_02",
            PatternKind::Triple211202 => "triple_21_12_02",
        }
    }

    /// The exact outcome-set this pattern matches.
    pub fn target_set(&self) -> BTreeSet<Outcome> {
        use Outcome::*;
        let outcomes: &[Outcome] = match self {
            PatternKind::FullUncertainty => &[TwoNil, TwoOne, OneTwo, NilTwo],
            PatternKind::Battle3Set => &[OneTwo, NilTwo],
            PatternKind::SlightAdvantageAway => &[TwoOne, NilTwo],
            PatternKind::CloseFight => &[TwoOne, OneTwo],
            PatternKind::SplitFavVsUnderdog => &[TwoNil, NilTwo],
            PatternKind::FavWithBattle => &[TwoNil, TwoOne],
            PatternKind::Triple202112 => &[TwoNil, TwoOne, OneTwo],
            PatternKind::Triple202102 => &[TwoNil, TwoOne, NilTwo],
            PatternKind::Triple201202 => &[TwoNil, OneTwo, NilTwo],
            PatternKind::Triple211202 => &[TwoOne, OneTwo, NilTwo],
        };
        outcomes.iter().copied().collect()
    }
}

/// Classify an outcome-set against the ten named patterns.
///
/// At most one pattern can match (the targets are pairwise distinct sets);
/// singletons and the unnamed pair `{2:0, 1:2}` return `None`.
pub fn classify(outcomes: &BTreeSet<Outcome>) -> Option<PatternKind> {
    PatternKind::ALL
        .iter()
        .copied()
        .find(|kind| kind.target_set() == *outcomes)
}
