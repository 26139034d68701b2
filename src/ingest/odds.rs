//! Bookmaker odds parser
//!
//! One line per match: `slot<TAB>odds_p1<TAB>odds_p2`. Extra tab-separated
//! fields are ignored; any parse failure drops the whole line.

use crate::types::OddsPair;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Odds by match slot.
pub type OddsBook = HashMap<u8, OddsPair>;

/// Parse tab-delimited odds text. Later lines for the same slot overwrite
/// earlier ones.
pub fn parse_odds(text: &str) -> OddsBook {
    let mut book = OddsBook::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || !line.contains('\t') {
            continue;
        }

        let fields: Vec<&str> = line
            .split('\t')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .collect();
        if fields.len() < 3 {
            continue;
        }

        let parsed = (
            fields[0].parse::<u8>(),
            fields[1].parse::<Decimal>(),
            fields[2].parse::<Decimal>(),
        );
        match parsed {
            (Ok(slot), Ok(p1), Ok(p2)) => {
                book.insert(slot, OddsPair::new(p1, p2));
            }
            _ => tracing::debug!("dropped malformed odds line: {}", line),
        }
    }

    book
}
