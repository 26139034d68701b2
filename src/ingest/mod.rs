//! Free-text ingest
//!
//! Turns the two untrusted input texts (expert predictions, bookmaker odds)
//! into structured records. Malformed fragments and lines are dropped
//! silently; nothing in here returns an error.

mod odds;
mod predictions;


pub use odds::{parse_odds, OddsBook};
pub use predictions::{parse_fragment, parse_predictions, ParsedPredictions};
