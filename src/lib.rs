//! Tennis Expert vs Market Analysis
//!
//! Ingests free-text expert set-score predictions and bookmaker odds for a
//! card of tennis matches, then derives consensus patterns and value-bet
//! candidates where expert opinion diverges from the de-vigged market.
//!
//! ## Architecture
//!
//! ```text
//! Ingest (predictions / odds text) → Analysis (vote tally, patterns)
//!                                         ↓
//!                               Scanner (value, contrarian)
//!                                         ↓
//!                                 Report (text / JSON)
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod ingest;
pub mod report;
pub mod scanner;
pub mod types;

#[cfg(test)]
mod config_tests;
