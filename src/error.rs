//! Error types for the analysis pipeline

use thiserror::Error;

/// Analysis errors
///
/// Malformed prediction fragments and odds lines are never errors; they are
/// dropped during ingest. The only hard-stop inside the pipeline is empty
/// prediction input.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("no expert predictions provided")]
    EmptyPredictions,

    #[error("config error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
