//! Tennis Expert vs Market Analysis CLI

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tennis_edge::{config::Config, report::Report};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tennis-edge")]
#[command(about = "Expert-consensus vs market-odds analysis for tennis cards")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full analysis and print the report
    Analyze {
        /// File with expert prediction lines
        predictions: PathBuf,
        /// File with tab-delimited odds (optional; omitting it skips the
        /// value/contrarian sections)
        #[arg(short, long)]
        odds: Option<PathBuf>,
        /// Emit the structured report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show only the named-pattern sections
    Patterns {
        /// File with expert prediction lines
        predictions: PathBuf,
    },
    /// Show only the ranked value/contrarian tables
    Value {
        /// File with expert prediction lines
        predictions: PathBuf,
        /// File with tab-delimited odds
        odds: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    match cli.command {
        Commands::Analyze {
            predictions,
            odds,
            json,
        } => {
            let report = generate(&predictions, odds.as_deref(), &config)?;
            if json {
                println!("{}", report.to_json()?);
            } else {
                print!("{}", report.to_text());
            }
        }
        Commands::Patterns { predictions } => {
            let report = generate(&predictions, None, &config)?;
            for section in &report.patterns {
                let slots: Vec<String> = section.slots.iter().map(u8::to_string).collect();
                println!("{}: matches [{}]", section.pattern, slots.join(", "));
            }
        }
        Commands::Value { predictions, odds } => {
            let report = generate(&predictions, Some(&odds), &config)?;
            let text = report.to_text();
            if let Some(tail) = text.split("== Value bets ==").nth(1) {
                print!("== Value bets =={}", tail);
            }
        }
    }

    Ok(())
}

fn generate(
    predictions: &std::path::Path,
    odds: Option<&std::path::Path>,
    config: &Config,
) -> anyhow::Result<Report> {
    let prediction_text = std::fs::read_to_string(predictions)?;
    let odds_text = odds.map(std::fs::read_to_string).transpose()?;
    Ok(Report::generate(
        &prediction_text,
        odds_text.as_deref(),
        config,
    )?)
}
