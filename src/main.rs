/// `chatmeter` - chat compatibility analyzer
///
/// This program is free software: you can redistribute it and/or modify
/// it under the terms of the GNU General Public License as published by
/// the Free Software Foundation, either version 3 of the License, or
/// (at your option) any later version.
///
/// This program is distributed in the hope that it will be useful,
/// but WITHOUT ANY WARRANTY; without even the implied warranty of
/// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
/// GNU General Public License for more details.
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use chatmeter::analysis::{analyze, AnalysisEvent};
use chatmeter::classify::RemoteClassifier;
use chatmeter::score::{ScoreResult, ScoringConfig};

#[derive(Parser, Debug)]
#[command(name = "chatmeter")]
#[command(version)]
#[command(about = "Score two-person chat compatibility from an exported transcript", long_about = None)]
struct Args {
    /// Path to the exported chat transcript (.txt)
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Base URL of the sentiment classification server
    #[arg(long, default_value = "http://localhost:8080")]
    endpoint: String,

    /// Per-request classifier timeout in seconds
    #[arg(long, default_value_t = 60)]
    timeout: u64,

    /// JSON file overriding the scoring constants
    #[arg(long, value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Print the full result bundle as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    // RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    info!(
        "chatmeter starting up (version {})",
        env!("CARGO_PKG_VERSION")
    );

    let config = match &args.config {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("cannot read config file {}", path.display()))?;
            serde_json::from_str::<ScoringConfig>(&contents)
                .with_context(|| format!("invalid config file {}", path.display()))?
        }
        None => ScoringConfig::default(),
    };

    // Lossy conversion keeps going over stray non-UTF-8 bytes in exports
    let bytes = std::fs::read(&args.file)
        .with_context(|| format!("cannot read transcript {}", args.file.display()))?;
    let content = String::from_utf8_lossy(&bytes);

    let classifier = RemoteClassifier::new(&args.endpoint, args.timeout)
        .context("failed to build classifier client")?;

    let result = analyze(&content, &classifier, &config, |event| match event {
        AnalysisEvent::Truncated { original, limit } => {
            warn!("transcript has {original} messages; analyzing the last {limit} only");
        }
        AnalysisEvent::ClassifyProgress { done, total } => {
            info!("classifying... ({done}/{total})");
        }
    })
    .context("analysis failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_summary(&result);
    }

    Ok(())
}

fn print_summary(result: &ScoreResult) {
    let verdict = if result.final_score > 80.0 {
        "strong match"
    } else if result.final_score > 60.0 {
        "good match"
    } else {
        "neutral, needs work"
    };

    println!("Compatibility score: {:.1}% ({verdict})", result.final_score);
    println!(
        "  positivity {:.1} / balance {:.1}",
        result.positivity, result.balance
    );
    for participant in &result.participants {
        println!(
            "  {}: {} messages, mean polarity {:+.2}",
            participant.name, participant.message_count, participant.mean_polarity
        );
    }
}
