//! Evaluate one planting scenario from the command line
//!
//! Run with: cargo run --bin evaluate -- --rainfall 120 --temp 25 --soil loam --days 20 --lang en

use anyhow::{Context, Result};
use clap::Parser;
use smart_maize::{render_report, Language, ReportFormat, ScenarioInput, SoilType};
use tracing::Level;

#[derive(Parser)]
#[command(name = "evaluate")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Maize planting advisor: evaluate one scenario", long_about = None)]
struct Cli {
    /// Expected rainfall (mm), clamped to 0-1000
    #[arg(long, default_value_t = 120.0, allow_negative_numbers = true)]
    rainfall: f64,

    /// Average temperature (°C), clamped to -10..50
    #[arg(long, default_value_t = 25.0, allow_negative_numbers = true)]
    temp: f64,

    /// Soil type: loam, clay or sandy (franco, argiloso, arenoso also accepted)
    #[arg(long, default_value = "loam")]
    soil: SoilType,

    /// Days since planting, clamped to 0-120
    #[arg(long, default_value_t = 20, allow_negative_numbers = true)]
    days: i64,

    /// Report language: pt, en or fr
    #[arg(long, env = "DEFAULT_LANG", default_value = "pt")]
    lang: Language,

    /// Output format: markdown, json or html
    #[arg(long, default_value = "markdown")]
    format: ReportFormat,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let input = ScenarioInput::clamped(cli.rainfall, cli.temp, cli.soil, cli.days);
    if input.rainfall_mm != cli.rainfall || input.avg_temp_c != cli.temp || i64::from(input.days_since_planting) != cli.days {
        tracing::warn!("Inputs clamped to {:?}", input);
    }

    let report = render_report(&input, cli.lang, cli.format)
        .with_context(|| format!("Failed to render {} report", cli.format))?;
    println!("{}", report);

    Ok(())
}
