//! Energy Toolkit - production data and system log analysis
//!
//! # Usage
//!
//! ```bash
//! # Production report from a CSV export (date,production,well_id)
//! energy-toolkit production production_data.csv
//!
//! # Log report with a pattern search
//! energy-toolkit logs system.log --pattern "sensor"
//!
//! # Analyze a literal series
//! energy-toolkit series 100 105 103 500 106 108 110 --window 3
//!
//! # JSON instead of text
//! energy-toolkit --json production production_data.csv
//! ```
//!
//! # Environment Variables
//!
//! - `ENERGY_TOOLKIT_CONFIG`: Path to a TOML config file
//! - `RUST_LOG`: Logging level (default: info)

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use energy_toolkit::config::{self, ToolkitConfig};
use energy_toolkit::loader;
use energy_toolkit::report::{self, LogSummary, ProductionSummary, SeriesAnalysis};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "energy-toolkit")]
#[command(about = "Energy Data Analysis Toolkit - production and log analysis")]
#[command(version)]
struct CliArgs {
    /// Emit results as JSON instead of a text report
    #[arg(long, global = true)]
    json: bool,

    /// Path to a TOML config file (overrides ENERGY_TOOLKIT_CONFIG)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    #[command(subcommand)]
    command: Option<SubCommand>,
}

#[derive(clap::Subcommand, Debug)]
enum SubCommand {
    /// Analyze a production CSV export
    Production {
        /// CSV file with date,production,well_id columns
        csv: PathBuf,
        /// Number of top production days to list
        #[arg(long)]
        top: Option<usize>,
    },

    /// Analyze a system log file
    Logs {
        /// Plain-text log file
        log: PathBuf,
        /// Case-insensitive regular expression to search for
        #[arg(long)]
        pattern: Option<String>,
    },

    /// Analyze a series of numbers given on the command line
    Series {
        /// Values in time order
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
        /// Moving-average window
        #[arg(long)]
        window: Option<usize>,
        /// Anomaly z-score threshold
        #[arg(long)]
        threshold: Option<f64>,
    },
}

// ============================================================================
// Configuration
// ============================================================================

/// Resolve the config from `--config` or the standard search order, then
/// apply per-command overrides.
fn resolve_config(args: &CliArgs) -> Result<ToolkitConfig> {
    let mut cfg = match &args.config {
        Some(path) => ToolkitConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ToolkitConfig::load(),
    };

    match &args.command {
        Some(SubCommand::Production { top: Some(n), .. }) => cfg.analysis.top_n = *n,
        Some(SubCommand::Series { window, threshold, .. }) => {
            if let Some(w) = window {
                cfg.analysis.moving_average_window = *w;
            }
            if let Some(t) = threshold {
                cfg.analysis.anomaly_threshold = *t;
            }
        }
        _ => {}
    }

    cfg.validate().context("Invalid analysis parameters")?;
    Ok(cfg)
}

// ============================================================================
// Output
// ============================================================================

fn emit<T: serde::Serialize>(
    json: bool,
    value: &T,
    render: impl FnOnce(&T) -> String,
) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(value).context("Failed to serialize results")?
        );
    } else {
        println!("{}", render(value));
    }
    Ok(())
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() -> Result<()> {
    // Logs go to stderr so reports and JSON on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    config::init(resolve_config(&args)?);
    let cfg = config::get();

    if args.print_config {
        print!("{}", cfg.to_toml().context("Failed to render config")?);
        return Ok(());
    }

    let generated = chrono::Local::now().naive_local();

    match args.command {
        Some(SubCommand::Production { csv, .. }) => {
            info!("📂 Loading production data from: {}", csv.display());
            let records = loader::read_production_csv(&csv)?;
            let summary = ProductionSummary::build(&records, &cfg.analysis)?;
            emit(args.json, &summary, |s| {
                report::production_report(s, generated, &cfg.report)
            })?;
        }
        Some(SubCommand::Logs { log, pattern }) => {
            info!("📂 Loading log file: {}", log.display());
            let lines = loader::read_log_lines(&log)?;
            let summary = LogSummary::build(&lines, pattern.as_deref())?;
            emit(args.json, &summary, |s| {
                report::log_report(s, generated, &cfg.report)
            })?;
        }
        Some(SubCommand::Series { values, .. }) => {
            let analysis = SeriesAnalysis::build(values, &cfg.analysis)?;
            emit(args.json, &analysis, |a| {
                report::series_report(a, generated, &cfg.report)
            })?;
        }
        None => {
            println!("Energy Data Analysis Toolkit");
            println!("Run `energy-toolkit --help` for usage.");
        }
    }

    Ok(())
}
