//! # trendfix
//!
//! Command-line interface for download series correction.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use correction::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "trendfix")]
#[command(about = "Download series smoothing and anomaly correction", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Correct a JSON download series
    Correct {
        /// Input file with a JSON array of points ("-" for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Series granularity (daily, weekly, monthly, yearly)
        #[arg(short, long)]
        granularity: Granularity,

        /// Package name to look up in the anomaly table
        #[arg(short, long)]
        package: Option<String>,

        /// Moving average half-window (0 = disabled)
        #[arg(long, default_value_t = 0)]
        average_window: usize,

        /// Smoothing time constant (0 = disabled)
        #[arg(long, default_value_t = 0.0)]
        smoothing_tau: f64,

        /// Anomaly table JSON file (defaults to the builtin table)
        #[arg(long, env = "TRENDFIX_ANOMALIES")]
        anomalies: Option<PathBuf>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List known anomaly date ranges for packages
    Anomalies {
        /// Package names
        #[arg(required = true)]
        packages: Vec<String>,

        /// Anomaly table JSON file (defaults to the builtin table)
        #[arg(long, env = "TRENDFIX_ANOMALIES")]
        anomalies: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trendfix=info,correction_core=info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Correct {
            input,
            granularity,
            package,
            average_window,
            smoothing_tau,
            anomalies,
            output,
        } => {
            let settings = FilterSettings::new(average_window, smoothing_tau);
            settings.validate()?;
            let table = load_table(anomalies.as_deref())?;
            let series = read_series(&input)?;
            tracing::info!(points = series.len(), %granularity, "correcting series");

            let corrected =
                correct_series(&series, package.as_deref(), granularity, &settings, &table);
            let json = serde_json::to_string_pretty(&corrected)?;
            write_output(output.as_deref(), &json)?;
        }
        Commands::Anomalies {
            packages,
            anomalies,
        } => {
            let table = load_table(anomalies.as_deref())?;
            let spans = table.spans_for_packages(&packages);
            tracing::info!(packages = packages.len(), found = spans.len(), "anomaly lookup");
            write_output(None, &serde_json::to_string_pretty(&spans)?)?;
        }
    }

    Ok(())
}

/// Anomaly correction (when a package is given) followed by smoothing.
fn correct_series(
    series: &[EvolutionPoint],
    package: Option<&str>,
    granularity: Granularity,
    settings: &FilterSettings,
    table: &AnomalyTable,
) -> Vec<EvolutionPoint> {
    let fixed = match package {
        Some(name) => apply_blocklist_correction(table, series, name, granularity),
        None => std::borrow::Cow::Borrowed(series),
    };
    apply_data_correction(&fixed[..], settings).into_owned()
}

fn load_table(path: Option<&Path>) -> anyhow::Result<AnomalyTable> {
    match path {
        Some(path) => AnomalyTable::from_path(path)
            .with_context(|| format!("failed to load anomaly table {}", path.display())),
        None => Ok(AnomalyTable::builtin()),
    }
}

fn read_series(input: &Path) -> anyhow::Result<Vec<EvolutionPoint>> {
    let json = if input.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read series from stdin")?;
        buf
    } else {
        fs::read_to_string(input)
            .with_context(|| format!("failed to read series {}", input.display()))?
    };
    serde_json::from_str(&json).context("series must be a JSON array of points")
}

fn write_output(output: Option<&Path>, json: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => fs::write(path, json)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => writeln!(io::stdout().lock(), "{json}")?,
    }
    Ok(())
}
