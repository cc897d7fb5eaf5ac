//! Command-line interface components.

use crate::config::{AnalysisConfig, TzOffset};
use crate::models::{AnalysisReport, ProcessingStats};
use crate::processor::discovery::discover_inputs;
use crate::processor::{BatchProcessor, FileAnalysis, ReportAnalyzer};
use crate::report::render_table;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Parser, Debug)]
#[command(name = "seastate")]
#[command(about = "Turn marine forecast report text into GO / NO-GO operating windows")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Report text files, directories or glob patterns
    #[arg(value_name = "INPUTS", required = true)]
    pub inputs: Vec<String>,

    /// Fixed UTC offset for all timestamps, e.g. +04:00
    #[arg(long, value_name = "OFFSET", allow_hyphen_values = true)]
    pub tz_offset: Option<String>,

    /// Maximum mean wind speed at 50 m in knots
    #[arg(long = "ws50m-max", value_name = "KNOTS")]
    pub ws50m_max: Option<f64>,

    /// Maximum significant wave height in feet
    #[arg(long = "hs-max", value_name = "FT")]
    pub hs_max: Option<f64>,

    /// Maximum peak period in seconds
    #[arg(long = "tp-max", value_name = "S")]
    pub tp_max: Option<f64>,

    /// Minimum consecutive passing points that form a window (values below 1 mean 1)
    #[arg(long = "min-points", value_name = "N", allow_negative_numbers = true)]
    pub min_points: Option<i64>,

    /// JSON configuration file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format for results printed to stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write JSON results to a file, or a directory when several inputs are given
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Output format for analysis results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Coloured GO / NO-GO table
    Table,
    /// Pretty-printed JSON
    Json,
}

impl Args {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("seastate_processor={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
}

/// Load the config file and apply command-line overrides on top
pub fn build_config(args: &Args) -> Result<AnalysisConfig> {
    let mut config = AnalysisConfig::load(args.config.as_deref())
        .context("Failed to load configuration")?;

    if let Some(offset) = &args.tz_offset {
        config = config.with_tz_offset(TzOffset::parse(offset)?);
    }
    if let Some(max) = args.ws50m_max {
        config.thresholds.ws50m_max_knots = max;
    }
    if let Some(max) = args.hs_max {
        config.thresholds.hs_max_ft = max;
    }
    if let Some(max) = args.tp_max {
        config.thresholds.tp_max_s = max;
    }
    if let Some(points) = args.min_points {
        config = config.with_min_consecutive_points(points);
    }

    config.validate()?;
    Ok(config)
}

/// Discover inputs, analyse them and emit results
pub async fn run(args: Args) -> Result<ProcessingStats> {
    setup_logging(&args);
    debug!("Command line arguments: {:?}", args);

    let config = build_config(&args)?;
    debug!("Using configuration: {:?}", config);

    let files = discover_inputs(&args.inputs).context("Failed to resolve inputs")?;
    info!("Analysing {} report files", files.len());

    let processor = BatchProcessor::new(ReportAnalyzer::new(config)?);
    let (analyses, mut stats) = processor.process_files(&files).await;

    match &args.output {
        Some(output) => {
            stats.output_path = Some(output.clone());
            write_outputs(output, &analyses)?;
        }
        None => print_results(&analyses, args.format)?,
    }

    print_summary(&stats);

    if stats.files_failed > 0 {
        anyhow::bail!(
            "{} of {} report files could not be analysed",
            stats.files_failed,
            analyses.len()
        );
    }

    Ok(stats)
}

fn print_results(analyses: &[FileAnalysis], format: OutputFormat) -> Result<()> {
    let successful: Vec<(&Path, &AnalysisReport)> = analyses
        .iter()
        .filter_map(|a| a.result.as_ref().ok().map(|r| (a.path.as_path(), r)))
        .collect();

    match format {
        OutputFormat::Json => {
            if let [(_, report)] = successful.as_slice() {
                println!("{}", serde_json::to_string_pretty(report)?);
            } else {
                let keyed: serde_json::Map<String, serde_json::Value> = successful
                    .iter()
                    .map(|(path, report)| -> Result<(String, serde_json::Value)> {
                        Ok((path.display().to_string(), serde_json::to_value(report)?))
                    })
                    .collect::<Result<_>>()?;
                println!("{}", serde_json::to_string_pretty(&keyed)?);
            }
        }
        OutputFormat::Table => {
            for (path, report) in &successful {
                if successful.len() > 1 {
                    println!("{}", path.display().to_string().bright_cyan().bold());
                }
                println!("{}", render_table(report));
            }
        }
    }

    Ok(())
}

/// One input writes to the given file; several inputs write `<stem>.json`
/// files into the given directory
fn write_outputs(output: &Path, analyses: &[FileAnalysis]) -> Result<()> {
    if let [analysis] = analyses {
        if let Ok(report) = &analysis.result {
            return write_report(output, report);
        }
        return Ok(());
    }

    std::fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory {}", output.display()))?;

    let successful: Vec<(&Path, &AnalysisReport)> = analyses
        .iter()
        .filter_map(|a| a.result.as_ref().ok().map(|r| (a.path.as_path(), r)))
        .collect();
    let paths: Vec<&Path> = successful.iter().map(|(path, _)| *path).collect();

    for ((_, report), name) in successful.iter().zip(output_file_names(&paths)) {
        write_report(&output.join(name), report)?;
    }

    Ok(())
}

/// `<stem>.json` per input; repeated stems get `-2`, `-3`, ... suffixes
/// in input order so no result overwrites another
fn output_file_names(paths: &[&Path]) -> Vec<String> {
    let mut used = HashSet::new();

    paths
        .iter()
        .map(|path| {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_else(|| "report".to_string());

            let base = format!("{}.json", stem);
            let mut name = base.clone();
            let mut suffix = 2;
            while !used.insert(name.clone()) {
                name = format!("{}-{}.json", stem, suffix);
                suffix += 1;
            }

            if name != base {
                warn!("{} already written, saving {} as {}", base, path.display(), name);
            }
            name
        })
        .collect()
}

fn write_report(path: &Path, report: &AnalysisReport) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write results to {}", path.display()))?;

    info!("Wrote results to {}", path.display());
    Ok(())
}

fn print_summary(stats: &ProcessingStats) {
    eprintln!();
    eprintln!("{}", "Analysis complete".bright_green().bold());
    eprintln!("   • Files analysed: {}", stats.files_processed);
    eprintln!("   • Forecast points: {}", stats.total_points);
    eprintln!("   • Operating windows: {}", stats.total_windows);
    eprintln!("   • Processing time: {} ms", stats.processing_time_ms);

    if stats.files_without_points > 0 {
        warn!("{} files produced no forecast points", stats.files_without_points);
        eprintln!(
            "   {} {}",
            "Files without points:".yellow(),
            stats.files_without_points
        );
    }
    if stats.files_failed > 0 {
        eprintln!("   {} {}", "Files failed:".red(), stats.files_failed);
    }
    if let Some(path) = &stats.output_path {
        eprintln!("   • Output: {}", path.display());
    }
}
