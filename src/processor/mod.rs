//! Report analysis pipeline.
//!
//! [`ReportAnalyzer`] runs one document start to finish: parse, classify,
//! aggregate windows and derive the current status. It is synchronous and
//! keeps no state between calls.
//!
//! [`BatchProcessor`] analyses several report files independently with
//! bounded concurrency. Results come back in input order and are never
//! reconciled across files.

pub mod discovery;

#[cfg(test)]
pub mod tests;

use crate::config::AnalysisConfig;
use crate::error::{Result, SeaStateError};
use crate::models::{AnalysisReport, ProcessingStats, ReportText};
use crate::parser::ForecastParser;
use crate::rules::evaluate_all;
use crate::windows::{build_windows, current_status};

use chrono::{Datelike, Utc};
use futures::stream::{self, StreamExt};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tokio::task;
use tracing::{debug, error, warn};

/// Single-document analysis pipeline
#[derive(Debug, Clone)]
pub struct ReportAnalyzer {
    config: AnalysisConfig,
    parser: ForecastParser,
    min_points: usize,
}

impl ReportAnalyzer {
    /// Create an analyzer, validating the configuration once up front
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        let min_points = config.effective_min_points();

        Ok(Self {
            parser: ForecastParser::new(config.tz_offset.clone()),
            config,
            min_points,
        })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyse a document, using the current calendar year if it carries no date stamp
    pub fn analyze(&self, report: &ReportText) -> AnalysisReport {
        self.analyze_with_year(report, Utc::now().year())
    }

    /// Analyse raw extractor output with pages separated by form feeds
    pub fn analyze_text(&self, text: &str) -> AnalysisReport {
        self.analyze(&ReportText::from_extracted(text))
    }

    /// Analyse a document with an explicit fallback year
    pub fn analyze_with_year(&self, report: &ReportText, fallback_year: i32) -> AnalysisReport {
        let parsed = self.parser.parse(report, fallback_year);

        if parsed.observations.is_empty() {
            warn!(
                "No forecast rows recognised in {} lines; report layout may need retuning",
                parsed.stats.lines_scanned
            );
        }

        let points = evaluate_all(parsed.observations, &self.config.thresholds);
        let windows = build_windows(&points, self.min_points);
        let now = current_status(&points);

        debug!(
            "Classified {} points ({} passing), {} windows",
            points.len(),
            points.iter().filter(|p| p.passed).count(),
            windows.len()
        );

        AnalysisReport {
            thresholds: self.config.thresholds,
            count_points: points.len(),
            now,
            next_window: windows.first().cloned(),
            windows,
            points,
            parse_stats: parsed.stats,
        }
    }
}

/// Outcome of analysing one input file
#[derive(Debug)]
pub struct FileAnalysis {
    pub path: PathBuf,
    pub result: Result<AnalysisReport>,
}

/// Concurrent analysis of independent report files
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    analyzer: Arc<ReportAnalyzer>,
    max_concurrent_files: usize,
}

impl BatchProcessor {
    pub fn new(analyzer: ReportAnalyzer) -> Self {
        let max_concurrent_files = analyzer.config().max_concurrent_files.max(1);
        Self {
            analyzer: Arc::new(analyzer),
            max_concurrent_files,
        }
    }

    /// Analyse every file, returning results in input order
    pub async fn process_files(&self, files: &[PathBuf]) -> (Vec<FileAnalysis>, ProcessingStats) {
        let start_time = Instant::now();

        let analyses: Vec<FileAnalysis> = stream::iter(files.iter().cloned())
            .map(|path| {
                let analyzer = Arc::clone(&self.analyzer);
                async move {
                    let result = analyze_file(analyzer, &path).await;
                    if let Err(e) = &result {
                        error!("Failed to analyse {}: {}", path.display(), e);
                    }
                    FileAnalysis { path, result }
                }
            })
            .buffered(self.max_concurrent_files)
            .collect()
            .await;

        let mut stats = ProcessingStats::default();
        for analysis in &analyses {
            match &analysis.result {
                Ok(report) => {
                    stats.files_processed += 1;
                    stats.total_points += report.count_points;
                    stats.total_windows += report.windows.len();
                    if report.count_points == 0 {
                        stats.files_without_points += 1;
                    }
                }
                Err(_) => stats.files_failed += 1,
            }
        }
        stats.processing_time_ms = start_time.elapsed().as_millis();

        (analyses, stats)
    }
}

/// Read one report file and analyse it off the async executor
async fn analyze_file(analyzer: Arc<ReportAnalyzer>, path: &Path) -> Result<AnalysisReport> {
    debug!("Analysing report: {}", path.display());

    let bytes = tokio::fs::read(path).await?;
    let text = String::from_utf8_lossy(&bytes).into_owned();

    task::spawn_blocking(move || analyzer.analyze_text(&text))
        .await
        .map_err(|e| SeaStateError::ProcessingFailed {
            path: path.to_path_buf(),
            reason: format!("analysis task failed: {}", e),
        })
}
