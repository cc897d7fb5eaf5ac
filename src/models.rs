//! Core data structures for sea-state analysis.
//!
//! Defines the extracted report text, observation records, their
//! classifications, operating windows and the final analysis report.

use crate::config::Thresholds;
use crate::constants::{PAGE_SEPARATOR, reasons};
use crate::parser::ParseStats;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Pre-extracted text of one forecast report, one entry per page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportText {
    pages: Vec<String>,
}

impl ReportText {
    /// Split extractor output into pages on the form-feed separator
    pub fn from_extracted(text: &str) -> Self {
        let pages = text
            .split(PAGE_SEPARATOR)
            .map(|page| page.to_string())
            .collect();
        Self { pages }
    }

    pub fn from_pages(pages: Vec<String>) -> Self {
        Self { pages }
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All lines of all pages in reading order
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().flat_map(|page| page.lines())
    }
}

/// Physical quantities a forecast row can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    /// Mean wind speed at 10 m
    Ws10,
    /// Gust at 10 m
    Wg10,
    /// Mean wind speed at 50 m
    Ws50m,
    /// Gust (reference height unspecified)
    Wg,
    /// Gust at 50 m
    Wg50m,
    /// Significant wave height
    Hs,
    /// Maximum wave height
    Hmax,
    /// Mean zero-crossing period
    Tz,
    /// Peak period
    Tp,
}

impl Quantity {
    /// Field name used in serialized output
    pub fn name(&self) -> &'static str {
        match self {
            Quantity::Ws10 => "ws10_knots",
            Quantity::Wg10 => "wg10_knots",
            Quantity::Ws50m => "ws50m_knots",
            Quantity::Wg => "wg_knots",
            Quantity::Wg50m => "wg50m_knots",
            Quantity::Hs => "hs_ft",
            Quantity::Hmax => "hmax_ft",
            Quantity::Tz => "tz_s",
            Quantity::Tp => "tp_s",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Numeric quantities of one observation; absent values stay `None`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Quantities {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ws10_knots: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wg10_knots: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ws50m_knots: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wg_knots: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wg50m_knots: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hs_ft: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hmax_ft: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tz_s: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tp_s: Option<f64>,
}

impl Quantities {
    pub fn get(&self, quantity: Quantity) -> Option<f64> {
        *self.slot(quantity)
    }

    pub fn set(&mut self, quantity: Quantity, value: f64) {
        *self.slot_mut(quantity) = Some(value);
    }

    fn slot(&self, quantity: Quantity) -> &Option<f64> {
        match quantity {
            Quantity::Ws10 => &self.ws10_knots,
            Quantity::Wg10 => &self.wg10_knots,
            Quantity::Ws50m => &self.ws50m_knots,
            Quantity::Wg => &self.wg_knots,
            Quantity::Wg50m => &self.wg50m_knots,
            Quantity::Hs => &self.hs_ft,
            Quantity::Hmax => &self.hmax_ft,
            Quantity::Tz => &self.tz_s,
            Quantity::Tp => &self.tp_s,
        }
    }

    fn slot_mut(&mut self, quantity: Quantity) -> &mut Option<f64> {
        match quantity {
            Quantity::Ws10 => &mut self.ws10_knots,
            Quantity::Wg10 => &mut self.wg10_knots,
            Quantity::Ws50m => &mut self.ws50m_knots,
            Quantity::Wg => &mut self.wg_knots,
            Quantity::Wg50m => &mut self.wg50m_knots,
            Quantity::Hs => &mut self.hs_ft,
            Quantity::Hmax => &mut self.hmax_ft,
            Quantity::Tz => &mut self.tz_s,
            Quantity::Tp => &mut self.tp_s,
        }
    }
}

/// One forecast time step parsed from a report row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// ISO-8601 timestamp with the configured fixed offset
    pub time: String,

    /// Weekday label when the row carried one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,

    /// Compass direction token preceding the numeric block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,

    #[serde(flatten)]
    pub quantities: Quantities,
}

impl Observation {
    pub fn new(time: impl Into<String>, quantities: Quantities) -> Self {
        Self {
            time: time.into(),
            day: None,
            direction: None,
            quantities,
        }
    }

    /// Parse the normalized timestamp; `None` for hand-built invalid strings
    pub fn timestamp(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.time).ok()
    }
}

/// An observation with its GO / NO-GO outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    #[serde(flatten)]
    pub observation: Observation,

    #[serde(rename = "pass")]
    pub passed: bool,

    /// Failure reasons in check order; empty iff passed
    #[serde(rename = "failed")]
    pub reasons: Vec<String>,
}

impl Classification {
    pub fn time(&self) -> &str {
        &self.observation.time
    }
}

/// A maximal run of consecutive passing observations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    #[serde(rename = "start")]
    pub start_time: String,

    #[serde(rename = "end")]
    pub end_time: String,

    #[serde(rename = "count_points")]
    pub point_count: usize,

    /// Index of the first point in the classified series
    #[serde(skip)]
    pub start_index: usize,

    /// Index of the last point in the classified series
    #[serde(skip)]
    pub end_index: usize,
}

/// Status reported when a document produced no observations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoDataStatus {
    #[serde(rename = "pass")]
    pub passed: bool,

    #[serde(rename = "failed")]
    pub reasons: Vec<String>,
}

impl Default for NoDataStatus {
    fn default() -> Self {
        Self {
            passed: false,
            reasons: vec![reasons::NO_DATA_PARSED.to_string()],
        }
    }
}

/// Conditions "now": the earliest classified point, or a failing placeholder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CurrentStatus {
    Observed(Classification),
    NoData(NoDataStatus),
}

impl CurrentStatus {
    pub fn passed(&self) -> bool {
        match self {
            CurrentStatus::Observed(classification) => classification.passed,
            CurrentStatus::NoData(status) => status.passed,
        }
    }

    pub fn reasons(&self) -> &[String] {
        match self {
            CurrentStatus::Observed(classification) => &classification.reasons,
            CurrentStatus::NoData(status) => &status.reasons,
        }
    }
}

/// Complete result of analysing one report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Thresholds the points were evaluated against
    pub thresholds: Thresholds,

    pub count_points: usize,

    pub now: CurrentStatus,

    pub windows: Vec<Window>,

    pub next_window: Option<Window>,

    pub points: Vec<Classification>,

    /// Parsing diagnostics, not part of the serialized output
    #[serde(skip)]
    pub parse_stats: ParseStats,
}

/// Batch processing statistics
#[derive(Debug, Default)]
pub struct ProcessingStats {
    pub files_processed: usize,
    pub files_failed: usize,
    /// Files that parsed but yielded no observations
    pub files_without_points: usize,
    pub total_points: usize,
    pub total_windows: usize,
    pub output_path: Option<PathBuf>,
    pub processing_time_ms: u128,
}
