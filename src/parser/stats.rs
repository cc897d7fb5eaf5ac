//! Parsing statistics for a single report
//!
//! A document where nothing matched is not an error, so these counters are
//! the only signal that a vendor layout needs retuning.

use crate::header::YearSource;
use crate::models::Observation;
use serde::{Deserialize, Serialize};

use super::column_mapping::ColumnSchema;
use super::row_matcher::RowLayout;

/// Parsing result with observations and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Observations sorted by timestamp
    pub observations: Vec<Observation>,

    pub stats: ParseStats,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Total lines seen across all pages
    pub lines_scanned: usize,

    /// Rows recognized per layout
    pub weekday_rows: usize,
    pub date_hour_rows: usize,
    pub embedded_rows: usize,

    /// Recognized rows whose numeric run was too short
    pub short_rows: usize,

    /// Rows dropped because a column failed to map
    pub column_errors: usize,

    /// Rows dropped because their date or time does not exist
    pub invalid_timestamps: usize,

    pub six_column_rows: usize,
    pub eight_column_rows: usize,

    pub observations_parsed: usize,

    pub year_source: YearSource,
}

impl ParseStats {
    pub fn record_layout(&mut self, layout: RowLayout) {
        match layout {
            RowLayout::WeekdayPrefixed => self.weekday_rows += 1,
            RowLayout::DateHourPrefixed => self.date_hour_rows += 1,
            RowLayout::EmbeddedTime => self.embedded_rows += 1,
        }
    }

    pub fn record_schema(&mut self, schema: ColumnSchema) {
        match schema {
            ColumnSchema::SixColumn => self.six_column_rows += 1,
            ColumnSchema::EightColumn => self.eight_column_rows += 1,
        }
    }

    /// Rows that passed the row matcher
    pub fn rows_matched(&self) -> usize {
        self.weekday_rows + self.date_hour_rows + self.embedded_rows
    }

    /// Rows that looked like data but produced no observation
    pub fn rows_discarded(&self) -> usize {
        self.short_rows + self.column_errors + self.invalid_timestamps
    }

    /// Share of data-like rows that became observations, as a percentage
    pub fn success_rate(&self) -> f64 {
        let candidates = self.rows_matched() + self.short_rows;
        if candidates == 0 {
            0.0
        } else {
            (self.observations_parsed as f64 / candidates as f64) * 100.0
        }
    }
}
