//! Forecast report parser
//!
//! Turns noisy extracted page text into a time-ordered list of
//! observations. The pipeline per document is:
//!
//! - [`header`](crate::header) resolves the document year once
//! - [`row_matcher`] recognizes data rows and tokenizes them
//! - [`column_mapping`] maps numeric tokens onto named quantities
//! - [`normalizer`] builds the timestamped observation
//!
//! Lines that are not data, rows with too few columns and rows with bad
//! values are skipped and counted in [`ParseStats`]; none of them is an
//! error for the caller.
//!
//! ## Usage
//!
//! ```rust
//! use seastate_processor::config::TzOffset;
//! use seastate_processor::models::ReportText;
//! use seastate_processor::parser::ForecastParser;
//!
//! let report = ReportText::from_extracted("Issued 15.02.2024\nMon 16/02 01:00 32 29 38 7.1 5.8 7.3");
//! let parser = ForecastParser::new(TzOffset::default());
//! let result = parser.parse(&report, 2026);
//!
//! assert_eq!(result.observations[0].time, "2024-02-16T01:00:00+04:00");
//! ```

pub mod column_mapping;
pub mod normalizer;
pub mod row_matcher;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use column_mapping::{ColumnError, ColumnSchema};
pub use normalizer::NormalizeError;
pub use row_matcher::{LineOutcome, MatchedRow, RowLayout};
pub use stats::{ParseResult, ParseStats};

use crate::config::TzOffset;
use crate::header::ReportContext;
use crate::models::{Observation, ReportText};
use tracing::{debug, trace};

use self::column_mapping::map_columns;
use self::normalizer::{normalize, sort_observations};
use self::row_matcher::classify_line;

/// Parser for one forecast report at a time
#[derive(Debug, Clone)]
pub struct ForecastParser {
    tz_offset: TzOffset,
}

impl ForecastParser {
    pub fn new(tz_offset: TzOffset) -> Self {
        Self { tz_offset }
    }

    /// Parse a document; `fallback_year` is used when no date stamp is found
    pub fn parse(&self, report: &ReportText, fallback_year: i32) -> ParseResult {
        let context = ReportContext::resolve(report.pages(), fallback_year);

        let mut stats = ParseStats {
            year_source: context.year_source,
            ..Default::default()
        };
        let mut observations = Vec::new();

        for line in report.lines() {
            stats.lines_scanned += 1;
            if let Some(observation) = self.parse_line(line, &context, &mut stats) {
                observations.push(observation);
            }
        }

        sort_observations(&mut observations);
        stats.observations_parsed = observations.len();

        debug!(
            "Parsed {} observations from {} lines ({} matched, {} discarded)",
            stats.observations_parsed,
            stats.lines_scanned,
            stats.rows_matched(),
            stats.rows_discarded()
        );

        ParseResult {
            observations,
            stats,
        }
    }

    /// Run one line through matching, mapping and normalization
    fn parse_line(
        &self,
        line: &str,
        context: &ReportContext,
        stats: &mut ParseStats,
    ) -> Option<Observation> {
        let row = match classify_line(line) {
            LineOutcome::Noise => return None,
            LineOutcome::ShortNumericRun { layout, found } => {
                trace!("Skipping {} row with {} numeric columns", layout, found);
                stats.short_rows += 1;
                return None;
            }
            LineOutcome::Row(row) => row,
        };
        stats.record_layout(row.layout);

        let (schema, quantities) = match map_columns(&row.values) {
            Ok(mapped) => mapped,
            Err(e) => {
                trace!("Discarding {} row: {}", row.layout, e);
                stats.column_errors += 1;
                return None;
            }
        };

        match normalize(&row, quantities, context, &self.tz_offset) {
            Ok(observation) => {
                stats.record_schema(schema);
                Some(observation)
            }
            Err(e) => {
                trace!("Discarding {} row: {}", row.layout, e);
                stats.invalid_timestamps += 1;
                None
            }
        }
    }
}
