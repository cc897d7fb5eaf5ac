//! Report-level context extraction.
//!
//! Most row layouts carry only day and month. The year is resolved once per
//! document by scanning every page for a `dd.mm.yyyy` issue stamp, falling
//! back to a caller-supplied wall-clock year, and is then threaded into the
//! normalizer for every row of that document.

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::debug;

static DATE_STAMP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{2})\.(\d{2})\.(\d{4})\b").expect("date stamp pattern is valid")
});

/// Where the document year came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum YearSource {
    /// A `dd.mm.yyyy` stamp found in the report text
    Report,
    /// No stamp found; the current calendar year was used
    #[default]
    WallClock,
}

/// Batch-wide context applied uniformly to every row of one document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportContext {
    pub year: i32,
    pub year_source: YearSource,
}

impl ReportContext {
    /// Resolve the document year from all pages, first valid stamp wins
    pub fn resolve<S: AsRef<str>>(pages: &[S], fallback_year: i32) -> Self {
        match find_report_year(pages) {
            Some(year) => {
                debug!("Resolved report year {} from date stamp", year);
                Self {
                    year,
                    year_source: YearSource::Report,
                }
            }
            None => {
                debug!(
                    "No date stamp in report, using wall-clock year {}",
                    fallback_year
                );
                Self {
                    year: fallback_year,
                    year_source: YearSource::WallClock,
                }
            }
        }
    }
}

/// Find the year of the first calendar-valid `dd.mm.yyyy` stamp on any page
fn find_report_year<S: AsRef<str>>(pages: &[S]) -> Option<i32> {
    pages
        .iter()
        .flat_map(|page| DATE_STAMP_RE.captures_iter(page.as_ref()))
        .find_map(|caps| {
            let day = caps[1].parse::<u32>().ok()?;
            let month = caps[2].parse::<u32>().ok()?;
            let year = caps[3].parse::<i32>().ok()?;
            NaiveDate::from_ymd_opt(year, month, day).map(|_| year)
        })
}
