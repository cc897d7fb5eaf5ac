//! Observation assembly and timestamp normalization

use crate::config::TzOffset;
use crate::header::ReportContext;
use crate::models::{Observation, Quantities};
use chrono::NaiveDate;
use thiserror::Error;

use super::row_matcher::MatchedRow;

/// Why a matched row could not become an observation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("{day:02}/{month:02} is not a valid date in {year}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("{hour:02}:{minute:02} is not a valid time of day")]
    InvalidTime { hour: u32, minute: u32 },
}

/// Build an observation from a matched row and its mapped quantities
pub fn normalize(
    row: &MatchedRow<'_>,
    quantities: Quantities,
    context: &ReportContext,
    tz_offset: &TzOffset,
) -> Result<Observation, NormalizeError> {
    if NaiveDate::from_ymd_opt(context.year, row.month, row.day_of_month).is_none() {
        return Err(NormalizeError::InvalidDate {
            year: context.year,
            month: row.month,
            day: row.day_of_month,
        });
    }

    if row.hour > 23 || row.minute > 59 {
        return Err(NormalizeError::InvalidTime {
            hour: row.hour,
            minute: row.minute,
        });
    }

    Ok(Observation {
        time: format_timestamp(
            context.year,
            row.month,
            row.day_of_month,
            row.hour,
            row.minute,
            tz_offset,
        ),
        day: row.day.map(str::to_string),
        direction: row.direction.map(str::to_string),
        quantities,
    })
}

/// `YYYY-MM-DDTHH:MM:00` followed by the offset exactly as configured
pub fn format_timestamp(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    tz_offset: &TzOffset,
) -> String {
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:00{}",
        year, month, day, hour, minute, tz_offset
    )
}

/// Stable ascending sort by timestamp; equal timestamps keep parse order
pub fn sort_observations(observations: &mut [Observation]) {
    observations.sort_by(|a, b| a.time.cmp(&b.time));
}
