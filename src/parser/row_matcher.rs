//! Row recognition and tokenization for extracted report lines
//!
//! Every line is tried against three layouts in a fixed priority order,
//! most structurally specific first:
//!
//! 1. Weekday-prefixed: `Mon 16/02 01:00 <rest>`
//! 2. Date+hour-prefixed: `16/02 01 [bullet] [direction] <numbers...>`
//! 3. Embedded-time: any line holding `dd/mm` and `HH:MM` somewhere, with
//!    numbers picked up by free-form scanning
//!
//! Once a structural prefix matches, the line is committed to that layout.
//! A short numeric run there discards the line instead of handing it to the
//! looser scanner, which would otherwise grab the wrong tokens.

use crate::constants::{SIX_COLUMN_MIN, WEEKDAYS};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static WEEKDAY_ROW_RE: LazyLock<Regex> = LazyLock::new(|| {
    let days = WEEKDAYS.join("|");
    Regex::new(&format!(
        r"^({days})\s+(\d{{2}})/(\d{{2}})\s+(\d{{2}}):(\d{{2}})\s+(.*)$"
    ))
    .expect("weekday row pattern is valid")
});

static DATE_HOUR_ROW_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{2})/(\d{2})\s+(\d{2})\s+(.*)$").expect("date+hour row pattern is valid")
});

static EMBEDDED_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{2})/(\d{2})(?:/(?:\d{4}|\d{2}))?\b").expect("date pattern is valid")
});

static EMBEDDED_TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{2}):(\d{2})\b").expect("time pattern is valid"));

static NUMERIC_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+(?:\.\d+)?$").expect("numeric pattern is valid"));

static FREE_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?\d+(?:\.\d+)?").expect("number pattern is valid"));

/// 16-point compass bearings accepted as a direction token
const COMPASS_POINTS: &[&str] = &[
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Row layouts, in matching priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RowLayout {
    WeekdayPrefixed,
    DateHourPrefixed,
    EmbeddedTime,
}

impl fmt::Display for RowLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RowLayout::WeekdayPrefixed => "weekday-prefixed",
            RowLayout::DateHourPrefixed => "date+hour-prefixed",
            RowLayout::EmbeddedTime => "embedded-time",
        };
        f.write_str(name)
    }
}

/// A recognized data row, borrowing its tokens from the source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedRow<'a> {
    pub layout: RowLayout,
    pub day: Option<&'a str>,
    pub day_of_month: u32,
    pub month: u32,
    pub hour: u32,
    /// Zero for layouts without a minutes field
    pub minute: u32,
    pub direction: Option<&'a str>,
    /// First contiguous numeric run after the row prefix
    pub values: Vec<&'a str>,
}

/// Outcome of classifying one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome<'a> {
    /// Header, footer, title or blank line
    Noise,
    /// Layout recognized but too few numeric columns followed
    ShortNumericRun { layout: RowLayout, found: usize },
    Row(MatchedRow<'a>),
}

/// True for an optional minus, digits and at most one decimal part
pub fn is_numeric_token(token: &str) -> bool {
    NUMERIC_TOKEN_RE.is_match(token)
}

/// True for a 16-point compass bearing such as `NNW`
pub fn is_direction_token(token: &str) -> bool {
    COMPASS_POINTS.contains(&token)
}

/// Confidence bullets and similar glyphs carry no letters or digits
fn is_marker_token(token: &str) -> bool {
    !token.is_empty() && !token.chars().any(char::is_alphanumeric)
}

/// Classify a single raw line
pub fn classify_line(line: &str) -> LineOutcome<'_> {
    let line = line.trim();
    if line.is_empty() {
        return LineOutcome::Noise;
    }

    if let Some(caps) = WEEKDAY_ROW_RE.captures(line) {
        return match_weekday_row(&caps);
    }

    if let Some(caps) = DATE_HOUR_ROW_RE.captures(line) {
        return match_date_hour_row(&caps);
    }

    match_embedded_row(line)
}

/// Lazily yield the data rows of a line sequence, dropping everything else
pub fn match_rows<'a, I>(lines: I) -> impl Iterator<Item = MatchedRow<'a>>
where
    I: IntoIterator<Item = &'a str>,
{
    lines.into_iter().filter_map(|line| match classify_line(line) {
        LineOutcome::Row(row) => Some(row),
        _ => None,
    })
}

fn match_weekday_row<'a>(caps: &Captures<'a>) -> LineOutcome<'a> {
    let (Some(day_of_month), Some(month), Some(hour), Some(minute)) = (
        capture_u32(caps, 2),
        capture_u32(caps, 3),
        capture_u32(caps, 4),
        capture_u32(caps, 5),
    ) else {
        return LineOutcome::Noise;
    };

    let rest = caps.get(6).map_or("", |m| m.as_str());
    let (direction, values) = split_prefixed_block(rest);

    finish_row(MatchedRow {
        layout: RowLayout::WeekdayPrefixed,
        day: caps.get(1).map(|m| m.as_str()),
        day_of_month,
        month,
        hour,
        minute,
        direction,
        values,
    })
}

fn match_date_hour_row<'a>(caps: &Captures<'a>) -> LineOutcome<'a> {
    let (Some(day_of_month), Some(month), Some(hour)) = (
        capture_u32(caps, 1),
        capture_u32(caps, 2),
        capture_u32(caps, 3),
    ) else {
        return LineOutcome::Noise;
    };

    let rest = caps.get(4).map_or("", |m| m.as_str());
    let (direction, values) = split_prefixed_block(rest);

    finish_row(MatchedRow {
        layout: RowLayout::DateHourPrefixed,
        day: None,
        day_of_month,
        month,
        hour,
        minute: 0,
        direction,
        values,
    })
}

fn match_embedded_row(line: &str) -> LineOutcome<'_> {
    let (Some(date), Some(time)) = (
        EMBEDDED_DATE_RE.captures(line),
        EMBEDDED_TIME_RE.captures(line),
    ) else {
        return LineOutcome::Noise;
    };

    let (Some(day_of_month), Some(month), Some(hour), Some(minute)) = (
        capture_u32(&date, 1),
        capture_u32(&date, 2),
        capture_u32(&time, 1),
        capture_u32(&time, 2),
    ) else {
        return LineOutcome::Noise;
    };

    let prefix_end = match (date.get(0), time.get(0)) {
        (Some(d), Some(t)) => d.end().max(t.end()),
        _ => return LineOutcome::Noise,
    };
    let (direction, values) = scan_free_numbers(&line[prefix_end..]);

    finish_row(MatchedRow {
        layout: RowLayout::EmbeddedTime,
        day: None,
        day_of_month,
        month,
        hour,
        minute,
        direction,
        values,
    })
}

fn finish_row(row: MatchedRow<'_>) -> LineOutcome<'_> {
    if row.values.len() < SIX_COLUMN_MIN {
        LineOutcome::ShortNumericRun {
            layout: row.layout,
            found: row.values.len(),
        }
    } else {
        LineOutcome::Row(row)
    }
}

fn capture_u32(caps: &Captures<'_>, index: usize) -> Option<u32> {
    caps.get(index)?.as_str().parse().ok()
}

/// Skip an optional bullet then an optional direction, then collect the
/// first contiguous run of numeric tokens
fn split_prefixed_block(rest: &str) -> (Option<&str>, Vec<&str>) {
    let mut tokens = rest.split_whitespace().peekable();

    if tokens.peek().is_some_and(|token| is_marker_token(token)) {
        tokens.next();
    }

    let direction = if tokens.peek().is_some_and(|token| is_direction_token(token)) {
        tokens.next()
    } else {
        None
    };

    let values = tokens.take_while(|token| is_numeric_token(token)).collect();
    (direction, values)
}

/// Free-form number scan for the embedded-time layout.
///
/// Anything may precede the first number; a whole compass token there
/// (delimited by whitespace or `|`) becomes the direction. After that, numbers may be separated by whitespace or table
/// punctuation, and the run ends at the first gap containing letters.
fn scan_free_numbers(rest: &str) -> (Option<&str>, Vec<&str>) {
    let mut values = Vec::new();
    let mut direction = None;
    let mut cursor = 0;

    for number in FREE_NUMBER_RE.find_iter(rest) {
        let gap = &rest[cursor..number.start()];
        if values.is_empty() {
            direction = gap
                .split(|c: char| c.is_whitespace() || c == '|')
                .find(|token| is_direction_token(token));
        } else if gap.chars().any(char::is_alphabetic) {
            break;
        }
        values.push(number.as_str());
        cursor = number.end();
    }

    (direction, values)
}
