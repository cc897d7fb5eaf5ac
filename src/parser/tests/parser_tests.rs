//! End-to-end parser tests over whole documents

use super::{date_hour_page, weekday_page};
use crate::config::TzOffset;
use crate::header::YearSource;
use crate::models::ReportText;
use crate::parser::ForecastParser;

fn parser() -> ForecastParser {
    ForecastParser::new(TzOffset::parse("+04:00").unwrap())
}

#[test]
fn test_weekday_row_normalization() {
    let report = ReportText::from_pages(vec![weekday_page()]);
    let result = parser().parse(&report, 2030);

    assert_eq!(result.observations.len(), 3);
    let first = &result.observations[0];
    assert_eq!(first.time, "2024-02-16T01:00:00+04:00");
    assert_eq!(first.day.as_deref(), Some("Mon"));
    assert_eq!(first.quantities.ws10_knots, Some(32.0));
    assert_eq!(first.quantities.ws50m_knots, Some(29.0));
    assert_eq!(first.quantities.wg_knots, Some(38.0));
    assert_eq!(first.quantities.hs_ft, Some(7.1));
    assert_eq!(first.quantities.tz_s, Some(5.8));
    assert_eq!(first.quantities.tp_s, Some(7.3));
    assert_eq!(result.stats.year_source, YearSource::Report);
}

#[test]
fn test_stamp_on_other_page_sets_year_for_all_pages() {
    let report = ReportText::from_pages(vec![weekday_page(), date_hour_page()]);
    let result = parser().parse(&report, 2030);

    assert_eq!(result.observations.len(), 6);
    assert!(result.observations.iter().all(|o| o.time.starts_with("2024-")));
}

#[test]
fn test_mixed_layouts_are_time_ordered() {
    let report = ReportText::from_pages(vec![date_hour_page(), weekday_page()]);
    let result = parser().parse(&report, 2030);

    let times: Vec<&str> = result.observations.iter().map(|o| o.time.as_str()).collect();
    assert_eq!(
        times,
        vec![
            "2024-02-16T01:00:00+04:00",
            "2024-02-16T04:00:00+04:00",
            "2024-02-16T07:00:00+04:00",
            "2024-02-16T10:00:00+04:00",
            "2024-02-16T13:00:00+04:00",
            "2024-02-16T16:00:00+04:00",
        ]
    );
    assert_eq!(result.stats.weekday_rows, 3);
    assert_eq!(result.stats.date_hour_rows, 3);
    assert_eq!(result.stats.six_column_rows, 3);
    assert_eq!(result.stats.eight_column_rows, 3);
}

#[test]
fn test_direction_and_eight_columns_carried() {
    let report = ReportText::from_pages(vec![date_hour_page()]);
    let result = parser().parse(&report, 2024);

    let first = &result.observations[0];
    assert_eq!(first.time, "2024-02-16T10:00:00+04:00");
    assert_eq!(first.direction.as_deref(), Some("NNW"));
    assert_eq!(first.quantities.hmax_ft, Some(5.2));
    assert_eq!(first.quantities.ws50m_knots, Some(14.0));
    assert_eq!(result.observations[1].direction.as_deref(), Some("SW"));
    assert_eq!(result.observations[2].direction, None);
}

#[test]
fn test_wall_clock_year_fallback() {
    let report = ReportText::from_extracted("Tue 17/02 13:00 10 12 14 2.1 3.5 4.4");
    let result = parser().parse(&report, 2031);

    assert_eq!(result.observations[0].time, "2031-02-17T13:00:00+04:00");
    assert_eq!(result.stats.year_source, YearSource::WallClock);
}

#[test]
fn test_offset_applied_verbatim() {
    let report = ReportText::from_extracted("Tue 17/02 13:00 10 12 14 2.1 3.5 4.4");
    let result = ForecastParser::new(TzOffset::parse("Z").unwrap()).parse(&report, 2026);
    assert_eq!(result.observations[0].time, "2026-02-17T13:00:00Z");

    let result =
        ForecastParser::new(TzOffset::parse("-03:30").unwrap()).parse(&report, 2026);
    assert_eq!(result.observations[0].time, "2026-02-17T13:00:00-03:30");
}

#[test]
fn test_duplicate_timestamps_keep_parse_order() {
    let text = "Mon 16/02 04:00 1 2 3 4 5 6\n\
                Mon 16/02 01:00 9 9 9 9 9 9\n\
                Mon 16/02 04:00 7 8 9 1 2 3";
    let result = parser().parse(&ReportText::from_extracted(text), 2024);

    assert_eq!(result.observations.len(), 3);
    assert_eq!(result.observations[0].quantities.ws10_knots, Some(9.0));
    assert_eq!(result.observations[1].quantities.ws10_knots, Some(1.0));
    assert_eq!(result.observations[2].quantities.ws10_knots, Some(7.0));
}

#[test]
fn test_invalid_dates_and_hours_are_discarded() {
    let text = "Mon 30/02 01:00 1 2 3 4 5 6\n\
                16/02 25 1 2 3 4 5 6\n\
                Mon 16/02 01:00 1 2 3 4 5 6";
    let result = parser().parse(&ReportText::from_extracted(text), 2024);

    assert_eq!(result.observations.len(), 1);
    assert_eq!(result.stats.invalid_timestamps, 2);
    assert_eq!(result.stats.rows_matched(), 3);
}

#[test]
fn test_leap_day_depends_on_resolved_year() {
    let row = "Thu 29/02 12:00 1 2 3 4 5 6";
    assert_eq!(
        parser()
            .parse(&ReportText::from_extracted(row), 2024)
            .observations
            .len(),
        1
    );
    assert_eq!(
        parser()
            .parse(&ReportText::from_extracted(row), 2025)
            .observations
            .len(),
        0
    );
}

#[test]
fn test_short_rows_counted() {
    let text = "Mon 16/02 01:00 32 29 38\nMon 16/02 04:00 18 21 24 5.0 4.1 4.6";
    let result = parser().parse(&ReportText::from_extracted(text), 2024);

    assert_eq!(result.observations.len(), 1);
    assert_eq!(result.stats.short_rows, 1);
    assert_eq!(result.stats.lines_scanned, 2);
    assert_eq!(result.stats.success_rate(), 50.0);
}

#[test]
fn test_document_without_rows() {
    let text = "COVER PAGE\x0cTerms and conditions\nNo forecast data";
    let result = parser().parse(&ReportText::from_extracted(text), 2024);

    assert!(result.observations.is_empty());
    assert_eq!(result.stats.observations_parsed, 0);
    assert_eq!(result.stats.rows_matched(), 0);
    assert_eq!(result.stats.success_rate(), 0.0);
}
