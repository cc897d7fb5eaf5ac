//! End-to-end tests for the sea-state pipeline through the public API
//!
//! Reports are written as extracted text files, discovered, analysed in a
//! batch and checked against the expected JSON output.

use seastate_processor::processor::discovery::discover_inputs;
use seastate_processor::{
    AnalysisConfig, BatchProcessor, CurrentStatus, ReportAnalyzer, ReportText, Thresholds,
    TzOffset, build_windows, evaluate,
};
use std::fs;
use tempfile::TempDir;

/// Two-page vendor report mixing both table layouts and the usual noise
const VENDOR_REPORT: &str = "\
OFFSHORE BLOCK 4 - MARINE FORECAST
Issued 15.02.2024 06:00 LT        Page 1 of 2
Day Date  Time  Ws10 Ws50m Wg  Hs  Tz  Tp
Mon 16/02 01:00 32 29 38 7.1 5.8 7.3
Mon 16/02 04:00 14 16 19 4.0 3.6 4.2
Mon 16/02 07:00 12 15 17 3.8 3.4 4.0
Mon 16/02 10:00 13 15 18 3.9
Forecaster notes: swell easing through the afternoon
\x0cPage 2 of 2
Date Hr Conf Dir Ws10 Wg10 Ws50 Wg50 Hs Hmax Tz Tp
16/02 13 ● NNW 10 13 12 16 2.5 4.1 3.5 3.9
16/02 16 ● NW 9 12 11 15 2.2 3.8 3.3 3.7
31/02 19 ○ W 8 11 10 14 2.0 3.4 3.1 3.5
";

/// A single weekday row exceeding every threshold
#[test]
fn test_single_failing_row() {
    let analyzer = ReportAnalyzer::new(AnalysisConfig::default()).unwrap();
    let report = analyzer.analyze_text("Issued 15.02.2024\nMon 16/02 01:00 32 29 38 7.1 5.8 7.3");

    assert_eq!(report.count_points, 1);
    let point = &report.points[0];
    assert_eq!(point.time(), "2024-02-16T01:00:00+04:00");
    assert_eq!(point.observation.day.as_deref(), Some("Mon"));
    assert_eq!(point.observation.quantities.ws10_knots, Some(32.0));
    assert_eq!(point.observation.quantities.ws50m_knots, Some(29.0));
    assert_eq!(point.observation.quantities.wg_knots, Some(38.0));
    assert_eq!(point.observation.quantities.hs_ft, Some(7.1));
    assert_eq!(point.observation.quantities.tz_s, Some(5.8));
    assert_eq!(point.observation.quantities.tp_s, Some(7.3));
    assert!(!point.passed);
    assert_eq!(point.reasons, ["Ws50m too high", "Hs too high", "Tp too high"]);
    assert!(report.windows.is_empty());
    assert!(report.next_window.is_none());
}

#[test]
fn test_vendor_report_skips_noise_and_bad_rows() {
    let analyzer = ReportAnalyzer::new(AnalysisConfig::default()).unwrap();
    let report = analyzer.analyze_text(VENDOR_REPORT);

    // the short 10:00 row and the 31/02 row are dropped
    let times: Vec<&str> = report.points.iter().map(|p| p.time()).collect();
    assert_eq!(
        times,
        vec![
            "2024-02-16T01:00:00+04:00",
            "2024-02-16T04:00:00+04:00",
            "2024-02-16T07:00:00+04:00",
            "2024-02-16T13:00:00+04:00",
            "2024-02-16T16:00:00+04:00",
        ]
    );

    let stats = &report.parse_stats;
    assert_eq!(stats.short_rows, 1);
    assert_eq!(stats.invalid_timestamps, 1);
    assert_eq!(stats.six_column_rows, 3);
    assert_eq!(stats.eight_column_rows, 2);

    // passing points 04:00, 07:00, 13:00, 16:00 are consecutive in the series
    assert_eq!(report.windows.len(), 1);
    assert_eq!(report.windows[0].start_time, "2024-02-16T04:00:00+04:00");
    assert_eq!(report.windows[0].end_time, "2024-02-16T16:00:00+04:00");
    assert_eq!(report.windows[0].point_count, 4);
    assert!(matches!(report.now, CurrentStatus::Observed(_)));
}

#[test]
fn test_report_json_structure() {
    let config = AnalysisConfig::default().with_tz_offset(TzOffset::parse("Z").unwrap());
    let analyzer = ReportAnalyzer::new(config).unwrap();
    let report = analyzer.analyze_text(VENDOR_REPORT);

    let json = serde_json::to_value(&report).unwrap();
    let keys: Vec<&str> = json
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    for key in [
        "thresholds",
        "count_points",
        "now",
        "windows",
        "next_window",
        "points",
    ] {
        assert!(keys.contains(&key), "missing key {}", key);
    }

    assert_eq!(json["count_points"], 5);
    assert_eq!(json["now"]["time"], "2024-02-16T01:00:00Z");
    assert_eq!(json["next_window"]["start"], "2024-02-16T04:00:00Z");
    assert_eq!(json["next_window"]["count_points"], 4);
    assert_eq!(json["points"][3]["wg50m_knots"], 16.0);
    assert_eq!(json["points"][3]["pass"], true);
    assert_eq!(json["points"][3]["failed"], serde_json::json!([]));
}

#[test]
fn test_components_compose() {
    let analyzer = ReportAnalyzer::new(AnalysisConfig::default()).unwrap();
    let pages = vec![
        "Tue 17/02 01:00 10 12 14 2.1 3.5 4.4".to_string(),
        "Tue 17/02 04:00 11 13 15 2.3 3.6 4.6".to_string(),
    ];
    let report = analyzer.analyze_with_year(&ReportText::from_pages(pages), 2026);

    let strict = Thresholds {
        tp_max_s: 4.5,
        ..Thresholds::default()
    };
    let reclassified: Vec<_> = report
        .points
        .iter()
        .map(|p| evaluate(p.observation.clone(), &strict))
        .collect();

    assert!(reclassified[0].passed);
    assert_eq!(reclassified[1].reasons, ["Tp too high"]);
    assert!(build_windows(&reclassified, 2).is_empty());
    assert_eq!(build_windows(&reclassified, 1).len(), 1);
}

#[tokio::test]
async fn test_batch_over_discovered_files() {
    let temp_dir = TempDir::new().unwrap();
    let reports = temp_dir.path().join("reports");
    fs::create_dir_all(&reports).unwrap();

    fs::write(reports.join("block4.txt"), VENDOR_REPORT).unwrap();
    fs::write(reports.join("empty.txt"), "No forecast available\n").unwrap();
    fs::write(reports.join("readme.md"), "not a report").unwrap();

    let files = discover_inputs(&[reports.to_string_lossy()]).unwrap();
    assert_eq!(files.len(), 2);

    let analyzer = ReportAnalyzer::new(AnalysisConfig::default()).unwrap();
    let (analyses, stats) = BatchProcessor::new(analyzer).process_files(&files).await;

    assert_eq!(analyses[0].path, reports.join("block4.txt"));
    assert_eq!(analyses[0].result.as_ref().unwrap().count_points, 5);

    let empty = analyses[1].result.as_ref().unwrap();
    assert_eq!(empty.count_points, 0);
    assert_eq!(empty.now.reasons(), ["No data parsed from PDF".to_string()]);

    assert_eq!(stats.files_processed, 2);
    assert_eq!(stats.files_without_points, 1);
    assert_eq!(stats.total_points, 5);
    assert_eq!(stats.total_windows, 1);
}
