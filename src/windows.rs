//! Operating window aggregation.
//!
//! A window is a maximal run of consecutive passing classifications in time
//! order that is at least `min_consecutive_points` long.

use crate::models::{Classification, CurrentStatus, NoDataStatus, Window};

/// Scan a time-ordered series once and emit every qualifying passing run
pub fn build_windows(classifications: &[Classification], min_consecutive_points: usize) -> Vec<Window> {
    let min_points = min_consecutive_points.max(1);
    let mut windows = Vec::new();
    let mut run_start: Option<usize> = None;

    for (index, classification) in classifications.iter().enumerate() {
        match (classification.passed, run_start) {
            (true, None) => run_start = Some(index),
            (false, Some(start)) => {
                close_run(classifications, start, index, min_points, &mut windows);
                run_start = None;
            }
            _ => {}
        }
    }

    if let Some(start) = run_start {
        close_run(
            classifications,
            start,
            classifications.len(),
            min_points,
            &mut windows,
        );
    }

    windows
}

/// Emit the run `[start, end)` if it is long enough
fn close_run(
    classifications: &[Classification],
    start: usize,
    end: usize,
    min_points: usize,
    windows: &mut Vec<Window>,
) {
    let point_count = end - start;
    if point_count < min_points {
        return;
    }

    windows.push(Window {
        start_time: classifications[start].time().to_string(),
        end_time: classifications[end - 1].time().to_string(),
        point_count,
        start_index: start,
        end_index: end - 1,
    });
}

/// The earliest classification stands for "now"
pub fn current_status(classifications: &[Classification]) -> CurrentStatus {
    match classifications.first() {
        Some(first) => CurrentStatus::Observed(first.clone()),
        None => CurrentStatus::NoData(NoDataStatus::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Observation, Quantities};

    fn series(pattern: &[bool]) -> Vec<Classification> {
        pattern
            .iter()
            .enumerate()
            .map(|(hour, &passed)| Classification {
                observation: Observation::new(
                    format!("2024-02-16T{:02}:00:00+04:00", hour),
                    Quantities::default(),
                ),
                passed,
                reasons: if passed {
                    Vec::new()
                } else {
                    vec!["Hs too high".to_string()]
                },
            })
            .collect()
    }

    fn spans(windows: &[Window]) -> Vec<(usize, usize)> {
        windows.iter().map(|w| (w.start_index, w.end_index)).collect()
    }

    #[test]
    fn test_two_windows_from_mixed_series() {
        let classified = series(&[true, true, false, true, true, true, false]);
        let windows = build_windows(&classified, 2);

        assert_eq!(spans(&windows), vec![(0, 1), (3, 5)]);
        assert_eq!(windows[0].start_time, "2024-02-16T00:00:00+04:00");
        assert_eq!(windows[0].end_time, "2024-02-16T01:00:00+04:00");
        assert_eq!(windows[0].point_count, 2);
        assert_eq!(windows[1].point_count, 3);
    }

    #[test]
    fn test_short_trailing_run_dropped() {
        let classified = series(&[true, true, false, true]);
        assert_eq!(spans(&build_windows(&classified, 2)), vec![(0, 1)]);
    }

    #[test]
    fn test_open_run_at_end_emitted() {
        let classified = series(&[false, true, true, true]);
        let windows = build_windows(&classified, 2);
        assert_eq!(spans(&windows), vec![(1, 3)]);
        assert_eq!(windows[0].end_time, "2024-02-16T03:00:00+04:00");
    }

    #[test]
    fn test_all_passing_is_one_maximal_window() {
        let classified = series(&[true; 5]);
        let windows = build_windows(&classified, 2);
        assert_eq!(spans(&windows), vec![(0, 4)]);
        assert_eq!(windows[0].point_count, 5);
    }

    #[test]
    fn test_no_passing_points() {
        assert!(build_windows(&series(&[false, false, false]), 1).is_empty());
        assert!(build_windows(&[], 2).is_empty());
    }

    #[test]
    fn test_zero_minimum_treated_as_one() {
        let classified = series(&[true, false, true]);
        let windows = build_windows(&classified, 0);
        assert_eq!(spans(&windows), vec![(0, 0), (2, 2)]);
        assert!(windows.iter().all(|w| w.point_count == 1));
    }

    #[test]
    fn test_large_minimum_filters_everything() {
        let classified = series(&[true, true, true, false, true, true]);
        assert!(build_windows(&classified, 4).is_empty());
    }

    #[test]
    fn test_windows_cover_only_passing_points_and_do_not_overlap() {
        let pattern = [
            true, false, true, true, false, false, true, true, true, true, false, true, true,
        ];
        let classified = series(&pattern);

        for min_points in 1..=4 {
            let windows = build_windows(&classified, min_points);
            let mut previous_end: Option<usize> = None;

            for window in &windows {
                assert!(window.point_count >= min_points);
                assert_eq!(window.point_count, window.end_index - window.start_index + 1);
                assert!((window.start_index..=window.end_index).all(|i| pattern[i]));

                // maximal: neighbours outside the run are failures or series ends
                if window.start_index > 0 {
                    assert!(!pattern[window.start_index - 1]);
                }
                if window.end_index + 1 < pattern.len() {
                    assert!(!pattern[window.end_index + 1]);
                }

                if let Some(end) = previous_end {
                    assert!(window.start_index > end);
                }
                previous_end = Some(window.end_index);
            }
        }
    }

    #[test]
    fn test_current_status() {
        let classified = series(&[false, true]);
        let status = current_status(&classified);
        assert!(!status.passed());
        assert_eq!(status.reasons(), ["Hs too high".to_string()]);

        let empty = current_status(&[]);
        assert!(!empty.passed());
        assert_eq!(empty.reasons(), ["No data parsed from PDF".to_string()]);
    }
}
