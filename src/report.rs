//! Human-readable GO / NO-GO rendering of an analysis report

use crate::models::{AnalysisReport, Classification, Window};
use colored::*;

const TIME_WIDTH: usize = 25;
const VALUE_WIDTH: usize = 7;
const STATUS_WIDTH: usize = 6;

/// Render the point table followed by the window list
pub fn render_table(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let thresholds = &report.thresholds;

    out.push_str(&format!(
        "{} Ws50m < {} kn, Hs < {} ft, Tp < {} s\n",
        "Thresholds:".bold(),
        thresholds.ws50m_max_knots,
        thresholds.hs_max_ft,
        thresholds.tp_max_s
    ));

    let now = if report.now.passed() {
        "GO".bright_green().bold()
    } else {
        "NO-GO".bright_red().bold()
    };
    out.push_str(&format!("{} {}", "Now:".bold(), now));
    if !report.now.reasons().is_empty() {
        out.push_str(&format!(" ({})", report.now.reasons().join(", ")));
    }
    out.push('\n');

    if report.points.is_empty() {
        out.push_str(&format!("{}\n", "No forecast points parsed".yellow()));
        return out;
    }

    out.push('\n');
    out.push_str(&format!(
        "{:<tw$} {:>vw$} {:>vw$} {:>vw$} {:<sw$} {}\n",
        "Time",
        "Ws50m",
        "Hs",
        "Tp",
        "Status",
        "Failed",
        tw = TIME_WIDTH,
        vw = VALUE_WIDTH,
        sw = STATUS_WIDTH
    ));
    for point in &report.points {
        out.push_str(&render_point(point));
        out.push('\n');
    }

    out.push('\n');
    if report.windows.is_empty() {
        out.push_str(&format!("{}\n", "No operating windows".yellow()));
    } else {
        out.push_str(&format!("{}\n", "Operating windows:".bold()));
        for window in &report.windows {
            out.push_str(&render_window(window));
            out.push('\n');
        }
    }

    out
}

fn render_point(point: &Classification) -> String {
    let quantities = &point.observation.quantities;

    // pad before colouring so escape codes do not break alignment
    let status = format!("{:<width$}", status_label(point.passed), width = STATUS_WIDTH);
    let status = if point.passed {
        status.green()
    } else {
        status.red()
    };

    format!(
        "{:<tw$} {:>vw$} {:>vw$} {:>vw$} {} {}",
        point.time(),
        format_value(quantities.ws50m_knots),
        format_value(quantities.hs_ft),
        format_value(quantities.tp_s),
        status,
        point.reasons.join(", "),
        tw = TIME_WIDTH,
        vw = VALUE_WIDTH
    )
    .trim_end()
    .to_string()
}

fn render_window(window: &Window) -> String {
    format!(
        "  {} {} → {} ({} points)",
        "•".bright_cyan(),
        window.start_time,
        window.end_time,
        window.point_count
    )
}

fn status_label(passed: bool) -> &'static str {
    if passed { "GO" } else { "NO-GO" }
}

fn format_value(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.1}", v))
}
