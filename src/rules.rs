//! Threshold evaluation for GO / NO-GO classification.
//!
//! Every check runs when data is present so callers see the full set of
//! reasons. A missing required quantity short-circuits to a single
//! `"Missing data"` reason.

use crate::config::Thresholds;
use crate::constants::reasons;
use crate::models::{Classification, Observation};

/// Reasons an observation fails the thresholds, in check order
pub fn failed_checks(observation: &Observation, thresholds: &Thresholds) -> Vec<String> {
    let quantities = &observation.quantities;
    let (Some(ws50m), Some(hs), Some(tp)) =
        (quantities.ws50m_knots, quantities.hs_ft, quantities.tp_s)
    else {
        return vec![reasons::MISSING_DATA.to_string()];
    };

    let checks = [
        (ws50m, thresholds.ws50m_max_knots, reasons::WS50M_TOO_HIGH),
        (hs, thresholds.hs_max_ft, reasons::HS_TOO_HIGH),
        (tp, thresholds.tp_max_s, reasons::TP_TOO_HIGH),
    ];

    checks
        .into_iter()
        .filter(|(value, max, _)| value >= max)
        .map(|(_, _, reason)| reason.to_string())
        .collect()
}

/// Classify one observation
pub fn evaluate(observation: Observation, thresholds: &Thresholds) -> Classification {
    let reasons = failed_checks(&observation, thresholds);
    Classification {
        observation,
        passed: reasons.is_empty(),
        reasons,
    }
}

/// Classify a time-ordered series, preserving order 1:1
pub fn evaluate_all(observations: Vec<Observation>, thresholds: &Thresholds) -> Vec<Classification> {
    observations
        .into_iter()
        .map(|observation| evaluate(observation, thresholds))
        .collect()
}
