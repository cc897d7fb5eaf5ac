//! Sea-State Processor Library
//!
//! Turns the pre-extracted text of marine-weather forecast reports into
//! time-ordered sea-state observations, classifies each forecast step as
//! GO or NO-GO against operational thresholds and groups consecutive passing
//! steps into operating windows.
//!
//! This library provides tools for:
//! - Recognising forecast rows in noisy page text across several table layouts
//! - Mapping positional numeric columns onto named quantities
//! - Normalising row dates and times into offset-qualified ISO-8601 timestamps
//! - Evaluating wind, wave height and period thresholds with failure reasons
//! - Aggregating maximal passing runs into windows and deriving "now"
//! - Analysing many report files concurrently
//!
//! ## Example
//!
//! ```rust
//! use seastate_processor::{AnalysisConfig, ReportAnalyzer};
//!
//! let analyzer = ReportAnalyzer::new(AnalysisConfig::default()).unwrap();
//! let report = analyzer.analyze_text(
//!     "Issued 15.02.2024\nMon 16/02 01:00 32 29 38 7.1 5.8 7.3",
//! );
//!
//! assert_eq!(report.count_points, 1);
//! assert_eq!(report.points[0].reasons, ["Ws50m too high", "Hs too high", "Tp too high"]);
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod header;
pub mod models;
pub mod parser;
pub mod processor;
pub mod report;
pub mod rules;
pub mod windows;

pub use config::{AnalysisConfig, Thresholds, TzOffset};
pub use error::{Result, SeaStateError};
pub use models::{
    AnalysisReport, Classification, CurrentStatus, Observation, Quantities, Quantity, ReportText,
    Window,
};
pub use parser::ForecastParser;
pub use processor::{BatchProcessor, FileAnalysis, ReportAnalyzer};
pub use rules::evaluate;
pub use windows::build_windows;
