//! Configuration management and validation.
//!
//! Provides the threshold value object applied to every observation, the
//! fixed UTC offset used when normalizing timestamps, and the per-request
//! analysis configuration with its optional JSON file overlay.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_HS_MAX_FT, DEFAULT_MIN_CONSECUTIVE_POINTS,
    DEFAULT_TP_MAX_S, DEFAULT_TZ_OFFSET, DEFAULT_WS50M_MAX_KNOTS,
};
use crate::error::{Result, SeaStateError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{debug, warn};

static TZ_OFFSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:Z|[+-](?:[01]\d|2[0-3]):[0-5]\d)$").expect("offset pattern is valid")
});

/// Exceedance thresholds for operational GO / NO-GO decisions.
///
/// A quantity fails when `value >= max`, so a value sitting exactly on the
/// threshold is a failure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Maximum mean wind speed at 50 m (knots)
    pub ws50m_max_knots: f64,

    /// Maximum significant wave height (feet)
    pub hs_max_ft: f64,

    /// Maximum peak wave period (seconds)
    pub tp_max_s: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            ws50m_max_knots: DEFAULT_WS50M_MAX_KNOTS,
            hs_max_ft: DEFAULT_HS_MAX_FT,
            tp_max_s: DEFAULT_TP_MAX_S,
        }
    }
}

impl Thresholds {
    /// Reject thresholds that can never compare meaningfully
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("ws50m_max_knots", self.ws50m_max_knots),
            ("hs_max_ft", self.hs_max_ft),
            ("tp_max_s", self.tp_max_s),
        ];

        for (name, value) in fields {
            if !value.is_finite() {
                return Err(SeaStateError::configuration(format!(
                    "threshold {} must be a finite number, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}

/// Fixed UTC offset appended verbatim to every normalized timestamp.
///
/// No offset arithmetic or daylight-saving logic is ever applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TzOffset(String);

impl TzOffset {
    /// Parse and validate an offset such as `+04:00`, `-03:30` or `Z`
    pub fn parse(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        if TZ_OFFSET_RE.is_match(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(SeaStateError::configuration(format!(
                "invalid UTC offset '{}' (expected '+HH:MM', '-HH:MM' or 'Z')",
                value
            )))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TzOffset {
    fn default() -> Self {
        Self(DEFAULT_TZ_OFFSET.to_string())
    }
}

impl fmt::Display for TzOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for TzOffset {
    type Error = SeaStateError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<TzOffset> for String {
    fn from(offset: TzOffset) -> Self {
        offset.0
    }
}

/// Configuration for analysing one or more forecast reports
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Fixed UTC offset applied to all parsed timestamps
    pub tz_offset: TzOffset,

    /// Exceedance thresholds
    pub thresholds: Thresholds,

    /// Minimum run of consecutive passing points that forms a window;
    /// values below 1 are accepted and treated as 1
    pub min_consecutive_points: i64,

    /// Maximum reports analysed concurrently in batch mode
    pub max_concurrent_files: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            tz_offset: TzOffset::default(),
            thresholds: Thresholds::default(),
            min_consecutive_points: DEFAULT_MIN_CONSECUTIVE_POINTS,
            max_concurrent_files: num_cpus::get(),
        }
    }
}

impl AnalysisConfig {
    /// Set the fixed UTC offset
    pub fn with_tz_offset(mut self, tz_offset: TzOffset) -> Self {
        self.tz_offset = tz_offset;
        self
    }

    /// Replace all thresholds
    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Set the minimum window length in points
    pub fn with_min_consecutive_points(mut self, points: i64) -> Self {
        self.min_consecutive_points = points;
        self
    }

    /// Set maximum concurrent files
    pub fn with_max_concurrent_files(mut self, max_files: usize) -> Self {
        self.max_concurrent_files = max_files;
        self
    }

    /// Validate values that cannot be corrected silently
    pub fn validate(&self) -> Result<()> {
        self.thresholds.validate()?;

        if self.max_concurrent_files == 0 {
            return Err(SeaStateError::configuration(
                "max_concurrent_files must be at least 1",
            ));
        }

        Ok(())
    }

    /// Minimum window length with values below 1 raised to 1
    pub fn effective_min_points(&self) -> usize {
        if self.min_consecutive_points < 1 {
            warn!(
                "min_consecutive_points of {} treated as 1",
                self.min_consecutive_points
            );
        }
        usize::try_from(self.min_consecutive_points.max(1)).unwrap_or(usize::MAX)
    }

    /// Default config file location under the user config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load configuration from an explicit file, the default location, or defaults.
    ///
    /// An explicit path must exist. The default location is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(SeaStateError::ConfigFile {
                        path: path.to_path_buf(),
                        reason: "file does not exist".to_string(),
                    });
                }
                Self::from_file(path)
            }
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Read a JSON configuration file; missing fields keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SeaStateError::ConfigFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self =
            serde_json::from_str(&content).map_err(|e| SeaStateError::ConfigFile {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        config.validate()?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}
