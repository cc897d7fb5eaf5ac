//! Application constants for the sea-state processor
//!
//! Default thresholds, classification reasons and the quantity names used
//! in serialized output.

// =============================================================================
// Threshold Defaults
// =============================================================================

/// Default maximum mean wind speed at 50 m (knots)
pub const DEFAULT_WS50M_MAX_KNOTS: f64 = 22.0;

/// Default maximum significant wave height (feet)
pub const DEFAULT_HS_MAX_FT: f64 = 6.0;

/// Default maximum peak wave period (seconds)
pub const DEFAULT_TP_MAX_S: f64 = 5.0;

/// Default minimum number of consecutive passing points forming a window
pub const DEFAULT_MIN_CONSECUTIVE_POINTS: i64 = 2;

/// Default fixed UTC offset appended to every timestamp
pub const DEFAULT_TZ_OFFSET: &str = "+04:00";

// =============================================================================
// Classification Reasons
// =============================================================================

pub mod reasons {
    /// One of the evaluated quantities was absent
    pub const MISSING_DATA: &str = "Missing data";

    pub const WS50M_TOO_HIGH: &str = "Ws50m too high";

    pub const HS_TOO_HIGH: &str = "Hs too high";

    pub const TP_TOO_HIGH: &str = "Tp too high";

    /// Placeholder "now" status when a document yielded no observations
    pub const NO_DATA_PARSED: &str = "No data parsed from PDF";
}

// =============================================================================
// Report Layout
// =============================================================================

/// Weekday labels recognised at the start of a weekday-prefixed row
pub const WEEKDAYS: &[&str] = &["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Minimum numeric columns for the 6-column schema
pub const SIX_COLUMN_MIN: usize = 6;

/// Minimum numeric columns for the 8-column schema
pub const EIGHT_COLUMN_MIN: usize = 8;

/// Page separator emitted by PDF-to-text extraction tools
pub const PAGE_SEPARATOR: char = '\x0c';

/// Extension of pre-extracted report text files picked up from directories
pub const REPORT_FILE_EXTENSION: &str = "txt";

// =============================================================================
// Configuration File
// =============================================================================

/// Directory under the user config dir holding the config file
pub const CONFIG_DIR_NAME: &str = "seastate";

/// Name of the optional JSON configuration file
pub const CONFIG_FILE_NAME: &str = "config.json";
