//! Positional column schemas for forecast rows
//!
//! Report vendors do not declare their table layout, so the schema is
//! selected from the number of numeric tokens recovered from a row.

use crate::constants::{EIGHT_COLUMN_MIN, SIX_COLUMN_MIN};
use crate::models::{Quantities, Quantity};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::row_matcher::is_numeric_token;

const SIX_COLUMNS: [Quantity; 6] = [
    Quantity::Ws10,
    Quantity::Ws50m,
    Quantity::Wg,
    Quantity::Hs,
    Quantity::Tz,
    Quantity::Tp,
];

const EIGHT_COLUMNS: [Quantity; 8] = [
    Quantity::Ws10,
    Quantity::Wg10,
    Quantity::Ws50m,
    Quantity::Wg50m,
    Quantity::Hs,
    Quantity::Hmax,
    Quantity::Tz,
    Quantity::Tp,
];

/// Known positional layouts of the numeric block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnSchema {
    /// `[Ws10, Ws50m, Wg, Hs, Tz, Tp]`
    SixColumn,
    /// `[Ws10, Wg10, Ws50m, Wg50m, Hs, Hmax, Tz, Tp]`
    EightColumn,
}

impl ColumnSchema {
    /// Pick the widest schema the token count can satisfy
    pub fn select(token_count: usize) -> Option<Self> {
        if token_count >= EIGHT_COLUMN_MIN {
            Some(ColumnSchema::EightColumn)
        } else if token_count >= SIX_COLUMN_MIN {
            Some(ColumnSchema::SixColumn)
        } else {
            None
        }
    }

    pub fn columns(&self) -> &'static [Quantity] {
        match self {
            ColumnSchema::SixColumn => &SIX_COLUMNS,
            ColumnSchema::EightColumn => &EIGHT_COLUMNS,
        }
    }
}

/// Why a numeric block could not be mapped
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColumnError {
    #[error("only {found} numeric columns, at least 6 required")]
    InsufficientColumns { found: usize },

    #[error("invalid number '{token}' for {quantity}")]
    InvalidNumber { quantity: Quantity, token: String },
}

/// Map numeric tokens onto quantities; any bad token discards the whole row
pub fn map_columns(values: &[&str]) -> Result<(ColumnSchema, Quantities), ColumnError> {
    let schema = ColumnSchema::select(values.len()).ok_or(ColumnError::InsufficientColumns {
        found: values.len(),
    })?;

    let mut quantities = Quantities::default();
    for (&quantity, &token) in schema.columns().iter().zip(values) {
        let value = parse_value(token).ok_or_else(|| ColumnError::InvalidNumber {
            quantity,
            token: token.to_string(),
        })?;
        quantities.set(quantity, value);
    }

    Ok((schema, quantities))
}

fn parse_value(token: &str) -> Option<f64> {
    if !is_numeric_token(token) {
        return None;
    }
    token.parse::<f64>().ok().filter(|value| value.is_finite())
}
