//! Grid configuration and the edit policy applied to user input.

use serde::{Deserialize, Serialize};

/// Default number of columns.
pub const DEFAULT_COLUMNS: u32 = 6;

/// Default number of rows.
pub const DEFAULT_ROWS: u32 = 4;

/// Default gap between cells in pixels.
pub const DEFAULT_GAP: u32 = 8;

/// Upper bound applied to column and row edits.
pub const MAX_TRACKS: u32 = 12;

/// Upper bound applied to gap edits.
pub const MAX_GAP: u32 = 100;

/// Dimensions of the layout grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of columns.
    pub columns: u32,
    /// Number of rows.
    pub rows: u32,
    /// Gap between cells in pixels.
    pub gap: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            gap: DEFAULT_GAP,
        }
    }
}

/// An editable field of [`GridConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigField {
    /// Column count.
    Columns,
    /// Row count.
    Rows,
    /// Gap in pixels.
    Gap,
}

impl ConfigField {
    /// Upper policy bound for this field.
    #[must_use]
    pub const fn max(self) -> u32 {
        match self {
            Self::Columns | Self::Rows => MAX_TRACKS,
            Self::Gap => MAX_GAP,
        }
    }
}

impl GridConfig {
    /// Create a config with explicit values (no policy clamping).
    #[must_use]
    pub const fn new(columns: u32, rows: u32, gap: u32) -> Self {
        Self { columns, rows, gap }
    }

    /// Read a single field.
    #[must_use]
    pub const fn field(&self, field: ConfigField) -> u32 {
        match field {
            ConfigField::Columns => self.columns,
            ConfigField::Rows => self.rows,
            ConfigField::Gap => self.gap,
        }
    }

    /// Return a copy with `field` set to `value` clamped into policy bounds.
    #[must_use]
    pub fn with_field(mut self, field: ConfigField, value: i64) -> Self {
        let clamped = u32::try_from(value.clamp(0, i64::from(field.max()))).unwrap_or(0);
        match field {
            ConfigField::Columns => self.columns = clamped,
            ConfigField::Rows => self.rows = clamped,
            ConfigField::Gap => self.gap = clamped,
        }
        self
    }

    /// Apply a raw text edit to `field`.
    ///
    /// An empty string sets the field to 0. Text without a leading integer is
    /// ignored and the config is returned unchanged. Anything else is parsed
    /// up to the first non-digit and clamped into policy bounds.
    #[must_use]
    pub fn with_field_input(self, field: ConfigField, input: &str) -> Self {
        if input.is_empty() {
            return self.with_field(field, 0);
        }
        match parse_leading_int(input) {
            Some(value) => self.with_field(field, value),
            None => {
                tracing::trace!("Ignoring non-numeric {field:?} input {input:?}");
                self
            }
        }
    }

    /// Clamp every field into the UI policy bounds.
    #[must_use]
    pub fn clamped_to_policy(self) -> Self {
        Self {
            columns: self.columns.min(MAX_TRACKS),
            rows: self.rows.min(MAX_TRACKS),
            gap: self.gap.min(MAX_GAP),
        }
    }

    /// Total number of cells.
    #[must_use]
    pub const fn cell_count(&self) -> u32 {
        self.columns.saturating_mul(self.rows)
    }
}

/// Parse a leading integer the way browsers parse number inputs:
/// optional whitespace, optional sign, then digits up to the first non-digit.
fn parse_leading_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }
    let magnitude = rest[..digits_end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
