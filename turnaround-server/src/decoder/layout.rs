//! Field layout tables for the decode strategies.
//!
//! Both tables are data so that a deployment can correct them without code
//! changes. The fixed-width table in particular is known to drift between
//! schedule exporters (equipment and onward-flight columns move around), so
//! it should be checked against a sample of the files it will read.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, parse_json, read_json};

/// A half-open range of character columns, `start..end`, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRange {
    pub start: usize,
    pub end: usize,
}

impl ColumnRange {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Column positions for fixed-width type-3 records.
///
/// The defaults follow the SSIM flight leg record: the compound field spans
/// flight number, itinerary variation, leg sequence, service type and both
/// period dates, which lie contiguously in the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixedLayout {
    pub record_type: ColumnRange,
    pub carrier: ColumnRange,
    pub compound: ColumnRange,
    pub weekdays: ColumnRange,
    pub origin: ColumnRange,
    pub destination: ColumnRange,
    pub equipment: ColumnRange,
    pub successor: ColumnRange,
}

impl FixedLayout {
    /// Every range with its field name, for validation and diagnostics.
    pub fn ranges(&self) -> [(&'static str, ColumnRange); 8] {
        [
            ("record_type", self.record_type),
            ("carrier", self.carrier),
            ("compound", self.compound),
            ("weekdays", self.weekdays),
            ("origin", self.origin),
            ("destination", self.destination),
            ("equipment", self.equipment),
            ("successor", self.successor),
        ]
    }
}

impl Default for FixedLayout {
    fn default() -> Self {
        Self {
            record_type: ColumnRange::new(0, 1),
            carrier: ColumnRange::new(2, 5),
            compound: ColumnRange::new(5, 28),
            weekdays: ColumnRange::new(28, 35),
            origin: ColumnRange::new(36, 51),
            destination: ColumnRange::new(54, 69),
            equipment: ColumnRange::new(72, 75),
            successor: ColumnRange::new(140, 144),
        }
    }
}

/// Token positions for whitespace-delimited records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenLayout {
    pub record_type: usize,
    pub carrier: usize,
    pub compound: usize,
    pub weekdays: usize,
    pub origin: usize,
    pub destination: usize,
    pub equipment: usize,
    pub successor: usize,
}

impl TokenLayout {
    /// Fewest tokens a line needs: every mandatory position must exist.
    pub fn min_tokens(&self) -> usize {
        [self.record_type, self.carrier, self.compound, self.weekdays]
            .into_iter()
            .max()
            .unwrap_or(0)
            + 1
    }
}

impl Default for TokenLayout {
    fn default() -> Self {
        Self {
            record_type: 0,
            carrier: 1,
            compound: 2,
            weekdays: 3,
            origin: 4,
            destination: 5,
            equipment: 6,
            successor: 9,
        }
    }
}

/// Configuration for the record decoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Lines at least this many characters wide are tried as fixed-width first.
    pub min_fixed_width: usize,

    /// Column table for fixed-width lines.
    pub fixed: FixedLayout,

    /// Token table for whitespace-delimited lines.
    pub tokens: TokenLayout,
}

impl DecoderConfig {
    /// Create a new configuration with the given tables.
    pub fn new(min_fixed_width: usize, fixed: FixedLayout, tokens: TokenLayout) -> Self {
        Self {
            min_fixed_width,
            fixed,
            tokens,
        }
    }

    /// Parse and validate a configuration from JSON text.
    ///
    /// Fields left out of the document keep their defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = parse_json(text, "decoder layout")?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config: Self = read_json(path.as_ref())?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every fixed-width column range is non-empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, range) in self.fixed.ranges() {
            if range.is_empty() {
                return Err(ConfigError::InvalidRange {
                    field,
                    start: range.start,
                    end: range.end,
                });
            }
        }
        Ok(())
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            min_fixed_width: 200,
            fixed: FixedLayout::default(),
            tokens: TokenLayout::default(),
        }
    }
}
