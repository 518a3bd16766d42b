//! Fixed-width column strategy.

use crate::domain::{DecodeError, FlightPeriod};

use super::fields::{RawFields, columns};
use super::layout::FixedLayout;
use super::{DecodeStrategy, RECORD_TYPE_FLIGHT_LEG};

/// Decodes full-width SSIM records by column position.
///
/// Only lines at least `min_width` characters wide are attempted; narrower
/// lines fail with [`DecodeError::TooShort`] so the next strategy can try.
#[derive(Debug, Clone)]
pub struct FixedOffsetStrategy {
    min_width: usize,
    layout: FixedLayout,
}

impl FixedOffsetStrategy {
    pub fn new(min_width: usize, layout: FixedLayout) -> Self {
        Self { min_width, layout }
    }
}

impl DecodeStrategy for FixedOffsetStrategy {
    fn name(&self) -> &'static str {
        "fixed-offset"
    }

    fn try_decode(&self, line: &str) -> Result<FlightPeriod, DecodeError> {
        let width = line.chars().count();
        if width < self.min_width {
            return Err(DecodeError::TooShort { len: width });
        }

        let record_type = columns(line, self.layout.record_type);
        if record_type.trim() != RECORD_TYPE_FLIGHT_LEG {
            return Err(DecodeError::BadPrefix(format!(
                "record type {record_type:?} at fixed column"
            )));
        }

        let fields = RawFields {
            carrier: columns(line, self.layout.carrier),
            compound: columns(line, self.layout.compound),
            weekdays: columns(line, self.layout.weekdays),
            origin: columns(line, self.layout.origin),
            destination: columns(line, self.layout.destination),
            equipment: columns(line, self.layout.equipment),
            successor: columns(line, self.layout.successor),
        };

        if let Some(column) = misaligned_column(&fields) {
            return Err(DecodeError::BadPrefix(format!(
                "{column} column does not fit the fixed layout"
            )));
        }

        fields.into_period()
    }
}

/// The first column whose content cannot belong there, if any.
///
/// A whitespace-separated line padded past the minimum width gets this far
/// with its fields sitting in the wrong columns; rejecting it here lets the
/// token strategy take over.
fn misaligned_column(fields: &RawFields<'_>) -> Option<&'static str> {
    let alnum_or_blank = |s: &str| s.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ');

    if !fields.weekdays.chars().all(|c| c.is_ascii_digit() || c == ' ') {
        return Some("weekday");
    }
    if !station_block_fits(fields.origin) {
        return Some("origin");
    }
    if !station_block_fits(fields.destination) {
        return Some("destination");
    }
    if !alnum_or_blank(fields.equipment) {
        return Some("equipment");
    }
    if !alnum_or_blank(fields.successor) {
        return Some("successor");
    }
    None
}

/// A station block is either blank where the airport and time go, or holds
/// a three-character code followed by four non-blank time characters.
fn station_block_fits(block: &str) -> bool {
    let head: Vec<char> = block.chars().take(7).collect();
    if head.iter().all(|c| c.is_whitespace()) {
        return true;
    }

    head.len() == 7
        && head[..3].iter().all(char::is_ascii_alphanumeric)
        && head[3..].iter().all(|c| !c.is_whitespace())
}
