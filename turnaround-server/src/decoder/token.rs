//! Whitespace-token strategy.

use crate::domain::{DecodeError, FlightPeriod};

use super::fields::RawFields;
use super::layout::TokenLayout;
use super::{DecodeStrategy, RECORD_TYPE_FLIGHT_LEG};

/// Decodes loosely formatted records by token position.
///
/// Tokens are identified by index only, never by their content. Optional
/// tokens (stations, equipment, successor) may be missing; mandatory ones
/// (record type, carrier, compound field, weekday mask) may not.
#[derive(Debug, Clone, Default)]
pub struct TokenSplitStrategy {
    layout: TokenLayout,
}

impl TokenSplitStrategy {
    pub fn new(layout: TokenLayout) -> Self {
        Self { layout }
    }
}

impl DecodeStrategy for TokenSplitStrategy {
    fn name(&self) -> &'static str {
        "token-split"
    }

    fn try_decode(&self, line: &str) -> Result<FlightPeriod, DecodeError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < self.layout.min_tokens() {
            return Err(DecodeError::TooShort {
                len: line.chars().count(),
            });
        }

        let token = |idx: usize| tokens.get(idx).copied().unwrap_or("");

        let record_type = token(self.layout.record_type);
        if record_type != RECORD_TYPE_FLIGHT_LEG {
            return Err(DecodeError::BadPrefix(format!(
                "record type token {record_type:?}"
            )));
        }

        RawFields {
            carrier: token(self.layout.carrier),
            compound: token(self.layout.compound),
            weekdays: token(self.layout.weekdays),
            origin: token(self.layout.origin),
            destination: token(self.layout.destination),
            equipment: token(self.layout.equipment),
            successor: token(self.layout.successor),
        }
        .into_period()
    }
}
