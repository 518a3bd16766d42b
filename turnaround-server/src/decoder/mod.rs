//! SSIM type-3 record decoder.
//!
//! Schedule files in the wild are a mix of proper fixed-width records and
//! hand-edited, whitespace-separated ones. The decoder holds a prioritized
//! list of strategies and takes the first one that succeeds, so each layout
//! stays a table of positions rather than a tangle of conditionals.

mod fields;
mod fixed;
mod layout;
mod token;

use tracing::trace;

use crate::domain::{DecodeError, FlightPeriod};

pub use fields::{COMPOUND_FIELD_LEN, StationBlock, parse_compound, parse_station_block};
pub use fixed::FixedOffsetStrategy;
pub use layout::{ColumnRange, DecoderConfig, FixedLayout, TokenLayout};
pub use token::TokenSplitStrategy;

/// Record type marker of a flight leg record.
pub const RECORD_TYPE_FLIGHT_LEG: &str = "3";

/// Whether a line is a flight leg record at all.
///
/// Lines failing this check are not schedule data the decoder cares about
/// (headers, trailers, blank lines) and are skipped without being counted as
/// rejections.
pub fn is_flight_leg_record(line: &str) -> bool {
    line.trim_start().starts_with(RECORD_TYPE_FLIGHT_LEG)
}

/// One way of cutting a schedule line into a [`FlightPeriod`].
pub trait DecodeStrategy: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Decode a line, or say why this strategy cannot.
    fn try_decode(&self, line: &str) -> Result<FlightPeriod, DecodeError>;
}

/// Runs decode strategies in priority order.
pub struct Decoder {
    strategies: Vec<Box<dyn DecodeStrategy>>,
}

impl Decoder {
    /// The standard chain: fixed-width first, then whitespace tokens.
    pub fn new(config: &DecoderConfig) -> Self {
        Self::with_strategies(vec![
            Box::new(FixedOffsetStrategy::new(
                config.min_fixed_width,
                config.fixed.clone(),
            )),
            Box::new(TokenSplitStrategy::new(config.tokens.clone())),
        ])
    }

    /// A decoder over an explicit strategy list, highest priority first.
    pub fn with_strategies(strategies: Vec<Box<dyn DecodeStrategy>>) -> Self {
        Self { strategies }
    }

    /// Add a strategy with the lowest priority.
    pub fn push(&mut self, strategy: Box<dyn DecodeStrategy>) {
        self.strategies.push(strategy);
    }

    /// Decode one line.
    ///
    /// Returns the first successful strategy's period. If every strategy
    /// fails, returns the error of whichever got furthest into the line
    /// (earlier strategies win ties).
    pub fn decode(&self, line: &str) -> Result<FlightPeriod, DecodeError> {
        let mut furthest: Option<DecodeError> = None;

        for strategy in &self.strategies {
            match strategy.try_decode(line) {
                Ok(period) => {
                    trace!(strategy = strategy.name(), flight = %period.flight_number, "decoded");
                    return Ok(period);
                }
                Err(err) => {
                    trace!(strategy = strategy.name(), error = %err, "strategy failed");
                    furthest = match furthest {
                        Some(prev) if prev.kind() >= err.kind() => Some(prev),
                        _ => Some(err),
                    };
                }
            }
        }

        Err(furthest.unwrap_or(DecodeError::TooShort {
            len: line.chars().count(),
        }))
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new(&DecoderConfig::default())
    }
}

impl std::fmt::Debug for Decoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.strategies.iter().map(|s| s.name()))
            .finish()
    }
}

/// Builders for full-width test records.
#[cfg(test)]
pub(crate) mod test_lines {
    /// Build a 200-column type-3 record with the default column layout.
    ///
    /// `origin` and `destination` are 7-character `AAAHHMM` station/time
    /// pairs; the aircraft time and UTC offset are filled in.
    #[allow(clippy::too_many_arguments)]
    pub fn fixed_line(
        carrier: &str,
        flight: &str,
        from: &str,
        to: &str,
        days: &str,
        origin: &str,
        destination: &str,
        equipment: &str,
        successor: &str,
    ) -> String {
        let mut buf = vec![' '; 200];
        let mut put = |start: usize, s: &str| {
            for (i, c) in s.chars().enumerate() {
                buf[start + i] = c;
            }
        };

        put(0, "3");
        put(2, carrier);
        put(5, &format!("{flight:>4}"));
        put(9, "0101J");
        put(14, from);
        put(21, to);
        put(28, days);
        put(36, origin);
        put(43, origin.get(3..).unwrap_or(""));
        put(47, "-0300");
        put(54, destination);
        put(61, destination.get(3..).unwrap_or(""));
        put(65, "-0300");
        put(72, equipment);
        put(140, successor);
        put(194, "000001");

        buf.into_iter().collect()
    }
}
