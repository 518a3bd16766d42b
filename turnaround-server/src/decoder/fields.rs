//! Sub-field parsing shared by the decode strategies.
//!
//! Strategies differ only in how they cut a line into raw field texts; turning
//! those texts into a [`FlightPeriod`] is the same for all of them.

use crate::domain::{
    AirportCode, DecodeError, FlightNumber, FlightPeriod, SsimDate, TimeOfDay, WeekdayMask,
};

use super::layout::ColumnRange;

/// Minimum width of the compound field: flight number through end date.
pub const COMPOUND_FIELD_LEN: usize = 23;

/// Shortest station block that still holds an airport and a time.
const MIN_BLOCK_LEN: usize = 7;

/// Slice `range` out of `line` by character columns.
///
/// Out-of-range columns are clamped, so a short line yields a short (possibly
/// empty) slice rather than a panic.
pub fn columns(line: &str, range: ColumnRange) -> &str {
    let start = byte_offset(line, range.start);
    let end = byte_offset(line, range.end.max(range.start));
    &line[start..end]
}

/// Byte offset of character column `col`, or the end of the string.
fn byte_offset(s: &str, col: usize) -> usize {
    s.char_indices().nth(col).map_or(s.len(), |(i, _)| i)
}

/// Character-indexed substring, clamped like [`columns`].
fn chars(s: &str, start: usize, end: usize) -> &str {
    columns(s, ColumnRange::new(start, end))
}

/// The pieces of the compound field that are carried forward.
///
/// Characters 4..8 (itinerary variation and leg sequence) and 8 (service
/// type) are structural only and are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compound {
    pub flight_number: FlightNumber,
    pub valid_from: SsimDate,
    pub valid_to: SsimDate,
}

/// Parse the compound field: `[0:4]` flight number, `[4:8]` counters,
/// `[8]` status, `[9:16]` start date, `[16:23]` end date.
pub fn parse_compound(field: &str) -> Result<Compound, DecodeError> {
    if field.chars().count() < COMPOUND_FIELD_LEN {
        return Err(DecodeError::IncompleteCompoundField(field.to_string()));
    }

    let flight_number = FlightNumber::parse(chars(field, 0, 4))
        .ok_or_else(|| DecodeError::IncompleteCompoundField(field.to_string()))?;

    let valid_from = parse_date(chars(field, 9, 16))?;
    let valid_to = parse_date(chars(field, 16, 23))?;

    Ok(Compound {
        flight_number,
        valid_from,
        valid_to,
    })
}

fn parse_date(s: &str) -> Result<SsimDate, DecodeError> {
    SsimDate::parse(s).map_err(|_| DecodeError::BadDateFormat(s.to_string()))
}

/// Airport and time taken from a station block such as `CGH09050905-0300`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StationBlock {
    pub airport: Option<AirportCode>,
    pub time: Option<TimeOfDay>,
}

/// Parse a station block: `[0:3]` airport, `[3:7]` time, the rest ignored.
///
/// A block too short to hold both yields an empty block, not an error.
pub fn parse_station_block(block: &str) -> StationBlock {
    if block.chars().count() < MIN_BLOCK_LEN {
        return StationBlock::default();
    }
    StationBlock {
        airport: AirportCode::parse(chars(block, 0, 3)),
        time: TimeOfDay::parse(chars(block, 3, 7)),
    }
}

/// Raw field texts cut from one line by a strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawFields<'a> {
    pub carrier: &'a str,
    pub compound: &'a str,
    pub weekdays: &'a str,
    pub origin: &'a str,
    pub destination: &'a str,
    pub equipment: &'a str,
    pub successor: &'a str,
}

impl RawFields<'_> {
    /// Build a flight period, failing on empty mandatory fields.
    pub fn into_period(self) -> Result<FlightPeriod, DecodeError> {
        let airline = self.carrier.trim();
        if airline.is_empty() {
            return Err(DecodeError::BadPrefix("missing carrier code".to_string()));
        }

        // Leading blanks are significant in both: flight numbers are right-justified
        let compound = parse_compound(self.compound)?;
        let origin = parse_station_block(self.origin);
        let destination = parse_station_block(self.destination);

        Ok(FlightPeriod {
            airline: airline.to_string(),
            flight_number: compound.flight_number,
            valid_from: compound.valid_from,
            valid_to: compound.valid_to,
            weekdays: WeekdayMask::parse(self.weekdays),
            origin_airport: origin.airport,
            departure_time: origin.time,
            destination_airport: destination.airport,
            arrival_time: destination.time,
            equipment: self.equipment.trim().to_string(),
            successor: FlightNumber::parse(self.successor),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_by_character() {
        assert_eq!(columns("3 G3 1000", ColumnRange::new(2, 4)), "G3");
        // Latin-1 letters are single columns even though they are two UTF-8 bytes
        assert_eq!(columns("ÃÇÕ123", ColumnRange::new(3, 6)), "123");
    }

    #[test]
    fn columns_clamps_past_end() {
        assert_eq!(columns("abc", ColumnRange::new(1, 10)), "bc");
        assert_eq!(columns("abc", ColumnRange::new(5, 10)), "");
        assert_eq!(columns("abc", ColumnRange::new(2, 1)), "");
    }

    #[test]
    fn compound_field_decomposition() {
        let compound = parse_compound("10000101J01DEC2308DEC23").unwrap();
        assert_eq!(compound.flight_number.as_str(), "1000");
        assert_eq!(compound.valid_from.as_str(), "01DEC23");
        assert_eq!(compound.valid_to.as_str(), "08DEC23");
    }

    #[test]
    fn compound_field_with_padded_flight_number() {
        let compound = parse_compound("  420101J01DEC2308DEC23").unwrap();
        assert_eq!(compound.flight_number.as_str(), "42");
    }

    #[test]
    fn compound_field_too_short() {
        let err = parse_compound("10000101J01DEC2308DEC2").unwrap_err();
        assert!(matches!(err, DecodeError::IncompleteCompoundField(_)));
    }

    #[test]
    fn compound_field_blank_flight_number() {
        let err = parse_compound("    0101J01DEC2308DEC23").unwrap_err();
        assert!(matches!(err, DecodeError::IncompleteCompoundField(_)));
    }

    #[test]
    fn compound_field_bad_dates() {
        let err = parse_compound("10000101J1DEC23X08DEC23").unwrap_err();
        assert_eq!(err, DecodeError::BadDateFormat("1DEC23X".to_string()));

        let err = parse_compound("10000101J01DEC23XXDEC23").unwrap_err();
        assert_eq!(err, DecodeError::BadDateFormat("XXDEC23".to_string()));
    }

    #[test]
    fn station_block_split() {
        let block = parse_station_block("CGH09050905-0300");
        assert_eq!(block.airport.unwrap().as_str(), "CGH");
        assert_eq!(block.time.unwrap().as_str(), "0905");
    }

    #[test]
    fn station_block_exactly_seven_chars() {
        let block = parse_station_block("SDU1010");
        assert_eq!(block.airport.unwrap().as_str(), "SDU");
        assert_eq!(block.time.unwrap().to_string(), "10:10");
    }

    #[test]
    fn short_station_block_is_empty() {
        assert_eq!(parse_station_block("SDU101"), StationBlock::default());
        assert_eq!(parse_station_block(""), StationBlock::default());
    }

    #[test]
    fn raw_fields_into_period() {
        let raw = RawFields {
            carrier: "G3",
            compound: "10000101J01DEC2308DEC23",
            weekdays: "5",
            origin: "CGH09050905-0300",
            destination: "SDU10101010-0300",
            equipment: "73X",
            successor: "1009",
        };

        let period = raw.into_period().unwrap();
        assert_eq!(period.airline, "G3");
        assert_eq!(period.flight_number.as_str(), "1000");
        assert_eq!(period.weekdays, WeekdayMask::parse("5"));
        assert_eq!(period.origin_airport.unwrap().as_str(), "CGH");
        assert_eq!(period.arrival_time.unwrap().as_str(), "1010");
        assert_eq!(period.equipment, "73X");
        assert_eq!(period.successor.unwrap().as_str(), "1009");
    }

    #[test]
    fn raw_fields_missing_carrier() {
        let raw = RawFields {
            carrier: "   ",
            compound: "10000101J01DEC2308DEC23",
            ..RawFields::default()
        };
        assert!(matches!(raw.into_period(), Err(DecodeError::BadPrefix(_))));
    }

    #[test]
    fn raw_fields_optional_parts_empty() {
        let raw = RawFields {
            carrier: "G3",
            compound: "10000101J01DEC2308DEC23",
            weekdays: "1234567",
            ..RawFields::default()
        };

        let period = raw.into_period().unwrap();
        assert!(period.origin_airport.is_none());
        assert!(period.destination_airport.is_none());
        assert!(period.successor.is_none());
        assert_eq!(period.equipment, "");
    }
}
