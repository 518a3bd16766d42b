//! Flight number type.

use std::fmt;

/// A flight number exactly as written in the schedule.
///
/// Flight numbers are compared textually. `"0100"` and `"100"` are different
/// flight numbers: SSIM pads flight numbers to a fixed width and the padding
/// is part of the identity, so no leading zeros are stripped.
///
/// # Examples
///
/// ```
/// use turnaround_server::domain::FlightNumber;
///
/// let fnum = FlightNumber::parse("1000").unwrap();
/// assert_eq!(fnum.as_str(), "1000");
///
/// assert_ne!(FlightNumber::parse("0100"), FlightNumber::parse("100"));
/// assert!(FlightNumber::parse("    ").is_none());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlightNumber(String);

impl FlightNumber {
    /// Parse a flight number, trimming surrounding whitespace.
    ///
    /// Returns `None` if nothing is left after trimming.
    pub fn parse(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(FlightNumber(trimmed.to_string()))
    }

    /// Returns the flight number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for FlightNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FlightNumber({})", self.0)
    }
}

impl fmt::Display for FlightNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any non-blank token roundtrips through as_str
        #[test]
        fn roundtrip(s in "[0-9A-Z]{1,5}") {
            let fnum = FlightNumber::parse(&s).unwrap();
            prop_assert_eq!(fnum.as_str(), s.as_str());
        }

        /// Surrounding whitespace never changes identity
        #[test]
        fn whitespace_insensitive(s in "[0-9]{1,4}", pad in 0usize..4) {
            let padded = format!("{}{}{}", " ".repeat(pad), s, " ".repeat(pad));
            prop_assert_eq!(FlightNumber::parse(&padded), FlightNumber::parse(&s));
        }
    }
}
