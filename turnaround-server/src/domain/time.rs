//! Schedule date and time handling.
//!
//! SSIM writes period dates as `DDMMMYY` (e.g. `01DEC23`) and times of day as
//! four bare digits (`0905`). This module keeps both in their source form,
//! validated only structurally, and converts them to chrono values on demand.
//! Calendar validity is checked late on purpose: a period with a structurally
//! fine but impossible date (`31FEB23`) decodes, then expands to nothing.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::fmt;

/// Uppercase month abbreviations, January first.
const MONTHS: [[u8; 3]; 12] = [
    *b"JAN", *b"FEB", *b"MAR", *b"APR", *b"MAY", *b"JUN",
    *b"JUL", *b"AUG", *b"SEP", *b"OCT", *b"NOV", *b"DEC",
];

/// Two-digit years below this are in the 2000s, the rest in the 1900s.
const YEAR_PIVOT: u32 = 69;

/// Error returned when a period date is not shaped like `DDMMMYY`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid SSIM date: {reason}")]
pub struct InvalidSsimDate {
    reason: &'static str,
}

impl InvalidSsimDate {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A period date in SSIM `DDMMMYY` form.
///
/// Construction guarantees the shape (two digits, three ASCII letters, two
/// digits); the month letters are stored uppercased. Whether the text names a
/// real calendar day is answered by [`SsimDate::to_naive_date`].
///
/// # Examples
///
/// ```
/// use turnaround_server::domain::SsimDate;
/// use chrono::NaiveDate;
///
/// let d = SsimDate::parse("01DEC23").unwrap();
/// assert_eq!(d.to_naive_date(), NaiveDate::from_ymd_opt(2023, 12, 1));
///
/// // Wrong shape is rejected
/// assert!(SsimDate::parse("2023-12-01").is_err());
///
/// // Right shape, impossible day: parses, but has no calendar date
/// let feb = SsimDate::parse("31FEB23").unwrap();
/// assert_eq!(feb.to_naive_date(), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SsimDate([u8; 7]);

impl SsimDate {
    /// Parse a date from `DDMMMYY` text.
    pub fn parse(s: &str) -> Result<Self, InvalidSsimDate> {
        let bytes = s.as_bytes();

        if bytes.len() != 7 {
            return Err(InvalidSsimDate::new("expected DDMMMYY format"));
        }

        if !bytes[0..2].iter().all(u8::is_ascii_digit) {
            return Err(InvalidSsimDate::new("invalid day digits"));
        }

        if !bytes[2..5].iter().all(u8::is_ascii_alphabetic) {
            return Err(InvalidSsimDate::new("invalid month letters"));
        }

        if !bytes[5..7].iter().all(u8::is_ascii_digit) {
            return Err(InvalidSsimDate::new("invalid year digits"));
        }

        let mut raw = [0u8; 7];
        raw.copy_from_slice(bytes);
        raw[2..5].make_ascii_uppercase();

        Ok(SsimDate(raw))
    }

    /// Returns the date in its `DDMMMYY` text form.
    pub fn as_str(&self) -> &str {
        // Only ASCII is ever stored
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Resolve to a calendar date.
    ///
    /// Two-digit years follow the usual pivot: `00`-`68` are 2000-2068 and
    /// `69`-`99` are 1969-1999. Returns `None` for days that do not exist
    /// or for unknown month abbreviations.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        let [d1, d2, m1, m2, m3, y1, y2] = self.0;
        let digit = |b: u8| u32::from(b - b'0');

        let day = digit(d1) * 10 + digit(d2);
        let month = MONTHS.iter().position(|m| *m == [m1, m2, m3])?;
        let yy = digit(y1) * 10 + digit(y2);
        let year = if yy < YEAR_PIVOT { 2000 + yy } else { 1900 + yy };

        NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month as u32 + 1, day)
    }
}

impl fmt::Debug for SsimDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SsimDate({})", self.as_str())
    }
}

impl fmt::Display for SsimDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A time of day as written in an SSIM station block.
///
/// The canonical form is four digits, `HHMM`, in 24-hour local time. No range
/// check is applied: `2530` is kept as written and, when combined with a
/// date, lands 25h30m after that date's midnight. Displayed as `HH:MM` when
/// the source has exactly four characters, verbatim otherwise.
///
/// # Examples
///
/// ```
/// use turnaround_server::domain::TimeOfDay;
/// use chrono::NaiveDate;
///
/// let t = TimeOfDay::parse("0905").unwrap();
/// assert_eq!(t.to_string(), "09:05");
///
/// let date = NaiveDate::from_ymd_opt(2023, 12, 1).unwrap();
/// assert_eq!(t.on(date), date.and_hms_opt(9, 5, 0));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TimeOfDay(String);

impl TimeOfDay {
    /// Parse a time of day, trimming surrounding whitespace.
    ///
    /// Returns `None` for blank input.
    pub fn parse(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(TimeOfDay(trimmed.to_string()))
    }

    /// Returns the time in its source form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Offset from midnight, if the source is four ASCII digits.
    pub fn offset(&self) -> Option<Duration> {
        let bytes = self.0.as_bytes();
        if bytes.len() != 4 {
            return None;
        }
        let hours = parse_two_digits(&bytes[0..2])?;
        let minutes = parse_two_digits(&bytes[2..4])?;
        Some(Duration::hours(hours) + Duration::minutes(minutes))
    }

    /// Combine with a date into a timestamp.
    ///
    /// Returns `None` when the time is not four digits.
    pub fn on(&self, date: NaiveDate) -> Option<NaiveDateTime> {
        date.and_hms_opt(0, 0, 0)?
            .checked_add_signed(self.offset()?)
    }
}

impl fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeOfDay({})", self.0)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.chars().count() != 4 {
            return f.write_str(&self.0);
        }
        let split = self
            .0
            .char_indices()
            .nth(2)
            .map(|(i, _)| i)
            .unwrap_or(self.0.len());
        write!(f, "{}:{}", &self.0[..split], &self.0[split..])
    }
}

/// Time an aircraft spends on the ground between arriving and departing.
///
/// Never negative. Displayed as `H:MM`; the hour part is not wrapped at 24.
///
/// # Examples
///
/// ```
/// use turnaround_server::domain::GroundTime;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2023, 12, 1).unwrap();
/// let arrival = day.and_hms_opt(10, 10, 0).unwrap();
/// let departure = day.and_hms_opt(10, 55, 0).unwrap();
/// assert_eq!(GroundTime::between(arrival, departure).to_string(), "0:45");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroundTime(Duration);

impl GroundTime {
    /// Ground time from an arrival to a departure.
    ///
    /// A departure before the arrival clamps to zero.
    pub fn between(arrival: NaiveDateTime, departure: NaiveDateTime) -> Self {
        let delta = departure.signed_duration_since(arrival);
        Self(delta.max(Duration::zero()))
    }

    /// Returns the ground time as a duration.
    pub fn duration(&self) -> Duration {
        self.0
    }

    /// Returns the ground time in whole minutes.
    pub fn num_minutes(&self) -> i64 {
        self.0.num_minutes()
    }
}

impl fmt::Debug for GroundTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GroundTime({})", self)
    }
}

impl fmt::Display for GroundTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let minutes = self.num_minutes();
        write!(f, "{}:{:02}", minutes / 60, minutes % 60)
    }
}

/// Parse two ASCII digit bytes into an i64.
fn parse_two_digits(bytes: &[u8]) -> Option<i64> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(i64::from(d1 * 10 + d2))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const MONTHS: [&str; 12] = [
        "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
    ];

    prop_compose! {
        fn valid_date()(
            year in 1969i32..2069,
            month in 1u32..=12,
            day in 1u32..=28  // Safe for all months
        ) -> NaiveDate {
            NaiveDate::from_ymd_opt(year, month, day).unwrap()
        }
    }

    proptest! {
        /// Any real date written as DDMMMYY resolves back to itself
        #[test]
        fn ssim_date_resolves(d in valid_date()) {
            use chrono::Datelike;
            let text = format!(
                "{:02}{}{:02}",
                d.day(),
                MONTHS[d.month0() as usize],
                d.year() % 100
            );
            let parsed = SsimDate::parse(&text).unwrap();
            prop_assert_eq!(parsed.to_naive_date(), Some(d));
        }

        /// Valid HHMM combines with a date at exactly that time
        #[test]
        fn time_on_matches_components(hour in 0u32..24, minute in 0u32..60, d in valid_date()) {
            let t = TimeOfDay::parse(&format!("{:02}{:02}", hour, minute)).unwrap();
            prop_assert_eq!(t.on(d), d.and_hms_opt(hour, minute, 0));
            prop_assert_eq!(t.to_string(), format!("{:02}:{:02}", hour, minute));
        }

        /// Ground time is never negative and equals the delta when ordered
        #[test]
        fn ground_time_non_negative(a in 0i64..10_000, b in 0i64..10_000, d in valid_date()) {
            let base = d.and_hms_opt(0, 0, 0).unwrap();
            let arr = base + Duration::minutes(a);
            let dep = base + Duration::minutes(b);
            let gt = GroundTime::between(arr, dep);
            prop_assert!(gt.duration() >= Duration::zero());
            if b >= a {
                prop_assert_eq!(gt.num_minutes(), b - a);
            }
        }
    }
}
