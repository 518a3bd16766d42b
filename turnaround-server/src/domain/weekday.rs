//! Weekday recurrence mask.

use std::fmt;

use chrono::Weekday;

/// The set of weekdays on which a flight period operates.
///
/// Weekdays are numbered the SSIM way: Monday = 1 through Sunday = 7. The
/// mask is parsed leniently: digits 1..=7 are kept, everything else
/// (spaces in fixed-width files, `0`, `8`, `9`, letters) is ignored. An empty
/// mask is legal and simply selects no days.
///
/// # Examples
///
/// ```
/// use turnaround_server::domain::WeekdayMask;
/// use chrono::Weekday;
///
/// let mask = WeekdayMask::parse("1 3 5  ");
/// assert!(mask.contains(Weekday::Mon));
/// assert!(!mask.contains(Weekday::Tue));
/// assert!(mask.contains(Weekday::Fri));
/// assert_eq!(mask.to_string(), "135");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WeekdayMask(u8);

impl WeekdayMask {
    /// A mask selecting every day of the week.
    pub const ALL: WeekdayMask = WeekdayMask(0b111_1111);

    /// A mask selecting no days.
    pub const EMPTY: WeekdayMask = WeekdayMask(0);

    /// Parse a mask from its SSIM text form.
    pub fn parse(s: &str) -> Self {
        s.chars()
            .filter_map(|c| c.to_digit(10))
            .fold(Self::EMPTY, |mask, d| mask.with_number(d))
    }

    /// Returns a copy of this mask with weekday number `n` added.
    ///
    /// Numbers outside 1..=7 leave the mask unchanged.
    pub fn with_number(self, n: u32) -> Self {
        match n {
            1..=7 => WeekdayMask(self.0 | (1 << (n - 1))),
            _ => self,
        }
    }

    /// Whether the mask selects weekday number `n` (Monday = 1).
    pub fn contains_number(&self, n: u32) -> bool {
        matches!(n, 1..=7) && self.0 & (1 << (n - 1)) != 0
    }

    /// Whether the mask selects the given weekday.
    pub fn contains(&self, day: Weekday) -> bool {
        self.contains_number(day.number_from_monday())
    }

    /// Whether no weekday is selected.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Number of weekdays selected.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Selected weekday numbers in ascending order.
    pub fn numbers(&self) -> impl Iterator<Item = u32> {
        let mask = *self;
        (1..=7).filter(move |n| mask.contains_number(*n))
    }
}

impl fmt::Debug for WeekdayMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WeekdayMask({})", self)
    }
}

impl fmt::Display for WeekdayMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for n in self.numbers() {
            write!(f, "{n}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_day() {
        let mask = WeekdayMask::parse("5");
        assert_eq!(mask.len(), 1);
        assert!(mask.contains(Weekday::Fri));
        assert!(!mask.contains(Weekday::Thu));
    }

    #[test]
    fn parse_every_day() {
        assert_eq!(WeekdayMask::parse("1234567"), WeekdayMask::ALL);
    }

    #[test]
    fn parse_fixed_width_with_spaces() {
        let mask = WeekdayMask::parse(" 2 4  7");
        assert_eq!(mask.to_string(), "247");
        assert!(mask.contains(Weekday::Sun));
    }

    #[test]
    fn out_of_range_digits_ignored() {
        let mask = WeekdayMask::parse("0891");
        assert_eq!(mask.to_string(), "1");
    }

    #[test]
    fn empty_mask_is_legal() {
        let mask = WeekdayMask::parse("");
        assert!(mask.is_empty());
        assert_eq!(mask.len(), 0);
        assert_eq!(WeekdayMask::parse("   "), WeekdayMask::EMPTY);
    }

    #[test]
    fn duplicates_collapse() {
        assert_eq!(WeekdayMask::parse("5555").len(), 1);
    }

    #[test]
    fn monday_is_one_sunday_is_seven() {
        assert!(WeekdayMask::parse("1").contains(Weekday::Mon));
        assert!(WeekdayMask::parse("7").contains(Weekday::Sun));
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", WeekdayMask::parse("16")), "WeekdayMask(16)");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Every digit 1..=7 in the input is selected, nothing else is
        #[test]
        fn selects_exactly_input_digits(s in "[0-9 ]{0,10}") {
            let mask = WeekdayMask::parse(&s);
            for n in 1..=7u32 {
                let present = s.chars().any(|c| c.to_digit(10) == Some(n));
                prop_assert_eq!(mask.contains_number(n), present);
            }
        }

        /// Display then parse roundtrips
        #[test]
        fn display_parse_roundtrip(bits in 0u8..128) {
            let mask = (1..=7u32)
                .filter(|n| bits & (1 << (n - 1)) != 0)
                .fold(WeekdayMask::EMPTY, |m, n| m.with_number(n));
            prop_assert_eq!(WeekdayMask::parse(&mask.to_string()), mask);
        }
    }
}
