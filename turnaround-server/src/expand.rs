//! Calendar expansion of flight periods into dated instances.

use std::iter::FusedIterator;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate};

use crate::domain::{FlightInstance, FlightPeriod};

/// Expand a period into one instance per operating date.
///
/// Walks every day of `[valid_from, valid_to]` and yields the days whose
/// weekday is in the period's mask, in ascending order. A period whose dates
/// do not resolve to real calendar days, whose range is reversed, or whose
/// mask is empty yields nothing.
///
/// # Examples
///
/// ```
/// use turnaround_server::decoder::Decoder;
/// use turnaround_server::expand::expand;
///
/// let period = Decoder::default()
///     .decode("3 G3 10000101J01DEC2308DEC23 5")
///     .unwrap();
/// let dates: Vec<_> = expand(period).map(|i| i.operating_date.to_string()).collect();
/// assert_eq!(dates, ["2023-12-01", "2023-12-08"]);
/// ```
pub fn expand(period: impl Into<Arc<FlightPeriod>>) -> Expansion {
    let period = period.into();

    let range = match (period.valid_from.to_naive_date(), period.valid_to.to_naive_date()) {
        (Some(from), Some(to)) if from <= to && !period.weekdays.is_empty() => Some((from, to)),
        _ => None,
    };

    Expansion {
        next: range.map(|(from, _)| from),
        last: range.map_or(NaiveDate::MIN, |(_, to)| to),
        period,
    }
}

/// Lazy sequence of the instances of one period.
///
/// Single pass: once consumed it stays empty.
#[derive(Debug)]
pub struct Expansion {
    period: Arc<FlightPeriod>,
    next: Option<NaiveDate>,
    last: NaiveDate,
}

impl Expansion {
    /// The period being expanded.
    pub fn period(&self) -> &FlightPeriod {
        &self.period
    }
}

impl Iterator for Expansion {
    type Item = FlightInstance;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let day = self.next?;
            self.next = if day < self.last { day.succ_opt() } else { None };

            if self.period.weekdays.contains(day.weekday()) {
                return Some(FlightInstance::new(Arc::clone(&self.period), day));
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(day) => {
                let remaining = (self.last - day).num_days() + 1;
                (0, usize::try_from(remaining).ok())
            }
            None => (0, Some(0)),
        }
    }
}

impl FusedIterator for Expansion {}
