//! Flight periods and their dated instances.

use std::sync::Arc;

use chrono::NaiveDate;

use super::{AirportCode, FlightNumber, SsimDate, TimeOfDay, WeekdayMask};

/// One decoded type-3 schedule line: a flight leg operating on the
/// selected weekdays of an inclusive date range.
///
/// Immutable once decoded. Station fields are optional because source files
/// sometimes carry truncated station blocks; a period with a missing side is
/// still usable for the side that is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightPeriod {
    /// Carrier designator (2-3 characters)
    pub airline: String,
    pub flight_number: FlightNumber,
    /// First operating date, inclusive
    pub valid_from: SsimDate,
    /// Last operating date, inclusive
    pub valid_to: SsimDate,
    pub weekdays: WeekdayMask,
    pub origin_airport: Option<AirportCode>,
    pub departure_time: Option<TimeOfDay>,
    pub destination_airport: Option<AirportCode>,
    pub arrival_time: Option<TimeOfDay>,
    /// Aircraft type, free-form (may be empty)
    pub equipment: String,
    /// Flight number the arriving aircraft operates next
    pub successor: Option<FlightNumber>,
}

/// A flight period pinned to one operating date.
///
/// The period is shared, not copied, between all instances expanded from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightInstance {
    pub period: Arc<FlightPeriod>,
    pub operating_date: NaiveDate,
}

impl FlightInstance {
    /// Create an instance of `period` on `operating_date`.
    pub fn new(period: Arc<FlightPeriod>, operating_date: NaiveDate) -> Self {
        Self {
            period,
            operating_date,
        }
    }
}
