//! Leg endpoint events.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

use super::{AirportCode, FlightNumber, TimeOfDay};

/// Which end of a leg an event describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Departure,
    Arrival,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Departure => f.write_str("departure"),
            Direction::Arrival => f.write_str("arrival"),
        }
    }
}

/// One end of a dated flight leg: a departure from the origin or an arrival
/// at the destination.
///
/// `operating_date` is the date of the flight instance the event came from.
/// It can differ from `timestamp.date()` when the schedule time is 24:00 or
/// later, and it is the date used when pairing arrivals with departures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub airport: AirportCode,
    pub direction: Direction,
    pub operating_date: NaiveDate,
    /// Schedule time of day as written in the source
    pub time_of_day: TimeOfDay,
    /// Operating date and time of day combined
    pub timestamp: NaiveDateTime,
    pub airline: String,
    pub flight_number: FlightNumber,
    pub equipment: String,
    /// Next flight of the same aircraft; only set on arrivals
    pub successor: Option<FlightNumber>,
}

impl Event {
    pub fn is_arrival(&self) -> bool {
        self.direction == Direction::Arrival
    }

    pub fn is_departure(&self) -> bool {
        self.direction == Direction::Departure
    }
}
