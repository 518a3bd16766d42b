//! Arrival-to-departure connections.

use chrono::{NaiveDate, NaiveDateTime};

use super::{AirportCode, Event, FlightNumber, GroundTime, TimeOfDay};

/// The flight-level details of one end of a connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegRef {
    pub airline: String,
    pub flight_number: FlightNumber,
    pub time_of_day: TimeOfDay,
    pub timestamp: NaiveDateTime,
    pub equipment: String,
}

impl LegRef {
    /// Take the flight-level details of an event.
    pub fn from_event(event: &Event) -> Self {
        Self {
            airline: event.airline.clone(),
            flight_number: event.flight_number.clone(),
            time_of_day: event.time_of_day.clone(),
            timestamp: event.timestamp,
            equipment: event.equipment.clone(),
        }
    }
}

/// An arrival at an airport and the departure its aircraft operates next.
///
/// `departure` and `ground_time` are both `None` for an arrival that declared
/// no successor or whose successor could not be found; that is a normal
/// outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectedPair {
    pub airport: AirportCode,
    pub operating_date: NaiveDate,
    pub arrival: LegRef,
    pub departure: Option<LegRef>,
    pub ground_time: Option<GroundTime>,
}

impl ConnectedPair {
    /// Connect an arrival to a departure.
    pub fn connected(arrival: &Event, departure: &Event) -> Self {
        Self {
            airport: arrival.airport.clone(),
            operating_date: arrival.operating_date,
            arrival: LegRef::from_event(arrival),
            departure: Some(LegRef::from_event(departure)),
            ground_time: Some(GroundTime::between(arrival.timestamp, departure.timestamp)),
        }
    }

    /// An arrival with no matched departure.
    pub fn unconnected(arrival: &Event) -> Self {
        Self {
            airport: arrival.airport.clone(),
            operating_date: arrival.operating_date,
            arrival: LegRef::from_event(arrival),
            departure: None,
            ground_time: None,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.departure.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Direction;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 12, 1).unwrap()
    }

    fn event(direction: Direction, flight: &str, hhmm: &str) -> Event {
        let time_of_day = TimeOfDay::parse(hhmm).unwrap();
        Event {
            airport: AirportCode::parse("SDU").unwrap(),
            direction,
            operating_date: date(),
            timestamp: time_of_day.on(date()).unwrap(),
            time_of_day,
            airline: "G3".to_string(),
            flight_number: FlightNumber::parse(flight).unwrap(),
            equipment: "73X".to_string(),
            successor: None,
        }
    }

    #[test]
    fn connected_pair_computes_ground_time() {
        let arr = event(Direction::Arrival, "1000", "1010");
        let dep = event(Direction::Departure, "1009", "1100");

        let pair = ConnectedPair::connected(&arr, &dep);
        assert!(pair.is_connected());
        assert_eq!(pair.airport.as_str(), "SDU");
        assert_eq!(pair.arrival.flight_number.as_str(), "1000");
        assert_eq!(pair.departure.as_ref().unwrap().flight_number.as_str(), "1009");
        assert_eq!(pair.ground_time.unwrap().to_string(), "0:50");
    }

    #[test]
    fn unconnected_pair_has_no_departure() {
        let arr = event(Direction::Arrival, "1000", "1010");
        let pair = ConnectedPair::unconnected(&arr);

        assert!(!pair.is_connected());
        assert!(pair.departure.is_none());
        assert!(pair.ground_time.is_none());
        assert_eq!(pair.operating_date, date());
    }
}
