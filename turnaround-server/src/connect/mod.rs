//! Arrival-to-departure matching.
//!
//! For each arrival that names a successor flight, find the departure the
//! same aircraft most plausibly operates next: same airport, same operating
//! date, successor flight number, leaving no earlier than the arrival, and
//! of those the earliest. Which departure is chosen does not depend on input
//! order except for exact timestamp ties, which go to the departure seen
//! first.

mod departure_index;

use tracing::{debug, trace};

use crate::domain::{ConnectedPair, Event};

pub use departure_index::{DepartureIndex, DepartureKey};

/// Pair every arrival in `events` with its successor departure.
///
/// Returns one [`ConnectedPair`] per arrival event, in input order. All
/// departures are indexed before any arrival is resolved.
pub fn connect(events: &[Event]) -> Vec<ConnectedPair> {
    let index = DepartureIndex::from_events(events);
    debug!(
        departures = index.departure_count(),
        keys = index.key_count(),
        "indexed departures"
    );

    events
        .iter()
        .filter(|e| e.is_arrival())
        .map(|arrival| connect_arrival(arrival, &index))
        .collect()
}

/// Resolve one arrival against a departure index.
pub fn connect_arrival(arrival: &Event, index: &DepartureIndex<'_>) -> ConnectedPair {
    let departure = DepartureKey::successor_of(arrival)
        .and_then(|key| index.earliest_from(&key, arrival.timestamp));

    match departure {
        Some(departure) => {
            trace!(
                airport = %arrival.airport,
                arrival = %arrival.flight_number,
                departure = %departure.flight_number,
                "connected"
            );
            ConnectedPair::connected(arrival, departure)
        }
        None => ConnectedPair::unconnected(arrival),
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{AirportCode, Direction, FlightNumber, TimeOfDay};
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 12, 1).unwrap()
    }

    fn event(direction: Direction, minutes: u32, flight: u8, successor: Option<u8>) -> Event {
        let time_of_day = TimeOfDay::parse(&format!("{:02}{:02}", minutes / 60, minutes % 60)).unwrap();
        Event {
            airport: AirportCode::parse("SDU").unwrap(),
            direction,
            operating_date: date(),
            timestamp: time_of_day.on(date()).unwrap(),
            time_of_day,
            airline: "G3".to_string(),
            flight_number: FlightNumber::parse(&format!("{flight:04}")).unwrap(),
            equipment: "73X".to_string(),
            successor: successor.and_then(|s| FlightNumber::parse(&format!("{s:04}"))),
        }
    }

    prop_compose! {
        fn arb_event()(
            is_arrival in any::<bool>(),
            minutes in 0u32..1440,
            flight in 0u8..4,
            successor in proptest::option::of(0u8..4)
        ) -> Event {
            if is_arrival {
                event(Direction::Arrival, minutes, flight, successor)
            } else {
                event(Direction::Departure, minutes, flight, None)
            }
        }
    }

    proptest! {
        /// One pair per arrival; matched departures never leave early and the
        /// ground time is exactly the gap
        #[test]
        fn pairs_are_consistent(events in proptest::collection::vec(arb_event(), 0..40)) {
            let pairs = connect(&events);
            let arrivals = events.iter().filter(|e| e.is_arrival()).count();
            prop_assert_eq!(pairs.len(), arrivals);

            for pair in &pairs {
                match (&pair.departure, pair.ground_time) {
                    (Some(dep), Some(gt)) => {
                        prop_assert!(dep.timestamp >= pair.arrival.timestamp);
                        prop_assert_eq!(gt.duration(), dep.timestamp - pair.arrival.timestamp);
                    }
                    (None, None) => {}
                    _ => prop_assert!(false, "departure and ground time must agree"),
                }
            }
        }

        /// The chosen departure is the earliest qualifying candidate
        #[test]
        fn chosen_departure_is_minimal(events in proptest::collection::vec(arb_event(), 0..40)) {
            let arrivals: Vec<&Event> = events.iter().filter(|e| e.is_arrival()).collect();

            for (pair, arrival) in connect(&events).iter().zip(arrivals) {
                let best = arrival.successor.as_ref().and_then(|s| {
                    events
                        .iter()
                        .filter(|d| d.is_departure() && &d.flight_number == s)
                        .filter(|d| d.timestamp >= arrival.timestamp)
                        .map(|d| d.timestamp)
                        .min()
                });
                prop_assert_eq!(pair.departure.as_ref().map(|d| d.timestamp), best);
            }
        }

        /// Running twice gives identical output
        #[test]
        fn deterministic(events in proptest::collection::vec(arb_event(), 0..40)) {
            prop_assert_eq!(connect(&events), connect(&events));
        }
    }
}
