//! Departure index for successor lookup.
//!
//! An arriving aircraft's next flight is a departure from the same airport,
//! on the same operating date, under the successor flight number. Indexing
//! departures by exactly that triple turns each arrival's search into a
//! single map lookup.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::{AirportCode, Event, FlightNumber};

/// Lookup key for departures.
///
/// A struct rather than a joined string so that `("AB", "1")` and
/// `("A", "B1")`-style collisions cannot happen.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DepartureKey {
    pub airport: AirportCode,
    pub flight_number: FlightNumber,
    pub operating_date: NaiveDate,
}

impl DepartureKey {
    /// The key a departure event is filed under.
    pub fn of(event: &Event) -> Self {
        Self {
            airport: event.airport.clone(),
            flight_number: event.flight_number.clone(),
            operating_date: event.operating_date,
        }
    }

    /// The key an arrival's successor would be filed under, if it has one.
    pub fn successor_of(arrival: &Event) -> Option<Self> {
        Some(Self {
            airport: arrival.airport.clone(),
            flight_number: arrival.successor.clone()?,
            operating_date: arrival.operating_date,
        })
    }
}

/// Departure events grouped by [`DepartureKey`], in input order per key.
#[derive(Debug, Default)]
pub struct DepartureIndex<'a> {
    by_key: HashMap<DepartureKey, Vec<&'a Event>>,
}

impl<'a> DepartureIndex<'a> {
    /// Index every departure in `events`; arrivals are ignored.
    pub fn from_events(events: impl IntoIterator<Item = &'a Event>) -> Self {
        let mut by_key: HashMap<DepartureKey, Vec<&'a Event>> = HashMap::new();

        for event in events.into_iter().filter(|e| e.is_departure()) {
            by_key.entry(DepartureKey::of(event)).or_default().push(event);
        }

        Self { by_key }
    }

    /// All departures filed under `key`, in input order.
    pub fn candidates(&self, key: &DepartureKey) -> &[&'a Event] {
        self.by_key.get(key).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// The earliest departure under `key` leaving at or after `not_before`.
    ///
    /// Equal timestamps resolve to the first in input order.
    pub fn earliest_from(&self, key: &DepartureKey, not_before: NaiveDateTime) -> Option<&'a Event> {
        self.candidates(key)
            .iter()
            .copied()
            .filter(|d| d.timestamp >= not_before)
            .min_by_key(|d| d.timestamp)
    }

    /// Number of distinct keys.
    pub fn key_count(&self) -> usize {
        self.by_key.len()
    }

    /// Total number of indexed departures.
    pub fn departure_count(&self) -> usize {
        self.by_key.values().map(|v| v.len()).sum()
    }
}
