//! Splitting dated flights into departure and arrival events.

use crate::domain::{AirportCode, Direction, Event, FlightInstance, TimeOfDay};

/// Turn a flight instance into its departure and arrival events.
///
/// A side is emitted only when both its airport and its time are present and
/// the time is four digits, so an instance yields 0, 1 or 2 events. The
/// departure, when present, comes first. The successor flight number travels
/// on the arrival only.
pub fn materialize(instance: &FlightInstance) -> Vec<Event> {
    let period = &instance.period;

    [
        leg_event(
            instance,
            Direction::Departure,
            period.origin_airport.as_ref(),
            period.departure_time.as_ref(),
        ),
        leg_event(
            instance,
            Direction::Arrival,
            period.destination_airport.as_ref(),
            period.arrival_time.as_ref(),
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn leg_event(
    instance: &FlightInstance,
    direction: Direction,
    airport: Option<&AirportCode>,
    time_of_day: Option<&TimeOfDay>,
) -> Option<Event> {
    let airport = airport?;
    let time_of_day = time_of_day?;
    let timestamp = time_of_day.on(instance.operating_date)?;
    let period = &instance.period;

    let successor = match direction {
        Direction::Arrival => period.successor.clone(),
        Direction::Departure => None,
    };

    Some(Event {
        airport: airport.clone(),
        direction,
        operating_date: instance.operating_date,
        time_of_day: time_of_day.clone(),
        timestamp,
        airline: period.airline.clone(),
        flight_number: period.flight_number.clone(),
        equipment: period.equipment.clone(),
        successor,
    })
}
