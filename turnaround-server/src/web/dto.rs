//! Data transfer objects for web and batch responses.

use serde::Serialize;

use crate::domain::ConnectedPair;
use crate::names::NameDirectory;
use crate::pipeline::{PipelineOutput, PipelineStats};

/// One arrival and the departure that follows it, flattened for export.
///
/// Field order is the export column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionRow {
    /// Airport code
    pub airport: String,

    /// Operating date as DD/MM/YYYY
    pub operating_date: String,

    /// Arrival time as HH:MM
    pub arrival_time: String,

    pub arrival_flight: String,

    /// Departure time as HH:MM, if connected
    pub departure_time: Option<String>,

    pub departure_flight: Option<String>,

    /// Ground time as H:MM, if connected
    pub ground_time: Option<String>,

    pub arrival_equipment: String,

    pub departure_equipment: Option<String>,

    /// Carrier of the arriving flight
    pub airline: String,

    /// Airport display name, if known
    pub airport_name: Option<String>,

    /// Airline display name, if known
    pub airline_name: Option<String>,
}

impl ConnectionRow {
    /// Project a connected pair, looking up display names in `names`.
    pub fn from_pair(pair: &ConnectedPair, names: &NameDirectory) -> Self {
        let departure = pair.departure.as_ref();

        Self {
            airport: pair.airport.to_string(),
            operating_date: pair.operating_date.format("%d/%m/%Y").to_string(),
            arrival_time: pair.arrival.time_of_day.to_string(),
            arrival_flight: pair.arrival.flight_number.to_string(),
            departure_time: departure.map(|d| d.time_of_day.to_string()),
            departure_flight: departure.map(|d| d.flight_number.to_string()),
            ground_time: pair.ground_time.map(|g| g.to_string()),
            arrival_equipment: pair.arrival.equipment.clone(),
            departure_equipment: departure.map(|d| d.equipment.clone()),
            airline: pair.arrival.airline.clone(),
            airport_name: names.airport(&pair.airport).map(str::to_string),
            airline_name: names.airline(&pair.arrival.airline).map(str::to_string),
        }
    }
}

/// Rows plus run counters.
#[derive(Debug, Clone, Serialize)]
pub struct ConnectionReport {
    pub rows: Vec<ConnectionRow>,
    pub stats: PipelineStats,
}

impl ConnectionReport {
    pub fn build(output: &PipelineOutput, names: &NameDirectory) -> Self {
        Self {
            rows: output
                .pairs
                .iter()
                .map(|p| ConnectionRow::from_pair(p, names))
                .collect(),
            stats: output.stats.clone(),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
