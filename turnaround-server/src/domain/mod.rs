//! Domain types for the schedule turnaround pipeline.
//!
//! This module contains the value types that flow between pipeline stages.
//! Code types enforce their invariants at construction time, so stages that
//! receive them can trust their shape.

mod airport;
mod connection;
mod error;
mod event;
mod flight_number;
mod period;
mod time;
mod weekday;

pub use airport::AirportCode;
pub use connection::{ConnectedPair, LegRef};
pub use error::{DecodeError, DecodeErrorKind};
pub use event::{Direction, Event};
pub use flight_number::FlightNumber;
pub use period::{FlightInstance, FlightPeriod};
pub use time::{GroundTime, InvalidSsimDate, SsimDate, TimeOfDay};
pub use weekday::WeekdayMask;
