// Domain layer: value types and the calendar-field port. No I/O.

pub mod model;
pub mod ports;
