//! The system module holds the planning system itself (one loaded plan for
//! one planning year) and the parameters that tune how its statistics are
//! computed.

pub mod parameters;
pub mod planning;
