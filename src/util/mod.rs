//! A set of utility structs and functions used by the planning core.

pub mod calendar;
#[macro_use]
pub mod number;
