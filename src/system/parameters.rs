//! Defines the tunable parameters of a plan, such as how many hours a day
//! count as full-time and which wages count as junior.

use crate::models::employee::Employee;
use getset::{CopyGetters, Setters};
use rust_decimal::Decimal;
#[cfg(feature = "with_serde")]
use serde_derive::{Serialize, Deserialize};

/// Daily hours on a single project at which an employee counts as working
/// full-time.
pub const FULLTIME_HOURS: u32 = 8;

/// Holds the parameters the statistics depend on.
#[derive(Clone, Debug, PartialEq, CopyGetters, Setters)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "with_serde", serde(default))]
#[getset(get_copy = "pub", set = "pub")]
pub struct PlanningParameters {
    /// Committed hours per day (on one project) that make someone full-time
    fulltime_hours: u32,
    /// The highest hourly wage still counted as junior
    junior_wage_ceiling: Decimal,
}

impl Default for PlanningParameters {
    fn default() -> Self {
        Self {
            fulltime_hours: FULLTIME_HOURS,
            junior_wage_ceiling: num!(26),
        }
    }
}

impl PlanningParameters {
    /// Create a new params object with the default values
    pub fn new() -> Self {
        Default::default()
    }

    /// Whether the given employee's wage is at or below the junior ceiling.
    pub fn is_junior(&self, employee: &Employee) -> bool {
        employee.hourly_wage() <= &self.junior_wage_ceiling
    }
}
