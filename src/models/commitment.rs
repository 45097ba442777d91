//! A commitment is an employee's promise to spend a number of hours on a
//! project every working day the project runs.
//!
//! Commitments don't have an identity of their own: they live inside the
//! [Project] they belong to, keyed by employee number. Committing the same
//! employee to the same project twice adds the hours together.
//!
//! [Project]: ../project/struct.Project.html

use crate::{
    error::{Error, Result},
    models::{
        employee::{Employee, EmployeeNumber},
        project::ProjectCode,
    },
};
use getset::{CopyGetters, Getters};
use rust_decimal::prelude::*;
#[cfg(feature = "with_serde")]
use serde_derive::Serialize;

/// An employee's daily hours on one project.
#[derive(Clone, Debug, PartialEq, Getters, CopyGetters)]
#[cfg_attr(feature = "with_serde", derive(Serialize))]
pub struct Commitment {
    #[getset(get_copy = "pub")]
    employee: EmployeeNumber,
    #[getset(get = "pub")]
    project: ProjectCode,
    /// Hours per working day, accumulated over every registration
    #[getset(get_copy = "pub")]
    hours_per_day: u32,
    /// The employee's wage, copied in when the commitment is made. Wages don't
    /// change once an employee exists, so this never goes stale.
    #[getset(get_copy = "pub")]
    hourly_wage: Decimal,
}

impl Commitment {
    pub(crate) fn new(employee: &Employee, project: ProjectCode, hours_per_day: u32) -> Result<Self> {
        if hours_per_day == 0 {
            Err(Error::InvalidHours(hours_per_day))?;
        }
        Ok(Self {
            employee: *employee.number(),
            project,
            hours_per_day,
            hourly_wage: *employee.hourly_wage(),
        })
    }

    /// Add more hours on top of what's already committed.
    pub(crate) fn accumulate(&mut self, hours_per_day: u32) -> Result<()> {
        if hours_per_day == 0 {
            Err(Error::InvalidHours(hours_per_day))?;
        }
        self.hours_per_day = self.hours_per_day.checked_add(hours_per_day)
            .ok_or(Error::InvalidHours(hours_per_day))?;
        Ok(())
    }

    /// What one working day of this commitment costs.
    pub fn daily_cost(&self) -> Result<Decimal> {
        Decimal::from(self.hours_per_day).checked_mul(self.hourly_wage)
            .ok_or_else(|| Error::Overflow(format!("daily cost of employee {} on project {}", self.employee, self.project)))
    }

    /// Whether this commitment alone reaches the given daily threshold.
    pub fn is_fulltime(&self, threshold: u32) -> bool {
        self.hours_per_day >= threshold
    }
}
