//! A project is a stretch of calendar time that employees commit daily hours
//! to. Its cost (the *manpower budget*) follows from those commitments, the
//! employees' wages, and the number of working days between its start and end
//! dates.
//!
//! Every project in a built plan has exactly one manager. The manager is held
//! here as an employee number; the employee side mirrors it in its managed
//! set, and both are written in the same builder call.

use chrono::NaiveDate;
use crate::{
    error::{Error, Result},
    models::{
        commitment::Commitment,
        employee::{Employee, EmployeeNumber},
    },
    util::calendar::{DateRange, YearMonth},
};
use rust_decimal::prelude::*;
use std::borrow::Borrow;
use std::collections::BTreeMap;

planning_model! {
    /// The `Project` model.
    pub struct Project {
        code: <<ProjectCode(String)>>,
        /// A human-readable name for the project
        name: String,
        /// The first day of the project (inclusive)
        start: NaiveDate,
        /// The last day of the project (inclusive)
        end: NaiveDate,
        /// The employee managing this project, set on registration
        #[builder(setter(skip))]
        manager: Option<EmployeeNumber>,
        /// Daily hours committed to this project, by employee
        #[builder(setter(skip))]
        commitments: BTreeMap<EmployeeNumber, Commitment>,
    }
    ProjectBuilder
}

impl ProjectCode {
    /// Return a string ref for this code
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::convert::From<&str> for ProjectCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl Borrow<str> for ProjectCode {
    fn borrow(&self) -> &str {
        self.0.as_str()
    }
}

impl Project {
    /// Create a new project with no manager and no commitments. Fails if the
    /// end date comes before the start date.
    pub fn new<C, T>(code: C, name: T, start: NaiveDate, end: NaiveDate) -> Result<Self>
        where C: Into<ProjectCode>,
              T: Into<String>,
    {
        DateRange::new(start, end)?;
        Self::builder()
            .code(code)
            .name(name)
            .start(start)
            .end(end)
            .build()
            .map_err(|e| Error::BuilderFailed(e))
    }

    /// The project's dates as a range.
    pub fn span(&self) -> DateRange {
        DateRange::new_unchecked(self.start, self.end)
    }

    /// The number of weekdays between the start and end dates, inclusive.
    pub fn num_working_days(&self) -> u32 {
        self.span().num_working_days()
    }

    /// How many of this project's working days fall in each month.
    pub fn working_days_by_month(&self) -> BTreeMap<YearMonth, u32> {
        self.span().working_days_by_month()
    }

    pub fn is_managed_by(&self, number: &EmployeeNumber) -> bool {
        self.manager.as_ref() == Some(number)
    }

    /// Daily hours the given employee has on this project, zero if none.
    pub fn committed_hours(&self, number: &EmployeeNumber) -> u32 {
        self.commitments.get(number)
            .map(|commitment| commitment.hours_per_day())
            .unwrap_or(0)
    }

    /// What a single working day of this project costs across everyone
    /// committed to it.
    pub fn daily_cost(&self) -> Result<Decimal> {
        self.commitments.values()
            .try_fold(Decimal::zero(), |acc, commitment| {
                acc.checked_add(commitment.daily_cost()?)
                    .ok_or_else(|| Error::Overflow(format!("daily cost of project {}", self.code)))
            })
    }

    /// The total cost of the project: the daily cost of every commitment, over
    /// every working day.
    pub fn calculate_manpower_budget(&self) -> Result<Decimal> {
        self.daily_cost()?.checked_mul(Decimal::from(self.num_working_days()))
            .ok_or_else(|| Error::Overflow(format!("manpower budget of project {}", self.code)))
    }

    /// Spread this project's budget over the months it runs in, in proportion
    /// to the working days in each month. The values always add back up to
    /// the full manpower budget.
    pub fn monthly_spends(&self) -> Result<BTreeMap<YearMonth, Decimal>> {
        let daily_cost = self.daily_cost()?;
        self.working_days_by_month().into_iter()
            .map(|(month, days)| {
                daily_cost.checked_mul(Decimal::from(days))
                    .map(|spend| (month, spend))
                    .ok_or_else(|| Error::Overflow(format!("{} spend of project {}", month, self.code)))
            })
            .collect()
    }

    pub(crate) fn set_manager(&mut self, number: EmployeeNumber) {
        self.manager = Some(number);
    }

    /// Commit `hours_per_day` of the employee's time to this project, adding
    /// to anything they already had here. Returns the new daily total.
    pub(crate) fn add_commitment(&mut self, employee: &Employee, hours_per_day: u32) -> Result<u32> {
        let number = *employee.number();
        match self.commitments.get_mut(&number) {
            Some(commitment) => commitment.accumulate(hours_per_day)?,
            None => {
                let commitment = Commitment::new(employee, self.code.clone(), hours_per_day)?;
                self.commitments.insert(number, commitment);
            }
        }
        Ok(self.committed_hours(&number))
    }
}
