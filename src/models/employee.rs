//! An employee is a person whose working hours can be committed to projects.
//!
//! Employees track two relationships with projects: the projects they are
//! *assigned* to (they have hours committed there, or they manage it) and the
//! projects they *manage*. Both sets are filled in by the
//! [PlanningSystemBuilder] while a plan is loaded and are read-only once the
//! plan is built.
//!
//! [PlanningSystemBuilder]: ../../system/planning/struct.PlanningSystemBuilder.html

use crate::{
    error::{Error, Result},
    models::project::ProjectCode,
    system::planning::PlanningSystem,
};
use rust_decimal::prelude::*;
use std::collections::BTreeSet;

planning_model! {
    /// The `Employee` model describes a single member of staff.
    pub struct Employee {
        number: <<EmployeeNumber(u32)>>,
        /// The employee's full name
        name: String,
        /// What one hour of this employee's time costs
        hourly_wage: Decimal,
        /// Projects this employee has hours on (or manages)
        #[builder(setter(skip))]
        assigned_projects: BTreeSet<ProjectCode>,
        /// Projects this employee is the manager of
        #[builder(setter(skip))]
        managed_projects: BTreeSet<ProjectCode>,
    }
    EmployeeBuilder
}

impl Copy for EmployeeNumber {}

impl EmployeeNumber {
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl Employee {
    /// Create a new employee with no projects.
    pub fn new<T: Into<String>>(number: u32, name: T, hourly_wage: Decimal) -> Result<Self> {
        if hourly_wage < Decimal::zero() {
            Err(Error::InvalidWage(hourly_wage))?;
        }
        Self::builder()
            .number(number)
            .name(name)
            .hourly_wage(hourly_wage)
            .build()
            .map_err(|e| Error::BuilderFailed(e))
    }

    /// Whether this employee manages at least one project. Handy as a filter
    /// for [managed budget overviews][overview].
    ///
    /// [overview]: ../../stats/fn.managed_budget_overview.html
    pub fn has_projects(&self) -> bool {
        !self.managed_projects.is_empty()
    }

    pub fn is_assigned_to(&self, code: &str) -> bool {
        self.assigned_projects.contains(code)
    }

    pub fn manages(&self, code: &str) -> bool {
        self.managed_projects.contains(code)
    }

    /// Sum the manpower budgets of every project this employee manages. An
    /// employee managing nothing has a managed budget of zero.
    pub fn calculate_managed_budget(&self, system: &PlanningSystem) -> Result<Decimal> {
        self.managed_projects.iter()
            .filter_map(|code| system.project(code.as_str()))
            .filter(|project| project.is_managed_by(&self.number))
            .try_fold(Decimal::zero(), |acc, project| {
                acc.checked_add(project.calculate_manpower_budget()?)
                    .ok_or_else(|| Error::Overflow(format!("managed budget of employee {}", self.number)))
            })
    }

    /// Record that this employee works on the given project. Returns false if
    /// they already did.
    pub(crate) fn assign(&mut self, code: ProjectCode) -> bool {
        self.assigned_projects.insert(code)
    }

    /// Record that this employee manages the given project. Returns false if
    /// they already did.
    pub(crate) fn manage(&mut self, code: ProjectCode) -> bool {
        self.managed_projects.insert(code)
    }
}
