//! The planning system is one loaded plan: every employee and project for a
//! planning year, plus the commitments between them.
//!
//! A plan is put together with a [PlanningSystemBuilder] and is read-only once
//! built. Registration errors (duplicate identities, references to employees
//! or projects that don't exist) come back from the builder call that caused
//! them rather than being dropped.
//!
//! ```rust
//! use planning_core::{
//!     error::Error,
//!     models::{employee::Employee, project::Project},
//!     system::planning::PlanningSystem,
//! };
//! use chrono::NaiveDate;
//! use rust_decimal::Decimal;
//!
//! let start = NaiveDate::from_ymd_opt(2020, 3, 2).unwrap();
//! let end = NaiveDate::from_ymd_opt(2020, 3, 6).unwrap();
//! let system = PlanningSystem::builder("bridges", 2020)
//!     .add_employee(Employee::new(1, "Anna", Decimal::from(20)).unwrap()).unwrap()
//!     .add_employee(Employee::new(2, "Bram", Decimal::from(30)).unwrap()).unwrap()
//!     .add_project(Project::new("P1", "Bridge", start, end).unwrap(), 1).unwrap()
//!     .add_commitment("P1", 1, 8).unwrap()
//!     .add_commitment("P1", 2, 4).unwrap()
//!     .build();
//! assert_eq!(system.total_manpower_budget(), Ok(Decimal::from(1400)));
//! assert_eq!(system.average_hourly_wage(), Ok(Decimal::from(25)));
//!
//! let res = PlanningSystem::builder("bridges", 2020).add_commitment("P1", 3, 8);
//! assert!(matches!(res, Err(Error::UnknownReference(_))));
//! ```
//!
//! [PlanningSystemBuilder]: struct.PlanningSystemBuilder.html

use crate::{
    error::{Error, Result},
    models::{
        employee::{Employee, EmployeeNumber},
        project::{Project, ProjectCode},
    },
    stats::{self, PlanningStatistics},
    system::parameters::PlanningParameters,
    util::calendar::{DateRange, YearMonth},
};
use getset::Getters;
use rust_decimal::prelude::*;
#[cfg(feature = "with_serde")]
use serde_derive::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A fully loaded plan. Employees iterate by number, projects by code.
#[derive(Clone, Debug, PartialEq, Getters)]
#[cfg_attr(feature = "with_serde", derive(Serialize))]
#[getset(get = "pub")]
pub struct PlanningSystem {
    /// What this plan is called (usually where it was loaded from)
    name: String,
    /// The year the plan's projects run in. Informational only.
    year: i32,
    parameters: PlanningParameters,
    employees: BTreeMap<EmployeeNumber, Employee>,
    projects: BTreeMap<ProjectCode, Project>,
}

impl PlanningSystem {
    /// Start building a new, empty plan.
    pub fn builder<T: Into<String>>(name: T, year: i32) -> PlanningSystemBuilder {
        PlanningSystemBuilder::new(name, year)
    }

    /// Look up an employee by number.
    pub fn employee(&self, number: u32) -> Option<&Employee> {
        self.employees.get(&EmployeeNumber::new(number))
    }

    /// Look up a project by code.
    pub fn project(&self, code: &str) -> Option<&Project> {
        self.projects.get(code)
    }

    /// Whether either the employee or project set is empty, in which case most
    /// statistics don't mean much.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty() || self.projects.is_empty()
    }

    /// See [stats::average_hourly_wage](../../stats/fn.average_hourly_wage.html)
    pub fn average_hourly_wage(&self) -> Result<Decimal> {
        stats::average_hourly_wage(self)
    }

    /// See [stats::longest_project](../../stats/fn.longest_project.html)
    pub fn longest_project(&self) -> Option<&Project> {
        stats::longest_project(self)
    }

    /// See [stats::most_involved_count](../../stats/fn.most_involved_count.html)
    pub fn most_involved_count(&self) -> usize {
        stats::most_involved_count(self)
    }

    /// See [stats::most_involved_employees](../../stats/fn.most_involved_employees.html)
    pub fn most_involved_employees(&self) -> Vec<&Employee> {
        stats::most_involved_employees(self)
    }

    /// See [stats::total_manpower_budget](../../stats/fn.total_manpower_budget.html)
    pub fn total_manpower_budget(&self) -> Result<Decimal> {
        stats::total_manpower_budget(self)
    }

    /// See [stats::managed_budget_overview](../../stats/fn.managed_budget_overview.html)
    pub fn managed_budget_overview<F>(&self, filter: F) -> Result<BTreeMap<EmployeeNumber, Decimal>>
        where F: Fn(&Employee) -> bool,
    {
        stats::managed_budget_overview(self, filter)
    }

    /// Employees committed full-time (per this plan's parameters) to at least
    /// one project.
    pub fn fulltime_employees(&self) -> Vec<&Employee> {
        stats::fulltime_employees(self, self.parameters.fulltime_hours())
    }

    /// See [stats::cumulative_monthly_spends](../../stats/fn.cumulative_monthly_spends.html)
    pub fn cumulative_monthly_spends(&self) -> Result<BTreeMap<YearMonth, Decimal>> {
        stats::cumulative_monthly_spends(self)
    }

    /// See [stats::statistics](../../stats/fn.statistics.html)
    pub fn statistics(&self) -> Result<PlanningStatistics> {
        stats::statistics(self)
    }
}

impl fmt::Display for PlanningSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "plan_e{}_p{}", self.employees.len(), self.projects.len())
    }
}

/// Assembles a [PlanningSystem](struct.PlanningSystem.html) one registration
/// at a time.
///
/// Employees have to be registered before the projects they manage, and
/// projects before the commitments made to them. Every registration method
/// consumes the builder and hands it back on success, so a plan reads as one
/// chain of `?`s.
#[derive(Clone, Debug)]
pub struct PlanningSystemBuilder {
    system: PlanningSystem,
}

impl PlanningSystemBuilder {
    fn new<T: Into<String>>(name: T, year: i32) -> Self {
        Self {
            system: PlanningSystem {
                name: name.into(),
                year,
                parameters: PlanningParameters::default(),
                employees: BTreeMap::new(),
                projects: BTreeMap::new(),
            },
        }
    }

    /// Replace the default planning parameters.
    pub fn parameters(mut self, parameters: PlanningParameters) -> Self {
        self.system.parameters = parameters;
        self
    }

    /// Register an employee. Employee numbers must be unique, and the
    /// employee must not be linked to any projects yet (as one taken out of
    /// another built plan would be).
    pub fn add_employee(mut self, employee: Employee) -> Result<Self> {
        let number = *employee.number();
        if *employee.hourly_wage() < Decimal::zero() {
            Err(Error::InvalidWage(*employee.hourly_wage()))?;
        }
        if !employee.assigned_projects().is_empty() || !employee.managed_projects().is_empty() {
            Err(Error::AlreadyRegistered(format!("employee {}", number)))?;
        }
        if self.system.employees.contains_key(&number) {
            Err(Error::DuplicateIdentity(format!("employee {}", number)))?;
        }
        tracing::debug!(employee = %number, name = %employee.name(), "registered employee");
        self.system.employees.insert(number, employee);
        Ok(self)
    }

    /// Register a project along with its manager. The manager has to be a
    /// registered employee, and becomes both assigned to and manager of the
    /// project. The project itself must come in without a manager or
    /// commitments; those are only ever added through this builder.
    pub fn add_project(mut self, mut project: Project, manager: u32) -> Result<Self> {
        DateRange::new(*project.start(), *project.end())?;
        let code = project.code().clone();
        if project.manager().is_some() || !project.commitments().is_empty() {
            Err(Error::AlreadyRegistered(format!("project {}", code)))?;
        }
        if self.system.projects.contains_key(&code) {
            Err(Error::DuplicateIdentity(format!("project {}", code)))?;
        }
        let manager = EmployeeNumber::new(manager);
        let employee = self.system.employees.get_mut(&manager)
            .ok_or_else(|| Error::UnknownReference(format!("manager {} of project {}", manager, code)))?;
        employee.manage(code.clone());
        employee.assign(code.clone());
        project.set_manager(manager);
        tracing::debug!(project = %code, manager = %manager, working_days = project.num_working_days(), "registered project");
        self.system.projects.insert(code, project);
        Ok(self)
    }

    /// Commit `hours_per_day` of an employee's time to a project. Repeated
    /// commitments for the same pair add up.
    pub fn add_commitment(mut self, project_code: &str, employee_number: u32, hours_per_day: u32) -> Result<Self> {
        let number = EmployeeNumber::new(employee_number);
        let employee = self.system.employees.get_mut(&number)
            .ok_or_else(|| Error::UnknownReference(format!("employee {} committed to project {}", number, project_code)))?;
        let project = self.system.projects.get_mut(project_code)
            .ok_or_else(|| Error::UnknownReference(format!("project {} committed to by employee {}", project_code, number)))?;
        let total = project.add_commitment(employee, hours_per_day)?;
        employee.assign(project.code().clone());
        tracing::debug!(project = %project_code, employee = %number, hours_per_day, total, "registered commitment");
        Ok(self)
    }

    /// Finish the plan. Nothing can be registered after this.
    pub fn build(self) -> PlanningSystem {
        tracing::debug!(
            name = %self.system.name,
            year = self.system.year,
            employees = self.system.employees.len(),
            projects = self.system.projects.len(),
            "planning system built"
        );
        self.system
    }
}
