//! Plans usually come from somewhere else: a file, a request body, a config
//! store. This module defines the shape of a plan as plain serializable
//! records so any serde format can describe one, and replays those records
//! through the [PlanningSystemBuilder] so a document gets exactly the same
//! checks as a plan built in code.
//!
//! ```rust
//! use planning_core::import::PlanningDocument;
//!
//! let doc: PlanningDocument = serde_json::from_str(r#"{
//!     "name": "bridges",
//!     "year": 2020,
//!     "employees": [
//!         { "number": 1, "name": "Anna", "hourly_wage": 20 },
//!         { "number": 2, "name": "Bram", "hourly_wage": 30 }
//!     ],
//!     "projects": [
//!         { "code": "P1", "name": "Bridge", "start": "2020-03-02", "end": "2020-03-06", "manager": 1 }
//!     ],
//!     "commitments": [
//!         { "project": "P1", "employee": 1, "hours_per_day": 8 },
//!         { "project": "P1", "employee": 2, "hours_per_day": 4 }
//!     ]
//! }"#).unwrap();
//! let system = doc.into_system().unwrap();
//! assert_eq!(system.project("P1").unwrap().num_working_days(), 5);
//! ```
//!
//! [PlanningSystemBuilder]: ../system/planning/struct.PlanningSystemBuilder.html

use chrono::NaiveDate;
use crate::{
    error::Result,
    models::{
        employee::Employee,
        project::Project,
    },
    system::{
        parameters::PlanningParameters,
        planning::{PlanningSystem, PlanningSystemBuilder},
    },
};
use rust_decimal::Decimal;
use serde_derive::{Serialize, Deserialize};

/// One employee as it appears in a planning document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub number: u32,
    pub name: String,
    pub hourly_wage: Decimal,
}

/// One project (and who manages it) as it appears in a planning document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub code: String,
    pub name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// The number of the employee managing this project
    pub manager: u32,
}

/// One commitment as it appears in a planning document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommitmentRecord {
    pub project: String,
    pub employee: u32,
    pub hours_per_day: u32,
}

/// A whole plan, as a document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanningDocument {
    pub name: String,
    pub year: i32,
    #[serde(default)]
    pub parameters: PlanningParameters,
    #[serde(default)]
    pub employees: Vec<EmployeeRecord>,
    #[serde(default)]
    pub projects: Vec<ProjectRecord>,
    #[serde(default)]
    pub commitments: Vec<CommitmentRecord>,
}

impl PlanningDocument {
    /// Build the planning system this document describes. Employees go in
    /// first, then projects, then commitments; the first record that fails
    /// to register stops the import and its error is returned.
    pub fn into_system(self) -> Result<PlanningSystem> {
        let PlanningDocument { name, year, parameters, employees, projects, commitments } = self;
        let mut builder = PlanningSystem::builder(name, year).parameters(parameters);
        for record in employees {
            builder = Self::register_employee(builder, record)?;
        }
        for record in projects {
            builder = Self::register_project(builder, record)?;
        }
        for record in commitments {
            builder = Self::register_commitment(builder, record)?;
        }
        Ok(builder.build())
    }

    fn register_employee(builder: PlanningSystemBuilder, record: EmployeeRecord) -> Result<PlanningSystemBuilder> {
        let number = record.number;
        Employee::new(record.number, record.name, record.hourly_wage)
            .and_then(|employee| builder.add_employee(employee))
            .map_err(|err| {
                tracing::warn!(employee = number, error = %err, "rejected employee record");
                err
            })
    }

    fn register_project(builder: PlanningSystemBuilder, record: ProjectRecord) -> Result<PlanningSystemBuilder> {
        let code = record.code.clone();
        let manager = record.manager;
        Project::new(record.code, record.name, record.start, record.end)
            .and_then(|project| builder.add_project(project, manager))
            .map_err(|err| {
                tracing::warn!(project = %code, error = %err, "rejected project record");
                err
            })
    }

    fn register_commitment(builder: PlanningSystemBuilder, record: CommitmentRecord) -> Result<PlanningSystemBuilder> {
        builder.add_commitment(&record.project, record.employee, record.hours_per_day)
            .map_err(|err| {
                tracing::warn!(project = %record.project, employee = record.employee, error = %err, "rejected commitment record");
                err
            })
    }
}
