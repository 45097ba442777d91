//! The planning core holds the datastructures and statistics for planning a
//! portfolio of projects against the people who work on them.
//!
//! A plan is a set of [employees][Employee], a set of [projects][Project] each
//! with one manager, and the daily hours each employee has committed to each
//! project. Once a plan is [built][PlanningSystem], the [stats] module answers
//! questions about it: what the average wage is, who is spread over the most
//! projects, what everything costs and how that cost falls month by month.
//!
//! The core doesn't read files or print reports. Plans come in through the
//! builder (or, with the `with_serde` feature, through a deserialized
//! [PlanningDocument][import]) and results go out as plain values.
//!
//! [Employee]: models/employee/struct.Employee.html
//! [Project]: models/project/struct.Project.html
//! [PlanningSystem]: system/planning/struct.PlanningSystem.html
//! [stats]: stats/index.html
//! [import]: import/struct.PlanningDocument.html

#[macro_use]
pub mod util;
pub mod error;
#[macro_use]
pub mod models;
pub mod stats;
pub mod system;
#[cfg(feature = "with_serde")]
pub mod import;

pub use models::{
    commitment::Commitment,
    employee::{Employee, EmployeeNumber},
    project::{Project, ProjectCode},
};
pub use system::{
    parameters::PlanningParameters,
    planning::{PlanningSystem, PlanningSystemBuilder},
};
