#[macro_use]
pub mod planning_model;
