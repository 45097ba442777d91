//! Models are the entities the planning core reasons about: the people doing
//! the work, the projects the work goes into, and the commitments tying the
//! two together.

#[macro_use]
pub(crate) mod lib;

pub mod employee;
pub mod project;
pub mod commitment;
