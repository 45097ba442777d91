//! The error module holds the single error type shared by every part of the
//! planning core, along with a `Result` alias that uses it.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// An error type for when loading or querying a plan goes awry.
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    /// An employee or project already carries links to projects or people,
    /// usually because it was cloned out of another plan
    #[error("already registered in a plan: {0}")]
    AlreadyRegistered(String),
    /// A derive_builder builder was missing a field (or failed validation)
    #[error("error building object {0}")]
    BuilderFailed(String),
    /// An employee number or project code was registered twice
    #[error("duplicate identity: {0}")]
    DuplicateIdentity(String),
    /// A statistic needs at least one member of the named set
    #[error("cannot compute over empty set of {0}")]
    EmptyPopulation(String),
    /// Hours per day must be positive (and must not overflow when summed)
    #[error("invalid hours per day: {0}")]
    InvalidHours(u32),
    /// A date range ends before it starts
    #[error("invalid date range: {end} precedes {start}")]
    InvalidRange {
        start: NaiveDate,
        end: NaiveDate,
    },
    /// Wages cannot be negative
    #[error("invalid hourly wage: {0}")]
    InvalidWage(Decimal),
    /// A money amount grew past what a `Decimal` can hold
    #[error("arithmetic overflow computing {0}")]
    Overflow(String),
    /// A registration referenced an employee or project we don't know about
    #[error("unknown reference: {0}")]
    UnknownReference(String),
}

pub type Result<T> = std::result::Result<T, Error>;
