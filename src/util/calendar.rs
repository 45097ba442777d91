//! Calendar helpers that turn date ranges into working days.
//!
//! A working day is any Monday through Friday. Public holidays are not
//! tracked: a project that runs over a bank holiday still books that day.
//!
//! Ranges are always inclusive on both ends, so a range that starts and ends
//! on the same Wednesday has one working day.

use chrono::{Datelike, NaiveDate, Weekday};
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::iter::FusedIterator;

/// Returns true if the given date falls on a weekday.
pub fn is_working_day(date: &NaiveDate) -> bool {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => false,
        _ => true,
    }
}

/// Count the working days in the inclusive range `[start, end]`.
pub fn num_working_days(start: NaiveDate, end: NaiveDate) -> Result<u32> {
    Ok(DateRange::new(start, end)?.num_working_days())
}

/// Iterate the working days in the inclusive range `[start, end]`.
pub fn working_days(start: NaiveDate, end: NaiveDate) -> Result<WorkingDays> {
    Ok(DateRange::new(start, end)?.working_days())
}

/// A calendar month, used as the bucket key when spreading costs over time.
///
/// Months order chronologically (year first) and display as `YYYY-MM`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, getset::CopyGetters)]
#[getset(get_copy = "pub")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Create a month key. Returns `None` if `month` isn't in `1..=12`.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if month < 1 || month > 12 {
            return None;
        }
        Some(Self { year, month })
    }

    /// The month the given date falls in.
    pub fn from_date(date: &NaiveDate) -> Self {
        Self { year: date.year(), month: date.month() }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(feature = "with_serde")]
impl serde::Serialize for YearMonth {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// An inclusive range of dates where the start never comes after the end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a new range, failing with `InvalidRange` if `end < start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            Err(Error::InvalidRange { start, end })?;
        }
        Ok(Self { start, end })
    }

    /// Create a range without checking the bounds. A reversed range behaves
    /// as an empty one.
    pub(crate) fn new_unchecked(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether `date` falls within this range.
    pub fn contains(&self, date: &NaiveDate) -> bool {
        &self.start <= date && date <= &self.end
    }

    /// Number of calendar days in the range, weekends included.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Count the weekdays in this range.
    ///
    /// Every full week contributes five days, then the leftover days are
    /// checked one by one starting from the weekday the range opens on.
    pub fn num_working_days(&self) -> u32 {
        let total = self.num_days();
        if total <= 0 {
            return 0;
        }
        let full_weeks = total / 7;
        let first = self.start.weekday().num_days_from_monday() as i64;
        let leftover = (0..(total % 7))
            .filter(|offset| (first + offset) % 7 < 5)
            .count() as i64;
        (full_weeks * 5 + leftover) as u32
    }

    /// Enumerate the working days in this range, in order.
    pub fn working_days(&self) -> WorkingDays {
        WorkingDays {
            next: Some(self.start),
            end: self.end,
        }
    }

    /// Bucket this range's working days by the month they fall in. Months
    /// without a working day in the range are left out.
    pub fn working_days_by_month(&self) -> BTreeMap<YearMonth, u32> {
        let mut months = BTreeMap::new();
        for day in self.working_days() {
            let count = months.entry(YearMonth::from_date(&day)).or_insert(0);
            *count += 1;
        }
        months
    }
}

/// An iterator over the weekdays of a [DateRange](struct.DateRange.html).
///
/// A clone picks up where the original currently is; to walk the range again
/// from the top, ask the range for a fresh one.
#[derive(Clone, Debug)]
pub struct WorkingDays {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for WorkingDays {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        loop {
            let day = self.next?;
            if day > self.end {
                self.next = None;
                return None;
            }
            self.next = day.succ_opt();
            if is_working_day(&day) {
                return Some(day);
            }
        }
    }
}

impl FusedIterator for WorkingDays {}
