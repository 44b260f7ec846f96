use chrono::{NaiveDate, TimeDelta};
use frontline_utils::dates::{format_date, parse_date};
use frontline_utils::error::DateError;
use std::mem::replace;

/// An inclusive range of calendar days.
///
/// Iterating yields each date from the start date through the end date.
/// Since the iterator advances the start in place, copy the range before
/// iterating if it is still needed for filtering.
#[derive(Clone, Eq, PartialEq, Copy, Debug)]
pub struct DateRange(pub NaiveDate, pub NaiveDate);

impl DateRange {
    /// Build a range, rejecting a start that falls after the end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateError> {
        if start > end {
            return Err(DateError(format!(
                "start {} is after end {}",
                format_date(&start),
                format_date(&end)
            )));
        }
        Ok(DateRange(start, end))
    }

    /// Parse both bounds from "YYYY-MM-DD" strings.
    pub fn parse(start: &str, end: &str) -> anyhow::Result<Self> {
        let range = DateRange::new(parse_date(start)?, parse_date(end)?)?;
        Ok(range)
    }

    pub fn start(&self) -> NaiveDate {
        self.0
    }

    pub fn end(&self) -> NaiveDate {
        self.1
    }

    /// Both bounds rendered as ISO strings.
    pub fn bounds(&self) -> (String, String) {
        (format_date(&self.0), format_date(&self.1))
    }

    /// The bounds as ISO strings, for testing many dates against the range.
    pub fn iso_bounds(&self) -> IsoBounds {
        let (start, end) = self.bounds();
        IsoBounds { start, end }
    }

    /// Whether an ISO date string lies inside the range (inclusive).
    ///
    /// Formats both bounds on every call; when filtering a collection,
    /// build [`IsoBounds`] once with [`DateRange::iso_bounds`] instead.
    pub fn contains(&self, date: &str) -> bool {
        self.iso_bounds().contains(date)
    }

    /// Clamp this range to lie within `outer`.
    pub fn clamp_to(&self, outer: &DateRange) -> DateRange {
        let start = self.0.max(outer.0).min(outer.1);
        let end = self.1.min(outer.1).max(start);
        DateRange(start, end)
    }

    /// Number of calendar days covered, both ends included.
    pub fn num_days(&self) -> i64 {
        (self.1 - self.0).num_days() + 1
    }
}

/// Inclusive bounds of a [`DateRange`] rendered once as ISO strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IsoBounds {
    pub start: String,
    pub end: String,
}

impl IsoBounds {
    /// Compares strings, which orders correctly for zero-padded ISO dates
    /// and never fails on a malformed date.
    pub fn contains(&self, date: &str) -> bool {
        date >= self.start.as_str() && date <= self.end.as_str()
    }
}

impl Iterator for DateRange {
    type Item = NaiveDate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 <= self.1 {
            let next = self.0 + TimeDelta::days(1);
            Some(replace(&mut self.0, next))
        } else {
            None
        }
    }
}
