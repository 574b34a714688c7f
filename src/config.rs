//! Run configuration: the API endpoint, the requested date window, and the
//! chart output path. Everything is passed explicitly; there is no
//! process-global state.

use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

/// Returned by [`DateRange::new`] when `from` is after `to`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid date range: from {from} is after to {to}")]
pub struct InvalidDateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// An inclusive calendar date window `[from, to]`.
///
/// Construction enforces `from <= to`, so every instance spans at least one
/// day and [`DateRange::iter_days`] is never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    from: NaiveDate,
    to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, InvalidDateRange> {
        if from > to {
            return Err(InvalidDateRange { from, to });
        }
        Ok(Self { from, to })
    }

    pub fn start(&self) -> NaiveDate {
        self.from
    }

    pub fn end(&self) -> NaiveDate {
        self.to
    }

    /// Number of calendar days covered, inclusive of both endpoints.
    pub fn num_days(&self) -> i64 {
        (self.to - self.from).num_days() + 1
    }

    /// Iterates every date in the range in ascending order.
    pub fn iter_days(&self) -> impl Iterator<Item = NaiveDate> {
        self.from.iter_days().take(self.num_days() as usize)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }

    /// Query parameters for the events API (`from`/`to` as `YYYY-MM-DD`).
    pub fn query_params(&self) -> [(&'static str, String); 2] {
        [("from", self.from.to_string()), ("to", self.to.to_string())]
    }
}

/// Fixed configuration for a single pipeline run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub endpoint: String,
    pub range: DateRange,
    pub chart_path: PathBuf,
}
