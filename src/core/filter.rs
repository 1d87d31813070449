//! Record filter pipeline.
//!
//! Four predicates, AND-ed and evaluated in a fixed order: time window,
//! minimum duration, category selection, occupation selection. The pass
//! is stable and never fails on a single bad record.

use crate::core::clock::ClockSource;
use crate::core::time_range::{self, MalformedDate};
use crate::errors::{AppError, AppResult};
use crate::models::{TimeLogRecord, TimeRange};
use serde::{Deserialize, Serialize};
use std::iter::Copied;
use std::slice::Iter;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub window: TimeRange,
    pub minimum_duration_minutes: i64,
    #[serde(default)]
    pub selected_category_ids: Vec<String>,
    #[serde(default)]
    pub selected_occupation_ids: Vec<String>,
}

impl FilterState {
    pub fn new(window: TimeRange) -> Self {
        Self {
            window,
            ..Self::default()
        }
    }

    pub fn with_minimum_duration(mut self, minutes: i64) -> Self {
        self.minimum_duration_minutes = minutes;
        self
    }

    pub fn with_categories<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_category_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_occupations<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_occupation_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Precondition check run before any record is looked at.
    pub fn validate(&self) -> AppResult<()> {
        if self.minimum_duration_minutes < 0 {
            return Err(AppError::InvalidFilterState(format!(
                "minimum duration must be >= 0 minutes, got {}",
                self.minimum_duration_minutes
            )));
        }
        Ok(())
    }
}

/// Result of one filter pass.
#[derive(Debug, Clone, Default)]
pub struct FilterOutcome<'a> {
    /// Surviving records, in input order.
    pub records: Vec<&'a TimeLogRecord>,
    /// Records dropped because their date could not be parsed.
    pub malformed: Vec<MalformedDate>,
}

impl<'a> FilterOutcome<'a> {
    pub fn iter(&self) -> Copied<Iter<'_, &'a TimeLogRecord>> {
        self.records.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn total_minutes(&self) -> u64 {
        self.iter().map(TimeLogRecord::duration_minutes).sum()
    }
}

pub fn filter<'a, I>(
    records: I,
    state: &FilterState,
    clock: &dyn ClockSource,
) -> AppResult<FilterOutcome<'a>>
where
    I: IntoIterator<Item = &'a TimeLogRecord>,
{
    state.validate()?;

    let now = clock.now();
    let mut outcome = FilterOutcome::default();

    for record in records {
        match time_range::classify(record, now, state.window) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(bad) => {
                tracing::warn!(record = %bad.record_id, date = %bad.raw, "malformed record date, excluded");
                outcome.malformed.push(bad);
                continue;
            }
        }

        if matches_duration(record, state)
            && matches_category(record, state)
            && matches_occupation(record, state)
        {
            outcome.records.push(record);
        }
    }

    Ok(outcome)
}

fn matches_duration(record: &TimeLogRecord, state: &FilterState) -> bool {
    // validate() guarantees the minimum is non-negative
    record.duration_minutes() >= state.minimum_duration_minutes as u64
}

fn matches_category(record: &TimeLogRecord, state: &FilterState) -> bool {
    if state.selected_category_ids.is_empty() {
        return true;
    }
    record
        .resolved_category_id()
        .is_some_and(|id| state.selected_category_ids.iter().any(|s| s == id))
}

fn matches_occupation(record: &TimeLogRecord, state: &FilterState) -> bool {
    state.selected_occupation_ids.is_empty()
        || state
            .selected_occupation_ids
            .iter()
            .any(|s| *s == record.occupation_id)
}
