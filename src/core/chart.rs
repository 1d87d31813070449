//! Chart-ready projections of a filtered record set.

use crate::core::aggregate::{accumulate, group_label};
use crate::core::label_totals::{LabelSet, LabelTotals};
use crate::models::{Grouping, TimeLogRecord};
use crate::utils::date::format_date;
use chrono::NaiveDate;
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use std::borrow::Cow;
use std::collections::HashMap;

// ---------------------------
// Distribution (pie)
// ---------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionSlice {
    pub label: String,
    pub minutes: u64,
}

/// Proportional view. An empty record set is `NoData`, never an empty series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "slices", rename_all = "snake_case")]
pub enum Distribution {
    NoData,
    Series(Vec<DistributionSlice>),
}

impl Distribution {
    pub fn is_no_data(&self) -> bool {
        matches!(self, Distribution::NoData)
    }

    pub fn slices(&self) -> &[DistributionSlice] {
        match self {
            Distribution::NoData => &[],
            Distribution::Series(s) => s,
        }
    }

    pub fn total(&self) -> u64 {
        self.slices().iter().map(|s| s.minutes).sum()
    }

    /// Fraction (0.0..=1.0) of the total held by `label`.
    pub fn share(&self, label: &str) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        self.slices()
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.minutes as f64 / total as f64)
    }
}

pub fn distribution<'a, I>(records: I, grouping: Grouping) -> Distribution
where
    I: IntoIterator<Item = &'a TimeLogRecord>,
{
    let totals = accumulate(records, grouping);
    if totals.is_empty() {
        return Distribution::NoData;
    }

    Distribution::Series(
        totals
            .into_entries()
            .into_iter()
            .map(|(label, minutes)| DistributionSlice { label, minutes })
            .collect(),
    )
}

// ---------------------------
// Stacked series (bars per date)
// ---------------------------

/// Key of the date entry in a serialized stacked row.
pub const DATE_COLUMN: &str = "date";

const RENAMED_SUFFIX: &str = " (label)";

/// Column name of a group in the stacked series.
///
/// A group whose name would shadow the row's `date` key gets a
/// ` (label)` suffix. Names already carrying the suffix after `date` get one
/// more, so two distinct groups never share a column.
pub fn stacked_column(label: &str) -> Cow<'_, str> {
    let mut stem = label;
    while let Some(s) = stem.strip_suffix(RENAMED_SUFFIX) {
        stem = s;
    }
    if stem == DATE_COLUMN {
        Cow::Owned(format!("{label}{RENAMED_SUFFIX}"))
    } else {
        Cow::Borrowed(label)
    }
}

/// Minutes per group on one date. Labels with nothing logged that day are
/// absent; read them through [`StackedRow::minutes_for`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackedRow {
    pub date: NaiveDate,
    pub values: LabelTotals,
}

impl StackedRow {
    pub fn minutes_for(&self, label: &str) -> u64 {
        self.values.get(label).unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.values.total()
    }
}

impl Serialize for StackedRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len() + 1))?;
        map.serialize_entry(DATE_COLUMN, &format_date(&self.date))?;
        for (label, minutes) in self.values.iter() {
            map.serialize_entry(label, &minutes)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StackedSeries {
    /// Every label seen anywhere in the set, first-seen order.
    pub labels: Vec<String>,
    /// One row per date, ascending.
    pub rows: Vec<StackedRow>,
}

impl StackedSeries {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub fn stacked<'a, I>(records: I, grouping: Grouping) -> StackedSeries
where
    I: IntoIterator<Item = &'a TimeLogRecord>,
{
    let mut rows: Vec<StackedRow> = Vec::new();
    let mut row_of_date: HashMap<NaiveDate, usize> = HashMap::new();
    let mut labels = LabelSet::default();

    for record in records {
        let Some(date) = record.calendar_date() else {
            tracing::warn!(record = %record.id, date = %record.date, "malformed record date, skipped in stacked series");
            continue;
        };
        let column = stacked_column(group_label(record, grouping));
        labels.insert(&column);

        let i = *row_of_date.entry(date).or_insert_with(|| {
            rows.push(StackedRow {
                date,
                values: LabelTotals::new(),
            });
            rows.len() - 1
        });
        rows[i].values.add(&column, record.duration_minutes());
    }

    sort_chronologically(&mut rows);

    StackedSeries {
        labels: labels.into_vec(),
        rows,
    }
}

/// Snapshots usually arrive newest-first; a time axis must run oldest-first.
pub fn sort_chronologically(rows: &mut [StackedRow]) {
    rows.sort_by_key(|r| r.date);
}
