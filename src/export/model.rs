// src/export/model.rs

use crate::core::aggregate::{AnalysisTotals, GroupTotal};
use crate::core::chart::StackedSeries;
use crate::models::{Grouping, TimeLogRecord};
use crate::utils::date::format_date;
use serde::Serialize;

/// Flat record row for CSV.
#[derive(Serialize, Clone, Debug)]
pub struct LogExport {
    pub id: String,
    pub date: String,
    pub occupation_id: String,
    pub occupation: String,
    pub category: String,
    pub hours: u32,
    pub minutes: u32,
    pub duration_minutes: u64,
}

impl From<&TimeLogRecord> for LogExport {
    fn from(r: &TimeLogRecord) -> Self {
        Self {
            id: r.id.clone(),
            date: r.date.clone(),
            occupation_id: r.occupation_id.clone(),
            occupation: r.occupation_label().to_string(),
            category: r.category_label().to_string(),
            hours: r.hours,
            minutes: r.minutes,
            duration_minutes: r.duration_minutes(),
        }
    }
}

/// `{label, hours, minutes}` row, with the raw total kept alongside.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct TotalExport {
    pub grouping: String,
    pub label: String,
    pub hours: u64,
    pub minutes: u64,
    pub total_minutes: u64,
}

impl TotalExport {
    fn new(grouping: Grouping, t: &GroupTotal) -> Self {
        let split = t.split();
        Self {
            grouping: grouping.as_str().to_string(),
            label: t.label.clone(),
            hours: split.hours,
            minutes: split.minutes,
            total_minutes: t.total_minutes,
        }
    }
}

/// Both groupings, category rows first (CSV).
pub(crate) fn totals_to_rows(totals: &AnalysisTotals) -> Vec<TotalExport> {
    let cat = totals
        .by_category
        .iter()
        .map(|t| TotalExport::new(Grouping::Category, t));
    let occ = totals
        .by_occupation
        .iter()
        .map(|t| TotalExport::new(Grouping::Occupation, t));
    cat.chain(occ).collect()
}

#[derive(Serialize, Debug)]
pub(crate) struct TotalsDocument {
    pub by_category: Vec<TotalExport>,
    pub by_occupation: Vec<TotalExport>,
}

pub(crate) fn totals_to_document(totals: &AnalysisTotals) -> TotalsDocument {
    let (by_category, by_occupation) = totals_to_rows(totals)
        .into_iter()
        .partition(|t| t.grouping == Grouping::Category.as_str());
    TotalsDocument {
        by_category,
        by_occupation,
    }
}

/// Header `date,<label>...` then one zero-filled line per date.
pub(crate) fn stacked_to_table(series: &StackedSeries) -> (Vec<String>, Vec<Vec<String>>) {
    let mut headers = vec!["date".to_string()];
    headers.extend(series.labels.iter().cloned());

    let rows = series
        .rows
        .iter()
        .map(|row| {
            let mut cells = vec![format_date(&row.date)];
            cells.extend(series.labels.iter().map(|l| row.minutes_for(l).to_string()));
            cells
        })
        .collect();

    (headers, rows)
}
