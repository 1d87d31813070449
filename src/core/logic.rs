use crate::core::aggregate::{self, AnalysisTotals};
use crate::core::chart::{self, Distribution, StackedSeries};
use crate::core::clock::ClockSource;
use crate::core::filter::{self, FilterOutcome, FilterState};
use crate::errors::AppResult;
use crate::models::{Grouping, TimeLogRecord};
use chrono::NaiveDate;

/// Everything the analysis view shows for one filter state.
#[derive(Debug, Clone)]
pub struct AnalysisReport<'a> {
    pub reference_date: NaiveDate,
    pub grouping: Grouping,
    pub filtered: FilterOutcome<'a>,
    pub totals: AnalysisTotals,
    pub distribution: Distribution,
    pub stacked: StackedSeries,
}

pub struct Analysis;

impl Analysis {
    /// Full recomputation from the snapshot; nothing is cached between calls.
    pub fn run<'a>(
        records: &'a [TimeLogRecord],
        state: &FilterState,
        grouping: Grouping,
        clock: &dyn ClockSource,
    ) -> AppResult<AnalysisReport<'a>> {
        let filtered = filter::filter(records, state, clock)?;

        let totals = aggregate::totals(filtered.iter());
        let distribution = chart::distribution(filtered.iter(), grouping);
        let stacked = chart::stacked(filtered.iter(), grouping);

        Ok(AnalysisReport {
            reference_date: clock.today(),
            grouping,
            filtered,
            totals,
            distribution,
            stacked,
        })
    }
}
