use crate::core::clock::ClockSource;
use crate::models::{HoursMinutes, TimeLogRecord};
use chrono::NaiveDate;
use serde::Serialize;

pub const DEFAULT_DAILY_TARGET_MINUTES: u64 = 8 * 60;

/// Today's logged total against the daily goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub total_minutes: u64,
    pub target_minutes: u64,
    pub goal_reached: bool,
}

impl DailySummary {
    pub fn split(&self) -> HoursMinutes {
        HoursMinutes::from(self.total_minutes)
    }

    pub fn remaining_minutes(&self) -> u64 {
        self.target_minutes.saturating_sub(self.total_minutes)
    }
}

pub fn daily_summary<'a, I>(records: I, clock: &dyn ClockSource, target_minutes: u64) -> DailySummary
where
    I: IntoIterator<Item = &'a TimeLogRecord>,
{
    let today = clock.today();
    let total_minutes = records
        .into_iter()
        .filter(|r| r.calendar_date() == Some(today))
        .map(TimeLogRecord::duration_minutes)
        .sum();

    DailySummary {
        date: today,
        total_minutes,
        target_minutes,
        goal_reached: total_minutes >= target_minutes,
    }
}
