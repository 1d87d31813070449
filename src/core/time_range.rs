//! Calendar-window membership of record dates.
//!
//! All comparisons are between calendar dates; the time-of-day part of
//! "now" never matters.

use crate::models::{TimeLogRecord, TimeRange};
use chrono::{Days, Months, NaiveDate, NaiveDateTime};
use serde::Serialize;

/// A record whose `date` could not be read as a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MalformedDate {
    pub record_id: String,
    pub raw: String,
}

/// Exclusive lower bound of the rolling windows.
///
/// `None` for the exact-match windows and for `All`, or when the
/// subtraction falls off chrono's calendar.
pub fn lower_bound(today: NaiveDate, window: TimeRange) -> Option<NaiveDate> {
    match window {
        TimeRange::LastTwoDays => today.checked_sub_days(Days::new(2)),
        TimeRange::LastWeek => today.checked_sub_days(Days::new(7)),
        TimeRange::LastTwoWeeks => today.checked_sub_days(Days::new(14)),
        // month-end clamped: 2024-04-30 -> 2024-02-29
        TimeRange::LastTwoMonths => today.checked_sub_months(Months::new(2)),
        TimeRange::All | TimeRange::Today | TimeRange::Yesterday => None,
    }
}

pub fn includes(record_date: NaiveDate, now: NaiveDateTime, window: TimeRange) -> bool {
    let today = now.date();

    match window {
        TimeRange::All => true,
        TimeRange::Today => record_date == today,
        TimeRange::Yesterday => today.pred_opt() == Some(record_date),
        // strictly after: the boundary day itself is out
        _ => lower_bound(today, window).is_none_or(|bound| record_date > bound),
    }
}

/// Parse the record date and test it. A malformed date is outside every
/// window, `All` included.
pub fn classify(
    record: &TimeLogRecord,
    now: NaiveDateTime,
    window: TimeRange,
) -> Result<bool, MalformedDate> {
    match record.calendar_date() {
        Some(d) => Ok(includes(d, now, window)),
        None => Err(MalformedDate {
            record_id: record.id.clone(),
            raw: record.date.clone(),
        }),
    }
}
