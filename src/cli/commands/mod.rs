pub mod chart;
pub mod config;
pub mod export;
pub mod init;
pub mod logs;
pub mod options;
pub mod today;
pub mod totals;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::clock::{ClockSource, FixedClock, SystemClock};
use crate::core::time_range::MalformedDate;
use crate::errors::{AppError, AppResult};
use crate::models::TimeLogRecord;
use crate::source::SnapshotSource;
use crate::ui::messages::warning;
use crate::utils::date::parse_date;

/// Snapshot + clock every analysis command works on.
pub(crate) struct Session {
    pub records: Vec<TimeLogRecord>,
    pub clock: Box<dyn ClockSource>,
}

pub(crate) fn open_session(cli: &Cli, cfg: &Config) -> AppResult<Session> {
    let clock = resolve_clock(cli.now.as_deref())?;
    let source = SnapshotSource::resolve(cli.snapshot.as_deref(), &cfg.database);
    let records = source.load()?;
    Ok(Session { records, clock })
}

fn resolve_clock(now: Option<&str>) -> AppResult<Box<dyn ClockSource>> {
    match now {
        Some(s) => {
            let d = parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?;
            Ok(Box::new(FixedClock::at_date(d)))
        }
        None => Ok(Box::new(SystemClock)),
    }
}

/// Malformed dates never abort a pass; they are listed once per command.
pub(crate) fn report_malformed(malformed: &[MalformedDate]) {
    if malformed.is_empty() {
        return;
    }
    let list: Vec<String> = malformed
        .iter()
        .map(|m| format!("{} ({:?})", m.record_id, m.raw))
        .collect();
    warning(format!(
        "{} record(s) skipped, unreadable date: {}",
        malformed.len(),
        list.join(", ")
    ));
}
