use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Supplies the reference "now" every time-relative computation uses.
pub trait ClockSource {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Local wall clock. Only the binary should construct this.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Frozen instant (tests, `--now`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    pub fn at_date(date: NaiveDate) -> Self {
        Self(date.and_time(NaiveTime::MIN))
    }
}

impl ClockSource for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
