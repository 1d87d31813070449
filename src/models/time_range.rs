use crate::errors::AppError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named calendar-relative window a record date is tested against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TimeRange {
    #[default]
    All,
    Today,
    Yesterday,
    LastTwoDays,
    LastWeek,
    LastTwoWeeks,
    LastTwoMonths,
}

impl TimeRange {
    pub const ALL: [TimeRange; 7] = [
        TimeRange::All,
        TimeRange::Today,
        TimeRange::Yesterday,
        TimeRange::LastTwoDays,
        TimeRange::LastWeek,
        TimeRange::LastTwoWeeks,
        TimeRange::LastTwoMonths,
    ];

    /// Human label, as shown in the range selector.
    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::All => "All",
            TimeRange::Today => "Today",
            TimeRange::Yesterday => "Yesterday",
            TimeRange::LastTwoDays => "Last two days",
            TimeRange::LastWeek => "Last week",
            TimeRange::LastTwoWeeks => "Last two weeks",
            TimeRange::LastTwoMonths => "Last two months",
        }
    }

    /// Accepts both the human labels ("Last two days", "" for All) and
    /// the kebab-case CLI values ("last-two-days").
    pub fn from_label(s: &str) -> Option<Self> {
        let norm = s.trim().to_lowercase().replace(['-', '_'], " ");
        match norm.as_str() {
            "" | "all" => Some(TimeRange::All),
            "today" => Some(TimeRange::Today),
            "yesterday" => Some(TimeRange::Yesterday),
            "last two days" => Some(TimeRange::LastTwoDays),
            "last week" => Some(TimeRange::LastWeek),
            "last two weeks" => Some(TimeRange::LastTwoWeeks),
            "last two months" => Some(TimeRange::LastTwoMonths),
            _ => None,
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeRange {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeRange::from_label(s).ok_or_else(|| AppError::InvalidTimeRange(s.to_string()))
    }
}
